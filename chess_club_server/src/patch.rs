use serde::{Deserialize, Serialize, Deserializer};

/// A field of a partial update. Absent fields stay `NotSet`; an explicit
/// `null` deserializes as `Set(None)` when `V` is an `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PatchValue<V> {
    NotSet,
    Set(V)
}

impl<V> PatchValue<V> {
    pub fn into_option(self) -> Option<V> {
        match self {
            PatchValue::NotSet => None,
            PatchValue::Set(v) => Some(v),
        }
    }
}

impl<T> Default for PatchValue<T> {
    fn default() -> Self {
        PatchValue::NotSet
    }
}

impl<'de, T> Deserialize<'de> for PatchValue<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(|v| PatchValue::Set(v))
    }
}


#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::PatchValue;

    #[derive(Deserialize)]
    struct Update {
        #[serde(default)]
        label: PatchValue<Option<String>>,
        #[serde(default)]
        round_number: PatchValue<i32>,
    }

    #[test]
    fn test_absent_null_and_value() {
        let update: Update = serde_json::from_str("{}").unwrap();
        assert_eq!(update.label, PatchValue::NotSet);
        assert_eq!(update.round_number, PatchValue::NotSet);

        let update: Update = serde_json::from_str(r#"{"label": null, "round_number": 4}"#).unwrap();
        assert_eq!(update.label, PatchValue::Set(None));
        assert_eq!(update.round_number.into_option(), Some(4));
    }
}
