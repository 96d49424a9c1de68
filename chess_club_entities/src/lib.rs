pub mod schema;
pub mod domain;
pub mod error;
pub mod prelude;
pub mod mock;

pub use error::{ServiceError, ServiceResult};
