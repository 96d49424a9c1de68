use std::borrow::BorrowMut;

use axum::{response::Response, http::Request, body::Body};
use http_body::{combinators::UnsyncBoxBody, Body as _};
use chess_club_entities::mock;
use chess_club_server::state::AppState;
use tower::Service;


#[derive(Default)]
pub struct FixtureOptions {
    pub mock_default_club: bool,
}

pub struct Fixture {
    pub app: axum::Router,
}

pub struct APIResponse {
    response: Response<UnsyncBoxBody<axum::body::Bytes, axum::Error>>,
}

impl APIResponse {
    pub fn status(&self) -> axum::http::StatusCode {
        self.response.status()
    }

    async fn bytes(&mut self) -> Vec<u8> {
        let mut buf = Vec::new();

        let body = self.response.body_mut();

        while let Some(next) = body.data().await {
            buf.extend_from_slice(&next.unwrap());
        }
        buf
    }

    pub async fn json<T: serde::de::DeserializeOwned>(&mut self) -> T {
        let buf = self.bytes().await;
        serde_json::from_slice(&buf).unwrap()
    }

    #[allow(dead_code)]
    pub async fn text(&mut self) -> String {
        let buf = self.bytes().await;
        String::from_utf8(buf).unwrap()
    }
}

impl From<Response<UnsyncBoxBody<axum::body::Bytes, axum::Error>>> for APIResponse {
    fn from(response: Response<UnsyncBoxBody<hyper::body::Bytes, axum::Error>>) -> Self {
        Self {
            response,
        }
    }
}

impl Fixture {
    pub async fn new(options: FixtureOptions) -> Self {
        let state = AppState::new_test_app().await;
        if options.mock_default_club {
            mock::make_mock_club(&state.db).await.unwrap();
        }

        Self {
            app: chess_club_server::app_with_state(state).await,
        }
    }

    #[allow(dead_code)]
    pub async fn default() -> Self {
        Self::new(FixtureOptions::default()).await
    }

    #[allow(dead_code)]
    pub async fn with_mock_club() -> Self {
        Self::new(FixtureOptions { mock_default_club: true }).await
    }

    async fn send(&mut self, request: Request<Body>) -> APIResponse {
        self.app.borrow_mut()
            .call(request)
            .await
            .unwrap().into()
    }

    #[allow(dead_code)]
    pub async fn get(&mut self, path: &str) -> APIResponse {
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    #[allow(dead_code)]
    pub async fn delete(&mut self, path: &str) -> APIResponse {
        let request = Request::builder()
            .method("DELETE")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    #[allow(dead_code)]
    pub async fn post_json<T>(&mut self, path: &str, body: T) -> APIResponse where T: serde::Serialize
    {
        self.send_json("POST", path, serde_json::to_string(&body).unwrap()).await
    }

    #[allow(dead_code)]
    pub async fn put_json<T>(&mut self, path: &str, body: T) -> APIResponse where T: serde::Serialize
    {
        self.send_json("PUT", path, serde_json::to_string(&body).unwrap()).await
    }

    #[allow(dead_code)]
    pub async fn send_json(&mut self, method: &str, path: &str, body: String) -> APIResponse
    {
        let request = Request::builder()
            .method(method)
            .header("Content-Type", "application/json")
            .uri(path)
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }
}
