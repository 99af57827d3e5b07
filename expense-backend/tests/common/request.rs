// tests/common/request.rs
use axum::{
    body::{self, Body},
    http::{header, Method, Request, Response},
};
use serde_json::Value;

/// JSONボディ付き（または無し）のHTTPリクエストを作成
pub fn json_request(method: &str, uri: &str, body: Option<&Value>) -> Request<Body> {
    let method = Method::from_bytes(method.as_bytes()).unwrap();
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::ACCEPT, "application/json");

    match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(value).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// 生の文字列ボディでリクエストを作成（不正なJSONの検証用）
pub fn raw_json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::from_bytes(method.as_bytes()).unwrap())
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// レスポンスボディをJSONとして読み取る
pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// レスポンスボディをバイト列として読み取る
pub async fn read_bytes(response: Response<Body>) -> Vec<u8> {
    body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}
