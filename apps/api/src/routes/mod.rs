pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::render::handlers as render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Generation API
        .route("/api/tones", get(generation::handle_list_tones))
        .route("/api/generate", post(generation::handle_generate))
        // Render API
        .route("/api/render", post(render::handle_render))
        .route("/api/render/upload", post(render::handle_render_upload))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine as _;
    use image::{ImageFormat, Rgba, RgbaImage};
    use serde_json::{json, Value};
    use std::io::Cursor;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::layout::FontSet;

    fn test_state() -> AppState {
        AppState {
            config: Config {
                max_upload_bytes: 64 * 1024,
                ..Config::default()
            },
            fonts: Arc::new(FontSet::static_metrics()),
        }
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(request: Request<Body>) -> Response {
        build_router(test_state()).oneshot(request).await.unwrap()
    }

    async fn read_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn tiny_png() -> Vec<u8> {
        let img = RgbaImage::from_pixel(4, 4, Rgba([200, 10, 10, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    fn valid_brief() -> Value {
        json!({
            "topic": "Product-led onboarding flows",
            "targetAudience": "SaaS revenue leaders",
            "outcome": "Drive adoption of our onboarding playbook",
            "tone": "energetic"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let response = send(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["status"], "ok");
        assert!(body["fonts"].as_str().unwrap().contains("Inter"));
    }

    #[tokio::test]
    async fn test_list_tones() {
        let response = send(
            Request::builder()
                .uri("/api/tones")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        let body = read_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 4);
        assert_eq!(body[1]["value"], "energetic");
        assert_eq!(body[1]["label"], "Energetic");
    }

    #[tokio::test]
    async fn test_generate_returns_full_post() {
        let response = send(json_request("POST", "/api/generate", valid_brief())).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;

        assert_eq!(
            body["headline"],
            "Product-led onboarding flows that Drive adoption of our onboarding playbook"
        );
        assert_eq!(body["talkingPoints"].as_array().unwrap().len(), 3);
        assert_eq!(body["body"].as_array().unwrap().len(), 6);
        assert!(body["body"][1]
            .as_str()
            .unwrap()
            .starts_with("Channel enthusiasm and momentum"));
        assert!(body["hashtags"].as_array().unwrap().len() <= 6);
        assert!(body["palette"]["accent"].as_str().unwrap().starts_with('#'));
    }

    #[tokio::test]
    async fn test_generate_missing_field_is_400() {
        let response = send(json_request(
            "POST",
            "/api/generate",
            json!({ "topic": "x", "targetAudience": "y", "outcome": "z" }),
        ))
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["error"], "Missing required fields.");
    }

    #[tokio::test]
    async fn test_generate_blank_field_is_400() {
        let response = send(json_request(
            "POST",
            "/api/generate",
            json!({ "topic": "x", "targetAudience": " ", "outcome": "z", "tone": "professional" }),
        ))
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["error"], "Provide valid values for every field.");
    }

    #[tokio::test]
    async fn test_generate_malformed_json_is_400() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = send(request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_render_returns_png_download() {
        let post = read_json(send(json_request("POST", "/api/generate", valid_brief())).await).await;
        let logo = format!("data:image/png;base64,{}", BASE64.encode(tiny_png()));

        let response = send(json_request(
            "POST",
            "/api/render",
            json!({ "post": post, "logo": logo }),
        ))
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
        assert!(response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .contains("linkedin-post.png"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let image = image::load_from_memory(&bytes).unwrap();
        assert_eq!((image.width(), image.height()), (1080, 1080));
    }

    #[tokio::test]
    async fn test_render_with_broken_logo_still_renders() {
        let post = read_json(send(json_request("POST", "/api/generate", valid_brief())).await).await;
        let response = send(json_request(
            "POST",
            "/api/render",
            json!({ "post": post, "logo": "data:image/png;base64,AAAA" }),
        ))
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_render_rejects_bad_palette() {
        let mut post =
            read_json(send(json_request("POST", "/api/generate", valid_brief())).await).await;
        post["palette"]["gradientFrom"] = json!("blue");
        let response = send(json_request("POST", "/api/render", json!({ "post": post }))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    fn multipart_body(boundary: &str, fields: &[(&str, &str)], logo: Option<&[u8]>) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some(bytes) = logo {
            body.extend_from_slice(
                format!(
                    "--{boundary}\r\nContent-Disposition: form-data; name=\"logo\"; filename=\"logo.png\"\r\nContent-Type: image/png\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
        body
    }

    fn multipart_request(body: Vec<u8>, boundary: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/render/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_upload_renders_png_with_logo() {
        let boundary = "XBOUNDARY";
        let png = tiny_png();
        let body = multipart_body(
            boundary,
            &[
                ("topic", "Pricing"),
                ("targetAudience", "CFOs"),
                ("outcome", "margin"),
                ("tone", "analytical"),
            ],
            Some(&png),
        );
        let response = send(multipart_request(body, boundary)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
    }

    #[tokio::test]
    async fn test_upload_ignores_unknown_field_and_empty_logo() {
        let boundary = "XBOUNDARY";
        let body = multipart_body(
            boundary,
            &[
                ("topic", "Pricing"),
                ("junk", "not part of the form"),
                ("targetAudience", "CFOs"),
                ("outcome", "margin"),
                ("tone", "analytical"),
            ],
            Some(&[]),
        );
        let response = send(multipart_request(body, boundary)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let image = image::load_from_memory(&bytes).unwrap();
        assert_eq!((image.width(), image.height()), (1080, 1080));
    }

    #[tokio::test]
    async fn test_upload_without_multipart_body_is_400() {
        let response = send(json_request("POST", "/api/render/upload", valid_brief())).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid multipart body"));
    }

    #[tokio::test]
    async fn test_upload_missing_fields_is_400() {
        let boundary = "XBOUNDARY";
        let body = multipart_body(boundary, &[("topic", "Pricing")], None);
        let response = send(multipart_request(body, boundary)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["code"], "MISSING_FIELDS");
    }

    #[tokio::test]
    async fn test_upload_over_limit_is_413() {
        let boundary = "XBOUNDARY";
        let oversized = vec![0u8; 128 * 1024];
        let body = multipart_body(
            boundary,
            &[
                ("topic", "Pricing"),
                ("targetAudience", "CFOs"),
                ("outcome", "margin"),
                ("tone", "analytical"),
            ],
            Some(&oversized),
        );
        let response = send(multipart_request(body, boundary)).await;
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
