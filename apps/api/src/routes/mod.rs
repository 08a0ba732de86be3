pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as cv;
use crate::skills::handlers as skills;
use crate::state::AppState;
use crate::summary::handlers as summary;

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // CV analysis
        .route("/api/v1/cv/analyze", post(cv::handle_analyze))
        .route(
            "/api/v1/cv/upload",
            post(cv::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/cv/validate", post(cv::handle_validate))
        // Professional summary
        .route(
            "/api/v1/summary/generate",
            post(summary::handle_generate_summary),
        )
        .route("/api/v1/summary/skills", post(summary::handle_skill_summary))
        .route(
            "/api/v1/summary/experience",
            post(summary::handle_experience_summary),
        )
        .route("/api/v1/summary/status", get(summary::handle_summary_status))
        // Skills catalog
        .route("/api/v1/skills/search", get(skills::handle_search_skills))
        .route(
            "/api/v1/skills/suggestions",
            get(skills::handle_skill_suggestions),
        )
        .route("/api/v1/skills/trending", get(skills::handle_trending_skills))
        .route("/api/v1/skills/validate", post(skills::handle_validate_skill))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::models::{ExperienceEntry, ExtractedRecord};
    use crate::config::Config;
    use crate::errors::AppError;
    use crate::summary::generator::{
        GeneratedSummary, SkillInput, SummaryOptions, SummaryWriter, UnavailableSummaryWriter,
        WriterStatus,
    };

    const BOUNDARY: &str = "vitae-test-boundary";
    const CONTACT_CV: &str = "Jane Doe\njane.doe@example.com\n(555) 111-2222\nSoftware Engineer";

    struct CannedSummaryWriter;

    #[async_trait]
    impl SummaryWriter for CannedSummaryWriter {
        fn status(&self) -> WriterStatus {
            WriterStatus {
                available: true,
                model: Some("canned".to_string()),
                message: "ok".to_string(),
            }
        }

        async fn generate(
            &self,
            record: &ExtractedRecord,
            options: &SummaryOptions,
        ) -> Result<GeneratedSummary, AppError> {
            Ok(GeneratedSummary {
                summary: format!(
                    "{} summary for {}.",
                    options.tone.as_str(),
                    record.personal_info.name.as_deref().unwrap_or("candidate")
                ),
                success: true,
                suggestions: Vec::new(),
            })
        }

        async fn generate_from_skills(
            &self,
            skills: &[SkillInput],
            target_role: Option<&str>,
        ) -> Result<GeneratedSummary, AppError> {
            Ok(GeneratedSummary {
                summary: format!(
                    "{} skills for {}.",
                    skills.len(),
                    target_role.unwrap_or("any role")
                ),
                success: true,
                suggestions: Vec::new(),
            })
        }

        async fn generate_from_experience(
            &self,
            experience: &[ExperienceEntry],
        ) -> Result<GeneratedSummary, AppError> {
            Ok(GeneratedSummary {
                summary: format!("{} roles.", experience.len()),
                success: true,
                suggestions: Vec::new(),
            })
        }
    }

    fn app_with(config: Config, writer: Arc<dyn SummaryWriter>) -> Router {
        build_router(AppState {
            config,
            summary_writer: writer,
        })
    }

    fn app() -> Router {
        app_with(Config::default(), Arc::new(UnavailableSummaryWriter))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn upload_request(field: &str, file_name: &str, content_type: &str, data: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/v1/cv/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "vitae-api");
    }

    #[tokio::test]
    async fn test_analyze_text() {
        let (status, body) = send(
            app(),
            json_request("/api/v1/cv/analyze", json!({ "text": CONTACT_CV })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["extractedData"]["personalInfo"]["name"], "Jane Doe");
        assert_eq!(body["extractedData"]["experience"], json!([]));
        assert_eq!(body["score"]["completeness"], 50);
        assert_eq!(body["suggestions"][0]["type"], "missing");
        assert_eq!(body["suggestions"][0]["priority"], "high");
    }

    #[tokio::test]
    async fn test_analyze_short_text_is_unprocessable() {
        let (status, body) = send(
            app(),
            json_request("/api/v1/cv/analyze", json!({ "text": "Jane Doe" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "INSUFFICIENT_CONTENT");
    }

    #[tokio::test]
    async fn test_analyze_blank_text_is_unprocessable() {
        let (status, body) =
            send(app(), json_request("/api/v1/cv/analyze", json!({ "text": "  \n\t " }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "INSUFFICIENT_CONTENT");
        assert_eq!(
            body["error"]["message"],
            "file contains too little text to analyze"
        );
    }

    #[tokio::test]
    async fn test_upload_text_file() {
        let request = upload_request("file", "cv.txt", "text/plain", CONTACT_CV.as_bytes());
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fileName"], "cv.txt");
        assert_eq!(body["fileType"], "text");
        assert_eq!(body["fileSize"], CONTACT_CV.len());
        assert_eq!(body["extractedText"], CONTACT_CV);
        assert_eq!(
            body["analysis"]["extractedData"]["personalInfo"]["email"],
            "jane.doe@example.com"
        );
    }

    #[tokio::test]
    async fn test_upload_image_rejected() {
        let request = upload_request("file", "cv.png", "image/png", b"\x89PNG\r\n");
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_MEDIA_TYPE");
    }

    #[tokio::test]
    async fn test_upload_unknown_type_rejected() {
        let request = upload_request("file", "cv.exe", "application/octet-stream", b"MZ");
        let (status, _) = send(app(), request).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_upload_over_limit() {
        let config = Config {
            max_upload_bytes: 16,
            ..Config::default()
        };
        let app = app_with(config, Arc::new(UnavailableSummaryWriter));
        let request = upload_request("file", "cv.txt", "text/plain", CONTACT_CV.as_bytes());
        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_upload_too_little_text() {
        let request = upload_request("file", "cv.txt", "text/plain", b"Jane Doe");
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["error"]["message"],
            "file contains too little text to analyze"
        );
    }

    #[tokio::test]
    async fn test_upload_requires_file_field() {
        let request = upload_request("attachment", "cv.txt", "text/plain", CONTACT_CV.as_bytes());
        let (status, _) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_summary_status_without_key() {
        let (status, body) = send(app(), get_request("/api/v1/summary/status")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["available"], false);
    }

    #[tokio::test]
    async fn test_summary_unavailable_without_key() {
        let payload = json!({ "record": { "personalInfo": { "name": "Jane Doe" } } });
        let (status, body) = send(app(), json_request("/api/v1/summary/generate", payload)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "AI_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_summary_with_writer() {
        let app = app_with(Config::default(), Arc::new(CannedSummaryWriter));
        let payload = json!({
            "record": { "personalInfo": { "name": "Jane Doe" }, "skills": ["Rust"] },
            "options": { "tone": "executive" }
        });
        let (status, body) = send(app, json_request("/api/v1/summary/generate", payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"], "executive summary for Jane Doe.");
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn test_summary_rejects_empty_record() {
        let app = app_with(Config::default(), Arc::new(CannedSummaryWriter));
        let (status, _) = send(
            app,
            json_request("/api/v1/summary/generate", json!({ "record": {} })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_skill_summary_endpoint() {
        let app = app_with(Config::default(), Arc::new(CannedSummaryWriter));
        let payload = json!({
            "skills": ["Rust", { "name": "Go", "level": "Expert" }, " "],
            "targetRole": "Backend Engineer"
        });
        let (status, body) = send(app, json_request("/api/v1/summary/skills", payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"], "2 skills for Backend Engineer.");

        let (status, _) = send(
            app_with(Config::default(), Arc::new(CannedSummaryWriter)),
            json_request("/api/v1/summary/skills", json!({ "skills": [] })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            self::app(),
            json_request("/api/v1/summary/skills", json!({ "skills": ["Rust"] })),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_experience_summary_endpoint() {
        let app = app_with(Config::default(), Arc::new(CannedSummaryWriter));
        let payload = json!({
            "experience": [{ "position": "Senior Developer", "company": "Acme Corp", "duration": "2019-2023" }]
        });
        let (status, body) =
            send(app, json_request("/api/v1/summary/experience", payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"], "1 roles.");

        let (status, _) = send(
            app_with(Config::default(), Arc::new(CannedSummaryWriter)),
            json_request("/api/v1/summary/experience", json!({ "experience": [] })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_validate_record_endpoint() {
        let (status, body) = send(
            app(),
            json_request("/api/v1/cv/validate", json!({ "record": {} })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isValid"], false);
        assert_eq!(body["score"], 12);
        assert_eq!(body["warnings"].as_array().map(Vec::len), Some(4));
    }

    #[tokio::test]
    async fn test_skills_endpoints() {
        let (status, body) = send(app(), get_request("/api/v1/skills/search?q=supa")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["Supabase"]));

        let (_, body) = send(
            app(),
            get_request("/api/v1/skills/suggestions?category=Databases&limit=2"),
        )
        .await;
        assert_eq!(body, json!(["PostgreSQL", "MongoDB"]));

        let (_, body) = send(app(), get_request("/api/v1/skills/trending")).await;
        assert!(body.as_array().is_some_and(|a| !a.is_empty()));
    }

    #[tokio::test]
    async fn test_validate_skill_endpoint() {
        let (status, body) = send(
            app(),
            json_request(
                "/api/v1/skills/validate",
                json!({ "skill": "PostgreSQL", "professionalTitle": "Backend Developer" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isRelevant"], true);
        assert_eq!(body["relevanceScore"], 10);

        let (status, _) = send(
            app(),
            json_request("/api/v1/skills/validate", json!({ "skill": " " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
