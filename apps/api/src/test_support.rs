//! Shared fixtures for unit and HTTP tests.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

use crate::assistant::resume::test_extractors::EchoExtractor;
use crate::assistant::resume::TextExtractor;
use crate::auth::{sign_token, TokenVerifier};
use crate::config::Config;
use crate::llm_client::mock::ScriptedCompletion;
use crate::models::profile::{EducationEntry, ExperienceEntry, UserProfile};
use crate::pipeline::catalog::JobCatalog;
use crate::profiles::memory::InMemoryProfileStore;
use crate::routes::build_router;
use crate::state::AppState;

pub const TEST_SECRET: &str = "test-secret";

/// A complete profile whose every field mentions `name`, so leaks are easy to spot.
pub fn profile_named(name: &str) -> UserProfile {
    UserProfile {
        id: Uuid::new_v4(),
        name: name.to_string(),
        bio: Some(format!("{name} builds distributed systems.")),
        skills: vec![format!("{name}-Rust"), format!("{name}-SQL")],
        experience: vec![ExperienceEntry {
            role: "Engineer".to_string(),
            company: format!("{name} Corp"),
            duration: "3 years".to_string(),
        }],
        education: vec![EducationEntry {
            degree: "BSc".to_string(),
            institution: format!("{name} University"),
            field: Some("Computer Science".to_string()),
        }],
        interests: vec![format!("{name}-hiking")],
        connections: vec![],
    }
}

pub fn test_config(upload_dir: &Path) -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        openai_api_key: "unused".to_string(),
        openai_base_url: "http://127.0.0.1:9".to_string(),
        openai_model: "test-model".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        llm_timeout: Duration::from_secs(5),
        upload_dir: upload_dir.to_path_buf(),
        job_catalog_path: None,
        port: 0,
        rust_log: "debug".to_string(),
    }
}

/// Router wired to in-memory collaborators.
pub struct TestApp {
    pub router: Router,
    pub completion: Arc<ScriptedCompletion>,
    pub upload_dir: TempDir,
}

impl TestApp {
    pub fn new(profiles: Vec<UserProfile>, completion: ScriptedCompletion) -> Self {
        Self::with_extractor(profiles, completion, Arc::new(EchoExtractor))
    }

    pub fn with_extractor(
        profiles: Vec<UserProfile>,
        completion: ScriptedCompletion,
        extractor: Arc<dyn TextExtractor>,
    ) -> Self {
        let upload_dir = tempfile::tempdir().unwrap();
        let completion = Arc::new(completion);
        let state = AppState {
            profiles: Arc::new(InMemoryProfileStore::new(profiles)),
            completion: completion.clone(),
            extractor,
            catalog: Arc::new(JobCatalog::builtin()),
            verifier: Arc::new(TokenVerifier::new(TEST_SECRET)),
            config: test_config(upload_dir.path()),
        };
        Self {
            router: build_router(state),
            completion,
            upload_dir,
        }
    }

    pub fn uploads_left(&self) -> usize {
        std::fs::read_dir(self.upload_dir.path()).unwrap().count()
    }

    pub async fn post_json(&self, uri: &str, user_id: Uuid, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::AUTHORIZATION, bearer(user_id))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn post_file(
        &self,
        uri: &str,
        user_id: Uuid,
        content_type: &str,
        data: &[u8],
    ) -> (StatusCode, Value) {
        const BOUNDARY: &str = "X-CAREERLINK-BOUNDARY";
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"resume.pdf\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::AUTHORIZATION, bearer(user_id))
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }
}

pub fn bearer(user_id: Uuid) -> String {
    format!("Bearer {}", sign_token(TEST_SECRET, user_id))
}
