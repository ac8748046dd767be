//! Test helpers: build AppState and router for integration tests.
//!
//! Run from the workspace root: `cargo test -p coderfest-api`. Tests use the
//! in-memory KV store and a temp-dir local storage backend; no external
//! services are required.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use coderfest_api::services::email::EmailService;
use coderfest_api::setup::routes;
use coderfest_api::state::AppState;
use coderfest_core::{Config, StudentDetail};
use coderfest_db::{KvStore, MemoryKvStore, RegistrationRepository};
use coderfest_storage::{LocalStorage, Storage};
use tempfile::TempDir;

pub const TEST_API_KEY: &str = "coderfest-test-api-key";

/// Test application: server plus the storage directory backing it.
pub struct TestApp {
    pub server: TestServer,
    pub storage_dir: TempDir,
}

/// Config for tests. All values are fixed so parallel tests setting the same
/// variables never disagree; the storage path in the config is unused (tests
/// build LocalStorage directly on a temp dir).
pub fn test_config() -> Config {
    std::env::set_var("API_KEY", TEST_API_KEY);
    std::env::set_var("KV_BACKEND", "memory");
    std::env::set_var("STORAGE_BACKEND", "local");
    std::env::set_var("LOCAL_STORAGE_PATH", "/tmp/coderfest-test-unused");
    std::env::set_var("LOCAL_STORAGE_BASE_URL", "http://localhost:3000/files");
    std::env::set_var("EMAIL_ENABLED", "false");
    Config::from_env().expect("test config from env")
}

/// Setup a test app with an in-memory KV store and no email service.
pub async fn setup_test_app() -> TestApp {
    setup_app_with(Arc::new(MemoryKvStore::new()), None).await
}

/// Setup a test app over an explicit KV store and optional email service.
pub async fn setup_app_with(kv: Arc<dyn KvStore>, email: Option<EmailService>) -> TestApp {
    let config = test_config();

    let storage_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(
            storage_dir.path(),
            "http://localhost:3000/files".to_string(),
        )
        .await
        .expect("Failed to create local storage"),
    );

    let state = AppState {
        config: config.clone(),
        registrations: RegistrationRepository::new(kv),
        storage,
        email,
        is_production: false,
    };

    let router = routes::setup_routes(&config, state)
        .await
        .expect("Failed to setup routes");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        storage_dir,
    }
}

pub fn students(n: usize) -> Vec<StudentDetail> {
    (0..n)
        .map(|i| StudentDetail {
            name: format!("Student {}", i + 1),
            email: format!("student{}@example.com", i + 1),
            contact: format!("98765432{:02}", i),
        })
        .collect()
}

pub fn students_json(n: usize) -> String {
    serde_json::to_string(&students(n)).expect("serialize students")
}

pub fn png_part() -> Part {
    Part::bytes(vec![0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a])
        .file_name("upi-screenshot.png")
        .mime_type("image/png")
}

/// A complete, valid submission for a team of the given size.
pub fn valid_form(team_size: usize) -> MultipartForm {
    MultipartForm::new()
        .add_text("teamName", "Null Pointers")
        .add_text("leaderName", "Asha Verma")
        .add_text("leaderEmail", "asha@example.com")
        .add_text("leaderContact", "9876543210")
        .add_text("collegeName", "SGSIT")
        .add_text("students", students_json(team_size))
        .add_part("paymentProof", png_part())
}

/// Assert a registration id matches `REG-<digits>-<alphanumeric>`.
pub fn assert_registration_id_shape(id: &str) {
    let mut parts = id.splitn(3, '-');
    assert_eq!(parts.next(), Some("REG"), "id: {}", id);
    let millis = parts.next().expect("timestamp part");
    assert!(
        !millis.is_empty() && millis.chars().all(|c| c.is_ascii_digit()),
        "id: {}",
        id
    );
    let suffix = parts.next().expect("suffix part");
    assert!(
        !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_alphanumeric()),
        "id: {}",
        id
    );
}
