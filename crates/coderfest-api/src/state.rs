//! Application state shared across handlers.

use std::sync::Arc;

use coderfest_core::Config;
use coderfest_db::RegistrationRepository;
use coderfest_storage::Storage;

use crate::services::email::EmailService;

/// Main application state: repositories, storage, and the optional email
/// service. Cheap to clone behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub registrations: RegistrationRepository,
    pub storage: Arc<dyn Storage>,
    /// `None` when SMTP is not configured; confirmation emails are skipped.
    pub email: Option<EmailService>,
    pub is_production: bool,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
