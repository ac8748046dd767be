//! Registration record repository.
//!
//! Records are stored as JSON documents under `registration:<id>` keys.
//! Registrations are create-only; there is no update or delete path.

use std::sync::Arc;

use coderfest_core::constants::{registration_key, REGISTRATION_KEY_PREFIX};
use coderfest_core::{AppError, Registration};

use crate::kv::KvStore;

#[derive(Clone)]
pub struct RegistrationRepository {
    kv: Arc<dyn KvStore>,
}

impl RegistrationRepository {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }

    /// Persist a new registration record.
    pub async fn create(&self, registration: &Registration) -> Result<(), AppError> {
        let key = registration_key(&registration.registration_id);
        let value = serde_json::to_value(registration)?;
        self.kv.set(&key, value).await?;
        tracing::info!(
            registration_id = %registration.registration_id,
            team_name = %registration.team_name,
            "Registration stored"
        );
        Ok(())
    }

    /// Fetch a single registration by id.
    pub async fn get(&self, registration_id: &str) -> Result<Option<Registration>, AppError> {
        let key = registration_key(registration_id);
        match self.kv.get(&key).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Fetch every registration, unfiltered and unpaginated.
    ///
    /// Acceptable only at small record counts; the admin tooling filters
    /// client-side.
    pub async fn list_all(&self) -> Result<Vec<Registration>, AppError> {
        let values = self.kv.get_by_prefix(REGISTRATION_KEY_PREFIX).await?;
        values
            .into_iter()
            .map(|v| serde_json::from_value(v).map_err(AppError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::memory::MemoryKvStore;
    use coderfest_core::{RegistrationStatus, StudentDetail};

    fn sample(id: &str, team: &str) -> Registration {
        Registration {
            registration_id: id.to_string(),
            team_name: team.to_string(),
            leader_name: "Asha Verma".to_string(),
            leader_email: "asha@example.com".to_string(),
            leader_contact: "9876543210".to_string(),
            college_name: "SGSIT".to_string(),
            students: vec![
                StudentDetail {
                    name: "Asha Verma".to_string(),
                    email: "asha@example.com".to_string(),
                    contact: "9876543210".to_string(),
                },
                StudentDetail {
                    name: "Ravi Patel".to_string(),
                    email: "ravi@example.com".to_string(),
                    contact: "9876543211".to_string(),
                },
                StudentDetail {
                    name: "Neha Singh".to_string(),
                    email: "neha@example.com".to_string(),
                    contact: "9876543212".to_string(),
                },
            ],
            payment_proof_url: "http://localhost:3000/files/payments/x.png".to_string(),
            registered_at: "2025-11-20T10:30:00Z".parse().unwrap(),
            status: RegistrationStatus::Confirmed,
        }
    }

    #[tokio::test]
    async fn create_then_get_and_list() {
        let repo = RegistrationRepository::new(Arc::new(MemoryKvStore::new()));
        let reg = sample("REG-1733500000000-ab12cd", "Null Pointers");
        repo.create(&reg).await.unwrap();

        let got = repo.get("REG-1733500000000-ab12cd").await.unwrap().unwrap();
        assert_eq!(got, reg);

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].team_name, "Null Pointers");
    }

    #[tokio::test]
    async fn get_missing_registration_is_none() {
        let repo = RegistrationRepository::new(Arc::new(MemoryKvStore::new()));
        assert!(repo.get("REG-0-none").await.unwrap().is_none());
    }
}
