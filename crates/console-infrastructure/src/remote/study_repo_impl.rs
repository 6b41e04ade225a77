// ============================================================================
// Console Infrastructure - Remote Study Repository
// File: crates/console-infrastructure/src/remote/study_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use tracing::info;

use console_core::domain::StudyRecord;
use console_core::error::DomainError;
use console_core::repositories::StudyRepository;

use super::RemoteApiClient;

pub struct RemoteStudyRepository {
    client: RemoteApiClient,
}

impl RemoteStudyRepository {
    pub fn new(client: RemoteApiClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Serialize)]
struct AssignTemplateBody<'a> {
    menu_template_id: Option<&'a str>,
}

#[async_trait]
impl StudyRepository for RemoteStudyRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<StudyRecord>, DomainError> {
        self.client.get_optional(&["studies", id]).await
    }

    async fn assign_menu_template(
        &self,
        study_id: &str,
        template_id: Option<String>,
    ) -> Result<StudyRecord, DomainError> {
        info!("Assigning menu template {:?} to study {}", template_id, study_id);

        let body = AssignTemplateBody {
            menu_template_id: template_id.as_deref(),
        };
        self.client
            .send_json(Method::PATCH, &["studies", study_id], &body)
            .await?
            .ok_or_else(|| DomainError::StudyNotFound(study_id.to_string()))
    }
}
