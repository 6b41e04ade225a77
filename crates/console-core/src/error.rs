//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Study not found: {0}")]
    StudyNotFound(String),

    #[error("Menu template not found: {0}")]
    MenuTemplateNotFound(String),

    #[error("Unified template not found: {0}")]
    UnifiedTemplateNotFound(String),

    #[error("Widget definition not found: {0}")]
    WidgetNotFound(String),

    #[error("Menu resolution failed for study {study_id}: {source}")]
    Resolution {
        study_id: String,
        #[source]
        source: Box<DomainError>,
    },

    #[error("Dashboard {dashboard_id} references missing dashboard menu node {menu_item_id}")]
    OrphanDashboard {
        dashboard_id: String,
        menu_item_id: String,
    },

    #[error("Menu template {template_id} is still used by {studies_count} studies")]
    TemplateInUse {
        template_id: String,
        studies_count: u32,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    pub fn resolution(study_id: &str, source: DomainError) -> Self {
        Self::Resolution {
            study_id: study_id.to_string(),
            source: Box::new(source),
        }
    }

    /// Missing study/template/widget, possibly wrapped in a resolution failure
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::StudyNotFound(_)
            | Self::MenuTemplateNotFound(_)
            | Self::UnifiedTemplateNotFound(_)
            | Self::WidgetNotFound(_) => true,
            Self::Resolution { source, .. } => source.is_not_found(),
            _ => false,
        }
    }

    /// Transient failures a user may retry
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Upstream(_) => true,
            Self::Resolution { source, .. } => source.is_retryable(),
            _ => false,
        }
    }

    /// Structural problems that must block save or activation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::OrphanDashboard { .. } | Self::ValidationError(_) | Self::TemplateInUse { .. }
        )
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::ValidationError(errors.to_string())
    }
}
