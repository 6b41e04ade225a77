//! Request extractors

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use console_core::PermissionSet;
use console_shared::constants::PERMISSIONS_HEADER;
use console_shared::utils::parse_permission_list;

/// Permissions granted to the caller by the session layer in front of the
/// console. Missing or unreadable header means anonymous (empty set).
#[derive(Debug, Clone, Default)]
pub struct CallerPermissions(pub PermissionSet);

impl<S> FromRequestParts<S> for CallerPermissions
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let granted = parts
            .headers
            .get_all(PERMISSIONS_HEADER)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(parse_permission_list)
            .collect();

        Ok(CallerPermissions(granted))
    }
}
