//! Remote widget catalog

use async_trait::async_trait;

use console_core::domain::WidgetDefinition;
use console_core::error::DomainError;
use console_core::repositories::WidgetCatalog;

use super::RemoteApiClient;

pub struct RemoteWidgetCatalog {
    client: RemoteApiClient,
}

impl RemoteWidgetCatalog {
    pub fn new(client: RemoteApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WidgetCatalog for RemoteWidgetCatalog {
    async fn find_definition(&self, widget_id: &str) -> Result<Option<WidgetDefinition>, DomainError> {
        self.client.get_optional(&["widgets", widget_id]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::client::test_support::client_for;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_find_definition() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/widgets/enrollment"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "widgetId": "enrollment",
                "requiredFields": [
                    {"fieldName": "age", "dataSource": "demographics", "fieldType": "number", "required": true},
                    {"fieldName": "site", "dataSource": "sites", "fieldType": "string"}
                ]
            })))
            .mount(&server)
            .await;

        let catalog = RemoteWidgetCatalog::new(client_for(&server.uri(), None));
        let definition = catalog.find_definition("enrollment").await.unwrap().unwrap();

        assert_eq!(definition.required_fields.len(), 2);
        assert!(definition.required_fields[0].required);
        assert!(!definition.required_fields[1].required);
    }
}
