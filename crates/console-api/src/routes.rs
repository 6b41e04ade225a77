use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{breadcrumb, health, menu, menu_templates, unified_templates};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Study navigation
        .route("/api/v1/studies/{study_id}/menu", get(menu::get_menu))
        .route("/api/v1/studies/{study_id}/menu/refetch", post(menu::refetch_menu))
        .route("/api/v1/studies/{study_id}/breadcrumbs", get(breadcrumb::get_breadcrumbs))
        .route("/api/v1/studies/{study_id}/menu-template", put(menu_templates::assign_to_study))
        // Menu template admin
        .route(
            "/api/v1/menu-templates",
            get(menu_templates::list_templates).post(menu_templates::create_template),
        )
        .route(
            "/api/v1/menu-templates/{id}",
            get(menu_templates::get_template).delete(menu_templates::delete_template),
        )
        .route("/api/v1/menu-templates/{id}/items", put(menu_templates::replace_items))
        .route("/api/v1/menu-templates/{id}/active", put(menu_templates::set_active))
        // Dashboard composition
        .route(
            "/api/v1/unified-templates/{id}/compose",
            get(unified_templates::compose_template),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use console_core::domain::{
        DashboardTemplate, FieldRequirement, MenuNode, MenuNodeType, MenuTemplate,
        UnifiedTemplateRecord, WidgetDefinition, WidgetOverrides, WidgetPlacement, WidgetPosition,
    };
    use console_shared::constants::PERMISSIONS_HEADER;

    use crate::test_support::{test_app, InMemoryStore};

    fn template(id: &str, studies_count: u32) -> MenuTemplate {
        let mut template = MenuTemplate::new(
            "Standard".into(),
            None,
            vec![
                MenuNode::new("overview", "Overview")
                    .with_type(MenuNodeType::Dashboard)
                    .with_route("/studies/{studyId}"),
                MenuNode::new("data", "Data").with_children(vec![MenuNode::new("mapping", "Mapping")
                    .with_route("/studies/{studyId}/data-mapping")
                    .with_permissions(["data.map"])]),
            ],
            None,
        )
        .unwrap();
        template.id = id.to_string();
        template.studies_count = studies_count;
        template
    }

    fn seeded_store() -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::default());
        store.add_template(template("t1", 1));
        store.add_study("s1", Some("t1"));
        store.add_study("bare", None);
        store
    }

    async fn call(
        app: &Router,
        method: Method,
        uri: &str,
        permissions: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(permissions) = permissions {
            request = request.header(PERMISSIONS_HEADER, permissions);
        }
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn item_ids(items: &Value) -> Vec<String> {
        fn collect(items: &Value, out: &mut Vec<String>) {
            for item in items.as_array().unwrap() {
                out.push(item["id"].as_str().unwrap().to_string());
                collect(&item["children"], out);
            }
        }
        let mut out = Vec::new();
        collect(items, &mut out);
        out
    }

    #[tokio::test]
    async fn test_menu_respects_caller_permissions() {
        let store = seeded_store();
        let app = test_app(store.clone());

        let (status, body) = call(&app, Method::GET, "/api/v1/studies/s1/menu", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"]["state"], "ready");
        assert_eq!(item_ids(&body["data"]["items"]), vec!["overview", "data"]);

        let (_, body) = call(
            &app,
            Method::GET,
            "/api/v1/studies/s1/menu",
            Some("study.view, data.map"),
            None,
        )
        .await;
        assert_eq!(item_ids(&body["data"]["items"]), vec!["overview", "data", "mapping"]);
    }

    #[tokio::test]
    async fn test_menu_is_cached_until_refetch() {
        let store = seeded_store();
        let app = test_app(store.clone());

        call(&app, Method::GET, "/api/v1/studies/s1/menu", None, None).await;
        call(&app, Method::GET, "/api/v1/studies/s1/menu", None, None).await;
        assert_eq!(store.fetches(), 1);

        let (status, _) = call(&app, Method::POST, "/api/v1/studies/s1/menu/refetch", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(store.fetches(), 2);
    }

    #[tokio::test]
    async fn test_study_without_template_is_not_configured() {
        let store = seeded_store();
        let app = test_app(store.clone());
        let (status, body) = call(&app, Method::GET, "/api/v1/studies/bare/menu", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"]["state"], "not_configured");
        assert_eq!(body["data"]["items"], json!([]));
    }

    #[tokio::test]
    async fn test_upstream_failure_degrades_to_empty_menu() {
        let store = seeded_store();
        let app = test_app(store.clone());
        store.fail_template_fetch.store(true, Ordering::SeqCst);

        let (status, body) = call(&app, Method::GET, "/api/v1/studies/s1/menu", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"]["state"], "unavailable");
        assert_eq!(body["data"]["status"]["retryable"], true);
        assert_eq!(body["data"]["items"], json!([]));
    }

    #[tokio::test]
    async fn test_breadcrumbs_fallback_trail() {
        let store = seeded_store();
        let app = test_app(store.clone());
        let (status, body) = call(
            &app,
            Method::GET,
            "/api/v1/studies/123/breadcrumbs?path=/studies/123/data-mapping",
            None,
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["data"]["items"],
            json!([
                {"label": "Home", "href": "/"},
                {"label": "Studies", "href": "/studies"},
                {"label": "Data Mapping"}
            ])
        );
    }

    #[tokio::test]
    async fn test_breadcrumbs_follow_visible_tree() {
        let store = seeded_store();
        let app = test_app(store.clone());
        let (_, body) = call(
            &app,
            Method::GET,
            "/api/v1/studies/s1/breadcrumbs?path=/studies/s1/data-mapping",
            Some("data.map"),
            None,
        )
        .await;

        assert_eq!(
            body["data"]["items"],
            json!([
                {"label": "Home", "href": "/"},
                {"label": "Data"},
                {"label": "Mapping"}
            ])
        );
    }

    #[tokio::test]
    async fn test_replace_items_is_visible_on_next_resolve() {
        let store = seeded_store();
        let app = test_app(store.clone());
        call(&app, Method::GET, "/api/v1/studies/s1/menu", None, None).await;

        let (status, _) = call(
            &app,
            Method::PUT,
            "/api/v1/menu-templates/t1/items",
            None,
            Some(json!({"items": [{"id": "reports", "label": "Reports"}]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let fetches_before = store.fetches();
        let (_, body) = call(&app, Method::GET, "/api/v1/studies/s1/menu", None, None).await;
        assert_eq!(item_ids(&body["data"]["items"]), vec!["reports"]);
        assert_eq!(store.fetches(), fetches_before + 1);
    }

    #[tokio::test]
    async fn test_delete_in_use_template_conflicts() {
        let store = seeded_store();
        let app = test_app(store.clone());
        let (status, body) = call(&app, Method::DELETE, "/api/v1/menu-templates/t1", None, None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "CONFLICT");
    }

    #[tokio::test]
    async fn test_delete_unused_template() {
        let store = seeded_store();
        let app = test_app(store.clone());
        store.add_template(template("t2", 0));
        let (status, _) = call(&app, Method::DELETE, "/api/v1/menu-templates/t2", None, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(store.templates.lock().get("t2").is_none());
    }

    #[tokio::test]
    async fn test_create_template_validation() {
        let store = seeded_store();
        let app = test_app(store.clone());
        let (status, _) = call(
            &app,
            Method::POST,
            "/api/v1/menu-templates",
            None,
            Some(json!({"name": "X"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, body) = call(
            &app,
            Method::POST,
            "/api/v1/menu-templates",
            None,
            Some(json!({"name": "Oncology", "items": [{"id": "a", "label": "A"}]})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["studies_count"], 0);
    }

    #[tokio::test]
    async fn test_assign_template_to_study() {
        let store = seeded_store();
        let app = test_app(store.clone());
        let (status, body) = call(
            &app,
            Method::PUT,
            "/api/v1/studies/bare/menu-template",
            None,
            Some(json!({"menu_template_id": "t1"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["menu_template_id"], "t1");

        let (_, body) = call(&app, Method::GET, "/api/v1/studies/bare/menu", None, None).await;
        assert_eq!(body["data"]["status"]["state"], "ready");
    }

    fn seed_unified(store: &InMemoryStore, menu_item_id: &str) {
        store.unified.lock().insert(
            "u1".into(),
            UnifiedTemplateRecord {
                id: "u1".into(),
                name: "Oncology bundle".into(),
                description: None,
                menu_template_id: "t1".into(),
            },
        );
        let placement = |widget_id: &str| WidgetPlacement {
            widget_id: widget_id.into(),
            position: WidgetPosition { x: 0, y: 0, width: 6, height: 4 },
            overrides: WidgetOverrides::default(),
        };
        store.dashboards.lock().insert(
            "u1".into(),
            vec![DashboardTemplate {
                id: "d1".into(),
                name: "Overview".into(),
                menu_item_id: menu_item_id.into(),
                widgets: vec![placement("enrollment"), placement("age-histogram")],
            }],
        );
        let age = FieldRequirement {
            field_name: "age".into(),
            data_source: "demographics".into(),
            field_type: "number".into(),
            required: true,
        };
        for widget_id in ["enrollment", "age-histogram"] {
            store.widgets.lock().insert(
                widget_id.into(),
                WidgetDefinition {
                    widget_id: widget_id.into(),
                    name: None,
                    required_fields: vec![age.clone()],
                },
            );
        }
    }

    #[tokio::test]
    async fn test_compose_unified_template() {
        let store = seeded_store();
        let app = test_app(store.clone());
        seed_unified(&store, "overview");

        let (status, body) =
            call(&app, Method::GET, "/api/v1/unified-templates/u1/compose", None, None).await;
        assert_eq!(status, StatusCode::OK);

        let requirements = body["data"]["dataRequirements"].as_array().unwrap();
        assert_eq!(requirements.len(), 1);
        assert_eq!(requirements[0]["widgetIds"], json!(["enrollment", "age-histogram"]));
        assert_eq!(body["data"]["menuTemplateId"], "t1");
        assert_eq!(body["data"]["unboundDashboardNodes"], json!([]));
    }

    #[tokio::test]
    async fn test_compose_orphan_dashboard_is_unprocessable() {
        let store = seeded_store();
        let app = test_app(store.clone());
        seed_unified(&store, "deleted-node");

        let (status, body) =
            call(&app, Method::GET, "/api/v1/unified-templates/u1/compose", None, None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_health_reports_cache() {
        let store = seeded_store();
        let app = test_app(store.clone());
        let (status, body) = call(&app, Method::GET, "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["menu_cache"]["ttl_secs"], 300);
    }
}
