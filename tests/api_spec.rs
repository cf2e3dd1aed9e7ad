use axum::http::StatusCode;
use axum_test::TestServer;
use stylebook::api::create_router;
use stylebook::config::StylebookConfig;
use stylebook::models::*;
use stylebook::Registry;

fn setup() -> TestServer {
    let app = create_router(Registry::builtin(), &StylebookConfig::default())
        .expect("Failed to build router");
    TestServer::new(app).expect("Failed to create test server")
}

mod health {
    use super::*;

    #[tokio::test]
    async fn reports_status_and_version() {
        let server = setup();

        let response = server.get("/api/v1/health").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], Registry::builtin().version());
    }
}

mod guide {
    use super::*;

    #[tokio::test]
    async fn returns_the_full_guide() {
        let server = setup();

        let response = server.get("/api/v1/guide").await;

        response.assert_status_ok();
        let guide: Guide = response.json();
        assert_eq!(&guide, Registry::builtin().guide());
    }
}

mod categories {
    use super::*;

    #[tokio::test]
    async fn lists_category_summaries_in_order() {
        let server = setup();

        let response = server.get("/api/v1/categories").await;

        response.assert_status_ok();
        let categories: Vec<CategorySummary> = response.json();
        let ids: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["CodeStyle", "SoftwareDesign"]);
        assert!(categories.iter().all(|c| c.rule_count > 0));
    }

    #[tokio::test]
    async fn returns_one_category_with_rules() {
        let server = setup();

        let response = server.get("/api/v1/categories/SoftwareDesign").await;

        response.assert_status_ok();
        let category: Category = response.json();
        assert_eq!(category.name, "Software Design");
        assert!(!category.rules.is_empty());
    }

    #[tokio::test]
    async fn returns_404_for_unknown_category() {
        let server = setup();

        let response = server.get("/api/v1/categories/NonExistent").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}

mod rules {
    use super::*;

    #[tokio::test]
    async fn lists_rules_of_a_category() {
        let server = setup();

        let response = server.get("/api/v1/categories/CodeStyle/rules").await;

        response.assert_status_ok();
        let rules: Vec<Rule> = response.json();
        assert_eq!(rules[0].id, "inline_block_usage");
    }

    #[tokio::test]
    async fn returns_404_when_listing_unknown_category() {
        let server = setup();

        let response = server.get("/api/v1/categories/NonExistent/rules").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.text().contains("NonExistent"));
    }

    #[tokio::test]
    async fn returns_a_single_rule() {
        let server = setup();

        let response = server
            .get("/api/v1/categories/CodeStyle/rules/inline_block_usage")
            .await;

        response.assert_status_ok();
        let rule: Rule = response.json();
        assert_eq!(
            rule.summary,
            "Inline blocks should be preferred for simple code that fits one line"
        );
        assert_eq!(rule.examples[0].label, ExampleLabel::Preferred);
    }

    #[tokio::test]
    async fn returns_404_for_unknown_rule() {
        let server = setup();

        let response = server
            .get("/api/v1/categories/CodeStyle/rules/no_such_rule")
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}

mod search {
    use super::*;

    #[tokio::test]
    async fn returns_matching_rules() {
        let server = setup();

        let response = server.get("/api/v1/search").add_query_param("q", "pipe").await;

        response.assert_status_ok();
        let results: Vec<RuleRef> = response.json();
        assert!(!results.is_empty());
        assert!(results.iter().all(|r| r.category == "CodeStyle"));
    }

    #[tokio::test]
    async fn returns_empty_list_without_query() {
        let server = setup();

        let response = server.get("/api/v1/search").await;

        response.assert_status_ok();
        let results: Vec<RuleRef> = response.json();
        assert!(results.is_empty());
    }
}

mod pages {
    use super::*;

    #[tokio::test]
    async fn serves_the_index_at_root() {
        let server = setup();

        let response = server.get("/").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Inline blocks should be preferred for simple code that fits one line"));
    }

    #[tokio::test]
    async fn serves_category_pages() {
        let server = setup();

        let response = server.get("/CodeStyle.html").await;

        response.assert_status_ok();
        assert!(response.text().contains("id=\"inline_block_usage\""));
    }

    #[tokio::test]
    async fn serves_the_stylesheet_as_css() {
        let server = setup();

        let response = server.get("/style.css").await;

        response.assert_status_ok();
        let content_type = response.header("content-type");
        assert!(content_type.to_str().unwrap().starts_with("text/css"));
    }

    #[tokio::test]
    async fn returns_404_for_unknown_page() {
        let server = setup();

        let response = server.get("/missing.html").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn uses_configured_site_title() {
        let config = StylebookConfig {
            site_title: Some("House Style".to_string()),
            ..StylebookConfig::default()
        };
        let app = create_router(Registry::builtin(), &config).expect("Failed to build router");
        let server = TestServer::new(app).expect("Failed to create test server");

        let html = server.get("/index.html").await.text();

        assert!(html.contains("<h1>House Style</h1>"));
    }
}

mod cors {
    use super::*;

    #[tokio::test]
    async fn restricts_origins_when_configured() {
        let config = StylebookConfig {
            cors_origins: Some(vec!["http://allowed.test".to_string()]),
            ..StylebookConfig::default()
        };
        let app = create_router(Registry::builtin(), &config).expect("Failed to build router");
        let server = TestServer::new(app).expect("Failed to create test server");

        let response = server
            .get("/api/v1/health")
            .add_header("origin", "http://allowed.test")
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.header("access-control-allow-origin"),
            "http://allowed.test"
        );
    }
}
