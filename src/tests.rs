#[cfg(test)]
mod integration_tests {
    use crate::pages::layout::{MAIN_HEADING, PAGE_TITLE, RECOMMENDATION_BUTTON};
    use crate::schemas::HealthResponse;
    use crate::test_utils::test_utils::{setup_test_app, setup_zero_usage_app};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::{ViewKind, RECOMMENDATIONS};

    /// The `<section id="view">` element of a rendered page
    fn view_section(page: &str) -> &str {
        let start = page.find(r#"<section id="view">"#).expect("view section present");
        let end = page[start..].find("</section>").expect("view section closed");
        &page[start..start + end]
    }

    #[tokio::test]
    async fn test_health_check() {
        let (app, _guard) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.daily_rows, 8);
        assert_eq!(body.hourly_rows, 8);

        let raw: serde_json::Value = response.json();
        assert_eq!(raw["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_default_view_is_overview() {
        let (app, _guard) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        let page = response.text();
        assert!(page.contains(PAGE_TITLE));
        assert!(page.contains(MAIN_HEADING));
        assert!(page.contains("Navigasi"));
        assert!(page.contains("Pilih Analisis:"));
        assert!(page.contains(r#"value="overview" checked"#));

        let section = view_section(&page);
        assert!(section.contains("Dataset Harian"));
        assert!(section.contains("Dataset Per Jam"));
        assert!(section.contains("Statistik Deskriptif"));
        assert!(section.contains("2011-01-01"));
    }

    #[tokio::test]
    async fn test_sidebar_lists_views_in_order() {
        let (app, _guard) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let page = server.get("/").await.text();

        let positions: Vec<usize> = ViewKind::ALL
            .iter()
            .map(|kind| page.find(kind.label()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_each_view_renders_its_section() {
        let (app, _guard) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let expected = [
            ("overview", "Statistik Deskriptif"),
            ("temperature", "chart-temperature-demand"),
            ("hourly", "chart-hourly-usage"),
            ("seasonal", "chart-monthly-usage"),
            ("users", "chart-user-shares"),
        ];

        for (slug, marker) in expected {
            let response = server.get("/").add_query_param("view", slug).await;
            response.assert_status(StatusCode::OK);

            let page = response.text();
            assert!(view_section(&page).contains(marker), "view {slug} lacks {marker}");
            assert!(page.contains(&format!(r#"value="{slug}" checked"#)));
        }
    }

    #[tokio::test]
    async fn test_view_selected_by_label() {
        let (app, _guard) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/")
            .add_query_param("view", ViewKind::SeasonalTrend.label())
            .await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("Tren Musiman dalam Penggunaan Layanan"));
    }

    #[tokio::test]
    async fn test_unknown_view_is_rejected() {
        let (app, _guard) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/").add_query_param("view", "forecast").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_user_comparison_percentages() {
        let (app, _guard) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let page = server.get("/").add_query_param("view", "users").await.text();

        // 5376 casual and 13720 registered rentals in the fixture
        assert!(page.contains("28.2%"));
        assert!(page.contains("71.8%"));
    }

    #[tokio::test]
    async fn test_recommendations_do_not_change_the_view() {
        let (app, _guard) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        for kind in ViewKind::ALL {
            let without = server.get("/").add_query_param("view", kind.slug()).await.text();
            let with = server
                .get("/")
                .add_query_param("view", kind.slug())
                .add_query_param("recommendations", "true")
                .await
                .text();

            assert_eq!(view_section(&without), view_section(&with));
            assert!(!without.contains(RECOMMENDATIONS[0]));
            for recommendation in RECOMMENDATIONS {
                assert!(with.contains(recommendation));
            }
        }
    }

    #[tokio::test]
    async fn test_recommendation_button_keeps_active_view() {
        let (app, _guard) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let page = server.get("/").add_query_param("view", "hourly").await.text();

        assert!(page.contains(RECOMMENDATION_BUTTON));
        assert!(page.contains(r#"<input type="hidden" name="view" value="hourly">"#));
    }

    #[tokio::test]
    async fn test_failing_view_is_isolated() {
        let (app, _guard) = setup_zero_usage_app();
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/")
            .add_query_param("view", "users")
            .add_query_param("recommendations", "true")
            .await;

        response.assert_status(StatusCode::OK);
        let page = response.text();
        let section = view_section(&page);
        assert!(section.contains("Analisis tidak dapat ditampilkan."));
        assert!(!section.contains("chart-user-shares"));

        // the rest of the page still renders
        assert!(page.contains(MAIN_HEADING));
        assert!(page.contains("Navigasi"));
        assert!(page.contains(RECOMMENDATIONS[2]));

        // other views are unaffected
        server
            .get("/")
            .add_query_param("view", "hourly")
            .await
            .assert_status(StatusCode::OK);
    }
}
