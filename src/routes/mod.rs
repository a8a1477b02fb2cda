use actix_web::{web, HttpResponse, Responder};

use crate::services::ShortLinkServiceTrait;

mod short_link;

// Liveness probe; never touches the store
async fn health_check() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("OK")
}

// Configure all routes function
pub fn configure_routes<S: ShortLinkServiceTrait + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
    short_link::configure_routes::<S>(cfg);
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Arc, sync::Mutex};

    use actix_web::{
        http::{header, StatusCode},
        test, App,
    };
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use super::*;
    use crate::db::Database;
    use crate::errors::RepositoryError;
    use crate::models::ShortLink;
    use crate::repositories::{
        MockShortLinkRepositoryTrait, ShortLinkRepository, ShortLinkRepositoryTrait,
    };
    use crate::services::ShortLinkService;

    #[derive(Default)]
    struct MemoryRepository {
        links: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl ShortLinkRepositoryTrait for MemoryRepository {
        async fn save(&self, link: &ShortLink) -> Result<(), RepositoryError> {
            self.links
                .lock()
                .unwrap()
                .insert(link.id.clone(), link.target_url.clone());
            Ok(())
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<String>, RepositoryError> {
            Ok(self.links.lock().unwrap().get(id).cloned())
        }
    }

    macro_rules! app_with {
        ($repository_type:ty, $repository:expr) => {{
            let service: ShortLinkService<$repository_type> =
                ShortLinkService::new(Arc::new($repository));
            test::init_service(
                App::new()
                    .app_data(web::Data::new(service))
                    .configure(configure_routes::<ShortLinkService<$repository_type>>),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_health_without_store() {
        let app = app_with!(
            ShortLinkRepository,
            ShortLinkRepository::new(Database::disconnected())
        );

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "OK");
    }

    #[actix_web::test]
    async fn test_shorten_then_redirect() {
        let app = app_with!(MemoryRepository, MemoryRepository::default());

        let req = test::TestRequest::post()
            .uri("/shorten")
            .set_json(json!({ "url": "https://example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let short_url = body["shortUrl"].as_str().unwrap();
        let id = short_url.strip_prefix("http://localhost/").unwrap();
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));

        let req = test::TestRequest::get().uri(&format!("/{}", id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "https://example.com"
        );
    }

    #[actix_web::test]
    async fn test_shorten_requires_url() {
        for body in [json!({}), json!({ "url": "" }), json!({ "url": null })] {
            let mut mock = MockShortLinkRepositoryTrait::new();
            mock.expect_save().never();
            let app = app_with!(MockShortLinkRepositoryTrait, mock);

            let req = test::TestRequest::post()
                .uri("/shorten")
                .set_json(body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({ "error": "URL is required" }));
        }
    }

    #[actix_web::test]
    async fn test_shorten_without_json_body() {
        let mut mock = MockShortLinkRepositoryTrait::new();
        mock.expect_save().never();
        let app = app_with!(MockShortLinkRepositoryTrait, mock);

        let req = test::TestRequest::post().uri("/shorten").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "URL is required" }));

        let req = test::TestRequest::post()
            .uri("/shorten")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{\"url\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_unknown_id_is_not_found() {
        let app = app_with!(MemoryRepository, MemoryRepository::default());

        let req = test::TestRequest::get().uri("/doesnotexist").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Short URL not found" }));
    }

    #[actix_web::test]
    async fn test_get_shorten_is_a_lookup() {
        let app = app_with!(MemoryRepository, MemoryRepository::default());

        let req = test::TestRequest::get().uri("/shorten").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Short URL not found" }));
    }

    #[actix_web::test]
    async fn test_store_unavailable() {
        let app = app_with!(
            ShortLinkRepository,
            ShortLinkRepository::new(Database::disconnected())
        );

        let req = test::TestRequest::get().uri("/deadbeef").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Internal server error" }));

        let req = test::TestRequest::post()
            .uri("/shorten")
            .set_json(json!({ "url": "https://example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_collision_overwrites() {
        let repository = Arc::new(MemoryRepository::default());
        let first = ShortLink::new("deadbeef".into(), "https://one.example".into());
        let second = ShortLink::new("deadbeef".into(), "https://two.example".into());
        repository.save(&first).await.unwrap();
        repository.save(&second).await.unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ShortLinkService::new(repository)))
                .configure(configure_routes::<ShortLinkService<MemoryRepository>>),
        )
        .await;

        let req = test::TestRequest::get().uri("/deadbeef").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "https://two.example"
        );
    }
}
