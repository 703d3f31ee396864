#![allow(dead_code)]

use axum::Router;
use shortlink::api::routes::public_routes;
use shortlink::application::services::{HealthService, ShortenerService};
use shortlink::domain::SHORT_LINK_PATH_PREFIX;
use shortlink::domain::id_generator::uuid_v4_generator;
use shortlink::domain::repositories::DependencyProbe;
use shortlink::infrastructure::persistence::{PgHealthProbe, PgUrlMappingRepository};
use shortlink::state::AppState;
use shortlink::utils::url_digest::long_url_digest;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_HOST: &str = "http://localhost:8080";
pub const TEST_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

pub async fn create_test_mapping(pool: &PgPool, encoded_key: &str, long_url: &str) {
    sqlx::query("INSERT INTO urls (encoded_key, long_url, long_url_hash) VALUES ($1, $2, $3)")
        .bind(encoded_key)
        .bind(long_url)
        .bind(long_url_digest(long_url))
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_mappings(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    let repository = Arc::new(PgUrlMappingRepository::new(
        pool.clone(),
        TEST_QUERY_TIMEOUT,
    ));
    let shortener_service = Arc::new(ShortenerService::new(
        repository,
        TEST_HOST,
        uuid_v4_generator(),
    ));

    let probes: Vec<Arc<dyn DependencyProbe>> =
        vec![Arc::new(PgHealthProbe::new(pool, TEST_QUERY_TIMEOUT))];
    let health_service = Arc::new(HealthService::new(probes));

    AppState::new(shortener_service, health_service)
}

pub fn create_test_app(pool: PgPool) -> Router {
    Router::new()
        .nest(SHORT_LINK_PATH_PREFIX, public_routes())
        .with_state(create_test_state(pool))
}
