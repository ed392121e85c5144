use crate::config::Config;
use crate::game_factory::actor_client::GameFactoryClient;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

mod error;
mod game;
mod health;
mod html;
mod metrics;

pub fn create_router(config: &Config) -> Router<Arc<GameFactoryClient>> {
    Router::new()
        .route("/", get(game::index))
        .route("/health", get(health::get))
        .route("/metrics", get(metrics::metrics_handler))
        .route("/game", post(game::create))
        .route("/game/:game_id", get(game::page))
        .route("/game/:game_id/state", get(game::state))
        .route("/game/:game_id/begin", post(game::begin))
        .route("/game/:game_id/toggle", post(game::toggle))
        .route("/game/:game_id/finish", post(game::finish))
        .route("/game/:game_id/restart", post(game::restart))
        .layer(if config.allow_cors {
            log::info!("CorsLayer Permissive");
            CorsLayer::permissive()
        } else {
            CorsLayer::default()
        })
}
