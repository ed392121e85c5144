use std::sync::Arc;

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::game::screen::Screen;
use crate::game_factory::actor_client::GameFactoryClient;
use crate::routes::html;

#[derive(Serialize)]
pub struct CreateGameResponse {
    id: String,
}

#[derive(Deserialize)]
pub struct ToggleRequest {
    word: String,
}

pub async fn create(State(game_factory): State<Arc<GameFactoryClient>>) -> Response {
    match game_factory.create_game().await {
        Ok(id) => (StatusCode::OK, Json(CreateGameResponse { id })).into_response(),
        Err(error) => error.into_response(),
    }
}

/// Opening the site starts a new game for this browser tab.
pub async fn index(State(game_factory): State<Arc<GameFactoryClient>>) -> Response {
    match game_factory.create_game().await {
        Ok(id) => Redirect::to(&game_path(&id)).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn page(
    State(game_factory): State<Arc<GameFactoryClient>>,
    Path(game_id): Path<String>,
) -> Result<Html<String>, Error> {
    let screen = game_factory.get_game(&game_id).await?.screen().await?;
    Ok(Html(html::render(&game_id, &screen)))
}

pub async fn state(
    State(game_factory): State<Arc<GameFactoryClient>>,
    Path(game_id): Path<String>,
) -> Result<Json<Screen>, Error> {
    let screen = game_factory.get_game(&game_id).await?.screen().await?;
    Ok(Json(screen))
}

pub async fn begin(
    State(game_factory): State<Arc<GameFactoryClient>>,
    Path(game_id): Path<String>,
) -> Result<Redirect, Error> {
    game_factory.get_game(&game_id).await?.begin().await?;
    Ok(back_to_page(&game_id))
}

pub async fn toggle(
    State(game_factory): State<Arc<GameFactoryClient>>,
    Path(game_id): Path<String>,
    Form(request): Form<ToggleRequest>,
) -> Result<Redirect, Error> {
    game_factory
        .get_game(&game_id)
        .await?
        .toggle(&request.word)
        .await?;
    Ok(back_to_page(&game_id))
}

pub async fn finish(
    State(game_factory): State<Arc<GameFactoryClient>>,
    Path(game_id): Path<String>,
) -> Result<Redirect, Error> {
    game_factory.get_game(&game_id).await?.finish().await?;
    Ok(back_to_page(&game_id))
}

pub async fn restart(
    State(game_factory): State<Arc<GameFactoryClient>>,
    Path(game_id): Path<String>,
) -> Result<Redirect, Error> {
    game_factory.get_game(&game_id).await?.restart().await?;
    Ok(back_to_page(&game_id))
}

/// Post/Redirect/Get, so that reloading the page never repeats a click.
fn back_to_page(game_id: &str) -> Redirect {
    Redirect::to(&game_path(game_id))
}

fn game_path(game_id: &str) -> String {
    format!("/game/{game_id}")
}
