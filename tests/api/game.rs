use std::time::Duration;

use reqwest::StatusCode;

use crate::helpers::test_game::{assert_error, assert_redirects_to_game, Screen, TestGame};
use crate::helpers::TestApp;

fn contains_r(word: &str) -> bool {
    word.contains('R')
}

async fn started_game() -> TestGame {
    let game = TestApp::create_game().await;
    assert_redirects_to_game(game.post("begin").await, &game.id);
    game
}

#[tokio::test]
async fn create_game_works() {
    let game = TestApp::create_game().await;

    assert_eq!(game.id.len(), 5);
}

#[tokio::test]
async fn opening_the_site_redirects_to_a_new_game() {
    let app = TestApp::spawn_app().await;

    let response = app
        .client
        .get(format!("{}/", app.base_address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|location| location.to_str().ok())
        .unwrap()
        .to_string();
    assert!(location.starts_with("/game/"));
}

#[tokio::test]
async fn new_game_shows_the_start_screen() {
    let game = TestApp::create_game().await;

    assert_eq!(game.state().await, Screen::Start);
    assert!(game.page().await.contains(">Aloita</button>"));
}

#[tokio::test]
async fn unknown_game_is_not_found() {
    let app = TestApp::spawn_app().await;

    let response = app
        .client
        .get(format!("{}/game/nope/state", app.base_address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_error(response, StatusCode::NOT_FOUND, "GAME_DOES_NOT_EXIST").await;
}

#[tokio::test]
async fn inactive_game_is_removed() {
    let game = TestApp::spawn_app_with_timeout(1).await.new_game().await;
    assert_eq!(game.state().await, Screen::Start);

    tokio::time::sleep(Duration::from_millis(1500)).await;

    assert_error(game.state_response().await, StatusCode::NOT_FOUND, "GAME_DOES_NOT_EXIST").await;
}

#[tokio::test]
async fn begin_shows_a_fresh_round() {
    let game = started_game().await;

    let round = game.round().await;
    assert_eq!(round.generation, 0);
    assert_eq!(round.words.len(), 10);
    assert!(round.words.iter().filter(|word| contains_r(&word.word)).count() >= 2);
    assert!(round.words.iter().all(|word| word.status == "unselected"));
    assert!(!round.can_finish);
    assert!(round.score.is_none());

    let page = game.page().await;
    assert!(page.contains("Valitse sanat joissa on R"));
    assert!(page.contains("disabled>Valmis</button>"));
}

#[tokio::test]
async fn begin_twice_is_rejected() {
    let game = started_game().await;

    assert_error(game.post("begin").await, StatusCode::CONFLICT, "COMMAND_NOT_ALLOWED").await;
}

#[tokio::test]
async fn toggle_on_start_screen_is_rejected() {
    let game = TestApp::create_game().await;

    assert_error(game.toggle("KARHU").await, StatusCode::CONFLICT, "COMMAND_NOT_ALLOWED").await;
}

#[tokio::test]
async fn finish_without_selection_is_rejected() {
    let game = started_game().await;

    assert_error(game.post("finish").await, StatusCode::CONFLICT, "EMPTY_SELECTION").await;
    assert!(game.round().await.score.is_none());
}

#[tokio::test]
async fn toggle_twice_unselects_the_word() {
    let game = started_game().await;
    let word = game.round().await.words[0].word.clone();

    assert_redirects_to_game(game.toggle(&word).await, &game.id);
    let round = game.round().await;
    assert_eq!(round.words[0].status, "selected");
    assert!(round.can_finish);

    assert_redirects_to_game(game.toggle(&word).await, &game.id);
    let round = game.round().await;
    assert_eq!(round.words[0].status, "unselected");
    assert!(!round.can_finish);
}

#[tokio::test]
async fn full_round_reveals_score_and_restart_starts_over() {
    let game = started_game().await;
    let round = game.round().await;
    let total = round
        .words
        .iter()
        .filter(|word| contains_r(&word.word))
        .count();
    let correct = round
        .words
        .iter()
        .find(|word| contains_r(&word.word))
        .unwrap()
        .word
        .clone();
    let incorrect = round
        .words
        .iter()
        .find(|word| !contains_r(&word.word))
        .map(|word| word.word.clone());

    assert_redirects_to_game(game.toggle(&correct).await, &game.id);
    if let Some(incorrect) = &incorrect {
        assert_redirects_to_game(game.toggle(incorrect).await, &game.id);
    }
    assert_redirects_to_game(game.post("finish").await, &game.id);

    let round = game.round().await;
    let score = round.score.as_ref().unwrap();
    assert_eq!(score.correct, 1);
    assert_eq!(score.total, total);
    let status_of = |wanted: &str| {
        round
            .words
            .iter()
            .find(|word| word.word == wanted)
            .map(|word| word.status.clone())
    };
    assert_eq!(status_of(&correct), Some("correct".to_string()));
    if let Some(incorrect) = &incorrect {
        assert_eq!(status_of(incorrect), Some("incorrect".to_string()));
    }

    let page = game.page().await;
    assert!(page.contains(&format!("Löysit 1 / {total}")));
    assert!(page.contains(">Uudestaan</button>"));

    // Selection is frozen once the score is shown
    assert_redirects_to_game(game.toggle(&correct).await, &game.id);
    assert_eq!(game.round().await, round);

    assert_redirects_to_game(game.post("restart").await, &game.id);
    let restarted = game.round().await;
    assert_eq!(restarted.generation, 1);
    assert!(restarted.score.is_none());
    assert!(restarted.words.iter().all(|word| word.status == "unselected"));
}

#[tokio::test]
async fn form_posts_land_on_the_rendered_page() {
    let game = TestApp::create_game().await;

    let response = reqwest::Client::new()
        .post(game.url("/begin"))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("Valmis"));
}
