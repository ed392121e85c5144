use reqwest::{Response, StatusCode};
use serde::Deserialize;

use super::TestApp;

pub struct TestGame {
    pub app: TestApp,
    pub id: String,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", tag = "screen")]
pub enum Screen {
    Start,
    Game(RoundView),
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundView {
    pub generation: u64,
    pub words: Vec<WordView>,
    pub can_finish: bool,
    pub score: Option<Score>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct WordView {
    pub word: String,
    pub status: String,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub r#type: String,
}

impl TestGame {
    pub fn url(&self, path: &str) -> String {
        format!("{}/game/{}{path}", self.app.base_address, self.id)
    }

    pub async fn post(&self, action: &str) -> Response {
        self.app
            .client
            .post(self.url(&format!("/{action}")))
            .send()
            .await
            .expect("Failed to execute game action request.")
    }

    pub async fn toggle(&self, word: &str) -> Response {
        self.app
            .client
            .post(self.url("/toggle"))
            .form(&[("word", word)])
            .send()
            .await
            .expect("Failed to execute toggle request.")
    }

    pub async fn state_response(&self) -> Response {
        self.app
            .client
            .get(self.url("/state"))
            .send()
            .await
            .expect("Failed to execute state request.")
    }

    pub async fn state(&self) -> Screen {
        let response = self.state_response().await;
        assert_eq!(response.status(), StatusCode::OK);
        response.json().await.expect("Failed to parse the screen.")
    }

    pub async fn round(&self) -> RoundView {
        match self.state().await {
            Screen::Game(round) => round,
            Screen::Start => panic!("Expected the game screen, got the start screen."),
        }
    }

    pub async fn page(&self) -> String {
        let response = self
            .app
            .client
            .get(self.url(""))
            .send()
            .await
            .expect("Failed to execute page request.");
        assert_eq!(response.status(), StatusCode::OK);
        response.text().await.expect("Failed to read the page.")
    }
}

pub fn assert_redirects_to_game(response: Response, game_id: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|location| location.to_str().ok()),
        Some(format!("/game/{game_id}").as_str())
    );
}

pub async fn assert_error(response: Response, status: StatusCode, error_type: &str) {
    assert_eq!(response.status(), status);
    let error: ErrorResponse = response.json().await.expect("Failed to parse the error.");
    assert_eq!(error.r#type, error_type);
}
