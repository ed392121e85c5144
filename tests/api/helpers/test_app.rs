use std::net::SocketAddr;

use r_hunt::config::Config;
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tokio::net::TcpListener;

use super::test_game::TestGame;

pub struct TestApp {
    pub base_address: String,
    /// Does not follow redirects, so that tests can assert on them
    pub client: Client,
}

impl TestApp {
    pub async fn spawn_app() -> TestApp {
        TestApp::spawn_app_with_timeout(60).await
    }

    /// Games stop after `inactivity_timeout_seconds` without a command.
    pub async fn spawn_app_with_timeout(inactivity_timeout_seconds: u64) -> TestApp {
        // Binding to port 0 triggers an OS scan for an available port, this way we can run tests in parallel where each runs its own application
        let random_port_address = SocketAddr::from(([127, 0, 0, 1], 0));
        let listener = TcpListener::bind(random_port_address)
            .await
            .expect("Failed to bind to bind random port.");
        let address = listener.local_addr().unwrap();
        std::env::set_var("ENVIRONMENT", "dev");
        let config = {
            let mut config = Config::get().expect("Failed to read configuration.");
            config.game.inactivity_timeout_seconds = inactivity_timeout_seconds;
            config
        };

        let _ = tokio::spawn(r_hunt::startup::run(config, listener));

        TestApp {
            base_address: format!("http://127.0.0.1:{}", address.port()),
            client: Client::builder()
                .redirect(Policy::none())
                .build()
                .expect("Failed to build the HTTP client."),
        }
    }

    pub async fn create_game() -> TestGame {
        TestApp::spawn_app().await.new_game().await
    }

    pub async fn new_game(self) -> TestGame {
        let response = self
            .client
            .post(format!("{}/game", self.base_address))
            .send()
            .await
            .expect("Failed to execute CreateGame request.");
        assert_eq!(response.status(), StatusCode::OK);

        let game_created_response: GameCreatedResponse = response
            .json()
            .await
            .expect("Failed to parse GameCreatedResponse.");
        assert!(!game_created_response.id.is_empty());

        TestGame {
            app: self,
            id: game_created_response.id,
        }
    }
}

#[derive(Deserialize)]
struct GameCreatedResponse {
    id: String,
}
