use std::fmt::{Display, Formatter};
use std::time::Duration;
use tokio::sync::oneshot::Sender as OneshotSender;
use tokio::sync::{
    mpsc,
    mpsc::{Receiver, Sender},
};
use tokio::time;

use crate::config::GameSettings;
use crate::dictionary::Dictionary;
use crate::error::Error;
use crate::game::actor_client::GameClient;
use crate::game::screen::Screen;
use crate::game::Game;
use crate::game_factory::actor_client::GameFactoryClient;
use crate::metrics::ACTIVE_GAMES;

/// Owns one [`Game`]. Commands are applied one at a time, in the order they arrive.
pub struct GameActor {
    game: Game,
    game_rx: Receiver<GameCommand>,
    game_factory: GameFactoryClient,
    inactivity_timeout: Duration,
}

impl GameActor {
    pub fn spawn(
        id: &str,
        settings: GameSettings,
        dictionary: Dictionary,
        game_factory: GameFactoryClient,
    ) -> GameClient {
        let game = Game::new(id, dictionary, settings.sample_settings());
        let (game_tx, game_rx): (Sender<GameCommand>, Receiver<GameCommand>) = mpsc::channel(128);

        tokio::spawn(
            GameActor {
                game,
                game_rx,
                game_factory,
                inactivity_timeout: settings.inactivity_timeout(),
            }
            .start(),
        );

        GameClient {
            game_id: id.to_string(),
            game_tx,
        }
    }

    async fn start(mut self) {
        ACTIVE_GAMES.inc();

        loop {
            match time::timeout(self.inactivity_timeout, self.game_rx.recv()).await {
                Err(_) => {
                    log::info!(
                        "No activity detected in game {} after {} seconds. Stopping game actor.",
                        self.game.id(),
                        self.inactivity_timeout.as_secs()
                    );
                    // Later sends fail fast instead of waiting on a game that is going away
                    self.game_rx.close();
                    break;
                }
                Ok(None) => {
                    log::info!("Game channel has been dropped. Stopping game actor.");
                    break;
                }
                Ok(Some(GameCommand { action, response_tx })) => {
                    let result = match &action {
                        GameAction::Show => Ok(()),
                        GameAction::Begin => self.game.begin(),
                        GameAction::Toggle { word } => self.game.toggle(word),
                        GameAction::Finish => self.game.finish(),
                        GameAction::Restart => self.game.restart(),
                    };
                    let event = match result {
                        Ok(()) => GameEvent::Screen {
                            screen: self.game.screen(),
                        },
                        Err(error) => {
                            if error.is_rejected_command() {
                                log::debug!(
                                    "Rejected {action} in game {}. Error: '{error}'.",
                                    self.game.id()
                                );
                            } else {
                                log::error!(
                                    "Failed to apply {action} in game {}. Error: '{error}'.",
                                    self.game.id()
                                );
                            }
                            GameEvent::Error { error }
                        }
                    };
                    if let Err(event) = response_tx.send(event) {
                        log::error!(
                            "Sent {event} for {action} but the response channel is closed. GameId: '{}'.",
                            self.game.id()
                        );
                    }
                }
            }
        }

        self.stop_game().await;
        ACTIVE_GAMES.dec();
    }

    async fn stop_game(self) {
        let game_id = self.game.id();
        if let Err(error) = self.game_factory.remove_game(game_id).await {
            log::error!("The GameFactory channel is closed, can't remove the Game. GameId: '{game_id}', Error: '{error}'.");
        }
    }
}

pub(crate) struct GameCommand {
    pub(crate) action: GameAction,
    pub(crate) response_tx: OneshotSender<GameEvent>,
}

/// The clicks a player can make, plus `Show` to read the current screen.
#[derive(Clone, Debug, PartialEq)]
pub enum GameAction {
    Show,
    Begin,
    Toggle { word: String },
    Finish,
    Restart,
}

impl Display for GameAction {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GameAction::Show => write!(formatter, "GameAction::Show"),
            GameAction::Begin => write!(formatter, "GameAction::Begin"),
            GameAction::Toggle { word } => write!(formatter, "GameAction::Toggle({word})"),
            GameAction::Finish => write!(formatter, "GameAction::Finish"),
            GameAction::Restart => write!(formatter, "GameAction::Restart"),
        }
    }
}

#[derive(Debug)]
pub(crate) enum GameEvent {
    Screen { screen: Screen },
    Error { error: Error },
}

impl Display for GameEvent {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}",
            match self {
                GameEvent::Screen { .. } => "GameEvent::Screen".to_string(),
                GameEvent::Error { error } => format!("Error '{error}'"),
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::GameAction;

    #[test]
    fn game_action_display_names_the_word() {
        assert_eq!(
            GameAction::Toggle {
                word: "KARHU".to_string()
            }
            .to_string(),
            "GameAction::Toggle(KARHU)"
        );
        assert_eq!(GameAction::Restart.to_string(), "GameAction::Restart");
    }
}
