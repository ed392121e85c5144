use tokio::sync::mpsc::Sender;
use tokio::sync::oneshot::{self, Receiver as OneshotReceiver, Sender as OneshotSender};

use crate::error::domain_error::DomainError;
use crate::error::Error;
use crate::game::actor::{GameAction, GameCommand, GameEvent};
use crate::game::screen::Screen;

#[derive(Clone, Debug)]
pub struct GameClient {
    pub(super) game_id: String,
    pub(super) game_tx: Sender<GameCommand>,
}

impl GameClient {
    pub async fn screen(&self) -> Result<Screen, Error> {
        self.send(GameAction::Show).await
    }

    pub async fn begin(&self) -> Result<Screen, Error> {
        self.send(GameAction::Begin).await
    }

    pub async fn toggle(&self, word: &str) -> Result<Screen, Error> {
        self.send(GameAction::Toggle {
            word: word.to_string(),
        })
        .await
    }

    pub async fn finish(&self) -> Result<Screen, Error> {
        self.send(GameAction::Finish).await
    }

    pub async fn restart(&self) -> Result<Screen, Error> {
        self.send(GameAction::Restart).await
    }

    /// Applies the action and returns the screen as it looks afterwards.
    async fn send(&self, action: GameAction) -> Result<Screen, Error> {
        let (tx, rx): (OneshotSender<GameEvent>, OneshotReceiver<GameEvent>) = oneshot::channel();

        // The actor closes its channel once it stops for inactivity, even if the GameFactory
        // has not removed the game yet
        if self
            .game_tx
            .send(GameCommand {
                action: action.clone(),
                response_tx: tx,
            })
            .await
            .is_err()
        {
            return Err(self.stopped(&action));
        }

        match rx.await {
            Ok(GameEvent::Screen { screen }) => Ok(screen),
            Ok(GameEvent::Error { error }) => Err(error),
            Err(_) => Err(self.stopped(&action)),
        }
    }

    fn stopped(&self, action: &GameAction) -> Error {
        log::info!("Game {} has stopped, dropping {action}.", self.game_id);
        Error::Domain(DomainError::GameDoesNotExist(self.game_id.clone()))
    }
}
