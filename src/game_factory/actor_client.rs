use tokio::sync::mpsc::Sender;
use tokio::sync::oneshot::{self, Sender as OneshotSender};

use crate::error::Error;
use crate::game::actor_client::GameClient;
use crate::game_factory::actor::{GameFactoryCommand, GameFactoryResponse};

pub struct GameFactoryClient {
    pub(super) game_factory_tx: Sender<GameFactoryCommand>,
}

impl GameFactoryClient {
    pub async fn create_game(&self) -> Result<String, Error> {
        match self
            .request(|response_channel| GameFactoryCommand::CreateGame { response_channel })
            .await?
        {
            GameFactoryResponse::GameCreated { game_id } => Ok(game_id),
            unexpected_response => Err(GameFactoryClient::unexpected(unexpected_response)),
        }
    }

    pub async fn get_game(&self, game_id: &str) -> Result<GameClient, Error> {
        match self
            .request(|response_channel| GameFactoryCommand::GetGameActor {
                game_id: game_id.to_string(),
                response_channel,
            })
            .await?
        {
            GameFactoryResponse::GameActor { game } => Ok(game),
            unexpected_response => Err(GameFactoryClient::unexpected(unexpected_response)),
        }
    }

    pub async fn remove_game(&self, game_id: &str) -> Result<(), Error> {
        self.game_factory_tx
            .send(GameFactoryCommand::RemoveGame {
                game_id: game_id.to_string(),
            })
            .await
            .map_err(|error| {
                Error::log_and_create_internal(&format!(
                    "The GameFactory channel is closed. Can't remove Game '{game_id}'. Error: '{error}'."
                ))
            })
    }

    async fn request<F>(&self, command: F) -> Result<GameFactoryResponse, Error>
    where
        F: FnOnce(OneshotSender<GameFactoryResponse>) -> GameFactoryCommand,
    {
        let (tx, rx) = oneshot::channel();

        self.game_factory_tx.send(command(tx)).await.map_err(|error| {
            Error::log_and_create_internal(&format!(
                "The GameFactory is not alive. Error: '{error}'."
            ))
        })?;

        match rx.await {
            Ok(GameFactoryResponse::Error { error }) => Err(error),
            Ok(response) => Ok(response),
            Err(_) => Err(Error::log_and_create_internal(
                "Sent a command to the GameFactory actor, but the actor channel died.",
            )),
        }
    }

    fn unexpected(response: GameFactoryResponse) -> Error {
        Error::log_and_create_internal(&format!(
            "Received an unexpected GameFactoryResponse. GameFactoryResponse: '{response}'."
        ))
    }
}
