pub mod actor;
pub mod actor_client;

use rand::distributions::{Alphanumeric, DistString};
use std::collections::HashMap;

use crate::config::GameSettings;
use crate::dictionary::Dictionary;
use crate::error::domain_error::DomainError;
use crate::error::Error;
use crate::game::actor::GameActor;
use crate::game::actor_client::GameClient;
use crate::game_factory::actor_client::GameFactoryClient;

pub struct GameFactory {
    game_channels: HashMap<String, GameClient>,
    game_settings: GameSettings,
    dictionary: Dictionary,
}

impl GameFactory {
    pub fn new(game_settings: GameSettings, dictionary: Dictionary) -> Self {
        GameFactory {
            game_channels: HashMap::default(),
            game_settings,
            dictionary,
        }
    }

    pub fn create_new_game(&mut self, game_factory: GameFactoryClient) -> String {
        let id = self.create_unique_game_id();
        self.game_channels.insert(
            id.clone(),
            GameActor::spawn(
                &id,
                self.game_settings.clone(),
                self.dictionary.clone(),
                game_factory,
            ),
        );
        log::info!("Game created. GameId: '{id}', ActiveGames: '{}'.", self.game_channels.len());

        id
    }

    pub fn remove_game(&mut self, game_id: &str) -> Option<GameClient> {
        self.game_channels.remove(game_id)
    }

    pub fn get_game(&self, game_id: &str) -> Result<&GameClient, Error> {
        match self.game_channels.get(game_id) {
            Some(game) => Ok(game),
            None => Err(Error::Domain(DomainError::GameDoesNotExist(
                game_id.to_string(),
            ))),
        }
    }

    fn create_unique_game_id(&self) -> String {
        loop {
            // Avoid characters that are easy to mix up when the URL is read aloud
            let id = Alphanumeric
                .sample_string(&mut rand::thread_rng(), 5)
                .replace('O', "P")
                .replace('0', "1")
                .replace('I', "J")
                .replace('l', "m");
            if !self.game_channels.contains_key(&id) {
                return id;
            }
        }
    }
}
