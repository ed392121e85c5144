use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::error::Error;
use crate::game_factory::actor::GameFactoryActor;
use crate::round::sampler;
use crate::{metrics, routes};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Loads the dictionary, checks it can fill a round, and serves the game until the listener fails.
pub async fn run(config: Config, listener: TcpListener) -> Result<(), Error> {
    metrics::register_metrics();

    let dictionary = Dictionary::from_settings(&config.game)?;
    sampler::check_preconditions(&dictionary, &config.game.sample_settings())?;

    let game_factory = Arc::new(GameFactoryActor::spawn(config.game.clone(), dictionary));
    let router = routes::create_router(&config).with_state(game_factory);

    match listener.local_addr() {
        Ok(address) => log::info!("Listening on {address}"),
        Err(error) => log::warn!("Listening on an unknown address. Error: '{error}'."),
    }
    axum::serve(listener, router).await.map_err(|error| {
        Error::log_and_create_internal(&format!("The web server stopped. Error: '{error}'."))
    })
}
