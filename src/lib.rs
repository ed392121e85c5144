pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod game_factory;
pub mod metrics;
pub mod round;
mod routes;
pub mod startup;
