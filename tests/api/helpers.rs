pub mod test_app;
pub mod test_game;

pub use test_app::TestApp;
