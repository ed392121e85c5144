use lazy_static::lazy_static;
use prometheus::core::Collector;
use prometheus::{IntCounter, IntGauge, Registry};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();
    pub static ref ACTIVE_GAMES: IntGauge =
        IntGauge::new("r_hunt_active_games", "Games with a live actor").expect("metric cannot be created");
    pub static ref ROUNDS_STARTED: IntCounter =
        IntCounter::new("r_hunt_rounds_started", "Rounds sampled, restarts included")
            .expect("metric cannot be created");
    pub static ref ROUNDS_FINISHED: IntCounter =
        IntCounter::new("r_hunt_rounds_finished", "Rounds whose score was revealed")
            .expect("metric cannot be created");
}

/// Safe to call more than once, already registered collectors are skipped.
pub fn register_metrics() {
    let collectors: Vec<Box<dyn Collector>> = vec![
        Box::new(ACTIVE_GAMES.clone()),
        Box::new(ROUNDS_STARTED.clone()),
        Box::new(ROUNDS_FINISHED.clone()),
    ];
    for collector in collectors {
        if let Err(error) = REGISTRY.register(collector) {
            log::debug!("Collector not registered. Error: '{error}'.");
        }
    }
}
