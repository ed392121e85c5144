pub mod actor;
pub mod actor_client;
pub mod screen;
pub mod screen_fsm;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_fsm::StateMachine;

use crate::dictionary::Dictionary;
use crate::error::domain_error::DomainError;
use crate::error::Error;
use crate::game::screen::{RoundView, Screen};
use crate::game::screen_fsm::{ScreenFsm, ScreenFsmInput, ScreenFsmState};
use crate::metrics::{ROUNDS_FINISHED, ROUNDS_STARTED};
use crate::round::sampler::{self, SampleSettings};
use crate::round::Round;

/// The screens of one player and the round mounted on the game screen.
pub struct Game {
    id: String,
    dictionary: Dictionary,
    sample_settings: SampleSettings,
    fsm: StateMachine<ScreenFsm>,
    round: Option<Round>,
    generation: u64,
    rng: StdRng,
}

impl Game {
    pub fn new(id: &str, dictionary: Dictionary, sample_settings: SampleSettings) -> Self {
        Game::with_rng(id, dictionary, sample_settings, StdRng::from_entropy())
    }

    pub fn with_rng(
        id: &str,
        dictionary: Dictionary,
        sample_settings: SampleSettings,
        rng: StdRng,
    ) -> Self {
        Self {
            id: id.to_string(),
            dictionary,
            sample_settings,
            fsm: StateMachine::default(),
            round: None,
            generation: 0,
            rng,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &ScreenFsmState {
        self.fsm.state()
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// How many times the round has been restarted.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn screen(&self) -> Screen {
        match (self.state(), &self.round) {
            (ScreenFsmState::Game, Some(round)) => {
                Screen::Game(RoundView::new(self.generation, round))
            }
            _ => Screen::Start,
        }
    }

    pub fn begin(&mut self) -> Result<(), Error> {
        if self.state() != &ScreenFsmState::Start {
            return Err(Error::Domain(DomainError::InvalidStateForBegin(
                self.state().to_owned(),
                ScreenFsmState::Start,
            )));
        }
        // Sample before transitioning so that a failed draw leaves the start screen untouched
        let round = self.sample_round()?;
        self.process_event(&ScreenFsmInput::Begin)?;
        self.mount(round);
        Ok(())
    }

    /// Replaces the round wholesale, nothing from the previous round carries over.
    pub fn restart(&mut self) -> Result<(), Error> {
        if self.state() != &ScreenFsmState::Game {
            return Err(Error::Domain(DomainError::InvalidStateForRestart(
                self.state().to_owned(),
                ScreenFsmState::Game,
            )));
        }
        let round = self.sample_round()?;
        self.process_event(&ScreenFsmInput::Restart)?;
        self.generation += 1;
        self.mount(round);
        Ok(())
    }

    pub fn toggle(&mut self, word: &str) -> Result<(), Error> {
        if self.state() != &ScreenFsmState::Game {
            return Err(Error::Domain(DomainError::InvalidStateForToggle(
                self.state().to_owned(),
                ScreenFsmState::Game,
            )));
        }
        self.get_round_mut()?.toggle(word);
        Ok(())
    }

    pub fn finish(&mut self) -> Result<(), Error> {
        if self.state() != &ScreenFsmState::Game {
            return Err(Error::Domain(DomainError::InvalidStateForFinish(
                self.state().to_owned(),
                ScreenFsmState::Game,
            )));
        }
        let round = self.get_round_mut()?;
        if round.is_done() {
            return Ok(());
        }
        if round.selected_count() == 0 {
            return Err(Error::Domain(DomainError::EmptySelection));
        }
        round.finish();
        ROUNDS_FINISHED.inc();
        Ok(())
    }

    fn sample_round(&mut self) -> Result<Round, Error> {
        sampler::sample_round(&self.dictionary, &self.sample_settings, &mut self.rng)
    }

    fn mount(&mut self, round: Round) {
        self.round = Some(round);
        ROUNDS_STARTED.inc();
    }

    fn get_round_mut(&mut self) -> Result<&mut Round, Error> {
        let id = &self.id;
        self.round.as_mut().ok_or_else(|| {
            Error::log_and_create_internal(&format!(
                "The game screen has no round mounted. GameId: '{id}'."
            ))
        })
    }

    fn process_event(&mut self, event: &ScreenFsmInput) -> Result<(), Error> {
        self.fsm.consume(event).map(|_| ()).map_err(|error| {
            Error::log_and_create_internal(&format!(
                "The fsm in state {:?} can't transition with an event {:?}. Error: '{error}'.",
                self.fsm.state(),
                event
            ))
        })
    }
}
