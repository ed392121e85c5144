use serde::Serialize;

use crate::round::{Round, Score, WordStatus};

/// What the browser shows. Built from the game on every request, never stored.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "screen")]
pub enum Screen {
    Start,
    Game(RoundView),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundView {
    pub generation: u64,
    pub words: Vec<WordView>,
    pub can_finish: bool,
    pub score: Option<Score>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WordView {
    pub word: String,
    pub status: WordStatus,
}

impl RoundView {
    pub fn new(generation: u64, round: &Round) -> Self {
        RoundView {
            generation,
            words: round
                .words()
                .iter()
                .map(|word| WordView {
                    word: word.to_string(),
                    status: round.status(word),
                })
                .collect(),
            can_finish: round.can_finish(),
            score: round.is_done().then(|| round.score()),
        }
    }

    pub fn is_done(&self) -> bool {
        self.score.is_some()
    }
}
