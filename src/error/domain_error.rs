use thiserror::Error;

use crate::game::screen_fsm::ScreenFsmState;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("The game does not exist. GameId: '{0}'.")]
    GameDoesNotExist(String),
    #[error("Invalid state for starting a round. ActualState: '{0:?}', ExpectedState: '{1:?}'.")]
    InvalidStateForBegin(ScreenFsmState, ScreenFsmState),
    #[error("Invalid state for restarting a round. ActualState: '{0:?}', ExpectedState: '{1:?}'.")]
    InvalidStateForRestart(ScreenFsmState, ScreenFsmState),
    #[error("Invalid state for selecting a word. ActualState: '{0:?}', ExpectedState: '{1:?}'.")]
    InvalidStateForToggle(ScreenFsmState, ScreenFsmState),
    #[error("Invalid state for finishing a round. ActualState: '{0:?}', ExpectedState: '{1:?}'.")]
    InvalidStateForFinish(ScreenFsmState, ScreenFsmState),
    #[error("A round cannot be finished without selecting at least one word.")]
    EmptySelection,
    #[error("A round needs at least one word.")]
    EmptyRound,
    #[error("The dictionary does not have enough words. ActualWords: '{0}', RequiredWords: '{1}'.")]
    DictionaryTooSmall(usize, usize),
    #[error("The dictionary does not have enough matching words. ActualMatchingWords: '{0}', RequiredMatchingWords: '{1}'.")]
    NotEnoughMatchingWords(usize, usize),
    #[error("The minimum amount of matching words is larger than the round. MinimumMatches: '{0}', WordsPerRound: '{1}'.")]
    MinimumMatchesExceedRoundSize(usize, usize),
    #[error("Could not load the dictionary. File: '{0}', Error: '{1}'.")]
    DictionaryUnreadable(String, String),
}
