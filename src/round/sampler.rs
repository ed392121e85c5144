use rand::seq::SliceRandom;
use rand::Rng;

use crate::dictionary::Dictionary;
use crate::error::domain_error::DomainError;
use crate::error::Error;
use crate::round::{matches, Round};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleSettings {
    pub count: usize,
    pub min_matches: usize,
    /// Zero skips rejection sampling entirely.
    pub max_draws: u32,
}

impl Default for SampleSettings {
    fn default() -> Self {
        SampleSettings {
            count: 10,
            min_matches: 2,
            max_draws: 1000,
        }
    }
}

/// Fails when no draw of `count` words from the dictionary could hold `min_matches` matching words.
pub fn check_preconditions(dictionary: &Dictionary, settings: &SampleSettings) -> Result<(), Error> {
    if settings.count == 0 {
        return Err(Error::Domain(DomainError::EmptyRound));
    }
    if settings.min_matches > settings.count {
        return Err(Error::Domain(DomainError::MinimumMatchesExceedRoundSize(
            settings.min_matches,
            settings.count,
        )));
    }
    if dictionary.len() < settings.count {
        return Err(Error::Domain(DomainError::DictionaryTooSmall(
            dictionary.len(),
            settings.count,
        )));
    }
    let matching = dictionary.matching_count();
    if matching < settings.min_matches {
        return Err(Error::Domain(DomainError::NotEnoughMatchingWords(
            matching,
            settings.min_matches,
        )));
    }
    Ok(())
}

/// Draws `count` distinct words, redrawing the whole set until `min_matches` of them match.
/// After `max_draws` rejected draws it builds the set around the required matches instead.
pub fn sample_round<R>(
    dictionary: &Dictionary,
    settings: &SampleSettings,
    rng: &mut R,
) -> Result<Round, Error>
where
    R: Rng + ?Sized,
{
    check_preconditions(dictionary, settings)?;

    for _ in 0..settings.max_draws {
        let words = draw(dictionary, settings.count, rng);
        if words.iter().filter(|word| matches(word)).count() >= settings.min_matches {
            return Ok(Round::new(words));
        }
    }

    log::warn!(
        "No valid draw after {} attempts, building the round from matching words. Words: '{}', MatchingWords: '{}', WordsPerRound: '{}', MinimumMatches: '{}'.",
        settings.max_draws,
        dictionary.len(),
        dictionary.matching_count(),
        settings.count,
        settings.min_matches
    );
    Ok(Round::new(draw_constructive(dictionary, settings, rng)))
}

fn draw<R>(dictionary: &Dictionary, count: usize, rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let mut words: Vec<String> = dictionary
        .words()
        .choose_multiple(rng, count)
        .cloned()
        .collect();
    // choose_multiple does not randomise the order of the picked words
    words.shuffle(rng);
    words
}

fn draw_constructive<R>(dictionary: &Dictionary, settings: &SampleSettings, rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let (mut matching, other): (Vec<&String>, Vec<&String>) =
        dictionary.words().iter().partition(|word| matches(word));
    matching.shuffle(rng);

    let remainder: Vec<&String> = matching
        .split_off(settings.min_matches)
        .into_iter()
        .chain(other)
        .collect();

    let mut words: Vec<String> = matching
        .into_iter()
        .chain(
            remainder
                .choose_multiple(rng, settings.count - settings.min_matches)
                .copied(),
        )
        .cloned()
        .collect();
    words.shuffle(rng);
    words
}
