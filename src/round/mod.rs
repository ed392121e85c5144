pub mod sampler;

use std::collections::HashSet;

use serde::Serialize;

pub const TARGET_LETTER: char = 'R';

/// A word is correct when it contains the target letter, exactly as written.
pub fn matches(word: &str) -> bool {
    word.contains(TARGET_LETTER)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordStatus {
    Unselected,
    Selected,
    Correct,
    Incorrect,
}

/// One play-through. Selection is open until [`Round::finish`], after which the round only reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    words: Vec<String>,
    selected: HashSet<String>,
    done: bool,
}

impl Round {
    /// Repeated words are dropped, keeping the first occurrence.
    pub fn new(words: Vec<String>) -> Self {
        let mut seen: HashSet<String> = HashSet::new();
        let words = words
            .into_iter()
            .filter(|word| seen.insert(word.clone()))
            .collect();

        Round {
            words,
            selected: HashSet::default(),
            done: false,
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn matching_words(&self) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .map(String::as_str)
            .filter(|word| matches(word))
    }

    pub fn is_selected(&self, word: &str) -> bool {
        self.selected.contains(word)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn can_finish(&self) -> bool {
        !self.done && !self.selected.is_empty()
    }

    /// Words outside the round are ignored, as is everything once the round is done.
    pub fn toggle(&mut self, word: &str) {
        if self.done {
            return;
        }
        if !self.selected.remove(word) && self.words.iter().any(|candidate| candidate == word) {
            self.selected.insert(word.to_string());
        }
    }

    pub fn finish(&mut self) {
        self.done = true;
    }

    pub fn score(&self) -> Score {
        Score {
            correct: self.selected.iter().filter(|word| matches(word)).count(),
            total: self.matching_words().count(),
        }
    }

    pub fn status(&self, word: &str) -> WordStatus {
        match (self.is_selected(word), self.done) {
            (false, _) => WordStatus::Unselected,
            (true, false) => WordStatus::Selected,
            (true, true) if matches(word) => WordStatus::Correct,
            (true, true) => WordStatus::Incorrect,
        }
    }
}
