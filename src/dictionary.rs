use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::config::GameSettings;
use crate::error::domain_error::DomainError;
use crate::error::Error;
use crate::round::matches;

/// The word pool every round is sampled from. Words are distinct and keep the order they were loaded in.
#[derive(Clone, Debug, PartialEq)]
pub struct Dictionary {
    words: Arc<[String]>,
}

impl Dictionary {
    const BUILT_IN_WORDS: [&'static str; 30] = [
        "TALO", "KISSA", "KOIRA", "AURINKO", "PUU", "KUKKA", "RUOKA", "MARJA", "LEIPÄ", "JUNA",
        "AUTO", "LAIVA", "KIRJA", "PÖYTÄ", "TUOLI", "IKKUNA", "OVI", "JÄRVI", "METSÄ", "KETTU",
        "KARHU", "SUSI", "HIIRI", "LEHMÄ", "ORAVA", "KALA", "VENE", "SILTA", "LUMI", "MERI",
    ];

    /// Trims every word, skips blank ones and drops repeated words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let words: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_string())
            .filter(|word| !word.is_empty() && seen.insert(word.clone()))
            .collect();

        Dictionary {
            words: words.into(),
        }
    }

    pub fn built_in() -> Self {
        Dictionary::new(Dictionary::BUILT_IN_WORDS)
    }

    pub fn from_settings(settings: &GameSettings) -> Result<Self, Error> {
        let dictionary = match &settings.dictionary_path {
            Some(path) => Dictionary::load(Path::new(path))?,
            None => Dictionary::built_in(),
        };
        log::info!(
            "Words loaded. File: '{}', Words: '{}', MatchingWords: '{}'.",
            settings.dictionary_path.as_deref().unwrap_or("built-in"),
            dictionary.len(),
            dictionary.matching_count()
        );
        Ok(dictionary)
    }

    /// Reads a JSON array of words, or one word per line for any other extension.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let unreadable = |reason: String| {
            Error::Domain(DomainError::DictionaryUnreadable(
                path.display().to_string(),
                reason,
            ))
        };

        let content = fs::read_to_string(path).map_err(|error| unreadable(error.to_string()))?;

        let is_json = path
            .extension()
            .map(|extension| extension.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            let words: Vec<String> =
                serde_json::from_str(&content).map_err(|error| unreadable(error.to_string()))?;
            Ok(Dictionary::new(words))
        } else {
            Ok(Dictionary::new(content.lines()))
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn matching_count(&self) -> usize {
        self.words.iter().filter(|word| matches(word)).count()
    }
}
