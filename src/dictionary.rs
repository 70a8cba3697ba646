//! Dictionary loading and word filtering for passphrase generation.
//!
//! The raw word list is normalized once per [`Dictionary`] and cached behind
//! a lock; length filtering happens per request so callers with different
//! bounds share the same load.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::{Error, Result};

const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";
const FALLBACK_DICTIONARY: &str = "/usr/dict/words";

/// A lazily loaded, read-only word list.
///
/// Loading happens at most once; concurrent first-callers block on the write
/// lock rather than racing to reload. After the load the list is shared
/// read-only via `Arc`.
pub struct Dictionary {
    path: PathBuf,
    words: RwLock<Option<Arc<Vec<String>>>>,
}

impl Dictionary {
    /// A dictionary backed by the given file, one word per line.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            words: RwLock::new(None),
        }
    }

    /// Resolves the dictionary path from the environment.
    ///
    /// Priority:
    /// 1. Environment variable `PWD_DICTIONARY_PATH`
    /// 2. `/usr/share/dict/words`
    /// 3. `/usr/dict/words` (only if the default does not exist)
    pub fn from_env() -> Self {
        if let Ok(path) = std::env::var("PWD_DICTIONARY_PATH") {
            return Self::new(path);
        }
        let default = Path::new(DEFAULT_DICTIONARY);
        if !default.exists() && Path::new(FALLBACK_DICTIONARY).exists() {
            return Self::new(FALLBACK_DICTIONARY);
        }
        Self::new(default)
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the cached normalized word list, loading it on first use.
    pub fn words(&self) -> Result<Arc<Vec<String>>> {
        {
            let guard = self.words.read().unwrap();
            if let Some(words) = guard.as_ref() {
                return Ok(Arc::clone(words));
            }
        }

        let mut guard = self.words.write().unwrap();
        // Another caller may have completed the load while we waited.
        if let Some(words) = guard.as_ref() {
            return Ok(Arc::clone(words));
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|source| Error::DictionaryUnavailable {
                path: self.path.clone(),
                source,
            })?;

        let words: Vec<String> = content.lines().filter_map(normalize_word).collect();

        #[cfg(feature = "tracing")]
        tracing::info!(
            "dictionary loaded: {} words from {:?}",
            words.len(),
            self.path
        );

        let words = Arc::new(words);
        *guard = Some(Arc::clone(&words));
        Ok(words)
    }

    /// Words whose normalized length falls in `[min, max]`.
    ///
    /// Fails with [`Error::DictionaryEmpty`] when nothing survives the
    /// filter; the caller distinguishes the "too few words" case because it
    /// knows how many it needs.
    pub fn filtered(&self, min: usize, max: usize) -> Result<Vec<String>> {
        let words = self.words()?;
        let filtered: Vec<String> = words
            .iter()
            .filter(|w| (min..=max).contains(&w.len()))
            .cloned()
            .collect();

        if filtered.is_empty() {
            return Err(Error::DictionaryEmpty { min, max });
        }
        Ok(filtered)
    }
}

/// Normalizes one dictionary line.
///
/// Only words made entirely of ASCII letters are accepted, lowercased.
/// Entries with accents, digits or punctuation are dropped rather than
/// transliterated.
fn normalize_word(line: &str) -> Option<String> {
    let word = line.trim();
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(word.to_ascii_lowercase())
}
