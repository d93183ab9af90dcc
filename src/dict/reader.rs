use std::fs::File;
use std::marker::PhantomData;
use std::path::Path;

use log::{debug, info, warn};

use super::iter::Definition;
use super::locator;
use super::types::engines::{Engine, FileSet};
use super::types::error::{DictError, Result};
use super::types::models::{EngineKind, Entry, Language};
use super::utils;

/// Handle on one dictionary of engine `T`.
///
/// Owns the open data stream and the ordered word list. A handle is either
/// empty (no language, no entries, no stream) or fully loaded; a failed
/// [`load`](Self::load) always leaves it empty.
#[derive(Debug)]
pub struct DictReader<T: Engine> {
    loaded: Option<Loaded>,
    _engine: PhantomData<T>,
}

#[derive(Debug)]
struct Loaded {
    language: Language,
    data: File,
    entries: Vec<Entry>,
}

impl<T: Engine> Default for DictReader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Engine> DictReader<T> {
    /// Creates an empty handle.
    pub fn new() -> Self {
        Self {
            loaded: None,
            _engine: PhantomData,
        }
    }

    pub fn engine(&self) -> EngineKind {
        T::KIND
    }

    /// Whether this engine has files for `language`.
    pub fn supported(&self, language: Language) -> bool {
        T::files(language).is_some()
    }

    /// The loaded language, `None` when the handle is empty.
    pub fn language(&self) -> Option<Language> {
        self.loaded.as_ref().map(|loaded| loaded.language)
    }

    /// Loads `language` from the first directory holding all of its files.
    ///
    /// Any previously loaded dictionary is closed first. Directories are
    /// tried in order; once a directory has every file, a parse failure there
    /// is final and is not retried elsewhere.
    ///
    /// # Errors
    /// - `UnsupportedLanguage` if the engine has no files for `language`
    /// - `NotFound` if no directory holds the complete file set
    /// - a format error (`InvalidFormat`, `Truncated`, `CountMismatch`) if
    ///   the files are malformed
    pub fn load<P: AsRef<Path>>(&mut self, locations: &[P], language: Language) -> Result<()> {
        self.unload();

        let files = T::files(language).ok_or_else(|| {
            warn!("Language '{}' is not supported by {} engine", language.name(), T::KIND);
            DictError::UnsupportedLanguage(language.code().to_string())
        })?;

        match Self::open_and_parse(locations, files) {
            Ok((data, entries)) => {
                info!(
                    "Loaded '{}' dictionary by {} engine: {} words",
                    language.name(),
                    T::KIND,
                    entries.len()
                );
                self.loaded = Some(Loaded { language, data, entries });
                Ok(())
            }
            Err(e) => {
                warn!("Error loading '{}' dictionary by {} engine: {}", language.name(), T::KIND, e);
                Err(e)
            }
        }
    }

    fn open_and_parse<P: AsRef<Path>>(locations: &[P], files: FileSet) -> Result<(File, Vec<Entry>)> {
        for location in locations {
            let dir = location.as_ref();
            let Some(mut data) = utils::open_in(dir, files.data) else {
                continue;
            };
            let mut index = match files.index {
                Some(name) => match utils::open_in(dir, name) {
                    Some(index) => Some(index),
                    None => continue,
                },
                None => None,
            };

            info!("Opening {} dictionary files {:?} in {}", T::KIND, files.names(), dir.display());
            return match T::parse_index(&mut data, index.as_mut()) {
                Ok(entries) => Ok((data, entries)),
                Err(e) => {
                    warn!("Dictionary files in '{}' are unreadable", dir.display());
                    Err(e)
                }
            };
        }

        Err(DictError::NotFound {
            files: files.names(),
            searched: locations.len(),
        })
    }

    /// Closes the data stream and drops the word list.
    pub fn unload(&mut self) {
        if let Some(loaded) = self.loaded.take() {
            debug!("Unloading '{}' dictionary by {} engine", loaded.language.name(), T::KIND);
        }
    }

    /// Number of words.
    pub fn size(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// The ordered word list; empty when nothing is loaded.
    pub fn entries(&self) -> &[Entry] {
        self.loaded
            .as_ref()
            .map(|loaded| loaded.entries.as_slice())
            .unwrap_or_default()
    }

    /// The decoded headword at `index`.
    pub fn word(&self, index: usize) -> Option<&str> {
        self.entries().get(index).map(|entry| entry.word.as_str())
    }

    /// Reads the definition of the word at `index`.
    ///
    /// A failure affects only this call; the word list stays usable.
    pub fn text(&mut self, index: usize) -> Result<Definition> {
        let size = self.size();
        let loaded = self
            .loaded
            .as_mut()
            .ok_or(DictError::OutOfRange { index, size })?;
        let entry = loaded
            .entries
            .get(index)
            .ok_or(DictError::OutOfRange { index, size })?;

        let raw = T::read_definition(&mut loaded.data, entry)?;
        Ok(Definition::new(T::KIND, entry.word.as_str(), raw))
    }

    /// Index of the word best matching `query` as a prefix.
    ///
    /// Returns `0` for an empty dictionary too; see [`locator::find`].
    pub fn find(&self, query: &str) -> usize {
        locator::find(self.entries().iter().map(|entry| entry.word.as_str()), query)
    }
}
