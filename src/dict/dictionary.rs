//! Runtime choice between the two engines.

use std::path::Path;

use super::iter::Definition;
use super::reader::DictReader;
use super::types::engines::{Sap, Ydp};
use super::types::error::Result;
use super::types::models::{EngineKind, Entry, Language};

/// A dictionary handle whose engine is picked at runtime.
///
/// Forwards every operation to the wrapped [`DictReader`].
#[derive(Debug)]
pub enum Dictionary {
    Sap(DictReader<Sap>),
    Ydp(DictReader<Ydp>),
}

impl Dictionary {
    /// Creates an empty handle for `engine`.
    pub fn new(engine: EngineKind) -> Self {
        match engine {
            EngineKind::Sap => Dictionary::Sap(DictReader::new()),
            EngineKind::Ydp => Dictionary::Ydp(DictReader::new()),
        }
    }

    pub fn engine(&self) -> EngineKind {
        match self {
            Dictionary::Sap(dict) => dict.engine(),
            Dictionary::Ydp(dict) => dict.engine(),
        }
    }

    pub fn load<P: AsRef<Path>>(&mut self, locations: &[P], language: Language) -> Result<()> {
        match self {
            Dictionary::Sap(dict) => dict.load(locations, language),
            Dictionary::Ydp(dict) => dict.load(locations, language),
        }
    }

    pub fn unload(&mut self) {
        match self {
            Dictionary::Sap(dict) => dict.unload(),
            Dictionary::Ydp(dict) => dict.unload(),
        }
    }

    pub fn supported(&self, language: Language) -> bool {
        match self {
            Dictionary::Sap(dict) => dict.supported(language),
            Dictionary::Ydp(dict) => dict.supported(language),
        }
    }

    pub fn language(&self) -> Option<Language> {
        match self {
            Dictionary::Sap(dict) => dict.language(),
            Dictionary::Ydp(dict) => dict.language(),
        }
    }

    pub fn entries(&self) -> &[Entry] {
        match self {
            Dictionary::Sap(dict) => dict.entries(),
            Dictionary::Ydp(dict) => dict.entries(),
        }
    }

    pub fn size(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn word(&self, index: usize) -> Option<&str> {
        match self {
            Dictionary::Sap(dict) => dict.word(index),
            Dictionary::Ydp(dict) => dict.word(index),
        }
    }

    pub fn text(&mut self, index: usize) -> Result<Definition> {
        match self {
            Dictionary::Sap(dict) => dict.text(index),
            Dictionary::Ydp(dict) => dict.text(index),
        }
    }

    pub fn find(&self, query: &str) -> usize {
        match self {
            Dictionary::Sap(dict) => dict.find(query),
            Dictionary::Ydp(dict) => dict.find(query),
        }
    }
}
