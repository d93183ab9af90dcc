//! Definitions and the iterators over their styled runs.
//!
//! A [`Definition`] owns the raw bytes read from the dictionary. Decoding is
//! deferred until [`Definition::runs`] is iterated, and every call starts a
//! fresh pass, so a definition can be rendered any number of times.
//!
//! # Example
//! ```no_run
//! # use plendict_reader::{DictReader, Language, Sap};
//! let mut dict = DictReader::<Sap>::new();
//! dict.load(&["/usr/share/dict"], Language::EngToPol).unwrap();
//! let definition = dict.text(0).unwrap();
//! for run in definition.runs() {
//!     println!("{:?}: {}", (run.bold, run.italic), run.text);
//! }
//! ```

use super::codec::sap_markup::SapRuns;
use super::codec::ydp_markup::YdpRuns;
use super::types::engines::{Engine, Sap, Ydp};
use super::types::models::{EngineKind, StyledRun};

/// The raw markup of one dictionary entry, ready to be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    engine: EngineKind,
    word: String,
    raw: Vec<u8>,
}

impl Definition {
    pub fn new(engine: EngineKind, word: impl Into<String>, raw: Vec<u8>) -> Self {
        Self {
            engine,
            word: word.into(),
            raw,
        }
    }

    pub fn engine(&self) -> EngineKind {
        self.engine
    }

    /// The headword this definition belongs to.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The undecoded definition bytes.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Starts a new pass over the styled runs.
    pub fn runs(&self) -> Runs<'_> {
        match self.engine {
            EngineKind::Sap => Sap::decode(&self.word, &self.raw),
            EngineKind::Ydp => Ydp::decode(&self.word, &self.raw),
        }
    }

    /// The text of all runs concatenated, without styling.
    pub fn plain_text(&self) -> String {
        self.runs().map(|run| run.text).collect()
    }
}

impl<'a> IntoIterator for &'a Definition {
    type Item = StyledRun;
    type IntoIter = Runs<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs()
    }
}

/// Iterator over styled runs, dispatching to the engine's interpreter.
#[derive(Debug, Clone)]
pub enum Runs<'a> {
    Sap(SapRuns<'a>),
    Ydp(YdpRuns<'a>),
}

impl<'a> Iterator for Runs<'a> {
    type Item = StyledRun;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Runs::Sap(runs) => runs.next(),
            Runs::Ydp(runs) => runs.next(),
        }
    }
}
