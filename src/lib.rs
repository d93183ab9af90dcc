//! # plendict-reader
//!
//! A reader for the legacy SAP (`dvp_*.dic`) and YDP (`DICT10x.DAT/IDX`)
//! English-Polish dictionary formats.
//!
//! Exposes the ordered word list, lazily read definitions decoded into
//! styled text runs, and an approximate prefix search for incremental lookup.
//! Dictionaries are read-only.
pub mod dict;

// Re-export the main types for convenience
pub use dict::{
    DictReader,
    Dictionary,
    iter::{Definition, Runs},
    locator::{find, normalize},
    types::{
        engines::{Engine, FileSet, Sap, Ydp},
        error::{DictError, Result},
        models::{Align, Color, EngineKind, Entry, Language, Margins, Script, StyledRun},
    },
};
