//! Core data structures shared by both dictionary engines.
//!
//! This module defines the fundamental types used throughout the library:
//! - Engine and language selectors
//! - Word index entries
//! - Styled text runs produced by the markup decoders

use std::fmt;
use std::str::FromStr;

use super::error::DictError;

/// Translation direction of a dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    EngToPol,
    PolToEng,
}

impl Language {
    /// Every language known to the crate, in menu order.
    pub const ALL: [Language; 2] = [Language::EngToPol, Language::PolToEng];

    /// Short code used on the command line (`eng-pol`, `pol-eng`).
    pub fn code(&self) -> &'static str {
        match self {
            Language::EngToPol => "eng-pol",
            Language::PolToEng => "pol-eng",
        }
    }

    /// Human-readable name suitable for a language menu.
    pub fn name(&self) -> &'static str {
        match self {
            Language::EngToPol => "English to Polish",
            Language::PolToEng => "Polish to English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = DictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| s.eq_ignore_ascii_case(lang.code()) || s.eq_ignore_ascii_case(lang.name()))
            .ok_or_else(|| DictError::UnsupportedLanguage(s.to_string()))
    }
}

/// The dictionary binary-format family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    Sap,
    Ydp,
}

impl EngineKind {
    pub const ALL: [EngineKind; 2] = [EngineKind::Sap, EngineKind::Ydp];

    pub fn name(&self) -> &'static str {
        match self {
            EngineKind::Sap => "sap",
            EngineKind::Ydp => "ydp",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EngineKind {
    type Err = DictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EngineKind::ALL
            .into_iter()
            .find(|engine| s.eq_ignore_ascii_case(engine.name()))
            .ok_or_else(|| DictError::InvalidFormat(format!("Unknown dictionary engine: {}", s)))
    }
}

/// A single headword from the dictionary index.
///
/// Associates the decoded word with the location of its raw definition
/// bytes in the data stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    /// Absolute byte offset of the definition in the data stream.
    /// SAP points at the text itself, YDP at its `u32` length prefix.
    pub offset: u64,
    /// Definition length in bytes. Only SAP stores it in the index.
    pub length: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Script {
    #[default]
    None,
    Super,
    Sub,
    Normal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    None,
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    None,
    Red,
    Green,
    Blue,
}

/// Paragraph geometry carried by YDP runs. Not needed for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Margins {
    pub left: i32,
    pub right: i32,
    pub indent: i32,
}

/// A contiguous span of decoded text sharing one formatting state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub script: Script,
    pub align: Align,
    pub color: Color,
    /// Present on YDP runs only.
    pub margins: Option<Margins>,
}

impl StyledRun {
    /// A run without any styling.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn is_plain(&self) -> bool {
        !self.bold
            && !self.italic
            && self.script == Script::None
            && self.align == Align::None
            && self.color == Color::None
    }
}
