//! Specialization logic for the two dictionary engines (SAP vs YDP).

use std::io::{Read, Seek};

use super::error::{DictError, Result};
use super::models::{EngineKind, Entry, Language};
use crate::dict::codec::{sap_markup, ydp_markup};
use crate::dict::format::{sap, ydp};
use crate::dict::iter::Runs;

/// The files making up one dictionary, opened from the same directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSet {
    /// Stream kept open for definition lookups.
    pub data: &'static str,
    /// Stream parsed for the word list and closed afterwards, if separate.
    pub index: Option<&'static str>,
}

impl FileSet {
    pub fn names(&self) -> Vec<&'static str> {
        std::iter::once(self.data).chain(self.index).collect()
    }
}

/// A trait that defines the behavior of a specific dictionary engine.
pub trait Engine {
    /// Engine tag used for logging and runtime dispatch.
    const KIND: EngineKind;

    /// The files holding `language`, or `None` if the engine lacks it.
    fn files(language: Language) -> Option<FileSet>;

    /// Builds the ordered word list.
    ///
    /// `index` is the separate index stream for engines that have one; it is
    /// dropped by the caller once this returns.
    fn parse_index<R: Read + Seek>(data: &mut R, index: Option<&mut R>) -> Result<Vec<Entry>>;

    /// Reads the raw (still encoded) definition bytes of `entry`.
    fn read_definition<R: Read + Seek>(data: &mut R, entry: &Entry) -> Result<Vec<u8>>;

    /// Interprets raw definition bytes as styled runs.
    fn decode<'a>(word: &'a str, raw: &'a [u8]) -> Runs<'a>;
}

/// Zero-cost marker struct for SAP dictionaries.
#[derive(Debug)]
pub struct Sap;

impl Engine for Sap {
    const KIND: EngineKind = EngineKind::Sap;

    fn files(language: Language) -> Option<FileSet> {
        let data = match language {
            Language::EngToPol => "dvp_1.dic",
            Language::PolToEng => "dvp_2.dic",
        };
        Some(FileSet { data, index: None })
    }

    fn parse_index<R: Read + Seek>(data: &mut R, _index: Option<&mut R>) -> Result<Vec<Entry>> {
        sap::parse_index(data)
    }

    fn read_definition<R: Read + Seek>(data: &mut R, entry: &Entry) -> Result<Vec<u8>> {
        sap::read_definition(data, entry)
    }

    fn decode<'a>(word: &'a str, raw: &'a [u8]) -> Runs<'a> {
        Runs::Sap(sap_markup::decode(word, raw))
    }
}

/// Zero-cost marker struct for YDP dictionaries.
#[derive(Debug)]
pub struct Ydp;

impl Engine for Ydp {
    const KIND: EngineKind = EngineKind::Ydp;

    fn files(language: Language) -> Option<FileSet> {
        let (data, index) = match language {
            Language::EngToPol => ("DICT100.DAT", "DICT100.IDX"),
            Language::PolToEng => ("DICT101.DAT", "DICT101.IDX"),
        };
        Some(FileSet { data, index: Some(index) })
    }

    fn parse_index<R: Read + Seek>(_data: &mut R, index: Option<&mut R>) -> Result<Vec<Entry>> {
        let index = index.ok_or_else(|| DictError::InvalidFormat("YDP dictionary requires an index stream".to_string()))?;
        ydp::parse_index(index)
    }

    fn read_definition<R: Read + Seek>(data: &mut R, entry: &Entry) -> Result<Vec<u8>> {
        ydp::read_definition(data, entry)
    }

    fn decode<'a>(word: &'a str, raw: &'a [u8]) -> Runs<'a> {
        Runs::Ydp(ydp_markup::decode(word, raw))
    }
}
