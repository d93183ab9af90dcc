//! # YDP Container Parsing
//!
//! A YDP dictionary is a pair of little-endian files opened from the same
//! directory:
//!
//! - `DICT10x.IDX` holds the word table. The word count is a `u16` at byte
//!   8 and the table offset a `u32` at byte 16. Each row is a `u32` length
//!   (low byte significant), a `u32` definition offset into the DAT file and
//!   the windows-1250 headword.
//! - `DICT10x.DAT` holds the definitions, each a `u32` length followed by
//!   that many bytes of markup.

use std::io::{Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};
use log::{debug, trace};

use crate::dict::codec::charset::{decode_cstr, Charset};
use crate::dict::types::error::{ReadContext, Result};
use crate::dict::types::models::Entry;
use crate::dict::utils;

const WORD_COUNT_POS: u64 = 8;
const TABLE_OFFSET_POS: u64 = 16;

/// Parses the index stream into the ordered word list.
pub fn parse_index<R: Read + Seek>(index: &mut R) -> Result<Vec<Entry>> {
    index.seek(SeekFrom::Start(WORD_COUNT_POS)).context("word count position")?;
    let word_count = index.read_u16::<LittleEndian>().context("word count")?;

    index.seek(SeekFrom::Start(TABLE_OFFSET_POS)).context("table offset position")?;
    let table_offset = index.read_u32::<LittleEndian>().context("table offset")?;
    debug!("YDP index: words={}, table at {:#x}", word_count, table_offset);

    index.seek(SeekFrom::Start(u64::from(table_offset))).context("word table")?;

    let mut entries = Vec::with_capacity(usize::from(word_count));
    for row in 0..word_count {
        // Only the low byte of the length is meaningful
        let length = index.read_u32::<LittleEndian>().context("word length")? & 0xFF;
        let offset = index.read_u32::<LittleEndian>().context("definition offset")?;
        let raw_word = utils::read_bytes(index, u64::from(length), "word text")?;
        let word = decode_cstr(Charset::Cp1250, &raw_word);
        trace!("YDP word {}: '{}' -> {:#x}", row, word, offset);

        entries.push(Entry {
            word,
            offset: u64::from(offset),
            length: None,
        });
    }

    Ok(entries)
}

/// Reads the length-prefixed raw definition bytes of `entry`.
pub fn read_definition<R: Read + Seek>(data: &mut R, entry: &Entry) -> Result<Vec<u8>> {
    data.seek(SeekFrom::Start(entry.offset)).context("definition offset")?;
    let length = data.read_u32::<LittleEndian>().context("definition length")?;
    utils::read_bytes(data, u64::from(length), "definition text")
}
