//! # SAP Container Parsing
//!
//! A SAP dictionary is a single little-endian file of word pages:
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ magic        u32 (FADEABBA)  │
//! │ word_count   u32             │
//! │ page_count   u32             │
//! │ page_offsets page_count×u32  │
//! ├──────────────────────────────┤
//! │ page: words u16, size u16,   │ ← at page_offsets[i]
//! │       text_offset u16,       │
//! │       payload[size]          │
//! ├──────────────────────────────┤
//! │ definition text              │ ← page + text_offset + 6
//! └──────────────────────────────┘
//! ```
//!
//! The page payload starts with one `i16` definition length per word,
//! followed by the NUL-terminated headwords. Definitions of a page are
//! stored back to back in word order.

use std::io::{Read, Seek, SeekFrom};

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};
use log::{debug, trace};

use crate::dict::codec::charset::Charset;
use crate::dict::types::error::{DictError, ReadContext, Result};
use crate::dict::types::models::Entry;
use crate::dict::utils;

/// File signature of SAP dictionaries.
pub const SAP_MAGIC: u32 = 0xFADE_ABBA;

/// Size of the `words`, `size`, `text_offset` page header.
const PAGE_HEADER_SIZE: u64 = 6;

/// Parses the header and every page into the ordered word list.
///
/// Any short read or failed seek aborts the whole parse.
pub fn parse_index<R: Read + Seek>(stream: &mut R) -> Result<Vec<Entry>> {
    stream.seek(SeekFrom::Start(0)).context("file header")?;

    let magic = stream.read_u32::<LittleEndian>().context("magic number")?;
    if magic != SAP_MAGIC {
        return Err(DictError::InvalidFormat(format!(
            "Bad SAP magic number: expected {:#010x}, got {:#010x}",
            SAP_MAGIC, magic
        )));
    }
    let word_count = stream.read_u32::<LittleEndian>().context("word count")?;
    let page_count = stream.read_u32::<LittleEndian>().context("page count")?;
    debug!("SAP header: words={}, pages={}", word_count, page_count);

    let mut page_offsets = Vec::with_capacity(page_count.min(1 << 16) as usize);
    for _ in 0..page_count {
        page_offsets.push(stream.read_u32::<LittleEndian>().context("page offset table")?);
    }

    let mut entries = Vec::with_capacity(word_count.min(1 << 20) as usize);
    for (page_index, &page_offset) in page_offsets.iter().enumerate() {
        let added = read_page(stream, u64::from(page_offset), &mut entries)?;
        trace!("SAP page {} at {:#x}: {} words", page_index, page_offset, added);
    }

    if entries.len() as u64 != u64::from(word_count) {
        return Err(DictError::CountMismatch {
            item_type: "words in pages",
            expected: u64::from(word_count),
            found: entries.len() as u64,
        });
    }

    Ok(entries)
}

/// Reads one page and appends its words. Returns the number of words added.
fn read_page<R: Read + Seek>(stream: &mut R, page_offset: u64, entries: &mut Vec<Entry>) -> Result<usize> {
    stream.seek(SeekFrom::Start(page_offset)).context("page offset")?;
    let page_words = stream.read_u16::<LittleEndian>().context("page word count")? as usize;
    let page_size = stream.read_u16::<LittleEndian>().context("page size")?;
    let text_offset = stream.read_u16::<LittleEndian>().context("page text offset")?;
    let payload = utils::read_bytes(stream, u64::from(page_size), "page payload")?;

    let lengths_size = page_words * 2;
    if lengths_size > payload.len() {
        return Err(DictError::InvalidFormat(format!(
            "Page at {:#x} declares {} words but holds only {} bytes",
            page_offset,
            page_words,
            payload.len()
        )));
    }
    let (lengths, mut words) = payload.split_at(lengths_size);

    let mut definition_offset = page_offset + u64::from(text_offset) + PAGE_HEADER_SIZE;
    for raw_length in lengths.chunks_exact(2) {
        let length = LittleEndian::read_i16(raw_length);
        let length = u32::try_from(length).map_err(|_| {
            DictError::InvalidFormat(format!("Negative definition length {} in page at {:#x}", length, page_offset))
        })?;

        let end = words
            .iter()
            .position(|&byte| byte == 0)
            .ok_or_else(|| DictError::InvalidFormat(format!("Missing null terminator in page at {:#x}", page_offset)))?;
        let word = Charset::Iso.decode(&words[..end]);
        words = &words[end + 1..];

        entries.push(Entry {
            word,
            offset: definition_offset,
            length: Some(length),
        });
        definition_offset += u64::from(length);
    }

    Ok(page_words)
}

/// Reads the raw definition bytes recorded for `entry`.
pub fn read_definition<R: Read + Seek>(stream: &mut R, entry: &Entry) -> Result<Vec<u8>> {
    let length = entry
        .length
        .ok_or_else(|| DictError::InvalidFormat(format!("SAP entry '{}' has no definition length", entry.word)))?;
    stream.seek(SeekFrom::Start(entry.offset)).context("definition offset")?;
    utils::read_bytes(stream, u64::from(length), "definition text")
}
