//! Shared fixtures: throwaway directories and builders for small SAP and
//! YDP dictionary files.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

/// A directory under the system temp dir, removed on drop.
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(label: &str) -> Self {
        let unique = NEXT_DIR.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "plendict-{}-{}-{}",
            label,
            std::process::id(),
            unique
        ));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path)
            .unwrap_or_else(|e| panic!("cannot create fixture dir {}: {}", path.display(), e));
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, name: &str, bytes: &[u8]) {
        let path = self.path.join(name);
        fs::write(&path, bytes).unwrap_or_else(|e| panic!("cannot write {}: {}", path.display(), e));
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

pub const SAP_MAGIC: u32 = 0xFADE_ABBA;

/// One SAP page: `(word bytes, definition bytes)` per entry.
pub type SapPage<'a> = &'a [(&'a [u8], &'a [u8])];

/// Builds a SAP file whose header word count is the real total.
pub fn sap_file(pages: &[SapPage]) -> Vec<u8> {
    let words: usize = pages.iter().map(|page| page.len()).sum();
    sap_file_with_count(words as u32, pages)
}

/// Builds a SAP file with an arbitrary header word count.
///
/// Each page is laid out as its 6-byte header, the `i16` lengths, the
/// NUL-terminated words and then the definitions, with `text_offset` equal
/// to the payload size.
pub fn sap_file_with_count(word_count: u32, pages: &[SapPage]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&SAP_MAGIC.to_le_bytes());
    out.extend_from_slice(&word_count.to_le_bytes());
    out.extend_from_slice(&(pages.len() as u32).to_le_bytes());

    let table_pos = out.len();
    out.resize(table_pos + 4 * pages.len(), 0);

    for (i, page) in pages.iter().enumerate() {
        let page_offset = out.len() as u32;
        out[table_pos + 4 * i..table_pos + 4 * i + 4].copy_from_slice(&page_offset.to_le_bytes());

        let mut payload = Vec::new();
        for (_, definition) in page.iter() {
            payload.extend_from_slice(&(definition.len() as i16).to_le_bytes());
        }
        for (word, _) in page.iter() {
            payload.extend_from_slice(word);
            payload.push(0);
        }

        out.extend_from_slice(&(page.len() as u16).to_le_bytes());
        out.extend_from_slice(&(payload.len() as u16).to_le_bytes());
        out.extend_from_slice(&(payload.len() as u16).to_le_bytes());
        out.extend_from_slice(&payload);
        for (_, definition) in page.iter() {
            out.extend_from_slice(definition);
        }
    }
    out
}

/// Builds a matching `(IDX, DAT)` pair for YDP entries.
///
/// The IDX word count sits at byte 8 and the table offset (always 32) at
/// byte 16. Word rows store the length including the terminating NUL; the
/// upper length bytes are filled with junk that readers must ignore.
pub fn ydp_files(entries: &[(&[u8], &[u8])]) -> (Vec<u8>, Vec<u8>) {
    let mut dat = Vec::new();
    let mut offsets = Vec::new();
    for (_, definition) in entries {
        offsets.push(dat.len() as u32);
        dat.extend_from_slice(&(definition.len() as u32).to_le_bytes());
        dat.extend_from_slice(definition);
    }

    let table_offset: u32 = 32;
    let mut idx = vec![0u8; table_offset as usize];
    idx[8..10].copy_from_slice(&(entries.len() as u16).to_le_bytes());
    idx[16..20].copy_from_slice(&table_offset.to_le_bytes());
    for ((word, _), offset) in entries.iter().zip(offsets) {
        let length = (word.len() as u32 + 1) | 0xAB00;
        idx.extend_from_slice(&length.to_le_bytes());
        idx.extend_from_slice(&offset.to_le_bytes());
        idx.extend_from_slice(word);
        idx.push(0);
    }
    (idx, dat)
}
