//! Interpreter for the SAP definition markup.
//!
//! SAP definitions are ISO-8859-2 text where a handful of punctuation bytes
//! act as control characters:
//!
//! | byte | effect                                                     |
//! |------|------------------------------------------------------------|
//! | `)`  | `)` followed by a space                                    |
//! | `{`  | flush pending text as a plain run                          |
//! | `}`  | flush pending text as a bold run, then start with `" - "`  |
//! | `-`  | `" - "`                                                    |
//! | `*`  | the headword                                               |
//! | `$`  | a new bulleted line                                        |
//! | `#`  | two-byte big-endian grammar id, rendered as italic labels  |

use std::collections::VecDeque;

use super::charset::Charset;
use crate::dict::types::models::{Color, StyledRun};

/// Grammar labels as `(label, value, mask)`: a label applies to a grammar id
/// when `id & mask == value`.
///
/// Tense and degree share bits `0x7800`; any given id selects one of them.
pub static GRAMMAR_LABELS: [(&str, u16, u16); 30] = [
    // part of speech
    ("przymiotnik", 0x0001, 0x000f),
    ("przysłówek", 0x0002, 0x000f),
    ("spójnik", 0x0003, 0x000f),
    ("liczebnik", 0x0004, 0x000f),
    ("partykuła", 0x0005, 0x000f),
    ("przedrostek", 0x0006, 0x000f),
    ("przyimek", 0x0007, 0x000f),
    ("zaimek", 0x0008, 0x000f),
    ("rzeczownik", 0x0009, 0x000f),
    ("czasownik posiłkowy", 0x000a, 0x000f),
    ("czasownik nieprzechodni", 0x000b, 0x000f),
    ("czasownik nieosobowy", 0x000c, 0x000f),
    ("czasownik zwrotny", 0x000d, 0x000f),
    ("czasownik przechodni", 0x000e, 0x000f),
    ("czasownik", 0x000f, 0x000f),
    // gender
    ("rodzaj żeński", 0x0010, 0x0030),
    ("rodzaj męski", 0x0020, 0x0030),
    ("rodzaj nijaki", 0x0030, 0x0030),
    // number
    ("liczba pojedyncza", 0x0040, 0x00c0),
    ("liczba mnoga", 0x0080, 0x00c0),
    ("tylko liczba mnoga", 0x00c0, 0x00c0),
    // flags
    ("regularny", 0x0100, 0x0100),
    ("skrót", 0x0200, 0x0200),
    ("wyraz potoczny", 0x0400, 0x0400),
    // tense
    ("czas przeszły", 0x0800, 0x7800),
    ("czas teraźniejszy", 0x1000, 0x7800),
    ("czas przyszły", 0x1800, 0x7800),
    ("bezokolicznik", 0x2000, 0x7800),
    // degree
    ("stopień najwyższy", 0x4000, 0x7800),
    ("stopień wyższy", 0x6000, 0x7800),
];

/// Returns every grammar label matching `id`, in table order.
pub fn grammar_labels(id: u16) -> Vec<&'static str> {
    GRAMMAR_LABELS
        .iter()
        .filter(|(_, value, mask)| id & mask == *value)
        .map(|(label, _, _)| *label)
        .collect()
}

#[derive(Debug, Clone, Copy)]
enum Style {
    Plain,
    Bold,
    Grammar,
}

/// Creates the run iterator for one SAP definition.
pub fn decode<'a>(word: &'a str, raw: &'a [u8]) -> SapRuns<'a> {
    SapRuns {
        word,
        raw,
        pos: 0,
        pending: String::new(),
        ready: VecDeque::new(),
        finished: false,
    }
}

/// Iterator over the styled runs of a SAP definition.
///
/// Scans the raw bytes lazily; a single control byte can complete up to two
/// runs, which are queued until consumed.
#[derive(Debug, Clone)]
pub struct SapRuns<'a> {
    word: &'a str,
    raw: &'a [u8],
    pos: usize,
    pending: String,
    ready: VecDeque<StyledRun>,
    finished: bool,
}

impl<'a> SapRuns<'a> {
    fn step(&mut self) {
        let Some(&byte) = self.raw.get(self.pos) else {
            self.flush(Style::Plain);
            self.finished = true;
            return;
        };
        self.pos += 1;

        match byte {
            b')' => self.pending.push_str(") "),
            b'{' => self.flush(Style::Plain),
            b'}' => {
                self.flush(Style::Bold);
                self.pending.push_str(" - ");
            }
            b'-' => self.pending.push_str(" - "),
            b'*' => self.pending.push_str(self.word),
            b'$' => self.pending.push_str("\n • "),
            b'#' => {
                self.flush(Style::Plain);
                let id = self.read_grammar_id();
                self.pending.push_str(&grammar_labels(id).join(", "));
                self.pending.push(' ');
                self.flush(Style::Grammar);
            }
            _ => Charset::Iso.push_byte(&mut self.pending, byte),
        }
    }

    /// Reads the big-endian id after `#`. Bytes past the end count as zero.
    fn read_grammar_id(&mut self) -> u16 {
        let high = self.raw.get(self.pos).copied().unwrap_or(0);
        let low = self.raw.get(self.pos + 1).copied().unwrap_or(0);
        self.pos = (self.pos + 2).min(self.raw.len());
        u16::from_be_bytes([high, low])
    }

    fn flush(&mut self, style: Style) {
        if self.pending.is_empty() {
            return;
        }
        let mut run = StyledRun::plain(std::mem::take(&mut self.pending));
        match style {
            Style::Plain => {}
            Style::Bold => run.bold = true,
            Style::Grammar => {
                run.italic = true;
                run.color = Color::Blue;
            }
        }
        self.ready.push_back(run);
    }
}

impl<'a> Iterator for SapRuns<'a> {
    type Item = StyledRun;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(run) = self.ready.pop_front() {
                return Some(run);
            }
            if self.finished {
                return None;
            }
            self.step();
        }
    }
}
