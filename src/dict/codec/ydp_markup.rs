//! Interpreter for the YDP definition markup.
//!
//! YDP definitions use a small RTF-like language: `{`/`}` open and close
//! groups that inherit a copy of the enclosing formatting state, and
//! backslash control words (`\b`, `\i0`, `\par`, ...) change the state of the
//! innermost group.
//!
//! Text is only flushed at group boundaries and at the end of input, and a
//! flushed run takes the formatting of the state current *at flush time*.
//! Control words that change style between two flushes therefore restyle all
//! text collected since the previous flush; they never split a run.

use super::charset::Charset;
use crate::dict::types::models::{Align, Color, Margins, Script, StyledRun};

/// Formatting state of one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InterpreterState {
    /// Selects the phonetic byte table instead of windows-1250.
    pub phonetic: bool,
    pub bold: bool,
    pub italic: bool,
    pub script: Script,
    pub color: Color,
    pub align: Align,
    pub margin_left: i32,
    pub margin_right: i32,
    pub indent: i32,
}

impl InterpreterState {
    fn charset(&self) -> Charset {
        if self.phonetic {
            Charset::Phonetic
        } else {
            Charset::Cp1250
        }
    }

    fn style(&self, text: String) -> StyledRun {
        StyledRun {
            text,
            bold: self.bold,
            italic: self.italic,
            script: self.script,
            align: self.align,
            color: self.color,
            margins: Some(Margins {
                left: self.margin_left,
                right: self.margin_right,
                indent: self.indent,
            }),
        }
    }
}

/// Creates the run iterator for one YDP definition.
///
/// The headword is not referenced by YDP markup. Input ends at the first NUL
/// byte, if any.
pub fn decode<'a>(_word: &'a str, raw: &'a [u8]) -> YdpRuns<'a> {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    YdpRuns {
        raw: &raw[..end],
        pos: 0,
        stack: vec![InterpreterState::default()],
        pending: Vec::new(),
        finished: false,
    }
}

/// Iterator over the styled runs of a YDP definition.
#[derive(Debug, Clone)]
pub struct YdpRuns<'a> {
    raw: &'a [u8],
    pos: usize,
    /// Never empty: the outermost state is not popped.
    stack: Vec<InterpreterState>,
    /// Raw bytes since the last flush; decoded when flushed.
    pending: Vec<u8>,
    finished: bool,
}

impl<'a> YdpRuns<'a> {
    /// The formatting state of the innermost open group.
    pub fn state(&self) -> &InterpreterState {
        &self.stack[self.stack.len() - 1]
    }

    fn state_mut(&mut self) -> &mut InterpreterState {
        let top = self.stack.len() - 1;
        &mut self.stack[top]
    }

    fn step(&mut self) -> Option<StyledRun> {
        let Some(&byte) = self.raw.get(self.pos) else {
            self.finished = true;
            return self.flush();
        };
        self.pos += 1;

        match byte {
            b'{' => {
                let run = self.flush();
                let inherited = *self.state();
                self.stack.push(inherited);
                run
            }
            b'}' => {
                let run = self.flush();
                if self.stack.len() > 1 {
                    self.stack.pop();
                }
                run
            }
            b'\\' => {
                self.parse_control();
                None
            }
            // DEL stands in for a tilde in YDP data
            0x7f => {
                self.pending.push(b'~');
                None
            }
            _ => {
                self.pending.push(byte);
                None
            }
        }
    }

    /// Handles the bytes following a backslash.
    fn parse_control(&mut self) {
        if let Some(&escaped @ (b'\\' | b'{' | b'}')) = self.raw.get(self.pos) {
            self.pending.push(escaped);
            self.pos += 1;
            return;
        }

        let start = self.pos;
        let mut end = start;
        while self.raw.get(end).is_some_and(|b| b.is_ascii_alphanumeric()) {
            end += 1;
        }

        // A lone backslash is dropped and scanning resumes right after it.
        if end == start {
            return;
        }

        self.pos = end;
        if self.raw.get(end) == Some(&b' ') {
            self.pos += 1;
        }

        let raw = self.raw;
        let (name, parameter) = split_parameter(&raw[start..end]);
        self.apply_control(name, parameter);
    }

    fn apply_control(&mut self, name: &[u8], parameter: i32) {
        match name {
            b"b" => self.state_mut().bold = parameter != 0,
            b"i" => self.state_mut().italic = parameter != 0,
            b"f" => self.state_mut().phonetic = parameter == 1,
            b"cf" => {
                if parameter == 2 {
                    self.state_mut().color = Color::Blue;
                }
            }
            b"cb" => {}
            b"fi" => self.state_mut().indent = parameter,
            b"li" => self.state_mut().margin_left = parameter,
            b"ri" => self.state_mut().margin_right = parameter,
            b"sa" => self.pending.push(b'\t'),
            b"sb" => self.pending.insert(0, b'\t'),
            b"qc" => self.state_mut().align = Align::Center,
            b"par" | b"line" => self.pending.push(b'\n'),
            b"pard" => {
                let state = self.state_mut();
                state.align = Align::None;
                state.indent = 0;
                state.margin_left = 0;
                state.margin_right = 0;
            }
            b"super" => self.state_mut().script = Script::Super,
            _ => {
                self.pending.push(b'\\');
                self.pending.extend_from_slice(name);
            }
        }
    }

    fn flush(&mut self) -> Option<StyledRun> {
        if self.pending.is_empty() {
            return None;
        }
        let state = *self.state();
        let text = state.charset().decode(&self.pending);
        self.pending.clear();
        Some(state.style(text))
    }
}

impl<'a> Iterator for YdpRuns<'a> {
    type Item = StyledRun;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            if let Some(run) = self.step() {
                return Some(run);
            }
        }
        None
    }
}

/// Splits a control word into its name and numeric parameter.
///
/// Scans from the end: trailing digits form the value, a `-` negates it and
/// ends the name there, and the first letter ends the scan. The parameter
/// defaults to `1` only when the very last character is a letter, so `b` is
/// `1`, `b0` is `0`, and `cf2` is `2`.
pub fn split_parameter(word: &[u8]) -> (&[u8], i32) {
    let Some(last) = word.len().checked_sub(1) else {
        return (word, 0);
    };

    let mut parameter: i32 = 0;
    let mut multiplier: i32 = 1;
    let mut name_end = word.len();

    for pos in (0..=last).rev() {
        match word[pos] {
            digit @ b'0'..=b'9' => {
                parameter = parameter.wrapping_add(i32::from(digit - b'0').wrapping_mul(multiplier));
            }
            b'-' => {
                name_end = pos;
                parameter = parameter.wrapping_neg();
                break;
            }
            _ => {
                name_end = pos + 1;
                if pos == last {
                    parameter = 1;
                }
                break;
            }
        }
        multiplier = multiplier.wrapping_mul(10);
    }

    (&word[..name_end], parameter)
}
