//! Byte to UTF-8 tables for the three legacy 8-bit encodings.
//!
//! Bytes below `0x80` are ASCII in every table and pass through unchanged.
//! The tables are indexed by `byte - 0x80`.

/// ISO-8859-2 with the C1 range replaced by `?`. Used by SAP words and text.
pub static ISO_VARIANT: [&str; 128] = [
    "?", "?", "?", "?", "?", "?", "?", "?",  // 80
    "?", "?", "?", "?", "?", "?", "?", "?",  // 88
    "?", "?", "?", "?", "?", "?", "?", "?",  // 90
    "?", "?", "?", "?", "?", "?", "?", "?",  // 98
    "\u{a0}", "Ą", "˘", "Ł", "¤", "Ľ", "Ś", "§",  // A0
    "¨", "Š", "Ş", "Ť", "Ź", "\u{ad}", "Ž", "Ż",  // A8
    "°", "ą", "˛", "ł", "´", "ľ", "ś", "ˇ",  // B0
    "¸", "š", "ş", "ť", "ź", "˝", "ž", "ż",  // B8
    "Ŕ", "Á", "Â", "Ă", "Ä", "Ĺ", "Ć", "Ç",  // C0
    "Č", "É", "Ę", "Ë", "Ě", "Í", "Î", "Ď",  // C8
    "Đ", "Ń", "Ň", "Ó", "Ô", "Ő", "Ö", "×",  // D0
    "Ř", "Ů", "Ú", "Ű", "Ü", "Ý", "Ţ", "ß",  // D8
    "ŕ", "á", "â", "ă", "ä", "ĺ", "ć", "ç",  // E0
    "č", "é", "ę", "ë", "ě", "í", "î", "ď",  // E8
    "đ", "ń", "ň", "ó", "ô", "ő", "ö", "÷",  // F0
    "ř", "ů", "ú", "ű", "ü", "ý", "ţ", "˙",  // F8
];

/// windows-1250 as found in YDP data.
///
/// Differs from the standard code page at `0x87` (`ci` ligature), `0x8F`
/// (`Ż`), `0xE0` (`à`) and `0xEF` (`ï`); unassigned slots are `?`.
pub static CP1250_VARIANT: [&str; 128] = [
    "€", "?", "‚", "?", "„", "…", "†", "ci",  // 80
    "?", "‰", "Š", "‹", "Ś", "Ť", "Ž", "Ż",  // 88
    "?", "‘", "’", "“", "”", "•", "–", "—",  // 90
    "?", "™", "š", "›", "ś", "ť", "ž", "ź",  // 98
    "\u{a0}", "ˇ", "˘", "Ł", "¤", "Ą", "¦", "§",  // A0
    "¨", "©", "Ş", "«", "¬", "\u{ad}", "®", "Ż",  // A8
    "°", "±", "˛", "ł", "´", "µ", "¶", "·",  // B0
    "¸", "ą", "ş", "»", "Ľ", "˝", "ľ", "ż",  // B8
    "Ŕ", "Á", "Â", "Ă", "Ä", "Ĺ", "Ć", "Ç",  // C0
    "Č", "É", "Ę", "Ë", "Ě", "Í", "Î", "Ď",  // C8
    "Đ", "Ń", "Ň", "Ó", "Ô", "Ő", "Ö", "×",  // D0
    "Ř", "Ů", "Ú", "Ű", "Ü", "Ý", "Ţ", "ß",  // D8
    "à", "á", "â", "ă", "ä", "ĺ", "ć", "ç",  // E0
    "č", "é", "ę", "ë", "ě", "í", "î", "ï",  // E8
    "đ", "ń", "ň", "ó", "ô", "ő", "ö", "÷",  // F0
    "ř", "ů", "ú", "ű", "ü", "ý", "ţ", "˙",  // F8
];

/// IPA symbols of the YDP phonetic font. Covers `0x80..=0x9F` only.
pub static PHONETIC_VARIANT: [&str; 32] = [
    "?", "?", "ɔ", "ʒ", "?", "ʃ", "ɛ", "ʌ",  // 80
    "ə", "θ", "ɪ", "ɑ", "?", "ː", "ˈ", "?",  // 88
    "ŋ", "?", "?", "?", "?", "?", "?", "ð",  // 90
    "æ", "?", "?", "?", "?", "?", "?", "?",  // 98
];

/// Selects one of the legacy byte tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    Iso,
    Cp1250,
    Phonetic,
}

impl Charset {
    fn table(self) -> &'static [&'static str] {
        match self {
            Charset::Iso => &ISO_VARIANT,
            Charset::Cp1250 => &CP1250_VARIANT,
            Charset::Phonetic => &PHONETIC_VARIANT,
        }
    }

    /// Appends the UTF-8 rendition of a single legacy byte.
    ///
    /// Bytes outside the table (ASCII, and `0xA0..=0xFF` for the phonetic
    /// table) are taken as the code point of the same value.
    pub fn push_byte(self, out: &mut String, byte: u8) {
        match byte.checked_sub(0x80).and_then(|i| self.table().get(i as usize)) {
            Some(mapped) => out.push_str(mapped),
            None => out.push(char::from(byte)),
        }
    }

    /// Decodes a whole buffer. Never fails: every byte has a mapping.
    pub fn decode(self, bytes: &[u8]) -> String {
        let mut out = String::with_capacity(bytes.len() + bytes.len() / 4);
        for &byte in bytes {
            self.push_byte(&mut out, byte);
        }
        out
    }
}

/// Decodes bytes up to the first NUL, the way headwords are stored.
pub fn decode_cstr(charset: Charset, bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    charset.decode(&bytes[..end])
}
