use encoding_rs::{ISO_8859_2, WINDOWS_1250};
use plendict_reader::dict::codec::charset::{decode_cstr, Charset};

/// Bytes where YDP data disagrees with the standard windows-1250 table.
const CP1250_FIXUPS: [(u8, &str); 9] = [
    (0x81, "?"),
    (0x83, "?"),
    (0x87, "ci"),
    (0x88, "?"),
    (0x8f, "Ż"),
    (0x90, "?"),
    (0x98, "?"),
    (0xe0, "à"),
    (0xef, "ï"),
];

#[test]
fn ascii_passes_through_every_table() {
    let ascii: Vec<u8> = (0x01..0x80).collect();
    let expected: String = ascii.iter().map(|&b| char::from(b)).collect();
    for charset in [Charset::Iso, Charset::Cp1250, Charset::Phonetic] {
        assert_eq!(charset.decode(&ascii), expected, "{:?}", charset);
    }
}

#[test]
fn iso_variant_matches_iso_8859_2_above_c1() {
    for byte in 0xa0..=0xffu8 {
        let bytes = [byte];
        let (expected, _) = ISO_8859_2.decode_without_bom_handling(&bytes);
        assert_eq!(Charset::Iso.decode(&[byte]), expected, "byte {:#04x}", byte);
    }
}

#[test]
fn iso_variant_masks_c1_controls() {
    for byte in 0x80..0xa0u8 {
        assert_eq!(Charset::Iso.decode(&[byte]), "?", "byte {:#04x}", byte);
    }
}

#[test]
fn cp1250_variant_matches_windows_1250_except_fixups() {
    for byte in 0x80..=0xffu8 {
        let decoded = Charset::Cp1250.decode(&[byte]);
        match CP1250_FIXUPS.iter().find(|(b, _)| *b == byte) {
            Some((_, fixed)) => assert_eq!(decoded, *fixed, "byte {:#04x}", byte),
            None => {
                let bytes = [byte];
                let (expected, _) = WINDOWS_1250.decode_without_bom_handling(&bytes);
                assert_eq!(decoded, expected, "byte {:#04x}", byte);
            }
        }
    }
}

#[test]
fn phonetic_table_covers_high_control_range_only() {
    assert_eq!(Charset::Phonetic.decode(b"\x82\x83\x85\x86\x87"), "ɔʒʃɛʌ");
    assert_eq!(Charset::Phonetic.decode(b"\x88\x89\x8a\x8b\x8d\x8e"), "əθɪɑːˈ");
    assert_eq!(Charset::Phonetic.decode(b"\x90\x97\x98"), "ŋðæ");
    assert_eq!(Charset::Phonetic.decode(b"\x80\x9f"), "??");
    for byte in 0xa0..=0xffu8 {
        assert_eq!(
            Charset::Phonetic.decode(&[byte]),
            char::from(byte).to_string(),
            "byte {:#04x}",
            byte
        );
    }
}

#[test]
fn push_byte_appends() {
    let mut out = String::from("x");
    Charset::Iso.push_byte(&mut out, 0xb3);
    Charset::Cp1250.push_byte(&mut out, 0x87);
    assert_eq!(out, "xłci");
}

#[test]
fn cstr_stops_at_nul() {
    assert_eq!(decode_cstr(Charset::Cp1250, b"\x9cwiat\0garbage"), "świat");
    assert_eq!(decode_cstr(Charset::Iso, b"abc"), "abc");
    assert_eq!(decode_cstr(Charset::Iso, b"\0abc"), "");
}
