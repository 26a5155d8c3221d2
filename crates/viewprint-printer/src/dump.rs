//! Column rendering for raw byte dumps.

use crate::flags::{PrintFlags, WordWidth};

/// Renders each whole element of `bytes` as space-joined columns.
///
/// Elements are little-endian words of `flags.width`; a trailing partial
/// element is skipped.
pub fn elements<'b>(bytes: &'b [u8], flags: &'b PrintFlags) -> impl Iterator<Item = String> + 'b {
    bytes
        .chunks_exact(flags.width.bytes())
        .map(move |element| columns(element, flags))
}

/// Columns for one element. `element` must hold exactly one word.
pub fn columns(element: &[u8], flags: &PrintFlags) -> String {
    let mut out = Vec::with_capacity(4);
    let (unsigned, signed) = decode(element, flags.width);

    if flags.hex || !flags.has_columns() {
        out.push(format!("{:0digits$X}", unsigned, digits = flags.width.bytes() * 2));
    }
    if flags.unsigned {
        out.push(unsigned.to_string());
    }
    if flags.signed {
        out.push(signed.to_string());
    }
    if flags.character {
        out.push(describe_byte(element[0]));
    }
    out.join(" ")
}

fn decode(element: &[u8], width: WordWidth) -> (u32, i32) {
    match width {
        WordWidth::Bits8 => (u32::from(element[0]), i32::from(element[0] as i8)),
        WordWidth::Bits16 => {
            let word = u16::from_le_bytes([element[0], element[1]]);
            (u32::from(word), i32::from(word as i16))
        }
        WordWidth::Bits32 => {
            let word = u32::from_le_bytes([element[0], element[1], element[2], element[3]]);
            (word, word as i32)
        }
    }
}

/// Printable ASCII as itself, `\n`, `\r`, `null` for zero, `\xNN` otherwise.
pub fn describe_byte(byte: u8) -> String {
    match byte {
        0 => "null".to_string(),
        b'\n' => "\\n".to_string(),
        b'\r' => "\\r".to_string(),
        b' '..=b'~' => char::from(byte).to_string(),
        other => format!("\\x{other:02X}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_is_default_column() {
        let flags = PrintFlags::default();
        let rendered: Vec<String> = elements(&[0x41, 0x0A, 0xFF], &flags).collect();
        assert_eq!(rendered, ["41", "0A", "FF"]);
    }

    #[test]
    fn test_all_columns() {
        let flags = PrintFlags::default().with_columns(true, true, true, true);
        assert_eq!(columns(&[0x41], &flags), "41 65 65 A");
        assert_eq!(columns(&[0xFF], &flags), "FF 255 -1 \\xFF");
        assert_eq!(columns(&[0x00], &flags), "00 0 0 null");
        assert_eq!(columns(&[b'\n'], &flags), "0A 10 10 \\n");
        assert_eq!(columns(&[b'\r'], &flags), "0D 13 13 \\r");
    }

    #[test]
    fn test_wide_words_are_little_endian() {
        let flags = PrintFlags::default()
            .with_width(WordWidth::Bits16)
            .with_columns(true, true, true, false);
        let rendered: Vec<String> = elements(&[0x34, 0x12, 0xFE, 0xFF, 0x99], &flags).collect();
        assert_eq!(rendered, ["1234 4660 4660", "FFFE 65534 -2"]);

        let words = PrintFlags::default().with_width(WordWidth::Bits32);
        let rendered: Vec<String> = elements(&[1, 0, 0, 0x80], &words).collect();
        assert_eq!(rendered, ["80000001"]);
    }

    #[test]
    fn test_no_columns_falls_back_to_hex() {
        let flags = PrintFlags::default().with_columns(false, false, false, false);
        assert_eq!(columns(&[0x7F], &flags), "7F");
    }
}
