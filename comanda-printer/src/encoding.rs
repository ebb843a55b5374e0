//! Text encoding for single-byte thermal printers
//!
//! Printers are driven in a single-byte code table, so text has to be
//! turned into exactly one byte per printed column:
//! - ASCII mode: fold Portuguese/Spanish diacritics to the base letter,
//!   anything still outside ASCII becomes `?`
//! - Latin mode: encode to Windows-1252 (code table 16), unmappable
//!   chars become `?`

use encoding_rs::WINDOWS_1252;

/// Replacement byte for chars the printer cannot show
const REPLACEMENT: u8 = b'?';

/// Fold a single char through the diacritic table
fn fold_char(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        other => other,
    }
}

/// Fold diacritics to plain ASCII letters
///
/// Chars outside the table pass through unchanged, so the function is
/// idempotent on ASCII input.
pub fn to_ascii(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

/// Encode text for the printer, appending to `out`
pub fn encode_text(text: &str, ascii_mode: bool, out: &mut Vec<u8>) {
    if ascii_mode {
        out.extend(text.chars().map(|c| {
            let c = fold_char(c);
            if c.is_ascii() { c as u8 } else { REPLACEMENT }
        }));
        return;
    }

    // Fast path: nothing to transcode
    if text.is_ascii() {
        out.extend_from_slice(text.as_bytes());
        return;
    }

    let mut tmp = [0u8; 4];
    for c in text.chars() {
        if c.is_ascii() {
            out.push(c as u8);
            continue;
        }
        let s: &str = c.encode_utf8(&mut tmp);
        let (bytes, _, had_errors) = WINDOWS_1252.encode(s);
        if had_errors || bytes.len() != 1 {
            out.push(REPLACEMENT);
        } else {
            out.push(bytes[0]);
        }
    }
}

/// Encode text to a fresh byte vector
pub fn encode_to_vec(text: &str, ascii_mode: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    encode_text(text, ascii_mode, &mut out);
    out
}
