//! QR code command group (GS ( k)
//!
//! The printer renders the symbol itself; we only frame the payload:
//! model, module size, error correction, store data, print.

use crate::commands::GS;

/// Smallest and largest module size accepted by common firmware
const MODULE_SIZE_MIN: u8 = 1;
const MODULE_SIZE_MAX: u8 = 8;

/// Store-data header bytes (cn fn m) counted in the length field
const STORE_HEADER_LEN: usize = 3;

/// Build the complete store-and-print QR block for `content`
///
/// `module_size` is clamped to 1..=8. The store command length field is
/// `content.len() + 3` as two little-endian bytes.
pub fn build_qr_code(content: &str, module_size: u8) -> Vec<u8> {
    let size = module_size.clamp(MODULE_SIZE_MIN, MODULE_SIZE_MAX);

    // pL pH can address at most 65535 bytes including the header
    let data = content.as_bytes();
    let data = &data[..data.len().min(u16::MAX as usize - STORE_HEADER_LEN)];

    let mut out = Vec::with_capacity(data.len() + 34);

    // Function 165: select model 2
    out.extend_from_slice(&[GS, 0x28, 0x6B, 0x04, 0x00, 0x31, 0x41, 0x32, 0x00]);

    // Function 167: module size
    out.extend_from_slice(&[GS, 0x28, 0x6B, 0x03, 0x00, 0x31, 0x43, size]);

    // Function 169: error correction level L
    out.extend_from_slice(&[GS, 0x28, 0x6B, 0x03, 0x00, 0x31, 0x45, 0x30]);

    // Function 180: store data
    let len = data.len() + STORE_HEADER_LEN;
    let p_l = (len % 256) as u8;
    let p_h = (len / 256) as u8;
    out.extend_from_slice(&[GS, 0x28, 0x6B, p_l, p_h, 0x31, 0x50, 0x30]);
    out.extend_from_slice(data);

    // Function 181: print
    out.extend_from_slice(&[GS, 0x28, 0x6B, 0x03, 0x00, 0x31, 0x51, 0x30]);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Offset of pL within the block: model (9) + size (8) + ecc (8) + "GS ( k"
    const P_L_OFFSET: usize = 9 + 8 + 8 + 3;

    #[test]
    fn test_store_length_field() {
        let content = "https://pedido.app/1"; // 20 bytes
        assert_eq!(content.len(), 20);

        let qr = build_qr_code(content, 4);
        assert_eq!(qr[P_L_OFFSET], 23);
        assert_eq!(qr[P_L_OFFSET + 1], 0);
        assert_eq!(&qr[P_L_OFFSET + 5..P_L_OFFSET + 25], content.as_bytes());
        assert_eq!(qr.len(), 9 + 8 + 8 + 8 + 20 + 8);
    }

    #[test]
    fn test_high_length_byte() {
        let content = "x".repeat(300);
        let qr = build_qr_code(&content, 4);
        // 303 = 0x012F
        assert_eq!(qr[P_L_OFFSET], 0x2F);
        assert_eq!(qr[P_L_OFFSET + 1], 0x01);
    }

    #[test]
    fn test_module_size_only_changes_size_byte() {
        let a = build_qr_code("abc", 3);
        let b = build_qr_code("abc", 6);
        let diff: Vec<usize> = (0..a.len()).filter(|&i| a[i] != b[i]).collect();
        assert_eq!(diff, vec![16]);
        assert_eq!(a[16], 3);
        assert_eq!(b[16], 6);
    }

    #[test]
    fn test_module_size_clamped() {
        assert_eq!(build_qr_code("a", 0)[16], 1);
        assert_eq!(build_qr_code("a", 200)[16], 8);
    }
}
