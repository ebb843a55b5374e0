//! ESC/POS command primitives
//!
//! Named control bytes and small parametrized command builders. Every
//! function is pure and returns the exact byte sequence for one printer
//! directive. Numeric parameters are clamped into the legal byte range,
//! never rejected.

/// ESC - command prefix
pub const ESC: u8 = 0x1B;
/// GS - extended command prefix
pub const GS: u8 = 0x1D;
/// LF - print buffer and feed one line
pub const LF: u8 = 0x0A;

/// ESC @ - reset printer to power-on state
pub const INIT: [u8; 2] = [ESC, 0x40];

pub const BOLD_ON: [u8; 3] = [ESC, 0x45, 0x01];
pub const BOLD_OFF: [u8; 3] = [ESC, 0x45, 0x00];

pub const ALIGN_LEFT: [u8; 3] = [ESC, 0x61, 0x00];
pub const ALIGN_CENTER: [u8; 3] = [ESC, 0x61, 0x01];
pub const ALIGN_RIGHT: [u8; 3] = [ESC, 0x61, 0x02];

/// GS B 1 - white on black
pub const REVERSE_ON: [u8; 3] = [GS, 0x42, 0x01];
pub const REVERSE_OFF: [u8; 3] = [GS, 0x42, 0x00];

/// ESC 2 - default line spacing (~1/6 inch)
pub const LINE_SPACING_DEFAULT: [u8; 2] = [ESC, 0x32];

/// GS V 0 - full cut
pub const CUT_FULL: [u8; 3] = [GS, 0x56, 0x00];
/// GS V 1 - partial cut (leaves a small tab)
pub const CUT_PARTIAL: [u8; 3] = [GS, 0x56, 0x01];

/// Character table for Windows-1252 (Latin-1 superset) on Epson-compatible firmware
pub const CODE_TABLE_WPC1252: u8 = 16;

// Character size selector values for GS ! n
pub const SIZE_NORMAL: u8 = 0x00;
pub const SIZE_DOUBLE_HEIGHT: u8 = 0x01;
pub const SIZE_DOUBLE_WIDTH: u8 = 0x10;
pub const SIZE_DOUBLE: u8 = 0x11;

/// Clamp an arbitrary integer parameter into a single command byte
pub fn clamp_u8(value: u32) -> u8 {
    value.min(u8::MAX as u32) as u8
}

/// GS ! n - select character size
pub fn char_size(n: u8) -> [u8; 3] {
    [GS, 0x21, n]
}

/// ESC 3 n - set line spacing to n dots
pub fn line_spacing(dots: u32) -> [u8; 3] {
    [ESC, 0x33, clamp_u8(dots)]
}

/// ESC SP n - set right-side character spacing to n dots
pub fn char_spacing(dots: u32) -> [u8; 3] {
    [ESC, 0x20, clamp_u8(dots)]
}

/// GS L nL nH - set left margin in dots
pub fn left_margin(dots: u32) -> [u8; 4] {
    let dots = dots.min(u16::MAX as u32) as u16;
    let [lo, hi] = dots.to_le_bytes();
    [GS, 0x4C, lo, hi]
}

/// ESC t n - select character code table
pub fn code_table(n: u8) -> [u8; 3] {
    [ESC, 0x74, n]
}

/// ESC d n - print buffer and feed n lines
pub fn feed_lines(lines: u32) -> [u8; 3] {
    [ESC, 0x64, clamp_u8(lines)]
}

/// Feed n lines then partial cut
///
/// With `lines == 0` only the cut is emitted.
pub fn feed_and_cut(lines: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(6);
    if lines > 0 {
        out.extend_from_slice(&feed_lines(lines));
    }
    out.extend_from_slice(&CUT_PARTIAL);
    out
}

/// ESC p m t1 t2 - pulse the cash drawer connector
///
/// `pin5 == false` drives pin 2 (the usual drawer wiring).
pub fn drawer_kick(pin5: bool) -> [u8; 5] {
    let m = if pin5 { 0x01 } else { 0x00 };
    [ESC, 0x70, m, 25, 250]
}
