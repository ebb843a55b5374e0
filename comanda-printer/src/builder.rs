//! ESC/POS command builder
//!
//! Provides a fluent API for building ESC/POS print data as a raw byte
//! buffer. Text goes through the single-byte encoding policy on the way
//! in, so the buffer never holds UTF-8.

use crate::commands::{self, LF};
use crate::encoding::encode_text;
use crate::layout::{format_line, pad_text, text_width};
use crate::qr::build_qr_code;

/// ESC/POS command builder
///
/// Builds ESC/POS byte sequences for thermal printers. Unlike a plain
/// writer it does not emit anything on construction; documents decide
/// their own preamble.
#[derive(Debug, Clone)]
pub struct EscPosBuilder {
    buf: Vec<u8>,
    width: usize,
    ascii_mode: bool,
}

impl EscPosBuilder {
    /// Create a new builder laying text out in `width` columns
    ///
    /// Common widths:
    /// - 58mm paper: 32 characters
    /// - 80mm paper: 48 characters
    pub fn new(width: usize, ascii_mode: bool) -> Self {
        Self {
            buf: Vec::with_capacity(4096),
            width,
            ascii_mode,
        }
    }

    /// Get the configured layout width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Change the layout width (e.g. while double-width text is active)
    pub fn set_width(&mut self, width: usize) -> &mut Self {
        self.width = width;
        self
    }

    pub fn ascii_mode(&self) -> bool {
        self.ascii_mode
    }

    // === Text Output ===

    /// Write text through the encoding policy
    pub fn text(&mut self, s: &str) -> &mut Self {
        encode_text(s, self.ascii_mode, &mut self.buf);
        self
    }

    /// Write text followed by newline
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.text(s);
        self.buf.push(LF);
        self
    }

    /// Write empty line
    pub fn newline(&mut self) -> &mut Self {
        self.buf.push(LF);
        self
    }

    /// Print and feed n lines (ESC d n)
    pub fn feed(&mut self, lines: u32) -> &mut Self {
        self.raw(&commands::feed_lines(lines))
    }

    // === Alignment ===

    pub fn center(&mut self) -> &mut Self {
        self.raw(&commands::ALIGN_CENTER)
    }

    pub fn left(&mut self) -> &mut Self {
        self.raw(&commands::ALIGN_LEFT)
    }

    pub fn right(&mut self) -> &mut Self {
        self.raw(&commands::ALIGN_RIGHT)
    }

    // === Text Style ===

    pub fn bold(&mut self) -> &mut Self {
        self.raw(&commands::BOLD_ON)
    }

    pub fn bold_off(&mut self) -> &mut Self {
        self.raw(&commands::BOLD_OFF)
    }

    /// White-on-black text
    pub fn reverse(&mut self) -> &mut Self {
        self.raw(&commands::REVERSE_ON)
    }

    pub fn reverse_off(&mut self) -> &mut Self {
        self.raw(&commands::REVERSE_OFF)
    }

    /// Select character size (GS ! n)
    pub fn size(&mut self, n: u8) -> &mut Self {
        self.raw(&commands::char_size(n))
    }

    /// Double width and height
    pub fn double_size(&mut self) -> &mut Self {
        self.size(commands::SIZE_DOUBLE)
    }

    /// Double height only
    pub fn double_height(&mut self) -> &mut Self {
        self.size(commands::SIZE_DOUBLE_HEIGHT)
    }

    /// Reset to normal size
    pub fn reset_size(&mut self) -> &mut Self {
        self.size(commands::SIZE_NORMAL)
    }

    // === Separators ===

    /// Print a line of '=' characters
    pub fn sep_double(&mut self) -> &mut Self {
        let sep = "=".repeat(self.width);
        self.line(&sep)
    }

    /// Print a line of '-' characters
    pub fn sep_single(&mut self) -> &mut Self {
        let sep = "-".repeat(self.width);
        self.line(&sep)
    }

    // === Layout Helpers ===

    /// Print left and right text on the same line, right text never cut
    pub fn line_lr(&mut self, left: &str, right: &str) -> &mut Self {
        let line = format_line(left, right, self.width);
        self.line(&line)
    }

    /// Print a full-width reverse-video bar
    ///
    /// The text is padded so the black band spans the whole line. Text
    /// wider than the line is printed whole and left to the printer's wrap.
    pub fn banner(&mut self, s: &str) -> &mut Self {
        let padded = if text_width(s) < self.width {
            pad_text(s, self.width, false)
        } else {
            s.to_string()
        };
        self.reverse();
        self.text(&padded);
        self.reverse_off();
        self.newline()
    }

    // === Paper Control ===

    /// Feed n lines then partial cut
    pub fn cut_feed(&mut self, lines: u32) -> &mut Self {
        let bytes = commands::feed_and_cut(lines);
        self.raw(&bytes)
    }

    /// Partial cut (leave a small connection)
    pub fn cut_partial(&mut self) -> &mut Self {
        self.raw(&commands::CUT_PARTIAL)
    }

    // === Cash Drawer ===

    /// Open cash drawer (pin 2)
    pub fn open_drawer(&mut self) -> &mut Self {
        self.raw(&commands::drawer_kick(false))
    }

    // === QR Code ===

    /// Print a QR code, module size clamped to 1..=8
    pub fn qr_code(&mut self, data: &str, size: u8) -> &mut Self {
        let block = build_qr_code(data, size);
        self.raw(&block)
    }

    // === Raw Commands ===

    /// Write raw bytes directly
    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Current buffer contents
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    // === Build ===

    /// Take the finished byte stream
    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for EscPosBuilder {
    fn default() -> Self {
        Self::new(48, false)
    }
}
