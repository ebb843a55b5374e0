//! # comanda-printer
//!
//! ESC/POS thermal printer encoding - byte-level capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - ESC/POS command primitives
//! - Fixed-column text layout
//! - Single-byte text encoding (Windows-1252 or folded ASCII)
//! - QR code framing
//! - Logo raster encoding (optional `image` feature)
//!
//! Document content (WHAT to print) lives in `comanda-tickets`.
//! Delivering the bytes to a device is the caller's job.
//!
//! ## Example
//!
//! ```
//! use comanda_printer::EscPosBuilder;
//!
//! let mut builder = EscPosBuilder::new(48, false);
//! builder.raw(&comanda_printer::commands::INIT);
//! builder.center();
//! builder.double_size();
//! builder.line("COZINHA");
//! builder.reset_size();
//! builder.sep_double();
//! builder.left();
//! builder.line_lr("1x Pão de queijo", "R$ 8,50");
//! builder.cut_feed(3);
//!
//! let bytes = builder.build();
//! assert_eq!(&bytes[..2], &[0x1B, 0x40]);
//! ```

pub mod commands;
mod builder;
mod encoding;
mod error;
pub mod layout;
#[cfg(feature = "image")]
mod logo;
mod qr;

// Re-exports
pub use builder::EscPosBuilder;
pub use encoding::{encode_text, encode_to_vec, to_ascii};
pub use error::{PrintError, PrintResult};
pub use layout::{calculate_effective_width, center_text, format_line, wrap_text};
pub use qr::build_qr_code;

#[cfg(feature = "image")]
pub use logo::{MAX_LOGO_WIDTH, logo_from_base64, logo_from_bytes, raster_image};
