//! # comanda-tickets
//!
//! Document builders for the restaurant's thermal printers: WHAT to print.
//!
//! - Kitchen ticket (production copy, combos grouped)
//! - Customer receipt (account summary or payment receipt)
//! - Cancellation ticket
//! - Font size test print
//!
//! Every builder is a pure function from borrowed ticket data and
//! [`FormattingOptions`] to a raw ESC/POS byte stream that starts with
//! `ESC @` and ends with feed + partial cut. The bytes must reach the
//! printer untouched; never push them through a text encoding.
//!
//! ## Example
//!
//! ```
//! use comanda_tickets::{FormattingOptions, build_font_test};
//!
//! let opts = FormattingOptions::from_json(r#"{"paper_width": 58}"#).unwrap();
//! let bytes = build_font_test(&opts);
//! assert_eq!(&bytes[..2], &[0x1B, 0x40]);
//! ```

mod cancellation;
pub mod combo;
mod document;
mod error;
mod font_test;
mod kitchen;
pub mod money;
mod options;
pub mod placeholder;
mod receipt;
mod types;

pub use cancellation::{CancellationRenderer, build_cancellation_ticket};
pub use combo::ComboGroup;
pub use error::{TicketError, TicketResult};
pub use font_test::{FontTestRenderer, build_font_test};
pub use kitchen::{KitchenTicketRenderer, build_kitchen_ticket};
pub use options::{FormattingOptions, PaperWidth, PrintFontSize, ReceiptExtras};
pub use receipt::{ReceiptRenderer, build_customer_receipt};
pub use types::*;
