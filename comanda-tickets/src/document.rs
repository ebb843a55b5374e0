//! Steps shared by every document: preamble, body font, trailer

use chrono::NaiveDateTime;
use comanda_printer::EscPosBuilder;
use comanda_printer::commands::{self, CODE_TABLE_WPC1252};

use crate::options::FormattingOptions;

/// Timestamp format printed on tickets (dd/mm/yyyy HH:MM)
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Start a document: initialize, code table, margins and spacing
///
/// The returned builder lays text out in the body font's columns and has
/// the body font already selected.
pub fn begin(opts: &FormattingOptions) -> EscPosBuilder {
    let mut b = EscPosBuilder::new(opts.body_columns(), opts.ascii_mode);

    b.raw(&commands::INIT);
    if !opts.ascii_mode {
        b.raw(&commands::code_table(CODE_TABLE_WPC1252));
    }
    if opts.top_margin > 0 {
        b.feed(opts.top_margin);
    }
    if opts.char_spacing > 0 {
        b.raw(&commands::char_spacing(opts.char_spacing));
    }
    if opts.line_spacing > 0 {
        b.raw(&commands::line_spacing(opts.line_spacing));
    }
    if opts.left_margin > 0 {
        b.raw(&commands::left_margin(opts.left_margin));
    }

    body_font(&mut b, opts);
    b
}

/// Restore the body font and its column count
pub fn body_font(b: &mut EscPosBuilder, opts: &FormattingOptions) {
    b.size(opts.font_size.selector());
    b.set_width(opts.body_columns());
}

/// Switch to double width+height for a headline
///
/// Columns are halved while it is active; call [`body_font`] afterwards.
pub fn headline_font(b: &mut EscPosBuilder, opts: &FormattingOptions) {
    b.double_size();
    b.set_width(opts.effective_columns() / 2);
}

/// Finish a document: bottom feed then partial cut
pub fn finish(mut b: EscPosBuilder, opts: &FormattingOptions) -> Vec<u8> {
    b.cut_feed(opts.bottom_margin);
    b.build()
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}
