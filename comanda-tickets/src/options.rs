//! Formatting options supplied by the printer settings screen

use comanda_printer::commands::{SIZE_DOUBLE, SIZE_DOUBLE_HEIGHT, SIZE_NORMAL};
use comanda_printer::{PrintError, calculate_effective_width};
use serde::{Deserialize, Serialize};

use crate::error::TicketResult;

/// Paper roll width
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PaperWidth {
    /// 58mm roll, 32 columns
    Mm58,
    /// 80mm roll, 48 columns
    #[default]
    Mm80,
}

impl PaperWidth {
    /// Printed columns in the normal font
    pub fn columns(self) -> usize {
        match self {
            PaperWidth::Mm58 => 32,
            PaperWidth::Mm80 => 48,
        }
    }

    pub fn millimeters(self) -> u32 {
        match self {
            PaperWidth::Mm58 => 58,
            PaperWidth::Mm80 => 80,
        }
    }
}

impl TryFrom<u32> for PaperWidth {
    type Error = PrintError;

    fn try_from(mm: u32) -> Result<Self, Self::Error> {
        match mm {
            58 => Ok(PaperWidth::Mm58),
            80 => Ok(PaperWidth::Mm80),
            other => Err(PrintError::InvalidConfig(format!(
                "Unsupported paper width: {}mm",
                other
            ))),
        }
    }
}

impl From<PaperWidth> for u32 {
    fn from(width: PaperWidth) -> Self {
        width.millimeters()
    }
}

/// Character size used for the body of a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintFontSize {
    #[default]
    Normal,
    /// Double height
    Large,
    /// Double width and height
    ExtraLarge,
}

impl PrintFontSize {
    /// GS ! selector value
    pub fn selector(self) -> u8 {
        match self {
            PrintFontSize::Normal => SIZE_NORMAL,
            PrintFontSize::Large => SIZE_DOUBLE_HEIGHT,
            PrintFontSize::ExtraLarge => SIZE_DOUBLE,
        }
    }

    /// How many normal columns one glyph occupies
    pub fn width_divisor(self) -> usize {
        match self {
            PrintFontSize::ExtraLarge => 2,
            _ => 1,
        }
    }

    /// Label shown on the font test print
    pub fn label(self) -> &'static str {
        match self {
            PrintFontSize::Normal => "Normal",
            PrintFontSize::Large => "Grande",
            PrintFontSize::ExtraLarge => "Extra grande",
        }
    }
}

/// Layout and per-document toggles for every builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingOptions {
    pub paper_width: PaperWidth,
    pub font_size: PrintFontSize,
    /// Line spacing in dots (ESC 3 n), 0 keeps the printer default
    pub line_spacing: u32,
    /// Left margin in dots (GS L)
    pub left_margin: u32,
    /// Fold diacritics and print plain ASCII
    pub ascii_mode: bool,
    /// Extra dots between characters (ESC SP n)
    pub char_spacing: u32,
    /// Blank lines fed before the header
    pub top_margin: u32,
    /// Blank lines fed before the cut
    pub bottom_margin: u32,
    pub show_item_number: bool,
    pub show_complement_price: bool,
    pub show_complement_name: bool,
    /// Print kitchen item lines in double height
    pub large_production_font: bool,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            paper_width: PaperWidth::Mm80,
            font_size: PrintFontSize::Normal,
            line_spacing: 0,
            left_margin: 0,
            ascii_mode: false,
            char_spacing: 0,
            top_margin: 0,
            bottom_margin: 3,
            show_item_number: true,
            show_complement_price: false,
            show_complement_name: true,
            large_production_font: false,
        }
    }
}

impl FormattingOptions {
    /// Load options from the settings JSON, missing fields take defaults
    pub fn from_json(json: &str) -> TicketResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Columns available at normal size once character spacing is applied
    pub fn effective_columns(&self) -> usize {
        calculate_effective_width(self.paper_width.columns(), self.char_spacing)
    }

    /// Columns available in the document body font
    pub fn body_columns(&self) -> usize {
        self.effective_columns() / self.font_size.width_divisor()
    }
}

/// Receipt-only switches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiptExtras {
    /// Skip the store name because a logo is printed just before
    pub hide_store_name: bool,
    /// Pulse the cash drawer right after initialize
    pub open_cash_drawer: bool,
}
