//! Font size test print
//!
//! A fixed sample order rendered with the current settings so the operator
//! can check size, spacing and usable width on real paper.

use comanda_printer::EscPosBuilder;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::document;
use crate::kitchen::KitchenTicketRenderer;
use crate::options::FormattingOptions;
use crate::types::{Complement, TicketItem};

pub struct FontTestRenderer<'a> {
    opts: &'a FormattingOptions,
}

impl<'a> FontTestRenderer<'a> {
    pub fn new(opts: &'a FormattingOptions) -> Self {
        Self { opts }
    }

    #[instrument(skip_all, fields(font_size = ?self.opts.font_size))]
    pub fn render(&self) -> Vec<u8> {
        let mut b = document::begin(self.opts);

        self.render_header(&mut b);
        KitchenTicketRenderer::new(self.opts).render_body(&mut b, &sample_items());

        b.center();
        b.line("FIM DO TESTE");
        b.left();

        let out = document::finish(b, self.opts);
        debug!(bytes = out.len(), "font test rendered");
        out
    }

    fn render_header(&self, b: &mut EscPosBuilder) {
        b.center();
        b.bold();
        b.line("TESTE DE IMPRESSAO");
        b.bold_off();
        b.line(&format!("Fonte: {}", self.opts.font_size.label()));
        b.line(&format!(
            "Papel: {}mm / {} colunas",
            self.opts.paper_width.millimeters(),
            b.width()
        ));
        b.left();
        b.line(&ruler(b.width()));
        b.line("Acentos: ÁÉÍÓÚ ãõ ç");
        b.sep_double();
    }
}

/// "1234567890123..." spanning the usable width
fn ruler(width: usize) -> String {
    (1..=width).map(|i| char::from(b'0' + (i % 10) as u8)).collect()
}

/// Hardcoded sample order covering every item feature
fn sample_items() -> Vec<TicketItem> {
    vec![
        TicketItem {
            variation: Some("Grande".to_string()),
            complements: vec![
                Complement::named("Calabresa"),
                Complement::named("Frango com Catupiry"),
                Complement::priced("Borda Cheddar", Decimal::new(800, 2)),
            ],
            notes: Some("Bem assada".to_string()),
            ..TicketItem::new(1, "Escolha até 2 Sabores")
        },
        TicketItem {
            complements: vec![Complement::priced("Bacon", Decimal::new(400, 2))],
            added_by: Some("Garçom".to_string()),
            ..TicketItem::new(2, "X-Burger")
        },
        TicketItem {
            notes: Some("[Combo: Família] sem gelo".to_string()),
            ..TicketItem::new(1, "Refrigerante 2L")
        },
        TicketItem {
            notes: Some("[Combo: Família]".to_string()),
            ..TicketItem::new(1, "Batata Frita Grande")
        },
    ]
}

/// Build the font test print
pub fn build_font_test(opts: &FormattingOptions) -> Vec<u8> {
    FontTestRenderer::new(opts).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{PaperWidth, PrintFontSize};

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_ruler() {
        assert_eq!(ruler(12), "123456789012");
    }

    #[test]
    fn test_font_test_uses_selected_size() {
        for size in [PrintFontSize::Normal, PrintFontSize::Large, PrintFontSize::ExtraLarge] {
            let opts = FormattingOptions {
                font_size: size,
                ascii_mode: true,
                ..Default::default()
            };
            let data = build_font_test(&opts);
            assert!(data.starts_with(&[0x1B, 0x40]));
            assert!(data.ends_with(&[0x1B, 0x64, 3, 0x1D, 0x56, 0x01]));
            assert!(contains(&data, &[0x1D, 0x21, size.selector()]));
            assert!(contains(&data, format!("Fonte: {}", size.label()).as_bytes()));
        }
    }

    #[test]
    fn test_extra_large_halves_columns() {
        let opts = FormattingOptions {
            paper_width: PaperWidth::Mm58,
            font_size: PrintFontSize::ExtraLarge,
            ascii_mode: true,
            ..Default::default()
        };
        let data = build_font_test(&opts);
        assert!(contains(&data, b"Papel: 58mm / 16 colunas"));
        assert!(contains(&data, b"1234567890123456\n"));
        assert!(!contains(&data, b"12345678901234567"));
    }

    #[test]
    fn test_sample_exercises_combo_and_placeholder() {
        let opts = FormattingOptions {
            ascii_mode: true,
            ..Default::default()
        };
        let data = build_font_test(&opts);
        assert!(contains(&data, b"1. 1x CALABRESA / FRANGO COM CATUPIRY"));
        assert!(contains(&data, b"COMBO FAMILIA"));
        assert!(!contains(&data, b"[Combo:"));
    }
}
