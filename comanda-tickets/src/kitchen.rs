//! Kitchen ticket renderer
//!
//! Renders a kitchen order into ESC/POS bytes for the production printers.
//! Standalone items come first, then one block per combo; both share a
//! single item counter.

use comanda_printer::commands::SIZE_DOUBLE_HEIGHT;
use comanda_printer::{EscPosBuilder, format_line, wrap_text};
use tracing::{debug, instrument};

use crate::combo::{ComboGroup, normalize_items, partition_items};
use crate::document::{self, format_timestamp};
use crate::money::format_brl;
use crate::options::FormattingOptions;
use crate::placeholder::substitute_placeholder;
use crate::types::{KitchenTicketData, OrderType, TicketItem};

/// Indentation for item details (variation, complements, attribution)
const DETAIL_INDENT: &str = "   ";
/// Bullet and detail indentation for combo members
const MEMBER_BULLET: &str = "  - ";
const MEMBER_DETAIL_INDENT: &str = "     ";

/// Kitchen ticket renderer
pub struct KitchenTicketRenderer<'a> {
    opts: &'a FormattingOptions,
}

impl<'a> KitchenTicketRenderer<'a> {
    pub fn new(opts: &'a FormattingOptions) -> Self {
        Self { opts }
    }

    /// Render a kitchen ticket to ESC/POS bytes
    #[instrument(skip_all, fields(order_id = %data.order_id, items = data.items.len()))]
    pub fn render(&self, data: &KitchenTicketData) -> Vec<u8> {
        let mut b = document::begin(self.opts);

        self.render_header(&mut b, data);
        self.render_body(&mut b, &data.items);
        self.render_footer(&mut b, data);

        let out = document::finish(b, self.opts);
        debug!(bytes = out.len(), "kitchen ticket rendered");
        out
    }

    /// Sector banner, order identity, reprint marker
    fn render_header(&self, b: &mut EscPosBuilder, data: &KitchenTicketData) {
        b.center();

        b.bold();
        document::headline_font(b, self.opts);
        let sector = data
            .sector
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_uppercase)
            .unwrap_or_else(|| "COZINHA".to_string());
        b.line(&sector);
        b.line(&destination_line(data.order_type, data.table_number.as_deref()));
        document::body_font(b, self.opts);
        b.bold_off();

        b.line(&format!("Pedido #{}", data.order_id));
        if let Some(customer) = data.customer_name.as_deref().filter(|c| !c.trim().is_empty()) {
            b.line(&format!("Cliente: {}", customer.trim()));
        }

        if data.print_count > 0 {
            b.bold();
            b.line(&format!("*** REIMPRESSAO #{} ***", data.print_count));
            b.bold_off();
        }

        b.left();
        b.sep_double();
    }

    /// Item list: standalone items, then combo blocks
    ///
    /// Whole-order notes are never printed here; only per-item notes.
    pub(crate) fn render_body(&self, b: &mut EscPosBuilder, items: &[TicketItem]) {
        let (standalone, groups) = partition_items(normalize_items(items));

        let mut number = 0;
        for item in &standalone {
            number += 1;
            let prefix = self.number_prefix(number);
            self.render_item(b, item, &prefix, DETAIL_INDENT);
            b.sep_single();
        }

        for group in &groups {
            number += 1;
            self.render_combo(b, group, number);
            b.sep_single();
        }
    }

    fn number_prefix(&self, number: usize) -> String {
        if self.opts.show_item_number {
            format!("{}. ", number)
        } else {
            String::new()
        }
    }

    /// Reverse-video double-size header, then members as bullet lines
    fn render_combo(&self, b: &mut EscPosBuilder, group: &ComboGroup, number: usize) {
        let title = format!(
            "{}COMBO {}",
            self.number_prefix(number),
            group.name.trim().to_uppercase()
        );

        b.bold();
        document::headline_font(b, self.opts);
        for line in wrap_text(&title, b.width()) {
            b.banner(&line);
        }
        document::body_font(b, self.opts);
        b.bold_off();

        for item in &group.items {
            self.render_item(b, item, MEMBER_BULLET, MEMBER_DETAIL_INDENT);
        }
    }

    /// One item: name line, variation, complements, note callout, attribution
    fn render_item(&self, b: &mut EscPosBuilder, item: &TicketItem, prefix: &str, indent: &str) {
        let (name, complements) = substitute_placeholder(&item.product_name, &item.complements);
        let head = format!("{}x {}", item.quantity, name.trim().to_uppercase());

        b.bold();
        if self.opts.large_production_font {
            b.size(self.opts.font_size.selector() | SIZE_DOUBLE_HEIGHT);
        }
        let continuation = " ".repeat(prefix.chars().count());
        let room = b.width().saturating_sub(continuation.len()).max(1);
        for (i, line) in wrap_text(&head, room).iter().enumerate() {
            let lead = if i == 0 { prefix } else { continuation.as_str() };
            b.line(&format!("{}{}", lead, line));
        }
        if self.opts.large_production_font {
            document::body_font(b, self.opts);
        }
        b.bold_off();

        if let Some(variation) = item.variation.as_deref().filter(|v| !v.trim().is_empty()) {
            b.line(&format!("{}> {}", indent, variation.trim()));
        }

        if self.opts.show_complement_name {
            for complement in &complements {
                let label = format!("{}+ {}", indent, complement.name.trim());
                match complement.price {
                    Some(price) if self.opts.show_complement_price && !price.is_zero() => {
                        let line = format_line(&label, &format_brl(price), b.width());
                        b.line(&line);
                    }
                    _ => {
                        b.line(&label);
                    }
                }
            }
        }

        if let Some(notes) = item.notes.as_deref().filter(|n| !n.trim().is_empty()) {
            b.bold();
            for line in wrap_text(&format!("OBS: {}", notes.trim()), b.width()) {
                b.banner(&line);
            }
            b.bold_off();
        }

        if let Some(added_by) = item.added_by.as_deref().filter(|a| !a.trim().is_empty()) {
            b.line(&format!("{}Adicionado por: {}", indent, added_by.trim()));
        }
    }

    fn render_footer(&self, b: &mut EscPosBuilder, data: &KitchenTicketData) {
        b.center();
        b.line(&format_timestamp(&data.created_at));
        b.left();
    }
}

/// "MESA 12", "PARA VIAGEM", "ENTREGA"
fn destination_line(order_type: OrderType, table: Option<&str>) -> String {
    match (order_type, table.map(str::trim).filter(|t| !t.is_empty())) {
        (OrderType::DineIn, Some(table)) => format!("{} {}", order_type.label(), table),
        _ => order_type.label().to_string(),
    }
}

/// Build a kitchen ticket
pub fn build_kitchen_ticket(data: &KitchenTicketData, opts: &FormattingOptions) -> Vec<u8> {
    KitchenTicketRenderer::new(opts).render(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PaperWidth;
    use crate::types::Complement;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn ascii_opts() -> FormattingOptions {
        FormattingOptions {
            ascii_mode: true,
            ..Default::default()
        }
    }

    fn create_test_ticket() -> KitchenTicketData {
        KitchenTicketData {
            order_id: "1042".to_string(),
            order_type: OrderType::DineIn,
            table_number: Some("7".to_string()),
            customer_name: None,
            sector: Some("Pizzaria".to_string()),
            items: vec![
                TicketItem {
                    notes: Some("bem assada".to_string()),
                    added_by: Some("Ana".to_string()),
                    ..TicketItem::new(1, "Pizza Margherita")
                },
                TicketItem {
                    complements: vec![Complement::priced("Bacon", Decimal::new(400, 2))],
                    ..TicketItem::new(2, "X-Burger")
                },
            ],
            created_at: NaiveDate::from_ymd_opt(2026, 3, 14)
                .and_then(|d| d.and_hms_opt(19, 45, 0))
                .unwrap(),
            general_notes: Some("cliente com pressa".to_string()),
            print_count: 0,
        }
    }

    fn contains(haystack: &[u8], needle: &str) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle.as_bytes())
    }

    #[test]
    fn test_render_kitchen_ticket() {
        let opts = ascii_opts();
        let data = build_kitchen_ticket(&create_test_ticket(), &opts);

        assert!(data.starts_with(&[0x1B, 0x40]));
        assert!(data.ends_with(&[0x1B, 0x64, 3, 0x1D, 0x56, 0x01]));
        assert!(contains(&data, "PIZZARIA"));
        assert!(contains(&data, "MESA 7"));
        assert!(contains(&data, "1. 1x PIZZA MARGHERITA"));
        assert!(contains(&data, "2. 2x X-BURGER"));
        assert!(contains(&data, "   + Bacon"));
        assert!(contains(&data, "OBS: bem assada"));
        assert!(contains(&data, "   Adicionado por: Ana"));
        assert!(contains(&data, "14/03/2026 19:45"));
    }

    #[test]
    fn test_general_notes_not_printed() {
        let data = build_kitchen_ticket(&create_test_ticket(), &ascii_opts());
        assert!(!contains(&data, "cliente com pressa"));
    }

    #[test]
    fn test_complement_price_toggle() {
        let mut opts = ascii_opts();
        let without = build_kitchen_ticket(&create_test_ticket(), &opts);
        assert!(!contains(&without, "R$ 4,00"));

        opts.show_complement_price = true;
        let with = build_kitchen_ticket(&create_test_ticket(), &opts);
        assert!(contains(&with, "R$ 4,00"));

        opts.show_complement_name = false;
        let hidden = build_kitchen_ticket(&create_test_ticket(), &opts);
        assert!(!contains(&hidden, "Bacon"));
    }

    #[test]
    fn test_item_numbers_toggle() {
        let opts = FormattingOptions {
            show_item_number: false,
            ..ascii_opts()
        };
        let data = build_kitchen_ticket(&create_test_ticket(), &opts);
        assert!(contains(&data, "2x X-BURGER"));
        assert!(!contains(&data, "2. 2x"));
    }

    #[test]
    fn test_reprint_banner() {
        let mut ticket = create_test_ticket();
        ticket.print_count = 2;
        let data = build_kitchen_ticket(&ticket, &ascii_opts());
        assert!(contains(&data, "*** REIMPRESSAO #2 ***"));
    }

    #[test]
    fn test_takeaway_header() {
        let mut ticket = create_test_ticket();
        ticket.order_type = OrderType::Takeaway;
        ticket.sector = None;
        let data = build_kitchen_ticket(&ticket, &ascii_opts());
        assert!(contains(&data, "COZINHA"));
        assert!(contains(&data, "PARA VIAGEM"));
        assert!(!contains(&data, "MESA"));
    }

    #[test]
    fn test_large_production_font() {
        let opts = FormattingOptions {
            large_production_font: true,
            ..ascii_opts()
        };
        let data = build_kitchen_ticket(&create_test_ticket(), &opts);
        let mut expected = vec![0x1D, 0x21, 0x01];
        expected.extend_from_slice(b"1. 1x PIZZA MARGHERITA");
        assert!(data.windows(expected.len()).any(|w| w == expected.as_slice()));
    }

    fn reverse_bar(text: &str) -> Vec<u8> {
        let mut bar = vec![0x1D, 0x42, 0x01];
        bar.extend_from_slice(text.as_bytes());
        bar.extend_from_slice(&[0x1D, 0x42, 0x00, b'\n']);
        bar
    }

    fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_note_callout_is_reverse_video() {
        let data = build_kitchen_ticket(&create_test_ticket(), &ascii_opts());
        let bar = reverse_bar(&format!("{:<48}", "OBS: bem assada"));
        assert!(contains_bytes(&data, &bar));
    }

    #[test]
    fn test_overlong_words_kept_whole() {
        let opts = FormattingOptions {
            paper_width: PaperWidth::Mm58,
            ..ascii_opts()
        };
        let mut ticket = create_test_ticket();
        ticket.items = vec![TicketItem {
            combo_name: Some("SuperFamiliaCompletaPromo".to_string()),
            notes: Some("ver https://exemplo.com/pedido/ABCDEFGHIJKLMNOP".to_string()),
            ..TicketItem::new(1, "Pizza Grande")
        }];
        let data = build_kitchen_ticket(&ticket, &opts);

        // wider than the 16 headline columns, printed unpadded
        assert!(contains_bytes(&data, &reverse_bar("SUPERFAMILIACOMPLETAPROMO")));
        // wider than the 32 body columns
        assert!(contains_bytes(
            &data,
            &reverse_bar("https://exemplo.com/pedido/ABCDEFGHIJKLMNOP")
        ));
        assert!(contains_bytes(&data, &reverse_bar(&format!("{:<32}", "OBS: ver"))));
    }
}
