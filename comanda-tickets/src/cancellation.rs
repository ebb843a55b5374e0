//! Cancellation ticket renderer
//!
//! Tells the kitchen to stop producing items. No prices.

use comanda_printer::{EscPosBuilder, center_text, wrap_text};
use tracing::{debug, instrument};

use crate::document::{self, format_timestamp};
use crate::options::FormattingOptions;
use crate::types::{CancellationTicketData, CancelledItem, OrderType};

const DETAIL_INDENT: &str = "   ";

pub struct CancellationRenderer<'a> {
    opts: &'a FormattingOptions,
}

impl<'a> CancellationRenderer<'a> {
    pub fn new(opts: &'a FormattingOptions) -> Self {
        Self { opts }
    }

    #[instrument(skip_all, fields(order_id = %data.order_id, items = data.items.len()))]
    pub fn render(&self, data: &CancellationTicketData) -> Vec<u8> {
        let mut b = document::begin(self.opts);

        self.render_header(&mut b, data);
        self.render_reason(&mut b, data);
        self.render_items(&mut b, &data.items);

        b.center();
        b.line(&format_timestamp(&data.cancelled_at));
        b.left();

        let out = document::finish(b, self.opts);
        debug!(bytes = out.len(), "cancellation ticket rendered");
        out
    }

    fn render_header(&self, b: &mut EscPosBuilder, data: &CancellationTicketData) {
        b.center();
        b.bold();
        document::headline_font(b, self.opts);
        let title = center_text("CANCELAMENTO", b.width());
        b.banner(&title);
        document::body_font(b, self.opts);
        b.bold_off();

        b.line(&format!("Pedido #{}", data.order_id));
        let table = data.table_number.as_deref().map(str::trim).filter(|t| !t.is_empty());
        match (data.order_type, table) {
            (OrderType::DineIn, Some(table)) => b.line(&format!("MESA {}", table)),
            (order_type, _) => b.line(order_type.label()),
        };
        if let Some(customer) = data.customer_name.as_deref().filter(|c| !c.trim().is_empty()) {
            b.line(&format!("Cliente: {}", customer.trim()));
        }
        b.left();
        b.sep_double();
    }

    fn render_reason(&self, b: &mut EscPosBuilder, data: &CancellationTicketData) {
        let reason = data.reason.trim();
        if !reason.is_empty() {
            b.bold();
            for line in wrap_text(&format!("MOTIVO: {}", reason), b.width()) {
                b.banner(&line);
            }
            b.bold_off();
        }
        let by = data.cancelled_by.trim();
        if !by.is_empty() {
            b.line(&format!("Cancelado por: {}", by));
        }
        b.sep_single();
    }

    fn render_items(&self, b: &mut EscPosBuilder, items: &[CancelledItem]) {
        for item in items {
            b.bold();
            let head = format!("{}x {}", item.quantity, item.name.trim().to_uppercase());
            for line in wrap_text(&head, b.width()) {
                b.line(&line);
            }
            b.bold_off();

            if let Some(variation) = item.variation.as_deref().filter(|v| !v.trim().is_empty()) {
                b.line(&format!("{}> {}", DETAIL_INDENT, variation.trim()));
            }
            if let Some(notes) = item.notes.as_deref().filter(|n| !n.trim().is_empty()) {
                b.line(&format!("{}OBS: {}", DETAIL_INDENT, notes.trim()));
            }
        }
        b.sep_single();
    }
}

/// Build a cancellation ticket
pub fn build_cancellation_ticket(
    data: &CancellationTicketData,
    opts: &FormattingOptions,
) -> Vec<u8> {
    CancellationRenderer::new(opts).render(data)
}
