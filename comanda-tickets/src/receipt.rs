//! Customer receipt renderer
//!
//! Two flavors: the pre-payment account summary and the post-payment
//! receipt. Neither is a fiscal document, and each says so.

use comanda_printer::layout::text_width;
use comanda_printer::{EscPosBuilder, format_line, wrap_text};
use tracing::{debug, instrument};

use crate::document::{self, format_timestamp};
use crate::money::{format_brl, format_percent};
use crate::options::{FormattingOptions, ReceiptExtras};
use crate::types::{CustomerReceiptData, DiscountKind, OrderType, ReceiptItem, ReceiptKind};

const DETAIL_INDENT: &str = "   ";

pub struct ReceiptRenderer<'a> {
    opts: &'a FormattingOptions,
    extras: ReceiptExtras,
}

impl<'a> ReceiptRenderer<'a> {
    pub fn new(opts: &'a FormattingOptions) -> Self {
        Self {
            opts,
            extras: ReceiptExtras::default(),
        }
    }

    pub fn with_extras(mut self, extras: ReceiptExtras) -> Self {
        self.extras = extras;
        self
    }

    /// Render the receipt to ESC/POS bytes
    #[instrument(skip_all, fields(order_id = %data.order_id, kind = ?data.kind))]
    pub fn render(&self, data: &CustomerReceiptData) -> Vec<u8> {
        self.render_with_raster(data, None)
    }

    /// Render with the store logo printed above the text block
    ///
    /// The logo replaces the store name, so the name is suppressed.
    #[cfg(feature = "logo")]
    #[instrument(skip_all, fields(order_id = %data.order_id, kind = ?data.kind))]
    pub fn render_with_logo(
        &self,
        data: &CustomerReceiptData,
        logo_base64: &str,
    ) -> crate::error::TicketResult<Vec<u8>> {
        let raster = comanda_printer::logo_from_base64(logo_base64)?;
        let renderer = ReceiptRenderer {
            opts: self.opts,
            extras: ReceiptExtras {
                hide_store_name: true,
                ..self.extras.clone()
            },
        };
        Ok(renderer.render_with_raster(data, Some(&raster)))
    }

    fn render_with_raster(&self, data: &CustomerReceiptData, logo: Option<&[u8]>) -> Vec<u8> {
        let mut b = document::begin(self.opts);

        if self.extras.open_cash_drawer {
            b.open_drawer();
        }
        if let Some(raster) = logo {
            b.raw(raster);
        }

        self.render_header(&mut b, data);
        self.render_items(&mut b, &data.items);
        self.render_totals(&mut b, data);
        self.render_payments(&mut b, data);
        self.render_footer(&mut b, data);

        let out = document::finish(b, self.opts);
        debug!(bytes = out.len(), "receipt rendered");
        out
    }

    fn render_header(&self, b: &mut EscPosBuilder, data: &CustomerReceiptData) {
        b.center();

        let store = &data.store;
        if !self.extras.hide_store_name && !store.name.trim().is_empty() {
            b.bold();
            document::headline_font(b, self.opts);
            for line in wrap_text(store.name.trim(), b.width()) {
                b.line(&line);
            }
            document::body_font(b, self.opts);
            b.bold_off();
        }
        if let Some(address) = store.address.as_deref() {
            for line in wrap_text(address, b.width()) {
                b.line(&line);
            }
        }
        if let Some(phone) = store.phone.as_deref().filter(|p| !p.trim().is_empty()) {
            b.line(&format!("Tel: {}", phone.trim()));
        }
        if let Some(tax_id) = store.tax_id.as_deref().filter(|t| !t.trim().is_empty()) {
            b.line(&format!("CNPJ: {}", tax_id.trim()));
        }
        b.newline();

        let (title, disclaimer) = match data.kind {
            ReceiptKind::Summary => ("CONFERENCIA DE CONTA", "NAO E DOCUMENTO FISCAL"),
            ReceiptKind::Fiscal => ("COMPROVANTE DE PAGAMENTO", "SEM VALOR FISCAL"),
        };
        b.bold();
        b.line(title);
        b.bold_off();
        b.line(disclaimer);

        b.left();
        b.sep_double();

        b.line(&format!("Pedido #{}", data.order_id));
        let table = data.table_number.as_deref().map(str::trim).filter(|t| !t.is_empty());
        match (data.order_type, table) {
            (OrderType::DineIn, Some(table)) => b.line(&format!("Mesa: {}", table)),
            (order_type, _) => b.line(order_type.label()),
        };
        if let Some(customer) = data.customer_name.as_deref().filter(|c| !c.trim().is_empty()) {
            b.line(&format!("Cliente: {}", customer.trim()));
        }
        if let Some(delivery) = &data.delivery {
            if let Some(phone) = delivery.phone.as_deref().filter(|p| !p.trim().is_empty()) {
                b.line(&format!("Tel: {}", phone.trim()));
            }
            for line in wrap_text(&format!("Endereco: {}", delivery.address.trim()), b.width()) {
                b.line(&line);
            }
        }
        b.line(&format!("Data: {}", format_timestamp(&data.created_at)));
        b.sep_single();
    }

    fn render_items(&self, b: &mut EscPosBuilder, items: &[ReceiptItem]) {
        for item in items {
            let left = format!("{}x {}", item.quantity, item.name.trim());
            let right = format_brl(item.total);

            // Name would be cut: give it its own lines, total below
            if text_width(&left) + 1 + text_width(&right) > b.width() {
                for line in wrap_text(&left, b.width()) {
                    b.line(&line);
                }
                b.line_lr("", &right);
            } else {
                b.line_lr(&left, &right);
            }

            if let Some(variation) = item.variation.as_deref().filter(|v| !v.trim().is_empty()) {
                b.line(&format!("{}{}", DETAIL_INDENT, variation.trim()));
            }
            for complement in &item.complements {
                let label = format!("{}+ {}", DETAIL_INDENT, complement.name.trim());
                match complement.price {
                    Some(price) if !price.is_zero() => {
                        let line = format_line(&label, &format_brl(price), b.width());
                        b.line(&line);
                    }
                    _ => {
                        b.line(&label);
                    }
                }
            }
        }
        b.sep_single();
    }

    fn render_totals(&self, b: &mut EscPosBuilder, data: &CustomerReceiptData) {
        b.line_lr("Subtotal", &format_brl(data.subtotal));

        if let Some(discount) = &data.discount {
            let label = match discount.kind {
                DiscountKind::Percentage { percent } => {
                    format!("Desconto ({}%)", format_percent(percent))
                }
                DiscountKind::Fixed => "Desconto".to_string(),
            };
            b.line_lr(&label, &format_brl(-discount.amount.abs()));
        }
        if let Some(service) = &data.service_charge {
            let label = format!("Taxa de servico ({}%)", format_percent(service.percent));
            b.line_lr(&label, &format_brl(service.amount));
        }
        if let Some(fee) = data.delivery.as_ref().and_then(|d| d.fee) {
            b.line_lr("Taxa de entrega", &format_brl(fee));
        }

        b.bold();
        b.line_lr("TOTAL", &format_brl(data.total));
        b.bold_off();
    }

    fn render_payments(&self, b: &mut EscPosBuilder, data: &CustomerReceiptData) {
        if !data.payments.is_empty() {
            b.sep_single();
            b.line("Pagamento");
            for payment in &data.payments {
                b.line_lr(payment.method.trim(), &format_brl(payment.amount));
            }
            if let Some(change) = data.change.filter(|c| !c.is_zero()) {
                b.line_lr("Troco", &format_brl(change));
            }
        }

        if let Some(split) = data.split.filter(|s| s.people > 1) {
            b.sep_single();
            b.line(&format!("Conta dividida por {} pessoas", split.people));
            b.bold();
            b.line_lr("Valor por pessoa", &format_brl(split.per_person));
            b.bold_off();
        }
    }

    fn render_footer(&self, b: &mut EscPosBuilder, data: &CustomerReceiptData) {
        b.sep_double();
        b.center();

        if let Some(message) = data.footer_message.as_deref() {
            for line in message.lines() {
                for wrapped in wrap_text(line, b.width()) {
                    b.line(&wrapped);
                }
            }
        }

        if let Some(qr) = data.qr.as_ref().filter(|q| !q.content.is_empty()) {
            b.newline();
            b.qr_code(&qr.content, qr.module_size);
            b.newline();
        }

        b.line(&format_timestamp(&data.created_at));
        b.left();
    }
}

/// Build a customer receipt
pub fn build_customer_receipt(
    data: &CustomerReceiptData,
    opts: &FormattingOptions,
    extras: ReceiptExtras,
) -> Vec<u8> {
    ReceiptRenderer::new(opts).with_extras(extras).render(data)
}
