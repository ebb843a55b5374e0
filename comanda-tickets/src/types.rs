//! Ticket payload types
//!
//! Plain values assembled by the caller for a single build; renderers only
//! borrow them.

use chrono::{DateTime, Local, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a timestamp as local wall-clock time
///
/// Accepts a naive `2026-03-14T19:45:00` (already local) or an RFC 3339
/// value with an offset such as `2026-03-14T22:45:00.000Z`, which is
/// converted to the machine's local time before printing.
fn local_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Local).naive_local());
    }
    raw.parse::<NaiveDateTime>()
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp {:?}: {}", raw, e)))
}

/// How the order leaves the kitchen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    DineIn,
    Takeaway,
    Delivery,
}

impl OrderType {
    pub fn label(self) -> &'static str {
        match self {
            OrderType::DineIn => "MESA",
            OrderType::Takeaway => "PARA VIAGEM",
            OrderType::Delivery => "ENTREGA",
        }
    }
}

/// Item complement (flavor, crust, extra topping...)
///
/// Accepts either a bare name or a `{ "name", "price" }` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ComplementRepr")]
pub struct Complement {
    pub name: String,
    pub price: Option<Decimal>,
}

impl Complement {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: None,
        }
    }

    pub fn priced(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price: Some(price),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ComplementRepr {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        price: Option<Decimal>,
    },
}

impl From<ComplementRepr> for Complement {
    fn from(repr: ComplementRepr) -> Self {
        match repr {
            ComplementRepr::Name(name) => Complement::named(name),
            ComplementRepr::Full { name, price } => Complement { name, price },
        }
    }
}

/// One line on the kitchen copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketItem {
    pub quantity: u32,
    pub product_name: String,
    #[serde(default)]
    pub variation: Option<String>,
    #[serde(default)]
    pub complements: Vec<Complement>,
    /// Free text; older payloads embed `[Combo: name]` here
    #[serde(default)]
    pub notes: Option<String>,
    /// Waiter who added the item
    #[serde(default)]
    pub added_by: Option<String>,
    #[serde(default)]
    pub combo_name: Option<String>,
}

impl TicketItem {
    pub fn new(quantity: u32, product_name: impl Into<String>) -> Self {
        Self {
            quantity,
            product_name: product_name.into(),
            variation: None,
            complements: Vec::new(),
            notes: None,
            added_by: None,
            combo_name: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitchenTicketData {
    pub order_id: String,
    pub order_type: OrderType,
    #[serde(default)]
    pub table_number: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    /// Production sector the ticket is routed to (e.g. "Pizzaria")
    #[serde(default)]
    pub sector: Option<String>,
    pub items: Vec<TicketItem>,
    #[serde(deserialize_with = "local_timestamp")]
    pub created_at: NaiveDateTime,
    /// Whole-order notes; never printed on the kitchen copy
    #[serde(default)]
    pub general_notes: Option<String>,
    /// Times this ticket was already printed
    #[serde(default)]
    pub print_count: u32,
}

/// Store identity printed on the receipt header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreInfo {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// CNPJ
    #[serde(default)]
    pub tax_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptItem {
    pub quantity: u32,
    pub name: String,
    #[serde(default)]
    pub variation: Option<String>,
    #[serde(default)]
    pub complements: Vec<Complement>,
    /// Line total (quantity x unit price + complements)
    pub total: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiscountKind {
    Percentage { percent: Decimal },
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    pub kind: DiscountKind,
    /// Amount taken off the subtotal
    pub amount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCharge {
    pub percent: Decimal,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub method: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillSplit {
    pub people: u32,
    pub per_person: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryInfo {
    #[serde(default)]
    pub phone: Option<String>,
    pub address: String,
    #[serde(default)]
    pub fee: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrPayload {
    pub content: String,
    #[serde(default = "default_qr_module_size")]
    pub module_size: u8,
}

fn default_qr_module_size() -> u8 {
    4
}

/// Pre-payment summary or post-payment receipt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptKind {
    #[default]
    Summary,
    Fiscal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerReceiptData {
    pub store: StoreInfo,
    pub order_id: String,
    pub order_type: OrderType,
    #[serde(default)]
    pub table_number: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub kind: ReceiptKind,
    pub items: Vec<ReceiptItem>,
    pub subtotal: Decimal,
    #[serde(default)]
    pub discount: Option<Discount>,
    #[serde(default)]
    pub service_charge: Option<ServiceCharge>,
    #[serde(default)]
    pub delivery: Option<DeliveryInfo>,
    pub total: Decimal,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub change: Option<Decimal>,
    #[serde(default)]
    pub split: Option<BillSplit>,
    #[serde(default)]
    pub footer_message: Option<String>,
    #[serde(default)]
    pub qr: Option<QrPayload>,
    #[serde(deserialize_with = "local_timestamp")]
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelledItem {
    pub quantity: u32,
    pub name: String,
    #[serde(default)]
    pub variation: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancellationTicketData {
    pub order_id: String,
    pub order_type: OrderType,
    #[serde(default)]
    pub table_number: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub reason: String,
    pub cancelled_by: String,
    pub items: Vec<CancelledItem>,
    #[serde(deserialize_with = "local_timestamp")]
    pub cancelled_at: NaiveDateTime,
}
