use serde::Serialize;

/// Shipping text shown when the grid does not list a shipping price.
pub const SHIPPING_FALLBACK: &str = "Multiple Options, click stores for detail";

/// Where a record's shipping text came from.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShippingSource {
    /// The slot's "free shipping" marker.
    FreeShipping,
    /// The slot's tax/shipping area.
    TaxShipping,
    /// Detail container present but it lists no shipping marker.
    NotListed,
    /// No detail container for the slot.
    NoDetail,
}

impl ShippingSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ShippingSource::NotListed | ShippingSource::NoDetail)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub title: String,
    pub price: String,
    pub shipping_price: String,
    pub vendor: String,
    pub shipping_source: ShippingSource,
}

impl ProductRecord {
    pub fn new(
        title: String,
        price: String,
        shipping_price: String,
        vendor: String,
        shipping_source: ShippingSource,
    ) -> ProductRecord {
        ProductRecord {
            title,
            price,
            shipping_price,
            vendor,
            shipping_source,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ResultOutcome {
    TotalCount(String),
    RecordList(Vec<ProductRecord>),
}
