use crate::data_models::{ProductRecord, SHIPPING_FALLBACK, ShippingSource};
use crate::document::{Document, Node};
use crate::error::{Result, ScrapeError};

/// Class labels and id prefixes used by the results page markup.
pub mod markers {
    pub const GRID_ITEM: &str = "gridBox";
    pub const PRODUCT_PRICE: &str = "productPrice";
    pub const VENDOR_NAME: &str = "newMerchantName";
    pub const FREE_SHIPPING: &str = "freeShip";
    pub const TAX_SHIPPING: &str = "taxShippingArea";
    pub const TITLE_ID_PREFIX: &str = "nameQA";
    pub const DETAIL_ID_PREFIX: &str = "quickLookItem-";
}

/// Walks a results page slot by slot.
///
/// Prices and vendors are not nested under their slot in the markup; they are
/// read from page-wide collections and paired with slots by position. Both
/// collections must therefore hold exactly one node per grid slot.
pub struct RecordExtractor<'d> {
    doc: &'d Document,
    prices: Vec<Node<'d>>,
    vendors: Vec<Node<'d>>,
}

impl<'d> RecordExtractor<'d> {
    pub fn new(doc: &'d Document) -> Self {
        Self {
            doc,
            prices: doc.nodes_by_class(markers::PRODUCT_PRICE),
            vendors: doc.nodes_by_class(markers::VENDOR_NAME),
        }
    }

    pub fn slot_count(&self) -> usize {
        self.doc.nodes_by_class(markers::GRID_ITEM).len()
    }

    /// Records for slots `1..=n`, in slot order.
    pub fn extract(&self) -> Result<Vec<ProductRecord>> {
        let n = self.slot_count();
        log::debug!(
            "found {} grid slots, {} prices, {} vendors",
            n,
            self.prices.len(),
            self.vendors.len()
        );
        if n == 0 {
            return Ok(Vec::new());
        }

        check_aligned(markers::PRODUCT_PRICE, n, self.prices.len())?;
        check_aligned(markers::VENDOR_NAME, n, self.vendors.len())?;

        (1..=n).map(|slot| self.extract_slot(slot)).collect()
    }

    fn extract_slot(&self, slot: usize) -> Result<ProductRecord> {
        let title = self.title(slot)?;
        let price = self.prices[slot - 1].text();
        let vendor = self.vendors[slot - 1].text();
        let (shipping_price, shipping_source) = self.shipping(slot);

        Ok(ProductRecord::new(
            title,
            price,
            shipping_price,
            vendor,
            shipping_source,
        ))
    }

    fn title(&self, slot: usize) -> Result<String> {
        let id = format!("{}{}", markers::TITLE_ID_PREFIX, slot);
        let node = self
            .doc
            .node_by_id(&id)
            .ok_or_else(|| ScrapeError::MissingNode {
                slot,
                node: id.clone(),
            })?;
        node.attr("title")
            .map(str::to_string)
            .ok_or_else(|| ScrapeError::MissingNode {
                slot,
                node: format!("{id}[title]"),
            })
    }

    /// Free shipping text wins over the tax/shipping area; without either the
    /// fixed fallback text is used.
    fn shipping(&self, slot: usize) -> (String, ShippingSource) {
        let id = format!("{}{}", markers::DETAIL_ID_PREFIX, slot);
        let Some(container) = self.doc.node_by_id(&id) else {
            log::warn!("slot {slot}: no detail container '{id}', shipping not listed");
            return (SHIPPING_FALLBACK.to_string(), ShippingSource::NoDetail);
        };

        if let Some(free) = container.first_by_class(markers::FREE_SHIPPING) {
            return (free.text(), ShippingSource::FreeShipping);
        }
        if let Some(taxed) = container.first_by_class(markers::TAX_SHIPPING) {
            return (taxed.text(), ShippingSource::TaxShipping);
        }
        (SHIPPING_FALLBACK.to_string(), ShippingSource::NotListed)
    }
}

fn check_aligned(collection: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(ScrapeError::MisalignedCollections {
            collection,
            expected,
            found,
        });
    }
    Ok(())
}

/// Extract every slot's record. Callers gate on the no-match marker first.
pub fn extract(doc: &Document) -> Result<Vec<ProductRecord>> {
    RecordExtractor::new(doc).extract()
}
