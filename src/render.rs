use std::fmt::{self, Write};

use crate::data_models::{ProductRecord, ResultOutcome};

pub const USAGE: &str = "Usage:
Query1: shopgrid <keyword> (e.g. shopgrid baby strollers)
Query2: shopgrid <keyword> <page number> (e.g. shopgrid baby strollers 2)";

impl fmt::Display for ProductRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Product Title:  {}", self.title)?;
        writeln!(f, "Product Price:  {}", self.price)?;
        writeln!(f, "Shipping Price: {}", self.shipping_price)?;
        writeln!(f, "Vendor Name:    {}", self.vendor)
    }
}

impl fmt::Display for ResultOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultOutcome::TotalCount(count) => {
                write!(f, "Total Number of Result Found: {count}")
            }
            ResultOutcome::RecordList(records) => {
                for record in records {
                    writeln!(f, "{record}")?;
                }
                Ok(())
            }
        }
    }
}

pub fn to_text(outcome: &ResultOutcome) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write!(out, "{outcome}");
    out
}

pub fn to_json(outcome: &ResultOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_models::ShippingSource;

    fn record(title: &str) -> ProductRecord {
        ProductRecord::new(
            title.to_string(),
            "$199.99".to_string(),
            "Free Shipping".to_string(),
            "Amazon".to_string(),
            ShippingSource::FreeShipping,
        )
    }

    #[test]
    fn test_text_layout() {
        let outcome = ResultOutcome::RecordList(vec![record("Camera A"), record("Camera B")]);
        let text = to_text(&outcome);
        let expected = "Product Title:  Camera A\n\
                        Product Price:  $199.99\n\
                        Shipping Price: Free Shipping\n\
                        Vendor Name:    Amazon\n\n\
                        Product Title:  Camera B\n\
                        Product Price:  $199.99\n\
                        Shipping Price: Free Shipping\n\
                        Vendor Name:    Amazon\n\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_total_count_text() {
        let outcome = ResultOutcome::TotalCount("237".to_string());
        assert_eq!(to_text(&outcome), "Total Number of Result Found: 237");
    }

    #[test]
    fn test_json_is_tagged() {
        let outcome = ResultOutcome::RecordList(vec![record("Camera A")]);
        let value: serde_json::Value = serde_json::from_str(&to_json(&outcome).unwrap()).unwrap();
        assert_eq!(value["kind"], "record_list");
        assert_eq!(value["value"][0]["title"], "Camera A");
        assert_eq!(value["value"][0]["shipping_source"], "free_shipping");
    }
}
