use crate::classifier;
use crate::data_models::ResultOutcome;
use crate::document::Document;
use crate::error::{Result, ScrapeError};
use crate::extractor;
use crate::query::QueryMode;

pub const TOTAL_RESULTS_CLASS: &str = "numTotalResults";
const TOTAL_SEPARATOR: &str = "of ";

/// Summary query: the total count from text like "Results 1-10 of 237".
pub fn total_count(doc: &Document) -> Result<String> {
    classifier::ensure_results(doc)?;

    let Some(node) = doc.first_by_class(TOTAL_RESULTS_CLASS) else {
        log::warn!("page is not marked empty but has no '{TOTAL_RESULTS_CLASS}' node");
        return Err(ScrapeError::page_not_exist());
    };
    let text = node.text();
    match text.split(TOTAL_SEPARATOR).nth(1) {
        Some(count) => Ok(count.trim().to_string()),
        None => Err(ScrapeError::MalformedTotal(text)),
    }
}

/// Detail query: every product record on the page.
pub fn record_list(doc: &Document) -> Result<ResultOutcome> {
    classifier::ensure_results(doc)?;
    let records = extractor::extract(doc)?;
    log::info!("extracted {} product records", records.len());
    Ok(ResultOutcome::RecordList(records))
}

pub fn aggregate(mode: QueryMode, doc: &Document) -> Result<ResultOutcome> {
    match mode {
        QueryMode::Summary => total_count(doc).map(ResultOutcome::TotalCount),
        QueryMode::Detail { .. } => record_list(doc),
    }
}

#[test]
fn test_total_count_split() {
    let doc = Document::parse(r#"<span class="numTotalResults">Results 1-10 of 237</span>"#);
    assert_eq!(total_count(&doc).unwrap(), "237");

    let doc = Document::parse(r#"<span class="numTotalResults">237 results</span>"#);
    assert!(matches!(
        total_count(&doc),
        Err(ScrapeError::MalformedTotal(_))
    ));
}
