use crate::document::Document;
use crate::error::{Result, ScrapeError};

/// Class the site puts on its "no results" banner.
pub const NO_MATCH_CLASS: &str = "nomatch";

/// True when the page is the site's "no results" page.
pub fn is_empty(doc: &Document) -> bool {
    doc.has_class(NO_MATCH_CLASS)
}

/// Gate used by both query paths before any field is read.
pub fn ensure_results(doc: &Document) -> Result<()> {
    if is_empty(doc) {
        log::info!("results page carries the no-match marker");
        return Err(ScrapeError::page_not_exist());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_marker_anywhere() {
        let doc = Document::parse(
            r#"<html><body><div><div><p class="msg nomatch">Sorry</p></div></div></body></html>"#,
        );
        assert!(is_empty(&doc));
        assert!(matches!(
            ensure_results(&doc),
            Err(ScrapeError::PageNotExist(_))
        ));
    }

    #[test]
    fn test_results_page_is_not_empty() {
        let doc = Document::parse(r#"<div class="gridBox"></div><div class="nomatches"></div>"#);
        assert!(!is_empty(&doc));
        assert!(ensure_results(&doc).is_ok());
    }
}
