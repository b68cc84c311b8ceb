use std::fmt;

use crate::config::DEFAULT_HOST;
use crate::error::{Result, ScrapeError};

/// Separator placed between keywords in the search key.
pub const KEYWORD_SEPARATOR: &str = "%20";

/// Which of the two queries a request runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// Total number of results for the keywords.
    Summary,
    /// Product records on one results page. `page` is always >= 1.
    Detail { page: u32 },
}

/// Validated search keywords plus the optional page number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    keywords: Vec<String>,
    page: Option<u32>,
}

impl SearchRequest {
    /// Validate raw user tokens. A trailing run of digits is taken as the page
    /// number and selects detail mode; anything else is a keyword.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        let Some((last, rest)) = tokens.split_last() else {
            return Err(ScrapeError::no_query());
        };
        if tokens.iter().any(|t| t.as_ref().is_empty()) {
            return Err(ScrapeError::InvalidArgument(
                "Search keywords cannot be empty".to_string(),
            ));
        }

        let page = parse_page_number(last.as_ref())?;
        let keywords: Vec<String> = match page {
            Some(_) => rest.iter().map(|t| t.as_ref().to_string()).collect(),
            None => tokens.iter().map(|t| t.as_ref().to_string()).collect(),
        };
        if keywords.is_empty() {
            return Err(ScrapeError::InvalidArgument(
                "No search keyword is found".to_string(),
            ));
        }

        Ok(Self { keywords, page })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn mode(&self) -> QueryMode {
        match self.page {
            Some(page) => QueryMode::Detail { page },
            None => QueryMode::Summary,
        }
    }

    /// Keywords joined in input order with the `%20` separator.
    pub fn search_key(&self) -> String {
        self.keywords.join(KEYWORD_SEPARATOR)
    }
}

/// Returns `Some(page)` when the token is a page number, `None` when it is a
/// keyword. Negative-looking numbers are rejected rather than treated as keywords.
fn parse_page_number(token: &str) -> Result<Option<u32>> {
    if let Some(digits) = token.strip_prefix('-') {
        if is_ascii_number(digits) {
            return Err(ScrapeError::InvalidPageNumber(
                "Page Number cannot be Negative".to_string(),
            ));
        }
        return Ok(None);
    }
    if !is_ascii_number(token) {
        return Ok(None);
    }

    match token.parse::<u32>() {
        Ok(page) if page >= 1 => Ok(Some(page)),
        _ => Err(ScrapeError::InvalidPageNumber(
            "Invalid Page Number".to_string(),
        )),
    }
}

fn is_ascii_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[test]
fn test_parse_page_number() {
    assert_eq!(parse_page_number("2").unwrap(), Some(2));
    assert_eq!(parse_page_number("007").unwrap(), Some(7));
    assert_eq!(parse_page_number("camera").unwrap(), None);
    assert_eq!(parse_page_number("2nd").unwrap(), None);
    assert_eq!(parse_page_number("-").unwrap(), None);
    assert_eq!(parse_page_number("-tv").unwrap(), None);
    assert!(matches!(
        parse_page_number("-5"),
        Err(ScrapeError::InvalidPageNumber(_))
    ));
    assert!(matches!(
        parse_page_number("0"),
        Err(ScrapeError::InvalidPageNumber(_))
    ));
    assert!(matches!(
        parse_page_number("99999999999999999999"),
        Err(ScrapeError::InvalidPageNumber(_))
    ));
}

/// Fully assembled locator for a results page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTarget {
    url: String,
    mode: QueryMode,
}

impl QueryTarget {
    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn mode(&self) -> QueryMode {
        self.mode
    }
}

impl fmt::Display for QueryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Assembles locators against a fixed host.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    host: String,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_HOST)
    }
}

impl QueryBuilder {
    pub fn new(host: impl Into<String>) -> Self {
        let host: String = host.into();
        Self {
            host: host.trim_end_matches('/').to_string(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn build(&self, request: &SearchRequest) -> QueryTarget {
        let search_key = request.search_key();
        let mode = request.mode();
        let url = match mode {
            QueryMode::Summary => format!("{}/products?CLT=SCH&KW={}", self.host, search_key),
            QueryMode::Detail { page } => {
                format!("{}/products~PG-{}?KW={}", self.host, page, search_key)
            }
        };
        log::debug!("built {:?} query: {}", mode, url);
        QueryTarget { url, mode }
    }

    pub fn build_from_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Result<QueryTarget> {
        let request = SearchRequest::from_tokens(tokens)?;
        Ok(self.build(&request))
    }
}
