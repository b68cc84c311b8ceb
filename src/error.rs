use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Error, Debug)]
pub enum ScrapeError {
    /// No usable search tokens were supplied.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    InvalidPageNumber(String),

    /// The results page is empty, or lacks the nodes a results page must have.
    #[error("{0}")]
    PageNotExist(String),

    #[error("slot {slot}: required node '{node}' not found")]
    MissingNode { slot: usize, node: String },

    /// Price/vendor nodes no longer line up one-to-one with grid slots.
    #[error("expected {expected} '{collection}' nodes to match grid slots, found {found}")]
    MisalignedCollections {
        collection: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("total results text has no count: {0:?}")]
    MalformedTotal(String),

    #[error("failed to fetch results page: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ScrapeError {
    pub fn no_query() -> Self {
        ScrapeError::InvalidArgument("No query is found".to_string())
    }

    pub fn page_not_exist() -> Self {
        ScrapeError::PageNotExist("No Result Found on This Page".to_string())
    }

    /// Kinds that are reported to the user as text instead of failing the process.
    pub fn is_handled(&self) -> bool {
        matches!(
            self,
            ScrapeError::InvalidArgument(_)
                | ScrapeError::InvalidPageNumber(_)
                | ScrapeError::PageNotExist(_)
        )
    }
}
