use crate::aggregator;
use crate::data_models::ResultOutcome;
use crate::document::Document;
use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::query::{QueryBuilder, SearchRequest};

/// One search from raw tokens to outcome. Holds no state between runs.
pub struct Engine<F: Fetcher> {
    builder: QueryBuilder,
    fetcher: F,
}

impl<F: Fetcher> Engine<F> {
    pub fn new(builder: QueryBuilder, fetcher: F) -> Self {
        Self { builder, fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub async fn run<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ResultOutcome> {
        let request = SearchRequest::from_tokens(tokens)?;
        let target = self.builder.build(&request);
        let markup = self.fetcher.fetch(&target).await?;
        let doc = Document::parse(&markup);
        aggregator::aggregate(target.mode(), &doc)
    }
}
