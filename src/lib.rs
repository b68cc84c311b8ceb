pub mod aggregator;
pub mod classifier;
pub mod config;
pub mod data_models;
pub mod document;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod query;
pub mod render;
