//! Single-file JSON persistence for the whole dataset.

pub mod document;
pub mod file_store;

pub use document::Document;
pub use file_store::FileStore;
