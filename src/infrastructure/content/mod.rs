//! Content store clients for dereferencing content pointers.

mod http_content_store;

pub use http_content_store::HttpContentStore;
