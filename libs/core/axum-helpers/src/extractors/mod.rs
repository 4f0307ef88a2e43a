//! Custom extractors for Axum handlers.
//!
//! Both reject with the shared [`ErrorResponse`](crate::errors::ErrorResponse)
//! envelope instead of axum's plain-text rejections.

pub mod id_path;
pub mod query_params;

pub use id_path::IdPath;
pub use query_params::QueryParams;
