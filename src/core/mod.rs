//! Corpus post-processing.
//!
//! This module contains:
//! - [`models`] - Export row model and [`OutputConfig`]
//! - [`filter`] - Record filtering by date and author
//! - [`processor`] - [`ParseStats`]
//! - [`output`] - Format writers (CSV, JSON, JSONL)

pub mod filter;
pub mod models;
pub mod output;
pub mod processor;

pub use filter::{FilterConfig, apply_filters};
pub use models::OutputConfig;
pub use processor::ParseStats;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
