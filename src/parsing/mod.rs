//! Line-level parsing stages.
//!
//! - [`classifier`] - drops system/service notices before matching
//! - [`record`] - splits a message line into date, time, author and message
//! - [`timestamp`] - canonicalizes raw date/time captures
//!
//! [`ChatLogParser`](crate::parser::ChatLogParser) drives these over a whole
//! export.

pub mod classifier;
pub mod record;
pub mod timestamp;

pub use classifier::SystemLineClassifier;
pub use record::{RawRecord, RecordParser};
pub use timestamp::{format_hm, normalize, normalize_date, normalize_time};
