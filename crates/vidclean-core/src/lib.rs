//! Cleaning stages for scraped video-metadata datasets.
//!
//! The crate provides the pipeline core:
//!
//! - **frame**: DataFrame construction from ingested tables and back
//! - **coerce**: permissive numeric coercion
//! - **missing**: sentinel/null detection and resolution
//! - **datetime** / **temporal**: timestamp parsing and decomposition
//! - **outliers**: range-based median rectification
//! - **duplicates**: identity-column audit and flagging
//! - **sanitize**: symbol stripping on free-text columns
//! - **pipeline**: the ordered stage sequence

pub mod coerce;
pub mod data_utils;
pub mod datetime;
pub mod duplicates;
pub mod frame;
pub mod missing;
pub mod outliers;
pub mod pipeline;
pub mod sanitize;
pub mod temporal;

pub use coerce::coerce_numeric_columns;
pub use duplicates::{ColumnAudit, audit_duplicates, flag_duplicates};
pub use frame::{frame_from_table, frame_to_table};
pub use missing::{check_missing, resolve_missing};
pub use outliers::rectify_outliers;
pub use pipeline::run_stages;
pub use sanitize::{sanitize_text_columns, sanitize_value};
pub use temporal::split_timestamp;
