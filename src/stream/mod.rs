//! Streaming transformations over files.
//!
//! - **`line_filter`**: chunked read that keeps marker-bearing segments
//! - **`gzip`**: piped gzip compression from one file to another

pub mod gzip;
pub mod line_filter;

pub use gzip::{GzipStats, gzip_file};
pub use line_filter::{LineFilter, filter_file};
