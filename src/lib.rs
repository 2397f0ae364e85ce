//! Benchsift - noise-aware benchmark comparison filter
//!
//! This library consumes comparison tables already reduced to summary
//! statistics by a benchmark statistics engine, decides for every row
//! whether the change is real signal or measurement noise, optionally gates
//! on a regression threshold, and renders the result as text, CSV, HTML or
//! Markdown.

pub mod cli;
pub mod config;
pub mod csv_output;
pub mod error;
pub mod html_output;
pub mod input;
pub mod markdown_output;
pub mod noise;
pub mod report;
pub mod scaler;
pub mod table;
pub mod text_output;

pub use config::Config;
pub use error::{Result, SiftError};
pub use table::{Change, Metric, MetricTable, Outcome, Row};
