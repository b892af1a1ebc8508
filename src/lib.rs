//! namzd
//!
//! Quickly find files by name or extension across directory trees, and
//! optionally inside the ZIP and TAR files found along the way.

pub mod archive;
pub mod cli;
pub mod config;
pub mod copy;
pub mod error;
pub mod find;
pub mod logging;
pub mod matcher;
pub mod output;
pub mod tracker;
pub mod walker;

pub use config::{Config, OutputFormat, SortMode};
pub use error::{Error, Result};
pub use find::Find;
pub use matcher::{matches, Matcher};
pub use tracker::{dos_epoch, Extreme, Extremes, Match, Tracker};
pub use walker::Finder;
