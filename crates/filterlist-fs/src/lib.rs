//! Filesystem layer for the filterlist build pipeline
//!
//! Provides normalized paths, atomic locked writes, and format-agnostic
//! configuration loading. Everything above this crate talks to the disk
//! through these functions.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::ProjectPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
