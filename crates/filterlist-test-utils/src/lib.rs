//! Shared test utilities for the filterlist workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`project`]: [`TestProject`](project::TestProject), a temporary
//!   filter-list project with `src/` and `filters/` directories

pub mod project;

pub use project::TestProject;
