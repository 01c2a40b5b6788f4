//! Service layer for business logic with dependency injection.
//!
//! Services accept a `GitHubApi` implementation so their logic can be
//! exercised against in-memory data.

pub mod scan;

#[cfg(test)]
pub mod test_mocks;

pub use scan::{ScanReport, ScanRequest, ScanService};
