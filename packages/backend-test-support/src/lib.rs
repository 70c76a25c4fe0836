//! Backend test support utilities
//!
//! Shared by the backend's unit and integration tests: logging setup,
//! problem-details assertions and unique identity helpers.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
