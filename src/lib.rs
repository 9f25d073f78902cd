//! Client library for the HRMS Lite REST API: typed endpoint wrappers,
//! per-screen state, and the date-range preset logic behind the
//! attendance filter.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod state;
pub mod utils;

pub use api::ApiClient;
pub use error::ApiError;
