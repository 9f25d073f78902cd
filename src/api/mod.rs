pub mod attendance;
pub mod client;
pub mod dashboard;
pub mod employee;

pub use client::ApiClient;
