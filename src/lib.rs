pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod metrics;
pub mod spatial;
// cmd and reports belong to the binary (main.rs).
