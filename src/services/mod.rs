//! Core services for the tree walk, metric scanners, aggregation, and classification

pub mod walk;
pub mod metrics;
pub mod aggregate;
pub mod classify;
