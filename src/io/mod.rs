//! Boundary I/O: report persistence

pub mod report;
