//! # Concurrency Utilities

pub mod threads;
