//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - Core Bloom filter implementation
//! - Hash functions
//! - Parameter calculations
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No logging
//! - Pure functions where possible

pub mod bloom_filter;
pub mod config;
pub mod hash_functions;
pub mod parameters;

pub use bloom_filter::BloomFilter;
pub use config::{FilterConfig, FilterConfigBuilder};
pub use parameters::{calculate_parameters, estimate_false_positive_rate, FilterParams};
