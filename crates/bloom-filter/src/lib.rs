//! # Bloom Filter
//!
//! Probabilistic set membership over strings, sized from an expected
//! capacity and a target false-positive probability.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `BloomFilter`: Bit array with add/contains/clear
//!   - `calculate_parameters`: Optimal bit length and hash count
//!   - `hash_functions`: Seeded MurmurHash3 bit indexes
//!   - `FilterConfig` / `FilterConfigBuilder`: Validated sizing input
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `MembershipFilter`: Narrow capability interface (driving port)
//!
//! - **Adapters Layer** (`adapters/`): Alternative surfaces
//!   - `BloomCollection`: Collection-style wrapper that rejects
//!     unsupported operations
//!
//! ## Invariants
//!
//! - **No false negatives**: if inserted, `contains()` MUST return true
//! - m = ceil(-n ln p / (ln 2)^2), k = ceil((m / n) ln 2), both >= 1
//!
//! ## Usage Example
//!
//! ```
//! use bloom_filter::BloomFilter;
//!
//! let mut filter = BloomFilter::new(10_000, 0.01)?;
//! assert_eq!(filter.bit_length(), 95_851);
//! assert_eq!(filter.hash_count(), 7);
//!
//! filter.add_all(["apple", "banana"]);
//! assert!(filter.contains("apple"));
//! assert_eq!(filter.inserted_count(), 2);
//! # Ok::<(), bloom_filter::FilterError>(())
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;

// Re-exports for convenience
pub use adapters::BloomCollection;
pub use domain::{
    calculate_parameters, BloomFilter, FilterConfig, FilterConfigBuilder, FilterParams,
};
pub use error::FilterError;
pub use ports::MembershipFilter;
