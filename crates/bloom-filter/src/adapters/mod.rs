//! Adapters Layer
//!
//! Wrappers that present the core filter through other interfaces.
//!
//! ## Adapters
//!
//! - `BloomCollection` - Collection-shaped surface; rejects removal,
//!   retention, iteration and export with `UnsupportedOperation`

pub mod collection;

pub use collection::BloomCollection;
