//! List search.
//!
//! Client-side filtering over the products already held in memory. Remote
//! search goes through the gateway instead.

mod filter;

pub use filter::{ListSummary, ProductFilter};
