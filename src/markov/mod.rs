//! First-order Markov chains over subtitle units.
//!
//! - `chain`: the transition table and how tokens feed it
//! - `cache`: JSON persistence of chains, one file per subtitle and unit
//! - `quote`: random walks over a chain

pub mod cache;
pub mod chain;
pub mod quote;

pub use cache::ChainCache;
pub use chain::Chain;
pub use quote::generate_quote;
