//! Text rewrite passes applied to each document.
//!
//! Every pass consumes a whole document buffer and produces a new one; there
//! is no intermediate representation.

pub mod callouts;
pub mod diagrams;
pub mod links;

pub use callouts::replace_callouts;
pub use diagrams::replace_mermaid_blocks;
pub use links::resolve_links;
