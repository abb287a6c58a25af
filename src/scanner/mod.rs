//! Single-pass key fragment scanner.
//!
//! - [`Scanner`] - Configured entry point, borrowed and owned scans
//! - [`Findings`] - Lazy iterator driving the forward cursor
//! - [`step`] - The per-position decision the iterator is built on

mod engine;
mod iter;

pub use engine::{Scanner, scan};
pub use iter::{Findings, Step, TRAILER_BUDGET, step};
