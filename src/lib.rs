//! Transcript List Viewer (tlv)
//!
//! TUI browser for large collections of transcripts bucketed by date.
//!
//! The core is `view_state::GroupedListView`, a virtualized grouped list:
//! it flattens groups into headers and rows, caches per-item extents, keeps
//! a prefix-sum offset table and materializes only the items intersecting
//! the viewport. The terminal host (`state`, `view`) drives it through the
//! `ListHost` callback trait. Pure core, impure shell.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;
