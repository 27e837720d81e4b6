#![cfg_attr(feature = "strict", deny(warnings))]
#![cfg_attr(feature = "strict", deny(clippy::all))]
#![cfg_attr(feature = "strict", deny(missing_docs))]

//! This crate contains the algorithms counting path classes on grids with rectangular obstacles.

pub mod modular;

pub mod segment_tree;

pub mod active_intervals;

pub mod events;

pub mod row_sweep;
pub use row_sweep::{count_paths, count_paths_with};
