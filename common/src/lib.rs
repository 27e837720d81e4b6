#![cfg_attr(feature = "strict", deny(warnings))]
#![cfg_attr(feature = "strict", deny(clippy::all))]
#![cfg_attr(feature = "strict", deny(missing_docs))]

//! This crate contains everything which is shared between the path counting engine,
//! its test helpers and the binaries.

mod error;

pub use error::{GridError, GridResult};

pub mod grid;
pub use grid::{ColumnSpan, GridDimensions, Obstacle};

pub mod logging;
