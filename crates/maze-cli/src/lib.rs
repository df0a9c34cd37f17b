//! Shared pieces of the `maze` and `maze-bench` binaries.

pub mod args;
pub mod render;

pub use render::{RenderOptions, draw, save};
