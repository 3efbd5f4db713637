//! Data structures representing format components.
//!
//! Contains the stream header, frame geometry and seek table, along with the
//! per-channel prediction stages that reconstruct samples inside a frame.

pub mod channel;
pub mod decorrelation;
pub mod filter;
pub mod geometry;
pub mod header;
pub mod key;
pub mod rice;
pub mod seek_table;
