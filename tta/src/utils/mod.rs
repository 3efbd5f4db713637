//! Utility functions and supporting infrastructure.
//!
//! Provides bitstream I/O, CRC validation and error handling.

pub mod bitstream_io;
pub mod crc;
pub mod errors;
