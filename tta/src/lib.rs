#![doc = include_str!("../README.md")]
//!
//! ## Technical Overview
//!
//! Decoder for TTA1 lossless audio streams.
//!
//! ### Bitstream Organization
//!
//! **Header**: 22 bytes with format, channel count, bit depth, sample rate and
//! length, protected by a CRC-32. An ID3v2 tag may precede it.
//! **Seek table**: the byte size of every frame, protected by a CRC-32.
//! **Frames**: about 1.045 s of audio each, adaptive Rice codes packed
//! least-significant bit first, padded to a byte and followed by a CRC-32.
//!
//! ### Sample Reconstruction
//!
//! Each channel passes its residuals through an adaptive order-8 hybrid filter
//! and a fixed order-1 predictor. Channels are then recorrelated against the
//! last channel of the time-step.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::fs::File;
//! use tta::process::decode::{ChunkStatus, Decoder};
//!
//! let mut decoder = Decoder::open(File::open("track.tta")?, None)?;
//! let mut buf = vec![0u8; 4096 * decoder.info().block_align()];
//!
//! loop {
//!     let chunk = decoder.process_stream(&mut buf, None)?;
//!     if chunk.samples == 0 {
//!         break;
//!     }
//!     if chunk.status == ChunkStatus::Muted {
//!         eprintln!("corrupted frame muted");
//!     }
//!     // interleaved little-endian PCM in buf[..chunk.bytes]
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Processing functionality for TTA streams.
///
/// **Decoding** ([`process::decode`]): the stream session, with sequential,
/// frame-bounded and seeking access.
pub mod process;

/// Data structures representing TTA format components.
///
/// - **Header** ([`structs::header`]): Stream parameters
/// - **Geometry** ([`structs::geometry`]): Frame lengths and timing
/// - **Seek Table** ([`structs::seek_table`]): Frame offsets
/// - **Rice Codes** ([`structs::rice`]): Adaptive residual coding
/// - **Filters** ([`structs::filter`]): Adaptive hybrid filter
/// - **Channels** ([`structs::channel`]): Per-channel decoding state
/// - **Decorrelation** ([`structs::decorrelation`]): Inter-channel reconstruction
/// - **Keys** ([`structs::key`]): Password-derived filter seeds
pub mod structs;

/// Utility functions and supporting infrastructure.
///
/// - **Bitstream I/O** ([`utils::bitstream_io`]): Bit-level reading with checksums
/// - **CRC Validation** ([`utils::crc`]): CRC-32 and CRC-64
/// - **Error Handling** ([`utils::errors`]): Error types
pub mod utils;
