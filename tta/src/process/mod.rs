/// Stream decoding to PCM samples.
///
/// Provides the [`Decoder`](decode::Decoder) session, which reads a stream's
/// header and seek table and turns its frames into interleaved PCM.
pub mod decode;

#[cfg(test)]
pub(crate) mod encode;

#[cfg(test)]
pub(crate) mod golden;
