//! Reference encoder used to produce golden streams for tests.

use bitstream_io::{BitWrite, BitWriter, LittleEndian};

use crate::structs::channel::FixedPredictor;
use crate::structs::decorrelation::decorrelate;
use crate::structs::filter::{HybridFilter, filter_shift};
use crate::structs::geometry::FrameGeometry;
use crate::structs::header::header_bytes;
use crate::structs::key::KeyMaterial;
use crate::structs::rice::{RiceAdapter, encode::put_value};
use crate::utils::crc::CRC32;

pub struct EncodeParams<'a> {
    pub channels: u16,
    pub bits_per_sample: u16,
    pub sample_rate: u32,
    pub password: Option<&'a str>,
}

impl Default for EncodeParams<'_> {
    fn default() -> Self {
        Self {
            channels: 2,
            bits_per_sample: 16,
            sample_rate: 8000,
            password: None,
        }
    }
}

pub struct Encoded {
    pub bytes: Vec<u8>,
    /// Byte offset of the first frame.
    pub data_offset: usize,
    /// Byte length of every frame, checksum included.
    pub frame_sizes: Vec<u32>,
    /// Expected decoder output.
    pub pcm: Vec<u8>,
}

impl Encoded {
    pub fn frame_offset(&self, index: usize) -> usize {
        self.data_offset
            + self.frame_sizes[..index]
                .iter()
                .map(|&s| s as usize)
                .sum::<usize>()
    }
}

struct EncoderChannel {
    predictor: FixedPredictor,
    filter: HybridFilter,
    rice: RiceAdapter,
}

/// Encodes interleaved samples into a complete stream.
pub fn encode(samples: &[i32], params: &EncodeParams) -> Encoded {
    let channels = params.channels as usize;
    assert_eq!(samples.len() % channels, 0);

    let per_channel = (samples.len() / channels) as u32;
    let geometry = FrameGeometry::new(params.sample_rate, per_channel);
    let depth = (params.bits_per_sample as u32).div_ceil(8);
    let shift = filter_shift(depth);

    let (format, key) = match params.password {
        Some(password) => (2, KeyMaterial::from_password(password)),
        None => (1, KeyMaterial::default()),
    };

    let mut frames = Vec::new();
    let mut frame_sizes = Vec::new();
    let mut pcm = Vec::new();

    let mut steps = samples.chunks_exact(channels);
    for index in 0..geometry.frames {
        let mut codecs: Vec<EncoderChannel> = (0..channels)
            .map(|_| EncoderChannel {
                predictor: FixedPredictor::default(),
                filter: HybridFilter::new(&key, shift),
                rice: RiceAdapter::default(),
            })
            .collect();

        let mut writer = BitWriter::endian(Vec::new(), LittleEndian);
        for _ in 0..geometry.frame_len(index) {
            let step = steps.next().expect("enough samples");
            for &sample in step {
                pcm.extend_from_slice(&sample.to_le_bytes()[..depth as usize]);
            }

            let mut cache = step.to_vec();
            decorrelate(&mut cache);

            for (codec, &value) in codecs.iter_mut().zip(&cache) {
                let value = codec.predictor.encode(value);
                let residual = codec.filter.encode(value);
                put_value(&mut writer, &mut codec.rice, residual).expect("in-memory write");
            }
        }
        writer.byte_align().expect("in-memory write");

        let mut frame = writer.into_writer();
        let crc = CRC32.checksum(&frame);
        frame.extend_from_slice(&crc.to_le_bytes());

        frame_sizes.push(frame.len() as u32);
        frames.extend(frame);
    }

    let mut bytes = header_bytes(
        format,
        params.channels,
        params.bits_per_sample,
        params.sample_rate,
        per_channel,
    );

    let table: Vec<u8> = frame_sizes.iter().flat_map(|s| s.to_le_bytes()).collect();
    bytes.extend_from_slice(&table);
    bytes.extend_from_slice(&CRC32.checksum(&table).to_le_bytes());

    let data_offset = bytes.len();
    bytes.extend(frames);

    Encoded {
        bytes,
        data_offset,
        frame_sizes,
        pcm,
    }
}

/// Deterministic test signal: a few tones per channel plus noise, interleaved.
pub fn test_signal(channels: u16, per_channel: usize, bits_per_sample: u16) -> Vec<i32> {
    let amplitude = ((1i64 << (bits_per_sample - 1)) - 1) as f64;
    let mut seed = 0x2545_F491u32;

    (0..per_channel)
        .flat_map(|n| (0..channels).map(move |ch| (n, ch)))
        .map(|(n, ch)| {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12345);
            let noise = ((seed >> 16) & 0xFF) as f64 / 255.0 - 0.5;
            let t = n as f64;
            let f = 0.01 + 0.013 * ch as f64;
            let value = 0.45 * (t * f).sin() + 0.2 * (t * f * 3.7).sin() + 0.02 * noise;
            (value * amplitude).round() as i32
        })
        .collect()
}
