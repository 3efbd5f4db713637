//! Small streams written by an independent TTA1 encoder, together with the
//! signals they were made from.
//!
//! Both use a sample rate of 245 Hz, which gives 256-sample frames.

/// Two channels, 16 bit, 260 samples in two frames.
pub const STEREO_16: &[u8] = &[
    0x54, 0x54, 0x41, 0x31, 0x01, 0x00, 0x02, 0x00, 0x10, 0x00, 0xF5, 0x00, 0x00, 0x00, 0x04, 0x01,
    0x00, 0x00, 0x68, 0xEB, 0x79, 0x5B, 0x81, 0x02, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x52, 0x5B,
    0x4F, 0x35, 0x4E, 0xC3, 0x32, 0x18, 0x12, 0x70, 0x60, 0x88, 0x02, 0x5E, 0x88, 0xE1, 0x89, 0x24,
    0xBA, 0x18, 0x63, 0x8D, 0x3F, 0xF6, 0xE8, 0xE4, 0x90, 0x5D, 0x32, 0x65, 0x1D, 0xD8, 0x82, 0x6A,
    0xA6, 0x97, 0x63, 0xE1, 0x65, 0x59, 0x5C, 0xFB, 0x54, 0xF4, 0x2E, 0x8F, 0x59, 0xA1, 0x74, 0x11,
    0x4C, 0x2D, 0x43, 0x8E, 0x32, 0x60, 0x78, 0x29, 0x72, 0x18, 0x84, 0x0E, 0xD5, 0x27, 0x89, 0x01,
    0x68, 0x52, 0x71, 0xC2, 0x83, 0x32, 0x31, 0x39, 0x28, 0x47, 0xB7, 0xAE, 0xC6, 0x08, 0xD7, 0xB1,
    0x1D, 0xC0, 0x02, 0xC1, 0x97, 0x38, 0xC8, 0x84, 0x0B, 0x5A, 0x42, 0x52, 0xB1, 0x00, 0xC7, 0x16,
    0x4B, 0x22, 0xC4, 0x51, 0x82, 0x91, 0x4D, 0xF9, 0xD7, 0x02, 0x91, 0x1F, 0x88, 0xA8, 0x80, 0x72,
    0x03, 0xCA, 0x09, 0x20, 0x3B, 0x44, 0x34, 0x85, 0xB8, 0xCE, 0xF1, 0xE4, 0x64, 0x58, 0x9B, 0xAC,
    0xC1, 0x43, 0x09, 0x6A, 0x8B, 0xB0, 0x59, 0xD0, 0xDC, 0x4D, 0xC5, 0x6D, 0x49, 0x75, 0xA8, 0xEE,
    0x15, 0x3F, 0xD8, 0x49, 0xC9, 0x4E, 0xAF, 0xFF, 0xAE, 0x7B, 0x9F, 0xBE, 0xA0, 0x4A, 0x51, 0x48,
    0x92, 0xC2, 0xD1, 0xB3, 0x0F, 0xCC, 0xA1, 0xAB, 0x69, 0x3F, 0x32, 0x00, 0x5B, 0x20, 0x1A, 0x2C,
    0x0D, 0xC3, 0xD5, 0x68, 0xB0, 0x9C, 0xAB, 0x01, 0x2C, 0xD9, 0x82, 0x63, 0x05, 0x37, 0xBB, 0x28,
    0x23, 0x00, 0xBD, 0xCF, 0x05, 0x41, 0x94, 0x99, 0x4D, 0x12, 0x0C, 0x11, 0x72, 0xE5, 0xBD, 0xF3,
    0x6D, 0x53, 0xD1, 0x09, 0x98, 0xE4, 0x5F, 0xC5, 0xF3, 0x11, 0x05, 0x14, 0x86, 0xC2, 0x8A, 0x01,
    0x70, 0x94, 0x36, 0xA8, 0x66, 0xC8, 0x77, 0x50, 0x07, 0xE6, 0xC2, 0xDC, 0xBB, 0xBC, 0xB6, 0x22,
    0x9C, 0xB7, 0x32, 0x79, 0x23, 0x91, 0xDA, 0x48, 0x7D, 0x4A, 0x93, 0xDF, 0x75, 0x5C, 0xE6, 0xD6,
    0xDD, 0xBF, 0x9E, 0x8B, 0x4C, 0xCF, 0x74, 0x5D, 0xD9, 0x68, 0x52, 0xE9, 0xBD, 0xD7, 0x4F, 0x39,
    0x9C, 0xF2, 0xC5, 0x02, 0xCB, 0x66, 0x78, 0xBF, 0xBF, 0xA9, 0x7F, 0xDA, 0x4A, 0xFB, 0x0B, 0x81,
    0xCB, 0x5C, 0x46, 0xDB, 0xC7, 0x25, 0x18, 0x64, 0x14, 0x5C, 0x54, 0xF2, 0x04, 0xAC, 0x76, 0x2B,
    0x22, 0x50, 0x0C, 0x0B, 0x22, 0x28, 0x30, 0x61, 0x82, 0xC2, 0x84, 0xBA, 0xE7, 0xF7, 0xF4, 0x62,
    0x96, 0x23, 0x8F, 0x3F, 0x51, 0xC2, 0x32, 0x00, 0x3C, 0x3D, 0x88, 0xA3, 0x30, 0x7C, 0x7C, 0xC7,
    0x05, 0x29, 0x5B, 0x50, 0x33, 0x5A, 0xE6, 0xC6, 0xCB, 0xC9, 0xEB, 0xF8, 0x3E, 0xFE, 0xCF, 0x56,
    0x94, 0x50, 0xB3, 0x75, 0xF5, 0xAA, 0xE7, 0x00, 0x33, 0x2C, 0xA8, 0x8C, 0x99, 0xCD, 0xA4, 0xB2,
    0xDD, 0xC2, 0x6F, 0x77, 0x3E, 0x23, 0x15, 0x56, 0x31, 0x30, 0xA4, 0x4E, 0x95, 0xF2, 0xE7, 0x50,
    0x47, 0x21, 0xFC, 0x0E, 0xC7, 0x37, 0xF0, 0xBE, 0x2F, 0x4B, 0x1C, 0xF5, 0x64, 0x67, 0xBC, 0xEE,
    0xF7, 0xCC, 0x05, 0xE0, 0xC8, 0x09, 0x5F, 0xF9, 0xBB, 0x22, 0x85, 0x66, 0x72, 0x04, 0x99, 0x52,
    0x09, 0x06, 0xEF, 0xB7, 0xFB, 0xCF, 0x61, 0x21, 0xC8, 0x18, 0x94, 0x80, 0x00, 0x84, 0x02, 0x07,
    0xB2, 0x96, 0x15, 0x0B, 0x26, 0xBE, 0x22, 0xE4, 0xBC, 0xC8, 0x6A, 0x92, 0xB6, 0xE6, 0x2E, 0xB1,
    0x05, 0xA9, 0x65, 0x9C, 0xF9, 0x5C, 0xAC, 0x75, 0xD4, 0x63, 0x39, 0xF7, 0x7D, 0xCF, 0x79, 0x72,
    0xFB, 0xBD, 0xF7, 0xB2, 0xC6, 0xD1, 0x8D, 0xE6, 0x78, 0x9B, 0xDC, 0xA7, 0xF1, 0xBA, 0xC5, 0x28,
    0xF2, 0x95, 0xB1, 0xCB, 0xEF, 0xE5, 0x3F, 0xDD, 0x2D, 0x08, 0x3E, 0x19, 0x10, 0x2B, 0xD4, 0x47,
    0x9A, 0x9B, 0x83, 0x99, 0xBC, 0xFD, 0xAB, 0x71, 0x06, 0x65, 0xD0, 0x13, 0x2D, 0xE5, 0x45, 0x10,
    0x81, 0x96, 0x1B, 0x4A, 0x66, 0xF1, 0xAE, 0xFC, 0xBA, 0x98, 0x28, 0x0D, 0x82, 0x0E, 0x1E, 0x15,
    0x4E, 0x0A, 0xB0, 0x0A, 0x84, 0xD5, 0x40, 0x31, 0xF0, 0xF2, 0x83, 0x63, 0x88, 0xC3, 0x53, 0x80,
    0xB1, 0x0E, 0x6F, 0x3B, 0x05, 0xC8, 0x2A, 0x72, 0xC7, 0xFF, 0x47, 0xAB, 0xA1, 0x21, 0x25, 0xCE,
    0xD5, 0xD4, 0x76, 0x70, 0x43, 0xF2, 0x57, 0xD4, 0x8E, 0x7A, 0x68, 0x64, 0xF1, 0x53, 0x3C, 0x44,
    0x2B, 0xE5, 0x83, 0x1E, 0xCD, 0xE0, 0x1E, 0x77, 0xB2, 0xFF, 0xC1, 0x44, 0xED, 0xA6, 0x2A, 0x79,
    0xAE, 0x27, 0x9E, 0x73, 0x97, 0xBB, 0x85, 0xC1, 0xD8, 0x74, 0x4D, 0x7A, 0x64, 0x8E, 0x26, 0xC8,
    0x8E, 0x17, 0x45, 0xC0, 0xE1, 0xA0, 0xF9, 0xD3, 0x07, 0x72, 0x79, 0x37, 0x85, 0x4C, 0xE2, 0x3B,
    0xFC, 0xE7, 0xD3, 0x16, 0xF0, 0xD8, 0x95, 0xC0, 0x83, 0xED, 0xCD, 0x5F, 0x17, 0x0C, 0x0A, 0xEE,
    0x47, 0x20, 0x82, 0x6E, 0x47, 0x02, 0x24, 0x3E, 0xE0, 0xA0, 0x05, 0x0C, 0x7A, 0x00, 0x10, 0x96,
    0xA2, 0x33,
];

/// One channel, 24 bit, 80 samples, encrypted with [`MONO_24_PASSWORD`].
pub const MONO_24_ENCRYPTED: &[u8] = &[
    0x54, 0x54, 0x41, 0x31, 0x02, 0x00, 0x01, 0x00, 0x18, 0x00, 0xF5, 0x00, 0x00, 0x00, 0x50, 0x00,
    0x00, 0x00, 0x75, 0xAE, 0xFC, 0x06, 0x67, 0x01, 0x00, 0x00, 0x91, 0x7A, 0x77, 0x86, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0xF8,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x93, 0xDC, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xEB, 0x8D, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xE1, 0xC5, 0xFF, 0x7F, 0x97, 0xCD, 0xF2, 0x6C, 0x63, 0x73, 0xDD, 0xC0, 0xA4, 0xFC,
    0x32, 0x0E, 0xE7, 0xB5, 0xED, 0xF7, 0x33, 0xD0, 0xBE, 0x42, 0xA7, 0x12, 0xFD, 0x68, 0x14, 0x1C,
    0xD2, 0x4B, 0x4A, 0x8B, 0x30, 0x4D, 0xDF, 0x54, 0xF0, 0x53, 0x89, 0x51, 0x33, 0x4D, 0xA5, 0x50,
    0xD5, 0xB0, 0xED, 0x3B, 0x5C, 0x27, 0xFA, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xF1, 0x42,
    0x2C, 0x65, 0xF9, 0xFF, 0x4E, 0x00, 0x3E, 0xC2, 0x72, 0x4B, 0xAF, 0x60, 0x05, 0xBA, 0xCC, 0x62,
    0x97, 0x41, 0x58, 0x6D, 0x00, 0xFA, 0xC3, 0xF1, 0x92, 0xCE, 0x12, 0x3C, 0x57, 0xF7, 0x3C, 0xF9,
    0x33, 0x53, 0x50, 0x00, 0x43, 0xBD, 0x12, 0x9D, 0x65, 0x94, 0xFF, 0xD1, 0x9E, 0x49, 0xE9, 0x2C,
    0x05, 0xCD, 0x54, 0x98, 0xD3, 0xED, 0x4F, 0xD5, 0x45, 0x75, 0x2F, 0xFD, 0xFF, 0x53, 0x71, 0xD5,
    0xCA, 0x8A, 0x57, 0x0D, 0xDC, 0x14, 0x0F, 0x6D, 0xD6, 0x50, 0x43, 0xE4, 0x44, 0x50, 0x4D, 0x4D,
    0xD7, 0xA8, 0xF9, 0x40, 0x12, 0x34, 0x8E, 0xAD, 0x31, 0xD3, 0xCD, 0xE2, 0x38, 0xCF, 0xE9, 0xFC,
    0xBF, 0xD3, 0x61, 0x4F, 0x09, 0x3F, 0x19, 0x02, 0xED, 0x1F, 0x94, 0xDC, 0xD0, 0xE0, 0x44, 0x27,
    0x19, 0xED, 0x7A, 0x94, 0x43, 0xD2, 0x68, 0x4A, 0xFB, 0x2E, 0xFF, 0x01, 0x2F, 0xB3, 0x71, 0xE6,
    0x00, 0x80, 0x7B, 0xE1, 0x6F,
];

pub const MONO_24_PASSWORD: &str = "tta";

/// Interleaved samples encoded in [`STEREO_16`].
pub fn stereo_16_signal() -> Vec<i32> {
    (0..260u32)
        .flat_map(|t| {
            let left = (t * 37 % 1024) as i32 - 512;
            let right = ((t * t * 7 + 3 * t) % 600) as i32 - 300;
            [left, right]
        })
        .collect()
}

/// Samples encoded in [`MONO_24_ENCRYPTED`].
pub fn mono_24_signal() -> Vec<i32> {
    (0..80u32)
        .map(|t| (t * 40503 % 1_048_576) as i32 - 524_288)
        .collect()
}
