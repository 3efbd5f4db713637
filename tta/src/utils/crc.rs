//! CRC utilities for TTA streams.
//!
//! Provides the reflected CRC-32 used to validate the stream header, the seek
//! table and every frame, and the MSB-first CRC-64 used to derive key material
//! from a password.

/// CRC algorithm specification with polynomial, initial value and output xor.
pub struct Algorithm<T> {
    poly: T,
    init: T,
    xorout: T,
}

/// CRC-32 (IEEE 802.3, reflected) for header, seek table and frame validation.
pub const CRC32_ALG: Algorithm<u32> = Algorithm {
    poly: 0xEDB8_8320,
    init: 0xFFFF_FFFF,
    xorout: 0xFFFF_FFFF,
};

/// CRC-64 (ECMA-182, MSB-first) for password digests.
pub const CRC64_ALG: Algorithm<u64> = Algorithm {
    poly: 0x42F0_E1EB_A9EA_3693,
    init: 0xFFFF_FFFF_FFFF_FFFF,
    xorout: 0xFFFF_FFFF_FFFF_FFFF,
};

/// Shared CRC-32 instance.
pub static CRC32: Crc32 = Crc32::new(&CRC32_ALG);

/// Shared CRC-64 instance.
pub static CRC64: Crc64 = Crc64::new(&CRC64_ALG);

/// Processes `len` bits of a reflected CRC-32 register.
#[inline(always)]
pub const fn crc32_reflected(poly: u32, mut value: u32, len: usize) -> u32 {
    let mut i = 0;
    while i < len {
        value = (value >> 1) ^ ((value & 1) * poly);
        i += 1;
    }

    value
}

/// Processes `len` bits of an MSB-first CRC-64 register fed one byte at a time.
#[inline(always)]
pub const fn crc64(poly: u64, mut value: u64, len: usize) -> u64 {
    value <<= 56;

    let mut i = 0;
    while i < len {
        value = (value << 1) ^ (((value >> 63) & 1) * poly);
        i += 1;
    }

    value
}

#[inline(always)]
const fn crc32_table(poly: u32) -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < table.len() {
        table[i] = crc32_reflected(poly, i as u32, 8);
        i += 1;
    }

    table
}

#[inline(always)]
const fn crc64_table(poly: u64) -> [u64; 256] {
    let mut table = [0u64; 256];
    let mut i = 0;
    while i < table.len() {
        table[i] = crc64(poly, i as u64, 8);
        i += 1;
    }

    table
}

#[derive(Debug)]
pub struct Crc32 {
    pub poly: u32,
    pub init: u32,
    pub xorout: u32,
    table: [u32; 256],
}

#[derive(Debug)]
pub struct Crc64 {
    pub poly: u64,
    pub init: u64,
    pub xorout: u64,
    table: [u64; 256],
}

impl Crc32 {
    pub const fn new(algorithm: &Algorithm<u32>) -> Self {
        Self {
            poly: algorithm.poly,
            init: algorithm.init,
            xorout: algorithm.xorout,
            table: crc32_table(algorithm.poly),
        }
    }

    const fn table_entry(&self, index: u32) -> u32 {
        self.table[(index & 0xFF) as usize]
    }

    /// Feeds `bytes` into a running (non-finalized) register.
    #[inline(always)]
    pub const fn update(&self, mut crc: u32, bytes: &[u8]) -> u32 {
        let mut i = 0;

        while i < bytes.len() {
            crc = self.table_entry(crc ^ bytes[i] as u32) ^ (crc >> 8);
            i += 1;
        }

        crc
    }

    pub const fn finalize(&self, crc: u32) -> u32 {
        crc ^ self.xorout
    }

    pub const fn checksum(&self, bytes: &[u8]) -> u32 {
        self.finalize(self.update(self.init, bytes))
    }
}

impl Crc64 {
    pub const fn new(algorithm: &Algorithm<u64>) -> Self {
        Self {
            poly: algorithm.poly,
            init: algorithm.init,
            xorout: algorithm.xorout,
            table: crc64_table(algorithm.poly),
        }
    }

    const fn table_entry(&self, index: u64) -> u64 {
        self.table[(index & 0xFF) as usize]
    }

    #[inline(always)]
    pub const fn update(&self, mut crc: u64, bytes: &[u8]) -> u64 {
        let mut i = 0;

        while i < bytes.len() {
            crc = self.table_entry((crc >> 56) ^ bytes[i] as u64) ^ (crc << 8);
            i += 1;
        }

        crc
    }

    pub const fn checksum(&self, bytes: &[u8]) -> u64 {
        self.update(self.init, bytes) ^ self.xorout
    }
}
