//! Key material for encrypted streams.
//!
//! Encrypted streams seed the hybrid filter coefficients of every channel with
//! eight bytes derived from a password. Decoding with the wrong bytes diverges
//! from the first predicted sample; plain streams use an all-zero seed.

use crate::utils::crc::CRC64;

pub const KEY_LEN: usize = 8;

#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyMaterial([u8; KEY_LEN]);

impl KeyMaterial {
    /// Derives key material from a password: the CRC-64 of its UTF-8 bytes,
    /// split into little-endian bytes.
    pub fn from_password(password: &str) -> Self {
        Self(CRC64.checksum(password.as_bytes()).to_le_bytes())
    }

    pub const fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}

// Keeps the digest out of logs.
impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("KeyMaterial").field(&"..").finish()
    }
}

#[test]
fn test_key_from_password() {
    let key = KeyMaterial::from_password("123456789");
    assert_eq!(key.as_bytes(), &0x62EC_59E3_F1A4_F00Au64.to_le_bytes());

    assert_eq!(
        KeyMaterial::from_password("hunter2"),
        KeyMaterial::from_password("hunter2")
    );
    assert_ne!(
        KeyMaterial::from_password("hunter2"),
        KeyMaterial::from_password("hunter3")
    );
    assert!(KeyMaterial::default().is_zero());
    assert_eq!(format!("{key:?}"), "KeyMaterial(\"..\")");
}
