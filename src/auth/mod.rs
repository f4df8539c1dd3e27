//! # Authentication
//!
//! Salted password hashes, signed bearer tokens, and the [`Caller`] extractor that turns a
//! request's `Authorization` header into an identity with its current roles.

pub mod caller;
pub mod password;
pub mod token;

pub use caller::Caller;
pub use password::{hash_password, verify_password};
pub use token::{AuthError, TokenSigner};

const HEX: &[u8; 16] = b"0123456789abcdef";

fn encode_hex(bytes: &[u8]) -> String {
    let mut encoded = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        encoded.push(HEX[(byte >> 4) as usize] as char);
        encoded.push(HEX[(byte & 0x0f) as usize] as char);
    }
    encoded
}

fn decode_hex<const N: usize>(hex: &str) -> Option<[u8; N]> {
    if hex.len() != N * 2 {
        return None;
    }
    let digits = hex.as_bytes();
    let mut out = [0_u8; N];
    for (index, byte) in out.iter_mut().enumerate() {
        let hi = decode_nibble(digits[index * 2])?;
        let lo = decode_nibble(digits[index * 2 + 1])?;
        *byte = (hi << 4) | lo;
    }
    Some(out)
}

fn decode_nibble(value: u8) -> Option<u8> {
    match value {
        b'0'..=b'9' => Some(value - b'0'),
        b'a'..=b'f' => Some(value - b'a' + 10),
        b'A'..=b'F' => Some(value - b'A' + 10),
        _ => None,
    }
}
