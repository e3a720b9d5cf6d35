//! Base58 and base58check text encoding onto caller-provided buffers.
//!
//! Digit conversion is done by `bs58`; the checksum is
//! [`keycore_hashes::checksum`] and is verified in constant time on decode.

use crate::{Error, Result};
use keycore_hashes::{checksum, CHECKSUM_SIZE, HASH160_SIZE};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Largest binary input accepted by the encoder, checksum included.
pub const MAX_ENCODE_INPUT_SIZE: usize = 120;

const TOO_LONG: Error = Error::InvalidArgument("base58 input too long");

/// Encode `data` into `out`, returning the number of characters written.
///
/// Every leading zero byte becomes one leading `'1'`. Nothing is written past
/// the returned length and no terminator is appended.
pub fn encode(data: &[u8], out: &mut [u8]) -> Result<usize> {
    if data.len() > MAX_ENCODE_INPUT_SIZE {
        return Err(TOO_LONG);
    }
    Ok(bs58::encode(data).onto(out)?)
}

/// Decode base58 `text` into `out`, returning the number of bytes written.
///
/// Text that decodes to more than [`MAX_ENCODE_INPUT_SIZE`] bytes is rejected
/// whatever the size of `out`.
pub fn decode(text: &str, out: &mut [u8]) -> Result<usize> {
    let mut buffer = Zeroizing::new([0u8; MAX_ENCODE_INPUT_SIZE]);
    let len = bs58::decode(text).onto(&mut buffer[..]).map_err(|err| match Error::from(err) {
        Error::BufferTooSmall => TOO_LONG,
        err => err,
    })?;

    out.get_mut(..len).ok_or(Error::BufferTooSmall)?.copy_from_slice(&buffer[..len]);
    Ok(len)
}

/// Encode `data || checksum(data)`.
pub fn encode_check(data: &[u8], out: &mut [u8]) -> Result<usize> {
    let len = data.len() + CHECKSUM_SIZE;
    if len > MAX_ENCODE_INPUT_SIZE {
        return Err(TOO_LONG);
    }

    let mut buffer = Zeroizing::new([0u8; MAX_ENCODE_INPUT_SIZE]);
    buffer[..data.len()].copy_from_slice(data);
    buffer[data.len()..len].copy_from_slice(&checksum(data));

    encode(&buffer[..len], out)
}

/// Decode base58check `text`, verify its trailing checksum and copy the
/// payload into `out`.
pub fn decode_check(text: &str, out: &mut [u8]) -> Result<usize> {
    let mut buffer = Zeroizing::new([0u8; MAX_ENCODE_INPUT_SIZE]);
    let len = decode(text, &mut buffer[..])?;

    let payload_len = len.checked_sub(CHECKSUM_SIZE).ok_or(Error::InvalidArgument("base58check payload too short"))?;
    let (payload, expected) = buffer[..len].split_at(payload_len);
    if !bool::from(checksum(payload)[..].ct_eq(expected)) {
        return Err(Error::InvalidArgument("base58 checksum mismatch"));
    }

    out.get_mut(..payload_len).ok_or(Error::BufferTooSmall)?.copy_from_slice(payload);
    Ok(payload_len)
}

/// Legacy address: base58check of `version || hash`.
///
/// The version is written big-endian in as few bytes as hold it: one below
/// 256, two below 65536, four otherwise.
pub fn encode_address(hash: &[u8; HASH160_SIZE], version: u32, out: &mut [u8]) -> Result<usize> {
    let version_bytes = version.to_be_bytes();
    let prefix = match version {
        0..=0xff => &version_bytes[3..],
        0x100..=0xffff => &version_bytes[2..],
        _ => &version_bytes[..],
    };

    let mut payload = [0u8; 4 + HASH160_SIZE];
    payload[..prefix.len()].copy_from_slice(prefix);
    payload[prefix.len()..prefix.len() + HASH160_SIZE].copy_from_slice(hash);

    encode_check(&payload[..prefix.len() + HASH160_SIZE], out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use faster_hex::hex_decode;

    fn encode_str(data: &[u8]) -> String {
        let mut out = [0u8; 200];
        let len = encode(data, &mut out).unwrap();
        String::from_utf8(out[..len].to_vec()).unwrap()
    }

    #[test]
    fn test_leading_zeros_map_to_ones() {
        assert_eq!(encode_str(&[]), "");
        assert_eq!(encode_str(&[0]), "1");
        assert_eq!(encode_str(&[0, 0, 1]), "112");
        assert_eq!(encode_str(b"hello world"), "StV1DL6CwTryKyV");
    }

    #[test]
    fn test_buffer_too_small_is_not_truncated() {
        let mut out = [0xeeu8; 14];
        assert_eq!(encode(b"hello world", &mut out), Err(Error::BufferTooSmall));

        let mut out = [0u8; 15];
        assert_eq!(encode(b"hello world", &mut out), Ok(15));
    }

    #[test]
    fn test_oversize_input() {
        let mut out = [0u8; 256];
        assert_eq!(encode(&[1u8; MAX_ENCODE_INPUT_SIZE + 1], &mut out), Err(TOO_LONG));
        assert_eq!(encode_check(&[1u8; MAX_ENCODE_INPUT_SIZE - CHECKSUM_SIZE + 1], &mut out), Err(TOO_LONG));
        assert!(encode_check(&[1u8; MAX_ENCODE_INPUT_SIZE - CHECKSUM_SIZE], &mut out).is_ok());
    }

    #[test]
    fn test_decode_caps_output_length() {
        let mut text = [0u8; 256];
        let mut out = [0u8; 256];

        let len = bs58::encode(&[0x5au8; MAX_ENCODE_INPUT_SIZE + 1][..]).onto(&mut text[..]).unwrap();
        let oversize = std::str::from_utf8(&text[..len]).unwrap().to_string();
        assert_eq!(decode(&oversize, &mut out), Err(TOO_LONG));

        let len = encode(&[0x5au8; MAX_ENCODE_INPUT_SIZE], &mut text).unwrap();
        let largest = std::str::from_utf8(&text[..len]).unwrap();
        assert_eq!(decode(largest, &mut out), Ok(MAX_ENCODE_INPUT_SIZE));
        assert_eq!(decode(largest, &mut out[..MAX_ENCODE_INPUT_SIZE - 1]), Err(Error::BufferTooSmall));
    }

    #[test]
    fn test_decode_check_rejects_corruption() {
        let mut text = [0u8; 64];
        let len = encode_check(b"hello", &mut text).unwrap();
        let text = std::str::from_utf8(&text[..len]).unwrap().to_string();

        let mut out = [0u8; 16];
        assert_eq!(decode_check(&text, &mut out), Ok(5));
        assert_eq!(&out[..5], b"hello");

        // flip the last character to another alphabet member
        let mut corrupted = text.clone();
        let last = corrupted.pop().unwrap();
        corrupted.push(if last == '2' { '3' } else { '2' });
        assert_eq!(decode_check(&corrupted, &mut out), Err(Error::InvalidArgument("base58 checksum mismatch")));

        assert!(matches!(decode_check("0OIl", &mut out), Err(Error::InvalidArgument(_))));
        assert!(matches!(decode_check("1", &mut out), Err(Error::InvalidArgument(_))));
        assert_eq!(decode_check(&text, &mut [0u8; 4]), Err(Error::BufferTooSmall));
    }

    #[test]
    fn test_address_version_width() {
        let mut hash = [0u8; HASH160_SIZE];
        hex_decode(b"3442193e1bb70916e914552172cd4e2dbc9df811", &mut hash).unwrap();

        let mut out = [0u8; 64];
        for (version, expected) in [
            (0x00, "15mKKb2eos1hWa6tisdPwwDC1a5J1y9nma"),
            (0x1234, "ZLAn9hc3DSYNeYPpamunZgDbGxGh32bw2Ne"),
            (0x0102_0304, "bsYnswktuFAwQvXVjdjrGSDt4v7ReRrWm4sJ1"),
        ] {
            let len = encode_address(&hash, version, &mut out).unwrap();
            assert_eq!(std::str::from_utf8(&out[..len]).unwrap(), expected);
        }
    }
}
