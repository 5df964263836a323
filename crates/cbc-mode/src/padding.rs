//! PKCS#7 padding for 16-byte blocks.

use aes_core::BLOCK_SIZE;

use crate::error::Error;

/// Appends a PKCS#7 trailer so the result is a whole number of blocks.
///
/// A message that already fills its last block gains a full block of padding,
/// so the trailer is always present and always between 1 and 16 bytes.
pub fn pad_pkcs7(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}

/// Validates and strips a PKCS#7 trailer, returning the message prefix.
///
/// The final byte names the trailer length `n`; the call fails unless
/// `1 <= n <= 16`, the input holds at least `n` bytes, and every trailer byte
/// equals `n`. The check is not constant-time, so callers must not expose it
/// as a padding oracle.
pub fn unpad_pkcs7(data: &[u8]) -> Result<&[u8], Error> {
    let pad_len = match data.last() {
        Some(&byte) => byte as usize,
        None => return Err(Error::InvalidPadding),
    };
    if pad_len == 0 || pad_len > BLOCK_SIZE || pad_len > data.len() {
        return Err(Error::InvalidPadding);
    }
    let (message, trailer) = data.split_at(data.len() - pad_len);
    if trailer.iter().any(|&byte| byte as usize != pad_len) {
        return Err(Error::InvalidPadding);
    }
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_reaches_the_next_block_boundary() {
        for len in 0..=48 {
            let data = vec![0xa5u8; len];
            let padded = pad_pkcs7(&data);
            assert_eq!(padded.len() % BLOCK_SIZE, 0);
            assert!(padded.len() > len, "padding must always be added");
            assert!(padded.len() - len <= BLOCK_SIZE);
            assert_eq!(padded[len..], vec![(padded.len() - len) as u8; padded.len() - len]);
        }
    }

    #[test]
    fn full_block_message_gains_a_full_padding_block() {
        let padded = pad_pkcs7(b"YELLOW SUBMARINE");
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[..16], b"YELLOW SUBMARINE");
        assert_eq!(padded[16..], [0x10u8; 16]);
    }

    #[test]
    fn unpad_inverts_pad_for_all_short_lengths() {
        for len in 0..=48 {
            let data: Vec<u8> = (0..len as u8).collect();
            let padded = pad_pkcs7(&data);
            assert_eq!(unpad_pkcs7(&padded).expect("padding is valid"), &data[..]);
        }
    }

    #[test]
    fn unpad_accepts_a_textbook_trailer() {
        let message = unpad_pkcs7(b"ICE ICE BABY\x04\x04\x04\x04").expect("valid trailer");
        assert_eq!(message, b"ICE ICE BABY");
    }

    #[test]
    fn unpad_rejects_malformed_trailers() {
        assert_eq!(unpad_pkcs7(&[]), Err(Error::InvalidPadding));
        assert_eq!(unpad_pkcs7(b"ICE ICE BABY\x05\x05\x05\x05"), Err(Error::InvalidPadding));
        assert_eq!(unpad_pkcs7(b"ICE ICE BABY\x01\x02\x03\x04"), Err(Error::InvalidPadding));
        assert_eq!(unpad_pkcs7(&[0x00; 16]), Err(Error::InvalidPadding));
        assert_eq!(unpad_pkcs7(&[0x11; 16]), Err(Error::InvalidPadding));
        assert_eq!(unpad_pkcs7(&[0x05, 0x05]), Err(Error::InvalidPadding));
    }
}
