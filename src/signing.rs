//! Request signing for private calls.
//!
//! C-CEX authenticates a private call with an `apisign` header holding the
//! HMAC-SHA512 of the complete request URL, keyed with the API secret.

use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::error::{CcexError, Result};

type HmacSha512 = Hmac<Sha512>;

/// Header carrying the URL signature.
pub const SIGNATURE_HEADER: &str = "apisign";

/// Compute the lowercase hex HMAC-SHA512 of `message` keyed with `secret`.
///
/// `message` must be the exact URL bytes that go on the wire.
pub fn sign(secret: &[u8], message: &[u8]) -> Result<String> {
    let mut mac = HmacSha512::new_from_slice(secret)
        .map_err(|e| CcexError::Config(format!("Invalid API secret: {}", e)))?;

    mac.update(message);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc4231_vector() {
        // RFC 4231, test case 2
        let signature = sign(b"Jefe", b"what do ya want for nothing?").unwrap();
        assert_eq!(
            signature,
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn test_sign_is_deterministic() {
        let url = b"https://c-cex.com/t/api.html?a=getbalances&apikey=key&nonce=1459411200";
        let first = sign(b"secret", url).unwrap();
        let second = sign(b"secret", url).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 128);
        assert_ne!(first, sign(b"other-secret", url).unwrap());
    }
}
