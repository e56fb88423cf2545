//! Ed25519 signature verification over `timestamp || body`.
//!
//! The message is built from the exact bytes received. Parsing and
//! re-serializing the body first would change its layout and break the
//! signature.

use ed25519_dalek::{PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH, Signature, Verifier, VerifyingKey};
use thiserror::Error;

/// Header carrying the hex-encoded signature.
pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
/// Header carrying the timestamp that was signed along with the body.
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// Why a request failed verification. Callers must not echo this to clients.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("missing signature")]
    MissingSignature,

    #[error("missing timestamp")]
    MissingTimestamp,

    #[error("no public key configured")]
    MissingPublicKey,

    #[error("invalid hex in {field}")]
    InvalidHex { field: &'static str },

    #[error("invalid {field} length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("public key is not a valid curve point")]
    InvalidPublicKey,

    #[error("signature does not match")]
    Mismatch,
}

/// Fail-closed check: `true` only if the signature is valid.
pub fn verify(
    signature_hex: Option<&str>,
    timestamp: Option<&str>,
    body: &[u8],
    public_key_hex: Option<&str>,
) -> bool {
    try_verify(signature_hex, timestamp, body, public_key_hex).is_ok()
}

/// Verify and report the reason for failure.
///
/// Absent and empty inputs are treated the same.
pub fn try_verify(
    signature_hex: Option<&str>,
    timestamp: Option<&str>,
    body: &[u8],
    public_key_hex: Option<&str>,
) -> Result<(), SignatureError> {
    let signature_hex = non_empty(signature_hex).ok_or(SignatureError::MissingSignature)?;
    let timestamp = non_empty(timestamp).ok_or(SignatureError::MissingTimestamp)?;
    let public_key_hex = non_empty(public_key_hex).ok_or(SignatureError::MissingPublicKey)?;

    let key = parse_public_key(public_key_hex)?;
    let signature_bytes = decode_fixed::<SIGNATURE_LENGTH>(signature_hex, "signature")?;
    let signature = Signature::from_bytes(&signature_bytes);

    let mut message = Vec::with_capacity(timestamp.len() + body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(body);

    key.verify(&message, &signature)
        .map_err(|_| SignatureError::Mismatch)
}

/// Whether `public_key_hex` decodes to a usable Ed25519 public key.
pub fn public_key_is_well_formed(public_key_hex: &str) -> bool {
    parse_public_key(public_key_hex).is_ok()
}

fn parse_public_key(public_key_hex: &str) -> Result<VerifyingKey, SignatureError> {
    let bytes = decode_fixed::<PUBLIC_KEY_LENGTH>(public_key_hex, "public key")?;
    VerifyingKey::from_bytes(&bytes).map_err(|_| SignatureError::InvalidPublicKey)
}

fn decode_fixed<const N: usize>(
    input: &str,
    field: &'static str,
) -> Result<[u8; N], SignatureError> {
    let bytes = hex::decode(input.trim()).map_err(|_| SignatureError::InvalidHex { field })?;
    <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| SignatureError::InvalidLength {
        field,
        expected: N,
        actual: bytes.len(),
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
