//! URL-safe base64 as used by lndconnect strings.
//!
//! Decoding is lenient about padding (`=` may be present or omitted) and
//! about non-zero trailing bits, matching what lndconnect generators in
//! the wild produce. Encoding always emits the unpadded form.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::{DecodeError, Engine as _};

const DECODER: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

const ENCODER: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_encode_padding(false),
);

/// Decodes base64url text into raw bytes.
///
/// # Errors
///
/// Returns `DecodeError` if the text contains characters outside the
/// URL-safe alphabet or has an impossible length.
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    DECODER.decode(text)
}

/// Encodes raw bytes as unpadded base64url text.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    ENCODER.encode(bytes)
}
