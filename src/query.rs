//! Extraction of the `cert` and `macaroon` query parameters.

use std::str::Utf8Error;

use percent_encoding::percent_decode_str;

use crate::constants::{CERT_PARAM, MACAROON_PARAM};

/// The recognized parameters of an lndconnect query string.
///
/// Values are kept exactly as they appear after percent-decoding; no
/// base64 validation happens here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConnectParams {
    /// Value of the last non-empty `cert` parameter.
    pub cert: Option<String>,
    /// Value of the last non-empty `macaroon` parameter.
    pub macaroon: Option<String>,
}

impl ConnectParams {
    /// Extracts parameters from a raw query string (without leading '?').
    ///
    /// The query is percent-decoded as a whole, then split on `&`. Each pair
    /// is split on its first `=`. Pairs without `=`, pairs with an empty
    /// value, and unknown keys are skipped. A repeated key overwrites the
    /// earlier value.
    ///
    /// # Errors
    ///
    /// Returns `Utf8Error` if the percent-decoded query is not valid UTF-8.
    pub fn parse(raw_query: &str) -> Result<Self, Utf8Error> {
        let query = percent_decode_str(raw_query).decode_utf8()?;
        let mut params = Self::default();

        for pair in query.split('&') {
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };
            if value.is_empty() {
                continue;
            }

            match name {
                CERT_PARAM => params.cert = Some(value.to_string()),
                MACAROON_PARAM => params.macaroon = Some(value.to_string()),
                _ => {}
            }
        }

        Ok(params)
    }
}
