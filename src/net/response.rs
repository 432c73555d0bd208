//! HTTP response models for the embedding bridge.
//!
//! [`RawResponse`] is what the transport hands to the decoder: headers, status,
//! reason phrase, and a single-consumption body stream that may still carry one
//! or more `Content-Encoding` layers. [`Response`] is the **fully buffered and
//! fully decoded** value object handed to the embedder.
//!
//! ## Notes
//! - `headers` is an `http::HeaderMap`, which is **case-insensitive** for
//!   header names.
//! - The decoded body is stored as raw `Vec<u8>`. For text responses, use
//!   [`Response::text`]; no charset negotiation is performed.
//! - `status_text` is typically derived from the status code’s canonical
//!   reason phrase and may be `"Unknown"` for non-standard codes.

use std::borrow::Cow;
use std::io::Read;

use http::HeaderMap;
use url::Url;

/// A response as received from the transport, before content decoding.
///
/// The body stream is consumed (and dropped, which closes it) exactly once by
/// [`decode`]; a raw response cannot be decoded twice.
///
/// [`decode`]: crate::net::decode::decode
pub struct RawResponse {
    /// Response headers as a case-insensitive map.
    pub headers: HeaderMap,

    /// Numeric HTTP status code as received from the transport.
    pub status: u16,

    /// Human-readable reason phrase (e.g., `"OK"`, `"Not Found"`).
    pub status_text: String,

    /// The body stream, possibly still compressed per `Content-Encoding`.
    pub body: Box<dyn Read>,
}

/// Fully decoded HTTP response, ready to cross into an embedding runtime.
///
/// All fields are plain values; nothing here borrows from the transport.
#[derive(Debug)]
pub struct Response {
    /// Response headers, passed through from the transport unchanged.
    pub headers: HeaderMap,

    /// Numeric HTTP status code (e.g., `200`, `404`).
    ///
    /// Kept at 32 bits rather than a machine-width integer so it can cross
    /// into embedders with a constrained numeric bridge.
    pub status: i32,

    /// Human-readable reason phrase.
    ///
    /// May be `"Unknown"` for non-standard codes.
    pub status_text: String,

    /// `true` iff `status` is in the `200..=299` range.
    pub ok: bool,

    /// Whether the transport followed at least one redirect, as reported by
    /// the caller.
    pub redirected: bool,

    /// Final URL of the response, as reported by the caller.
    pub url: Url,

    /// Decoded response body bytes. No `Content-Encoding` framing remains.
    pub body: Vec<u8>,
}

impl Response {
    /// Returns the body interpreted as text.
    ///
    /// Raw octets are decoded as UTF-8 with lossy replacement; there is no
    /// charset negotiation.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_lossy_utf8() {
        let resp = Response {
            headers: HeaderMap::new(),
            status: 200,
            status_text: "OK".to_string(),
            ok: true,
            redirected: false,
            url: Url::parse("https://example.com/").unwrap(),
            body: b"caf\xc3\xa9 \xff".to_vec(),
        };

        assert_eq!(resp.text(), "café \u{fffd}");
    }
}
