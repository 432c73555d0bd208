//! `Content-Encoding` decoding for raw responses.
//!
//! HTTP lists encodings in the order they were **applied**, so a header of
//! `gzip, br` means the body was gzipped first and then brotli-compressed.
//! Decoding therefore walks the token list right-to-left, undoing one layer
//! per recognized token.
//!
//! ## Notes
//! - The raw body is drained into memory before any layer is undone. This is
//!   what makes the `deflate` zlib/raw fallback sound: both attempts run over
//!   fresh cursors on the same bytes instead of assuming the stream can be
//!   rewound after a failed zlib parse.
//! - Unrecognized tokens are left as-is rather than rejected. The resulting
//!   body may still carry that layer's framing; callers get exactly what the
//!   transport delivered.

use std::fmt;
use std::io::{self, Cursor, Read};

use flate2::read::{DeflateDecoder, GzDecoder, ZlibDecoder};
use http::header::CONTENT_ENCODING;
use url::Url;

use crate::errors::DecodeError;
use crate::net::response::{RawResponse, Response};

/// The closed set of `Content-Encoding` transforms this decoder can undo.
///
/// Tokens outside this set are passed through untouched; see
/// [`ContentEncoding::from_token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    Gzip,
    Brotli,
    /// RFC 1950 zlib framing, with a raw RFC 1951 fallback for servers that
    /// send header-less streams under the same token.
    Deflate,
    Identity,
}

impl ContentEncoding {
    /// Maps a single header token to an encoding.
    ///
    /// The token must already be trimmed and lowercased. Returns `None` for
    /// unrecognized tokens; an empty token counts as `identity`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "gzip" => Some(Self::Gzip),
            "br" => Some(Self::Brotli),
            "deflate" => Some(Self::Deflate),
            "identity" | "" => Some(Self::Identity),
            _ => None,
        }
    }
}

impl fmt::Display for ContentEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Gzip => "gzip",
            Self::Brotli => "br",
            Self::Deflate => "deflate",
            Self::Identity => "identity",
        };
        f.write_str(token)
    }
}

/// Decodes a raw response into a fully materialized [`Response`].
///
/// The body stream is consumed and dropped exactly once, on every exit path.
/// `url` and `redirected` are pass-through metadata supplied by the caller.
///
/// Fails if the raw stream cannot be drained or if any recognized encoding
/// layer cannot be undone; no partial body is returned.
pub fn decode(raw: RawResponse, url: Url, redirected: bool) -> Result<Response, DecodeError> {
    let RawResponse {
        headers,
        status,
        status_text,
        mut body,
    } = raw;

    let mut buf = Vec::new();
    body.read_to_end(&mut buf).map_err(DecodeError::Read)?;
    drop(body);

    let encoding_header = headers
        .get(CONTENT_ENCODING)
        .map(|v| v.to_str().unwrap_or("").to_string());

    let decoded = match encoding_header.as_deref() {
        Some(header) if !header.is_empty() => decode_layers(buf, header)?,
        _ => buf,
    };

    Ok(Response {
        headers,
        status: i32::from(status),
        status_text,
        ok: (200..300).contains(&status),
        redirected,
        url,
        body: decoded,
    })
}

/// Undoes every recognized encoding layer named in `header`, right-to-left.
fn decode_layers(body: Vec<u8>, header: &str) -> Result<Vec<u8>, DecodeError> {
    let mut data = body;

    for token in header.split(',').rev() {
        let token = token.trim().to_ascii_lowercase();
        let Some(encoding) = ContentEncoding::from_token(&token) else {
            log::debug!("unrecognized content-encoding token {token:?}, leaving layer as-is");
            continue;
        };

        data = match encoding {
            ContentEncoding::Identity => data,
            ContentEncoding::Gzip => layer(encoding, gunzip(&data))?,
            ContentEncoding::Brotli => layer(encoding, unbrotli(&data))?,
            ContentEncoding::Deflate => layer(encoding, inflate(&data))?,
        };
    }

    Ok(data)
}

fn layer(encoding: ContentEncoding, result: io::Result<Vec<u8>>) -> Result<Vec<u8>, DecodeError> {
    result.map_err(|source| DecodeError::Decode { encoding, source })
}

fn gunzip(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    GzDecoder::new(data).read_to_end(&mut out)?;
    Ok(out)
}

fn unbrotli(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    brotli::BrotliDecompress(&mut Cursor::new(data), &mut out)?;
    Ok(out)
}

/// HTTP `deflate` is usually zlib-framed (RFC 1950), but some servers send a
/// raw RFC 1951 stream. Try zlib first; on failure, retry raw over the same
/// bytes and surface the raw attempt's error if both fail.
fn inflate(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    match ZlibDecoder::new(data).read_to_end(&mut out) {
        Ok(_) => Ok(out),
        Err(_) => {
            let mut out = Vec::new();
            DeflateDecoder::new(data).read_to_end(&mut out)?;
            Ok(out)
        }
    }
}
