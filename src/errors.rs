use crate::net::decode::ContentEncoding;

/// Errors produced while decoding a raw response into a [`Response`].
///
/// Both variants are fatal: no partial body is ever returned.
///
/// [`Response`]: crate::net::response::Response
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("failed to read response body: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to decode {encoding} content: {source}")]
    Decode {
        encoding: ContentEncoding,
        #[source]
        source: std::io::Error,
    },
}

/// Errors produced by the `fetch` transport glue.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
