use std::io::Cursor;

use url::Url;

use crate::errors::FetchError;
use crate::net::decode::decode;
use crate::net::response::{RawResponse, Response};

// Loads an URL and returns the decoded response in a result if any
pub async fn fetch(url: &str) -> Result<Response, FetchError> {
    let requested = Url::parse(url)?;

    // The client must hand us the body exactly as sent; Content-Encoding is
    // undone by our own decoder.
    let client = reqwest::Client::new();
    let res = client.get(requested.clone()).send().await?;

    // Fetch results
    let final_url = res.url().clone();
    let redirected = final_url != requested;
    let status = res.status();
    let status_text = status
        .canonical_reason()
        .unwrap_or("Unknown")
        .to_string();
    let headers = res.headers().clone();

    // Fetch body. We don't do streaming yet
    let body = res.bytes().await?.to_vec();
    log::trace!("fetched {final_url} ({status}, {} raw bytes)", body.len());

    let raw = RawResponse {
        headers,
        status: status.as_u16(),
        status_text,
        body: Box::new(Cursor::new(body)),
    };

    Ok(decode(raw, final_url, redirected)?)
}
