//! Per-card artwork fetch.
//!
//! Every failure mode (transport, HTTP status, undecodable payload) comes back
//! as an [`ImageFetchError`] so the identity panel can show it inline.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use once_cell::sync::Lazy;
use thiserror::Error;

static CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

#[derive(Debug, Error)]
pub enum ImageFetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server answered HTTP {0}")]
    Status(u16),

    #[error("payload is not a readable image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decoded artwork ready to drop into an `<img src>`.
#[derive(Debug, Clone, PartialEq)]
pub struct CardImage {
    pub data_url: String,
    pub width: u32,
    pub height: u32,
}

/// Fetch with the shared client.
pub async fn fetch_image(url: &str) -> Result<CardImage, ImageFetchError> {
    fetch_image_with(&CLIENT, url).await
}

pub async fn fetch_image_with(
    client: &reqwest::Client,
    url: &str,
) -> Result<CardImage, ImageFetchError> {
    tracing::debug!(%url, "fetching artwork");

    let result = request(client, url).await;
    if let Err(err) = &result {
        tracing::warn!(%url, "artwork unavailable: {err}");
    }
    result
}

async fn request(client: &reqwest::Client, url: &str) -> Result<CardImage, ImageFetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ImageFetchError::Status(status.as_u16()));
    }
    let bytes = response.bytes().await?;
    decode_image(&bytes)
}

/// Decode `bytes` as a bitmap and wrap the original payload in a data URL.
pub fn decode_image(bytes: &[u8]) -> Result<CardImage, ImageFetchError> {
    let format = image::guess_format(bytes)?;
    let decoded = image::load_from_memory_with_format(bytes, format)?;

    Ok(CardImage {
        data_url: format!(
            "data:{};base64,{}",
            format.to_mime_type(),
            STANDARD.encode(bytes)
        ),
        width: decoded.width(),
        height: decoded.height(),
    })
}
