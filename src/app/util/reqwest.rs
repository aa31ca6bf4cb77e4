use bytes::{Bytes, BytesMut};
use reqwest::StatusCode;

use crate::app::models::api_error::ApiError;

/// Downloads `url`, refusing bodies larger than `max_size` bytes.
pub async fn get_bytes(
    url: &str,
    max_size: usize,
    client: &reqwest::Client,
) -> Result<Bytes, ApiError> {
    match client.get(url).send().await {
        Ok(mut res) => {
            let status = res.status();
            if !status.is_success() {
                tracing::error!("get_bytes: {} responded with {}", url, status);
                return Err(ApiError {
                    code: StatusCode::INTERNAL_SERVER_ERROR,
                    message: format!("Url responded with {}.", status),
                });
            }

            if let Some(length) = res.content_length() {
                if length > max_size as u64 {
                    tracing::error!("get_bytes: {} declared {} bytes", url, length);
                    return Err(too_large(max_size));
                }
            }

            let mut buffer = BytesMut::new();
            loop {
                match res.chunk().await {
                    Ok(Some(chunk)) => {
                        if buffer.len() + chunk.len() > max_size {
                            tracing::error!("get_bytes: {} exceeded {} bytes", url, max_size);
                            return Err(too_large(max_size));
                        }
                        buffer.extend_from_slice(&chunk);
                    }
                    Ok(None) => return Ok(buffer.freeze()),
                    Err(e) => {
                        tracing::error!(%e);
                        return Err(ApiError {
                            code: StatusCode::INTERNAL_SERVER_ERROR,
                            message: "Failed to get bytes from response.".to_string(),
                        });
                    }
                }
            }
        }
        Err(e) => {
            tracing::error!(%e);
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to get url response.".to_string(),
            })
        }
    }
}

fn too_large(max_size: usize) -> ApiError {
    ApiError {
        code: StatusCode::INTERNAL_SERVER_ERROR,
        message: format!("Url response exceeded {} bytes.", max_size),
    }
}
