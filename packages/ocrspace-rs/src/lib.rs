//! Client for the OCR.space image parsing API.
//!
//! Minimal surface: upload an image, get the recognized plain text back.
//! The provider does the actual optical character recognition; this crate
//! only speaks its multipart upload protocol and decodes its response
//! envelope.

pub mod models;

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::models::ParseImageResponse;

const PARSE_IMAGE_URL: &str = "https://api.ocr.space/parse/image";

/// Result type for OCR client operations.
pub type Result<T> = std::result::Result<T, OcrError>;

/// OCR client errors.
#[derive(Debug, Error)]
pub enum OcrError {
    /// Transport-level failure (connection refused, timeout, bad mime type)
    #[error("OCR request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx HTTP response from the provider
    #[error("OCR provider returned {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// Provider accepted the upload but could not process the image
    #[error("OCR processing failed: {0}")]
    Provider(String),

    /// Response body was not the expected JSON envelope
    #[error("Failed to parse OCR response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Connection options for the OCR.space API.
#[derive(Debug, Clone)]
pub struct OcrSpaceOptions {
    pub api_key: String,
    /// Three-letter language hint passed to the provider ("ger", "eng", ...)
    pub language: String,
    /// OCR engine selector; engine 2 handles low-resolution photos better
    pub engine: u8,
}

impl OcrSpaceOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            language: "ger".to_string(),
            engine: 2,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// OCR.space API client.
#[derive(Debug, Clone)]
pub struct OcrSpaceClient {
    options: OcrSpaceOptions,
    client: Client,
}

impl OcrSpaceClient {
    /// Create a new client with a 30 second request timeout.
    pub fn new(options: OcrSpaceOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { options, client })
    }

    /// Upload an image and return the recognized plain text.
    ///
    /// Absence of recognized text is not an error: a blank image yields zero
    /// parsed results and therefore an empty string.
    pub async fn parse_image(
        &self,
        image: Vec<u8>,
        file_name: &str,
        mime_type: &str,
    ) -> Result<String> {
        let part = reqwest::multipart::Part::bytes(image)
            .file_name(file_name.to_string())
            .mime_str(mime_type)?;

        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("language", self.options.language.clone())
            .text("OCREngine", self.options.engine.to_string())
            .text("scale", "true")
            .text("detectOrientation", "true")
            .text("isOverlayRequired", "false");

        let response = self
            .client
            .post(PARSE_IMAGE_URL)
            .header("apikey", self.options.api_key.as_str())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, "OCR provider rejected request");
            return Err(OcrError::Api { status, body });
        }

        let body = response.text().await?;
        let parsed: ParseImageResponse = serde_json::from_str(&body)?;

        if parsed.is_errored_on_processing {
            let exit_code = parsed.ocr_exit_code;
            let message = parsed
                .error_message
                .map(|m| m.join())
                .or(parsed.error_details)
                .unwrap_or_else(|| format!("OCR exit code {}", exit_code));
            return Err(OcrError::Provider(message));
        }

        tracing::debug!(
            results = parsed.parsed_results.len(),
            exit_code = parsed.ocr_exit_code,
            "OCR parse complete"
        );

        Ok(parsed.combined_text())
    }
}
