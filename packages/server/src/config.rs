use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub ocr_space_api_key: String,
    pub ocr_language: String,
    pub inquiry_webhook_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            ocr_space_api_key: env::var("OCR_SPACE_API_KEY")
                .context("OCR_SPACE_API_KEY must be set")?,
            ocr_language: env::var("OCR_LANGUAGE").unwrap_or_else(|_| "ger".to_string()),
            inquiry_webhook_url: env::var("INQUIRY_WEBHOOK_URL")
                .context("INQUIRY_WEBHOOK_URL must be set")?,
        })
    }
}
