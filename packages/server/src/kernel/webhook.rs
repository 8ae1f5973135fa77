use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use tracing::{error, info};

/// Relay client for the inquiry automation webhook.
///
/// Forwards inquiry form fields and file attachments as a single multipart
/// POST. No retries and no buffering beyond the request body itself; the
/// webhook's verdict is the caller's verdict.
pub struct WebhookClient {
    client: Client,
    url: String,
}

/// A file attachment taken from an inquiry submission.
#[derive(Debug, Clone)]
pub struct InquiryAttachment {
    pub field_name: String,
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl WebhookClient {
    pub fn new(url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, url })
    }

    /// Forward an inquiry to the webhook. Returns the webhook's status code.
    ///
    /// Text fields become form fields, attachments become file parts with
    /// their original filename and content type.
    pub async fn forward_inquiry(
        &self,
        fields: Vec<(String, String)>,
        attachments: Vec<InquiryAttachment>,
    ) -> Result<StatusCode> {
        let mut form = reqwest::multipart::Form::new();

        for (name, value) in fields {
            form = form.text(name, value);
        }

        for attachment in attachments {
            let part = reqwest::multipart::Part::bytes(attachment.data)
                .file_name(attachment.file_name)
                .mime_str(&attachment.content_type)
                .context("Invalid attachment content type")?;
            form = form.part(attachment.field_name, part);
        }

        info!("Forwarding inquiry to webhook");

        let response = self.client.post(&self.url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, "Webhook rejected inquiry: {}", body);
            anyhow::bail!("Webhook error {}: {}", status, body);
        }

        info!(%status, "Inquiry forwarded");
        Ok(status)
    }
}
