//! POST /api/inquiry - relay an inquiry submission to the automation webhook.

use axum::{
    extract::{Extension, Multipart},
    Json,
};
use serde::Serialize;

use crate::kernel::InquiryAttachment;
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryResponse {
    forwarded: bool,
    webhook_status: u16,
}

/// Relay an inquiry (form fields plus attachments) to the webhook.
///
/// Text fields are forwarded verbatim; file fields keep their original
/// filename and content type. Nothing is stored locally.
pub async fn inquiry_handler(
    Extension(state): Extension<AppState>,
    mut multipart: Multipart,
) -> Result<Json<InquiryResponse>, ApiError> {
    let mut fields: Vec<(String, String)> = Vec::new();
    let mut attachments: Vec<InquiryAttachment> = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(|f| f.to_string());

        match file_name {
            Some(file_name) => {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field.bytes().await?;
                attachments.push(InquiryAttachment {
                    field_name: name,
                    file_name,
                    content_type,
                    data: data.to_vec(),
                });
            }
            None => {
                let value = field.text().await?;
                fields.push((name, value));
            }
        }
    }

    if fields.is_empty() && attachments.is_empty() {
        return Err(ApiError::BadRequest("Empty inquiry submission".to_string()));
    }

    tracing::info!(
        fields = fields.len(),
        attachments = attachments.len(),
        "Relaying inquiry"
    );

    let status = state
        .webhook
        .forward_inquiry(fields, attachments)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Webhook call failed");
            ApiError::Upstream("Inquiry forwarding failed".to_string())
        })?;

    Ok(Json(InquiryResponse {
        forwarded: true,
        webhook_status: status.as_u16(),
    }))
}
