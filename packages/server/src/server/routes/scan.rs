//! POST /api/scan-card - business-card photo upload.

use axum::{
    extract::{Extension, Multipart},
    Json,
};
use contact_extraction::{extract_contact_fields, ContactRecord};
use serde::Serialize;

use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanCardResponse {
    #[serde(flatten)]
    contact: ContactRecord,
    raw_text: String,
}

/// Accept an uploaded card photo, OCR it, and extract contact fields.
///
/// The photo arrives as the `image` field of a multipart form. Extraction
/// itself never fails; an unreadable card produces empty fields alongside
/// whatever raw text the OCR provider returned.
pub async fn scan_card_handler(
    Extension(state): Extension<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScanCardResponse>, ApiError> {
    let mut image: Option<(Vec<u8>, String, String)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("image") {
            let file_name = field.file_name().unwrap_or("card.jpg").to_string();
            let content_type = field.content_type().unwrap_or("image/jpeg").to_string();
            let data = field.bytes().await?;
            image = Some((data.to_vec(), file_name, content_type));
        }
    }

    let (data, file_name, content_type) =
        image.ok_or_else(|| ApiError::BadRequest("No image uploaded".to_string()))?;
    if data.is_empty() {
        return Err(ApiError::BadRequest("No image uploaded".to_string()));
    }

    tracing::info!(file_name = %file_name, bytes = data.len(), "Scanning card");

    let raw_text = state
        .ocr
        .parse_image(data, &file_name, &content_type)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "OCR request failed");
            ApiError::Upstream("OCR request failed".to_string())
        })?;

    let contact = extract_contact_fields(&raw_text);

    tracing::debug!(recognized = !contact.is_empty(), "Card scan complete");

    Ok(Json(ScanCardResponse { contact, raw_text }))
}
