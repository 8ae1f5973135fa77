// Outbound service clients
pub mod webhook;

pub use webhook::{InquiryAttachment, WebhookClient};
