// cardscan - business-card scan and inquiry relay API
//
// Accepts uploaded card photos, relays them to the OCR provider, extracts
// contact fields from the recognized text, and forwards inquiry submissions
// to the automation webhook. The service keeps no state of its own.

pub mod config;
pub mod kernel;
pub mod server;

pub use config::*;
