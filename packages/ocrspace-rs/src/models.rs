//! Wire types for the OCR.space `parse/image` response.

use serde::Deserialize;

/// Top-level response of `POST /parse/image`.
#[derive(Debug, Deserialize)]
pub struct ParseImageResponse {
    #[serde(rename = "ParsedResults", default)]
    pub parsed_results: Vec<ParsedResult>,

    #[serde(rename = "OCRExitCode", default)]
    pub ocr_exit_code: i32,

    #[serde(rename = "IsErroredOnProcessing", default)]
    pub is_errored_on_processing: bool,

    #[serde(rename = "ErrorMessage", default)]
    pub error_message: Option<ErrorMessage>,

    #[serde(rename = "ErrorDetails", default)]
    pub error_details: Option<String>,
}

/// One recognized page/region of the uploaded image.
#[derive(Debug, Deserialize)]
pub struct ParsedResult {
    #[serde(rename = "ParsedText", default)]
    pub parsed_text: String,

    #[serde(rename = "FileParseExitCode", default)]
    pub file_parse_exit_code: i32,

    #[serde(rename = "ErrorMessage", default)]
    pub error_message: Option<String>,
}

/// OCR.space reports errors as either a single string or a list of strings
/// depending on the failure, so decode both shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    Single(String),
    Many(Vec<String>),
}

impl ErrorMessage {
    pub fn join(&self) -> String {
        match self {
            ErrorMessage::Single(message) => message.clone(),
            ErrorMessage::Many(messages) => messages.join("; "),
        }
    }
}

impl ParseImageResponse {
    /// Concatenated text of all parsed results, in order. Empty when the
    /// provider recognized nothing.
    pub fn combined_text(&self) -> String {
        self.parsed_results
            .iter()
            .map(|result| result.parsed_text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_success_response() {
        let json = r#"{
            "ParsedResults": [
                { "ParsedText": "John Smith\r\nAcme Corp", "FileParseExitCode": 1 }
            ],
            "OCRExitCode": 1,
            "IsErroredOnProcessing": false
        }"#;

        let response: ParseImageResponse = serde_json::from_str(json).unwrap();
        assert!(!response.is_errored_on_processing);
        assert_eq!(response.combined_text(), "John Smith\r\nAcme Corp");
    }

    #[test]
    fn test_combined_text_joins_multiple_results() {
        let json = r#"{
            "ParsedResults": [
                { "ParsedText": "page one" },
                { "ParsedText": "page two" }
            ],
            "OCRExitCode": 1
        }"#;

        let response: ParseImageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.combined_text(), "page one\npage two");
    }

    #[test]
    fn test_empty_results_yield_empty_text() {
        let response: ParseImageResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.combined_text(), "");
        assert!(!response.is_errored_on_processing);
    }

    #[test]
    fn test_error_message_single_string() {
        let json = r#"{
            "IsErroredOnProcessing": true,
            "ErrorMessage": "Unable to recognize the file type",
            "OCRExitCode": 4
        }"#;

        let response: ParseImageResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_errored_on_processing);
        assert_eq!(
            response.error_message.unwrap().join(),
            "Unable to recognize the file type"
        );
    }

    #[test]
    fn test_error_message_array() {
        let json = r#"{
            "IsErroredOnProcessing": true,
            "ErrorMessage": ["Timed out", "Please try again"],
            "OCRExitCode": 6
        }"#;

        let response: ParseImageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.error_message.unwrap().join(),
            "Timed out; Please try again"
        );
    }
}
