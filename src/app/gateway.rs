use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default exchange timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Why a backend exchange did not produce a usable result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// The backend answered but did not accept the request.
    #[error("backend rejected request: {}", .0.as_deref().unwrap_or("no detail"))]
    Rejected(Option<String>),

    /// The exchange failed or the response was malformed.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl GatewayError {
    /// Status line text for this failure. Rejections show the backend's
    /// own error text when it sent one, otherwise the per-operation
    /// fallback; transport failures are prefixed with "Error: ".
    pub fn status(&self, fallback: &str) -> String {
        match self {
            GatewayError::Rejected(Some(detail)) if !detail.is_empty() => detail.clone(),
            GatewayError::Rejected(_) => fallback.to_string(),
            GatewayError::Transport(detail) => format!("Error: {detail}"),
        }
    }
}

/// Response envelope shared by all endpoints.
///
/// Backend error replies carry only an `error` field, so `success`
/// defaults to false when absent.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub html_content: Option<String>,
}

#[derive(Serialize)]
struct DatasetRequest<'a> {
    letterlist: &'a str,
}

#[derive(Serialize)]
struct SaveLetterRequest<'a> {
    letter: String,
    #[serde(rename = "imageData")]
    image_data: &'a str,
}

#[derive(Serialize)]
struct RenderRequest<'a> {
    text: &'a str,
}

/// JSON-over-HTTP client for the handwriting backend.
///
/// Cheap to construct; one is built per exchange from the current
/// settings so URL changes take effect immediately.
pub struct BackendGateway {
    base_url: String,
    timeout_secs: u64,
}

impl BackendGateway {
    pub fn new(base_url: String, timeout_secs: u64) -> Self {
        Self {
            base_url,
            timeout_secs,
        }
    }

    /// Ask the backend to seed a synthetic sample set for every symbol.
    /// Returns the backend's confirmation message.
    pub fn generate_test_dataset(&self, letterlist: &str) -> Result<String, GatewayError> {
        let envelope = self.exchange("/api/generate-test-dataset", &DatasetRequest { letterlist })?;
        let envelope = accepted(envelope)?;
        Ok(envelope
            .message
            .unwrap_or_else(|| "Test dataset generated".to_string()))
    }

    /// Submit one drawn sample for a symbol. The PNG bytes travel as a
    /// base64 data URL.
    pub fn save_letter(&self, letter: char, image_png: &[u8]) -> Result<(), GatewayError> {
        let image_data = png_data_url(image_png);
        let envelope = self.exchange(
            "/api/save-letter",
            &SaveLetterRequest {
                letter: letter.to_string(),
                image_data: &image_data,
            },
        )?;
        accepted(envelope)?;
        Ok(())
    }

    /// Render text in the captured handwriting. Returns the markup to
    /// load into the render surface.
    pub fn render_text(&self, text: &str) -> Result<String, GatewayError> {
        let envelope = self.exchange("/api/render", &RenderRequest { text })?;
        let envelope = accepted(envelope)?;
        envelope
            .html_content
            .ok_or_else(|| GatewayError::Transport("response missing html_content".to_string()))
    }

    fn exchange<B: Serialize>(&self, path: &str, body: &B) -> Result<Envelope, GatewayError> {
        let url = self.endpoint(path);
        log::debug!("POST {url}");

        let response = minreq::post(&url)
            .with_timeout(self.timeout_secs)
            .with_json(body)
            .map_err(|e| transport(&url, e))?
            .send()
            .map_err(|e| transport(&url, e))?;

        response.json::<Envelope>().map_err(|e| transport(&url, e))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

fn transport(url: &str, err: minreq::Error) -> GatewayError {
    log::warn!("exchange with {url} failed: {err}");
    GatewayError::Transport(err.to_string())
}

fn accepted(envelope: Envelope) -> Result<Envelope, GatewayError> {
    if envelope.success {
        Ok(envelope)
    } else {
        Err(GatewayError::Rejected(envelope.error))
    }
}

/// Encode PNG bytes as the data URL the backend expects.
pub fn png_data_url(bytes: &[u8]) -> String {
    format!("data:image/png;base64,{}", BASE64.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_success_with_message() {
        let json = r#"{"success": true, "message": "Processed letter A"}"#;
        let envelope: Envelope = serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Processed letter A"));
        assert!(envelope.error.is_none());
        assert!(envelope.html_content.is_none());
    }

    #[test]
    fn test_envelope_explicit_rejection() {
        let json = r#"{"success": false, "error": "No image data provided"}"#;
        let envelope: Envelope = serde_json::from_str(json).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.error.as_deref(), Some("No image data provided"));
    }

    #[test]
    fn test_envelope_error_reply_without_success_field() {
        // HTTP 400/500 replies carry only the error text
        let json = r#"{"error": "Text is required"}"#;
        let envelope: Envelope = serde_json::from_str(json).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.error.as_deref(), Some("Text is required"));
    }

    #[test]
    fn test_envelope_empty_object() {
        let envelope: Envelope = serde_json::from_str("{}").unwrap();
        assert!(!envelope.success);
        assert!(envelope.message.is_none());
        assert!(envelope.error.is_none());
        assert!(envelope.html_content.is_none());
    }

    #[test]
    fn test_envelope_render_payload() {
        let json = r#"{"success": true, "html_content": "<html><body><p>hi</p></body></html>"}"#;
        let envelope: Envelope = serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        assert!(envelope.html_content.unwrap().contains("<p>hi</p>"));
    }

    #[test]
    fn test_save_letter_request_field_names() {
        let body = SaveLetterRequest {
            letter: 'A'.to_string(),
            image_data: "data:image/png;base64,AAAA",
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(
            json,
            r#"{"letter":"A","imageData":"data:image/png;base64,AAAA"}"#
        );
    }

    #[test]
    fn test_dataset_request_field_names() {
        let body = DatasetRequest { letterlist: "AB9" };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"letterlist":"AB9"}"#);
    }

    #[test]
    fn test_render_request_preserves_text() {
        let body = RenderRequest {
            text: "  hello\nworld  ",
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            "{\"text\":\"  hello\\nworld  \"}"
        );
    }

    #[test]
    fn test_png_data_url() {
        let url = png_data_url(&[0x89, 0x50, 0x4e, 0x47]);
        assert_eq!(url, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let gateway = BackendGateway::new("http://127.0.0.1:5000".to_string(), 10);
        assert_eq!(
            gateway.endpoint("/api/render"),
            "http://127.0.0.1:5000/api/render"
        );

        let gateway = BackendGateway::new("http://127.0.0.1:5000/".to_string(), 10);
        assert_eq!(
            gateway.endpoint("/api/render"),
            "http://127.0.0.1:5000/api/render"
        );
    }

    #[test]
    fn test_status_shows_backend_error_verbatim() {
        let err = GatewayError::Rejected(Some("duplicate".to_string()));
        assert_eq!(err.status("Error saving letter"), "duplicate");
    }

    #[test]
    fn test_status_falls_back_when_no_detail() {
        let err = GatewayError::Rejected(None);
        assert_eq!(err.status("Error saving letter"), "Error saving letter");

        // Empty error text counts as missing
        let err = GatewayError::Rejected(Some(String::new()));
        assert_eq!(err.status("Error rendering handwriting"), "Error rendering handwriting");
    }

    #[test]
    fn test_status_prefixes_transport_failures() {
        let err = GatewayError::Transport("connection refused".to_string());
        assert_eq!(err.status("Error saving letter"), "Error: connection refused");
    }
}
