use http::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use http::StatusCode;
use serde::Serialize;

/// JSON body written by generated handlers: `{"error": "...", "response": ...}`.
///
/// `response` is omitted from error bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope<T> {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<T>,
}

impl<T> Envelope<T> {
    /// Successful envelope carrying `response` and an empty error.
    pub fn ok(response: T) -> Self {
        Envelope {
            error: String::new(),
            response: Some(response),
        }
    }
}

/// In-memory response sink for generated handlers.
///
/// Nothing is committed until a write succeeds, so a failed serialization
/// can still be answered with a different status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseWriter {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl Default for ResponseWriter {
    fn default() -> Self {
        ResponseWriter {
            status: StatusCode::OK,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }
}

impl ResponseWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a header, replacing any previous value.
    pub fn set_header(&mut self, name: &str, value: &str) {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.to_string()));
    }

    /// Serialize `value` as the JSON body with `status`.
    ///
    /// On error the writer is left untouched.
    pub fn write_json<T: Serialize>(
        &mut self,
        status: StatusCode,
        value: &T,
    ) -> Result<(), serde_json::Error> {
        let body = serde_json::to_vec(value)?;
        self.status = status;
        self.set_header(CONTENT_TYPE.as_str(), "application/json");
        self.body = body;
        Ok(())
    }

    /// Write `{"error": message}` with `status`.
    pub fn write_error(&mut self, status: StatusCode, message: &str) {
        let body = serde_json::json!({ "error": message });
        self.status = status;
        self.set_header(CONTENT_TYPE.as_str(), "application/json");
        self.body = body.to_string().into_bytes();
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body decoded as JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Convert into an `http::Response`. Headers that are not valid HTTP
    /// are dropped.
    pub fn into_http(self) -> http::Response<Vec<u8>> {
        let mut res = http::Response::new(self.body);
        *res.status_mut() = self.status;
        for (name, value) in &self.headers {
            if let (Ok(name), Ok(value)) = (
                HeaderName::try_from(name.as_str()),
                HeaderValue::try_from(value.as_str()),
            ) {
                res.headers_mut().insert(name, value);
            }
        }
        res
    }
}
