//! claimcheck-client — submission of claim forms to the evaluation service.
//!
//! A [`ClaimSubmission`] is a document plus a free-text query. The
//! [`EvaluationClient`] POSTs it as `multipart/form-data` and hands back the
//! decoded JSON body untouched; making sense of that body is the job of
//! `claimcheck_core::normalizer`.
//!
//! No retries and no authentication: one request, one answer or one
//! [`ClientError`].

pub mod error;

pub use error::ClientError;

use reqwest::multipart::{Form, Part};
use reqwest::Url;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;

/// Upload types offered by the claim form. Anything else is sent as
/// `application/octet-stream`.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "png", "jpg", "jpeg", "txt"];

/// A validated claim form, ready to send.
#[derive(Debug, Clone)]
pub struct ClaimSubmission {
    pub file_name: String,
    pub file_bytes: Vec<u8>,
    pub query: String,
}

impl ClaimSubmission {
    /// Build a submission from in-memory parts. The query must not be blank.
    pub fn new(
        file_name: impl Into<String>,
        file_bytes: Vec<u8>,
        query: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(ClientError::EmptyQuery);
        }
        Ok(Self {
            file_name: file_name.into(),
            file_bytes,
            query,
        })
    }

    /// Read the document at `path`. The file must exist; its content is not
    /// inspected.
    pub async fn from_path(path: &Path, query: impl Into<String>) -> Result<Self, ClientError> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(ClientError::EmptyQuery);
        }
        let file_bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(ClientError::MissingFile(path.to_path_buf()));
            }
            Err(source) => {
                return Err(ClientError::ReadFile {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Self::new(file_name, file_bytes, query)
    }

    /// MIME type of the document, guessed from its extension.
    pub fn content_type(&self) -> String {
        let accepted = Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
        if !accepted {
            return "application/octet-stream".to_string();
        }
        mime_guess::from_path(&self.file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }

    /// The form as sent: part `file` (name and content type set), then part
    /// `query`.
    fn form(&self) -> Result<Form, ClientError> {
        let file = Part::bytes(self.file_bytes.clone())
            .file_name(self.file_name.clone())
            .mime_str(&self.content_type())?;
        Ok(Form::new().part("file", file).text("query", self.query.clone()))
    }
}

/// HTTP client bound to one evaluation endpoint.
#[derive(Debug, Clone)]
pub struct EvaluationClient {
    endpoint: Url,
    timeout: Duration,
    http: reqwest::Client,
}

impl EvaluationClient {
    /// Create a client for an absolute `http` or `https` endpoint.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, ClientError> {
        let invalid = |reason: String| ClientError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason,
        };
        let url = Url::parse(endpoint).map_err(|err| invalid(format!("{err}")))?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(invalid(format!("unsupported scheme {other:?}"))),
        }
        if url.host_str().is_none() {
            return Err(invalid("missing host".to_string()));
        }

        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: url,
            timeout,
            http,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Submit the form and return the decoded JSON body.
    ///
    /// A non-success status becomes [`ClientError::Status`] carrying the
    /// response text; the body is only decoded for successful responses.
    pub async fn submit(&self, submission: &ClaimSubmission) -> Result<Value, ClientError> {
        tracing::info!(
            endpoint = %self.endpoint,
            file = %submission.file_name,
            bytes = submission.file_bytes.len(),
            "submitting claim"
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .multipart(submission.form()?)
            .send()
            .await
            .map_err(|err| self.transport(err))?;
        let status = response.status();
        let body = response.bytes().await.map_err(|err| self.transport(err))?;

        tracing::debug!(%status, bytes = body.len(), "evaluation service answered");

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body).trim().to_string();
            let message = if text.is_empty() {
                format!("Request failed with {}", status.as_u16())
            } else {
                text
            };
            return Err(ClientError::Status { status, message });
        }

        Ok(serde_json::from_slice(&body)?)
    }

    fn transport(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout(self.timeout)
        } else {
            ClientError::Transport(err)
        }
    }
}
