//! API client for communicating with the Quill backend.
//!
//! Every response is decoded at this boundary into a typed value or an
//! [`ApiError`], so pages never inspect raw envelopes or status codes.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::fmt;

use crate::types::*;

/// Failure classification used across the UI.
///
/// `Denied` is reserved for HTTP 403 (an inactive account or an exhausted
/// chat limit) and is the only non-retryable variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport failure or a body we could not make sense of.
    Network(String),
    /// HTTP 403 with the server's reason, shown as an account-status notice.
    Denied(String),
    /// Any other rejection carrying a server-provided reason.
    Rejected(String),
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::Network(m) | ApiError::Denied(m) | ApiError::Rejected(m) => m,
        }
    }

    pub fn is_retryable(&self) -> bool {
        !matches!(self, ApiError::Denied(_))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Failure envelope: `{success: false, error | message}`.
#[derive(Debug, serde::Deserialize)]
struct FailureBody {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl FailureBody {
    fn reason(&self) -> Option<String> {
        self.error.clone().or_else(|| self.message.clone())
    }
}

/// Decodes a raw response body against the backend's envelope rules.
///
/// Bare-array bodies (chat history) pass straight through; object bodies are
/// rejected when they carry `success: false` even under a 2xx status.
fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        let reason = serde_json::from_str::<FailureBody>(body)
            .ok()
            .and_then(|f| f.reason());
        return Err(match (status, reason) {
            (403, reason) => ApiError::Denied(reason.unwrap_or_else(|| {
                "Your account is inactive or has reached its limit".to_string()
            })),
            (_, Some(reason)) => ApiError::Rejected(reason),
            (_, None) => ApiError::Network(format!("Request failed with status {}", status)),
        });
    }

    if let Ok(envelope) = serde_json::from_str::<FailureBody>(body) {
        if envelope.success == Some(false) {
            return Err(ApiError::Rejected(
                envelope
                    .reason()
                    .unwrap_or_else(|| "Request rejected".to_string()),
            ));
        }
    }

    serde_json::from_str(body).map_err(|e| ApiError::Network(format!("Failed to parse response: {}", e)))
}

fn transport(err: impl fmt::Display) -> ApiError {
    ApiError::Network(format!("Network error: {}", err))
}

fn with_bearer(req: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(t) => req.header("Authorization", &format!("Bearer {}", t)),
        None => req,
    }
}

async fn read<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(transport)?;
    decode(status, &body)
}

/// GET with optional bearer token
pub async fn get_json<T: DeserializeOwned>(url: &str, token: Option<&str>) -> Result<T, ApiError> {
    let resp = with_bearer(Request::get(url), token)
        .send()
        .await
        .map_err(transport)?;
    read(resp).await
}

/// POST a JSON body with optional bearer token
pub async fn post_json<T, R>(url: &str, body: &T, token: Option<&str>) -> Result<R, ApiError>
where
    T: serde::Serialize,
    R: DeserializeOwned,
{
    let resp = with_bearer(Request::post(url), token)
        .json(body)
        .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(transport)?;
    read(resp).await
}

/// POST without a body (session creation, toggles with empty payloads)
pub async fn post_empty<R: DeserializeOwned>(url: &str, token: Option<&str>) -> Result<R, ApiError> {
    let resp = with_bearer(Request::post(url), token)
        .send()
        .await
        .map_err(transport)?;
    read(resp).await
}

/// PUT a JSON body with a bearer token
pub async fn put_json<T, R>(url: &str, body: &T, token: Option<&str>) -> Result<R, ApiError>
where
    T: serde::Serialize,
    R: DeserializeOwned,
{
    let resp = with_bearer(Request::put(url), token)
        .json(body)
        .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(transport)?;
    read(resp).await
}

/// DELETE with optional JSON body
pub async fn delete_json<R: DeserializeOwned>(url: &str, token: Option<&str>) -> Result<R, ApiError> {
    let resp = with_bearer(Request::delete(url), token)
        .send()
        .await
        .map_err(transport)?;
    read(resp).await
}

pub async fn delete_with_body<T, R>(url: &str, body: &T, token: Option<&str>) -> Result<R, ApiError>
where
    T: serde::Serialize,
    R: DeserializeOwned,
{
    let resp = with_bearer(Request::delete(url), token)
        .json(body)
        .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(transport)?;
    read(resp).await
}

// ============= Auth =============

/// Login with email/password
pub async fn login(base_url: &str, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let url = format!("{}/auth/login", base_url);
    let body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    post_json(&url, &body, None).await
}

/// Register a new user
pub async fn register(base_url: &str, form: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
    let url = format!("{}/auth/register", base_url);
    post_json(&url, form, None).await
}

// ============= Chat =============

/// Request a fresh chat session id. 403 means the account is inactive or
/// over its session limit; the previous session must be kept in that case.
pub async fn new_session(base_url: &str, token: &str) -> Result<String, ApiError> {
    let url = format!("{}/chat/new-session", base_url);
    let resp: NewSessionResponse = post_empty(&url, Some(token)).await?;
    Ok(resp.session_id)
}

/// Ask a question against the active session
pub async fn ask(
    base_url: &str,
    token: &str,
    question: &str,
    session_id: &str,
) -> Result<String, ApiError> {
    let url = format!("{}/chat/ask", base_url);
    let body = AskRequest {
        question: question.to_string(),
        session_id: session_id.to_string(),
        top_k: 5,
    };
    let resp: AskResponse = post_json(&url, &body, Some(token)).await?;
    Ok(resp
        .answer
        .unwrap_or_else(|| "I couldn't generate a response. Please try again.".to_string()))
}

/// Fetch every stored chat session for the signed-in user
pub async fn fetch_all_history(
    base_url: &str,
    token: &str,
) -> Result<Vec<ChatSessionRecord>, ApiError> {
    let url = format!("{}/chat/all-history", base_url);
    get_json(&url, Some(token)).await
}

/// Delete one stored chat session
pub async fn delete_chat(base_url: &str, token: &str, session_id: &str) -> Result<Ack, ApiError> {
    let url = format!(
        "{}/chat/delete-chat?sessionId={}",
        base_url,
        String::from(js_sys::encode_uri_component(session_id))
    );
    delete_json(&url, Some(token)).await
}

// ============= Documents =============

/// Fetch the authoritative document list
pub async fn fetch_documents(base_url: &str, token: &str) -> Result<Vec<DocumentInfo>, ApiError> {
    let url = format!("{}/documents/list", base_url);
    let resp: DocumentListResponse = get_json(&url, Some(token)).await?;
    Ok(resp.documents)
}

/// Upload one or more files as multipart form data, tagged with the active
/// chat session. The browser sets the multipart boundary.
pub async fn upload_documents(
    base_url: &str,
    token: &str,
    session_id: &str,
    files: &web_sys::FileList,
) -> Result<UploadReport, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("Failed to build form data".to_string()))?;
    for i in 0..files.length() {
        if let Some(file) = files.item(i) {
            form.append_with_blob_and_filename("files", &file, &file.name())
                .map_err(|_| ApiError::Network("Failed to attach file".to_string()))?;
        }
    }
    form.append_with_str("sessionId", session_id)
        .map_err(|_| ApiError::Network("Failed to attach session id".to_string()))?;

    let url = format!("{}/documents/upload", base_url);
    let resp = Request::post(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .body(form)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    read(resp).await
}

/// Delete one document by id
pub async fn delete_document(base_url: &str, token: &str, id: &str) -> Result<Ack, ApiError> {
    let url = format!("{}/documents/delete/{}", base_url, id);
    delete_json(&url, Some(token)).await
}

// ============= Admin =============

pub async fn admin_fetch_users(base_url: &str, token: &str) -> Result<Vec<AdminUser>, ApiError> {
    let url = format!("{}/admin/users", base_url);
    let resp: UsersResponse = get_json(&url, Some(token)).await?;
    Ok(resp.users)
}

pub async fn admin_toggle_user(
    base_url: &str,
    token: &str,
    id: &str,
    is_active: bool,
) -> Result<ToggleResponse, ApiError> {
    let url = format!("{}/admin/users/{}/toggle", base_url, id);
    post_json(&url, &ToggleRequest { is_active }, Some(token)).await
}

pub async fn admin_update_chat_limits(
    base_url: &str,
    token: &str,
    id: &str,
    update: &ChatLimitsUpdate,
) -> Result<Ack, ApiError> {
    let url = format!("{}/admin/users/{}/chat-limits", base_url, id);
    put_json(&url, update, Some(token)).await
}

pub async fn admin_delete_user(base_url: &str, token: &str, id: &str) -> Result<Ack, ApiError> {
    let url = format!("{}/admin/users/{}", base_url, id);
    let body = DeleteUserRequest {
        delete_chats: true,
        delete_documents: false,
    };
    delete_with_body(&url, &body, Some(token)).await
}

pub async fn admin_fetch_configs(base_url: &str, token: &str) -> Result<Vec<ApiConfig>, ApiError> {
    let url = format!("{}/admin/api-config", base_url);
    let resp: ConfigsResponse = get_json(&url, Some(token)).await?;
    Ok(resp.configs)
}

pub async fn admin_create_config(
    base_url: &str,
    token: &str,
    payload: &ConfigPayload,
) -> Result<Ack, ApiError> {
    let url = format!("{}/admin/api-config", base_url);
    post_json(&url, payload, Some(token)).await
}

pub async fn admin_update_config(
    base_url: &str,
    token: &str,
    id: &str,
    payload: &ConfigPayload,
) -> Result<Ack, ApiError> {
    let url = format!("{}/admin/api-config/{}", base_url, id);
    put_json(&url, payload, Some(token)).await
}

pub async fn admin_toggle_config(
    base_url: &str,
    token: &str,
    id: &str,
    is_active: bool,
) -> Result<ToggleResponse, ApiError> {
    let url = format!("{}/admin/api-config/{}/toggle", base_url, id);
    post_json(&url, &ToggleRequest { is_active }, Some(token)).await
}

pub async fn admin_delete_config(base_url: &str, token: &str, id: &str) -> Result<Ack, ApiError> {
    let url = format!("{}/admin/api-config/{}", base_url, id);
    delete_json(&url, Some(token)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_forbidden_uses_server_reason() {
        let err = decode::<Ack>(403, r#"{"success":false,"error":"limit reached"}"#).unwrap_err();
        assert_eq!(err, ApiError::Denied("limit reached".to_string()));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_decode_forbidden_without_body_still_denied() {
        let err = decode::<Ack>(403, "").unwrap_err();
        assert!(matches!(err, ApiError::Denied(_)));
    }

    #[test]
    fn test_decode_server_error_with_reason_is_rejected() {
        let err = decode::<Ack>(500, r#"{"success":false,"error":"boom"}"#).unwrap_err();
        assert_eq!(err, ApiError::Rejected("boom".to_string()));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_decode_message_field_fallback() {
        let err = decode::<Ack>(401, r#"{"success":false,"message":"Invalid credentials"}"#)
            .unwrap_err();
        assert_eq!(err.message(), "Invalid credentials");
    }

    #[test]
    fn test_decode_non_json_error_is_network() {
        let err = decode::<Ack>(502, "<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_decode_ok_status_with_failure_envelope() {
        let err = decode::<Ack>(200, r#"{"success":false,"error":"no answer"}"#).unwrap_err();
        assert_eq!(err, ApiError::Rejected("no answer".to_string()));
    }

    #[test]
    fn test_decode_bare_array_passes_through() {
        let records: Vec<ChatSessionRecord> = decode(
            200,
            r#"[{"sessionId":"s1","messages":[{"role":"user","message":"hi"}]}]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].session_id, "s1");
    }

    #[test]
    fn test_decode_success_object() {
        let resp: NewSessionResponse =
            decode(200, r#"{"success":true,"sessionId":"abc"}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.session_id, "abc");
    }

    #[test]
    fn test_decode_garbage_success_body_is_network() {
        let err = decode::<NewSessionResponse>(200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
