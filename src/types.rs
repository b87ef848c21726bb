//! API types matching the Quill backend, plus the client-side chat models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============= Auth =============

/// Login request
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Login response: token plus the user's profile
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub user: UserProfile,
}

/// Register response
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub user: UserProfile,
}

fn default_role() -> String {
    "user".to_string()
}

fn default_active() -> bool {
    true
}

/// The signed-in user's profile, mirrored from the backend and persisted
/// alongside the auth token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_time_window: Option<String>,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case("admin")
    }
}

// ============= Chat =============

/// Ask request against the active chat session
#[derive(Debug, Clone, Serialize)]
pub struct AskRequest {
    pub question: String,
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(rename = "topK")]
    pub top_k: u32,
}

/// Ask response
#[derive(Debug, Clone, Deserialize)]
pub struct AskResponse {
    pub success: bool,
    #[serde(default)]
    pub answer: Option<String>,
}

/// New chat session response
#[derive(Debug, Clone, Deserialize)]
pub struct NewSessionResponse {
    pub success: bool,
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

/// One stored turn inside a server-owned chat session
#[derive(Debug, Clone, Deserialize)]
pub struct StoredTurn {
    pub role: String,
    pub message: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// A past conversation as the server stores it. The client only ever reads
/// these; mutation happens through ask/new-session/delete calls.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatSessionRecord {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(default)]
    pub messages: Vec<StoredTurn>,
}

impl ChatSessionRecord {
    /// First user-visible line, used as the history entry title.
    pub fn preview(&self) -> &str {
        self.messages
            .first()
            .map(|t| t.message.as_str())
            .unwrap_or("No messages")
    }

    pub fn last_timestamp(&self) -> Option<&str> {
        self.messages.last().and_then(|t| t.timestamp.as_deref())
    }
}

// ============= Documents =============

/// Uploaded document as listed by the backend
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentInfo {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub file_name: String,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentListResponse {
    pub success: bool,
    #[serde(default)]
    pub documents: Vec<DocumentInfo>,
}

/// Per-file outcome from a multipart upload
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResult {
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub chunks: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadSummary {
    #[serde(rename = "totalFiles", default)]
    pub total_files: u32,
    #[serde(rename = "totalChunks", default)]
    pub total_chunks: u32,
}

/// Upload response: one result per file plus totals
#[derive(Debug, Clone, Deserialize)]
pub struct UploadReport {
    #[serde(default)]
    pub results: Vec<UploadResult>,
    #[serde(default)]
    pub summary: UploadSummary,
}

impl UploadReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &UploadResult> {
        self.results.iter().filter(|r| r.status == "success")
    }

    pub fn failed(&self) -> impl Iterator<Item = &UploadResult> {
        self.results.iter().filter(|r| r.status != "success")
    }
}

// ============= Admin =============

/// User record as shown in the admin table
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdminUser {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub total_chat_sessions: u32,
    #[serde(default)]
    pub chat_limit: Option<u32>,
    #[serde(default)]
    pub usage_time_window: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl AdminUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn initials(&self) -> String {
        let first = self.first_name.chars().next().unwrap_or('?');
        let last = self.last_name.chars().next().unwrap_or('?');
        format!("{}{}", first, last).to_uppercase()
    }

    /// Substring search over name and email, case-insensitive.
    pub fn matches(&self, needle: &str) -> bool {
        let haystack = format!("{} {} {}", self.first_name, self.last_name, self.email);
        haystack.to_lowercase().contains(&needle.to_lowercase())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsersResponse {
    pub success: bool,
    #[serde(default)]
    pub users: Vec<AdminUser>,
}

/// Partial update for a user's chat allowance
#[derive(Debug, Clone, Serialize)]
pub struct ChatLimitsUpdate {
    pub chat_limit: Option<u32>,
    pub usage_time_window: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteUserRequest {
    pub delete_chats: bool,
    pub delete_documents: bool,
}

/// API-key configuration record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    #[serde(rename = "_id")]
    pub id: String,
    pub key_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub key_value_encrypted: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ApiConfig {
    /// Substring search over key name and description, case-insensitive.
    pub fn matches(&self, needle: &str) -> bool {
        let haystack = format!(
            "{} {}",
            self.key_name,
            self.description.as_deref().unwrap_or("")
        );
        haystack.to_lowercase().contains(&needle.to_lowercase())
    }

    pub fn last_changed(&self) -> Option<&str> {
        self.updated_at.as_deref().or(self.created_at.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfigsResponse {
    pub success: bool,
    #[serde(default)]
    pub configs: Vec<ApiConfig>,
}

/// Create/update payload for an API config. `key_value` is write-only and
/// omitted when unchanged.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigPayload {
    pub key_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_value: Option<String>,
    pub description: String,
    pub is_active: bool,
}

/// Toggle payload shared by the user and config tables
#[derive(Debug, Clone, Serialize)]
pub struct ToggleRequest {
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToggleResponse {
    pub success: bool,
    #[serde(default)]
    pub is_active: bool,
}

/// Generic acknowledgement from mutating endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

// ============= Client-side chat state =============

/// Message kind in the transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    User,
    Ai,
    System,
}

/// A single transcript entry. Ephemeral: lives only in page state and is
/// rebuilt from a [`ChatSessionRecord`] when history is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub kind: MessageKind,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    fn new(kind: MessageKind, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageKind::User, content)
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self::new(MessageKind::Ai, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageKind::System, content)
    }

    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Best-effort parse of a backend timestamp (RFC 3339 or HTTP-date).
pub fn parse_timestamp(raw: Option<&str>) -> DateTime<Utc> {
    raw.and_then(|s| {
        DateTime::parse_from_rfc3339(s)
            .or_else(|_| DateTime::parse_from_rfc2822(s))
            .ok()
    })
    .map(|dt| dt.with_timezone(&Utc))
    .unwrap_or_else(Utc::now)
}

/// The active conversation: transcript plus the chat session id it belongs
/// to. The server owns the durable copy; this is the mirror the page edits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    pub session_id: Option<String>,
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Appends a user turn optimistically and returns its id so the caller
    /// can retract it if the server rejects the ask.
    pub fn push_user(&mut self, content: impl Into<String>) -> String {
        let msg = Message::user(content);
        let id = msg.id.clone();
        self.messages.push(msg);
        id
    }

    pub fn push_ai(&mut self, content: impl Into<String>) {
        self.messages.push(Message::ai(content));
    }

    pub fn push_system(&mut self, content: impl Into<String>) {
        self.messages.push(Message::system(content));
    }

    /// Removes an optimistically-added message. A failed turn must leave no
    /// residue in the transcript.
    pub fn retract(&mut self, id: &str) {
        self.messages.retain(|m| m.id != id);
    }

    /// Switches to a freshly-created session with an empty transcript.
    pub fn begin(&mut self, session_id: impl Into<String>) {
        self.session_id = Some(session_id.into());
        self.messages.clear();
    }

    /// Rebuilds the transcript from a stored session and makes it active.
    pub fn load_record(&mut self, record: &ChatSessionRecord) {
        self.messages = record
            .messages
            .iter()
            .enumerate()
            .map(|(i, turn)| Message {
                id: format!("{}-{}", record.session_id, i),
                kind: if turn.role == "user" {
                    MessageKind::User
                } else {
                    MessageKind::Ai
                },
                content: turn.message.clone(),
                timestamp: parse_timestamp(turn.timestamp.as_deref()),
            })
            .collect();
        self.session_id = Some(record.session_id.clone());
    }

    /// Reacts to a session being deleted server-side. Deleting the active
    /// session empties the transcript and unsets the id; deleting any other
    /// session leaves the conversation untouched.
    pub fn note_session_deleted(&mut self, session_id: &str) {
        if self.session_id.as_deref() == Some(session_id) {
            self.messages.clear();
            self.session_id = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(session_id: &str, turns: &[(&str, &str)]) -> ChatSessionRecord {
        ChatSessionRecord {
            session_id: session_id.to_string(),
            messages: turns
                .iter()
                .map(|(role, message)| StoredTurn {
                    role: role.to_string(),
                    message: message.to_string(),
                    timestamp: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_retract_leaves_no_residue() {
        let mut conv = Conversation::default();
        conv.push_ai("hello");
        let before = conv.messages.clone();

        let id = conv.push_user("What is X?");
        conv.retract(&id);

        assert_eq!(conv.messages, before);
    }

    #[test]
    fn test_successful_ask_appends_in_order() {
        let mut conv = Conversation::default();
        conv.push_user("What is X?");
        conv.push_ai("X is...");

        assert_eq!(conv.messages.len(), 2);
        assert_eq!(conv.messages[0].kind, MessageKind::User);
        assert_eq!(conv.messages[1].kind, MessageKind::Ai);
    }

    #[test]
    fn test_load_record_maps_roles_and_session() {
        let mut conv = Conversation::default();
        conv.load_record(&record("s1", &[("user", "hi"), ("assistant", "hello")]));

        assert_eq!(conv.session_id.as_deref(), Some("s1"));
        assert_eq!(conv.messages[0].kind, MessageKind::User);
        assert_eq!(conv.messages[0].id, "s1-0");
        assert_eq!(conv.messages[1].kind, MessageKind::Ai);
        assert_eq!(conv.messages[1].content, "hello");
    }

    #[test]
    fn test_deleting_active_session_clears_everything() {
        let mut conv = Conversation::default();
        conv.begin("s1");
        conv.push_user("hi");

        conv.note_session_deleted("s1");

        assert!(conv.is_empty());
        assert_eq!(conv.session_id, None);
    }

    #[test]
    fn test_deleting_other_session_is_a_noop() {
        let mut conv = Conversation::default();
        conv.begin("s1");
        conv.push_user("hi");

        conv.note_session_deleted("s2");

        assert_eq!(conv.messages.len(), 1);
        assert_eq!(conv.session_id.as_deref(), Some("s1"));
    }

    #[test]
    fn test_begin_replaces_transcript() {
        let mut conv = Conversation::default();
        conv.begin("s1");
        conv.push_user("old");

        conv.begin("s2");

        assert!(conv.is_empty());
        assert_eq!(conv.session_id.as_deref(), Some("s2"));
    }

    #[test]
    fn test_admin_user_search_is_case_insensitive() {
        let user: AdminUser = serde_json::from_value(serde_json::json!({
            "_id": "u1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "is_active": true,
        }))
        .unwrap();

        assert!(user.matches("ada"));
        assert!(user.matches("LOVE"));
        assert!(user.matches("ada@example.com"));
        assert!(!user.matches("babbage"));
    }

    #[test]
    fn test_config_search_covers_description() {
        let config: ApiConfig = serde_json::from_value(serde_json::json!({
            "_id": "c1",
            "key_name": "GEMINI_API_KEY",
            "description": "answer generation",
        }))
        .unwrap();

        assert!(config.matches("gemini"));
        assert!(config.matches("generation"));
        assert!(!config.matches("pinecone"));
    }

    #[test]
    fn test_profile_role_check() {
        let admin: UserProfile = serde_json::from_value(serde_json::json!({
            "_id": "u1",
            "firstName": "A",
            "lastName": "B",
            "email": "a@b.c",
            "role": "admin",
        }))
        .unwrap();
        let user: UserProfile = serde_json::from_value(serde_json::json!({
            "firstName": "C",
            "lastName": "D",
            "email": "c@d.e",
        }))
        .unwrap();

        assert!(admin.is_admin());
        assert!(!user.is_admin());
        assert_eq!(user.role, "user");
    }

    #[test]
    fn test_history_record_preview() {
        let rec = record("s1", &[("user", "first question"), ("assistant", "answer")]);
        assert_eq!(rec.preview(), "first question");

        let empty = record("s2", &[]);
        assert_eq!(empty.preview(), "No messages");
    }

    #[test]
    fn test_upload_report_partitions_results() {
        let report: UploadReport = serde_json::from_value(serde_json::json!({
            "results": [
                {"fileName": "a.pdf", "status": "success", "chunks": 4},
                {"fileName": "b.pdf", "status": "error", "message": "No extractable text"},
            ],
            "summary": {"totalFiles": 2, "totalChunks": 4},
        }))
        .unwrap();

        assert_eq!(report.succeeded().count(), 1);
        assert_eq!(report.failed().count(), 1);
        assert_eq!(report.summary.total_chunks, 4);
    }
}
