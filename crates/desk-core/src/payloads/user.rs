use serde::{Deserialize, Serialize};

/// Body of `/sanic/user/login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `/sanic/user/query_user_record`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecordQuery {
    pub page: u32,
    pub limit: u32,
    pub search_text: String,
    pub chat_id: String,
}

/// Body of `/sanic/user/delete_user_record`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteUserRecords {
    pub record_ids: Vec<String>,
}

/// Body of `/sanic/user/dify_fead_back`.
///
/// `rating` keeps the number as given, so a whole rating goes out as `1`
/// rather than `1.0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub chat_id: String,
    pub rating: serde_json::Number,
}
