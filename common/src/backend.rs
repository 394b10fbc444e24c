//! This file outlines all the structures required for clients and the backend to communicate via REST API

use serde::{Deserialize, Serialize};

use crate::*;

/// # USER API

/// reqwest::post("/user").json(CreateUserRequest {})
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateUserRequest {
    /// display name
    pub nama: String,
    /// contact address, not checked for format
    pub email: String,
    /// plaintext, hashed by the server before it is stored
    pub password: String,
    /// phone number
    pub no_handphone: String,
    /// address
    pub alamat: String,
}
impl CreateUserRequest {
    /// Keys that must be present and non-null in a create body
    pub const REQUIRED: [&'static str; 5] = ["nama", "email", "password", "no_handphone", "alamat"];
}

/// reqwest::put("/user").json(UpdateUserRequest {})
/// Password is never changed through this request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateUserRequest {
    /// row to update; an unknown id is not an error
    pub id_user: UserID,
    /// new display name
    pub nama: String,
    /// new email
    pub email: String,
    /// new phone number
    pub no_handphone: String,
    /// new address
    pub alamat: String,
}
impl UpdateUserRequest {
    /// Keys that must be present and non-null in an update body
    pub const REQUIRED: [&'static str; 5] = ["id_user", "nama", "email", "no_handphone", "alamat"];
}

/// reqwest::delete("/user").json(DeleteUserRequest {})
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteUserRequest {
    /// row to delete; an unknown id is not an error
    pub id_user: UserID,
}
impl DeleteUserRequest {
    /// Keys that must be present and non-null in a delete body
    pub const REQUIRED: [&'static str; 1] = ["id_user"];
}

/// One element of the response to GET /user.
/// `password` is the stored hash, never the plaintext.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReadUserResponse {
    /// database assigned key
    pub id_user: UserID,
    /// display name
    pub nama: String,
    /// email as stored
    pub email: String,
    /// argon2 PHC string
    pub password: String,
    /// phone number
    pub no_handphone: String,
    /// address
    pub alamat: String,
}
/// response to GET /user
pub type ReadUsersResponse = Vec<ReadUserResponse>;

/// Body of every successful mutation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    /// human readable confirmation, one of the fixed messages in the crate root
    pub message: String,
}
impl MessageResponse {
    /// build a response carrying `message`
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

/// Body of every failed request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// fixed, cause-free description of what failed
    pub error: String,
    /// names of required fields absent from the request, only set for validation errors
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
}
impl ErrorResponse {
    /// build a response carrying `error` and nothing else
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_owned(),
            missing: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn message_response_shape() {
        let value = serde_json::to_value(MessageResponse::new(USER_ADDED)).unwrap();
        assert_eq!(value, json!({ "message": "User added successfully" }));
    }

    #[test]
    fn error_response_omits_empty_missing() {
        let value = serde_json::to_value(ErrorResponse::new(ADD_FAILED)).unwrap();
        assert_eq!(value, json!({ "error": "Failed to add user" }));

        let with_missing = ErrorResponse {
            error: "Missing required fields".to_owned(),
            missing: vec!["email".to_owned()],
        };
        assert_eq!(
            serde_json::to_value(with_missing).unwrap(),
            json!({ "error": "Missing required fields", "missing": ["email"] })
        );
    }

    #[test]
    fn update_request_ignores_password() {
        let req: UpdateUserRequest = serde_json::from_value(json!({
            "id_user": 3,
            "nama": "Ana",
            "email": "a@x.com",
            "password": "ignored",
            "no_handphone": "0811",
            "alamat": "Jl. A"
        }))
        .unwrap();
        assert_eq!(req.id_user, 3);
        assert_eq!(req.alamat, "Jl. A");
    }

    #[test]
    fn read_user_response_field_names() {
        let value = serde_json::to_value(ReadUserResponse {
            id_user: 1,
            nama: "Ana".to_owned(),
            email: "a@x.com".to_owned(),
            password: "$argon2id$...".to_owned(),
            no_handphone: "0811".to_owned(),
            alamat: "Jl. A".to_owned(),
        })
        .unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        for key in ["id_user", "nama", "email", "password", "no_handphone", "alamat"] {
            assert!(keys.contains(&key), "missing key {key}");
        }
    }
}
