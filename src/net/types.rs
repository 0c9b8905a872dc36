//! Wire types for the platform gateway API.
//!
//! Field names follow the gateway's camelCase JSON.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------
// Auth
// ---------------------------------------------------------------

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub tenant_id: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub tenant_id: String,
    pub role: String,
}

/// Issued token; everything else the client needs is inside it.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

// ---------------------------------------------------------------
// Exams
// ---------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExamState {
    Scheduled,
    Live,
    Completed,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    pub state: ExamState,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    pub sort_order: i32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamDetail {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    pub state: ExamState,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionRequest {
    pub text: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExamRequest {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    pub questions: Vec<CreateQuestionRequest>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamAnswer {
    pub question_id: String,
    pub response_text: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitExamRequest {
    pub answers: Vec<ExamAnswer>,
}

// ---------------------------------------------------------------
// Dashboard telemetry
// ---------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sensor {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub value: f64,
    pub unit: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shuttle {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub updated_at: String,
}
