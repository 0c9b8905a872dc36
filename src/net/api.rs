//! REST endpoint helpers for the platform gateway.
//!
//! Thin wrappers over [`crate::net::http`]; credentials are attached there,
//! so callers only name the resource.

use crate::net::http::{self, ApiError};
use crate::net::types::{
    AuthResponse, CreateExamRequest, Exam, ExamDetail, LoginRequest, RegisterRequest, Sensor,
    Shuttle, SubmitExamRequest,
};

/// Exchange credentials for a bearer token.
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    http::post_json("/auth/login", request).await
}

/// Create an account; the response token signs the new user straight in.
pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    http::post_json("/auth/register", request).await
}

pub async fn fetch_sensors() -> Result<Vec<Sensor>, ApiError> {
    http::get_json("/dashboard/sensors").await
}

pub async fn fetch_shuttles() -> Result<Vec<Shuttle>, ApiError> {
    http::get_json("/dashboard/shuttles").await
}

pub async fn fetch_exams() -> Result<Vec<Exam>, ApiError> {
    http::get_json("/exam/exams").await
}

pub async fn fetch_exam_detail(exam_id: &str) -> Result<ExamDetail, ApiError> {
    http::get_json(&format!("/exam/exams/{exam_id}")).await
}

/// Teacher-only: schedule a new exam with its questions.
pub async fn create_exam(request: &CreateExamRequest) -> Result<Exam, ApiError> {
    http::post_json("/exam/exams", request).await
}

/// Teacher-only: move a scheduled exam to LIVE.
pub async fn start_exam(exam_id: &str) -> Result<Exam, ApiError> {
    http::post_no_body(&format!("/exam/exams/{exam_id}/start")).await
}

/// Student: hand in answers for a live exam.
pub async fn submit_exam(exam_id: &str, request: &SubmitExamRequest) -> Result<(), ApiError> {
    http::post_json_no_content(&format!("/exam/exams/{exam_id}/submit"), request).await
}

/// Probe a service health endpoint; any 2xx counts as up.
pub async fn probe_health(path: &str) -> Result<(), ApiError> {
    http::get_json::<serde_json::Value>(path).await.map(|_| ())
}
