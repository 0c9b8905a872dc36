//! Page-level views, one per route.

pub mod dashboard;
pub mod exams;
pub mod login;
pub mod register;
