//! Product Q&A Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub text: String,
    #[serde(default)]
    pub answered_at: Option<DateTime<Utc>>,
}

/// Customer question on a product page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Product reference (String ID)
    pub product: String,
    /// Asking user's display name
    #[serde(default)]
    pub user: Option<String>,
    pub question: String,
    #[serde(default)]
    pub answer: Option<Answer>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Question {
    pub fn is_answered(&self) -> bool {
        self.answer.is_some()
    }
}

/// `GET /products/{id}/questions` payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionList {
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionCreate {
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerCreate {
    pub answer: String,
}
