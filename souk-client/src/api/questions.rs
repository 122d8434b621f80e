//! Product Q&A API

use shared::models::{AnswerCreate, Question, QuestionCreate, QuestionList};
use shared::response::Envelope;

use super::{id_segment, unwrap_data};
use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;

pub struct Questions<'a, H> {
    http: &'a H,
}

impl<'a, H: HttpClient> Questions<'a, H> {
    pub fn new(http: &'a H) -> Self {
        Self { http }
    }

    pub async fn for_product(&self, product_id: &str) -> ClientResult<Vec<Question>> {
        let path = format!("/products/{}/questions", id_segment("product", product_id)?);
        let resp: Envelope<QuestionList> = self.http.get(&path).await?;
        Ok(unwrap_data(&path, resp)?.questions)
    }

    pub async fn ask(&self, product_id: &str, question: &str) -> ClientResult<Question> {
        let path = format!("/products/{}/questions", id_segment("product", product_id)?);
        let question = non_blank(question, "question")?;
        let resp: Envelope<Question> = self.http.post(&path, &QuestionCreate { question }).await?;
        unwrap_data(&path, resp)
    }

    /// Vendor: answer a question on one of their products
    pub async fn answer(&self, question_id: &str, answer: &str) -> ClientResult<Question> {
        let path = format!("/questions/{}/answer", id_segment("question", question_id)?);
        let answer = non_blank(answer, "answer")?;
        let resp: Envelope<Question> = self.http.post(&path, &AnswerCreate { answer }).await?;
        unwrap_data(&path, resp)
    }
}

fn non_blank(text: &str, what: &str) -> ClientResult<String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ClientError::InvalidInput(format!("{what} must not be empty")));
    }
    Ok(text.to_string())
}
