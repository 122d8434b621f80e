//! Reclamations (complaints) API

use shared::models::{
    Reclamation, ReclamationCreate, ReclamationList, ReclamationReply, ReclamationStatus,
};
use shared::response::Envelope;

use super::{id_segment, unwrap_data};
use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;

pub struct Reclamations<'a, H> {
    http: &'a H,
}

impl<'a, H: HttpClient> Reclamations<'a, H> {
    pub fn new(http: &'a H) -> Self {
        Self { http }
    }

    /// Customer: file a complaint
    pub async fn create(&self, reclamation: &ReclamationCreate) -> ClientResult<Reclamation> {
        const PATH: &str = "/reclamations";
        if reclamation.subject.trim().is_empty() || reclamation.description.trim().is_empty() {
            return Err(ClientError::InvalidInput(
                "subject and description are required".into(),
            ));
        }
        let resp: Envelope<Reclamation> = self.http.post(PATH, reclamation).await?;
        unwrap_data(PATH, resp)
    }

    /// Customer: own complaints
    pub async fn mine(&self) -> ClientResult<Vec<Reclamation>> {
        const PATH: &str = "/reclamations/my";
        let resp: Envelope<ReclamationList> = self.http.get(PATH).await?;
        Ok(unwrap_data(PATH, resp)?.reclamations)
    }

    /// Admin: every complaint, optionally filtered by status
    pub async fn all(&self, status: Option<ReclamationStatus>) -> ClientResult<Vec<Reclamation>> {
        const PATH: &str = "/admin/reclamations";
        let query: Vec<(&str, String)> = status
            .map(|s| ("status", s.as_str().to_string()))
            .into_iter()
            .collect();
        let resp: Envelope<ReclamationList> = self.http.get_with_query(PATH, &query).await?;
        Ok(unwrap_data(PATH, resp)?.reclamations)
    }

    /// Admin: change status and optionally reply
    pub async fn respond(&self, id: &str, reply: &ReclamationReply) -> ClientResult<Reclamation> {
        let path = format!("/admin/reclamations/{}", id_segment("reclamation", id)?);
        let resp: Envelope<Reclamation> = self.http.put(&path, reply).await?;
        unwrap_data(&path, resp)
    }
}
