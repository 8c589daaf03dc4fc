// CV endpoints
//
// Both are server-rendered; the client never templates a CV itself.

use bytes::Bytes;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{CvHtmlResponse, StaffId};

impl ApiClient {
    /// `GET /cv/html/{staff_id}`
    ///
    /// A JSON reply of the form `{"data": "<html>"}` is unwrapped; any other
    /// body is returned verbatim.
    pub async fn get_cv_html(&self, staff_id: StaffId) -> Result<String, Error> {
        let (content_type, body) = self.get_text(&format!("cv/html/{staff_id}")).await?;
        let is_json = content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("application/json"));
        if !is_json {
            return Ok(body);
        }
        serde_json::from_str::<CvHtmlResponse>(&body)
            .map(|r| r.data)
            .map_err(|e| Error::Decode {
                message: e.to_string(),
                body,
            })
    }

    /// `GET /cv/pdf/{staff_id}` (binary)
    pub async fn get_cv_pdf(&self, staff_id: StaffId) -> Result<Bytes, Error> {
        self.get_bytes(&format!("cv/pdf/{staff_id}")).await
    }
}
