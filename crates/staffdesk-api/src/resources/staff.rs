// Staff endpoints
//
// Staff is the root aggregate. Listing is paginated server-side.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::resources::page_params;
use crate::types::{CreateStaff, ListResponse, Staff, StaffId, UpdateStaff};

impl ApiClient {
    /// `GET /staff?page&limit`
    pub async fn list_staff(&self, page: u32, limit: u32) -> Result<ListResponse<Staff>, Error> {
        self.get_with_params("staff", &page_params(page, limit)).await
    }

    /// `GET /staff/{id}`
    pub async fn get_staff(&self, id: StaffId) -> Result<Staff, Error> {
        self.get(&format!("staff/{id}")).await
    }

    /// `POST /staff`
    pub async fn create_staff(&self, input: &CreateStaff) -> Result<Staff, Error> {
        debug!(name = %input.staff_name, "creating staff member");
        self.post("staff", input).await
    }

    /// `PUT /staff/{id}`
    pub async fn update_staff(&self, id: StaffId, input: &UpdateStaff) -> Result<Staff, Error> {
        self.put(&format!("staff/{id}"), input).await
    }

    /// `DELETE /staff/{id}`
    ///
    /// Cascading removal of the member's education, work, skills and roles is
    /// up to the server.
    pub async fn delete_staff(&self, id: StaffId) -> Result<(), Error> {
        debug!(%id, "deleting staff member");
        self.delete(&format!("staff/{id}")).await
    }
}
