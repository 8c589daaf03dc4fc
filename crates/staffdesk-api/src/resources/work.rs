// Work experience endpoints
//
// Note the asymmetric paths: reads and updates go through
// `/work/workid/{id}`, but deletion is `/work/{id}`.

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{CreateWork, ListResponse, StaffId, UpdateWork, WorkExperience, WorkId};

impl ApiClient {
    /// `GET /work/staffid/{staff_id}`
    pub async fn list_work_for_staff(
        &self,
        staff_id: StaffId,
    ) -> Result<ListResponse<WorkExperience>, Error> {
        self.get(&format!("work/staffid/{staff_id}")).await
    }

    /// `GET /work/workid/{id}`
    pub async fn get_work(&self, id: WorkId) -> Result<WorkExperience, Error> {
        self.get(&format!("work/workid/{id}")).await
    }

    /// `POST /work`
    pub async fn create_work(&self, input: &CreateWork) -> Result<WorkExperience, Error> {
        self.post("work", input).await
    }

    /// `PUT /work/workid/{id}`
    pub async fn update_work(&self, id: WorkId, input: &UpdateWork) -> Result<WorkExperience, Error> {
        self.put(&format!("work/workid/{id}"), input).await
    }

    /// `DELETE /work/{id}`
    pub async fn delete_work(&self, id: WorkId) -> Result<(), Error> {
        self.delete(&format!("work/{id}")).await
    }

    /// `DELETE /work/staffid/{staff_id}`
    pub async fn delete_all_work_for_staff(&self, staff_id: StaffId) -> Result<(), Error> {
        self.delete(&format!("work/staffid/{staff_id}")).await
    }
}
