// Education endpoints
//
// Education rows are owned by a staff member and addressed under
// `/education/educationid/{id}`; the owner listing lives under
// `/education/staffid/{staff_id}`.

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{CreateEducation, Education, EducationId, ListResponse, StaffId, UpdateEducation};

impl ApiClient {
    /// `GET /education/staffid/{staff_id}`
    pub async fn list_education_for_staff(
        &self,
        staff_id: StaffId,
    ) -> Result<ListResponse<Education>, Error> {
        self.get(&format!("education/staffid/{staff_id}")).await
    }

    /// `GET /education/educationid/{id}`
    pub async fn get_education(&self, id: EducationId) -> Result<Education, Error> {
        self.get(&format!("education/educationid/{id}")).await
    }

    /// `POST /education`
    pub async fn create_education(&self, input: &CreateEducation) -> Result<Education, Error> {
        self.post("education", input).await
    }

    /// `PUT /education/educationid/{id}`
    pub async fn update_education(
        &self,
        id: EducationId,
        input: &UpdateEducation,
    ) -> Result<Education, Error> {
        self.put(&format!("education/educationid/{id}"), input)
            .await
    }

    /// `DELETE /education/educationid/{id}`
    pub async fn delete_education(&self, id: EducationId) -> Result<(), Error> {
        self.delete(&format!("education/educationid/{id}")).await
    }

    /// `DELETE /education/staffid/{staff_id}`
    pub async fn delete_all_education_for_staff(&self, staff_id: StaffId) -> Result<(), Error> {
        self.delete(&format!("education/staffid/{staff_id}")).await
    }
}
