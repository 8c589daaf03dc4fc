// Skill catalog and staff↔skill link endpoints

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::resources::page_params;
use crate::types::{
    CreateSkill, CreateStaffSkill, ListResponse, Skill, SkillId, StaffId, StaffSkill, UpdateSkill,
};

impl ApiClient {
    // ── Catalog ──────────────────────────────────────────────────────

    /// `GET /skill?page&limit`
    pub async fn list_skills(&self, page: u32, limit: u32) -> Result<ListResponse<Skill>, Error> {
        self.get_with_params("skill", &page_params(page, limit)).await
    }

    /// `GET /skill/{id}`
    pub async fn get_skill(&self, id: SkillId) -> Result<Skill, Error> {
        self.get(&format!("skill/{id}")).await
    }

    /// `POST /skill`
    pub async fn create_skill(&self, input: &CreateSkill) -> Result<Skill, Error> {
        self.post("skill", input).await
    }

    /// `PUT /skill/{id}`
    pub async fn update_skill(&self, id: SkillId, input: &UpdateSkill) -> Result<Skill, Error> {
        self.put(&format!("skill/{id}"), input).await
    }

    /// `DELETE /skill/{id}`
    pub async fn delete_skill(&self, id: SkillId) -> Result<(), Error> {
        self.delete(&format!("skill/{id}")).await
    }

    // ── Staff links ──────────────────────────────────────────────────

    /// `GET /staff-skill/{staff_id}`
    pub async fn list_staff_skills(
        &self,
        staff_id: StaffId,
    ) -> Result<ListResponse<StaffSkill>, Error> {
        self.get(&format!("staff-skill/{staff_id}")).await
    }

    /// `POST /staff-skill`
    ///
    /// The reply body is not needed; callers refetch the link list.
    pub async fn add_staff_skill(&self, staff_id: StaffId, skill_id: SkillId) -> Result<(), Error> {
        debug!(%staff_id, %skill_id, "linking skill");
        self.post_no_response("staff-skill", &CreateStaffSkill { staff_id, skill_id })
            .await
    }

    /// `DELETE /staff-skill?staff_id&skill_id`
    pub async fn remove_staff_skill(
        &self,
        staff_id: StaffId,
        skill_id: SkillId,
    ) -> Result<(), Error> {
        debug!(%staff_id, %skill_id, "unlinking skill");
        self.delete_with_params(
            "staff-skill",
            &[
                ("staff_id", staff_id.to_string()),
                ("skill_id", skill_id.to_string()),
            ],
        )
        .await
    }

    /// `DELETE /staff-skill/{staff_id}`
    pub async fn remove_all_staff_skills(&self, staff_id: StaffId) -> Result<(), Error> {
        self.delete(&format!("staff-skill/{staff_id}")).await
    }
}
