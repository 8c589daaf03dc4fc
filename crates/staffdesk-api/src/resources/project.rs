// Project and project-staff (role) endpoints

use crate::client::ApiClient;
use crate::error::Error;
use crate::resources::page_params;
use crate::types::{
    CreateProject, CreateProjectStaff, ListResponse, Project, ProjectId, ProjectStaff, RoleId,
    StaffId, UpdateProject, UpdateProjectStaff,
};

impl ApiClient {
    // ── Projects ─────────────────────────────────────────────────────

    /// `GET /project?page&limit`
    pub async fn list_projects(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<ListResponse<Project>, Error> {
        self.get_with_params("project", &page_params(page, limit))
            .await
    }

    /// `POST /project`
    pub async fn create_project(&self, input: &CreateProject) -> Result<Project, Error> {
        self.post("project", input).await
    }

    /// `PUT /project/{id}`
    pub async fn update_project(
        &self,
        id: ProjectId,
        input: &UpdateProject,
    ) -> Result<Project, Error> {
        self.put(&format!("project/{id}"), input).await
    }

    /// `DELETE /project/{id}`
    pub async fn delete_project(&self, id: ProjectId) -> Result<(), Error> {
        self.delete(&format!("project/{id}")).await
    }

    // ── Roles ────────────────────────────────────────────────────────

    /// `GET /project-staff/{staff_id}`
    pub async fn list_project_staff(
        &self,
        staff_id: StaffId,
    ) -> Result<ListResponse<ProjectStaff>, Error> {
        self.get(&format!("project-staff/{staff_id}")).await
    }

    /// `POST /project-staff`
    pub async fn create_project_staff(
        &self,
        input: &CreateProjectStaff,
    ) -> Result<ProjectStaff, Error> {
        self.post("project-staff", input).await
    }

    /// `PUT /project-staff/{role_id}`
    pub async fn update_project_staff(
        &self,
        role_id: RoleId,
        input: &UpdateProjectStaff,
    ) -> Result<ProjectStaff, Error> {
        self.put(&format!("project-staff/{role_id}"), input).await
    }

    /// `DELETE /project-staff/{role_id}`
    pub async fn delete_project_staff(&self, role_id: RoleId) -> Result<(), Error> {
        self.delete(&format!("project-staff/{role_id}")).await
    }
}
