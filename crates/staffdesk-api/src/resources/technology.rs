// Technology catalog and project↔technology link endpoints

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::resources::page_params;
use crate::types::{
    CreateProjectTechnology, CreateTechnology, ListResponse, ProjectId, ProjectTechnology,
    Technology, TechnologyId, UpdateTechnology,
};

impl ApiClient {
    // ── Catalog ──────────────────────────────────────────────────────

    /// `GET /technology?page&limit`
    pub async fn list_technologies(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<ListResponse<Technology>, Error> {
        self.get_with_params("technology", &page_params(page, limit))
            .await
    }

    /// `GET /technology/{id}`
    pub async fn get_technology(&self, id: TechnologyId) -> Result<Technology, Error> {
        self.get(&format!("technology/{id}")).await
    }

    /// `POST /technology`
    pub async fn create_technology(&self, input: &CreateTechnology) -> Result<Technology, Error> {
        self.post("technology", input).await
    }

    /// `PUT /technology/{id}`
    pub async fn update_technology(
        &self,
        id: TechnologyId,
        input: &UpdateTechnology,
    ) -> Result<Technology, Error> {
        self.put(&format!("technology/{id}"), input).await
    }

    /// `DELETE /technology/{id}`
    pub async fn delete_technology(&self, id: TechnologyId) -> Result<(), Error> {
        self.delete(&format!("technology/{id}")).await
    }

    // ── Project links ────────────────────────────────────────────────

    /// `GET /project-technology/{project_id}`
    pub async fn list_project_technologies(
        &self,
        project_id: ProjectId,
    ) -> Result<ListResponse<ProjectTechnology>, Error> {
        self.get(&format!("project-technology/{project_id}")).await
    }

    /// `POST /project-technology`
    pub async fn add_project_technology(
        &self,
        project_id: ProjectId,
        technology_id: TechnologyId,
    ) -> Result<(), Error> {
        debug!(%project_id, %technology_id, "linking technology");
        self.post_no_response(
            "project-technology",
            &CreateProjectTechnology {
                project_id,
                technology_id,
            },
        )
        .await
    }

    /// `DELETE /project-technology?project_id&technology_id`
    pub async fn remove_project_technology(
        &self,
        project_id: ProjectId,
        technology_id: TechnologyId,
    ) -> Result<(), Error> {
        debug!(%project_id, %technology_id, "unlinking technology");
        self.delete_with_params(
            "project-technology",
            &[
                ("project_id", project_id.to_string()),
                ("technology_id", technology_id.to_string()),
            ],
        )
        .await
    }

    /// `DELETE /project-technology/{project_id}`
    pub async fn remove_all_project_technologies(&self, project_id: ProjectId) -> Result<(), Error> {
        self.delete(&format!("project-technology/{project_id}"))
            .await
    }
}
