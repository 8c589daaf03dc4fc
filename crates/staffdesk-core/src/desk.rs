// ── StaffDesk facade ──
//
// Builds the API client once from a `ClientConfig` and hands out
// independently owned controllers for each collection.

use staffdesk_api::{ApiClient, ProjectId, StaffId, TransportConfig};

use crate::config::ClientConfig;
use crate::controller::{CollectionController, CvController};
use crate::error::CoreError;
use crate::repository::{
    CvRepository, EducationRepository, ProjectRepository, ProjectStaffRepository,
    ProjectTechnologyRepository, SkillRepository, StaffRepository, StaffSkillRepository,
    TechnologyRepository, WorkRepository,
};

pub type StaffController = CollectionController<StaffRepository>;
pub type EducationController = CollectionController<EducationRepository>;
pub type WorkController = CollectionController<WorkRepository>;
pub type SkillController = CollectionController<SkillRepository>;
pub type StaffSkillController = CollectionController<StaffSkillRepository>;
pub type ProjectController = CollectionController<ProjectRepository>;
pub type ProjectStaffController = CollectionController<ProjectStaffRepository>;
pub type TechnologyController = CollectionController<TechnologyRepository>;
pub type ProjectTechnologyController = CollectionController<ProjectTechnologyRepository>;

/// Entry point for presentation layers.
///
/// Cheap to clone; every controller it creates shares the same HTTP
/// connection pool but owns its own state.
#[derive(Debug, Clone)]
pub struct StaffDesk {
    config: ClientConfig,
    client: ApiClient,
}

impl StaffDesk {
    pub fn new(config: ClientConfig) -> Result<Self, CoreError> {
        let mut transport = TransportConfig::default();
        if let Some(timeout) = config.timeout {
            transport = transport.with_timeout(timeout);
        }
        let client = ApiClient::new(config.base_url.as_str(), &transport)?;
        Ok(Self { config, client })
    }

    /// Use a preconfigured API client.
    pub fn with_client(config: ClientConfig, client: ApiClient) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    // ── Catalogs ─────────────────────────────────────────────────────

    pub fn staff(&self) -> StaffController {
        CollectionController::catalog(
            StaffRepository::new(self.client.clone()),
            self.config.staff_page_limit,
        )
    }

    pub fn skills(&self) -> SkillController {
        CollectionController::catalog(
            SkillRepository::new(self.client.clone()),
            self.config.page_limit,
        )
    }

    pub fn projects(&self) -> ProjectController {
        CollectionController::catalog(
            ProjectRepository::new(self.client.clone()),
            self.config.page_limit,
        )
    }

    pub fn technologies(&self) -> TechnologyController {
        CollectionController::catalog(
            TechnologyRepository::new(self.client.clone()),
            self.config.page_limit,
        )
    }

    // ── Owner-scoped ─────────────────────────────────────────────────

    pub fn education(&self, staff_id: StaffId) -> EducationController {
        CollectionController::scoped(EducationRepository::new(self.client.clone()), staff_id)
    }

    pub fn work(&self, staff_id: StaffId) -> WorkController {
        CollectionController::scoped(WorkRepository::new(self.client.clone()), staff_id)
    }

    pub fn staff_skills(&self, staff_id: StaffId) -> StaffSkillController {
        CollectionController::scoped(StaffSkillRepository::new(self.client.clone()), staff_id)
    }

    pub fn project_staff(&self, staff_id: StaffId) -> ProjectStaffController {
        CollectionController::scoped(ProjectStaffRepository::new(self.client.clone()), staff_id)
    }

    pub fn project_technologies(&self, project_id: ProjectId) -> ProjectTechnologyController {
        CollectionController::scoped(
            ProjectTechnologyRepository::new(self.client.clone()),
            project_id,
        )
    }

    pub fn cv(&self) -> CvController<CvRepository> {
        CvController::new(
            CvRepository::new(self.client.clone()),
            self.config.download_dir.clone(),
        )
    }
}
