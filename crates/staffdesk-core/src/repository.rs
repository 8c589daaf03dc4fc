// ── Entity repositories ──
//
// Traits describing what a collection controller needs from its backing
// store, plus one HTTP implementation per entity kind built on `ApiClient`.
// Implementations are pure translation: no state, no caching, failures are
// passed through as `CoreError`.

use std::fmt;
use std::future::Future;

use bytes::Bytes;

use staffdesk_api::{
    ApiClient, CreateEducation, CreateProject, CreateProjectStaff, CreateSkill, CreateStaff,
    CreateTechnology, CreateWork, Education, EducationId, ListResponse, Project, ProjectId,
    ProjectStaff, ProjectTechnology, RoleId, Skill, SkillId, Staff, StaffId, StaffSkill,
    Technology, TechnologyId, UpdateEducation, UpdateProject, UpdateProjectStaff, UpdateSkill,
    UpdateStaff, UpdateTechnology, UpdateWork, WorkExperience, WorkId,
};

use crate::error::CoreError;

// ── Owners ──────────────────────────────────────────────────────────

/// The key a collection is scoped to.
///
/// Catalog collections use `()`, which is always present. Owner-scoped
/// collections use a parent id; an unset (zero) id means the owner has not
/// been chosen yet and the controller must not touch the network.
pub trait OwnerKey: Copy + fmt::Debug + Send + Sync + 'static {
    fn is_present(self) -> bool;
}

impl OwnerKey for () {
    fn is_present(self) -> bool {
        true
    }
}

impl OwnerKey for StaffId {
    fn is_present(self) -> bool {
        self.is_set()
    }
}

impl OwnerKey for ProjectId {
    fn is_present(self) -> bool {
        self.is_set()
    }
}

// ── Traits ──────────────────────────────────────────────────────────

/// Read side of a collection.
pub trait CollectionSource: Send + Sync + 'static {
    type Entity: Clone + fmt::Debug + Send + Sync + 'static;
    type Owner: OwnerKey;

    /// Noun used in error messages for the whole collection ("skills").
    const PLURAL: &'static str;
    /// Noun used in error messages for a single entity ("skill").
    const SINGULAR: &'static str;
    /// Whether the listing endpoint honours `page`/`limit`.
    const PAGINATED: bool;

    fn list(
        &self,
        owner: Self::Owner,
        page: u32,
        limit: u32,
    ) -> impl Future<Output = Result<ListResponse<Self::Entity>, CoreError>> + Send;
}

/// Create/update/delete by surrogate id.
pub trait Editable: CollectionSource {
    type Id: Copy + fmt::Display + fmt::Debug + Send + Sync + 'static;
    type Create: fmt::Debug + Send + Sync;
    type Update: fmt::Debug + Send + Sync;

    fn create(
        &self,
        input: &Self::Create,
    ) -> impl Future<Output = Result<Self::Entity, CoreError>> + Send;

    fn update(
        &self,
        id: Self::Id,
        input: &Self::Update,
    ) -> impl Future<Output = Result<Self::Entity, CoreError>> + Send;

    fn delete(&self, id: Self::Id) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Single-entity reads.
pub trait Lookup: Editable {
    fn get(&self, id: Self::Id) -> impl Future<Output = Result<Self::Entity, CoreError>> + Send;
}

/// Many-to-many links addressed by (owner, target) rather than a row id.
pub trait Linkable: CollectionSource {
    type Target: Copy + fmt::Display + fmt::Debug + Send + Sync + 'static;

    fn link(
        &self,
        owner: Self::Owner,
        target: Self::Target,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn unlink(
        &self,
        owner: Self::Owner,
        target: Self::Target,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Server-rendered CV documents.
pub trait CvSource: Send + Sync + 'static {
    fn html(&self, staff_id: StaffId) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn pdf(&self, staff_id: StaffId) -> impl Future<Output = Result<Bytes, CoreError>> + Send;
}

// ── Staff ───────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct StaffRepository {
    client: ApiClient,
}

impl StaffRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl CollectionSource for StaffRepository {
    type Entity = Staff;
    type Owner = ();

    const PLURAL: &'static str = "staff";
    const SINGULAR: &'static str = "staff member";
    const PAGINATED: bool = true;

    async fn list(
        &self,
        (): (),
        page: u32,
        limit: u32,
    ) -> Result<ListResponse<Staff>, CoreError> {
        Ok(self.client.list_staff(page, limit).await?)
    }
}

impl Editable for StaffRepository {
    type Id = StaffId;
    type Create = CreateStaff;
    type Update = UpdateStaff;

    async fn create(&self, input: &CreateStaff) -> Result<Staff, CoreError> {
        Ok(self.client.create_staff(input).await?)
    }

    async fn update(&self, id: StaffId, input: &UpdateStaff) -> Result<Staff, CoreError> {
        Ok(self.client.update_staff(id, input).await?)
    }

    async fn delete(&self, id: StaffId) -> Result<(), CoreError> {
        Ok(self.client.delete_staff(id).await?)
    }
}

impl Lookup for StaffRepository {
    async fn get(&self, id: StaffId) -> Result<Staff, CoreError> {
        Ok(self.client.get_staff(id).await?)
    }
}

// ── Education ───────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct EducationRepository {
    client: ApiClient,
}

impl EducationRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Remove every education row of a staff member.
    pub async fn delete_all_for_staff(&self, staff_id: StaffId) -> Result<(), CoreError> {
        Ok(self.client.delete_all_education_for_staff(staff_id).await?)
    }
}

impl CollectionSource for EducationRepository {
    type Entity = Education;
    type Owner = StaffId;

    const PLURAL: &'static str = "education";
    const SINGULAR: &'static str = "education";
    const PAGINATED: bool = false;

    async fn list(
        &self,
        staff_id: StaffId,
        _page: u32,
        _limit: u32,
    ) -> Result<ListResponse<Education>, CoreError> {
        Ok(self.client.list_education_for_staff(staff_id).await?)
    }
}

impl Editable for EducationRepository {
    type Id = EducationId;
    type Create = CreateEducation;
    type Update = UpdateEducation;

    async fn create(&self, input: &CreateEducation) -> Result<Education, CoreError> {
        Ok(self.client.create_education(input).await?)
    }

    async fn update(
        &self,
        id: EducationId,
        input: &UpdateEducation,
    ) -> Result<Education, CoreError> {
        Ok(self.client.update_education(id, input).await?)
    }

    async fn delete(&self, id: EducationId) -> Result<(), CoreError> {
        Ok(self.client.delete_education(id).await?)
    }
}

impl Lookup for EducationRepository {
    async fn get(&self, id: EducationId) -> Result<Education, CoreError> {
        Ok(self.client.get_education(id).await?)
    }
}

// ── Work experience ─────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct WorkRepository {
    client: ApiClient,
}

impl WorkRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Remove every work row of a staff member.
    pub async fn delete_all_for_staff(&self, staff_id: StaffId) -> Result<(), CoreError> {
        Ok(self.client.delete_all_work_for_staff(staff_id).await?)
    }
}

impl CollectionSource for WorkRepository {
    type Entity = WorkExperience;
    type Owner = StaffId;

    const PLURAL: &'static str = "work experience";
    const SINGULAR: &'static str = "work experience";
    const PAGINATED: bool = false;

    async fn list(
        &self,
        staff_id: StaffId,
        _page: u32,
        _limit: u32,
    ) -> Result<ListResponse<WorkExperience>, CoreError> {
        Ok(self.client.list_work_for_staff(staff_id).await?)
    }
}

impl Editable for WorkRepository {
    type Id = WorkId;
    type Create = CreateWork;
    type Update = UpdateWork;

    async fn create(&self, input: &CreateWork) -> Result<WorkExperience, CoreError> {
        Ok(self.client.create_work(input).await?)
    }

    async fn update(&self, id: WorkId, input: &UpdateWork) -> Result<WorkExperience, CoreError> {
        Ok(self.client.update_work(id, input).await?)
    }

    async fn delete(&self, id: WorkId) -> Result<(), CoreError> {
        Ok(self.client.delete_work(id).await?)
    }
}

impl Lookup for WorkRepository {
    async fn get(&self, id: WorkId) -> Result<WorkExperience, CoreError> {
        Ok(self.client.get_work(id).await?)
    }
}

// ── Skills ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SkillRepository {
    client: ApiClient,
}

impl SkillRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl CollectionSource for SkillRepository {
    type Entity = Skill;
    type Owner = ();

    const PLURAL: &'static str = "skills";
    const SINGULAR: &'static str = "skill";
    const PAGINATED: bool = true;

    async fn list(
        &self,
        (): (),
        page: u32,
        limit: u32,
    ) -> Result<ListResponse<Skill>, CoreError> {
        Ok(self.client.list_skills(page, limit).await?)
    }
}

impl Editable for SkillRepository {
    type Id = SkillId;
    type Create = CreateSkill;
    type Update = UpdateSkill;

    async fn create(&self, input: &CreateSkill) -> Result<Skill, CoreError> {
        Ok(self.client.create_skill(input).await?)
    }

    async fn update(&self, id: SkillId, input: &UpdateSkill) -> Result<Skill, CoreError> {
        Ok(self.client.update_skill(id, input).await?)
    }

    async fn delete(&self, id: SkillId) -> Result<(), CoreError> {
        Ok(self.client.delete_skill(id).await?)
    }
}

impl Lookup for SkillRepository {
    async fn get(&self, id: SkillId) -> Result<Skill, CoreError> {
        Ok(self.client.get_skill(id).await?)
    }
}

#[derive(Debug, Clone)]
pub struct StaffSkillRepository {
    client: ApiClient,
}

impl StaffSkillRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Unlink every skill of a staff member.
    pub async fn delete_all_for_staff(&self, staff_id: StaffId) -> Result<(), CoreError> {
        Ok(self.client.remove_all_staff_skills(staff_id).await?)
    }
}

impl CollectionSource for StaffSkillRepository {
    type Entity = StaffSkill;
    type Owner = StaffId;

    const PLURAL: &'static str = "staff skills";
    const SINGULAR: &'static str = "skill";
    const PAGINATED: bool = false;

    async fn list(
        &self,
        staff_id: StaffId,
        _page: u32,
        _limit: u32,
    ) -> Result<ListResponse<StaffSkill>, CoreError> {
        Ok(self.client.list_staff_skills(staff_id).await?)
    }
}

impl Linkable for StaffSkillRepository {
    type Target = SkillId;

    async fn link(&self, staff_id: StaffId, skill_id: SkillId) -> Result<(), CoreError> {
        Ok(self.client.add_staff_skill(staff_id, skill_id).await?)
    }

    async fn unlink(&self, staff_id: StaffId, skill_id: SkillId) -> Result<(), CoreError> {
        Ok(self.client.remove_staff_skill(staff_id, skill_id).await?)
    }
}

// ── Projects ────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ProjectRepository {
    client: ApiClient,
}

impl ProjectRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl CollectionSource for ProjectRepository {
    type Entity = Project;
    type Owner = ();

    const PLURAL: &'static str = "projects";
    const SINGULAR: &'static str = "project";
    const PAGINATED: bool = true;

    async fn list(
        &self,
        (): (),
        page: u32,
        limit: u32,
    ) -> Result<ListResponse<Project>, CoreError> {
        Ok(self.client.list_projects(page, limit).await?)
    }
}

impl Editable for ProjectRepository {
    type Id = ProjectId;
    type Create = CreateProject;
    type Update = UpdateProject;

    async fn create(&self, input: &CreateProject) -> Result<Project, CoreError> {
        Ok(self.client.create_project(input).await?)
    }

    async fn update(&self, id: ProjectId, input: &UpdateProject) -> Result<Project, CoreError> {
        Ok(self.client.update_project(id, input).await?)
    }

    async fn delete(&self, id: ProjectId) -> Result<(), CoreError> {
        Ok(self.client.delete_project(id).await?)
    }
}

/// A staff member's project roles. Roles carry their own id, so they are
/// edited like any other entity rather than linked.
#[derive(Debug, Clone)]
pub struct ProjectStaffRepository {
    client: ApiClient,
}

impl ProjectStaffRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl CollectionSource for ProjectStaffRepository {
    type Entity = ProjectStaff;
    type Owner = StaffId;

    const PLURAL: &'static str = "projects";
    const SINGULAR: &'static str = "role in project";
    const PAGINATED: bool = false;

    async fn list(
        &self,
        staff_id: StaffId,
        _page: u32,
        _limit: u32,
    ) -> Result<ListResponse<ProjectStaff>, CoreError> {
        Ok(self.client.list_project_staff(staff_id).await?)
    }
}

impl Editable for ProjectStaffRepository {
    type Id = RoleId;
    type Create = CreateProjectStaff;
    type Update = UpdateProjectStaff;

    async fn create(&self, input: &CreateProjectStaff) -> Result<ProjectStaff, CoreError> {
        Ok(self.client.create_project_staff(input).await?)
    }

    async fn update(
        &self,
        id: RoleId,
        input: &UpdateProjectStaff,
    ) -> Result<ProjectStaff, CoreError> {
        Ok(self.client.update_project_staff(id, input).await?)
    }

    async fn delete(&self, id: RoleId) -> Result<(), CoreError> {
        Ok(self.client.delete_project_staff(id).await?)
    }
}

// ── Technologies ────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct TechnologyRepository {
    client: ApiClient,
}

impl TechnologyRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl CollectionSource for TechnologyRepository {
    type Entity = Technology;
    type Owner = ();

    const PLURAL: &'static str = "technologies";
    const SINGULAR: &'static str = "technology";
    const PAGINATED: bool = true;

    async fn list(
        &self,
        (): (),
        page: u32,
        limit: u32,
    ) -> Result<ListResponse<Technology>, CoreError> {
        Ok(self.client.list_technologies(page, limit).await?)
    }
}

impl Editable for TechnologyRepository {
    type Id = TechnologyId;
    type Create = CreateTechnology;
    type Update = UpdateTechnology;

    async fn create(&self, input: &CreateTechnology) -> Result<Technology, CoreError> {
        Ok(self.client.create_technology(input).await?)
    }

    async fn update(
        &self,
        id: TechnologyId,
        input: &UpdateTechnology,
    ) -> Result<Technology, CoreError> {
        Ok(self.client.update_technology(id, input).await?)
    }

    async fn delete(&self, id: TechnologyId) -> Result<(), CoreError> {
        Ok(self.client.delete_technology(id).await?)
    }
}

impl Lookup for TechnologyRepository {
    async fn get(&self, id: TechnologyId) -> Result<Technology, CoreError> {
        Ok(self.client.get_technology(id).await?)
    }
}

#[derive(Debug, Clone)]
pub struct ProjectTechnologyRepository {
    client: ApiClient,
}

impl ProjectTechnologyRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Unlink every technology of a project.
    pub async fn delete_all_for_project(&self, project_id: ProjectId) -> Result<(), CoreError> {
        Ok(self
            .client
            .remove_all_project_technologies(project_id)
            .await?)
    }
}

impl CollectionSource for ProjectTechnologyRepository {
    type Entity = ProjectTechnology;
    type Owner = ProjectId;

    const PLURAL: &'static str = "project technologies";
    const SINGULAR: &'static str = "technology";
    const PAGINATED: bool = false;

    async fn list(
        &self,
        project_id: ProjectId,
        _page: u32,
        _limit: u32,
    ) -> Result<ListResponse<ProjectTechnology>, CoreError> {
        Ok(self.client.list_project_technologies(project_id).await?)
    }
}

impl Linkable for ProjectTechnologyRepository {
    type Target = TechnologyId;

    async fn link(&self, project_id: ProjectId, technology_id: TechnologyId) -> Result<(), CoreError> {
        Ok(self
            .client
            .add_project_technology(project_id, technology_id)
            .await?)
    }

    async fn unlink(
        &self,
        project_id: ProjectId,
        technology_id: TechnologyId,
    ) -> Result<(), CoreError> {
        Ok(self
            .client
            .remove_project_technology(project_id, technology_id)
            .await?)
    }
}

// ── CV ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct CvRepository {
    client: ApiClient,
}

impl CvRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl CvSource for CvRepository {
    async fn html(&self, staff_id: StaffId) -> Result<String, CoreError> {
        Ok(self.client.get_cv_html(staff_id).await?)
    }

    async fn pdf(&self, staff_id: StaffId) -> Result<Bytes, CoreError> {
        Ok(self.client.get_cv_pdf(staff_id).await?)
    }
}
