// staffdesk-core: Collection controllers and derived views over staffdesk-api.

pub mod config;
pub mod controller;
pub mod desk;
pub mod error;
pub mod format;
pub mod pagination;
pub mod repository;
pub mod resolver;
pub mod validation;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ClientConfig, DEFAULT_STAFF_PAGE_LIMIT};
pub use controller::{CollectionController, CollectionState, CvController, CvState, pdf_filename};
pub use desk::{
    EducationController, ProjectController, ProjectStaffController, ProjectTechnologyController,
    SkillController, StaffController, StaffDesk, StaffSkillController, TechnologyController,
    WorkController,
};
pub use error::{CoreError, ErrorKind};
pub use format::{SkillType, format_month_year, format_period};
pub use pagination::{PageCursor, total_pages};
pub use repository::{
    CollectionSource, CvRepository, CvSource, Editable, EducationRepository, Linkable, Lookup,
    OwnerKey, ProjectRepository, ProjectStaffRepository, ProjectTechnologyRepository,
    SkillRepository, StaffRepository, StaffSkillRepository, TechnologyRepository, WorkRepository,
};
pub use resolver::{Keyed, LinksTo, available};
pub use validation::{Validate, ValidationError};

// Wire types are part of the controller API.
pub use staffdesk_api as api;
