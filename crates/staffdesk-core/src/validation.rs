// ── Client-side form validation ──
//
// Simple required/format checks run before any network call. A failure is
// field-scoped and blocks submission entirely; nothing here talks to the
// server, and the server may or may not repeat these checks.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use staffdesk_api::{
    CreateEducation, CreateProject, CreateProjectStaff, CreateSkill, CreateStaff,
    CreateTechnology, CreateWork, UpdateEducation, UpdateProject, UpdateProjectStaff,
    UpdateSkill, UpdateStaff, UpdateTechnology, UpdateWork,
};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s+()-]+$").expect("phone pattern is valid"));

// ── Error ───────────────────────────────────────────────────────────

/// Field name -> message for every check that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    fields: BTreeMap<&'static str, String>,
}

impl ValidationError {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        // First failure per field wins.
        self.fields.entry(field).or_insert_with(|| message.into());
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("validation failed: ")?;
        for (i, (field, message)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Form input that can be checked before submission.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

// ── Primitive checks ────────────────────────────────────────────────

pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn is_valid_email(email: &str) -> bool {
    is_present(email) && EMAIL.is_match(email.trim())
}

/// Digits, spaces and `+()-`, with 10 to 15 digits in total.
pub fn is_valid_phone(phone: &str) -> bool {
    if !is_present(phone) {
        return false;
    }
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    PHONE.is_match(phone.trim()) && (10..=15).contains(&digits)
}

/// Parse an ISO date, ignoring any trailing time part.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let day = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

// ── Shared rules ────────────────────────────────────────────────────

fn require(errors: &mut ValidationError, field: &'static str, value: &str, message: &str) {
    if !is_present(value) {
        errors.insert(field, message);
    }
}

/// Required only when the field is being changed.
fn require_if_set(
    errors: &mut ValidationError,
    field: &'static str,
    value: Option<&str>,
    message: &str,
) {
    if let Some(value) = value {
        require(errors, field, value, message);
    }
}

fn check_date(errors: &mut ValidationError, field: &'static str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| is_present(v)) {
        if parse_date(value).is_none() {
            errors.insert(field, "Invalid date, expected YYYY-MM-DD");
        }
    }
}

fn check_date_range(errors: &mut ValidationError, start: Option<&str>, end: Option<&str>) {
    check_date(errors, "start_date", start);
    check_date(errors, "end_date", end);

    let (Some(start), Some(end)) = (start.and_then(parse_date), end.and_then(parse_date)) else {
        return;
    };
    if end < start {
        errors.insert("end_date", "End date must be after start date");
    }
}

fn check_email(errors: &mut ValidationError, email: &str) {
    if !is_present(email) {
        errors.insert("email", "Email is required");
    } else if !is_valid_email(email) {
        errors.insert("email", "Invalid email format");
    }
}

fn check_phone(errors: &mut ValidationError, phone: &str) {
    if !is_present(phone) {
        errors.insert("phone", "Phone is required");
    } else if !is_valid_phone(phone) {
        errors.insert("phone", "Invalid phone format");
    }
}

// ── Staff ───────────────────────────────────────────────────────────

impl Validate for CreateStaff {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::default();
        require(&mut errors, "staff_name", &self.staff_name, "Name is required");
        check_email(&mut errors, &self.email);
        check_phone(&mut errors, &self.phone);
        errors.into_result()
    }
}

impl Validate for UpdateStaff {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::default();
        require_if_set(
            &mut errors,
            "staff_name",
            self.staff_name.as_deref(),
            "Name is required",
        );
        if let Some(email) = &self.email {
            check_email(&mut errors, email);
        }
        if let Some(phone) = &self.phone {
            check_phone(&mut errors, phone);
        }
        errors.into_result()
    }
}

// ── Education ───────────────────────────────────────────────────────

impl Validate for CreateEducation {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::default();
        require(&mut errors, "degree", &self.degree, "Degree is required");
        require(
            &mut errors,
            "institution",
            &self.institution,
            "Institution is required",
        );
        require(
            &mut errors,
            "start_date",
            &self.start_date,
            "Start date is required",
        );
        check_date_range(
            &mut errors,
            Some(self.start_date.as_str()),
            self.end_date.as_deref(),
        );
        errors.into_result()
    }
}

impl Validate for UpdateEducation {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::default();
        require_if_set(
            &mut errors,
            "degree",
            self.degree.as_deref(),
            "Degree is required",
        );
        require_if_set(
            &mut errors,
            "institution",
            self.institution.as_deref(),
            "Institution is required",
        );
        require_if_set(
            &mut errors,
            "start_date",
            self.start_date.as_deref(),
            "Start date is required",
        );
        check_date_range(
            &mut errors,
            self.start_date.as_deref(),
            self.end_date.as_deref(),
        );
        errors.into_result()
    }
}

// ── Work ────────────────────────────────────────────────────────────

impl Validate for CreateWork {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::default();
        require(&mut errors, "company", &self.company, "Company is required");
        require(
            &mut errors,
            "work_title",
            &self.work_title,
            "Job title is required",
        );
        require(
            &mut errors,
            "responsibilities",
            &self.responsibilities,
            "Responsibilities are required",
        );
        require(
            &mut errors,
            "start_date",
            &self.start_date,
            "Start date is required",
        );
        check_date_range(
            &mut errors,
            Some(self.start_date.as_str()),
            self.end_date.as_deref(),
        );
        errors.into_result()
    }
}

impl Validate for UpdateWork {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::default();
        require_if_set(
            &mut errors,
            "company",
            self.company.as_deref(),
            "Company is required",
        );
        require_if_set(
            &mut errors,
            "work_title",
            self.work_title.as_deref(),
            "Job title is required",
        );
        require_if_set(
            &mut errors,
            "responsibilities",
            self.responsibilities.as_deref(),
            "Responsibilities are required",
        );
        require_if_set(
            &mut errors,
            "start_date",
            self.start_date.as_deref(),
            "Start date is required",
        );
        check_date_range(
            &mut errors,
            self.start_date.as_deref(),
            self.end_date.as_deref(),
        );
        errors.into_result()
    }
}

// ── Catalogs ────────────────────────────────────────────────────────

impl Validate for CreateSkill {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::default();
        require(
            &mut errors,
            "skill_name",
            &self.skill_name,
            "Skill name is required",
        );
        errors.into_result()
    }
}

impl Validate for UpdateSkill {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::default();
        require_if_set(
            &mut errors,
            "skill_name",
            self.skill_name.as_deref(),
            "Skill name is required",
        );
        errors.into_result()
    }
}

impl Validate for CreateTechnology {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::default();
        require(
            &mut errors,
            "technology_name",
            &self.technology_name,
            "Technology name is required",
        );
        errors.into_result()
    }
}

impl Validate for UpdateTechnology {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::default();
        require_if_set(
            &mut errors,
            "technology_name",
            self.technology_name.as_deref(),
            "Technology name is required",
        );
        errors.into_result()
    }
}

impl Validate for CreateProject {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::default();
        require(
            &mut errors,
            "project_name",
            &self.project_name,
            "Project name is required",
        );
        require(
            &mut errors,
            "project_description",
            &self.project_description,
            "Project description is required",
        );
        errors.into_result()
    }
}

impl Validate for UpdateProject {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::default();
        require_if_set(
            &mut errors,
            "project_name",
            self.project_name.as_deref(),
            "Project name is required",
        );
        require_if_set(
            &mut errors,
            "project_description",
            self.project_description.as_deref(),
            "Project description is required",
        );
        errors.into_result()
    }
}

// ── Roles ───────────────────────────────────────────────────────────

impl Validate for CreateProjectStaff {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::default();
        if !self.project_id.is_set() {
            errors.insert("project_id", "Project is required");
        }
        require(&mut errors, "staff_role", &self.staff_role, "Role is required");
        errors.into_result()
    }
}

impl Validate for UpdateProjectStaff {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::default();
        if self.project_id.is_some_and(|id| !id.is_set()) {
            errors.insert("project_id", "Project is required");
        }
        require_if_set(
            &mut errors,
            "staff_role",
            self.staff_role.as_deref(),
            "Role is required",
        );
        errors.into_result()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use staffdesk_api::{ProjectId, StaffId};

    fn education(start: &str, end: Option<&str>) -> CreateEducation {
        CreateEducation {
            staff_id: StaffId(1),
            degree: "BSc".into(),
            institution: "Cairo University".into(),
            field_of_study: None,
            start_date: start.into(),
            end_date: end.map(Into::into),
        }
    }

    #[test]
    fn end_before_start_is_rejected() {
        let err = education("2020-06-01", Some("2020-01-01"))
            .validate()
            .unwrap_err();
        assert_eq!(err.field("end_date"), Some("End date must be after start date"));
    }

    #[test]
    fn end_after_start_passes() {
        assert!(education("2020-06-01", Some("2021-01-01")).validate().is_ok());
        assert!(education("2020-06-01", None).validate().is_ok());
    }

    #[test]
    fn same_day_range_passes() {
        assert!(education("2020-06-01", Some("2020-06-01")).validate().is_ok());
    }

    #[test]
    fn iso_timestamps_compare_by_day() {
        assert!(
            education("2020-06-01T00:00:00.000Z", Some("2021-01-01T00:00:00.000Z"))
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn work_requires_every_text_field() {
        let err = CreateWork {
            staff_id: StaffId(1),
            company: " ".into(),
            work_title: String::new(),
            responsibilities: String::new(),
            start_date: String::new(),
            end_date: None,
        }
        .validate()
        .unwrap_err();

        let fields: Vec<_> = err.fields().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            vec!["company", "responsibilities", "start_date", "work_title"]
        );
    }

    #[test]
    fn garbage_date_is_a_format_error() {
        let err = education("June 2020", None).validate().unwrap_err();
        assert_eq!(err.field("start_date"), Some("Invalid date, expected YYYY-MM-DD"));
    }

    #[test]
    fn email_format() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("  ada@example.co.uk "));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada example@x.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn phone_format() {
        assert!(is_valid_phone("+20 (100) 123-4567"));
        assert!(is_valid_phone("0100123456"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("0100-CALL-NOW"));
        assert!(!is_valid_phone("1234567890123456"));
    }

    #[test]
    fn staff_reports_missing_before_format() {
        let err = CreateStaff {
            staff_name: "Ada".into(),
            email: String::new(),
            phone: "12".into(),
            ..CreateStaff::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field("email"), Some("Email is required"));
        assert_eq!(err.field("phone"), Some("Invalid phone format"));
        assert_eq!(err.field("staff_name"), None);
    }

    #[test]
    fn partial_update_only_checks_present_fields() {
        assert!(UpdateStaff::default().validate().is_ok());
        let err = UpdateStaff {
            email: Some("nope".into()),
            ..UpdateStaff::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field("email"), Some("Invalid email format"));
    }

    #[test]
    fn role_needs_project_and_role_name() {
        let err = CreateProjectStaff {
            project_id: ProjectId(0),
            staff_id: StaffId(1),
            staff_role: "  ".into(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field("project_id"), Some("Project is required"));
        assert_eq!(err.field("staff_role"), Some("Role is required"));
    }

    #[test]
    fn display_lists_fields() {
        let err = CreateSkill::default().validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "validation failed: skill_name: Skill name is required"
        );
    }
}
