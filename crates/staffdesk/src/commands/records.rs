//! Education and work-experience handlers.

use tabled::Tabled;

use staffdesk_core::api::{
    CreateEducation, CreateWork, Education, EducationId, StaffId, WorkExperience, WorkId,
};
use staffdesk_core::{StaffDesk, format_period};

use crate::cli::{EducationArgs, EducationCommand, GlobalOpts, WorkArgs, WorkCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct EducationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Degree")]
    degree: String,
    #[tabled(rename = "Institution")]
    institution: String,
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Period")]
    period: String,
}

impl From<&Education> for EducationRow {
    fn from(e: &Education) -> Self {
        Self {
            id: e.education_id.to_string(),
            degree: e.degree.clone(),
            institution: e.institution.clone(),
            field: e.field_of_study.clone().unwrap_or_default(),
            period: format_period(&e.start_date, e.end_date.as_deref()),
        }
    }
}

#[derive(Tabled)]
struct WorkRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Period")]
    period: String,
}

impl From<&WorkExperience> for WorkRow {
    fn from(w: &WorkExperience) -> Self {
        Self {
            id: w.work_id.to_string(),
            company: w.company.clone(),
            title: w.work_title.clone(),
            period: format_period(&w.start_date, w.end_date.as_deref()),
        }
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ── Education ───────────────────────────────────────────────────────

pub async fn handle_education(
    desk: &StaffDesk,
    args: EducationArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        EducationCommand::List { staff_id } => {
            let ctl = desk.education(StaffId(staff_id));
            let items = util::list_page(&ctl, 1).await?;
            let out = output::render_list(
                &global.output,
                &items,
                |e| EducationRow::from(e),
                |e| e.education_id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        EducationCommand::Add {
            staff_id,
            degree,
            institution,
            field,
            start,
            end,
        } => {
            let input = CreateEducation {
                staff_id: StaffId(staff_id),
                degree,
                institution,
                field_of_study: blank_to_none(field),
                start_date: start,
                end_date: blank_to_none(end),
            };
            let ctl = desk.education(StaffId(staff_id));
            let created = ctl
                .submit_create(&input)
                .await?
                .ok_or_else(|| util::failed(ctl.error()))?;
            output::status(
                &format!("Added education {}", created.education_id),
                global.quiet,
            );
            let out = output::render_list(
                &global.output,
                std::slice::from_ref(&created),
                |e| EducationRow::from(e),
                |e| e.education_id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        EducationCommand::Delete {
            staff_id,
            education_id,
        } => {
            let prompt = format!("Delete education entry {education_id}?");
            if !util::confirm(&prompt, "education delete", global.yes)? {
                return Ok(());
            }
            let ctl = desk.education(StaffId(staff_id));
            let ok = ctl.delete(EducationId(education_id)).await;
            util::succeeded(&ctl, ok)?;
            output::status(
                &format!("Deleted education entry {education_id}"),
                global.quiet,
            );
            Ok(())
        }

        EducationCommand::Clear { staff_id } => {
            let prompt = format!("Delete all education of staff member {staff_id}?");
            if !util::confirm(&prompt, "education clear", global.yes)? {
                return Ok(());
            }
            let ctl = desk.education(StaffId(staff_id));
            ctl.source().delete_all_for_staff(StaffId(staff_id)).await?;
            output::status(
                &format!("Cleared education of staff member {staff_id}"),
                global.quiet,
            );
            Ok(())
        }
    }
}

// ── Work experience ─────────────────────────────────────────────────

pub async fn handle_work(
    desk: &StaffDesk,
    args: WorkArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        WorkCommand::List { staff_id } => {
            let ctl = desk.work(StaffId(staff_id));
            let items = util::list_page(&ctl, 1).await?;
            let out = output::render_list(
                &global.output,
                &items,
                |w| WorkRow::from(w),
                |w| w.work_id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        WorkCommand::Add {
            staff_id,
            company,
            title,
            responsibilities,
            start,
            end,
        } => {
            let input = CreateWork {
                staff_id: StaffId(staff_id),
                company,
                work_title: title,
                responsibilities,
                start_date: start,
                end_date: blank_to_none(end),
            };
            let ctl = desk.work(StaffId(staff_id));
            let created = ctl
                .submit_create(&input)
                .await?
                .ok_or_else(|| util::failed(ctl.error()))?;
            output::status(
                &format!("Added work experience {}", created.work_id),
                global.quiet,
            );
            let out = output::render_list(
                &global.output,
                std::slice::from_ref(&created),
                |w| WorkRow::from(w),
                |w| w.work_id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        WorkCommand::Delete { staff_id, work_id } => {
            let prompt = format!("Delete work experience {work_id}?");
            if !util::confirm(&prompt, "work delete", global.yes)? {
                return Ok(());
            }
            let ctl = desk.work(StaffId(staff_id));
            let ok = ctl.delete(WorkId(work_id)).await;
            util::succeeded(&ctl, ok)?;
            output::status(&format!("Deleted work experience {work_id}"), global.quiet);
            Ok(())
        }

        WorkCommand::Clear { staff_id } => {
            let prompt = format!("Delete all work experience of staff member {staff_id}?");
            if !util::confirm(&prompt, "work clear", global.yes)? {
                return Ok(());
            }
            let ctl = desk.work(StaffId(staff_id));
            ctl.source().delete_all_for_staff(StaffId(staff_id)).await?;
            output::status(
                &format!("Cleared work experience of staff member {staff_id}"),
                global.quiet,
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ongoing_work_reads_present() {
        let row = WorkRow::from(&WorkExperience {
            work_id: WorkId(8),
            staff_id: StaffId(1),
            company: "Initech".into(),
            work_title: "Engineer".into(),
            responsibilities: "TPS reports".into(),
            start_date: "2021-03-01".into(),
            end_date: None,
        });
        assert_eq!(row.period, "March 2021 - Present");
    }

    #[test]
    fn education_row_formats_range() {
        let row = EducationRow::from(&Education {
            education_id: EducationId(2),
            staff_id: StaffId(1),
            degree: "BSc".into(),
            institution: "MIT".into(),
            field_of_study: None,
            start_date: "2014-09-01".into(),
            end_date: Some("2018-06-30".into()),
        });
        assert_eq!(row.period, "September 2014 - June 2018");
        assert_eq!(row.field, "");
    }
}
