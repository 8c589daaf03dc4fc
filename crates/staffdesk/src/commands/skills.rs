//! Skill catalog and staff-skill link handlers.

use strum::IntoEnumIterator;
use tabled::Tabled;

use staffdesk_core::api::{CreateSkill, Skill, SkillId, StaffId, StaffSkill};
use staffdesk_core::{SkillType, StaffDesk};

use crate::cli::{GlobalOpts, SkillsArgs, SkillsCommand, StaffSkillsArgs, StaffSkillsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct SkillRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    skill_type: String,
}

impl From<&Skill> for SkillRow {
    fn from(s: &Skill) -> Self {
        Self {
            id: s.skill_id.to_string(),
            name: s.skill_name.clone(),
            skill_type: s.skill_type.clone().unwrap_or_default(),
        }
    }
}

impl From<&StaffSkill> for SkillRow {
    fn from(s: &StaffSkill) -> Self {
        Self {
            id: s.skill_id.to_string(),
            name: s.skill_name.clone(),
            skill_type: s.skill_type.clone().unwrap_or_default(),
        }
    }
}

/// Accepts the display name ("Soft Skills") and normalizes it.
fn parse_skill_type(raw: &str) -> Result<SkillType, CliError> {
    raw.trim().parse::<SkillType>().map_err(|_| CliError::InvalidValue {
        field: "type".into(),
        reason: format!(
            "expected one of: {}",
            SkillType::iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    })
}

// ── Catalog ─────────────────────────────────────────────────────────

pub async fn handle(
    desk: &StaffDesk,
    args: SkillsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SkillsCommand::List(page) => {
            let mut ctl = desk.skills();
            if let Some(limit) = page.limit {
                ctl = ctl.with_limit(limit);
            }
            let items = util::list_page(&ctl, page.page).await?;
            let out = output::render_list(
                &global.output,
                &items,
                |s| SkillRow::from(s),
                |s| s.skill_id.to_string(),
            );
            output::print_output(&out, global.quiet);
            util::print_footer(&ctl, global);
            Ok(())
        }

        SkillsCommand::Create { name, skill_type } => {
            let skill_type = skill_type
                .as_deref()
                .map(parse_skill_type)
                .transpose()?
                .map(|t| t.to_string());
            let ctl = desk.skills();
            let created = ctl
                .submit_create(&CreateSkill {
                    skill_name: name,
                    skill_type,
                })
                .await?
                .ok_or_else(|| util::failed(ctl.error()))?;
            output::status(
                &format!("Created skill {}", created.skill_id),
                global.quiet,
            );
            let out = output::render_list(
                &global.output,
                std::slice::from_ref(&created),
                |s| SkillRow::from(s),
                |s| s.skill_id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SkillsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete skill {id}?"), "skills delete", global.yes)? {
                return Ok(());
            }
            let ctl = desk.skills();
            let ok = ctl.delete(SkillId(id)).await;
            util::succeeded(&ctl, ok)?;
            output::status(&format!("Deleted skill {id}"), global.quiet);
            Ok(())
        }
    }
}

// ── Staff links ─────────────────────────────────────────────────────

pub async fn handle_links(
    desk: &StaffDesk,
    args: StaffSkillsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        StaffSkillsCommand::List { staff_id } => {
            let ctl = desk.staff_skills(StaffId(staff_id));
            let items = util::list_page(&ctl, 1).await?;
            let out = output::render_list(
                &global.output,
                &items,
                |s| SkillRow::from(s),
                |s| s.skill_id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        StaffSkillsCommand::Add { staff_id, skill_id } => {
            let ctl = desk.staff_skills(StaffId(staff_id));
            let ok = ctl.add_association(SkillId(skill_id)).await;
            util::succeeded(&ctl, ok)?;
            output::status(
                &format!("Linked skill {skill_id} to staff member {staff_id}"),
                global.quiet,
            );
            Ok(())
        }

        StaffSkillsCommand::Remove { staff_id, skill_id } => {
            let ctl = desk.staff_skills(StaffId(staff_id));
            let ok = ctl.remove_association(SkillId(skill_id)).await;
            util::succeeded(&ctl, ok)?;
            output::status(
                &format!("Unlinked skill {skill_id} from staff member {staff_id}"),
                global.quiet,
            );
            Ok(())
        }

        StaffSkillsCommand::Clear { staff_id } => {
            let prompt = format!("Unlink every skill of staff member {staff_id}?");
            if !util::confirm(&prompt, "staff-skills clear", global.yes)? {
                return Ok(());
            }
            let ctl = desk.staff_skills(StaffId(staff_id));
            ctl.source().delete_all_for_staff(StaffId(staff_id)).await?;
            output::status(
                &format!("Cleared skills of staff member {staff_id}"),
                global.quiet,
            );
            Ok(())
        }

        StaffSkillsCommand::Available { staff_id } => {
            let catalog = desk.skills().with_limit(util::PICKER_LIMIT);
            let skills = util::list_page(&catalog, 1).await?;
            let links = desk.staff_skills(StaffId(staff_id));
            links.fetch(1).await;
            util::settle(&links)?;

            let free = links.available(&skills);
            let out = output::render_list(
                &global.output,
                &free,
                |s| SkillRow::from(s),
                |s| s.skill_id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_type_accepts_display_names() {
        assert_eq!(parse_skill_type("Soft Skills").ok(), Some(SkillType::SoftSkills));
        assert_eq!(parse_skill_type(" Tools ").ok(), Some(SkillType::Tools));
    }

    #[test]
    fn unknown_skill_type_lists_choices() {
        let err = parse_skill_type("Juggling").err().map(|e| e.to_string());
        let msg = err.unwrap_or_default();
        assert!(msg.contains("Technical"));
        assert!(msg.contains("Soft Skills"));
    }
}
