//! Staff command handlers.

use tabled::Tabled;

use staffdesk_core::StaffDesk;
use staffdesk_core::api::{CreateStaff, Staff, StaffId};

use crate::cli::{GlobalOpts, StaffArgs, StaffCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct StaffRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
}

impl From<&Staff> for StaffRow {
    fn from(s: &Staff) -> Self {
        Self {
            id: s.staff_id.to_string(),
            name: s.staff_name.clone(),
            title: s.title.clone().unwrap_or_default(),
            email: s.email.clone(),
            phone: s.phone.clone(),
        }
    }
}

fn detail(s: &Staff) -> String {
    let mut lines = vec![
        format!("ID:      {}", s.staff_id),
        format!("Name:    {}", s.staff_name),
        format!("Title:   {}", s.title.as_deref().unwrap_or("-")),
        format!("Email:   {}", s.email),
        format!("Phone:   {}", s.phone),
    ];
    if let Some(summary) = s.summary.as_deref().filter(|v| !v.trim().is_empty()) {
        lines.push(String::new());
        lines.push(summary.to_owned());
    }
    lines.join("\n")
}

fn empty_as_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    desk: &StaffDesk,
    args: StaffArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        StaffCommand::List(page) => {
            let mut ctl = desk.staff();
            if let Some(limit) = page.limit {
                ctl = ctl.with_limit(limit);
            }
            let items = util::list_page(&ctl, page.page).await?;
            let out = output::render_list(
                &global.output,
                &items,
                |s| StaffRow::from(s),
                |s| s.staff_id.to_string(),
            );
            output::print_output(&out, global.quiet);
            util::print_footer(&ctl, global);
            Ok(())
        }

        StaffCommand::Show { id } => {
            let ctl = desk.staff();
            let staff = ctl
                .fetch_by_id(StaffId(id))
                .await
                .ok_or_else(|| util::failed(ctl.error()))?;
            let out = output::render_single(&global.output, &staff, detail, |s| {
                s.staff_id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        StaffCommand::Create {
            name,
            email,
            phone,
            title,
            summary,
        } => {
            let input = CreateStaff {
                staff_name: name,
                title: empty_as_none(title),
                email,
                phone,
                summary: empty_as_none(summary),
            };
            let ctl = desk.staff();
            let created = ctl
                .submit_create(&input)
                .await?
                .ok_or_else(|| util::failed(ctl.error()))?;
            output::status(
                &format!("Created staff member {}", created.staff_id),
                global.quiet,
            );
            let out = output::render_single(&global.output, &created, detail, |s| {
                s.staff_id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        StaffCommand::Delete { id } => {
            let prompt = format!("Delete staff member {id} and everything attached to it?");
            if !util::confirm(&prompt, "staff delete", global.yes)? {
                return Ok(());
            }
            let ctl = desk.staff();
            let ok = ctl.delete(StaffId(id)).await;
            util::succeeded(&ctl, ok)?;
            output::status(&format!("Deleted staff member {id}"), global.quiet);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> Staff {
        Staff {
            staff_id: StaffId(3),
            staff_name: "Ada Lovelace".into(),
            title: None,
            email: "ada@example.com".into(),
            phone: "+44 20 7946 0000".into(),
            summary: Some("Analyst.".into()),
        }
    }

    #[test]
    fn detail_marks_missing_title() {
        let text = detail(&ada());
        assert!(text.contains("Title:   -"));
        assert!(text.ends_with("Analyst."));
    }

    #[test]
    fn blank_optionals_are_dropped() {
        assert_eq!(empty_as_none(Some("  ".into())), None);
        assert_eq!(empty_as_none(Some("Lead".into())).as_deref(), Some("Lead"));
    }
}
