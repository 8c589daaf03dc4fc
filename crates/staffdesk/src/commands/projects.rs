//! Project, technology, and project-role handlers.

use tabled::Tabled;

use staffdesk_core::StaffDesk;
use staffdesk_core::api::{
    CreateProjectStaff, Project, ProjectId, ProjectStaff, ProjectTechnology, RoleId, StaffId,
    Technology, TechnologyId,
};

use crate::cli::{
    GlobalOpts, ProjectTechArgs, ProjectTechCommand, ProjectsArgs, ProjectsCommand, RolesArgs,
    RolesCommand, TechnologiesArgs, TechnologiesCommand,
};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&Project> for ProjectRow {
    fn from(p: &Project) -> Self {
        Self {
            id: p.project_id.to_string(),
            name: p.project_name.clone(),
            description: p.project_description.clone(),
        }
    }
}

#[derive(Tabled)]
struct TechnologyRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&Technology> for TechnologyRow {
    fn from(t: &Technology) -> Self {
        Self {
            id: t.technology_id.to_string(),
            name: t.technology_name.clone(),
        }
    }
}

impl From<&ProjectTechnology> for TechnologyRow {
    fn from(t: &ProjectTechnology) -> Self {
        Self {
            id: t.technology_id.to_string(),
            name: t.technology_name.clone(),
        }
    }
}

#[derive(Tabled)]
struct RoleRow {
    #[tabled(rename = "Role ID")]
    id: String,
    #[tabled(rename = "Project ID")]
    project_id: String,
    #[tabled(rename = "Project")]
    project: String,
    #[tabled(rename = "Role")]
    role: String,
}

impl From<&ProjectStaff> for RoleRow {
    fn from(r: &ProjectStaff) -> Self {
        Self {
            id: r.role_id.to_string(),
            project_id: r.project_id.to_string(),
            project: r.project_name.clone(),
            role: r.staff_role.clone(),
        }
    }
}

// ── Catalogs ────────────────────────────────────────────────────────

pub async fn handle(
    desk: &StaffDesk,
    args: ProjectsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ProjectsCommand::List(page) => {
            let mut ctl = desk.projects();
            if let Some(limit) = page.limit {
                ctl = ctl.with_limit(limit);
            }
            let items = util::list_page(&ctl, page.page).await?;
            let out = output::render_list(
                &global.output,
                &items,
                |p| ProjectRow::from(p),
                |p| p.project_id.to_string(),
            );
            output::print_output(&out, global.quiet);
            util::print_footer(&ctl, global);
            Ok(())
        }
    }
}

pub async fn handle_technologies(
    desk: &StaffDesk,
    args: TechnologiesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        TechnologiesCommand::List(page) => {
            let mut ctl = desk.technologies();
            if let Some(limit) = page.limit {
                ctl = ctl.with_limit(limit);
            }
            let items = util::list_page(&ctl, page.page).await?;
            let out = output::render_list(
                &global.output,
                &items,
                |t| TechnologyRow::from(t),
                |t| t.technology_id.to_string(),
            );
            output::print_output(&out, global.quiet);
            util::print_footer(&ctl, global);
            Ok(())
        }
    }
}

// ── Project technologies ────────────────────────────────────────────

pub async fn handle_links(
    desk: &StaffDesk,
    args: ProjectTechArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ProjectTechCommand::List { project_id } => {
            let ctl = desk.project_technologies(ProjectId(project_id));
            let items = util::list_page(&ctl, 1).await?;
            let out = output::render_list(
                &global.output,
                &items,
                |t| TechnologyRow::from(t),
                |t| t.technology_id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProjectTechCommand::Add {
            project_id,
            technology_id,
        } => {
            let ctl = desk.project_technologies(ProjectId(project_id));
            let ok = ctl.add_association(TechnologyId(technology_id)).await;
            util::succeeded(&ctl, ok)?;
            output::status(
                &format!("Linked technology {technology_id} to project {project_id}"),
                global.quiet,
            );
            Ok(())
        }

        ProjectTechCommand::Remove {
            project_id,
            technology_id,
        } => {
            let ctl = desk.project_technologies(ProjectId(project_id));
            let ok = ctl.remove_association(TechnologyId(technology_id)).await;
            util::succeeded(&ctl, ok)?;
            output::status(
                &format!("Unlinked technology {technology_id} from project {project_id}"),
                global.quiet,
            );
            Ok(())
        }

        ProjectTechCommand::Clear { project_id } => {
            let prompt = format!("Unlink every technology of project {project_id}?");
            if !util::confirm(&prompt, "project-tech clear", global.yes)? {
                return Ok(());
            }
            let ctl = desk.project_technologies(ProjectId(project_id));
            ctl.source()
                .delete_all_for_project(ProjectId(project_id))
                .await?;
            output::status(
                &format!("Cleared technologies of project {project_id}"),
                global.quiet,
            );
            Ok(())
        }

        ProjectTechCommand::Available { project_id } => {
            let catalog = desk.technologies().with_limit(util::PICKER_LIMIT);
            let technologies = util::list_page(&catalog, 1).await?;
            let links = desk.project_technologies(ProjectId(project_id));
            links.fetch(1).await;
            util::settle(&links)?;

            let free = links.available(&technologies);
            let out = output::render_list(
                &global.output,
                &free,
                |t| TechnologyRow::from(t),
                |t| t.technology_id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

// ── Roles ───────────────────────────────────────────────────────────

pub async fn handle_roles(
    desk: &StaffDesk,
    args: RolesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        RolesCommand::List { staff_id } => {
            let ctl = desk.project_staff(StaffId(staff_id));
            let items = util::list_page(&ctl, 1).await?;
            let out = output::render_list(
                &global.output,
                &items,
                |r| RoleRow::from(r),
                |r| r.role_id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        RolesCommand::Add {
            staff_id,
            project,
            role,
        } => {
            let ctl = desk.project_staff(StaffId(staff_id));
            let created = ctl
                .submit_create(&CreateProjectStaff {
                    project_id: ProjectId(project),
                    staff_id: StaffId(staff_id),
                    staff_role: role,
                })
                .await?
                .ok_or_else(|| util::failed(ctl.error()))?;
            output::status(
                &format!(
                    "Assigned staff member {staff_id} to project {project} (role {})",
                    created.role_id
                ),
                global.quiet,
            );
            let out = output::render_list(
                &global.output,
                std::slice::from_ref(&created),
                |r| RoleRow::from(r),
                |r| r.role_id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        RolesCommand::Remove { staff_id, role_id } => {
            let prompt = format!("Remove role {role_id} from staff member {staff_id}?");
            if !util::confirm(&prompt, "roles remove", global.yes)? {
                return Ok(());
            }
            let ctl = desk.project_staff(StaffId(staff_id));
            let ok = ctl.delete(RoleId(role_id)).await;
            util::succeeded(&ctl, ok)?;
            output::status(&format!("Removed role {role_id}"), global.quiet);
            Ok(())
        }
    }
}
