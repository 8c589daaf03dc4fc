//! Command dispatch: routes each subcommand to its handler.

pub mod config_cmd;
pub mod cv;
pub mod projects;
pub mod records;
pub mod skills;
pub mod staff;
pub mod util;

use staffdesk_core::StaffDesk;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Route an API-backed command to its handler.
pub async fn dispatch(
    cmd: Command,
    desk: &StaffDesk,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Staff(args) => staff::handle(desk, args, global).await,
        Command::Skills(args) => skills::handle(desk, args, global).await,
        Command::StaffSkills(args) => skills::handle_links(desk, args, global).await,
        Command::Technologies(args) => projects::handle_technologies(desk, args, global).await,
        Command::ProjectTech(args) => projects::handle_links(desk, args, global).await,
        Command::Projects(args) => projects::handle(desk, args, global).await,
        Command::Roles(args) => projects::handle_roles(desk, args, global).await,
        Command::Education(args) => records::handle_education(desk, args, global).await,
        Command::Work(args) => records::handle_work(desk, args, global).await,
        Command::Cv(args) => cv::handle(desk, args, global).await,
        // Config is handled before dispatch
        Command::Config(_) => unreachable!(),
    }
}
