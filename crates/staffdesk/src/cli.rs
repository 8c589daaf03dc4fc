//! Clap derive structures for the `staffdesk` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// staffdesk -- manage staff records, skills, projects and CVs
#[derive(Debug, Parser)]
#[command(
    name = "staffdesk",
    version,
    about = "Manage staff records and CVs from the command line",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// API base URL (overrides config and STAFFDESK_API_URL)
    #[arg(long, short = 'u', global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(long, short = 'o', default_value = "table", global = true)]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// Plain text, one id per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Staff members
    Staff(StaffArgs),

    /// Skill catalog
    Skills(SkillsArgs),

    /// Skills linked to a staff member
    #[command(name = "staff-skills")]
    StaffSkills(StaffSkillsArgs),

    /// Technology catalog
    #[command(alias = "tech")]
    Technologies(TechnologiesArgs),

    /// Technologies linked to a project
    #[command(name = "project-tech")]
    ProjectTech(ProjectTechArgs),

    /// Project catalog
    Projects(ProjectsArgs),

    /// A staff member's project roles
    Roles(RolesArgs),

    /// A staff member's education history
    #[command(alias = "edu")]
    Education(EducationArgs),

    /// A staff member's work experience
    Work(WorkArgs),

    /// Render or download CVs
    Cv(CvArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

// ── Shared Args ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PageArgs {
    /// Page to show (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Page size (defaults to the configured size)
    #[arg(long)]
    pub limit: Option<u32>,
}

// ── Staff ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct StaffArgs {
    #[command(subcommand)]
    pub command: StaffCommand,
}

#[derive(Debug, Subcommand)]
pub enum StaffCommand {
    /// List staff members
    #[command(alias = "ls")]
    List(PageArgs),

    /// Show one staff member
    Show { id: i64 },

    /// Add a staff member
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        summary: Option<String>,
    },

    /// Remove a staff member
    #[command(alias = "rm")]
    Delete { id: i64 },
}

// ── Skills ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SkillsArgs {
    #[command(subcommand)]
    pub command: SkillsCommand,
}

#[derive(Debug, Subcommand)]
pub enum SkillsCommand {
    /// List skills
    #[command(alias = "ls")]
    List(PageArgs),

    /// Add a skill to the catalog
    Create {
        #[arg(long)]
        name: String,
        /// One of: Technical, Soft Skills, Languages, Tools, Frameworks, Other
        #[arg(long = "type")]
        skill_type: Option<String>,
    },

    /// Remove a skill from the catalog
    #[command(alias = "rm")]
    Delete { id: i64 },
}

#[derive(Debug, Args)]
pub struct StaffSkillsArgs {
    #[command(subcommand)]
    pub command: StaffSkillsCommand,
}

#[derive(Debug, Subcommand)]
pub enum StaffSkillsCommand {
    /// List a staff member's skills
    #[command(alias = "ls")]
    List { staff_id: i64 },

    /// Link a skill
    Add { staff_id: i64, skill_id: i64 },

    /// Unlink a skill
    #[command(alias = "rm")]
    Remove { staff_id: i64, skill_id: i64 },

    /// Unlink every skill of a staff member
    Clear { staff_id: i64 },

    /// Catalog skills not yet linked
    Available { staff_id: i64 },
}

// ── Technologies & projects ──────────────────────────────────────────

#[derive(Debug, Args)]
pub struct TechnologiesArgs {
    #[command(subcommand)]
    pub command: TechnologiesCommand,
}

#[derive(Debug, Subcommand)]
pub enum TechnologiesCommand {
    /// List technologies
    #[command(alias = "ls")]
    List(PageArgs),
}

#[derive(Debug, Args)]
pub struct ProjectTechArgs {
    #[command(subcommand)]
    pub command: ProjectTechCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProjectTechCommand {
    /// List a project's technologies
    #[command(alias = "ls")]
    List { project_id: i64 },

    /// Link a technology
    Add { project_id: i64, technology_id: i64 },

    /// Unlink a technology
    #[command(alias = "rm")]
    Remove { project_id: i64, technology_id: i64 },

    /// Unlink every technology of a project
    Clear { project_id: i64 },

    /// Catalog technologies not yet linked
    Available { project_id: i64 },
}

#[derive(Debug, Args)]
pub struct ProjectsArgs {
    #[command(subcommand)]
    pub command: ProjectsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProjectsCommand {
    /// List projects
    #[command(alias = "ls")]
    List(PageArgs),
}

#[derive(Debug, Args)]
pub struct RolesArgs {
    #[command(subcommand)]
    pub command: RolesCommand,
}

#[derive(Debug, Subcommand)]
pub enum RolesCommand {
    /// List a staff member's project roles
    #[command(alias = "ls")]
    List { staff_id: i64 },

    /// Assign a staff member to a project
    Add {
        staff_id: i64,
        #[arg(long)]
        project: i64,
        #[arg(long)]
        role: String,
    },

    /// Remove a project role
    #[command(alias = "rm")]
    Remove { staff_id: i64, role_id: i64 },
}

// ── Education & work ─────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct EducationArgs {
    #[command(subcommand)]
    pub command: EducationCommand,
}

#[derive(Debug, Subcommand)]
pub enum EducationCommand {
    /// List a staff member's education
    #[command(alias = "ls")]
    List { staff_id: i64 },

    /// Add an education entry
    Add {
        staff_id: i64,
        #[arg(long)]
        degree: String,
        #[arg(long)]
        institution: String,
        #[arg(long)]
        field: Option<String>,
        /// YYYY-MM-DD
        #[arg(long)]
        start: String,
        /// YYYY-MM-DD; omit while ongoing
        #[arg(long)]
        end: Option<String>,
    },

    /// Remove an education entry
    #[command(alias = "rm")]
    Delete { staff_id: i64, education_id: i64 },

    /// Remove every education entry of a staff member
    Clear { staff_id: i64 },
}

#[derive(Debug, Args)]
pub struct WorkArgs {
    #[command(subcommand)]
    pub command: WorkCommand,
}

#[derive(Debug, Subcommand)]
pub enum WorkCommand {
    /// List a staff member's work experience
    #[command(alias = "ls")]
    List { staff_id: i64 },

    /// Add a work experience entry
    Add {
        staff_id: i64,
        #[arg(long)]
        company: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        responsibilities: String,
        /// YYYY-MM-DD
        #[arg(long)]
        start: String,
        /// YYYY-MM-DD; omit while ongoing
        #[arg(long)]
        end: Option<String>,
    },

    /// Remove a work experience entry
    #[command(alias = "rm")]
    Delete { staff_id: i64, work_id: i64 },

    /// Remove every work entry of a staff member
    Clear { staff_id: i64 },
}

// ── CV ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CvArgs {
    #[command(subcommand)]
    pub command: CvCommand,
}

#[derive(Debug, Subcommand)]
pub enum CvCommand {
    /// Print the rendered HTML CV
    Html {
        staff_id: i64,
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Download the PDF CV
    Pdf {
        staff_id: i64,
        /// Name used for the file (looked up when omitted)
        #[arg(long)]
        name: Option<String>,
        /// Target directory (defaults to the configured download dir)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Print the config file location
    Path,

    /// Write a config file, optionally with an API URL
    Init {
        #[arg(long)]
        url: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
