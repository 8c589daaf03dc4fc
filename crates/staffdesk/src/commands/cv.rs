//! CV rendering and download handlers.

use serde::Serialize;

use staffdesk_core::api::StaffId;
use staffdesk_core::{CvController, CvRepository, StaffDesk};

use crate::cli::{CvArgs, CvCommand, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Serialize)]
struct SavedCv {
    staff_id: StaffId,
    path: String,
}

pub async fn handle(
    desk: &StaffDesk,
    args: CvArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        CvCommand::Html { staff_id, out } => {
            let cv = desk.cv();
            let html = cv
                .generate_cv(StaffId(staff_id))
                .await
                .ok_or_else(|| util::failed(cv.error()))?;
            match out {
                Some(path) => {
                    std::fs::write(&path, html)?;
                    output::status(&format!("Wrote {}", path.display()), global.quiet);
                }
                None => output::print_output(&html, global.quiet),
            }
            Ok(())
        }

        CvCommand::Pdf {
            staff_id,
            name,
            dir,
        } => {
            let staff_id = StaffId(staff_id);
            let name = match name {
                Some(name) => name,
                None => {
                    let staff = desk.staff();
                    staff
                        .fetch_by_id(staff_id)
                        .await
                        .ok_or_else(|| util::failed(staff.error()))?
                        .staff_name
                }
            };

            let cv = match dir {
                Some(dir) => CvController::new(CvRepository::new(desk.client().clone()), dir),
                None => desk.cv(),
            };
            let path = cv
                .download_pdf(staff_id, &name)
                .await
                .ok_or_else(|| util::failed(cv.error()))?;

            let saved = SavedCv {
                staff_id,
                path: path.display().to_string(),
            };
            let out = match global.output {
                OutputFormat::Table => format!("Saved {}", saved.path),
                _ => output::render_single(
                    &global.output,
                    &saved,
                    |s| s.path.clone(),
                    |s| s.path.clone(),
                ),
            };
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
