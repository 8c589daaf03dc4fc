//! Shared helpers for command handlers.

use std::io::IsTerminal;

use staffdesk_core::api::Pagination;
use staffdesk_core::{CollectionController, CollectionSource, ErrorKind, PageCursor};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

/// Page size for picker views (`available`), large enough for a full catalog.
pub const PICKER_LIMIT: u32 = 100;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// Without a terminal there is nobody to ask, so the command is refused.
pub fn confirm(message: &str, action: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Turn a controller's stored failure into a command error.
pub fn failed(error: Option<ErrorKind>) -> CliError {
    CliError::Operation {
        message: error.map_or_else(|| "Operation failed".into(), |e| e.message().to_owned()),
    }
}

/// Fail if the controller recorded an error during the last operation.
pub fn settle<S: CollectionSource>(ctl: &CollectionController<S>) -> Result<(), CliError> {
    match ctl.error() {
        Some(err) => Err(failed(Some(err))),
        None => Ok(()),
    }
}

/// Map a mutation's success flag to a result.
pub fn succeeded<S: CollectionSource>(
    ctl: &CollectionController<S>,
    ok: bool,
) -> Result<(), CliError> {
    if ok { Ok(()) } else { Err(failed(ctl.error())) }
}

/// Fetch one page of a listing.
///
/// For paginated collections a page past the first is checked against the
/// page count before it is requested. The count comes from page 1 when
/// nothing has been fetched yet.
pub async fn list_page<S: CollectionSource>(
    ctl: &CollectionController<S>,
    page: u32,
) -> Result<Vec<S::Entity>, CliError> {
    if S::PAGINATED && page > 1 && ctl.cursor().is_none() {
        ctl.fetch(1).await;
        settle(ctl)?;
    }

    if !ctl.go_to_page(page).await {
        let pages = ctl.cursor().map_or(1, |c| c.total_pages().max(1));
        return Err(CliError::InvalidValue {
            field: "page".into(),
            reason: format!("page {page} is out of range (1-{pages})"),
        });
    }
    settle(ctl)?;
    Ok(ctl.items())
}

/// `"Page 2 of 5 (41 total)"`, for listings the server paginates.
pub fn page_footer(pagination: Option<Pagination>) -> Option<String> {
    let p = pagination?;
    let cursor = PageCursor::from_pagination(p);
    Some(format!(
        "Page {} of {} ({} total)",
        cursor.current(),
        cursor.total_pages().max(1),
        p.total
    ))
}

/// Print the page footer on stderr for table output.
pub fn print_footer<S: CollectionSource>(
    ctl: &CollectionController<S>,
    global: &GlobalOpts,
) {
    if matches!(global.output, OutputFormat::Table) {
        if let Some(footer) = page_footer(ctl.pagination()) {
            output::status(&footer, global.quiet);
        }
    }
}
