// ── Runtime client configuration ──
//
// Describes *where* the API lives and how the controllers page through it.
// Never touches disk; `staffdesk-config` builds one of these and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// Staff listings default to a 3x3 card grid.
pub const DEFAULT_STAFF_PAGE_LIMIT: u32 = 9;

/// Configuration for talking to a single staff-records API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL (e.g. `http://localhost:3000/api`).
    pub base_url: Url,
    /// Request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
    /// Page size for the staff listing.
    pub staff_page_limit: u32,
    /// Page size for every other catalog listing.
    pub page_limit: u32,
    /// Where downloaded CV documents are written.
    pub download_dir: PathBuf,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: None,
            staff_page_limit: DEFAULT_STAFF_PAGE_LIMIT,
            page_limit: staffdesk_api::DEFAULT_PAGE_LIMIT,
            download_dir: PathBuf::from("."),
        }
    }
}
