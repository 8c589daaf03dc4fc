// ── CV controller ──
//
// Single-shot reads of server-rendered CVs. Same loading/error contract as
// a collection controller, but over a scalar result.

use std::path::{Path, PathBuf};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use staffdesk_api::StaffId;

use super::state::{CvState, LoadingGuard};
use crate::error::{CoreError, ErrorKind};
use crate::repository::CvSource;

/// `CV_{name}.pdf`. Each run of whitespace and path separators becomes a
/// single `_`; the name is not trimmed first.
pub fn pdf_filename(staff_name: &str) -> String {
    let mut name = String::with_capacity(staff_name.len());
    let mut in_gap = false;
    for c in staff_name.chars() {
        if c.is_whitespace() || c == '/' || c == '\\' {
            if !in_gap {
                name.push('_');
            }
            in_gap = true;
        } else {
            name.push(c);
            in_gap = false;
        }
    }
    format!("CV_{name}.pdf")
}

pub struct CvController<S: CvSource> {
    source: S,
    download_dir: PathBuf,
    state: watch::Sender<CvState>,
}

impl<S: CvSource> CvController<S> {
    pub fn new(source: S, download_dir: impl Into<PathBuf>) -> Self {
        let (state, _) = watch::channel(CvState::default());
        Self {
            source,
            download_dir: download_dir.into(),
            state,
        }
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    pub fn state(&self) -> CvState {
        self.state.borrow().clone()
    }

    pub fn html(&self) -> Option<String> {
        self.state.borrow().html.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn error(&self) -> Option<ErrorKind> {
        self.state.borrow().error.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CvState> {
        self.state.subscribe()
    }

    /// Fetch the rendered CV of `staff_id` and keep it for display.
    pub async fn generate_cv(&self, staff_id: StaffId) -> Option<String> {
        let _loading = LoadingGuard::begin(&self.state);
        match self.source.html(staff_id).await {
            Ok(html) => {
                debug!(%staff_id, bytes = html.len(), "rendered CV");
                self.state.send_modify(|s| s.html = Some(html.clone()));
                Some(html)
            }
            Err(e) => {
                self.fail("Failed to generate CV", &e);
                None
            }
        }
    }

    /// Download the PDF CV of `staff_id` into the download directory.
    ///
    /// Returns the written path. An existing file of the same name is
    /// overwritten.
    pub async fn download_pdf(&self, staff_id: StaffId, staff_name: &str) -> Option<PathBuf> {
        let _loading = LoadingGuard::begin(&self.state);
        match self.save_pdf(staff_id, staff_name).await {
            Ok(path) => {
                info!(%staff_id, path = %path.display(), "saved CV");
                Some(path)
            }
            Err(e) => {
                self.fail("Failed to download CV PDF", &e);
                None
            }
        }
    }

    /// Forget the rendered CV and any error.
    pub fn clear(&self) {
        self.state.send_modify(|s| {
            s.html = None;
            s.error = None;
        });
    }

    async fn save_pdf(&self, staff_id: StaffId, staff_name: &str) -> Result<PathBuf, CoreError> {
        let bytes = self.source.pdf(staff_id).await?;
        tokio::fs::create_dir_all(&self.download_dir).await?;
        let path = self.download_dir.join(pdf_filename(staff_name));
        tokio::fs::write(&path, &bytes).await?;
        Ok(path)
    }

    fn fail(&self, message: &str, err: &CoreError) {
        warn!(status = ?err.status(), error = %err, "{message}");
        self.state
            .send_modify(|s| s.error = Some(ErrorKind::new(message)));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bytes::Bytes;

    use super::*;

    #[test]
    fn filename_collapses_whitespace() {
        assert_eq!(pdf_filename("Ada Lovelace"), "CV_Ada_Lovelace.pdf");
        assert_eq!(pdf_filename("Ada \t  King\nLovelace"), "CV_Ada_King_Lovelace.pdf");
        assert_eq!(pdf_filename("  Grace  "), "CV__Grace_.pdf");
    }

    #[test]
    fn filename_keeps_edge_whitespace_as_underscores() {
        assert_eq!(pdf_filename(" Ada  Lovelace "), "CV__Ada_Lovelace_.pdf");
    }

    #[test]
    fn filename_never_escapes_directory() {
        assert_eq!(pdf_filename("../etc/passwd"), "CV_.._etc_passwd.pdf");
        assert_eq!(pdf_filename(r"a\b"), "CV_a_b.pdf");
        assert_eq!(pdf_filename("x / y"), "CV_x_y.pdf");
        assert_eq!(pdf_filename("a/ \\b"), "CV_a_b.pdf");
    }

    struct FakeCv {
        fail: bool,
    }

    impl CvSource for FakeCv {
        async fn html(&self, staff_id: StaffId) -> Result<String, CoreError> {
            if self.fail {
                return Err(CoreError::NotFound {
                    message: format!("No CV for staff {staff_id}"),
                });
            }
            Ok(format!("<h1>{staff_id}</h1>"))
        }

        async fn pdf(&self, _staff_id: StaffId) -> Result<Bytes, CoreError> {
            if self.fail {
                return Err(CoreError::Api {
                    message: "render failed".into(),
                    status: Some(500),
                });
            }
            Ok(Bytes::from_static(b"%PDF-1.7"))
        }
    }

    #[tokio::test]
    async fn generate_and_clear() {
        let cv = CvController::new(FakeCv { fail: false }, ".");

        let html = cv.generate_cv(StaffId(3)).await.unwrap();
        assert_eq!(html, "<h1>3</h1>");
        assert_eq!(cv.html().as_deref(), Some("<h1>3</h1>"));
        assert!(!cv.is_loading());

        cv.clear();
        assert_eq!(cv.state(), CvState::default());
    }

    #[tokio::test]
    async fn failed_generate_sets_error() {
        let cv = CvController::new(FakeCv { fail: true }, ".");
        assert_eq!(cv.generate_cv(StaffId(3)).await, None);
        assert_eq!(cv.error().unwrap().message(), "Failed to generate CV");
        assert!(!cv.is_loading());
    }

    #[tokio::test]
    async fn download_writes_pdf_into_dir() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("cvs");
        let cv = CvController::new(FakeCv { fail: false }, &target);

        let path = cv.download_pdf(StaffId(3), "Ada Lovelace").await.unwrap();

        assert_eq!(path, target.join("CV_Ada_Lovelace.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.7");
        assert_eq!(cv.error(), None);
    }

    #[tokio::test]
    async fn failed_download_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let cv = CvController::new(FakeCv { fail: true }, dir.path());

        assert_eq!(cv.download_pdf(StaffId(3), "Ada").await, None);
        assert_eq!(cv.error().unwrap().message(), "Failed to download CV PDF");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
