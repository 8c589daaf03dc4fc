// ── Controller state snapshots ──

use staffdesk_api::Pagination;
use tokio::sync::watch;

use crate::error::ErrorKind;

/// Snapshot of one collection controller.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<T> {
    /// Server order, replaced wholesale by every successful fetch.
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<ErrorKind>,
    /// Server echo for paginated catalogs; `None` for join listings.
    pub pagination: Option<Pagination>,
    /// Item count reported by the server, from either envelope shape.
    pub total: Option<u64>,
    /// Page requested by the most recent fetch. Mutations refetch this page.
    pub page: u32,
    /// Entity loaded by `fetch_by_id` or picked by the operator.
    pub selected: Option<T>,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            pagination: None,
            total: None,
            page: 1,
            selected: None,
        }
    }
}

/// Snapshot of the CV controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CvState {
    /// Last rendered CV markup, verbatim from the server.
    pub html: Option<String>,
    pub loading: bool,
    pub error: Option<ErrorKind>,
}

/// The loading/error pair every controller snapshot carries.
pub(crate) trait Busy {
    fn set_loading(&mut self, loading: bool);
    fn set_error(&mut self, error: Option<ErrorKind>);
}

impl<T> Busy for CollectionState<T> {
    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn set_error(&mut self, error: Option<ErrorKind>) {
        self.error = error;
    }
}

impl Busy for CvState {
    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn set_error(&mut self, error: Option<ErrorKind>) {
        self.error = error;
    }
}

/// Clears `loading` when dropped, whichever way the operation exits.
pub(crate) struct LoadingGuard<'a, S: Busy> {
    state: &'a watch::Sender<S>,
}

impl<'a, S: Busy> LoadingGuard<'a, S> {
    /// Enter the loading state: `loading = true`, previous error cleared.
    pub(crate) fn begin(state: &'a watch::Sender<S>) -> Self {
        state.send_modify(|s| {
            s.set_loading(true);
            s.set_error(None);
        });
        Self { state }
    }
}

impl<S: Busy> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        self.state.send_modify(|s| s.set_loading(false));
    }
}
