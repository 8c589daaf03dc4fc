// ── Collection controller ──
//
// Owns one entity collection's fetch/mutate lifecycle. Every operation runs
// Idle -> Loading -> Idle, with `loading` cleared by a drop guard however the
// operation exits. Mutations never touch `items` directly: on success they
// refetch the current page so the list always mirrors the server.
//
// Operations are not serialized against each other. Two overlapping calls on
// the same controller apply their state updates in completion order, so the
// last response to land wins. In-flight requests are never cancelled; a
// response arriving after the caller lost interest still updates state.

use tokio::sync::watch;
use tracing::{debug, warn};

use staffdesk_api::{DEFAULT_PAGE_LIMIT, Pagination};

use super::state::{CollectionState, LoadingGuard};
use crate::error::{CoreError, ErrorKind};
use crate::pagination::PageCursor;
use crate::repository::{CollectionSource, Editable, Linkable, Lookup, OwnerKey};
use crate::resolver::{self, Keyed, LinksTo};
use crate::validation::{Validate, ValidationError};

/// Stateful controller over a single [`CollectionSource`].
pub struct CollectionController<S: CollectionSource> {
    source: S,
    owner: S::Owner,
    limit: u32,
    state: watch::Sender<CollectionState<S::Entity>>,
}

impl<S: CollectionSource<Owner = ()>> CollectionController<S> {
    /// Controller over an unscoped catalog, paged by `limit`.
    pub fn catalog(source: S, limit: u32) -> Self {
        Self::new(source, (), limit)
    }
}

impl<S: CollectionSource> CollectionController<S> {
    pub fn new(source: S, owner: S::Owner, limit: u32) -> Self {
        let (state, _) = watch::channel(CollectionState::default());
        Self {
            source,
            owner,
            limit,
            state,
        }
    }

    /// Controller over a collection that belongs to `owner`.
    ///
    /// An unset owner is allowed; fetches are skipped until one is chosen.
    pub fn scoped(source: S, owner: S::Owner) -> Self {
        Self::new(source, owner, DEFAULT_PAGE_LIMIT)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn owner(&self) -> S::Owner {
        self.owner
    }

    /// Point the controller at another owner. Items are kept until the next
    /// fetch replaces them.
    pub fn set_owner(&mut self, owner: S::Owner) {
        self.owner = owner;
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Override the page size.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// Load `page` (1-based) from the server, replacing `items` and
    /// pagination. A failure sets `error` and leaves `items` untouched.
    ///
    /// Without an owner this returns immediately and makes no request.
    pub async fn fetch(&self, page: u32) {
        if !self.owner.is_present() {
            debug!(collection = S::PLURAL, "no owner selected, skipping fetch");
            return;
        }

        let page = page.max(1);
        let _loading = LoadingGuard::begin(&self.state);
        self.state.send_modify(|s| s.page = page);

        match self.source.list(self.owner, page, self.limit).await {
            Ok(resp) => {
                debug!(
                    collection = S::PLURAL,
                    page,
                    count = resp.data.len(),
                    "fetched collection"
                );
                self.state.send_modify(|s| {
                    s.total = resp.pagination.map(|p| p.total).or(resp.total);
                    s.pagination = resp.pagination;
                    s.items = resp.data;
                });
            }
            Err(e) => self.fail(format!("Failed to fetch {}", S::PLURAL), &e),
        }
    }

    /// Refetch the page last requested.
    pub async fn refresh(&self) {
        self.fetch(self.current_page()).await;
    }

    /// Cursor over the last fetched page of a paginated collection.
    ///
    /// `None` until the server has reported a total.
    pub fn cursor(&self) -> Option<PageCursor> {
        if !S::PAGINATED {
            return None;
        }
        self.state.borrow().pagination.map(PageCursor::from_pagination)
    }

    /// Fetch `page` after checking it against the known page count.
    ///
    /// An out-of-range page returns `false` without a request and leaves the
    /// state alone. Page 1 is always allowed. With no known total the page is
    /// fetched unchecked.
    pub async fn go_to_page(&self, page: u32) -> bool {
        if let Some(mut cursor) = self.cursor() {
            if page != 1 && !cursor.go_to(page) {
                debug!(
                    collection = S::PLURAL,
                    page,
                    pages = cursor.total_pages(),
                    "page out of range, not fetching"
                );
                return false;
            }
        }
        self.fetch(page).await;
        true
    }

    pub fn current_page(&self) -> u32 {
        self.state.borrow().page
    }

    /// Clone of the current snapshot.
    pub fn state(&self) -> CollectionState<S::Entity> {
        self.state.borrow().clone()
    }

    pub fn items(&self) -> Vec<S::Entity> {
        self.state.borrow().items.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn error(&self) -> Option<ErrorKind> {
        self.state.borrow().error.clone()
    }

    pub fn pagination(&self) -> Option<Pagination> {
        self.state.borrow().pagination
    }

    pub fn selected(&self) -> Option<S::Entity> {
        self.state.borrow().selected.clone()
    }

    /// Receive every state change from now on.
    pub fn subscribe(&self) -> watch::Receiver<CollectionState<S::Entity>> {
        self.state.subscribe()
    }

    pub fn select(&self, entity: S::Entity) {
        self.state.send_modify(|s| s.selected = Some(entity));
    }

    pub fn clear_selection(&self) {
        self.state.send_modify(|s| s.selected = None);
    }

    /// Entries of `catalog` not yet linked from this collection.
    pub fn available<C>(&self, catalog: &[C]) -> Vec<C>
    where
        C: Keyed + Clone,
        S::Entity: LinksTo<C>,
    {
        resolver::available(catalog, &self.state.borrow().items)
    }

    fn fail(&self, message: String, err: &CoreError) {
        warn!(
            collection = S::PLURAL,
            status = ?err.status(),
            error = %err,
            "{message}"
        );
        self.state
            .send_modify(|s| s.error = Some(ErrorKind::new(message)));
    }
}

// ── Mutations ───────────────────────────────────────────────────────

impl<S: Editable> CollectionController<S> {
    /// Create an entity, then refetch the current page.
    ///
    /// Returns the server's copy of the new entity. A failed refetch is
    /// reported through `error` but does not undo the create.
    pub async fn create(&self, input: &S::Create) -> Option<S::Entity> {
        let _loading = LoadingGuard::begin(&self.state);
        match self.source.create(input).await {
            Ok(created) => {
                self.refresh().await;
                Some(created)
            }
            Err(e) => {
                self.fail(format!("Failed to create {}", S::SINGULAR), &e);
                None
            }
        }
    }

    /// Update entity `id`, then refetch the current page.
    pub async fn update(&self, id: S::Id, input: &S::Update) -> bool {
        let _loading = LoadingGuard::begin(&self.state);
        match self.source.update(id, input).await {
            Ok(_) => {
                self.refresh().await;
                true
            }
            Err(e) => {
                self.fail(format!("Failed to update {}", S::SINGULAR), &e);
                false
            }
        }
    }

    /// Delete entity `id`, then refetch the current page.
    ///
    /// No confirmation happens here; that is the caller's job.
    pub async fn delete(&self, id: S::Id) -> bool {
        let _loading = LoadingGuard::begin(&self.state);
        match self.source.delete(id).await {
            Ok(()) => {
                self.refresh().await;
                true
            }
            Err(e) => {
                self.fail(format!("Failed to delete {}", S::SINGULAR), &e);
                false
            }
        }
    }

    /// Validate `input` and create it. Validation failures return before any
    /// request is made.
    pub async fn submit_create(
        &self,
        input: &S::Create,
    ) -> Result<Option<S::Entity>, ValidationError>
    where
        S::Create: Validate,
    {
        input.validate()?;
        Ok(self.create(input).await)
    }

    /// Validate `input` and apply it to entity `id`.
    pub async fn submit_update(&self, id: S::Id, input: &S::Update) -> Result<bool, ValidationError>
    where
        S::Update: Validate,
    {
        input.validate()?;
        Ok(self.update(id, input).await)
    }
}

impl<S: Lookup> CollectionController<S> {
    /// Load a single entity into the `selected` slot.
    pub async fn fetch_by_id(&self, id: S::Id) -> Option<S::Entity> {
        let _loading = LoadingGuard::begin(&self.state);
        match self.source.get(id).await {
            Ok(entity) => {
                self.select(entity.clone());
                Some(entity)
            }
            Err(e) => {
                self.fail(format!("Failed to fetch {}", S::SINGULAR), &e);
                None
            }
        }
    }
}

// ── Associations ────────────────────────────────────────────────────

impl<S: Linkable> CollectionController<S> {
    /// Link `target` to the current owner, then refetch.
    pub async fn add_association(&self, target: S::Target) -> bool {
        if !self.owner.is_present() {
            debug!(
                collection = S::PLURAL,
                target_id = %target,
                "no owner selected, skipping link"
            );
            return false;
        }

        let _loading = LoadingGuard::begin(&self.state);
        match self.source.link(self.owner, target).await {
            Ok(()) => {
                self.refresh().await;
                true
            }
            Err(e) => {
                self.fail(format!("Failed to add {}", S::SINGULAR), &e);
                false
            }
        }
    }

    /// Unlink `target` from the current owner, then refetch.
    pub async fn remove_association(&self, target: S::Target) -> bool {
        if !self.owner.is_present() {
            debug!(
                collection = S::PLURAL,
                target_id = %target,
                "no owner selected, skipping unlink"
            );
            return false;
        }

        let _loading = LoadingGuard::begin(&self.state);
        match self.source.unlink(self.owner, target).await {
            Ok(()) => {
                self.refresh().await;
                true
            }
            Err(e) => {
                self.fail(format!("Failed to remove {}", S::SINGULAR), &e);
                false
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;
    use staffdesk_api::{
        CreateSkill, ListResponse, Skill, SkillId, StaffId, StaffSkill, UpdateSkill,
    };

    use super::*;

    // ── In-memory skill catalog ─────────────────────────────────────

    #[derive(Default)]
    struct FakeSkills {
        rows: Mutex<Vec<Skill>>,
        fail: AtomicBool,
        lists: AtomicUsize,
    }

    impl FakeSkills {
        fn with(names: &[&str]) -> Self {
            let fake = Self::default();
            {
                let mut rows = fake.rows.lock().unwrap();
                for (i, name) in names.iter().enumerate() {
                    rows.push(Skill {
                        skill_id: SkillId(i64::try_from(i).unwrap() + 1),
                        skill_name: (*name).into(),
                        skill_type: None,
                    });
                }
            }
            fake
        }

        fn check(&self) -> Result<(), CoreError> {
            if self.fail.load(Ordering::SeqCst) {
                Err(CoreError::Api {
                    message: "boom".into(),
                    status: Some(500),
                })
            } else {
                Ok(())
            }
        }
    }

    impl CollectionSource for FakeSkills {
        type Entity = Skill;
        type Owner = ();

        const PLURAL: &'static str = "skills";
        const SINGULAR: &'static str = "skill";
        const PAGINATED: bool = true;

        async fn list(&self, (): (), page: u32, limit: u32) -> Result<ListResponse<Skill>, CoreError> {
            self.lists.fetch_add(1, Ordering::SeqCst);
            self.check()?;
            let rows = self.rows.lock().unwrap();
            let start = usize::try_from((page - 1) * limit).unwrap();
            let data: Vec<Skill> = rows.iter().skip(start).take(limit as usize).cloned().collect();
            Ok(ListResponse {
                data,
                pagination: Some(Pagination {
                    page,
                    limit,
                    total: rows.len() as u64,
                }),
                total: None,
            })
        }
    }

    impl Editable for FakeSkills {
        type Id = SkillId;
        type Create = CreateSkill;
        type Update = UpdateSkill;

        async fn create(&self, input: &CreateSkill) -> Result<Skill, CoreError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let next = rows.iter().map(|s| s.skill_id.0).max().unwrap_or(0) + 1;
            let skill = Skill {
                skill_id: SkillId(next),
                skill_name: input.skill_name.clone(),
                skill_type: input.skill_type.clone(),
            };
            rows.push(skill.clone());
            Ok(skill)
        }

        async fn update(&self, id: SkillId, input: &UpdateSkill) -> Result<Skill, CoreError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|s| s.skill_id == id)
                .ok_or_else(|| CoreError::NotFound {
                    message: format!("Skill {id} not found"),
                })?;
            if let Some(name) = &input.skill_name {
                row.skill_name.clone_from(name);
            }
            Ok(row.clone())
        }

        async fn delete(&self, id: SkillId) -> Result<(), CoreError> {
            self.check()?;
            self.rows.lock().unwrap().retain(|s| s.skill_id != id);
            Ok(())
        }
    }

    impl Lookup for FakeSkills {
        async fn get(&self, id: SkillId) -> Result<Skill, CoreError> {
            self.check()?;
            self.rows
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.skill_id == id)
                .cloned()
                .ok_or_else(|| CoreError::NotFound {
                    message: format!("Skill {id} not found"),
                })
        }
    }

    // ── In-memory staff-skill links ─────────────────────────────────

    #[derive(Default)]
    struct FakeStaffSkills {
        links: Mutex<Vec<StaffSkill>>,
        calls: AtomicUsize,
    }

    impl CollectionSource for FakeStaffSkills {
        type Entity = StaffSkill;
        type Owner = StaffId;

        const PLURAL: &'static str = "staff skills";
        const SINGULAR: &'static str = "skill";
        const PAGINATED: bool = false;

        async fn list(
            &self,
            staff_id: StaffId,
            _page: u32,
            _limit: u32,
        ) -> Result<ListResponse<StaffSkill>, CoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let data: Vec<StaffSkill> = self
                .links
                .lock()
                .unwrap()
                .iter()
                .filter(|l| l.staff_id == staff_id)
                .cloned()
                .collect();
            let total = Some(data.len() as u64);
            Ok(ListResponse {
                data,
                pagination: None,
                total,
            })
        }
    }

    impl Linkable for FakeStaffSkills {
        type Target = SkillId;

        async fn link(&self, staff_id: StaffId, skill_id: SkillId) -> Result<(), CoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.links.lock().unwrap().push(StaffSkill {
                staff_id,
                skill_id,
                skill_name: format!("skill {skill_id}"),
                skill_type: None,
            });
            Ok(())
        }

        async fn unlink(&self, staff_id: StaffId, skill_id: SkillId) -> Result<(), CoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.links
                .lock()
                .unwrap()
                .retain(|l| !(l.staff_id == staff_id && l.skill_id == skill_id));
            Ok(())
        }
    }

    fn names(items: &[Skill]) -> Vec<&str> {
        items.iter().map(|s| s.skill_name.as_str()).collect()
    }

    // ── Fetch ───────────────────────────────────────────────────────

    #[tokio::test]
    async fn fetch_replaces_items_and_pagination() {
        let ctl = CollectionController::catalog(FakeSkills::with(&["Rust", "Go", "SQL"]), 2);

        ctl.fetch(2).await;

        let state = ctl.state();
        assert_eq!(names(&state.items), ["SQL"]);
        assert_eq!(
            state.pagination,
            Some(Pagination {
                page: 2,
                limit: 2,
                total: 3
            })
        );
        assert_eq!(state.total, Some(3));
        assert_eq!(state.page, 2);
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn repeated_fetch_is_stable() {
        let ctl = CollectionController::catalog(FakeSkills::with(&["Rust", "Go"]), 10);
        ctl.fetch(1).await;
        let first = ctl.items();
        ctl.fetch(1).await;
        assert_eq!(ctl.items(), first);
    }

    #[tokio::test]
    async fn go_to_page_refuses_pages_past_the_end() {
        let source = FakeSkills::with(&["Rust", "Go", "SQL"]);
        let ctl = CollectionController::catalog(source, 2);
        ctl.fetch(1).await;
        assert_eq!(ctl.cursor().map(|c| c.total_pages()), Some(2));

        assert!(!ctl.go_to_page(3).await);
        assert!(!ctl.go_to_page(0).await);
        assert_eq!(ctl.source().lists.load(Ordering::SeqCst), 1);
        assert_eq!(ctl.current_page(), 1);
        assert_eq!(names(&ctl.items()), ["Rust", "Go"]);

        assert!(ctl.go_to_page(2).await);
        assert_eq!(ctl.source().lists.load(Ordering::SeqCst), 2);
        assert_eq!(names(&ctl.items()), ["SQL"]);
    }

    #[tokio::test]
    async fn go_to_page_without_total_fetches() {
        let ctl = CollectionController::catalog(FakeSkills::with(&["Rust"]), 2);
        assert_eq!(ctl.cursor(), None);
        assert!(ctl.go_to_page(5).await);
        assert_eq!(ctl.source().lists.load(Ordering::SeqCst), 1);
        assert_eq!(ctl.current_page(), 5);
    }

    #[tokio::test]
    async fn empty_catalog_still_has_page_one() {
        let ctl = CollectionController::catalog(FakeSkills::default(), 2);
        ctl.fetch(1).await;
        assert!(ctl.go_to_page(1).await);
        assert!(!ctl.go_to_page(2).await);
        assert_eq!(ctl.source().lists.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_fetch_keeps_last_good_items() {
        let ctl = CollectionController::catalog(FakeSkills::with(&["Rust"]), 10);
        ctl.fetch(1).await;

        ctl.source().fail.store(true, Ordering::SeqCst);
        ctl.fetch(1).await;

        assert_eq!(names(&ctl.items()), ["Rust"]);
        assert_eq!(ctl.error().unwrap().message(), "Failed to fetch skills");
        assert!(!ctl.is_loading());
    }

    #[tokio::test]
    async fn next_operation_clears_previous_error() {
        let ctl = CollectionController::catalog(FakeSkills::with(&["Rust"]), 10);
        ctl.source().fail.store(true, Ordering::SeqCst);
        ctl.fetch(1).await;
        assert!(ctl.error().is_some());

        ctl.source().fail.store(false, Ordering::SeqCst);
        ctl.fetch(1).await;
        assert_eq!(ctl.error(), None);
    }

    // ── Mutations ───────────────────────────────────────────────────

    #[tokio::test]
    async fn create_refetches_current_page() {
        let ctl = CollectionController::catalog(FakeSkills::with(&["Rust"]), 10);
        ctl.fetch(1).await;

        let created = ctl
            .create(&CreateSkill {
                skill_name: "Kotlin".into(),
                skill_type: Some("Technical".into()),
            })
            .await
            .unwrap();

        assert_eq!(created.skill_id, SkillId(2));
        assert_eq!(names(&ctl.items()), ["Rust", "Kotlin"]);
        assert_eq!(ctl.source().lists.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_create_leaves_items_alone() {
        let ctl = CollectionController::catalog(FakeSkills::with(&["Rust"]), 10);
        ctl.fetch(1).await;
        let before = ctl.items();

        ctl.source().fail.store(true, Ordering::SeqCst);
        let created = ctl
            .create(&CreateSkill {
                skill_name: "Kotlin".into(),
                skill_type: None,
            })
            .await;

        assert_eq!(created, None);
        assert_eq!(ctl.items(), before);
        assert_eq!(ctl.error().unwrap().message(), "Failed to create skill");
        assert!(!ctl.is_loading());
        assert_eq!(ctl.source().lists.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn update_and_delete_refetch() {
        let ctl = CollectionController::catalog(FakeSkills::with(&["Rust", "Go"]), 10);
        ctl.fetch(1).await;

        let renamed = UpdateSkill {
            skill_name: Some("Golang".into()),
            skill_type: None,
        };
        assert!(ctl.update(SkillId(2), &renamed).await);
        assert_eq!(names(&ctl.items()), ["Rust", "Golang"]);

        assert!(ctl.delete(SkillId(1)).await);
        assert!(ctl.items().iter().all(|s| s.skill_id != SkillId(1)));
    }

    #[tokio::test]
    async fn update_of_missing_entity_reports_error() {
        let ctl = CollectionController::catalog(FakeSkills::with(&["Rust"]), 10);
        let renamed = UpdateSkill {
            skill_name: Some("Go".into()),
            skill_type: None,
        };
        assert!(!ctl.update(SkillId(9), &renamed).await);
        assert_eq!(ctl.error().unwrap().message(), "Failed to update skill");
    }

    #[tokio::test]
    async fn submit_create_blocks_invalid_input() {
        let ctl = CollectionController::catalog(FakeSkills::with(&[]), 10);

        let err = ctl
            .submit_create(&CreateSkill {
                skill_name: "   ".into(),
                skill_type: None,
            })
            .await
            .unwrap_err();

        assert!(err.field("skill_name").is_some());
        assert!(ctl.source().rows.lock().unwrap().is_empty());
        assert_eq!(ctl.source().lists.load(Ordering::SeqCst), 0);
    }

    // ── Lookup ──────────────────────────────────────────────────────

    #[tokio::test]
    async fn fetch_by_id_fills_selection() {
        let ctl = CollectionController::catalog(FakeSkills::with(&["Rust", "Go"]), 10);

        let found = ctl.fetch_by_id(SkillId(2)).await.unwrap();
        assert_eq!(found.skill_name, "Go");
        assert_eq!(ctl.selected(), Some(found));

        ctl.clear_selection();
        assert_eq!(ctl.selected(), None);

        assert_eq!(ctl.fetch_by_id(SkillId(42)).await, None);
        assert_eq!(ctl.error().unwrap().message(), "Failed to fetch skill");
    }

    // ── Owner scoping and links ─────────────────────────────────────

    #[tokio::test]
    async fn unscoped_fetch_makes_no_request() {
        let ctl = CollectionController::scoped(FakeStaffSkills::default(), StaffId(0));

        ctl.fetch(1).await;
        assert!(!ctl.add_association(SkillId(1)).await);

        assert_eq!(ctl.source().calls.load(Ordering::SeqCst), 0);
        assert!(ctl.items().is_empty());
        assert!(!ctl.is_loading());
    }

    #[tokio::test]
    async fn links_refetch_and_feed_available() {
        let mut ctl = CollectionController::scoped(FakeStaffSkills::default(), StaffId(0));
        ctl.set_owner(StaffId(7));

        assert!(ctl.add_association(SkillId(2)).await);
        assert_eq!(ctl.items().len(), 1);
        assert_eq!(ctl.state().total, Some(1));
        assert_eq!(ctl.pagination(), None);
        assert_eq!(ctl.cursor(), None);

        let catalog = FakeSkills::with(&["Rust", "Go", "SQL"]);
        let catalog = catalog.rows.lock().unwrap().clone();
        let free = ctl.available(&catalog);
        assert_eq!(names(&free), ["Rust", "SQL"]);

        assert!(ctl.remove_association(SkillId(2)).await);
        assert!(ctl.items().is_empty());
        assert_eq!(ctl.available(&catalog).len(), 3);
    }

    #[tokio::test]
    async fn subscribers_see_loading_transitions() {
        let ctl = CollectionController::catalog(FakeSkills::with(&["Rust"]), 10);
        let mut rx = ctl.subscribe();

        ctl.fetch(1).await;

        assert!(rx.has_changed().unwrap());
        let seen = rx.borrow_and_update().clone();
        assert_eq!(names(&seen.items), ["Rust"]);
        assert!(!seen.loading);
    }
}
