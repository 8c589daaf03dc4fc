// Entity endpoints
//
// One file per entity family. Each file adds inherent methods to
// `ApiClient` that translate a domain operation into a fixed REST path and
// body shape. No state and no caching live here.

pub mod cv;
pub mod education;
pub mod project;
pub mod skill;
pub mod staff;
pub mod technology;
pub mod work;

/// Default page size for catalog listings.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

pub(crate) fn page_params(page: u32, limit: u32) -> [(&'static str, String); 2] {
    [("page", page.to_string()), ("limit", limit.to_string())]
}
