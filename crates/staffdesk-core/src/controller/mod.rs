// ── Controllers ──
//
// Stateful owners of controller snapshots, observable through `watch`
// channels. One instance per collection; nothing is shared between them.

mod collection;
mod cv;
mod state;

pub use collection::CollectionController;
pub use cv::{CvController, pdf_filename};
pub use state::{CollectionState, CvState};
