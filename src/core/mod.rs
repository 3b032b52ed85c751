pub mod catalog;
pub mod selection;
pub mod types;

pub use catalog::Catalog;
pub use selection::SelectionSet;
pub use types::{
    ActionKind, Batch, PackageRecord, ProgressEvent, SEARCH_CATEGORY, Summary, WorkerState,
};
