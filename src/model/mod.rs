pub mod dtos;
pub mod structs;

pub use dtos::*;
pub use structs::*;

/// A server-owned record cached by a resource store. The associated types
/// tie each record to its create/update payloads and its client-side filter.
pub trait Record: Clone {
    type Draft;
    type Patch;
    type Filter: RecordFilter<Self> + Default + Clone;

    fn id(&self) -> &str;
}

/// Client-side filter predicate. Filtering is pure and offline; an empty
/// (default) filter matches every record.
pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;
}
