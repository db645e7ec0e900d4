//! Resource store - client-side cache of a server-owned collection
//!
//! One store instance per collection (courses, content). The raw collection
//! is the source of truth; the filtered view is recomputed from it and never
//! mutated directly. Mutations are request-then-reconcile: local state only
//! changes after the gateway confirms.

use crate::error::Result;
use crate::interface::{EnrollmentApi, MediaApi, ResourceApi};
use crate::model::{Content, Course, MediaAsset, Record, RecordFilter};

/// Handle for one in-flight collection read. Obtained from `begin_fetch` and
/// redeemed with `complete_fetch`; only the most recently issued ticket can
/// still apply its outcome, so superseded responses and responses arriving
/// after an unmount are discarded instead of clobbering newer data.
#[derive(Debug)]
#[must_use]
pub struct FetchTicket {
    seq: u64,
}

pub struct ResourceStore<T: Record, A> {
    gateway: A,
    records: Vec<T>,
    visible: Vec<T>,
    filter: T::Filter,
    current: Option<T>,
    is_loading: bool,
    error: Option<String>,
    fetch_seq: u64,
}

impl<T: Record, A> ResourceStore<T, A> {
    pub fn new(gateway: A) -> Self {
        ResourceStore {
            gateway,
            records: Vec::new(),
            visible: Vec::new(),
            filter: T::Filter::default(),
            current: None,
            is_loading: false,
            error: None,
            fetch_seq: 0,
        }
    }

    /// The raw collection, as last confirmed by the gateway.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// The derived filtered view.
    pub fn visible(&self) -> &[T] {
        &self.visible
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn filter(&self) -> &T::Filter {
        &self.filter
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a collection read. Issuing a new ticket supersedes every ticket
    /// issued before it.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.fetch_seq += 1;
        self.is_loading = true;
        self.error = None;
        FetchTicket {
            seq: self.fetch_seq,
        }
    }

    /// Apply the outcome of a read. Returns false when the ticket was
    /// superseded or invalidated, in which case the store is untouched.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, outcome: Result<Vec<T>>) -> bool {
        if ticket.seq != self.fetch_seq {
            log::debug!("discarding superseded fetch #{}", ticket.seq);
            return false;
        }

        self.is_loading = false;
        match outcome {
            Ok(rows) => {
                // full replacement, never an incremental merge
                self.records = rows;
                self.rebuild_visible();
            }
            Err(err) => {
                // previous collection stays available while stale
                log::warn!("fetch failed: {err:?}");
                self.error = Some(err.to_string());
            }
        }
        true
    }

    /// Invalidate every in-flight ticket, e.g. when the owning view unmounts.
    pub fn discard_pending(&mut self) {
        self.fetch_seq += 1;
        self.is_loading = false;
    }

    /// Recompute the filtered view. Pure and synchronous; never a network
    /// call.
    pub fn set_filter(&mut self, filter: T::Filter) {
        self.filter = filter;
        self.rebuild_visible();
    }

    pub fn clear_filter(&mut self) {
        self.filter = T::Filter::default();
        self.rebuild_visible();
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    fn rebuild_visible(&mut self) {
        self.visible = self
            .records
            .iter()
            .filter(|record| self.filter.matches(record))
            .cloned()
            .collect();
    }
}

impl<T, A> ResourceStore<T, A>
where
    T: Record,
    A: ResourceApi<T>,
{
    /// Read the whole collection. The outcome lands in store state: the raw
    /// collection on success, an inline error (with the previous collection
    /// intact) on failure.
    pub async fn fetch_all(&mut self, parent: Option<&str>) {
        let ticket = self.begin_fetch();
        let outcome = self.gateway.fetch_all(parent).await;
        self.complete_fetch(ticket, outcome);
    }

    /// Read a single record into the current slot.
    pub async fn open(&mut self, id: &str) -> Result<T> {
        match self.gateway.fetch_one(id).await {
            Ok(record) => {
                self.error = None;
                self.current = Some(record.clone());
                Ok(record)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub async fn create(&mut self, draft: &T::Draft) -> Result<T> {
        self.error = None;
        match self.gateway.create(draft).await {
            Ok(record) => {
                self.records.push(record.clone());
                self.rebuild_visible();
                Ok(record)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub async fn update(&mut self, id: &str, patch: &T::Patch) -> Result<T> {
        self.error = None;
        match self.gateway.update(id, patch).await {
            Ok(record) => {
                if let Some(slot) = self.records.iter_mut().find(|r| r.id() == id) {
                    *slot = record.clone();
                }
                if self.current.as_ref().is_some_and(|c| c.id() == id) {
                    self.current = Some(record.clone());
                }
                self.rebuild_visible();
                Ok(record)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub async fn delete(&mut self, id: &str) -> Result<()> {
        self.error = None;
        match self.gateway.delete(id).await {
            Ok(()) => {
                self.records.retain(|r| r.id() != id);
                if self.current.as_ref().is_some_and(|c| c.id() == id) {
                    self.current = None;
                }
                self.rebuild_visible();
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}

impl<A> ResourceStore<Course, A>
where
    A: ResourceApi<Course> + EnrollmentApi,
{
    /// Enroll in a course; the collection itself is unaffected.
    pub async fn enroll(&mut self, course_id: &str) -> Result<String> {
        match self.gateway.enroll(course_id).await {
            Ok(message) => Ok(message),
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}

impl<A> ResourceStore<Content, A>
where
    A: ResourceApi<Content> + MediaApi,
{
    /// Upload a media file; the caller attaches the returned asset to a
    /// content record explicitly.
    pub async fn upload(
        &mut self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<MediaAsset> {
        match self.gateway.upload(file_name, content_type, bytes).await {
            Ok(asset) => Ok(asset),
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}
