//! Load state for a remotely fetched collection.
//!
//! DESIGN
//! ======
//! Pages keep one `ListState` per listing so loading, error, and data are
//! always updated together.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::net::error::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    /// Total reported by the server, which may exceed `items.len()`.
    pub total: usize,
    pub loading: bool,
    pub error: Option<String>,
    /// Id of the latest fetch; results from older fetches are dropped.
    generation: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), total: 0, loading: false, error: None, generation: 0 }
    }
}

impl<T> ListState<T> {
    /// Mark a fetch as started and return its generation. Existing items stay
    /// visible until it completes.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Record a completed fetch. Returns `false` and changes nothing when a
    /// newer fetch has started since `generation` was issued.
    pub fn finish(&mut self, generation: u64, result: Result<(Vec<T>, usize), ApiError>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok((items, total)) => {
                self.total = total.max(items.len());
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e.user_message()),
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty()
    }
}
