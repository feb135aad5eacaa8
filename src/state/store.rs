//! Table Stores
//!
//! One reactive store per hosted table: fetch the rows, hold them in
//! signals, reload after every mutation. Stores are independent; there
//! are no invariants spanning tables.

use leptos::*;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use crate::loader::classify::is_chunk_failure;
use crate::loader::{BoundaryHandle, LoadError};

use super::global::GlobalState;

type FetchFuture<T> = Pin<Box<dyn Future<Output = Result<Vec<T>, String>>>>;
type FetchFn<T> = Rc<dyn Fn() -> FetchFuture<T>>;

/// Reactive cache of one backing table.
#[derive(Clone)]
pub struct TableStore<T: Clone + 'static> {
    pub rows: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    fetch: FetchFn<T>,
}

impl<T: Clone + 'static> TableStore<T> {
    pub fn new(fetch: impl Fn() -> FetchFuture<T> + 'static) -> Self {
        Self {
            rows: create_rw_signal(Vec::new()),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            fetch: Rc::new(fetch),
        }
    }

    /// Fetch rows into the signals. Failures that look like a dropped
    /// network escalate to the retry boundary when one is around; the
    /// rest land in the error signal.
    pub fn load(&self, boundary: Option<BoundaryHandle>) {
        let store = self.clone();
        spawn_local(async move {
            store.loading.set(true);
            match (store.fetch)().await {
                Ok(rows) => {
                    store.rows.set(rows);
                    store.error.set(None);
                }
                Err(message) => {
                    let error = LoadError::network(message.clone());
                    match boundary {
                        Some(handle) if is_chunk_failure(&error) => handle.report(error),
                        _ => store.error.set(Some(message)),
                    }
                }
            }
            store.loading.set(false);
        });
    }

    /// Awaitable reload, used after mutations.
    pub async fn refresh(&self) {
        self.loading.set(true);
        match (self.fetch)().await {
            Ok(rows) => {
                self.rows.set(rows);
                self.error.set(None);
            }
            Err(message) => self.error.set(Some(message)),
        }
        self.loading.set(false);
    }

    /// Run a mutation, toast the outcome, reload the rows. The global
    /// loading flag covers the whole round trip.
    pub fn mutate<Fut>(&self, state: GlobalState, operation: Fut, success_message: &'static str)
    where
        Fut: Future<Output = Result<(), String>> + 'static,
    {
        let store = self.clone();
        spawn_local(async move {
            state.loading.set(true);
            match operation.await {
                Ok(()) => {
                    state.show_success(success_message);
                    store.refresh().await;
                }
                Err(message) => state.show_error(&message),
            }
            state.loading.set(false);
        });
    }
}
