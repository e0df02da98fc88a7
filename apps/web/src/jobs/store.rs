//! Job store: the shared state container every dashboard view reads from.
//!
//! Owns the per-user job list, the "fetching"/"loading" activity flags and
//! the in-flight registry that keeps a card action from running twice.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::RwLock;
use tracing::warn;

use crate::jobs::backend::{BackendError, JobBackend};
use crate::jobs::card::CardAction;
use crate::models::job::{Job, MutationResponse, UpdateJobPayload};

#[derive(Default)]
struct Activity {
    // Counters, not booleans: overlapping requests must not clear each other.
    fetching: HashMap<String, usize>,
    loading: HashMap<String, usize>,
    in_flight: HashSet<(String, CardAction)>,
}

#[derive(Debug, Clone, Copy)]
enum Counter {
    Fetching,
    Loading,
}

pub struct JobStore {
    backend: Arc<dyn JobBackend>,
    jobs: RwLock<HashMap<String, Vec<Job>>>,
    activity: Mutex<Activity>,
}

impl JobStore {
    pub fn new(backend: Arc<dyn JobBackend>) -> Self {
        Self {
            backend,
            jobs: RwLock::new(HashMap::new()),
            activity: Mutex::new(Activity::default()),
        }
    }

    fn activity(&self) -> MutexGuard<'_, Activity> {
        self.activity.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_fetching_jobs(&self, user_id: &str) -> bool {
        self.activity().fetching.contains_key(user_id)
    }

    pub fn is_loading(&self, user_id: &str) -> bool {
        self.activity().loading.contains_key(user_id)
    }

    fn track(&self, counter: Counter, user_id: &str) -> Pending<'_> {
        let mut activity = self.activity();
        let map = match counter {
            Counter::Fetching => &mut activity.fetching,
            Counter::Loading => &mut activity.loading,
        };
        *map.entry(user_id.to_string()).or_insert(0) += 1;
        Pending {
            store: self,
            counter,
            user_id: user_id.to_string(),
        }
    }

    /// Marks `action` on `job_id` as in flight. `None` when it already is.
    pub fn begin(&self, job_id: &str, action: CardAction) -> Option<InFlight<'_>> {
        let key = (job_id.to_string(), action);
        if !self.activity().in_flight.insert(key.clone()) {
            warn!("{action} already in flight for job {job_id}");
            return None;
        }
        Some(InFlight { store: self, key })
    }

    /// Refetches `user_id`'s job list and replaces the cached copy wholesale.
    pub async fn fetch_jobs(&self, user_id: &str) -> Result<Vec<Job>, BackendError> {
        let _pending = self.track(Counter::Fetching, user_id);
        let jobs = self.backend.fetch_jobs(user_id).await?;
        self.jobs
            .write()
            .await
            .insert(user_id.to_string(), jobs.clone());
        Ok(jobs)
    }

    /// Last fetched list for `user_id`, if any.
    pub async fn cached_jobs(&self, user_id: &str) -> Option<Vec<Job>> {
        self.jobs.read().await.get(user_id).cloned()
    }

    pub async fn fetch_job(&self, user_id: &str, job_id: &str) -> Result<Job, BackendError> {
        let _pending = self.track(Counter::Loading, user_id);
        self.backend.fetch_job(job_id).await
    }

    pub async fn update_job(&self, job_id: &str, payload: &UpdateJobPayload) -> MutationResponse {
        let _pending = self.track(Counter::Loading, &payload.user_id);
        self.backend.update_job(job_id, payload).await
    }

    pub async fn remove_job(&self, user_id: &str, job_id: &str) -> MutationResponse {
        let _pending = self.track(Counter::Loading, user_id);
        self.backend.remove_job(job_id).await
    }
}

/// Decrements an activity counter when dropped.
struct Pending<'a> {
    store: &'a JobStore,
    counter: Counter,
    user_id: String,
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        let mut activity = self.store.activity();
        let map = match self.counter {
            Counter::Fetching => &mut activity.fetching,
            Counter::Loading => &mut activity.loading,
        };
        if let Some(count) = map.get_mut(&self.user_id) {
            *count -= 1;
            if *count == 0 {
                map.remove(&self.user_id);
            }
        }
    }
}

/// Releases an in-flight card action when dropped, including on early return
/// or when the request future is cancelled.
pub struct InFlight<'a> {
    store: &'a JobStore,
    key: (String, CardAction),
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.store.activity().in_flight.remove(&self.key);
    }
}
