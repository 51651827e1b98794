//! Todo Query
//!
//! Holds the last list-all snapshot and refreshes it on demand.
//! Retry behaviour is a pluggable [`RetryPolicy`]; waiting between attempts
//! goes through an injected [`Sleep`] so the same code runs in the browser
//! (gloo timers) and in tests (no wait).

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::{FutureExt, LocalBoxFuture};
use log::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::models::TodoItem;
use crate::service::TodoService;

/// Async wait used between retries
pub type Sleep = Rc<dyn Fn(Duration) -> LocalBoxFuture<'static, ()>>;

/// Browser timer sleep
pub fn browser_sleep() -> Sleep {
    Rc::new(|delay: Duration| gloo_timers::future::sleep(delay).boxed_local())
}

/// Decides whether a failed read is tried again
pub trait RetryPolicy {
    /// Delay before retry number `attempt` (1-based), or `None` to give up
    fn next_delay(&self, attempt: u32, error: &ServiceError) -> Option<Duration>;
}

/// Never retry
pub struct NoRetry;

impl RetryPolicy for NoRetry {
    fn next_delay(&self, _attempt: u32, _error: &ServiceError) -> Option<Duration> {
        None
    }
}

/// Bounded retries with doubling delay.
///
/// Missing bridge and malformed answers are not retried: another attempt
/// cannot fix them.
#[derive(Debug, Clone)]
pub struct ExponentialRetry {
    pub max_retries: u32,
    pub base: Duration,
    pub cap: Duration,
}

impl ExponentialRetry {
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            base: Duration::from_millis(1000),
            cap: Duration::from_secs(30),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.query_retries)
    }
}

impl RetryPolicy for ExponentialRetry {
    fn next_delay(&self, attempt: u32, error: &ServiceError) -> Option<Duration> {
        if attempt == 0 || attempt > self.max_retries {
            return None;
        }
        if matches!(error, ServiceError::Unavailable | ServiceError::Decode(_)) {
            return None;
        }
        let factor = 1u32.checked_shl(attempt - 1).unwrap_or(u32::MAX);
        Some(self.base.saturating_mul(factor).min(self.cap))
    }
}

/// Injectable source of the todo snapshot
#[async_trait(?Send)]
pub trait DataSource {
    /// Re-read the full list and replace the snapshot
    async fn refresh(&self) -> ServiceResult<()>;

    /// Last successfully read list; `None` before the first read lands
    fn snapshot(&self) -> Option<Rc<Vec<TodoItem>>>;

    fn is_loading(&self) -> bool;

    /// Error of the most recent applied read, cleared by the next success
    fn last_error(&self) -> Option<ServiceError>;
}

#[derive(Default)]
struct QueryState {
    snapshot: Option<Rc<Vec<TodoItem>>>,
    last_error: Option<ServiceError>,
    /// Id of the newest issued read
    generation: u64,
    pending: usize,
}

/// [`DataSource`] reading through a [`TodoService`]
pub struct QueryDataSource {
    service: Rc<dyn TodoService>,
    retry: Box<dyn RetryPolicy>,
    sleep: Sleep,
    state: RefCell<QueryState>,
}

impl QueryDataSource {
    pub fn new(service: Rc<dyn TodoService>, retry: Box<dyn RetryPolicy>, sleep: Sleep) -> Self {
        Self {
            service,
            retry,
            sleep,
            state: RefCell::new(QueryState::default()),
        }
    }

    async fn fetch_with_retry(&self) -> ServiceResult<Vec<TodoItem>> {
        let mut attempt = 0;
        loop {
            match self.service.list_all().await {
                Ok(items) => return Ok(items),
                Err(err) => {
                    attempt += 1;
                    match self.retry.next_delay(attempt, &err) {
                        Some(delay) => {
                            warn!("[QUERY] list-all failed ({}), retry {} in {:?}", err, attempt, delay);
                            (self.sleep)(delay).await;
                        }
                        None => return Err(err),
                    }
                }
            }
        }
    }
}

#[async_trait(?Send)]
impl DataSource for QueryDataSource {
    async fn refresh(&self) -> ServiceResult<()> {
        let generation = {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            state.pending += 1;
            state.generation
        };

        let result = self.fetch_with_retry().await;

        let mut state = self.state.borrow_mut();
        state.pending -= 1;
        if generation != state.generation {
            debug!("[QUERY] dropping stale read #{} (newest #{})", generation, state.generation);
            return result.map(|_| ());
        }
        match result {
            Ok(items) => {
                debug!("[QUERY] loaded {} todos", items.len());
                state.snapshot = Some(Rc::new(items));
                state.last_error = None;
                Ok(())
            }
            Err(err) => {
                warn!("[QUERY] list-all failed: {}", err);
                state.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    fn snapshot(&self) -> Option<Rc<Vec<TodoItem>>> {
        self.state.borrow().snapshot.clone()
    }

    fn is_loading(&self) -> bool {
        self.state.borrow().pending > 0
    }

    fn last_error(&self) -> Option<ServiceError> {
        self.state.borrow().last_error.clone()
    }
}
