//! Todo View-Model
//!
//! Owns the input text, the single in-flight slot for list mutations and
//! the failure notices. Every successful mutation is followed by a refresh
//! of the snapshot held by the [`DataSource`].
//!
//! Mutating list actions move through
//! `idle -> in-flight -> (success -> refresh | failure) -> idle`.
//! Only one of toggle/delete/clear may occupy the slot at a time; a second
//! request while it is occupied is ignored without any remote call.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use log::{debug, info, warn};

use crate::error::{ServiceError, ServiceResult};
use crate::models::{TodoId, TodoItem, TodoStats};
use crate::query::DataSource;
use crate::service::TodoService;
use crate::stats::derive_stats;

/// Callback run after every observable state change
pub type Listener = Rc<dyn Fn()>;

/// The single in-flight slot for list mutations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InFlight {
    #[default]
    Idle,
    Toggling(TodoId),
    Deleting(TodoId),
    Clearing,
}

impl InFlight {
    pub fn is_idle(&self) -> bool {
        matches!(self, InFlight::Idle)
    }
}

/// User action a notice refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Toggle,
    Delete,
    ClearCompleted,
}

impl Action {
    fn describe(&self) -> &'static str {
        match self {
            Action::Add => "adding todo",
            Action::Toggle => "updating todo",
            Action::Delete => "deleting todo",
            Action::ClearCompleted => "clearing completed todos",
        }
    }
}

/// Transient, non-blocking failure notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub action: Action,
    pub message: String,
}

/// What became of a requested action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Precondition not met; nothing was sent
    Ignored,
    Done,
    Failed(ServiceError),
}

#[derive(Default)]
struct State {
    input: String,
    adding: bool,
    in_flight: InFlight,
    notices: Vec<Notice>,
    next_notice: u64,
}

struct Inner {
    service: Rc<dyn TodoService>,
    source: Rc<dyn DataSource>,
    state: RefCell<State>,
    listeners: RefCell<Vec<Listener>>,
}

/// Interaction layer between the UI, the todo service and the snapshot.
/// Cheap to clone; clones share state.
#[derive(Clone)]
pub struct TodoViewModel {
    inner: Rc<Inner>,
}

impl TodoViewModel {
    pub fn new(service: Rc<dyn TodoService>, source: Rc<dyn DataSource>) -> Self {
        Self {
            inner: Rc::new(Inner {
                service,
                source,
                state: RefCell::new(State::default()),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn subscribe(&self, listener: Listener) {
        self.inner.listeners.borrow_mut().push(listener);
    }

    fn notify(&self) {
        let listeners = self.inner.listeners.borrow().clone();
        for listener in listeners {
            listener();
        }
    }

    // ========================
    // Read accessors
    // ========================

    pub fn input(&self) -> String {
        self.inner.state.borrow().input.clone()
    }

    pub fn is_adding(&self) -> bool {
        self.inner.state.borrow().adding
    }

    /// Add is possible: non-blank input and no add in flight
    pub fn can_add(&self) -> bool {
        let state = self.inner.state.borrow();
        !state.adding && !state.input.trim().is_empty()
    }

    pub fn in_flight(&self) -> InFlight {
        self.inner.state.borrow().in_flight
    }

    /// Busy flag for the list controls
    pub fn is_busy(&self) -> bool {
        !self.in_flight().is_idle()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.inner.state.borrow().notices.clone()
    }

    pub fn snapshot(&self) -> Option<Rc<Vec<TodoItem>>> {
        self.inner.source.snapshot()
    }

    pub fn stats(&self) -> TodoStats {
        let snapshot = self.snapshot();
        derive_stats(snapshot.as_ref().map(|items| items.as_slice()))
    }

    pub fn is_loading(&self) -> bool {
        self.inner.source.is_loading()
    }

    pub fn load_error(&self) -> Option<ServiceError> {
        self.inner.source.last_error()
    }

    // ========================
    // Local state
    // ========================

    pub fn set_input(&self, text: impl Into<String>) {
        self.inner.state.borrow_mut().input = text.into();
        self.notify();
    }

    pub fn dismiss_notice(&self, id: u64) {
        let removed = {
            let mut state = self.inner.state.borrow_mut();
            let before = state.notices.len();
            state.notices.retain(|n| n.id != id);
            state.notices.len() != before
        };
        if removed {
            self.notify();
        }
    }

    fn raise_notice(&self, action: Action, err: &ServiceError) {
        warn!("[VM] {} failed: {}", action.describe(), err);
        {
            let mut state = self.inner.state.borrow_mut();
            let id = state.next_notice;
            state.next_notice += 1;
            state.notices.push(Notice {
                id,
                action,
                message: format!("Error {}: {}", action.describe(), err),
            });
        }
        self.notify();
    }

    // ========================
    // Reads
    // ========================

    /// Initial load when the view appears
    pub async fn mount(&self) -> Outcome {
        self.refresh().await
    }

    /// Re-read the whole list, replacing the snapshot
    pub async fn refresh(&self) -> Outcome {
        self.notify();
        let result = self.inner.source.refresh().await;
        self.notify();
        match result {
            Ok(()) => Outcome::Done,
            Err(err) => Outcome::Failed(err),
        }
    }

    // ========================
    // Mutations
    // ========================

    /// Submit the input text as a new todo.
    /// Blank input or an add already in flight is ignored.
    pub async fn add(&self) -> Outcome {
        let text = {
            let mut state = self.inner.state.borrow_mut();
            let text = state.input.trim().to_string();
            if state.adding || text.is_empty() {
                return Outcome::Ignored;
            }
            state.adding = true;
            text
        };
        self.notify();

        let outcome = match self.inner.service.add(&text).await {
            Ok(id) => {
                info!("[VM] added todo #{}", id);
                self.inner.state.borrow_mut().input.clear();
                self.notify();
                self.refresh().await;
                Outcome::Done
            }
            Err(err) => {
                self.raise_notice(Action::Add, &err);
                Outcome::Failed(err)
            }
        };

        self.inner.state.borrow_mut().adding = false;
        self.notify();
        outcome
    }

    pub async fn toggle(&self, id: TodoId) -> Outcome {
        self.run_list_action(
            InFlight::Toggling(id),
            Action::Toggle,
            || self.inner.service.toggle(id),
            |found| {
                if !*found {
                    warn!("[VM] toggle: todo #{} not found for this caller", id);
                }
                true
            },
        )
        .await
    }

    pub async fn delete(&self, id: TodoId) -> Outcome {
        self.run_list_action(
            InFlight::Deleting(id),
            Action::Delete,
            || self.inner.service.delete(id),
            |found| {
                if !*found {
                    warn!("[VM] delete: todo #{} not found for this caller", id);
                }
                true
            },
        )
        .await
    }

    /// Remove all completed todos; refresh only when something was removed
    pub async fn clear_completed(&self) -> Outcome {
        self.run_list_action(
            InFlight::Clearing,
            Action::ClearCompleted,
            || self.inner.service.clear_completed(),
            |removed| {
                debug!("[VM] cleared {} completed todos", removed);
                *removed > 0
            },
        )
        .await
    }

    async fn run_list_action<T, F, Fut>(
        &self,
        slot: InFlight,
        action: Action,
        call: F,
        needs_refresh: impl FnOnce(&T) -> bool,
    ) -> Outcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ServiceResult<T>>,
    {
        {
            let mut state = self.inner.state.borrow_mut();
            if !state.in_flight.is_idle() {
                debug!("[VM] {:?} ignored while {:?}", slot, state.in_flight);
                return Outcome::Ignored;
            }
            state.in_flight = slot;
        }
        self.notify();

        let outcome = match call().await {
            Ok(value) => {
                if needs_refresh(&value) {
                    self.refresh().await;
                }
                Outcome::Done
            }
            Err(err) => {
                self.raise_notice(action, &err);
                Outcome::Failed(err)
            }
        };

        self.inner.state.borrow_mut().in_flight = InFlight::Idle;
        self.notify();
        outcome
    }
}
