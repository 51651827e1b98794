//! Scripted fakes for the service and identity seams.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::future::FutureExt;

use crate::error::{AuthError, ServiceError, ServiceResult};
use crate::models::{Principal, TodoId, TodoItem};
use crate::query::Sleep;
use crate::service::{IdentityProvider, TodoService};

pub fn todo(id: u64, text: &str, completed: bool) -> TodoItem {
    TodoItem {
        id: TodoId(id),
        owner: Principal("2vxsx-fae".to_string()),
        text: text.to_string(),
        completed,
    }
}

pub fn immediate_sleep() -> Sleep {
    Rc::new(|_: Duration| futures::future::ready(()).boxed_local())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListAll,
    Add(String),
    Toggle(TodoId),
    Delete(TodoId),
    ClearCompleted,
}

/// In-memory todo service recording every call.
///
/// `hold_next` parks the next call until the returned sender fires;
/// `fail_next` makes the next call fail after any hold is released.
#[derive(Default)]
pub struct FakeService {
    items: RefCell<Vec<TodoItem>>,
    next_id: Cell<u64>,
    calls: RefCell<Vec<Call>>,
    failures: RefCell<VecDeque<ServiceError>>,
    holds: RefCell<VecDeque<oneshot::Receiver<()>>>,
}

impl FakeService {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<TodoItem>) -> Self {
        let next_id = items.iter().map(|t| t.id.0 + 1).max().unwrap_or(0);
        Self {
            items: RefCell::new(items),
            next_id: Cell::new(next_id),
            ..Default::default()
        }
    }

    pub fn push_item(&self, item: TodoItem) {
        self.next_id.set(self.next_id.get().max(item.id.0 + 1));
        self.items.borrow_mut().push(item);
    }

    pub fn remove_item(&self, id: u64) {
        self.items.borrow_mut().retain(|t| t.id.0 != id);
    }

    pub fn fail_next(&self, err: ServiceError) {
        self.failures.borrow_mut().push_back(err);
    }

    pub fn hold_next(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.holds.borrow_mut().push_back(rx);
        tx
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }

    async fn enter(&self, call: Call) -> ServiceResult<()> {
        self.calls.borrow_mut().push(call);
        let hold = self.holds.borrow_mut().pop_front();
        if let Some(rx) = hold {
            let _ = rx.await;
        }
        match self.failures.borrow_mut().pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl TodoService for FakeService {
    async fn list_all(&self) -> ServiceResult<Vec<TodoItem>> {
        self.enter(Call::ListAll).await?;
        Ok(self.items.borrow().clone())
    }

    async fn add(&self, text: &str) -> ServiceResult<TodoId> {
        self.enter(Call::Add(text.to_string())).await?;
        let id = TodoId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.items.borrow_mut().push(TodoItem {
            id,
            owner: Principal("2vxsx-fae".to_string()),
            text: text.to_string(),
            completed: false,
        });
        Ok(id)
    }

    async fn toggle(&self, id: TodoId) -> ServiceResult<bool> {
        self.enter(Call::Toggle(id)).await?;
        let mut items = self.items.borrow_mut();
        match items.iter_mut().find(|t| t.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: TodoId) -> ServiceResult<bool> {
        self.enter(Call::Delete(id)).await?;
        let mut items = self.items.borrow_mut();
        let before = items.len();
        items.retain(|t| t.id != id);
        Ok(items.len() != before)
    }

    async fn clear_completed(&self) -> ServiceResult<u64> {
        self.enter(Call::ClearCompleted).await?;
        let mut items = self.items.borrow_mut();
        let before = items.len();
        items.retain(|t| !t.completed);
        Ok((before - items.len()) as u64)
    }
}

/// Identity provider whose handshake can be held open or failed
#[derive(Default)]
pub struct FakeIdentity {
    identity: RefCell<Option<Principal>>,
    authenticating: Cell<bool>,
    hold: RefCell<Option<oneshot::Receiver<()>>>,
    failure: RefCell<Option<AuthError>>,
    pub logins: Cell<usize>,
}

impl FakeIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hold_login(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.hold.borrow_mut() = Some(rx);
        tx
    }

    pub fn fail_login(&self, err: AuthError) {
        *self.failure.borrow_mut() = Some(err);
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FakeIdentity {
    async fn login(&self) -> Result<(), AuthError> {
        self.logins.set(self.logins.get() + 1);
        self.authenticating.set(true);
        let hold = self.hold.borrow_mut().take();
        if let Some(rx) = hold {
            let _ = rx.await;
        }
        self.authenticating.set(false);
        if let Some(err) = self.failure.borrow_mut().take() {
            return Err(err);
        }
        *self.identity.borrow_mut() = Some(Principal("rrkah-fqaaa-aaaaa-aaaaq-cai".to_string()));
        Ok(())
    }

    fn logout(&self) {
        *self.identity.borrow_mut() = None;
    }

    fn current_identity(&self) -> Option<Principal> {
        self.identity.borrow().clone()
    }

    fn is_authenticating(&self) -> bool {
        self.authenticating.get()
    }
}
