use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Trait for hooks that respond to state changes
pub trait StateHook<T> {
    /// Called after the cell value has been replaced
    fn on_change(&self, previous: &T, current: &T);

    /// Human-readable name for this hook
    fn name(&self) -> &str;
}

/// Adapts a closure into a named [`StateHook`]
pub struct FnHook<F> {
    name: String,
    callback: F,
}

impl<F> FnHook<F> {
    pub fn new(name: impl Into<String>, callback: F) -> Self {
        Self {
            name: name.into(),
            callback,
        }
    }
}

impl<T, F> StateHook<T> for FnHook<F>
where
    F: Fn(&T, &T),
{
    fn on_change(&self, previous: &T, current: &T) {
        (self.callback)(previous, current)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscriber<T> {
    id: SubscriptionId,
    hook: Rc<dyn StateHook<T>>,
}

/// A single mutable value with change notification.
///
/// Meant to be shared through `Rc` by the parts of one component. Hooks run
/// synchronously on every `set`/`update`, after the new value is stored, so
/// a hook reading the cell sees the new value. Hooks may subscribe or
/// unsubscribe while being notified; the change takes effect from the next
/// notification.
pub struct StateCell<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<Subscriber<T>>>,
    next_id: Cell<u64>,
}

impl<T: Clone> StateCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Reads the value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }

    pub fn set(&self, value: T) {
        let previous = self.value.replace(value);
        self.notify(&previous);
    }

    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.value.borrow());
        self.set(next);
    }

    /// Register a new hook
    pub fn subscribe<H>(&self, hook: H) -> SubscriptionId
    where
        H: StateHook<T> + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push(Subscriber {
            id,
            hook: Rc::new(hook),
        });
        id
    }

    /// Returns `false` if the subscription was already gone
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        subscribers.len() != before
    }

    /// List all registered hooks
    pub fn list_hooks(&self) -> Vec<String> {
        self.subscribers
            .borrow()
            .iter()
            .map(|s| s.hook.name().to_string())
            .collect()
    }

    fn notify(&self, previous: &T) {
        // Snapshot so hooks can (un)subscribe without a borrow conflict
        let hooks: Vec<Rc<dyn StateHook<T>>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|s| Rc::clone(&s.hook))
            .collect();
        let current = self.get();
        for hook in hooks {
            log::trace!("notifying state hook '{}'", hook.name());
            hook.on_change(previous, &current);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for StateCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCell")
            .field("value", &self.value.borrow())
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}
