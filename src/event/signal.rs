use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Handler<E> = Rc<RefCell<Box<dyn FnMut(&E)>>>;
type HandlerList<E> = RefCell<Vec<(u64, Handler<E>)>>;

/// A per-object notification channel broadcasting change events to
/// registered observers.
///
/// Observers subscribe with a callback and receive every event emitted
/// afterwards, in subscription order. The returned [`Subscription`]
/// detaches the callback when dropped, so an observer that goes away
/// can never be called into again.
pub struct Signal<E: 'static> {
    handlers: Rc<HandlerList<E>>,
    next_id: Cell<u64>,
}

impl<E> Clone for Signal<E> {
    fn clone(&self) -> Self {
        // Cloning an entity must not share or duplicate its observers;
        // a clone starts with a fresh empty channel.
        Self::new()
    }
}

impl<E> std::fmt::Debug for Signal<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl<E> Default for Signal<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Signal<E> {
    /// Creates a new signal with no observers
    pub fn new() -> Self {
        Self {
            handlers: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(0),
        }
    }

    /// Subscribe a callback to receive events
    ///
    /// The callback stays registered until the returned subscription is
    /// dropped or explicitly detached.
    #[must_use = "dropping the subscription detaches the callback"]
    pub fn subscribe(&self, handler: impl FnMut(&E) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.handlers
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(Box::new(handler)))));

        let weak: Weak<HandlerList<E>> = Rc::downgrade(&self.handlers);
        Subscription {
            detach: Some(Box::new(move || {
                if let Some(handlers) = weak.upgrade() {
                    handlers.borrow_mut().retain(|(hid, _)| *hid != id);
                }
            })),
        }
    }

    /// Emit an event to all registered observers
    ///
    /// The observer list is not locked during dispatch, so a callback
    /// may subscribe or detach on this same signal: observers detached
    /// by an earlier callback are skipped, observers subscribed during
    /// dispatch only see later events.
    pub fn emit(&self, event: &E) {
        let snapshot: Vec<(u64, Handler<E>)> = self
            .handlers
            .borrow()
            .iter()
            .map(|(id, handler)| (*id, handler.clone()))
            .collect();
        for (id, handler) in snapshot {
            let attached = self.handlers.borrow().iter().any(|(hid, _)| *hid == id);
            if attached {
                (handler.borrow_mut())(event);
            }
        }
    }

    /// Number of currently registered observers
    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

/// Handle keeping a [`Signal`] callback registered.
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Detaches the callback immediately instead of on drop
    pub fn detach(mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}
