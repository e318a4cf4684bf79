//! # Signal Routing
//!
//! External "move left / move right" signals reach the navigator through a
//! [`SignalRouter`]. Whoever wants them holds a [`Subscription`], and the
//! routes live exactly as long as that subscription:
//!
//! ```text
//! attach()  ──►  routes registered in the router
//! detach()  ──►  routes removed (second call is a no-op)
//! drop      ──►  detach()
//! ```
//!
//! Because release happens in `Drop`, an early `?` return or a panic that
//! unwinds through the event loop still unregisters the routes.

use log::debug;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::core::action::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    MoveRight,
    MoveLeft,
}

#[derive(Debug)]
struct Route {
    id: u64,
    signal: Signal,
    action: Action,
}

type Routes = Rc<RefCell<Vec<Route>>>;

#[derive(Default)]
pub struct SignalRouter {
    routes: Routes,
    next_id: Cell<u64>,
}

impl SignalRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers each `(signal, action)` pair until the subscription is released.
    pub fn subscribe(&self, bindings: &[(Signal, Action)]) -> Subscription {
        let mut routes = self.routes.borrow_mut();
        let mut ids = Vec::with_capacity(bindings.len());
        for (signal, action) in bindings {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            routes.push(Route {
                id,
                signal: *signal,
                action: action.clone(),
            });
            ids.push(id);
        }
        debug!("Subscribed {} routes ({} total)", ids.len(), routes.len());
        Subscription {
            ids,
            routes: Rc::downgrade(&self.routes),
        }
    }

    /// Actions bound to `signal`, in registration order. Empty when nobody listens.
    pub fn dispatch(&self, signal: Signal) -> Vec<Action> {
        self.routes
            .borrow()
            .iter()
            .filter(|route| route.signal == signal)
            .map(|route| route.action.clone())
            .collect()
    }

    pub fn listener_count(&self) -> usize {
        self.routes.borrow().len()
    }
}

/// A live registration in a [`SignalRouter`].
pub struct Subscription {
    ids: Vec<u64>,
    routes: Weak<RefCell<Vec<Route>>>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        !self.ids.is_empty()
    }

    /// Removes this subscription's routes. Returns `false` if already released.
    pub fn detach(&mut self) -> bool {
        if self.ids.is_empty() {
            return false;
        }
        let ids = std::mem::take(&mut self.ids);
        // Router already gone: nothing left to unregister from.
        if let Some(routes) = self.routes.upgrade() {
            let mut routes = routes.borrow_mut();
            routes.retain(|route| !ids.contains(&route.id));
            debug!("Released {} routes ({} remaining)", ids.len(), routes.len());
        }
        true
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

/// The navigator's keyboard binding: right advances, left retreats.
///
/// Attaching twice keeps a single registration; detaching is idempotent.
#[derive(Default)]
pub struct NavigatorBinding {
    subscription: Option<Subscription>,
}

impl NavigatorBinding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, router: &SignalRouter) {
        if self.is_attached() {
            return;
        }
        self.subscription = Some(router.subscribe(&[
            (Signal::MoveRight, Action::Advance),
            (Signal::MoveLeft, Action::Retreat),
        ]));
    }

    pub fn detach(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.detach();
        }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }
}
