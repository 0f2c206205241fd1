use std::fmt::Debug;
use std::time::SystemTime;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::{tee_observer, tracing_observer, Observation, ObserverFn};

/// Channel-backed router used by runs to emit actions to the store and toasts
/// to the notifier. Each `dispatch` is a single atomic emission; the receiving
/// side reduces actions one at a time.
pub struct Router<Action, Toast> {
    action_tx: UnboundedSender<Action>,
    toast_tx: UnboundedSender<Toast>,
    observer: ObserverFn<Action, Toast>,
}

impl<Action, Toast> Clone for Router<Action, Toast> {
    fn clone(&self) -> Self {
        Self {
            action_tx: self.action_tx.clone(),
            toast_tx: self.toast_tx.clone(),
            observer: self.observer.clone(),
        }
    }
}

impl<Action: Debug + 'static, Toast: Debug + 'static> Router<Action, Toast> {
    /// Create a new router around existing channels. Every routed value is
    /// logged through [`tracing_observer`].
    pub fn new(action_tx: UnboundedSender<Action>, toast_tx: UnboundedSender<Toast>) -> Self {
        Self {
            action_tx,
            toast_tx,
            observer: tracing_observer(),
        }
    }
}

impl<Action: 'static, Toast: 'static> Router<Action, Toast> {
    /// Add an observer; it runs after the ones already installed.
    pub fn observe(mut self, observer: ObserverFn<Action, Toast>) -> Self {
        self.observer = tee_observer(vec![self.observer, observer]);
        self
    }
}

impl<Action, Toast> Router<Action, Toast> {
    /// Send an action to the store.
    pub fn dispatch(&self, action: Action)
    where
        Action: Send + 'static,
    {
        (self.observer)(&Observation::Dispatch {
            ts: SystemTime::now(),
            data: &action,
        });
        if self.action_tx.send(action).is_err() {
            tracing::debug!("action receiver dropped; action discarded");
        }
    }

    /// Send a toast to the notifier.
    pub fn notify(&self, toast: Toast)
    where
        Toast: Send + 'static,
    {
        (self.observer)(&Observation::Toast {
            ts: SystemTime::now(),
            data: &toast,
        });
        if self.toast_tx.send(toast).is_err() {
            tracing::debug!("toast receiver dropped; toast discarded");
        }
    }
}

/// Paired channel endpoints owned by the store and notifier loops.
pub struct RouterChannels<Action, Toast> {
    pub router: Router<Action, Toast>,
    pub action_rx: UnboundedReceiver<Action>,
    pub toast_rx: UnboundedReceiver<Toast>,
}

impl<Action: Debug + 'static, Toast: Debug + 'static> RouterChannels<Action, Toast> {
    /// Allocate an action/toast channel pair and return the router plus receivers.
    pub fn new() -> Self {
        let (action_tx, action_rx) = unbounded_channel();
        let (toast_tx, toast_rx) = unbounded_channel();
        Self {
            router: Router::new(action_tx, toast_tx),
            action_rx,
            toast_rx,
        }
    }
}

impl<Action: Debug + 'static, Toast: Debug + 'static> Default for RouterChannels<Action, Toast> {
    fn default() -> Self {
        Self::new()
    }
}
