//! Global keyboard input.
//!
//! A background thread runs [`rdev::listen`] and turns raw key events into
//! [`InputEvent`]s. Consumers never touch the hook directly: they call
//! [`InputSource::subscribe`] and drain the returned channel on their own
//! thread, which keeps every window mutation on the GUI thread.

use crate::error::{OverlayError, Result};
use crate::hotkey::{tracked_direction, ChordMatcher, Hotkey, Key};
use rdev::EventType;
use std::sync::mpsc::{channel, sync_channel, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

/// How long [`InputSource::start`] waits for the hook to fail before
/// assuming it is installed. `rdev::listen` only returns on error.
const STARTUP_GRACE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEdge {
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key { key: Key, edge: KeyEdge },
    ResetHotkey,
}

/// Turns raw key events into [`InputEvent`]s.
///
/// Only keys that drive an indicator are forwarded; the reset chord is
/// reported once per press.
#[derive(Debug, Clone)]
pub struct InputRouter {
    reset: ChordMatcher,
}

impl InputRouter {
    pub fn new(reset: Hotkey) -> Self {
        Self {
            reset: ChordMatcher::new(reset),
        }
    }

    pub fn route(&mut self, event: &EventType) -> Vec<InputEvent> {
        let (key, edge) = match *event {
            EventType::KeyPress(k) => (k, KeyEdge::Down),
            EventType::KeyRelease(k) => (k, KeyEdge::Up),
            _ => return Vec::new(),
        };

        let mut out = Vec::new();
        if tracked_direction(key).is_some() {
            out.push(InputEvent::Key { key, edge });
        }
        if self.reset.update(key, edge == KeyEdge::Down) {
            tracing::info!("reset hotkey pressed");
            out.push(InputEvent::ResetHotkey);
        }
        out
    }
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new(Hotkey::default())
    }
}

type Waker = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    senders: Vec<(u64, Sender<InputEvent>)>,
}

struct Shared {
    router: Mutex<InputRouter>,
    subscribers: Mutex<Subscribers>,
    waker: Mutex<Option<Waker>>,
    failure: Mutex<Option<OverlayError>>,
}

impl Shared {
    /// A listener callback that panicked mid-send must not cut every
    /// subscriber off, so a poisoned list is taken over as is.
    fn subscribers(&self) -> MutexGuard<'_, Subscribers> {
        self.subscribers.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("input subscriber list was poisoned; recovering");
            poisoned.into_inner()
        })
    }

    fn dispatch(&self, event: &EventType) {
        let events = match self.router.lock() {
            Ok(mut router) => router.route(event),
            Err(_) => return,
        };
        if events.is_empty() {
            return;
        }

        self.subscribers().senders.retain(|(id, tx)| {
            let alive = events.iter().all(|ev| tx.send(*ev).is_ok());
            if !alive {
                tracing::debug!(id, "dropping disconnected subscriber");
            }
            alive
        });
        self.wake();
    }

    fn wake(&self) {
        let waker = self.waker.lock().ok().and_then(|w| w.clone());
        if let Some(waker) = waker {
            waker();
        }
    }

    fn unsubscribe(&self, id: u64) -> bool {
        let mut subs = self.subscribers();
        let before = subs.senders.len();
        subs.senders.retain(|(sid, _)| *sid != id);
        before != subs.senders.len()
    }
}

/// Handle on the global keyboard listener.
#[derive(Clone)]
pub struct InputSource {
    shared: Arc<Shared>,
}

impl InputSource {
    /// Create a source without installing the OS hook. Events can still be
    /// injected with [`process_test_events`].
    pub fn detached(reset: Hotkey) -> Self {
        Self {
            shared: Arc::new(Shared {
                router: Mutex::new(InputRouter::new(reset)),
                subscribers: Mutex::new(Subscribers::default()),
                waker: Mutex::new(None),
                failure: Mutex::new(None),
            }),
        }
    }

    /// Install the global keyboard hook on a dedicated thread.
    ///
    /// Fails with [`OverlayError::HookRegistration`] when the OS rejects the
    /// listener within the startup grace period.
    pub fn start(reset: Hotkey) -> Result<Self> {
        let source = Self::detached(reset);
        let shared = Arc::clone(&source.shared);
        let (status_tx, status_rx) = sync_channel::<OverlayError>(1);

        tracing::debug!(?reset, "starting keyboard listener");
        thread::Builder::new()
            .name("keyboard-listener".into())
            .spawn(move || {
                let cb_shared = Arc::clone(&shared);
                let result = rdev::listen(move |event| cb_shared.dispatch(&event.event_type));
                let err = match result {
                    Ok(()) => OverlayError::ListenerStopped,
                    Err(e) => OverlayError::HookRegistration(format!("{e:?}")),
                };
                tracing::error!("keyboard listener exited: {err}");
                if let Ok(mut slot) = shared.failure.lock() {
                    *slot = Some(err.clone());
                }
                let _ = status_tx.try_send(err);
                shared.wake();
            })
            .map_err(|e| OverlayError::HookRegistration(e.to_string()))?;

        match status_rx.recv_timeout(STARTUP_GRACE) {
            Ok(err) => Err(err),
            Err(RecvTimeoutError::Timeout) => {
                tracing::info!("keyboard listener running");
                Ok(source)
            }
            Err(RecvTimeoutError::Disconnected) => Err(OverlayError::ListenerStopped),
        }
    }

    /// Register a callback run after events are delivered, typically a
    /// repaint request so the GUI thread wakes up to drain its channel.
    pub fn set_waker(&self, waker: impl Fn() + Send + Sync + 'static) {
        if let Ok(mut slot) = self.shared.waker.lock() {
            *slot = Some(Arc::new(waker));
        }
    }

    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = channel();
        let id = {
            let mut subs = self.shared.subscribers();
            let id = subs.next_id;
            subs.next_id += 1;
            subs.senders.push((id, tx));
            id
        };
        tracing::debug!(id, "input subscriber added");
        Subscription {
            id,
            receiver: rx,
            shared: Arc::clone(&self.shared),
        }
    }

    /// Returns `true` if a subscriber with `id` was removed.
    pub fn unsubscribe(&self, id: u64) -> bool {
        self.shared.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.subscribers().senders.len()
    }

    /// Error that stopped the listener thread, if it has stopped.
    pub fn failure(&self) -> Option<OverlayError> {
        self.shared.failure.lock().ok().and_then(|f| f.clone())
    }
}

/// Receiving end of an [`InputSource`] subscription. Unsubscribes on drop.
pub struct Subscription {
    id: u64,
    receiver: Receiver<InputEvent>,
    shared: Arc<Shared>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn receiver(&self) -> &Receiver<InputEvent> {
        &self.receiver
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if self.shared.unsubscribe(self.id) {
            tracing::debug!(id = self.id, "input subscriber removed");
        }
    }
}

/// Push synthetic key events through the same routing path the OS hook
/// uses.
pub fn process_test_events(source: &InputSource, events: &[EventType]) {
    for ev in events {
        source.shared.dispatch(ev);
    }
}
