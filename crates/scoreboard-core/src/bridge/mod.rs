mod event_loop;

use std::sync::mpsc::{self, Receiver, Sender};

use crate::auth::AuthProvider;
use crate::ports::{Inbound, Outbound};
use crate::session::ScoreSession;
use crate::storage::{RecordSnapshot, ScoreStore, WatchId};

/// Everything the bridge reacts to, in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeEvent {
    /// Message from the UI
    Port(Inbound),
    /// Store notification for the watched user record
    Snapshot(RecordSnapshot),
    /// Stop the event loop
    Shutdown,
}

impl From<Inbound> for BridgeEvent {
    fn from(message: Inbound) -> Self {
        BridgeEvent::Port(message)
    }
}

/// Wires the UI ports to the auth provider and the score store
pub struct ScoreBridge<S: ScoreStore, A: AuthProvider> {
    pub(crate) store: S,
    pub(crate) auth: A,
    pub(crate) session: ScoreSession,
    /// Watch on the signed-in user's record
    pub(crate) watch: Option<WatchId>,
    pub(crate) outbound: Sender<Outbound>,
    pub(crate) events_tx: Sender<BridgeEvent>,
    pub(crate) events_rx: Receiver<BridgeEvent>,
}

impl<S: ScoreStore, A: AuthProvider> ScoreBridge<S, A> {
    pub fn new(store: S, auth: A, outbound: Sender<Outbound>) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        Self {
            store,
            auth,
            session: ScoreSession::new(),
            watch: None,
            outbound,
            events_tx,
            events_rx,
        }
    }

    /// Sender for feeding events from other threads
    pub fn event_sender(&self) -> Sender<BridgeEvent> {
        self.events_tx.clone()
    }

    /// Queue an event for the next `pump` or `run` iteration
    pub fn enqueue(&self, event: impl Into<BridgeEvent>) {
        // The bridge owns the receiver, so the queue cannot be closed here
        let _ = self.events_tx.send(event.into());
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn auth(&self) -> &A {
        &self.auth
    }

    pub fn session(&self) -> &ScoreSession {
        &self.session
    }
}
