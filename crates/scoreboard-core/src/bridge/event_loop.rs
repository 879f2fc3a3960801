//! Event handling for the score bridge
//!
//! All work happens on the thread that drives the loop. Store watchers and
//! the UI reader only enqueue events.

use std::sync::mpsc::{RecvTimeoutError, TryRecvError};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::auth::{AuthProvider, AuthUser};
use crate::leaderboard::compute_leaderboards;
use crate::policy::{HighScoreSubmission, PersistOutcome, persist_high_score};
use crate::ports::{Inbound, Outbound, PortError, SignInInfo};
use crate::storage::{RecordSnapshot, ScoreStore};

use super::{BridgeEvent, ScoreBridge};

impl<S: ScoreStore, A: AuthProvider> ScoreBridge<S, A> {
    /// Publish the initial leaderboards and pick up a restored session
    pub fn start(&mut self) {
        info!("Starting score bridge");
        self.recompute_leaderboards();

        if let Some(user) = self.auth.current_user() {
            info!("User {} is already signed in", user.uid);
            self.on_signed_in(user);
        }
    }

    /// Run until a `Shutdown` event arrives.
    ///
    /// While the queue is idle the store is refreshed every
    /// `refresh_interval` so writes from other clients reach the watcher.
    pub fn run(&mut self, refresh_interval: Duration) {
        self.start();

        loop {
            match self.events_rx.recv_timeout(refresh_interval) {
                Ok(BridgeEvent::Shutdown) => break,
                Ok(event) => self.handle_event(event),
                Err(RecvTimeoutError::Timeout) => {
                    if let Err(e) = self.store.refresh() {
                        warn!("Failed to refresh score store: {}", e);
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        self.stop();
    }

    /// Handle every queued event without blocking.
    ///
    /// Returns the number of events handled. Stops early at `Shutdown`.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        loop {
            match self.events_rx.try_recv() {
                Ok(BridgeEvent::Shutdown) => {
                    self.stop();
                    return handled + 1;
                }
                Ok(event) => {
                    self.handle_event(event);
                    handled += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return handled,
            }
        }
    }

    pub fn handle_event(&mut self, event: BridgeEvent) {
        match event {
            BridgeEvent::Port(message) => self.handle_inbound(message),
            BridgeEvent::Snapshot(snapshot) => self.on_snapshot(snapshot),
            BridgeEvent::Shutdown => self.stop(),
        }
    }

    fn handle_inbound(&mut self, message: Inbound) {
        debug!("Port {} called", message.port_name());
        match message {
            Inbound::SignIn => self.sign_in(),
            Inbound::SignOut => self.sign_out(),
            Inbound::SaveHighScore(submission) => self.save_high_score(&submission),
        }
    }

    fn sign_in(&mut self) {
        match self.auth.sign_in() {
            Ok(user) => self.on_signed_in(user),
            Err(e) => {
                warn!("Sign-in failed: {}", e);
                self.send(Outbound::SignInError(PortError::from(&e)));
            }
        }
    }

    fn sign_out(&mut self) {
        if let Err(e) = self.auth.sign_out() {
            warn!("Sign-out failed: {}", e);
        }
        self.cancel_watch();
        if let Some(user) = self.session.sign_out() {
            info!("Session for {} ended", user.uid);
        }
    }

    fn on_signed_in(&mut self, user: AuthUser) {
        self.cancel_watch();
        self.session.sign_in(user.clone());

        let events = self.events_tx.clone();
        let listener = Box::new(move |snapshot: RecordSnapshot| {
            let _ = events.send(BridgeEvent::Snapshot(snapshot));
        });

        match self.store.watch(&user.uid, listener) {
            Ok(id) => {
                debug!("Watching record of {}", user.uid);
                self.watch = Some(id);
            }
            Err(e) => warn!("Failed to watch record of {}: {}", user.uid, e),
        }
    }

    fn on_snapshot(&mut self, snapshot: RecordSnapshot) {
        let Some(user) = self.session.user().cloned() else {
            debug!("Ignoring snapshot for {}: nobody is signed in", snapshot.uid);
            return;
        };
        if user.uid != snapshot.uid {
            debug!(
                "Ignoring snapshot for {}: signed in as {}",
                snapshot.uid, user.uid
            );
            return;
        }

        let high_score = self.session.observe(snapshot.record.as_ref());

        match self.auth.id_token(&user) {
            Ok(_) => self.send(Outbound::SignInInfo(SignInInfo {
                name: user.display_name.clone(),
                uid: user.uid.clone(),
                high_score,
            })),
            Err(e) => warn!("Error when retrieving token for {}: {}", user.uid, e),
        }

        self.recompute_leaderboards();
    }

    fn save_high_score(&mut self, submission: &HighScoreSubmission) {
        let cached_best = self.session.cached_best();
        match persist_high_score(&mut self.store, submission, &cached_best) {
            Ok(PersistOutcome::Saved) => debug!("High score saved for {}", submission.uid),
            Ok(outcome) => debug!("High score not saved: {:?}", outcome),
            Err(e) => {
                warn!("Failed to save high score for {}: {}", submission.uid, e);
                self.send(Outbound::SignInError(PortError::from(&e)));
            }
        }
    }

    /// Re-read every record and publish fresh leaderboards.
    ///
    /// The store is refreshed first so writes by other clients are ranked.
    /// Read failures are logged and the UI keeps its previous leaderboards.
    pub fn recompute_leaderboards(&mut self) {
        if let Err(e) = self.store.refresh() {
            warn!("Failed to refresh score store: {}", e);
            return;
        }

        match self.store.list() {
            Ok(records) => {
                let leaderboards = compute_leaderboards(&records);
                debug!("Leaderboards computed from {} records", records.len());
                self.send(Outbound::ReceiveLeaderboards(leaderboards));
            }
            Err(e) => warn!("Failed to read leaderboards: {}", e),
        }
    }

    fn cancel_watch(&mut self) {
        if let Some(id) = self.watch.take() {
            self.store.unwatch(id);
        }
    }

    fn stop(&mut self) {
        self.cancel_watch();
        info!("Score bridge stopped");
    }

    fn send(&self, message: Outbound) {
        let port = message.port_name();
        if self.outbound.send(message).is_err() {
            debug!("Dropped {} message: UI disconnected", port);
        }
    }
}
