use tracing::debug;

use crate::auth::AuthUser;
use crate::score::HighScores;
use crate::storage::UserScoreRecord;

/// State of one sign-in session.
///
/// Holds the signed-in user and the best scores observed for them so far.
/// The cached best only grows while the session lasts and resets when the
/// session ends.
#[derive(Debug, Clone, Default)]
pub struct ScoreSession {
    user: Option<AuthUser>,
    cached_best: HighScores,
}

impl ScoreSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for `user`.
    ///
    /// Signing in again as the same user keeps the cached best.
    pub fn sign_in(&mut self, user: AuthUser) {
        if !self.is_signed_in_as(&user.uid) {
            self.cached_best = HighScores::default();
        }
        self.user = Some(user);
    }

    /// End the session, returning the user that was signed in
    pub fn sign_out(&mut self) -> Option<AuthUser> {
        self.cached_best = HighScores::default();
        self.user.take()
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    pub fn is_signed_in_as(&self, uid: &str) -> bool {
        self.user.as_ref().is_some_and(|user| user.uid == uid)
    }

    pub fn cached_best(&self) -> HighScores {
        self.cached_best
    }

    /// Fold a snapshot of the user's record into the cached best.
    ///
    /// Returns the scores found in the record, with missing fields (or a
    /// missing record) read as 0.
    pub fn observe(&mut self, record: Option<&UserScoreRecord>) -> HighScores {
        let observed = record.map(UserScoreRecord::high_scores).unwrap_or_default();
        self.cached_best.update(&observed);
        debug!(
            "Observed {:?}, cached best now {:?}",
            observed, self.cached_best
        );
        observed
    }
}
