//! Authentication provider abstraction.
//!
//! The provider is the external identity service. The bridge only needs to
//! start and end interactive sign-in, ask who is signed in, and fetch an
//! identity token for the signed-in user.

mod local;
pub mod mock;

pub use local::LocalAuthProvider;
pub use mock::MockAuthProvider;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Signed-in identity as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub uid: String,
    pub display_name: Option<String>,
}

impl AuthUser {
    pub fn new(uid: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            uid: uid.into(),
            display_name,
        }
    }
}

pub trait AuthProvider {
    /// User restored from a previous session, or signed in since
    fn current_user(&self) -> Option<AuthUser>;

    /// Run interactive sign-in.
    ///
    /// Rejections carry the provider's code and message in `Error::Auth`.
    fn sign_in(&mut self) -> Result<AuthUser>;

    fn sign_out(&mut self) -> Result<()>;

    /// Fetch an identity token for `user`
    fn id_token(&self, user: &AuthUser) -> Result<String>;
}
