//! Mock authentication provider for testing

use crate::auth::{AuthProvider, AuthUser};
use crate::error::{Error, Result};

/// Scripted provider: one account, with injectable sign-in and token failures
#[derive(Debug, Clone)]
pub struct MockAuthProvider {
    account: AuthUser,
    current: Option<AuthUser>,
    sign_in_failure: Option<(String, String)>,
    token_failure: Option<String>,
    sign_in_calls: usize,
    sign_out_calls: usize,
}

impl MockAuthProvider {
    pub fn new(uid: &str, display_name: &str) -> Self {
        Self {
            account: AuthUser::new(uid, Some(display_name.to_string())),
            current: None,
            sign_in_failure: None,
            token_failure: None,
            sign_in_calls: 0,
            sign_out_calls: 0,
        }
    }

    /// Start with the account already signed in, like a restored session
    pub fn signed_in(uid: &str, display_name: &str) -> Self {
        let mut auth = Self::new(uid, display_name);
        auth.current = Some(auth.account.clone());
        auth
    }

    pub fn fail_sign_in(&mut self, code: &str, message: &str) {
        self.sign_in_failure = Some((code.to_string(), message.to_string()));
    }

    pub fn fail_tokens(&mut self, message: &str) {
        self.token_failure = Some(message.to_string());
    }

    pub fn recover(&mut self) {
        self.sign_in_failure = None;
        self.token_failure = None;
    }

    pub fn sign_in_calls(&self) -> usize {
        self.sign_in_calls
    }

    pub fn sign_out_calls(&self) -> usize {
        self.sign_out_calls
    }
}

impl AuthProvider for MockAuthProvider {
    fn current_user(&self) -> Option<AuthUser> {
        self.current.clone()
    }

    fn sign_in(&mut self) -> Result<AuthUser> {
        self.sign_in_calls += 1;
        if let Some((code, message)) = &self.sign_in_failure {
            return Err(Error::auth(code.clone(), message.clone()));
        }
        self.current = Some(self.account.clone());
        Ok(self.account.clone())
    }

    fn sign_out(&mut self) -> Result<()> {
        self.sign_out_calls += 1;
        self.current = None;
        Ok(())
    }

    fn id_token(&self, user: &AuthUser) -> Result<String> {
        if let Some(message) = &self.token_failure {
            return Err(Error::TokenUnavailable(message.clone()));
        }
        Ok(format!("mock-token-{}", user.uid))
    }
}
