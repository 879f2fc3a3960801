use chrono::Utc;
use tracing::{debug, info};

use crate::auth::{AuthProvider, AuthUser};
use crate::config::AuthConfig;
use crate::error::{Error, Result};

/// Signs in the single account named in the configuration
#[derive(Debug, Clone)]
pub struct LocalAuthProvider {
    account: Option<AuthUser>,
    current: Option<AuthUser>,
}

impl LocalAuthProvider {
    pub fn new(config: &AuthConfig) -> Self {
        let account = config
            .uid
            .as_ref()
            .filter(|uid| !uid.is_empty())
            .map(|uid| AuthUser::new(uid.clone(), config.display_name.clone()));

        let current = if config.remember {
            account.clone()
        } else {
            None
        };
        if let Some(user) = &current {
            info!("Restored session for {}", user.uid);
        }

        Self { account, current }
    }
}

impl AuthProvider for LocalAuthProvider {
    fn current_user(&self) -> Option<AuthUser> {
        self.current.clone()
    }

    fn sign_in(&mut self) -> Result<AuthUser> {
        let Some(account) = self.account.clone() else {
            return Err(Error::auth(
                "auth/no-account",
                "No local account is configured",
            ));
        };
        info!("Signed in as {}", account.uid);
        self.current = Some(account.clone());
        Ok(account)
    }

    fn sign_out(&mut self) -> Result<()> {
        if let Some(user) = self.current.take() {
            info!("Signed out {}", user.uid);
        }
        Ok(())
    }

    fn id_token(&self, user: &AuthUser) -> Result<String> {
        match &self.current {
            Some(current) if current.uid == user.uid => {
                let token = format!("local.{}.{}", user.uid, Utc::now().timestamp_millis());
                debug!("Issued id token for {}", user.uid);
                Ok(token)
            }
            _ => Err(Error::TokenUnavailable(format!(
                "{} is not signed in",
                user.uid
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(uid: Option<&str>, remember: bool) -> AuthConfig {
        AuthConfig {
            uid: uid.map(str::to_string),
            display_name: Some("Player".to_string()),
            remember,
        }
    }

    #[test]
    fn test_sign_in_and_out() {
        let mut auth = LocalAuthProvider::new(&config(Some("p1"), false));
        assert!(auth.current_user().is_none());

        let user = auth.sign_in().unwrap();
        assert_eq!(user.uid, "p1");
        assert_eq!(user.display_name.as_deref(), Some("Player"));
        assert_eq!(auth.current_user(), Some(user.clone()));
        assert!(auth.id_token(&user).unwrap().starts_with("local.p1."));

        auth.sign_out().unwrap();
        assert!(auth.current_user().is_none());
        assert!(auth.id_token(&user).is_err());
    }

    #[test]
    fn test_sign_in_without_account() {
        let mut auth = LocalAuthProvider::new(&config(None, true));
        let err = auth.sign_in().unwrap_err();
        assert_eq!(err.code(), "auth/no-account");
        assert!(auth.current_user().is_none());
    }

    #[test]
    fn test_remembered_session() {
        let auth = LocalAuthProvider::new(&config(Some("p1"), true));
        assert_eq!(auth.current_user().unwrap().uid, "p1");
    }
}
