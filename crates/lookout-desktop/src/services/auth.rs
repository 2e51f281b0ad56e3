//! Account auth service with secure session storage.

use keyring::Entry;

use lookout_core::auth::{AuthClient, AuthResult, SessionPersistence};
pub use lookout_core::auth::{AuthError, AuthSession};
use lookout_core::config::api_base_url;

const KEYRING_SERVICE_NAME: &str = "lookout";
const KEYRING_SESSION_USERNAME: &str = "api_session";

#[derive(Debug, Clone)]
struct SessionStore {
    service_name: String,
    username: String,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            service_name: KEYRING_SERVICE_NAME.to_string(),
            username: KEYRING_SESSION_USERNAME.to_string(),
        }
    }
}

impl SessionStore {
    fn entry(&self) -> AuthResult<Entry> {
        Entry::new(&self.service_name, &self.username)
            .map_err(|error| AuthError::SecureStorage(error.to_string()))
    }
}

impl SessionPersistence for SessionStore {
    fn load_session(&self) -> AuthResult<Option<AuthSession>> {
        let entry = self.entry()?;
        match entry.get_password() {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(error) => Err(AuthError::SecureStorage(error.to_string())),
        }
    }

    fn save_session(&self, session: &AuthSession) -> AuthResult<()> {
        let serialized = serde_json::to_string(session)?;
        self.entry()?
            .set_password(&serialized)
            .map_err(|error| AuthError::SecureStorage(error.to_string()))
    }

    fn clear_session(&self) -> AuthResult<()> {
        let entry = self.entry()?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(error) => Err(AuthError::SecureStorage(error.to_string())),
        }
    }
}

/// Auth client bound to the keyring-backed session store.
#[derive(Clone)]
pub struct AuthService {
    inner: AuthClient<SessionStore>,
}

impl AuthService {
    pub fn new_from_config() -> AuthResult<Self> {
        Self::new(api_base_url())
    }

    pub fn new(base_url: impl AsRef<str>) -> AuthResult<Self> {
        Ok(Self {
            inner: AuthClient::new(base_url, SessionStore::default())?,
        })
    }

    pub async fn restore_session(&self) -> AuthResult<Option<AuthSession>> {
        self.inner.restore_session().await
    }

    pub async fn login(&self, username: &str, password: &str) -> AuthResult<AuthSession> {
        self.inner.login(username, password).await
    }

    pub async fn logout(&self, access_token: &str) -> AuthResult<()> {
        self.inner.logout(access_token).await
    }
}
