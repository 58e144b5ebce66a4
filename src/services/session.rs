// ============================================================================
// SESSION STORE - persisted tokens + user profile
// ============================================================================

use std::rc::Rc;

use crate::models::auth::{LoginData, UserProfile};
use crate::utils::constants::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY};
use crate::utils::storage::StorageBackend;

/// Session persisted across page loads as three independent entries.
///
/// An empty access token means logged out, no matter what the other two
/// entries hold.
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn StorageBackend>,
}

impl SessionStore {
    pub fn new(backend: Rc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    pub fn access_token(&self) -> String {
        self.backend.get(ACCESS_TOKEN_KEY).unwrap_or_default()
    }

    pub fn refresh_token(&self) -> String {
        self.backend.get(REFRESH_TOKEN_KEY).unwrap_or_default()
    }

    /// Stored profile; corrupt JSON reads as "no user"
    pub fn current_user(&self) -> Option<UserProfile> {
        let raw = self.backend.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn current_role(&self) -> String {
        self.current_user().map(|u| u.role).unwrap_or_default()
    }

    pub fn current_staff_id(&self) -> String {
        self.current_user().map(|u| u.staff_id).unwrap_or_default()
    }

    pub fn must_change_password(&self) -> bool {
        self.current_user()
            .map(|u| u.must_change_password)
            .unwrap_or(false)
    }

    pub fn is_logged_in(&self) -> bool {
        !self.access_token().is_empty()
    }

    /// Persist tokens + profile after a successful login
    pub fn save_session(&self, data: &LoginData) {
        let user = UserProfile::from(data);
        self.backend.set(ACCESS_TOKEN_KEY, &data.access_token);
        self.backend.set(REFRESH_TOKEN_KEY, &data.refresh_token);
        match serde_json::to_string(&user) {
            Ok(json) => self.backend.set(USER_KEY, &json),
            Err(e) => log::error!("❌ Error serializando perfil de usuario: {}", e),
        }
        log::info!("✅ Sesión guardada: {} ({})", user.name, user.role);
    }

    /// Silent token rotation after a refresh
    pub fn update_access_token(&self, access_token: &str) {
        self.backend.set(ACCESS_TOKEN_KEY, access_token);
    }

    pub fn clear(&self) {
        self.backend.remove(ACCESS_TOKEN_KEY);
        self.backend.remove(REFRESH_TOKEN_KEY);
        self.backend.remove(USER_KEY);
        log::info!("👋 Sesión eliminada");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;

    fn sample_login() -> LoginData {
        LoginData {
            access_token: "acc-1".to_string(),
            refresh_token: "ref-1".to_string(),
            token_type: "Bearer".to_string(),
            staff_id: "s-01".to_string(),
            name: "张三".to_string(),
            role: "sales".to_string(),
            phone: "13800000000".to_string(),
            must_change_password: false,
        }
    }

    #[test]
    fn save_session_round_trip() {
        let store = SessionStore::new(MemoryStorage::shared());
        assert!(!store.is_logged_in());

        store.save_session(&sample_login());
        assert!(store.is_logged_in());
        assert_eq!(store.access_token(), "acc-1");
        assert_eq!(store.refresh_token(), "ref-1");
        assert_eq!(store.current_role(), "sales");
        assert_eq!(store.current_staff_id(), "s-01");
        assert!(!store.must_change_password());

        store.clear();
        assert!(!store.is_logged_in());
        assert_eq!(store.access_token(), "");
        assert_eq!(store.current_user(), None);
    }

    #[test]
    fn empty_access_token_means_logged_out() {
        let backend = MemoryStorage::shared();
        let store = SessionStore::new(backend.clone());
        // refresh token + user present, access token missing
        backend.set(REFRESH_TOKEN_KEY, "ref-1");
        backend.set(USER_KEY, "{\"staffId\":\"s\",\"name\":\"n\",\"role\":\"admin\",\"phone\":\"1\"}");
        assert!(!store.is_logged_in());
    }

    #[test]
    fn corrupt_profile_reads_as_no_user() {
        let backend = MemoryStorage::shared();
        let store = SessionStore::new(backend.clone());
        backend.set(USER_KEY, "{not json");
        assert_eq!(store.current_user(), None);
        assert_eq!(store.current_role(), "");
        assert!(!store.must_change_password());
    }

    #[test]
    fn update_access_token_keeps_other_entries() {
        let store = SessionStore::new(MemoryStorage::shared());
        store.save_session(&sample_login());
        store.update_access_token("acc-2");
        assert_eq!(store.access_token(), "acc-2");
        assert_eq!(store.refresh_token(), "ref-1");
        assert_eq!(store.current_role(), "sales");
    }
}
