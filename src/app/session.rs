use web_sys::Storage;

const TOKEN_KEY: &str = "access_token";

/// Single source of truth for the bearer token, backed by browser
/// `localStorage`. One instance is created at the application root and handed
/// to components through context, so tests and components never reach for
/// ambient globals themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Session {
    token_key: &'static str,
}

impl Session {
    pub fn new() -> Self {
        Self { token_key: TOKEN_KEY }
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }

    pub fn token(&self) -> Option<String> {
        self.storage()
            .and_then(|storage| storage.get_item(self.token_key).ok().flatten())
            .filter(|token| !token.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn store(&self, token: &str) {
        if let Some(storage) = self.storage() {
            if storage.set_item(self.token_key, token).is_err() {
                web_sys::console::error_1(&"[Session] failed to persist token".into());
            }
        }
    }

    /// Removal is synchronous; callers redirect immediately afterwards.
    pub fn clear(&self) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(self.token_key);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
