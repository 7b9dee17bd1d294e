use log::warn;

/// Persistence for the single best score.
pub trait ScoreStore {
    fn load(&self) -> u32;
    fn save(&mut self, score: u32);
}

/// Missing or unreadable values count as no high score.
pub fn parse_high_score(raw: Option<&str>) -> u32 {
    match raw.map(str::trim) {
        None | Some("") => 0,
        Some(text) => text.parse().unwrap_or_else(|_| {
            warn!("ignoring unreadable high score {text:?}");
            0
        }),
    }
}

/// Keeps the score for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    pub fn with_raw(raw: &str) -> Self {
        Self {
            value: Some(raw.to_string()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        parse_high_score(self.raw())
    }

    fn save(&mut self, score: u32) {
        self.value = Some(score.to_string());
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorage;

#[cfg(target_arch = "wasm32")]
mod web {
    use log::warn;

    use super::{parse_high_score, ScoreStore};
    use crate::config::HIGH_SCORE_KEY;

    /// `window.localStorage` under a fixed key. Unavailable storage (private
    /// browsing, sandboxed iframes) degrades to a session-only score.
    pub struct LocalStorage {
        key: &'static str,
        storage: Option<web_sys::Storage>,
    }

    impl LocalStorage {
        pub fn open() -> Self {
            Self::with_key(HIGH_SCORE_KEY)
        }

        pub fn with_key(key: &'static str) -> Self {
            let storage = web_sys::window()
                .and_then(|window| window.local_storage().ok().flatten());
            if storage.is_none() {
                warn!("localStorage unavailable, high score will not persist");
            }
            Self { key, storage }
        }
    }

    impl ScoreStore for LocalStorage {
        fn load(&self) -> u32 {
            let raw = self
                .storage
                .as_ref()
                .and_then(|storage| storage.get_item(self.key).ok().flatten());
            parse_high_score(raw.as_deref())
        }

        fn save(&mut self, score: u32) {
            if let Some(storage) = &self.storage {
                if storage.set_item(self.key, &score.to_string()).is_err() {
                    warn!("failed to persist high score {score}");
                }
            }
        }
    }
}
