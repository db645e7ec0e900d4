//! Durable storage for the session token. One string key is the only state
//! persisted across restarts.

use crate::error::Result;

pub trait TokenStore {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, token: &str) -> Result<()>;
    /// Clearing an absent token is a no-op.
    fn clear(&self) -> Result<()>;
}

/// File-backed store for native builds.
#[cfg(feature = "no-wasm")]
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: std::path::PathBuf,
}

#[cfg(feature = "no-wasm")]
impl FileTokenStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        FileTokenStore { path: path.into() }
    }
}

#[cfg(feature = "no-wasm")]
impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &str) -> Result<()> {
        std::fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// localStorage-backed store for browser builds, under the key the web UI
/// has always used.
#[cfg(feature = "wasm")]
#[derive(Debug, Clone)]
pub struct WebTokenStore {
    key: String,
}

#[cfg(feature = "wasm")]
pub const TOKEN_KEY: &str = "token";

#[cfg(feature = "wasm")]
impl WebTokenStore {
    pub fn new() -> Self {
        WebTokenStore {
            key: TOKEN_KEY.to_string(),
        }
    }

    fn local_storage(&self) -> Result<web_sys::Storage> {
        use crate::error::ErrorKind;

        let window = web_sys::window()
            .ok_or_else(|| ErrorKind::StorageError("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| ErrorKind::StorageError(format!("{e:?}")))?
            .ok_or_else(|| ErrorKind::StorageError("localStorage unavailable".to_string()).into())
    }
}

#[cfg(feature = "wasm")]
impl Default for WebTokenStore {
    fn default() -> Self {
        WebTokenStore::new()
    }
}

#[cfg(feature = "wasm")]
impl TokenStore for WebTokenStore {
    fn load(&self) -> Result<Option<String>> {
        use crate::error::ErrorKind;

        self.local_storage()?
            .get_item(&self.key)
            .map_err(|e| ErrorKind::StorageError(format!("{e:?}")).into())
    }

    fn save(&self, token: &str) -> Result<()> {
        use crate::error::ErrorKind;

        self.local_storage()?
            .set_item(&self.key, token)
            .map_err(|e| ErrorKind::StorageError(format!("{e:?}")).into())
    }

    fn clear(&self) -> Result<()> {
        use crate::error::ErrorKind;

        self.local_storage()?
            .remove_item(&self.key)
            .map_err(|e| ErrorKind::StorageError(format!("{e:?}")).into())
    }
}

/// In-memory store for tests and embedders with no durable storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: std::sync::Arc<std::sync::Mutex<Option<String>>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.lock().unwrap().clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}
