//! Settings storage contracts with in-memory and JSON-file implementations.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use ecommon::BoxFuture;

use crate::{ChatError, Settings};

pub type ChatFuture<'a, T> = BoxFuture<'a, T>;

pub trait SettingsStore: Send + Sync {
    fn load<'a>(&'a self) -> ChatFuture<'a, Result<Settings, ChatError>>;

    fn save<'a>(&'a self, settings: &'a Settings) -> ChatFuture<'a, Result<(), ChatError>>;
}

#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    settings: Mutex<Settings>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings: Mutex::new(settings),
        }
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn load<'a>(&'a self) -> ChatFuture<'a, Result<Settings, ChatError>> {
        Box::pin(async move {
            let settings = self
                .settings
                .lock()
                .map_err(|_| ChatError::store("settings store lock poisoned"))?;
            Ok(settings.clone())
        })
    }

    fn save<'a>(&'a self, settings: &'a Settings) -> ChatFuture<'a, Result<(), ChatError>> {
        Box::pin(async move {
            let mut stored = self
                .settings
                .lock()
                .map_err(|_| ChatError::store("settings store lock poisoned"))?;
            *stored = settings.clone();
            Ok(())
        })
    }
}

/// Pretty-printed JSON file; a missing file loads as [`Settings::default`].
#[derive(Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSettingsStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn load<'a>(&'a self) -> ChatFuture<'a, Result<Settings, ChatError>> {
        Box::pin(async move {
            let _guard = self
                .lock
                .lock()
                .map_err(|_| ChatError::store("settings file lock poisoned"))?;

            if !self.path.exists() {
                return Ok(Settings::default());
            }

            let bytes = fs::read(&self.path).map_err(|error| {
                ChatError::store(format!("failed to read settings file: {error}"))
            })?;
            serde_json::from_slice::<Settings>(&bytes).map_err(|error| {
                ChatError::store(format!("failed to deserialize settings: {error}"))
            })
        })
    }

    fn save<'a>(&'a self, settings: &'a Settings) -> ChatFuture<'a, Result<(), ChatError>> {
        Box::pin(async move {
            let _guard = self
                .lock
                .lock()
                .map_err(|_| ChatError::store("settings file lock poisoned"))?;

            let bytes = serde_json::to_vec_pretty(settings).map_err(|error| {
                ChatError::store(format!("failed to serialize settings: {error}"))
            })?;
            write_atomic(&self.path, &bytes)
        })
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ChatError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|error| {
            ChatError::store(format!("failed to create settings directory: {error}"))
        })?;
    }

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, bytes).map_err(|error| {
        ChatError::store(format!("failed to write temporary settings file: {error}"))
    })?;

    fs::rename(&tmp, path)
        .map_err(|error| ChatError::store(format!("failed to finalize settings file: {error}")))
}
