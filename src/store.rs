//! Key-value persistence for the high score.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Minimal external key-value store; values are plain strings.
pub trait HighScoreStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-process store. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<BTreeMap<String, String>>>,
}

impl HighScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use super::*;
    use std::path::PathBuf;

    /// YAML map on disk, read and rewritten on every access.
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        fn load(&self) -> BTreeMap<String, String> {
            let Ok(yaml) = std::fs::read_to_string(&self.path) else {
                return BTreeMap::new();
            };
            serde_yaml::from_str(&yaml).unwrap_or_else(|err| {
                log::warn!("ignoring unreadable store {}: {err}", self.path.display());
                BTreeMap::new()
            })
        }
    }

    impl HighScoreStore for FileStore {
        fn get(&self, key: &str) -> Option<String> {
            self.load().remove(key)
        }

        fn set(&mut self, key: &str, value: &str) {
            let mut values = self.load();
            values.insert(key.to_string(), value.to_string());
            let written = serde_yaml::to_string(&values)
                .map_err(|e| e.to_string())
                .and_then(|yaml| std::fs::write(&self.path, yaml).map_err(|e| e.to_string()));
            if let Err(err) = written {
                log::warn!("could not save {key} to {}: {err}", self.path.display());
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageStore;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::HighScoreStore;

    /// Browser `localStorage`.
    #[derive(Default)]
    pub struct LocalStorageStore;

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    impl HighScoreStore for LocalStorageStore {
        fn get(&self, key: &str) -> Option<String> {
            storage()?.get_item(key).ok()?
        }

        fn set(&mut self, key: &str, value: &str) {
            if let Some(storage) = storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage rejected {key}");
                }
            }
        }
    }
}
