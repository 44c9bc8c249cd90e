use std::{
    collections::BTreeMap,
    env,
    path::{Path, PathBuf},
};
use tracing::{error, warn};

/// Key-value storage port for the entry store. Values are opaque strings
/// (JSON arrays in practice). Writes are best-effort: implementations swallow
/// failures rather than surfacing them, so the page always keeps rendering
/// with whatever state it has.
pub trait KvStorage: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn keys(&self) -> Vec<String>;
}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/worklog.json"))
}

/// Disk-backed storage: the whole key-value map lives in one JSON file and is
/// rewritten on every `set`.
pub struct FileStorage {
    path: PathBuf,
    map: BTreeMap<String, String>,
}

impl FileStorage {
    pub fn open(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            map: load_map(path),
        }
    }

    fn flush(&self) {
        let payload = match serde_json::to_vec_pretty(&self.map) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("failed to serialize data file: {err}");
                return;
            }
        };
        if let Err(err) = std::fs::write(&self.path, payload) {
            warn!("failed to write data file: {err}");
        }
    }
}

fn load_map(path: &Path) -> BTreeMap<String, String> {
    match std::fs::read(path) {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(map) => map,
            Err(err) => {
                error!("failed to parse data file: {err}");
                BTreeMap::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
        Err(err) => {
            error!("failed to read data file: {err}");
            BTreeMap::new()
        }
    }
}

impl KvStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.map.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn keys(&self) -> Vec<String> {
        self.map.keys().cloned().collect()
    }
}

/// In-memory storage used by tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    map: BTreeMap<String, String>,
}

impl KvStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.map.insert(key.to_string(), value.to_string());
    }

    fn keys(&self) -> Vec<String> {
        self.map.keys().cloned().collect()
    }
}
