use std::{collections::BTreeMap, io, path::PathBuf};

use anyhow::Context;
use threadline_client::LocalStore;

/// Slots kept as a single JSON object in a file
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> FileStore {
        FileStore { path }
    }

    fn slots(&self) -> anyhow::Result<BTreeMap<String, String>> {
        match std::fs::read(&self.path) {
            Ok(raw) => serde_json::from_slice(&raw)
                .with_context(|| format!("parsing state file {:?}", self.path)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e).with_context(|| format!("reading state file {:?}", self.path)),
        }
    }
}

impl LocalStore for FileStore {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.slots()?.remove(key))
    }

    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut slots = self.slots()?;
        slots.insert(String::from(key), String::from(value));
        let raw = serde_json::to_vec_pretty(&slots).context("serializing state file")?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("writing state file {:?}", self.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().expect("creating tempdir");
        let store = FileStore::new(dir.path().join("state.json"));
        assert_eq!(store.read("comments").expect("reading"), None);
    }

    #[test]
    fn writes_keep_other_slots() {
        let dir = tempfile::tempdir().expect("creating tempdir");
        let path = dir.path().join("state.json");
        let mut store = FileStore::new(path.clone());
        store.write("comments", "[]").expect("writing");
        store.write("other", "x").expect("writing");
        store.write("comments", "[1]").expect("overwriting");

        let reopened = FileStore::new(path);
        assert_eq!(
            reopened.read("comments").expect("reading").as_deref(),
            Some("[1]")
        );
        assert_eq!(reopened.read("other").expect("reading").as_deref(), Some("x"));
    }

    #[test]
    fn garbage_file_is_an_error() {
        let dir = tempfile::tempdir().expect("creating tempdir");
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not json").expect("writing garbage");
        assert!(FileStore::new(path).read("comments").is_err());
    }
}
