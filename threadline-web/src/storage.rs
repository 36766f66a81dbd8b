use anyhow::anyhow;
use gloo_storage::{LocalStorage, Storage};
use threadline_client::LocalStore;

/// The browser's `localStorage`, holding slot values verbatim
pub struct BrowserStorage;

impl LocalStore for BrowserStorage {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| anyhow!("reading {key:?} from local storage: {e:?}"))
    }

    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| anyhow!("saving {key:?} to local storage: {e:?}"))
    }
}
