use crate::api::{LOCAL_AUTHOR, STORAGE_KEY};

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Name shown on comments written by the local user
    pub author_name: String,

    /// Key of the local store slot holding locally-added comments
    pub storage_key: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            author_name: String::from(LOCAL_AUTHOR),
            storage_key: String::from(STORAGE_KEY),
        }
    }
}
