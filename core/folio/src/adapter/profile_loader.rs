//! プロフィールの読み込み（profile.json → 組み込み）

use crate::adapter::builtin_profile::builtin_profile;
use crate::domain::Profile;
use crate::ports::outbound::ProfileLoader;
use common::error::Error;
use common::ports::outbound::{EnvResolver, FileSystem};
use std::path::Path;
use std::sync::Arc;

pub struct JsonProfileLoader {
    fs: Arc<dyn FileSystem>,
    env: Arc<dyn EnvResolver>,
}

impl JsonProfileLoader {
    pub fn new(fs: Arc<dyn FileSystem>, env: Arc<dyn EnvResolver>) -> Self {
        Self { fs, env }
    }

    fn read(&self, path: &Path) -> Result<Profile, Error> {
        let content = self.fs.read_to_string(path)?;
        let profile: Profile = serde_json::from_str(&content)
            .map_err(|e| Error::json(format!("{}: {}", path.display(), e)))?;
        if profile.name.trim().is_empty() {
            return Err(Error::config(format!(
                "{}: profile name must not be empty",
                path.display()
            )));
        }
        Ok(profile)
    }
}

impl ProfileLoader for JsonProfileLoader {
    fn load_profile(&self, explicit: Option<&Path>) -> Result<Profile, Error> {
        if let Some(path) = explicit {
            return self.read(path);
        }
        let Ok(dirs) = self.env.resolve_dirs() else {
            return Ok(builtin_profile());
        };
        let path = dirs.profile_file();
        if self.fs.exists(&path) {
            self.read(&path)
        } else {
            Ok(builtin_profile())
        }
    }
}
