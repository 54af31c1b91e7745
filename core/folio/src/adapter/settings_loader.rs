//! settings.json の読み込み

use crate::domain::Settings;
use crate::ports::outbound::SettingsLoader;
use common::error::Error;
use common::ports::outbound::{EnvResolver, FileSystem};
use std::sync::Arc;

pub struct JsonSettingsLoader {
    fs: Arc<dyn FileSystem>,
    env: Arc<dyn EnvResolver>,
}

impl JsonSettingsLoader {
    pub fn new(fs: Arc<dyn FileSystem>, env: Arc<dyn EnvResolver>) -> Self {
        Self { fs, env }
    }
}

impl SettingsLoader for JsonSettingsLoader {
    fn load_settings(&self) -> Result<Settings, Error> {
        let Ok(dirs) = self.env.resolve_dirs() else {
            return Ok(Settings::default());
        };
        let path = dirs.settings_file();
        match self.fs.read_optional(&path)? {
            Some(content) => serde_json::from_str(&content)
                .map_err(|e| Error::json(format!("{}: {}", path.display(), e))),
            None => Ok(Settings::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClosePolicy;
    use common::adapter::StdFileSystem;
    use common::domain::{Dirs, HomeDir};
    use std::path::PathBuf;
    use tempfile::tempdir;

    struct DirEnv(PathBuf);

    impl EnvResolver for DirEnv {
        fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
            Ok(HomeDir::new(self.0.clone()))
        }
        fn resolve_dirs(&self) -> Result<Dirs, Error> {
            Ok(Dirs {
                config_dir: self.0.clone(),
                state_dir: self.0.join("state"),
            })
        }
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let loader = JsonSettingsLoader::new(
            Arc::new(StdFileSystem),
            Arc::new(DirEnv(dir.path().to_path_buf())),
        );
        assert_eq!(loader.load_settings().unwrap(), Settings::default());
    }

    #[test]
    fn test_reads_settings_file() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"reply_delay_ms": 20, "close_policy": "suppress"}"#,
        )
        .unwrap();
        let loader = JsonSettingsLoader::new(
            Arc::new(StdFileSystem),
            Arc::new(DirEnv(dir.path().to_path_buf())),
        );
        let s = loader.load_settings().unwrap();
        assert_eq!(s.reply_delay_ms, 20);
        assert_eq!(s.close_policy, ClosePolicy::Suppress);
    }

    #[test]
    fn test_unknown_policy_is_json_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), r#"{"close_policy": "maybe"}"#).unwrap();
        let loader = JsonSettingsLoader::new(
            Arc::new(StdFileSystem),
            Arc::new(DirEnv(dir.path().to_path_buf())),
        );
        assert_eq!(loader.load_settings().unwrap_err().exit_code(), 65);
    }
}
