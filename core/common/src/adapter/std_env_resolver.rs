//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::{Dirs, HomeDir};
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "folio";

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.is_empty())
}

/// 環境変数の参照関数からホームディレクトリを解決する（テスト可能にするため分離）
pub fn home_dir_from(lookup: impl Fn(&str) -> Option<String>) -> Result<HomeDir, Error> {
    if let Some(home) = lookup("FOLIO_HOME") {
        return Ok(HomeDir::new(PathBuf::from(home)));
    }
    let config_base = lookup("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| lookup("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok_or_else(|| Error::env("HOME is not set"))?;
    Ok(HomeDir::new(config_base.join(APP_DIR)))
}

/// 環境変数の参照関数から Dirs を解決する
pub fn dirs_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Dirs, Error> {
    if let Some(home) = lookup("FOLIO_HOME") {
        let home = PathBuf::from(home);
        return Ok(Dirs {
            config_dir: home.clone(),
            state_dir: home.join("state"),
        });
    }
    let config_dir = home_dir_from(&lookup)?.to_path_buf();
    let state_dir = lookup("XDG_STATE_HOME")
        .map(|s| PathBuf::from(s).join(APP_DIR))
        .or_else(|| {
            lookup("HOME").map(|h| PathBuf::from(h).join(".local/state").join(APP_DIR))
        })
        .ok_or_else(|| Error::env("HOME is not set"))?;
    Ok(Dirs {
        config_dir,
        state_dir,
    })
}

impl EnvResolver for StdEnvResolver {
    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        home_dir_from(non_empty_var)
    }

    fn resolve_dirs(&self) -> Result<Dirs, Error> {
        dirs_from(non_empty_var)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_folio_home_takes_precedence() {
        let l = lookup(&[("FOLIO_HOME", "/opt/folio"), ("HOME", "/home/u")]);
        let dirs = dirs_from(&l).unwrap();
        assert_eq!(dirs.config_dir, PathBuf::from("/opt/folio"));
        assert_eq!(dirs.state_dir, PathBuf::from("/opt/folio/state"));
        assert_eq!(*home_dir_from(&l).unwrap(), PathBuf::from("/opt/folio"));
    }

    #[test]
    fn test_xdg_dirs() {
        let l = lookup(&[
            ("XDG_CONFIG_HOME", "/x/config"),
            ("XDG_STATE_HOME", "/x/state"),
            ("HOME", "/home/u"),
        ]);
        let dirs = dirs_from(&l).unwrap();
        assert_eq!(dirs.config_dir, PathBuf::from("/x/config/folio"));
        assert_eq!(dirs.state_dir, PathBuf::from("/x/state/folio"));
    }

    #[test]
    fn test_home_fallback() {
        let l = lookup(&[("HOME", "/home/u")]);
        let dirs = dirs_from(&l).unwrap();
        assert_eq!(dirs.config_dir, PathBuf::from("/home/u/.config/folio"));
        assert_eq!(dirs.state_dir, PathBuf::from("/home/u/.local/state/folio"));
    }

    #[test]
    fn test_no_home_is_env_error() {
        let l = lookup(&[]);
        let err = dirs_from(&l).unwrap_err();
        assert!(matches!(err, Error::Env(_)));
    }
}
