use crate::api::TelNotiApi;
use crate::commands::NotiPaths;
use crate::config::{CONFIG_DIRNAME, CONFIG_FILENAME};
use crate::error::{Result, TelNotiError};
use crate::sender::Sender;
use directories::BaseDirs;
use std::path::Path;

/// `~/.config/tel_noti/config.json`, regardless of platform conventions.
pub fn paths_for_home(home: &Path) -> NotiPaths {
    NotiPaths {
        config_file: home
            .join(".config")
            .join(CONFIG_DIRNAME)
            .join(CONFIG_FILENAME),
    }
}

pub fn resolve_paths() -> Result<NotiPaths> {
    let base = BaseDirs::new().ok_or(TelNotiError::HomeDirUnavailable)?;
    Ok(paths_for_home(base.home_dir()))
}

pub fn initialize() -> Result<TelNotiApi> {
    Ok(TelNotiApi::new(resolve_paths()?, Sender::new()))
}
