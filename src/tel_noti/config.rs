use crate::error::{Result, TelNotiError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_DIRNAME: &str = "tel_noti";
pub const CONFIG_FILENAME: &str = "config.json";

/// The persisted bot credential and recipient, stored in
/// `~/.config/tel_noti/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotiConfig {
    /// Bot token issued by @BotFather
    pub bot_token: String,

    /// Chat that receives the notifications (negative for groups)
    pub chat_id: i64,
}

impl NotiConfig {
    pub fn new(bot_token: impl Into<String>, chat_id: i64) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id,
        }
    }

    /// True iff something is present at `config_path`. Contents are not
    /// checked, so an unreadable entry is left for [`NotiConfig::load`] to report.
    pub fn exists<P: AsRef<Path>>(config_path: P) -> bool {
        config_path.as_ref().exists()
    }

    /// Load config from `config_path`. A missing file is an error here,
    /// callers are expected to check [`NotiConfig::exists`] first.
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let content = fs::read_to_string(config_path.as_ref()).map_err(TelNotiError::Io)?;
        let config: NotiConfig =
            serde_json::from_str(&content).map_err(TelNotiError::Serialization)?;
        Ok(config)
    }

    /// Save config to `config_path`, creating the parent directory if needed.
    /// Any existing file is overwritten.
    pub fn save<P: AsRef<Path>>(&self, config_path: P) -> Result<()> {
        let config_path = config_path.as_ref();

        if let Some(dir) = config_path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(TelNotiError::Io)?;
            }
        }

        let content = serde_json::to_string_pretty(self).map_err(TelNotiError::Serialization)?;
        fs::write(config_path, content).map_err(TelNotiError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_path(temp: &TempDir) -> std::path::PathBuf {
        temp.path().join(".config").join(CONFIG_DIRNAME).join(CONFIG_FILENAME)
    }

    #[test]
    fn test_exists_false_before_save() {
        let temp = TempDir::new().unwrap();
        assert!(!NotiConfig::exists(config_path(&temp)));
    }

    #[test]
    fn test_exists_ignores_contents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "not json").unwrap();
        assert!(NotiConfig::exists(&path));
    }

    #[test]
    fn test_exists_true_for_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::create_dir(&path).unwrap();

        assert!(NotiConfig::exists(&path));
        assert!(matches!(NotiConfig::load(&path), Err(TelNotiError::Io(_))));
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = config_path(&temp);

        let config = NotiConfig::new("abc", 123);
        config.save(&path).unwrap();

        assert!(NotiConfig::exists(&path));
        let loaded = NotiConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_save_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = config_path(&temp);

        NotiConfig::new("old", 1).save(&path).unwrap();
        NotiConfig::new("new", -100200300).save(&path).unwrap();

        let loaded = NotiConfig::load(&path).unwrap();
        assert_eq!(loaded.bot_token, "new");
        assert_eq!(loaded.chat_id, -100200300);
    }

    #[test]
    fn test_save_into_existing_dir() {
        let temp = TempDir::new().unwrap();
        let path = config_path(&temp);
        fs::create_dir_all(path.parent().unwrap()).unwrap();

        NotiConfig::new("abc", 123).save(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = NotiConfig::load(config_path(&temp));
        assert!(matches!(result, Err(TelNotiError::Io(_))));
    }

    #[test]
    fn test_load_malformed_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "{\"bot_token\": \"abc\"").unwrap();

        let result = NotiConfig::load(&path);
        assert!(matches!(result, Err(TelNotiError::Serialization(_))));
    }

    #[test]
    fn test_load_rejects_string_chat_id() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, r#"{"bot_token": "abc", "chat_id": "abc"}"#).unwrap();

        assert!(NotiConfig::load(&path).is_err());
    }

    #[test]
    fn test_load_reads_whole_file() {
        // Well past any small fixed read buffer
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        let token = "x".repeat(4096);
        fs::write(
            &path,
            format!("{{\"bot_token\": \"{}\", \"chat_id\": 42}}", token),
        )
        .unwrap();

        let loaded = NotiConfig::load(&path).unwrap();
        assert_eq!(loaded.bot_token.len(), 4096);
        assert_eq!(loaded.chat_id, 42);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(NotiConfig::new("abc", 123)).unwrap();
        assert_eq!(json["bot_token"], "abc");
        assert_eq!(json["chat_id"], 123);
    }
}
