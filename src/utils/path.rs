use std::path::PathBuf;

const APP_DIR: &str = "campaign-browser";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory path (always ~/.config/campaign-browser, regardless of OS)
pub fn get_config_dir() -> PathBuf {
    get_home_dir().join(".config").join(APP_DIR)
}

/// Get the config file path
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Directory the log file is written to (user cache dir, falling back to home)
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join(APP_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_layout() {
        let path = get_config_path();
        assert!(path.ends_with(".config/campaign-browser/config.toml"));
    }

    #[test]
    fn test_log_dir_is_app_specific() {
        assert!(get_log_dir().ends_with(APP_DIR));
    }
}
