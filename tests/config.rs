#[cfg(test)]
mod tests {
    use flangup::libs::config::{Config, ServerConfig, ServerMode};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    /// One sequential lifecycle test: defaults, then save and read back.
    /// Kept as a single case because the data dir is redirected through
    /// process-wide environment variables.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_lifecycle(_ctx: &mut ConfigTestContext) {
        // Missing file reads as defaults.
        let config = Config::read().unwrap();
        assert!(config.server.is_none());
        let effective = config.server();
        assert_eq!(effective.mode, ServerMode::Automatic);
        assert!(effective.check_updates);
        assert!(effective.binary_path.is_none());

        // Save a manual-mode setup and read it back.
        let mut config = Config::default();
        config.server = Some(ServerConfig {
            mode: ServerMode::Manual,
            binary_path: Some("/opt/flang/bin/flang".to_string()),
            stdlib_path: None,
            check_updates: false,
        });
        config.save().unwrap();

        let read = Config::read().unwrap().server();
        assert_eq!(read.mode, ServerMode::Manual);
        assert_eq!(read.binary_path.as_deref(), Some("/opt/flang/bin/flang"));
        assert!(read.stdlib_path.is_none());
        assert!(!read.check_updates);
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ServerMode::Automatic).unwrap(), "\"automatic\"");
        assert_eq!(serde_json::to_string(&ServerMode::Manual).unwrap(), "\"manual\"");
    }

    #[test]
    fn test_sparse_file_fills_in_defaults() {
        let config: Config = serde_json::from_str(r#"{"server": {}}"#).unwrap();
        let server = config.server();
        assert_eq!(server.mode, ServerMode::Automatic);
        assert!(server.check_updates);
        assert!(server.binary_path.is_none());
        assert!(server.stdlib_path.is_none());
    }

    #[test]
    fn test_unconfigured_module_is_not_serialized() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_path_accessors() {
        let server = ServerConfig {
            mode: ServerMode::Manual,
            binary_path: Some("/opt/flang/bin/flang".to_string()),
            stdlib_path: Some("/opt/flang/stdlib".to_string()),
            check_updates: true,
        };
        assert_eq!(server.binary_dir().unwrap(), std::path::PathBuf::from("/opt/flang/bin/flang"));
        assert_eq!(server.stdlib_dir().unwrap(), std::path::PathBuf::from("/opt/flang/stdlib"));
    }
}
