#[cfg(test)]
mod tests {
    use taskhub::libs::config::{Config, UserConfig, ViewConfig};
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

    // Single test: the context redirects HOME for the whole process, so the
    // read/write sequence has to stay in one place.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_roundtrip(_ctx: &mut ConfigTestContext) {
        // No file yet: defaults, nothing configured
        let config = Config::read().unwrap();
        assert!(config.user.is_none());
        assert!(config.view.is_none());

        let config = Config {
            user: Some(UserConfig { name: "alice".to_string() }),
            view: Some(ViewConfig {
                show_owner: false,
                show_created: true,
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.user, Some(UserConfig { name: "alice".to_string() }));
        assert_eq!(
            loaded.view,
            Some(ViewConfig {
                show_owner: false,
                show_created: true,
            })
        );
    }
}
