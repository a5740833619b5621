#[cfg(test)]
mod tests {
    use taskhub::db::users::Users;
    use taskhub::libs::config::{Config, UserConfig};
    use taskhub::libs::service::Caller;
    use taskhub::libs::session::{resolve_caller, Session};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SessionTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for SessionTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            SessionTestContext { _temp_dir: temp_dir }
        }
    }

    // Single test: the context redirects HOME for the whole process, so the
    // whole session lifecycle has to run in sequence.
    #[test_context(SessionTestContext)]
    #[test]
    fn test_session_lifecycle_and_caller_resolution(_ctx: &mut SessionTestContext) {
        // Nothing stored anywhere: anonymous
        assert!(Session::read().unwrap().is_none());
        assert_eq!(resolve_caller().unwrap(), Caller::anonymous());

        // A configured default user that does not exist stays anonymous
        Config {
            user: Some(UserConfig { name: "alice".to_string() }),
            view: None,
        }
        .save()
        .unwrap();
        assert_eq!(resolve_caller().unwrap(), Caller::anonymous());

        // Once the user exists, the config fallback kicks in
        let alice_id = Users::new().unwrap().create("alice").unwrap();
        assert_eq!(resolve_caller().unwrap(), Caller::authenticated(alice_id));

        // An active session wins over the config fallback
        let bob_id = Users::new().unwrap().create("bob").unwrap();
        Session {
            user_id: bob_id,
            username: "bob".to_string(),
        }
        .save()
        .unwrap();
        assert_eq!(Session::read().unwrap().unwrap().username, "bob");
        assert_eq!(resolve_caller().unwrap(), Caller::authenticated(bob_id));

        // Logout falls back to the configured default again
        Session::clear().unwrap();
        assert!(Session::read().unwrap().is_none());
        assert_eq!(resolve_caller().unwrap(), Caller::authenticated(alice_id));
    }
}
