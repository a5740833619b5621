#[cfg(test)]
mod tests {
    use taskhub::db::db::Db;
    use taskhub::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            MigrationTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_is_fully_migrated(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.temp_dir.path().join("taskhub.db")).unwrap();

        assert_eq!(get_db_version(&db.conn).unwrap(), 2);
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history_is_recorded(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.temp_dir.path().join("taskhub.db")).unwrap();

        let manager = MigrationManager::new();
        let history = manager.get_migration_history(&db.conn).unwrap();

        let names: Vec<(u32, String)> = history.into_iter().map(|(version, name, _)| (version, name)).collect();
        assert_eq!(
            names,
            vec![(1, "create_users_and_tasks".to_string()), (2, "add_task_visibility".to_string())]
        );
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_reopening_runs_no_further_migrations(ctx: &mut MigrationTestContext) {
        let db_path = ctx.temp_dir.path().join("taskhub.db");

        let db = Db::open(&db_path).unwrap();
        drop(db);

        // Second open finds the schema current and leaves the history alone
        let db = Db::open(&db_path).unwrap();
        let manager = MigrationManager::new();
        assert_eq!(manager.get_migration_history(&db.conn).unwrap().len(), 2);
    }
}
