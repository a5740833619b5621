#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use taskhub::db::users::Users;
    use taskhub::libs::service::{Caller, ServiceError, TaskService};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct AuthTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for AuthTestContext {
        fn setup() -> Self {
            AuthTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl AuthTestContext {
        fn db_path(&self) -> PathBuf {
            self.temp_dir.path().join("taskhub.db")
        }

        fn service(&self) -> TaskService {
            TaskService::open(&self.db_path()).unwrap()
        }

        fn add_user(&self, name: &str) -> Caller {
            let mut users = Users::open(&self.db_path()).unwrap();
            Caller::authenticated(users.create(name).unwrap())
        }
    }

    #[test_context(AuthTestContext)]
    #[test]
    fn test_create_requires_login(ctx: &mut AuthTestContext) {
        let mut service = ctx.service();

        let result = service.create(&Caller::anonymous(), "Buy milk");
        assert!(matches!(result, Err(ServiceError::Unauthorized)));

        // Identity is checked before the text is even looked at
        let result = service.create(&Caller::anonymous(), "");
        assert!(matches!(result, Err(ServiceError::Unauthorized)));

        // A session pointing at a deleted user is no better than no session
        let result = service.create(&Caller::authenticated(42), "Buy milk");
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test_context(AuthTestContext)]
    #[test]
    fn test_create_rejects_blank_text(ctx: &mut AuthTestContext) {
        let alice = ctx.add_user("alice");
        let mut service = ctx.service();

        let result = service.create(&alice, "   ");
        assert!(matches!(result, Err(ServiceError::Validation(_))));

        // The failed call must not have inserted anything
        assert!(service.list(&alice).unwrap().is_empty());
    }

    #[test_context(AuthTestContext)]
    #[test]
    fn test_create_snapshots_owner(ctx: &mut AuthTestContext) {
        let alice = ctx.add_user("alice");
        let mut service = ctx.service();

        let task = service.create(&alice, "Buy milk").unwrap();
        assert_eq!(Some(task.owner), alice.user_id);
        assert_eq!(task.username, "alice");
        assert!(!task.checked);
        assert!(!task.private);
    }

    #[test_context(AuthTestContext)]
    #[test]
    fn test_private_task_checked_only_by_owner(ctx: &mut AuthTestContext) {
        let alice = ctx.add_user("alice");
        let bob = ctx.add_user("bob");
        let mut service = ctx.service();

        let task = service.create(&alice, "Buy a present").unwrap();
        let task_id = task.id.unwrap();
        service.set_private(&alice, task_id, true).unwrap();

        let result = service.set_checked(&bob, task_id, true);
        assert!(matches!(result, Err(ServiceError::Unauthorized)));

        service.set_checked(&alice, task_id, true).unwrap();
        let task = service.list(&alice).unwrap().into_iter().find(|t| t.id == Some(task_id)).unwrap();
        assert!(task.checked);
    }

    #[test_context(AuthTestContext)]
    #[test]
    fn test_public_task_open_to_everyone(ctx: &mut AuthTestContext) {
        let alice = ctx.add_user("alice");
        let bob = ctx.add_user("bob");
        let mut service = ctx.service();

        let first = service.create(&alice, "Water plants").unwrap().id.unwrap();
        let second = service.create(&alice, "Team standup notes").unwrap().id.unwrap();

        // Anyone may check off a public task, even anonymously
        service.set_checked(&bob, first, true).unwrap();
        service.set_checked(&Caller::anonymous(), first, false).unwrap();

        // And anyone may remove one
        service.remove(&bob, first).unwrap();
        service.remove(&Caller::anonymous(), second).unwrap();
        assert!(service.list(&alice).unwrap().is_empty());
    }

    #[test_context(AuthTestContext)]
    #[test]
    fn test_private_task_removed_only_by_owner(ctx: &mut AuthTestContext) {
        let alice = ctx.add_user("alice");
        let bob = ctx.add_user("bob");
        let mut service = ctx.service();

        let task_id = service.create(&alice, "Buy a present").unwrap().id.unwrap();
        service.set_private(&alice, task_id, true).unwrap();

        assert!(matches!(service.remove(&bob, task_id), Err(ServiceError::Unauthorized)));
        assert!(matches!(service.remove(&Caller::anonymous(), task_id), Err(ServiceError::Unauthorized)));

        service.remove(&alice, task_id).unwrap();
        assert!(service.list(&alice).unwrap().is_empty());
    }

    #[test_context(AuthTestContext)]
    #[test]
    fn test_visibility_owned_by_owner_alone(ctx: &mut AuthTestContext) {
        let alice = ctx.add_user("alice");
        let bob = ctx.add_user("bob");
        let mut service = ctx.service();

        let task_id = service.create(&alice, "Water plants").unwrap().id.unwrap();

        // Stricter than remove/check: even on a public task, only the owner
        // may touch the visibility flag
        assert!(matches!(service.set_private(&bob, task_id, true), Err(ServiceError::Unauthorized)));
        assert!(matches!(
            service.set_private(&Caller::anonymous(), task_id, true),
            Err(ServiceError::Unauthorized)
        ));

        service.set_private(&alice, task_id, true).unwrap();
        service.set_private(&alice, task_id, false).unwrap();
    }

    #[test_context(AuthTestContext)]
    #[test]
    fn test_missing_task_reports_not_found(ctx: &mut AuthTestContext) {
        let alice = ctx.add_user("alice");
        let mut service = ctx.service();

        assert!(matches!(service.remove(&alice, 999), Err(ServiceError::NotFound(999))));
        assert!(matches!(service.set_checked(&alice, 999, true), Err(ServiceError::NotFound(999))));
        assert!(matches!(service.set_private(&alice, 999, true), Err(ServiceError::NotFound(999))));
    }
}
