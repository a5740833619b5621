#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use taskhub::db::users::Users;
    use taskhub::libs::service::{Caller, TaskService};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct VisibilityTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for VisibilityTestContext {
        fn setup() -> Self {
            VisibilityTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl VisibilityTestContext {
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

    #[test_context(VisibilityTestContext)]
    #[test]
    fn test_private_flip_hides_task_from_others(ctx: &mut VisibilityTestContext) {
        let alice = ctx.add_user("alice");
        let bob = ctx.add_user("bob");
        let mut service = ctx.service();

        let task = service.create(&alice, "buy milk").unwrap();
        let task_id = task.id.unwrap();
        assert!(!task.private);
        assert!(!task.checked);

        // Public task: visible to its owner, to other users, and anonymously
        assert_eq!(service.list(&bob).unwrap().len(), 1);
        assert_eq!(service.list(&Caller::anonymous()).unwrap().len(), 1);

        service.set_private(&alice, task_id, true).unwrap();

        assert!(service.list(&bob).unwrap().is_empty());
        assert!(service.list(&Caller::anonymous()).unwrap().is_empty());
        assert_eq!(service.list(&alice).unwrap().len(), 1);

        // Flipping back restores the shared view
        service.set_private(&alice, task_id, false).unwrap();
        assert_eq!(service.list(&bob).unwrap().len(), 1);
    }

    #[test_context(VisibilityTestContext)]
    #[test]
    fn test_list_never_leaks_foreign_private_tasks(ctx: &mut VisibilityTestContext) {
        let alice = ctx.add_user("alice");
        let bob = ctx.add_user("bob");
        let mut service = ctx.service();

        let alice_secret = service.create(&alice, "Buy a present").unwrap().id.unwrap();
        service.set_private(&alice, alice_secret, true).unwrap();
        let bob_secret = service.create(&bob, "Doctor appointment").unwrap().id.unwrap();
        service.set_private(&bob, bob_secret, true).unwrap();
        service.create(&alice, "Team standup notes").unwrap();

        let bob_view = service.list(&bob).unwrap();
        assert_eq!(bob_view.len(), 2);
        assert!(bob_view.iter().all(|t| t.id != Some(alice_secret)));

        let alice_view = service.list(&alice).unwrap();
        assert_eq!(alice_view.len(), 2);
        assert!(alice_view.iter().all(|t| t.id != Some(bob_secret)));
    }

    #[test_context(VisibilityTestContext)]
    #[test]
    fn test_created_at_is_non_decreasing(ctx: &mut VisibilityTestContext) {
        let alice = ctx.add_user("alice");
        let mut service = ctx.service();

        let first = service.create(&alice, "first").unwrap();
        let second = service.create(&alice, "second").unwrap();
        let third = service.create(&alice, "third").unwrap();

        assert!(first.created_at.unwrap() <= second.created_at.unwrap());
        assert!(second.created_at.unwrap() <= third.created_at.unwrap());
    }
}
