use crate::db::users::User;
use crate::libs::config::ViewConfig;
use crate::libs::task::Task;
use anyhow::Result;
use prettytable::{Cell, Row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task], options: &ViewConfig) -> Result<()> {
        let mut table = Table::new();

        let mut header = vec!["ID", "DONE", "VISIBILITY", "TEXT"];
        if options.show_owner {
            header.push("OWNER");
        }
        if options.show_created {
            header.push("CREATED");
        }
        table.add_row(Row::new(header.iter().map(|title| Cell::new(title)).collect()));

        for task in tasks {
            let id = task.id.unwrap_or(0).to_string();
            let done = if task.checked { "✔" } else { "" };
            let visibility = if task.private { "private" } else { "public" };

            let mut cells = vec![Cell::new(&id), Cell::new(done), Cell::new(visibility), Cell::new(&task.text)];
            if options.show_owner {
                cells.push(Cell::new(&task.username));
            }
            if options.show_created {
                let created = task.created_at.map(|ts| ts.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_default();
                cells.push(Cell::new(&created));
            }
            table.add_row(Row::new(cells));
        }
        table.printstd();

        Ok(())
    }

    pub fn users(users: &[User]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(Row::new(vec![Cell::new("ID"), Cell::new("NAME"), Cell::new("CREATED")]));
        for user in users {
            let id = user.id.unwrap_or(0).to_string();
            let created = user.created_at.map(|ts| ts.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_default();
            table.add_row(Row::new(vec![Cell::new(&id), Cell::new(&user.name), Cell::new(&created)]));
        }
        table.printstd();

        Ok(())
    }
}
