use crate::cli::CategoryCommand;
use crate::services::categories;
use crate::{Config, Database};
use anyhow::Result;
use std::path::Path;

pub async fn run(config_path: &Path, command: CategoryCommand) -> Result<()> {
    let config = Config::load(config_path)?;
    let db = Database::open(&config.database.path)?;
    db.migrate()?;

    match command {
        CategoryCommand::List => {
            let categories = categories::list_categories(&db)?;
            if categories.is_empty() {
                println!("No categories found.");
                return Ok(());
            }
            println!("{:<6} {:<30} Slug", "ID", "Name");
            println!("{}", "-".repeat(60));
            for category in categories {
                println!("{:<6} {:<30} {}", category.id, category.name, category.slug);
            }
        }
    }

    Ok(())
}
