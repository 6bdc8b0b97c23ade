use crate::cli::PostCommand;
use crate::services::posts;
use crate::{Config, Database};
use anyhow::Result;
use std::path::Path;

pub async fn run(config_path: &Path, command: PostCommand) -> Result<()> {
    let config = Config::load(config_path)?;
    let db = Database::open(&config.database.path)?;
    db.migrate()?;

    match command {
        PostCommand::List => {
            let posts = posts::list_posts(&db)?;
            if posts.is_empty() {
                println!("No posts found.");
                return Ok(());
            }
            println!("{:<6} {:<30} {:<30} Category", "ID", "Name", "Slug");
            println!("{}", "-".repeat(80));
            for item in posts {
                println!(
                    "{:<6} {:<30} {:<30} {}",
                    item.post.id,
                    item.post.name,
                    item.post.slug.as_deref().unwrap_or("-"),
                    item.category.as_ref().map(|c| c.name.as_str()).unwrap_or("-"),
                );
            }
        }
        PostCommand::Categorize { id, category } => {
            posts::set_post_category(&db, id, category)?;
            match category {
                Some(category_id) => {
                    println!("Post {} now belongs to category {}.", id, category_id)
                }
                None => println!("Post {} no longer has a category.", id),
            }
        }
    }

    Ok(())
}
