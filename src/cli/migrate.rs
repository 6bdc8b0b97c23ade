use crate::cli::MigrateCommand;
use crate::{Config, Database};
use anyhow::Result;
use std::path::Path;

pub async fn run(config_path: &Path, command: Option<MigrateCommand>) -> Result<()> {
    let config = Config::load(config_path)?;
    let db = Database::open(&config.database.path)?;

    match command {
        None => {
            db.migrate()?;
            tracing::info!("Migrations complete");
        }
        Some(MigrateCommand::Status) => show_status(&db)?,
    }

    Ok(())
}

fn show_status(db: &Database) -> Result<()> {
    let statuses = db.migration_status()?;

    println!("\n  Migration Status\n");
    println!("  {:<10} {:<40} Applied", "Version", "Description");
    println!("  {}", "-".repeat(72));

    for status in &statuses {
        let applied = match &status.applied_at {
            Some(ts) => format!("\x1b[32m✓\x1b[0m {}", ts),
            None => "\x1b[33m✗ pending\x1b[0m".to_string(),
        };
        println!(
            "  {:<10} {:<40} {}",
            format!("{:03}", status.version),
            status.description,
            applied
        );
    }

    let pending = statuses.iter().filter(|s| s.applied_at.is_none()).count();
    println!();
    if pending == 0 {
        println!("  All migrations applied.");
    } else {
        println!("  {} pending migration(s). Run 'carnet migrate' to apply.", pending);
    }
    println!();

    Ok(())
}
