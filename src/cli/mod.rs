pub mod category;
pub mod init;
pub mod migrate;
pub mod post;
pub mod serve;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "carnet")]
#[command(version)]
#[command(about = "A small blog administration backend", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "carnet.toml", env = "CARNET_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new site directory with a default configuration
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
        #[arg(long)]
        name: Option<String>,
    },
    /// Run pending migrations and start the web server
    Serve {
        #[arg(short = 'H', long)]
        host: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Apply pending database migrations
    Migrate {
        #[command(subcommand)]
        command: Option<MigrateCommand>,
    },
    Post {
        #[command(subcommand)]
        command: PostCommand,
    },
    Category {
        #[command(subcommand)]
        command: CategoryCommand,
    },
}

#[derive(Subcommand)]
pub enum MigrateCommand {
    /// Show applied and pending migrations
    Status,
}

#[derive(Subcommand)]
pub enum PostCommand {
    List,
    /// Attach a post to a category, or detach it when no category is given
    Categorize {
        id: i64,
        #[arg(long)]
        category: Option<i64>,
    },
}

#[derive(Subcommand)]
pub enum CategoryCommand {
    List,
}
