use anyhow::Result;
use std::path::PathBuf;

pub fn default_config(site_name: &str) -> String {
    format!(
        r#"[site]
title = "{}"
language = "en"

[server]
host = "127.0.0.1"
port = 3000

[database]
path = "./data/carnet.db"
pool_size = 10

[validation]
# Require post name and content to be exactly 2 characters.
strict_length = false
"#,
        site_name.replace('\\', "\\\\").replace('"', "\\\"")
    )
}

pub async fn run(path: PathBuf, name: Option<String>) -> Result<()> {
    let site_name = name.unwrap_or_else(|| "My Blog".to_string());

    let config_path = path.join("carnet.toml");
    if config_path.exists() {
        anyhow::bail!("{} already exists", config_path.display());
    }

    std::fs::create_dir_all(path.join("data"))?;
    std::fs::write(&config_path, default_config(&site_name))?;

    tracing::info!("Created new site at {:?}", path);
    tracing::info!("Run 'carnet migrate' to set up the database");
    tracing::info!("Run 'carnet serve' to start the server");

    Ok(())
}
