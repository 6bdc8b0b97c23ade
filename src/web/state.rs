use crate::services::posts::PostRules;
use crate::{Config, Database};
use anyhow::Result;
use std::collections::HashMap;
use tera::{Tera, Value};

pub struct AppState {
    pub config: Config,
    pub db: Database,
    pub templates: Tera,
}

impl AppState {
    pub fn new(config: Config, db: Database) -> Result<Self> {
        let mut templates = Tera::default();

        templates.register_filter("format_date", format_date_filter);
        templates.add_raw_templates(vec![
            ("base.html", include_str!("../../templates/base.html")),
            ("salut.html", include_str!("../../templates/salut.html")),
            ("posts/index.html", include_str!("../../templates/posts/index.html")),
            ("posts/show.html", include_str!("../../templates/posts/show.html")),
            ("posts/form.html", include_str!("../../templates/posts/form.html")),
            ("categories/index.html", include_str!("../../templates/categories/index.html")),
            ("categories/show.html", include_str!("../../templates/categories/show.html")),
            ("categories/form.html", include_str!("../../templates/categories/form.html")),
        ])?;

        Ok(Self {
            config,
            db,
            templates,
        })
    }

    pub fn post_rules(&self) -> PostRules {
        PostRules {
            strict_length: self.config.validation.strict_length,
        }
    }
}

fn format_date_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let date_str = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("format_date requires a string"))?;

    let format = args
        .get("format")
        .and_then(|v| v.as_str())
        .unwrap_or("%B %d, %Y");

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(date_str) {
        return Ok(Value::String(dt.format(format).to_string()));
    }

    Ok(Value::String(date_str.to_string()))
}
