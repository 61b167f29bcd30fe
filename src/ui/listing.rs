// src/ui/listing.rs
//
// Non-interactive output of the current view, for `--list` and `--json`.
use super::App;
use crate::error::Result;
use crate::utils::format_date;
use colored::Colorize;

/// One coloured line per visible record, in catalog order.
pub fn listing(app: &App) -> Vec<String> {
    app.visible()
        .into_iter()
        .map(|record| {
            let tags: Vec<String> = record.tags.iter().map(|t| format!("#{}", t)).collect();
            format!(
                "{} {}  {}  {}  [{}]  {}",
                record.file_type.icon(),
                record.name.as_str().bold(),
                record.size.as_str().dimmed(),
                format_date(record.upload_date),
                record.folder.as_str().cyan(),
                tags.join(" ").as_str().magenta(),
            )
        })
        .collect()
}

pub fn to_json(app: &App) -> Result<String> {
    Ok(serde_json::to_string_pretty(&app.visible())?)
}
