//! List command - inventory of uploaded report PDFs.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use clap::Args;
use console::style;
use serde::Serialize;

use hts_core::models::config::HtsConfig;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Folder to scan (default: the configured upload folder)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Emit JSON instead of a terminal listing
    #[arg(long)]
    json: bool,
}

/// One uploaded report and its conversion status.
#[derive(Debug, Serialize)]
struct UploadEntry {
    filename: String,
    path: PathBuf,
    upload_time: String,
    converted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    csv_path: Option<PathBuf>,
}

pub async fn run(args: ListArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = if let Some(path) = config_path {
        HtsConfig::from_file(Path::new(path))?
    } else {
        HtsConfig::default()
    };

    let dir = args.dir.unwrap_or(config.upload_dir);
    let pattern = dir.join("*.pdf");
    let pattern = pattern
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Upload folder path is not valid UTF-8"))?;

    let mut entries: Vec<(SystemTime, UploadEntry)> = Vec::new();
    for path in glob::glob(pattern)?.flatten() {
        let modified = std::fs::metadata(&path)
            .and_then(|m| m.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        let local: DateTime<Local> = modified.into();

        let csv_path = path.with_extension("csv");
        let converted = csv_path.exists();

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        entries.push((
            modified,
            UploadEntry {
                filename,
                path: path.clone(),
                upload_time: local.format("%d.%m.%Y %H:%M:%S").to_string(),
                converted,
                csv_path: converted.then_some(csv_path),
            },
        ));
    }

    // Newest upload first
    entries.sort_by(|a, b| b.0.cmp(&a.0));
    let entries: Vec<UploadEntry> = entries.into_iter().map(|(_, e)| e).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No report PDFs found in {}", dir.display());
        return Ok(());
    }

    for entry in &entries {
        let status = if entry.converted {
            style("converted").green()
        } else {
            style("pending").yellow()
        };
        println!(
            "{:<40} {} [{}]",
            entry.filename, entry.upload_time, status
        );
    }

    Ok(())
}
