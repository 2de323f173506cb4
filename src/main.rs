use std::fs::File;
use std::io::Write;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use segtrack::infrastructure::wav;
use segtrack::{Config, MatchRange};

#[derive(Debug, Serialize)]
struct PatternReport {
    pattern: String,
    matches: Vec<MatchRange>,
}

fn main() -> Result<()> {
    env_logger::init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "scan.toml".to_string());
    let config = Config::from_file(&config_path)
        .with_context(|| format!("Failed to load config {config_path}"))?;

    let target = wav::load_track(&config.scan.target)
        .with_context(|| format!("Failed to load target {}", config.scan.target))?;
    println!("Loaded {} ({} samples)", config.scan.target, target.len());

    let pb = ProgressBar::new(config.scan.patterns.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})").unwrap()
            .progress_chars("#>-")
    );
    pb.set_message("Scanning patterns");

    let mut reports = Vec::new();
    for pattern_path in &config.scan.patterns {
        let pattern = wav::load_track(pattern_path)
            .with_context(|| format!("Failed to load pattern {pattern_path}"))?;
        let matches = target.matches(&pattern);

        pb.println(format!("{pattern_path}: {} match(es)", matches.len()));
        for m in &matches {
            pb.println(format!("{},{}", m.start, m.end));
        }

        reports.push(PatternReport { pattern: pattern_path.clone(), matches });
        pb.inc(1);
    }
    pb.finish_with_message("Scan completed!");

    if let Some(report_path) = &config.output.report {
        let json = serde_json::to_string_pretty(&reports)?;
        let mut file = File::create(report_path)
            .with_context(|| format!("Failed to create report {report_path}"))?;
        file.write_all(json.as_bytes())?;
        println!("Report written to {report_path}");
    }

    Ok(())
}
