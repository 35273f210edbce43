//! Clean command handler

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use serde::Serialize;

use bbs_ansi_art::repair::{clean_with, CleanOptions, CleanResult};
use bbs_ansi_art::Config;

/// Flags passed to `ansiart clean`.
#[derive(Debug, Clone, Default)]
pub struct CleanArgs {
    pub output: Option<PathBuf>,
    pub no_optimize: bool,
    pub no_reset: bool,
    pub dry_run: bool,
    pub json: bool,
}

/// Outcome for one input file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<CleanResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// `dir/name.ans` -> `dir/name<suffix>.ans`
pub fn output_path_for(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    };
    input.with_file_name(name)
}

fn clean_file(input: &Path, output: &Path, options: &CleanOptions, dry_run: bool) -> Result<CleanResult> {
    let data = fs::read(input).with_context(|| format!("Failed to read {:?}", input))?;
    let (cleaned, result) = clean_with(&data, options);
    if !dry_run {
        fs::write(output, &cleaned).with_context(|| format!("Failed to write {:?}", output))?;
    }
    tracing::debug!(input = %input.display(), removed = result.sequences_removed, "cleaned");
    Ok(result)
}

/// Clean every file, in parallel. Reports come back in input order.
pub fn clean_files(files: &[PathBuf], args: &CleanArgs, config: &Config) -> Result<Vec<FileReport>> {
    if args.output.is_some() && files.len() > 1 {
        bail!("--output can only be used with a single input file");
    }

    let mut options = config.clean_options();
    if args.no_optimize {
        options.optimize = false;
    }
    if args.no_reset {
        options.ensure_reset = false;
    }

    let reports = files
        .par_iter()
        .map(|input| {
            let output = args
                .output
                .clone()
                .unwrap_or_else(|| output_path_for(input, &config.clean.suffix));
            match clean_file(input, &output, &options, args.dry_run) {
                Ok(result) => FileReport {
                    input: input.clone(),
                    output,
                    result: Some(result),
                    error: None,
                },
                Err(e) => FileReport {
                    input: input.clone(),
                    output,
                    result: None,
                    error: Some(format!("{:#}", e)),
                },
            }
        })
        .collect();
    Ok(reports)
}

fn describe(report: &FileReport, result: &CleanResult, dry_run: bool) -> String {
    let sizes = format!(
        "{} -> {}",
        humansize::format_size(result.original_size as u64, humansize::BINARY),
        humansize::format_size(result.cleaned_size as u64, humansize::BINARY)
    );
    let mut parts = Vec::new();
    let d = &result.details;
    if d.window_manipulation > 0 {
        parts.push(format!("{} window", d.window_manipulation));
    }
    if d.mode_changes > 0 {
        parts.push(format!("{} mode", d.mode_changes));
    }
    if d.redundant_resets > 0 {
        parts.push(format!("{} reset", d.redundant_resets));
    }
    if d.reset_added {
        parts.push("final reset added".to_string());
    }
    let changes = if parts.is_empty() {
        "no changes".to_string()
    } else {
        parts.join(", ")
    };
    let verb = if dry_run { "Would write" } else { "Wrote" };
    format!(
        "{}: {} ({})\n  {} {}",
        report.input.display(),
        changes,
        sizes,
        verb,
        report.output.display()
    )
}

/// Clean files and print a report.
#[cfg(not(tarpaulin_include))]
pub fn handle(files: &[PathBuf], args: &CleanArgs, config: &Config) -> Result<()> {
    let reports = clean_files(files, args, config)?;

    if args.json {
        let out = serde_json::to_string_pretty(&reports).context("Failed to serialize report")?;
        println!("{}", out);
    } else {
        for report in &reports {
            match (&report.result, &report.error) {
                (Some(result), _) => println!("{}", describe(report, result, args.dry_run)),
                (None, Some(error)) => eprintln!("{}: {}", report.input.display(), error),
                (None, None) => {}
            }
        }
    }

    let failed = reports.iter().filter(|r| r.error.is_some()).count();
    if failed > 0 {
        bail!("{} of {} files failed", failed, reports.len());
    }
    Ok(())
}
