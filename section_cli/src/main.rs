//! # Section Capacity CLI
//!
//! Computes the configured steel sections, prints a boxed report for each,
//! and writes the CSV/XLSX/JSON exports.
//!
//! Without `--project` the three documented reference sections are used.
//! `--init <file>` writes those defaults as a project file to start from.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use section_core::report::console;
use section_core::{
    load_project, save_project, CalcError, CalcResult, Project, Reporter, SectionStrategy,
    SteelGrade,
};

#[derive(Parser, Debug)]
#[command(name = "section_cli", version, about = "Steel section capacity report")]
struct Args {
    /// Project file to compute
    #[arg(long, value_name = "FILE")]
    project: Option<PathBuf>,

    /// Write the documented sections as a project file and exit
    #[arg(long, value_name = "FILE", conflicts_with = "project")]
    init: Option<PathBuf>,

    /// Export folder (default: Desktop, then OneDrive Desktop, then cwd)
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Steel grade applied to every section (S235, S275, S355)
    #[arg(long)]
    grade: Option<String>,

    /// Skip the CSV export
    #[arg(long)]
    no_csv: bool,

    /// Skip the spreadsheet export
    #[arg(long)]
    no_xlsx: bool,

    /// Also write a JSON export
    #[arg(long)]
    json: bool,

    /// Hide method explanations
    #[arg(short, long)]
    quiet: bool,

    /// Log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Returns `Ok(false)` when at least one section failed to compute.
fn run(args: &Args) -> CalcResult<bool> {
    if let Some(path) = &args.init {
        let project = Project::with_documented_sections("", "", "");
        save_project(&project, path)?;
        println!("{}", console::banner(&format!("Saved project → {}", path.display())));
        return Ok(true);
    }

    let mut project = match &args.project {
        Some(path) => {
            log::info!("loading project {}", path.display());
            load_project(path)?
        }
        None => Project::with_documented_sections("", "", ""),
    };

    if let Some(grade) = &args.grade {
        project.set_grade(SteelGrade::from_str_flexible(grade)?);
    }

    let mut settings = project.settings.report.clone();
    if args.quiet {
        settings.verbose = false;
    }
    if args.no_csv {
        settings.write_csv = false;
    }
    if args.no_xlsx {
        settings.write_xlsx = false;
    }
    if args.json {
        settings.write_json = true;
    }
    if args.out_dir.is_some() {
        settings.export_dir = args.out_dir.clone();
    }
    let reporter = Reporter::new(settings);

    let mut records = Vec::with_capacity(project.items.len());
    let mut all_ok = true;
    for (n, entry) in project.items.iter().enumerate() {
        match entry.section.compute() {
            Ok(record) => {
                println!("{}", reporter.render(&entry.section, &record));
                records.push(record);
            }
            Err(e) => {
                all_ok = false;
                eprintln!("Section {} ({}) failed:", n + 1, entry.section.label());
                print_error(&e);
            }
        }
    }

    println!();
    for path in reporter.export(&records)? {
        let kind = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => "JSON",
            Some("xlsx") => "XLSX",
            _ => "CSV",
        };
        println!("{}", console::banner(&format!("Saved {} → {}", kind, path.display())));
    }

    Ok(all_ok)
}

fn print_error(e: &CalcError) {
    eprintln!("Error [{}]: {}", e.error_code(), e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_all_flags() {
        let args = Args::try_parse_from([
            "section_cli", "--project", "p.json", "--out-dir", "out", "--grade", "s275",
            "--no-csv", "--no-xlsx", "--json", "--quiet", "-vv",
        ])
        .unwrap();
        assert_eq!(args.project, Some(PathBuf::from("p.json")));
        assert_eq!(args.out_dir, Some(PathBuf::from("out")));
        assert_eq!(args.grade.as_deref(), Some("s275"));
        assert!(args.no_csv && args.no_xlsx && args.json && args.quiet);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_init_conflicts_with_project() {
        assert!(Args::try_parse_from(["section_cli", "--init", "a.json", "--project", "b.json"]).is_err());
    }

    #[test]
    fn test_run_exports_into_new_out_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("reports");
        let args = Args::try_parse_from([
            "section_cli", "--out-dir", dir.to_str().unwrap(), "--json", "--quiet",
        ])
        .unwrap();

        assert!(run(&args).unwrap());
        assert!(dir.join("sections_results.csv").exists());
        assert!(dir.join("sections_results.xlsx").exists());
        assert!(dir.join("sections_results.json").exists());
    }

    #[test]
    fn test_init_then_run_project() {
        let tmp = tempfile::tempdir().unwrap();
        let project = tmp.path().join("sections.json");
        let init = Args::try_parse_from(["section_cli", "--init", project.to_str().unwrap()]).unwrap();
        assert!(run(&init).unwrap());

        let out = tmp.path().join("out");
        let args = Args::try_parse_from([
            "section_cli", "--project", project.to_str().unwrap(), "--out-dir", out.to_str().unwrap(),
            "--no-xlsx", "--grade", "S235",
        ])
        .unwrap();
        assert!(run(&args).unwrap());
        assert!(out.join("sections_results.csv").exists());
        assert!(!out.join("sections_results.xlsx").exists());
    }
}
