use std::io::Write;
use std::path::Path;

use sales::prelude::*;

fn main() {
    CliApp::new("sales").run(parse_args, run_report);
}

/// Parse and validate command-line arguments
fn parse_args(args: Vec<String>) -> Result<String, AppError> {
    if args.len() != 2 {
        return Err(AppError::InvalidArguments(
            "Usage: sales <data.json>".to_string(),
        ));
    }
    Ok(args[1].clone())
}

/// Main application logic - compute the report and write it to stdout
fn run_report(stdout: &mut dyn Write, input_file: String) -> Result<(), AppError> {
    if !Path::new(&input_file).exists() {
        return Err(AppError::FileNotFound(input_file));
    }

    let document = read_document(&input_file)?;
    let data = dataset_from_value(&document)?;

    // An options record in the document picks registered strategies by
    // name; without one the reference strategies apply
    let options = match document.get("options") {
        Some(raw) => options_from_value(Some(raw))?,
        None => AnalyzeOptions::default(),
    };

    let reports = analyze(&data, &options)?;
    write_reports(&reports, stdout)?;

    Ok(())
}
