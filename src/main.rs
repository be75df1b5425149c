use std::io::{self, Write};
use std::process;

use colored::*;
use fibdemo::config::Config;
use fibdemo::report::ReportGenerator;

fn main() {
    let mut generator = ReportGenerator::with_config(Config::default());
    let report = generator.generate();

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(err) = handle.write_all(report.as_bytes()) {
        eprintln!("{} writing report to stdout: {}", "error:".red().bold(), err);
        process::exit(1);
    }
}
