//! Detect command - report the delimiter a file would be parsed with.

use std::path::PathBuf;

use assay::input::{detect_delimiter, format_label};
use colored::Colorize;

use crate::source;

pub fn run(file: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let text = source::read_text(&file)?;
    let delimiter = detect_delimiter(&text);

    println!(
        "{} {}",
        "Detected".cyan().bold(),
        file.display().to_string().white()
    );
    println!("Delimiter: {}", display_delimiter(delimiter).bold());
    println!("Format:    {}", format_label(delimiter));
    Ok(())
}

fn display_delimiter(delimiter: char) -> String {
    match delimiter {
        '\t' => "tab (\\t)".to_string(),
        ',' => "comma (,)".to_string(),
        ';' => "semicolon (;)".to_string(),
        '|' => "pipe (|)".to_string(),
        other => format!("{:?}", other),
    }
}
