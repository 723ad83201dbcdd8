use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;

use speechrel::{ConsoleInput, OperatorInput, RelGenerator, SpeechError, TrackAssignment};

#[derive(Parser)]
#[command(name = "speechrel-cli")]
#[command(about = "Generate a speech dat4.rel.xml descriptor from .oac audio containers")]
struct Cli {
    /// Audio container configuration files (.oac)
    files: Vec<PathBuf>,
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        eprintln!("No files provided. Pass one or more .oac files.");
        process::exit(1);
    }

    // Wrong extension is reported but the file still participates, matching
    // the shipped tool's behavior.
    for file in &cli.files {
        if file.extension().and_then(|e| e.to_str()) != Some("oac") {
            eprintln!("warning: {} is not a .oac file", file.display());
        }
    }

    let mut input = ConsoleInput::new();
    let device = input.device_name()?;
    if device.is_empty() {
        eprintln!("{}", SpeechError::EmptyDeviceName);
        process::exit(1);
    }

    let generator = RelGenerator::new();
    let mut file_stems: Vec<String> = Vec::new();
    let mut assignments: Vec<TrackAssignment> = Vec::new();

    for file in &cli.files {
        file_stems.push(file_stem(file));
        match generator.process_file(file, &mut input) {
            Ok(found) => {
                for assignment in &found {
                    println!(
                        "Combined XOR hash: {} ({} & {})",
                        assignment.combined, assignment.speaker, assignment.track
                    );
                }
                assignments.extend(found);
            }
            Err(err) => {
                eprintln!(
                    "An error occurred while processing the file {}: {}",
                    file.display(),
                    err
                );
            }
        }
    }

    let document = generator.build_document(&device, &file_stems, &assignments);
    let output = generator.output_file_name(&device);
    document.write_to_file(&output)?;

    println!("Successfully generated {}", output);
    Ok(())
}
