use std::error::Error;
use std::fs;
use std::io::{BufRead, BufWriter, Write};
use std::time::Instant;

use varconv::PipelineBuilder;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(name = "convert", about = "Converts text from stdin between script variants.")]
struct Args {
    /// Dictionary file used for segmentation. Can be given several times.
    #[clap(short = 's', long, required = true)]
    segmentation: Vec<String>,

    /// Comma-separated dictionary files of one conversion stage.
    /// Can be given several times; stages run in the given order.
    #[clap(short = 'c', long, required = true)]
    stage: Vec<String>,

    /// Name of the converter.
    #[clap(short = 'n', long, default_value = "convert")]
    name: String,
}

const BOM: char = '\u{feff}';

/// Reads a dictionary file, dropping a leading byte order mark.
fn read_dictionary(filename: &str) -> Result<String, Box<dyn Error>> {
    let text = fs::read_to_string(filename)?;
    Ok(strip_bom(&text).to_string())
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    eprintln!("Loading the dictionaries...");
    let start = Instant::now();
    let mut builder = PipelineBuilder::new();
    for filename in &args.segmentation {
        builder
            .add_segmentation_source(&read_dictionary(filename)?)
            .map_err(|e| format!("{}: {}", filename, e))?;
    }
    for stage in &args.stage {
        for filename in stage.split(',').filter(|f| !f.is_empty()) {
            builder
                .add_stage_source(&read_dictionary(filename)?)
                .map_err(|e| format!("{}: {}", filename, e))?;
        }
        builder.finalize_stage()?;
    }
    let converter = builder.build(args.name)?;
    eprintln!("{} seconds", start.elapsed().as_secs_f64());
    eprintln!("Ready to convert with {} :)", converter.name());

    let mut out = BufWriter::new(std::io::stdout().lock());
    #[allow(clippy::significant_drop_in_scrutinee)]
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        writeln!(out, "{}", converter.convert(&line))?;
    }

    Ok(())
}
