//! Inspection tool for the hardcoded schema profiles. Prints the chosen
//! schema as JSON (pretty by default), or the frequency map alone as CSV
//! rows. Data goes to stdout, the optional summary report to stderr.

use clap::Parser;

use tonemap::io_utils::tonemap_cli_error;
use tonemap::{Profile, Schema};

#[derive(Parser)]
struct Args {
    /// Schema profile to generate
    #[arg(long, value_enum, default_value = "cyclic")]
    profile: Profile,
    /// Emit the schema as a single JSON line instead of pretty JSON
    #[arg(long)]
    line: bool,
    /// Emit the frequency map as CSV rows instead of JSON
    #[arg(long)]
    csv: bool,
    /// Print the band plan and the first mappings to stderr
    #[arg(long)]
    summary: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let schema = args
        .profile
        .build()
        .map_err(|e| tonemap_cli_error("building schema", e))?;

    if args.csv {
        write_csv(&schema)?;
    } else if args.line {
        println!(
            "{}",
            schema
                .to_json_line()
                .map_err(|e| tonemap_cli_error("serializing schema", e))?
        );
    } else {
        println!(
            "{}",
            schema
                .to_json_pretty()
                .map_err(|e| tonemap_cli_error("serializing schema", e))?
        );
    }

    if args.summary {
        print_summary(&schema);
    }
    Ok(())
}

fn write_csv(schema: &Schema) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = std::io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let tones = schema
        .frequency_map
        .iter()
        .next()
        .map_or(0, |(_, tones)| tones.len());
    let mut header = vec!["symbol".to_string()];
    header.extend((1..=tones).map(|i| format!("tone{i}")));
    wtr.write_record(&header)?;

    for (symbol, tones) in schema.frequency_map.iter() {
        let mut record = vec![symbol.to_string()];
        record.extend(tones.iter().map(|hz| hz.to_string()));
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

fn print_summary(schema: &Schema) {
    eprintln!(
        "alphabet: {} symbols (start marker {:?})",
        schema.alphabet.len(),
        schema.start
    );
    eprintln!("bands: {}", schema.valid_hz.len());
    if let Some(range) = &schema.range {
        eprintln!("range: {range}");
    }
    eprintln!("first mappings:");
    for (symbol, tones) in schema.frequency_map.iter().take(5) {
        let hz: Vec<String> = tones.iter().map(|t| t.to_string()).collect();
        eprintln!("  {:?}: {} Hz", symbol, hz.join(", "));
    }
}
