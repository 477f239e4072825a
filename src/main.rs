//! Prints the cyclic frequency schema: the alphabet size on the first
//! line, then the complete schema as a single JSON line. Takes no
//! arguments; the output is identical on every run.

use tonemap::Profile;

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let schema = Profile::Cyclic.build()?;
    println!("{}", schema.alphabet.len());
    println!("{}", schema.to_json_line()?);
    Ok(())
}
