//! CLI entry point for base-converter
//!
//! Thin presentation shell over the pure conversion core: parses
//! arguments, runs conversions, and renders results or structured errors.
//! All conversion logic lives in the library.

use base_converter::core::{convert, Base, ConvertError, ParseError, ValidationError};
use clap::{Parser, Subcommand};
use colored::*;

#[derive(Parser)]
#[command(name = "base-converter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a number between two bases
    Convert {
        /// The number to convert (digits 0-9 and letters A-Z, case-insensitive)
        input: String,

        /// Source base: a radix from 2 to 36, or a name like "hexadecimal"
        #[arg(short, long, default_value = "10")]
        from: Base,

        /// Target base: a radix from 2 to 36, or a name like "binary"
        #[arg(short, long, default_value = "2")]
        to: Base,
    },

    /// List every supported base with its name and digit alphabet
    Bases,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { input, from, to } => run_convert(&input, from, to),
        Commands::Bases => {
            list_bases();
            Ok(())
        }
    }
}

/// Run one conversion and render the result block
fn run_convert(input: &str, from: Base, to: Base) -> anyhow::Result<()> {
    match convert(input, from, to) {
        Ok(conversion) => {
            println!("{} {}", "✓".green().bold(), "Conversion successful".bold());
            println!();
            println!("  Original number: {}", conversion.input.as_str().cyan());
            println!(
                "  From: base {} ({})",
                conversion.from,
                conversion.from.name()
            );
            println!("  To:   base {} ({})", conversion.to, conversion.to.name());
            println!();
            println!(
                "  {} {}",
                "Result:".bold(),
                conversion.output.as_str().green().bold()
            );
            Ok(())
        }
        Err(err) => {
            eprintln!("{} {}", "✗".red().bold(), render_error(&err));
            std::process::exit(1);
        }
    }
}

/// Render a structured conversion error as a user-facing message
///
/// The core reports what went wrong; the wording lives here.
fn render_error(err: &ConvertError) -> String {
    match err {
        ConvertError::Parse(ParseError::EmptyInput) => {
            "Please enter a number to convert".to_string()
        }
        ConvertError::Parse(ParseError::NotAlphanumeric(input)) => format!(
            "Invalid input '{}': only digits (0-9) and letters (A-Z) are allowed",
            input.yellow()
        ),
        ConvertError::Validation(ValidationError::DigitOutOfRange { ch, base, allowed }) => {
            format!(
                "Invalid character '{}' for base {} ({}). Allowed characters: {}",
                ch.to_string().yellow(),
                base,
                base.name(),
                allowed.green()
            )
        }
    }
}

/// Print all supported bases the way the original selector listed them
fn list_bases() {
    println!("{}", "Supported bases".bold());
    println!();

    for radix in Base::MIN..=Base::MAX {
        if let Ok(base) = Base::new(radix) {
            println!(
                "  {} ({}) [{}]",
                format!("{:>2}", base.radix()).cyan().bold(),
                base.name(),
                base.allowed_chars()
            );
        }
    }

    println!();
    println!(
        "{} Base names are accepted for {} and {}",
        "→".cyan(),
        "--from".bold(),
        "--to".bold()
    );
}
