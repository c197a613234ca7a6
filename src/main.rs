//! nameorder - look up personal-name ordering conventions from the shell
//!
//! Prints the naming order for an ISO alpha-2 country code using the dataset
//! bundled with the library.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nameorder::settings::{OutputFormat, UserSettings};
use nameorder::{Iso2Code, NameOrderLookup, NamingForms};

#[derive(Parser)]
#[command(name = "nameorder")]
#[command(version)]
#[command(about = "Personal-name ordering conventions by ISO alpha-2 country code")]
#[command(long_about = None)]
struct Cli {
    /// Print JSON instead of plain text
    #[arg(long, global = true, conflicts_with = "plain")]
    json: bool,

    /// Print plain text even if settings ask for JSON
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the name components for a country, in order
    Names {
        /// Country code, e.g. JP
        #[arg(value_name = "CODE")]
        code: String,

        /// Country to use when CODE has no record (matched exactly)
        #[arg(short, long)]
        fallback: Option<String>,
    },

    /// Print the English and localized naming templates for a country
    Forms {
        /// Country code, e.g. JP
        #[arg(value_name = "CODE")]
        code: String,

        /// Country to use when CODE has no record (case ignored)
        #[arg(short, long)]
        fallback: Option<String>,
    },

    /// Print the full record for a country
    Record {
        /// Country code, e.g. JP
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// List every country in the dataset with its English template
    List,

    /// Show or update saved settings
    Settings {
        /// Default fallback country for `names` and `forms`
        #[arg(short, long)]
        fallback: Option<Iso2Code>,

        /// Forget the saved default fallback
        #[arg(long, conflicts_with = "fallback")]
        clear_fallback: bool,

        /// Save the output format chosen with --json or --plain
        #[arg(long)]
        save_output: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for results
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let settings = UserSettings::load();
    let output = if cli.json {
        OutputFormat::Json
    } else if cli.plain {
        OutputFormat::Plain
    } else {
        settings.output
    };

    let lookup = NameOrderLookup::bundled();
    let default_fallback = settings.default_fallback.map(|code| code.as_str().to_string());

    match cli.command {
        Commands::Names { code, fallback } => {
            let names = match fallback.or(default_fallback) {
                Some(fallback) => lookup.names_with_fallback(&code, &fallback),
                None => lookup.names(&code),
            };
            match output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&names)?),
                OutputFormat::Plain => {
                    for name in &names {
                        println!("{}", name);
                    }
                }
            }
        }

        Commands::Forms { code, fallback } => {
            let fallback = fallback.or(default_fallback);
            let forms = lookup.names_enum(&code, fallback.as_deref());
            print_forms(&forms, output)?;
        }

        Commands::Record { code } => {
            let record = lookup.record(&code)?;
            match output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
                OutputFormat::Plain => {
                    match &record.name {
                        Some(name) => println!("{} ({})", record.code, name),
                        None => println!("{}", record.code),
                    }
                    for (label, template) in record.naming_order.iter() {
                        println!("  {}: {}", label, template.unwrap_or("-"));
                    }
                }
            }
        }

        Commands::List => match output {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(lookup.records())?)
            }
            OutputFormat::Plain => {
                for record in lookup.records() {
                    println!("{}  {}", record.code, record.naming_order.english());
                }
            }
        },

        Commands::Settings {
            fallback,
            clear_fallback,
            save_output,
        } => {
            let mut updated = settings.clone();
            if let Some(fallback) = fallback {
                updated.default_fallback = Some(fallback);
            }
            if clear_fallback {
                updated.default_fallback = None;
            }
            if save_output {
                updated.output = output;
            }

            if updated != settings {
                let path = updated.save().context("Failed to save settings")?;
                tracing::info!("Settings saved to {}", path.display());
            }
            println!("{}", serde_json::to_string_pretty(&updated)?);
        }
    }

    Ok(())
}

fn print_forms(forms: &NamingForms<'_>, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(forms)?),
        OutputFormat::Plain => {
            println!("English: {}", forms.english);
            println!("Other:   {}", forms.other.unwrap_or("-"));
        }
    }
    Ok(())
}
