//! Command-line collaborator: prompt for one password, print the rating
//! and the remediation hints. All scoring lives in the library.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pwd_advisor::{Blocklist, StrengthLevel, evaluate_password};
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pwd-advisor", version, about = "Check the strength of a password")]
struct Cli {
    /// Path to the newline-delimited blocklist file.
    /// Defaults to $PWD_BLOCKLIST_PATH, then ./assets/common-passwords.txt.
    #[arg(long)]
    blocklist: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let path = cli.blocklist.unwrap_or_else(Blocklist::default_path);
    let blocklist = Blocklist::from_path(&path)
        .with_context(|| format!("failed to load blocklist from {}", path.display()))?;

    println!("Welcome to the Password Strength Checker!");
    print!("Enter a password to check its strength: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let password = SecretString::new(line.trim_end_matches(['\r', '\n']).to_string().into());

    let evaluation = evaluate_password(&password, &blocklist);

    println!();
    println!("Password Strength: {}", evaluation.level());

    if evaluation.level() != StrengthLevel::VeryStrong {
        let suggestions = evaluation.suggestions();
        if !suggestions.is_empty() {
            println!("Suggestions to improve your password:");
            for suggestion in suggestions {
                println!("- {}", suggestion);
            }
        }
    }

    Ok(())
}
