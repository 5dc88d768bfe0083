//! Recover a Shamir secret from a JSON share document.
//!
//! ```text
//! shamir-recover shares.json
//! shamir-recover --sort-by-x --strict shares.json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use shamir_core::{recover_from_path, Recovery, RecoveryConfig, Selection};

#[derive(Debug, Parser)]
#[command(
    name = "shamir-recover",
    version,
    about = "Recover a Shamir secret from threshold shares"
)]
struct Cli {
    /// Path to the JSON share document.
    path: PathBuf,

    /// Use the k shares with the smallest x instead of the first k in the file.
    #[arg(long)]
    sort_by_x: bool,

    /// Fail when the shares do not lie on an integer polynomial.
    #[arg(long)]
    strict: bool,
}

impl Cli {
    fn config(&self) -> RecoveryConfig {
        let selection = if self.sort_by_x {
            Selection::AscendingX
        } else {
            Selection::SourceOrder
        };
        RecoveryConfig::default()
            .with_selection(selection)
            .with_integral_secret(self.strict)
    }
}

fn report(cli: &Cli, recovery: &Recovery) {
    println!(
        "Successfully parsed {} points from {}",
        recovery.point_count(),
        cli.path.display()
    );

    if !recovery.is_exact() {
        eprintln!(
            "warning: Lagrange terms for pivots {:?} did not divide evenly; remainders were carried exactly",
            recovery.inexact_pivots
        );
    }
    if !recovery.is_integral() {
        eprintln!(
            "warning: interpolated value {} is not an integer; printing it truncated toward zero",
            recovery.value
        );
    }

    println!("The calculated secret (c) is: {}", recovery.secret);
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // Help and version go to stdout and are not failures.
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match recover_from_path(&cli.path, &cli.config()) {
        Ok(recovery) => {
            report(&cli, &recovery);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_source_order() {
        let cli = Cli::try_parse_from(["shamir-recover", "shares.json"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("shares.json"));
        assert_eq!(cli.config(), RecoveryConfig::default());
    }

    #[test]
    fn flags_map_onto_the_config() {
        let cli = Cli::try_parse_from([
            "shamir-recover",
            "--sort-by-x",
            "--strict",
            "shares.json",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.selection, Selection::AscendingX);
        assert!(config.require_integral_secret);
    }

    #[test]
    fn path_is_required() {
        assert!(Cli::try_parse_from(["shamir-recover"]).is_err());
    }
}
