//! Symph CLI - Command-line interface for transaction sonification
//!
//! This binary provides commands for turning blockchain transactions into
//! notes, DNA, quantum harmonics, dream fragments, audio and text frames.

mod cli_args;

use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use cli_args::{Cli, Commands};
use symph_cli::commands;
use symph_cli::commands::share::ShareTarget;
use symph_cli::commands::visualize::FrameOptions;
use symph_cli::SymphConfig;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = SymphConfig::load(cli.config.as_deref().map(Path::new)).and_then(|config| {
        log::debug!("config: {:?}", config);
        dispatch(cli.command, &config)
    });

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

fn dispatch(command: Commands, config: &SymphConfig) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Notes { tx, palette, json } => commands::notes::run(&tx, palette, config, json),
        Commands::Dna { tx, json } => commands::dna::run(&tx, config, json),
        Commands::Quantum { tx, json } => commands::quantum::run(&tx, config, json),
        Commands::Dream { tx, seeded, json } => commands::dream::run(&tx, seeded, config, json),
        Commands::Render {
            tx,
            voice,
            output,
            json,
        } => commands::render::run(&tx, voice, &output, config, json),
        Commands::Lookup { signature, json } => commands::lookup::run(&signature, config, json),
        Commands::List {
            address,
            limit,
            json,
        } => commands::list::run(address.as_deref(), limit, config, json),
        Commands::Share {
            signature,
            url,
            origin,
            json,
        } => {
            let target = match (url, signature) {
                (Some(url), _) => ShareTarget::Url(url),
                (None, Some(signature)) => ShareTarget::Signature(signature),
                (None, None) => anyhow::bail!("either a signature or --url is required"),
            };
            commands::share::run(&target, origin.as_deref(), config, json)
        }
        Commands::Visualize {
            tx,
            visualizer,
            voice,
            at,
            width,
            height,
            json,
        } => commands::visualize::run(
            &tx,
            &visualizer,
            voice,
            FrameOptions { at, width, height },
            config,
            json,
        ),
        Commands::Terminal { tx, record } => commands::terminal::run(&tx, record.as_deref(), config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symph_cli::Voice;
    use symph_spec::TransactionType;

    #[test]
    fn test_cli_parses_notes() {
        let cli = Cli::try_parse_from(["symph", "notes", "--signature", "ab12", "--palette"]).unwrap();
        match cli.command {
            Commands::Notes { tx, palette, json } => {
                assert_eq!(tx.signature.as_deref(), Some("ab12"));
                assert_eq!(tx.tx_type, TransactionType::Transfer);
                assert_eq!(tx.fee, 0.0);
                assert!(palette);
                assert!(!json);
            }
            _ => panic!("expected notes command"),
        }
    }

    #[test]
    fn test_cli_parses_transaction_fields() {
        let cli = Cli::try_parse_from([
            "symph", "dna", "-s", "ab12", "-t", "SWAP", "--value", "5000", "--fee", "0.2", "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Dna { tx, json } => {
                assert_eq!(tx.tx_type, TransactionType::Swap);
                assert_eq!(tx.value, Some(5000.0));
                assert_eq!(tx.fee, 0.2);
                assert!(json);
            }
            _ => panic!("expected dna command"),
        }
    }

    #[test]
    fn test_cli_rejects_signature_with_lookup() {
        assert!(Cli::try_parse_from(["symph", "quantum", "-s", "ab12", "--lookup", "ab12"]).is_err());
        assert!(Cli::try_parse_from(["symph", "quantum", "-t", "teleport"]).is_err());
    }

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from([
            "symph", "render", "-s", "ab12", "--voice", "quantum", "-o", "out.wav",
        ])
        .unwrap();
        match cli.command {
            Commands::Render { voice, output, .. } => {
                assert_eq!(voice, Voice::Quantum);
                assert_eq!(output, "out.wav");
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_parses_share_url() {
        let cli = Cli::try_parse_from(["symph", "share", "--url", "http://x?tx=ab"]).unwrap();
        match cli.command {
            Commands::Share { signature, url, .. } => {
                assert!(signature.is_none());
                assert_eq!(url.as_deref(), Some("http://x?tx=ab"));
            }
            _ => panic!("expected share command"),
        }
        assert!(Cli::try_parse_from(["symph", "share"]).is_err());
    }

    #[test]
    fn test_cli_global_config() {
        let cli = Cli::try_parse_from(["symph", "list", "--config", "c.json", "-l", "3"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some("c.json"));
        match cli.command {
            Commands::List { limit, address, .. } => {
                assert_eq!(limit, Some(3));
                assert!(address.is_none());
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_cli_visualize_defaults() {
        let cli = Cli::try_parse_from(["symph", "visualize", "-s", "ab12"]).unwrap();
        match cli.command {
            Commands::Visualize {
                visualizer,
                width,
                height,
                at,
                ..
            } => {
                assert_eq!(visualizer, "wave");
                assert_eq!((width, height), (64, 16));
                assert!(at.is_none());
            }
            _ => panic!("expected visualize command"),
        }
    }
}
