//! Native entry point: validates a deck config and prints its shortcuts.

#[cfg(feature = "native")]
mod cli {
    use clap::Parser;
    use std::path::PathBuf;
    use videodeck_app::{AppError, ShortcutRegistry};
    use videodeck_core::DeckConfig;

    #[derive(Parser, Debug)]
    #[command(name = "videodeck", version, about = "VideoDeck keyboard shortcut tool")]
    pub struct Args {
        /// Deck configuration file (JSON)
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        /// Only validate the configuration
        #[arg(long)]
        pub check: bool,

        /// Print the effective configuration as JSON
        #[arg(long)]
        pub dump: bool,
    }

    pub fn run(args: Args) -> Result<(), AppError> {
        let config = match &args.config {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                DeckConfig::load(path)?
            }
            None => DeckConfig::default(),
        };

        if args.check {
            println!("Configuration OK");
            return Ok(());
        }
        if args.dump {
            println!("{}", config.to_json()?);
            return Ok(());
        }

        ShortcutRegistry::from_keymap(&config.keymap()).print_all();
        Ok(())
    }
}

#[cfg(feature = "native")]
fn main() {
    use clap::Parser;

    env_logger::init();

    if let Err(e) = cli::run(cli::Args::parse()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
