use clap::Parser;
use takeaway::app::{handle_fatal_error, init_logging};
use takeaway::cli::{self, Cli};
use tracing::info;

fn main() {
    let cli = Cli::parse();

    let config = match cli.to_config() {
        Ok(config) => config,
        Err(e) => handle_fatal_error(e, cli.verbose),
    };
    init_logging(&config);

    match cli::execute(&config) {
        Ok(path) => {
            info!(path = %path.display(), "order complete");
            println!("Successfully wrote down order at {}", path.display());
            println!("Your order is done.");
        }
        Err(e) => handle_fatal_error(e, config.verbose),
    }
}
