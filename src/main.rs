use tally::commands::Cli;
use tally::libs::messages::macros::is_debug_mode;
use tally::msg_error;
use tracing_subscriber::EnvFilter;

fn main() {
    let _ = dotenv::dotenv();

    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_target(false)
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tally=debug")))
            .init();
    }

    if let Err(e) = Cli::menu() {
        msg_error!(e);
        std::process::exit(1);
    }
}
