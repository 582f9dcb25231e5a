use std::io;
use std::process::ExitCode;

use rideshare::config::Settings;
use rideshare::console::Session;
use rideshare::engine::Engine;

fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Configuration error: {}", err);
            return ExitCode::from(2);
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(settings.log_level)
        .with_writer(io::stderr)
        .init();

    let engine = Engine::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = Session::new(&engine, &settings, stdin.lock(), stdout.lock());

    match session.run() {
        Ok(quote) => {
            tracing::info!(token = %quote.token, "booking complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::warn!(code = err.code, "booking failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
