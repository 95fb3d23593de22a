use clap::Parser;

use user_directory_lib::graphql;
use user_directory_server::{logging, ServerConfig};

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    if config.print_schema {
        print!("{}", graphql::sdl(&graphql::schema()));
        return;
    }

    if let Err(e) = logging::init_logging(config.log_format) {
        eprintln!("user-directory: {}", e);
        std::process::exit(1);
    }

    let store = match config.load_store() {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "failed to load user records");
            std::process::exit(1);
        }
    };

    if let Err(e) = user_directory_server::serve(&config, store, shutdown_signal()).await {
        tracing::error!(error = %e, "server stopped");
        std::process::exit(1);
    }

    tracing::info!("shut down cleanly");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler the server just runs until killed.
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down...");
}
