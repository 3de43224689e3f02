//! The `serve` command.

use crate::config::{process_env, ServerConfig};
use crate::server;

/// Start the HTTP service with flags from `args`.
pub fn serve_command(args: &[String]) {
    let config = match ServerConfig::from_args(args, process_env) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Usage: msym serve [--host=<addr>] [--port=<n>]");
            std::process::exit(1);
        }
    };

    crate::init_tracing("msymc=info");
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("error: failed to start runtime: {err}");
            std::process::exit(1);
        }
    };
    if let Err(err) = runtime.block_on(server::serve(&config)) {
        eprintln!("error: {}: {err}", config.address());
        std::process::exit(1);
    }
}
