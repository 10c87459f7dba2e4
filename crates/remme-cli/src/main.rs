use clap::Parser;
use tracing_subscriber::EnvFilter;

use remme_cli::{Cli, Config, Context, HttpConnector, NodeKeyFile};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays a single JSON document
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = Config::load();
    let node_keys = NodeKeyFile::from_config(&config);
    let ctx = Context {
        config: &config,
        connector: &HttpConnector,
        node_keys: &node_keys,
    };

    let output = cli.command.run(&ctx).await;
    output.print();
    std::process::exit(output.code());
}
