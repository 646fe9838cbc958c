use clap::Parser;
use dotenv::dotenv;

mod cmd;

use cmd::Cmd;

#[derive(Parser, Debug)]
#[command(name = "nhl-data", about = "Query the NHL Stats API")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    Cli::parse().cmd.run().await
}
