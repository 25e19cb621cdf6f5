use anyhow::Result;
use clap::Parser;
use snake_arcade::app::App;
use snake_arcade::game::GameConfig;

#[derive(Parser)]
#[command(name = "snake_arcade")]
#[command(version, about = "Classic Snake in the terminal")]
struct Cli {
    /// Board width in cells
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u16).range(8..=100))]
    columns: u16,

    /// Board height in cells
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(8..=100))]
    rows: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.columns.into(), cli.rows.into());

    App::new(config).run().await
}
