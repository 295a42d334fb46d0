use clap::Parser;
use riffle::app::App;
use riffle::cli::Cli;
use riffle::logging;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init()?;

    let args = Cli::parse();
    let terminal = ratatui::init();
    let app = App::new(args);
    let result = app.run(terminal).await;

    ratatui::restore();
    result
}
