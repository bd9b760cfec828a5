use clap::Parser;
use pokedex::commands::{run, Cli};
use pokedex::logger::init_logger;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    tracing::debug!(base_url = %cli.base_url, "starting");

    let mut dex = cli.pokedex();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run(&cli.command, &mut dex, stdin.lock(), &mut stdout)
}
