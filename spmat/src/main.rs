use anyhow::Result;
use clap::Parser;
use spmat::Cli;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    spmat::app::run(&cli, stdin.lock(), &mut stdout)
}
