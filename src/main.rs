use clap::Parser;

use bench_chart::cli::{Cli, Commands};
use bench_chart::commands::{run_config, run_init, run_render};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        None => run_render(&cli.render, &cli),
        Some(Commands::Init(args)) => run_init(args, &cli),
        Some(Commands::Config(args)) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
