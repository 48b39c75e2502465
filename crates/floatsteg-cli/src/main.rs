use clap::Parser;

use floatsteg_core::CodecOptions;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = floatsteg_core::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = CodecOptions::with_fraction_bits(args.bits_per_sample)?;

    match args.command {
        Commands::Hide(cmd) => cmd.run(&options),
        Commands::Unveil(cmd) => cmd.run(&options),
        Commands::UnveilRaw(cmd) => cmd.run(&options),
    }
}
