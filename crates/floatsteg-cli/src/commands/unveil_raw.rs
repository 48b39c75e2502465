use std::path::PathBuf;

use clap::Args;
use floatsteg_core::CodecOptions;

use crate::CliResult;

/// Unveils raw data from a stego sample file
#[derive(Args, Debug)]
pub struct UnveilRawArgs {
    /// Source sample file that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "sample source file",
        required = true
    )]
    pub media: PathBuf,

    /// Raw data will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl UnveilRawArgs {
    pub fn run(self, options: &CodecOptions) -> CliResult<()> {
        floatsteg_core::commands::unveil_raw(&self.media, &self.output_file, options)
    }
}
