use std::fs;
use std::path::PathBuf;

use clap::Args;
use floatsteg_core::{CodecOptions, FloatStegError};

use crate::CliResult;

/// Unveils a text message from a stego sample file
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source sample file that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "sample source file",
        required = true
    )]
    pub media: PathBuf,

    /// Length of the hidden message in bytes, agreed out of band
    #[arg(short, long, value_name = "message length", required = true)]
    pub length: usize,

    /// Store the message in this file instead of printing it
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self, options: &CodecOptions) -> CliResult<()> {
        let message = floatsteg_core::commands::unveil(&self.media, self.length, options)?;
        log::info!("unveiled {} bytes from {}", self.length, self.media.display());

        match self.output_file {
            Some(path) => {
                fs::write(path, message).map_err(|source| FloatStegError::WriteError { source })
            }
            None => {
                println!("{message}");
                Ok(())
            }
        }
    }
}
