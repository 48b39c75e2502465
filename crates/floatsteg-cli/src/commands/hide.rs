use std::path::PathBuf;

use clap::Args;
use floatsteg_core::CodecOptions;

use crate::CliResult;

/// Hides a text message in a file of raw little-endian f32 samples
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier file of raw little-endian 32-bit float samples, used readonly.
    #[arg(short = 'i', long = "in", value_name = "carrier file", required = true)]
    pub media: PathBuf,

    /// Final stego samples will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output sample file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// An ASCII text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,
}

impl HideArgs {
    pub fn run(self, options: &CodecOptions) -> CliResult<()> {
        log::info!(
            "hiding {} bytes of text in {}",
            self.message.len(),
            self.media.display()
        );

        floatsteg_core::commands::hide(&self.media, &self.write_to_file, &self.message, options)
    }
}
