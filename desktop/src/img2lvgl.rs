use std::{path::PathBuf, process::ExitCode};

use argh::FromArgs;
use log::error;
use monopack_core::{OutputFormat, Threshold};

use crate::convert::Options;

mod convert;
mod preview;

#[derive(FromArgs)]
/// Convert an image into a 1-bit alpha bitmap for embedding in LVGL firmware
struct Args {
    /// input image path (png, jpeg, bmp, gif, webp)
    #[argh(positional)]
    input: PathBuf,

    /// symbol name, defaults to the input file name
    #[argh(option, short = 'n')]
    name: Option<String>,

    /// samples at or above this intensity (0-255) are opaque
    #[argh(option, short = 't', default = "Threshold::DEFAULT")]
    threshold: Threshold,

    /// output source file, defaults to <name>.c
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,

    /// output format: lvgl or rust
    #[argh(option, short = 'f', default = "OutputFormat::Lvgl")]
    format: OutputFormat,

    /// also write a PNG preview of the packed bitmap
    #[argh(option, short = 'p')]
    preview: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let mut options = Options::for_input(&args.input, args.format);
    if let Some(name) = args.name {
        options.name = name;
    }
    options.threshold = args.threshold;
    options.output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&options.name).with_extension(args.format.extension()));
    options.preview = args.preview;

    match convert::convert(&args.input, &options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Converting {} failed: {e}", args.input.display());
            ExitCode::FAILURE
        }
    }
}
