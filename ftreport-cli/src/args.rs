use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

pub const USAGE: &str = "Usage: FileTypeReport <folder> <report file>";

/// FileTypeReport - write an HTML summary of file types below a folder
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(name = "FileTypeReport")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Folder to scan recursively
    #[arg(allow_hyphen_values = true)]
    pub folder: PathBuf,

    /// Path of the HTML report to write
    #[arg(allow_hyphen_values = true)]
    pub report_file: PathBuf,
}

impl Args {
    /// Parse exactly two positional arguments; anything else is a usage error
    pub fn try_from_args<I, T>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).ok()
    }
}
