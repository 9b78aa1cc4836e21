use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "runpak")]
#[command(version)]
#[command(about = "A Rust extraction utility for ENDILTLE .pak archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  runpak data.pak          extract data.pak into ./data\n  \
  runpak data.pak -d out   extract data.pak into ./out\n  \
  runpak -q data.pak       extract without status output")]
pub struct Cli {
    /// Archive file to extract
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Extract files into DIR
    #[arg(short = 'd', value_name = "DIR")]
    pub extract_dir: Option<PathBuf>,

    /// Quiet mode, suppress status output
    #[arg(short = 'q')]
    pub quiet: bool,
}

impl Cli {
    /// Destination directory: `-d` when given, otherwise the archive
    /// path with its extension removed.
    pub fn destination(&self) -> PathBuf {
        match &self.extract_dir {
            Some(dir) => dir.clone(),
            None => self.file.with_extension(""),
        }
    }
}
