use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ticklist", about = "A terminal todo list", version)]
pub struct Cli {
    /// Write a default config file and exit. Defaults to the XDG config path
    #[arg(long = "init-config", value_name = "PATH", num_args = 0..=1)]
    pub init_config: Option<Option<PathBuf>>,
}

impl Cli {
    /// Target path for `--init-config`, if the flag was given
    pub fn init_config_path(&self) -> Option<Option<&PathBuf>> {
        self.init_config.as_ref().map(Option::as_ref)
    }
}
