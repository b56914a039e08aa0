use anyhow::Result;
use app_icon_gen::icon_gen::{self, DEFAULT_OUTPUT_DIR};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "app-icon-gen",
    about = "Render the building app icon and its adaptive icon foreground"
)]
struct Cli {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// JSON file overriding palette colours (CSS colour strings keyed by role).
    #[clap(long, value_name = "FILE")]
    palette: Option<PathBuf>,
}

impl From<Cli> for icon_gen::Args {
    fn from(cli: Cli) -> Self {
        Self {
            output: cli.output,
            palette: cli.palette,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    icon_gen::generate_icons(cli.into())
}
