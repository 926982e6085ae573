//! Climate monitor desktop binary.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Climate control - monitor and edit climate parameters of three rooms
#[derive(Parser, Debug)]
#[command(name = "climate-gui", version, about)]
struct Args {
    /// Preference file (default: <config dir>/climate/settings.xml)
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Start with the dark theme
    #[arg(long)]
    dark: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    climate_gui::run(climate_gui::GuiOptions {
        settings: args.settings,
        dark: args.dark,
    })
}
