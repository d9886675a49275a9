//! This crate contains the source code for the `mazepath` binary.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::io;

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use mazepath::{init_logging, App, Cli};

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();
    init_logging(cli.log_level())?;

    let mut app = App::new(&cli)?;
    if cli.interactive {
        let mut terminal = ratatui::init();
        let result = app.run(&mut terminal);
        ratatui::restore();
        result
    } else {
        app.print(&mut io::stdout().lock())
    }
}
