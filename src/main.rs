//! Mockup Screen Composer Binary

use mockc::{ComposerCli, ComposerError};
use std::process;

fn main() {
    let mut cli = ComposerCli::new();

    match cli.run() {
        Ok(()) => {}
        Err(ComposerError::Io(e)) => {
            eprintln!("IO Error: {}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            process::exit(1);
        }
    }
}
