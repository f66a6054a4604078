use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use ls8_machine::{loader, Machine};

pub const USAGE: &str = "Usage: ls8 <program.ls8>";

/// Load the program image at `path` and run it to completion, writing
/// program output to `out`.
pub fn run_file<P: AsRef<Path>, W: Write>(path: P, out: &mut W) -> Result<()> {
    let path = path.as_ref();
    log::info!("Running program: '{}'", path.display());

    let program = loader::load_file(path)?;
    let mut machine = Machine::new();
    machine.load_program(&program);
    machine
        .run(out)
        .with_context(|| format!("'{}' faulted", path.display()))?;
    Ok(())
}
