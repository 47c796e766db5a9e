//! Save, backup and session configuration commands.

use std::io::Write;
use std::path::Path;

use crate::command::Command;
use crate::commands::required_arg;
use crate::console::Console;
use crate::error::CliError;
use crate::persistence;
use crate::session::Session;

pub fn handle_save_command(session: &mut Session, console: &mut Console<'_>) -> Result<(), CliError> {
    persistence::save(session)?;
    writeln!(console.out, "Tournament saved")?;
    Ok(())
}

/// Handle `sb [identifier]`. The recorded save path is left alone.
pub fn handle_backup_command(
    session: &mut Session,
    command: &Command,
    console: &mut Console<'_>,
) -> Result<(), CliError> {
    let path = persistence::backup(session, command.arg(0))?;
    writeln!(console.out, "Tournament backed up to {}", path.display())?;
    Ok(())
}

/// Handle `sa`: the answer to the question becomes the new setting.
pub fn handle_auto_save_command(
    session: &mut Session,
    console: &mut Console<'_>,
) -> Result<(), CliError> {
    let enabled = console.confirm("Turn on auto save?")?;
    session.set_auto_save(enabled)?;
    writeln!(
        console.out,
        "Auto save is now {}",
        if enabled { "on" } else { "off" }
    )?;
    Ok(())
}

/// Handle `sl (directory)`. The directory must already exist.
pub fn handle_save_dir_command(
    session: &mut Session,
    command: &Command,
    console: &mut Console<'_>,
) -> Result<(), CliError> {
    let dir = required_arg(command, "sl (directory)")?;
    session.set_save_dir(Path::new(dir))?;
    writeln!(console.out, "Save directory updated to {}", dir)?;
    Ok(())
}
