/*
 * Default Namespace Layout
 *
 * Populated once at boot, before the shell starts:
 *   bin/          - one empty marker file per built-in command
 *   user/         - the user's home directory, where the shell starts
 *
 * The marker files are purely cosmetic; commands are dispatched by name and
 * never looked up in bin/.
 */

use super::namespace::Namespace;
use super::path;

/// Directory holding the command marker files.
pub const BIN_DIR: &str = "bin";

/// Default home directory.
pub const HOME_DIR: &str = "user";

/// Create the default directories and one `bin/<command>` file per command.
///
/// Entries that cannot be created (already present, name too long, table
/// full) are logged and skipped; the shell is usable either way.
pub fn populate<I>(ns: &mut Namespace, commands: I)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for dir in [BIN_DIR, HOME_DIR] {
        if let Err(err) = ns.create_directory(dir) {
            log::warn!("layout: cannot create directory '{}': {}", dir, err);
        }
    }

    for command in commands {
        let marker = path::join(BIN_DIR, command.as_ref());
        if let Err(err) = ns.create_file(&marker) {
            log::warn!("layout: cannot create '{}': {}", marker, err);
        }
    }

    log::info!(
        "layout: {} of {} entries in use",
        ns.entry_count(),
        ns.capacity()
    );
}
