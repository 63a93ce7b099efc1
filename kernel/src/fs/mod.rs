/*
 * In-Memory Namespace
 *
 * Files and directories that live only in RAM for the lifetime of the
 * running kernel. There is no storage device behind any of this.
 *
 * - path: composing and splitting '/'-separated names
 * - table: the fixed-capacity entry arena
 * - namespace: create / delete / read / write / list
 * - layout: the default bin/ and user/ population done at boot
 *
 * The kernel keeps exactly one namespace, NAMESPACE, behind a spin lock.
 * Each operation is a single call made while holding the lock.
 */

pub mod error;
pub mod layout;
pub mod namespace;
pub mod path;
pub mod table;

pub use error::{FsError, FsResult};
pub use namespace::{DirEntry, Namespace};
pub use table::{Entry, EntryKind};

use spin::Mutex;

/// The kernel-wide namespace, empty until `layout::populate` runs.
pub static NAMESPACE: Mutex<Namespace> = Mutex::new(Namespace::new());

/// Run a closure with exclusive access to the kernel namespace.
pub fn with_namespace<F, R>(f: F) -> R
where
    F: FnOnce(&mut Namespace) -> R,
{
    let mut guard = NAMESPACE.lock();
    f(&mut guard)
}
