/*
 * Namespace Operations
 *
 * The create / delete / read / write / list calls the shell is built on.
 * Every call takes a fully resolved path ("user/notes.txt"); resolving names
 * against a current directory is the caller's business.
 *
 * Hierarchy is only ever inferred from names:
 * - creating "a/b" does not require "a" to exist
 * - deleting directory "a" leaves "a/b" in place and still reachable
 * - names are unique across the whole namespace, not per directory
 *
 * The namespace never logs and never prints.
 */

use super::error::{FsError, FsResult};
use super::path;
use super::table::{Entry, EntryKind, EntryTable};

/// One item of a directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirEntry<'a> {
    /// Last path component of the entry
    pub name: &'a str,
    pub is_directory: bool,
}

/// The in-memory file namespace.
pub struct Namespace {
    table: EntryTable,
}

impl Namespace {
    /// Create an empty namespace.
    pub const fn new() -> Self {
        Self {
            table: EntryTable::new(),
        }
    }

    pub fn create_directory(&mut self, path: &str) -> FsResult<()> {
        self.table.allocate(path, EntryKind::Directory).map(|_| ())
    }

    /// Create an empty file.
    pub fn create_file(&mut self, path: &str) -> FsResult<()> {
        self.table.allocate(path, EntryKind::File).map(|_| ())
    }

    /// Delete a directory entry.
    ///
    /// Entries below it are not touched.
    pub fn delete_directory(&mut self, path: &str) -> FsResult<()> {
        self.delete(path, EntryKind::Directory)
    }

    pub fn delete_file(&mut self, path: &str) -> FsResult<()> {
        self.delete(path, EntryKind::File)
    }

    fn delete(&mut self, path: &str, kind: EntryKind) -> FsResult<()> {
        let index = self.table.find(path).ok_or(FsError::NotFound)?;
        let entry = self.table.get(index).ok_or(FsError::NotFound)?;

        if entry.kind() != kind {
            return Err(FsError::WrongType);
        }

        self.table.release(index);
        Ok(())
    }

    /// Borrow the content of a file. The slice length is the file size.
    pub fn read_file(&self, path: &str) -> FsResult<&[u8]> {
        let entry = self.lookup(path).ok_or(FsError::NotFound)?;
        entry
            .content()
            .map(|content| content.as_bytes())
            .ok_or(FsError::WrongType)
    }

    /// Overwrite (`append == false`) or extend (`append == true`) a file.
    ///
    /// A missing file is created first; if that allocation fails the write
    /// fails with the allocation error. Writing to a directory fails with
    /// `WrongType` and changes nothing.
    ///
    /// Content is capped at `MAX_FILE_SIZE`: whatever does not fit is dropped
    /// without an error. Compare the requested length with the resulting
    /// size to detect it.
    pub fn write_file(&mut self, path: &str, bytes: &[u8], append: bool) -> FsResult<()> {
        let index = match self.table.find(path) {
            Some(index) => index,
            None => self.table.allocate(path, EntryKind::File)?,
        };

        let content = self
            .table
            .get_mut(index)
            .ok_or(FsError::NotFound)?
            .content_mut()
            .ok_or(FsError::WrongType)?;

        let offset = if append { content.len() } else { 0 };
        content.write_at(offset, bytes);
        Ok(())
    }

    /// Direct children of `dir_path` ("" is the root), in table order.
    ///
    /// An entry is a child when the parent part of its name equals `dir_path`
    /// exactly; grandchildren are not included.
    pub fn list_children<'a>(
        &'a self,
        dir_path: &'a str,
    ) -> impl Iterator<Item = DirEntry<'a>> + 'a {
        self.table
            .iter()
            .map(|(_, entry)| entry)
            .filter(move |entry| path::parent(entry.name()) == dir_path)
            .map(|entry| DirEntry {
                name: path::basename(entry.name()),
                is_directory: entry.is_directory(),
            })
    }

    /// Find the entry with exactly this name.
    pub fn lookup(&self, path: &str) -> Option<&Entry> {
        self.table.find(path).and_then(|index| self.table.get(index))
    }

    pub fn is_directory(&self, path: &str) -> bool {
        self.lookup(path).is_some_and(Entry::is_directory)
    }

    /// Number of entries in use.
    pub fn entry_count(&self) -> usize {
        self.table.len()
    }

    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}
