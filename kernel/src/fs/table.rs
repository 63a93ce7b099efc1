/*
 * Entry Table
 *
 * A fixed-capacity arena of named records. Each slot is either free (None) or
 * holds one Entry. There are no parent/child links: an entry's place in the
 * tree is implied by its name alone, and lookups are linear scans, which is
 * fine for a table of MAX_ENTRIES slots.
 *
 * Allocation always claims the lowest free slot, so a slot freed by a delete
 * is the next one handed out. Callers must not hold on to indices across a
 * delete/allocate pair.
 *
 * The table is const-constructible so the global instance lives in static
 * memory rather than being built on the boot stack.
 */

use heapless::Vec;

use super::error::{FsError, FsResult};
use super::path::{self, PathBuf};
use crate::config::{MAX_ENTRIES, MAX_FILE_SIZE, MAX_NAME_LEN};

/// Kind of an entry, fixed when the entry is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// Bounded file content buffer.
///
/// Writes never go past `MAX_FILE_SIZE`; they report how many bytes were
/// actually accepted instead.
#[derive(Debug, Clone)]
pub struct FileContent {
    bytes: Vec<u8, MAX_FILE_SIZE>,
}

impl FileContent {
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Logical size of the content.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write `data` starting at `offset`, dropping anything that does not fit.
    ///
    /// The content ends right after the written bytes. Offsets past the
    /// current end are clamped to it, so content never has holes.
    ///
    /// # Returns
    /// Number of bytes of `data` that were stored.
    pub fn write_at(&mut self, offset: usize, data: &[u8]) -> usize {
        let offset = offset.min(self.bytes.len());
        self.bytes.truncate(offset);

        let accepted = data.len().min(MAX_FILE_SIZE - offset);
        // Cannot fail: `accepted` is bounded by the remaining capacity.
        let _ = self.bytes.extend_from_slice(&data[..accepted]);
        accepted
    }
}

impl Default for FileContent {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
enum Node {
    Directory,
    File(FileContent),
}

/// One named record: a directory marker or a file with content.
#[derive(Debug, Clone)]
pub struct Entry {
    name: PathBuf,
    node: Node,
}

impl Entry {
    fn new(name: PathBuf, kind: EntryKind) -> Self {
        let node = match kind {
            EntryKind::Directory => Node::Directory,
            EntryKind::File => Node::File(FileContent::new()),
        };
        Self { name, node }
    }

    /// Full path of the entry.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        match self.node {
            Node::Directory => EntryKind::Directory,
            Node::File(_) => EntryKind::File,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.node, Node::Directory)
    }

    /// Content size; always 0 for directories.
    pub fn size(&self) -> usize {
        match &self.node {
            Node::Directory => 0,
            Node::File(content) => content.len(),
        }
    }

    /// File content, or None for a directory.
    pub fn content(&self) -> Option<&FileContent> {
        match &self.node {
            Node::Directory => None,
            Node::File(content) => Some(content),
        }
    }

    pub fn content_mut(&mut self) -> Option<&mut FileContent> {
        match &mut self.node {
            Node::Directory => None,
            Node::File(content) => Some(content),
        }
    }
}

/// Fixed-capacity arena of entries indexed by slot.
pub struct EntryTable {
    slots: [Option<Entry>; MAX_ENTRIES],
}

impl EntryTable {
    /// Create a table with every slot free.
    pub const fn new() -> Self {
        Self {
            slots: [const { None }; MAX_ENTRIES],
        }
    }

    /// Total number of slots.
    pub const fn capacity(&self) -> usize {
        MAX_ENTRIES
    }

    /// Number of slots in use.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }

    /// Find the slot holding exactly `name`.
    ///
    /// Case-sensitive byte comparison, no normalization of any kind.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| matches!(slot, Some(entry) if entry.name() == name))
    }

    /// Claim the lowest free slot for a new entry.
    ///
    /// # Errors
    /// * `InvalidName` - `name` is empty or longer than `MAX_NAME_LEN`
    /// * `AlreadyExists` - some entry (of either kind) already has this name
    /// * `TableFull` - no free slot
    pub fn allocate(&mut self, name: &str, kind: EntryKind) -> FsResult<usize> {
        if name.is_empty() || name.len() > MAX_NAME_LEN {
            return Err(FsError::InvalidName);
        }

        if self.find(name).is_some() {
            return Err(FsError::AlreadyExists);
        }

        let index = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(FsError::TableFull)?;

        self.slots[index] = Some(Entry::new(path::to_path_buf(name), kind));
        Ok(index)
    }

    /// Free a slot. Freeing a free or out-of-range slot does nothing.
    ///
    /// This is not a secure delete; the old content is simply dropped.
    pub fn release(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = None;
        }
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entry> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Used slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Entry)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|entry| (index, entry)))
    }
}

impl Default for EntryTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_claims_lowest_free_slot() {
        let mut table = EntryTable::new();

        assert_eq!(table.allocate("a", EntryKind::Directory), Ok(0));
        assert_eq!(table.allocate("b", EntryKind::File), Ok(1));
        assert_eq!(table.allocate("c", EntryKind::File), Ok(2));

        table.release(1);
        assert_eq!(table.find("b"), None);

        // The freed slot is handed out again before any higher one
        assert_eq!(table.allocate("d", EntryKind::File), Ok(1));
        assert_eq!(table.find("d"), Some(1));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_allocate_rejects_bad_names() {
        let mut table = EntryTable::new();
        let longest = "x".repeat(MAX_NAME_LEN);
        let too_long = "x".repeat(MAX_NAME_LEN + 1);

        assert_eq!(table.allocate("", EntryKind::File), Err(FsError::InvalidName));
        assert_eq!(
            table.allocate(&too_long, EntryKind::Directory),
            Err(FsError::InvalidName)
        );
        assert_eq!(table.allocate(&longest, EntryKind::File), Ok(0));
        assert_eq!(table.get(0).map(Entry::name), Some(longest.as_str()));
    }

    #[test]
    fn test_names_are_unique_across_kinds() {
        let mut table = EntryTable::new();

        table.allocate("notes", EntryKind::File).unwrap();
        assert_eq!(
            table.allocate("notes", EntryKind::Directory),
            Err(FsError::AlreadyExists)
        );
        assert_eq!(
            table.allocate("notes", EntryKind::File),
            Err(FsError::AlreadyExists)
        );
    }

    #[test]
    fn test_find_is_exact() {
        let mut table = EntryTable::new();
        table.allocate("user/Notes", EntryKind::File).unwrap();

        assert_eq!(table.find("user/Notes"), Some(0));
        assert_eq!(table.find("user/notes"), None);
        assert_eq!(table.find("user/Notes/"), None);
        assert_eq!(table.find("./user/Notes"), None);
    }

    #[test]
    fn test_table_full() {
        let mut table = EntryTable::new();
        for i in 0..MAX_ENTRIES {
            table.allocate(&format!("e{}", i), EntryKind::File).unwrap();
        }

        assert_eq!(table.len(), table.capacity());
        assert_eq!(
            table.allocate("one-more", EntryKind::File),
            Err(FsError::TableFull)
        );

        table.release(42);
        assert_eq!(table.allocate("one-more", EntryKind::File), Ok(42));
    }

    #[test]
    fn test_duplicate_reported_before_full() {
        let mut table = EntryTable::new();
        for i in 0..MAX_ENTRIES {
            table.allocate(&format!("e{}", i), EntryKind::File).unwrap();
        }

        assert_eq!(
            table.allocate("e7", EntryKind::File),
            Err(FsError::AlreadyExists)
        );
    }

    #[test]
    fn test_release_out_of_range_is_noop() {
        let mut table = EntryTable::new();
        table.allocate("a", EntryKind::File).unwrap();

        table.release(MAX_ENTRIES + 5);
        table.release(3);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_new_entries_start_empty() {
        let mut table = EntryTable::new();
        let dir = table.allocate("d", EntryKind::Directory).unwrap();
        let file = table.allocate("f", EntryKind::File).unwrap();

        let dir = table.get(dir).unwrap();
        assert!(dir.is_directory());
        assert!(dir.content().is_none());
        assert_eq!(dir.size(), 0);

        let file = table.get(file).unwrap();
        assert_eq!(file.kind(), EntryKind::File);
        assert_eq!(file.content().map(FileContent::as_bytes), Some(&[][..]));
    }

    #[test]
    fn test_iter_skips_free_slots() {
        let mut table = EntryTable::new();
        table.allocate("a", EntryKind::File).unwrap();
        table.allocate("b", EntryKind::File).unwrap();
        table.allocate("c", EntryKind::File).unwrap();
        table.release(1);

        let names: std::vec::Vec<_> = table.iter().map(|(i, e)| (i, e.name())).collect();
        assert_eq!(names, [(0, "a"), (2, "c")]);
    }

    #[test]
    fn test_file_content_write_at() {
        let mut content = FileContent::new();

        assert_eq!(content.write_at(0, b"hello"), 5);
        assert_eq!(content.write_at(content.len(), b" world"), 6);
        assert_eq!(content.as_bytes(), b"hello world");

        // Overwrite from the start shortens the content
        assert_eq!(content.write_at(0, b"hi"), 2);
        assert_eq!(content.as_bytes(), b"hi");
    }

    #[test]
    fn test_file_content_is_bounded() {
        let mut content = FileContent::new();
        let payload = [0xABu8; MAX_FILE_SIZE + 100];

        assert_eq!(content.write_at(0, &payload[..500]), 500);
        assert_eq!(content.write_at(500, &payload), MAX_FILE_SIZE - 500);
        assert_eq!(content.len(), MAX_FILE_SIZE);
        assert_eq!(content.write_at(MAX_FILE_SIZE, b"more"), 0);
        assert_eq!(content.len(), MAX_FILE_SIZE);
    }
}
