/*
 * Path Model
 *
 * The namespace has no directory objects of its own: every entry is a flat
 * record whose name is its full path ("user/notes.txt"). These helpers
 * compose and split such names on '/'. They never touch the entry table and
 * never fail - empty input gives empty output.
 *
 * The root directory is the empty string, so a top-level entry "bin" has
 * parent "" and there is no leading '/'.
 */

use heapless::String;

use crate::config::MAX_NAME_LEN;

/// Path separator.
pub const SEPARATOR: char = '/';

/// A path that fits in one namespace entry name.
pub type PathBuf = String<MAX_NAME_LEN>;

/// Join a directory and a name: `name` at the root, `dir/name` elsewhere.
///
/// The result is silently truncated to `MAX_NAME_LEN` bytes when it does not
/// fit, so a long name can come back shortened (and may then collide with or
/// refer to a different entry). Truncation stops at the last whole character.
pub fn join(dir: &str, name: &str) -> PathBuf {
    let mut out = PathBuf::new();

    if !dir.is_empty() {
        push_truncated(&mut out, dir);
        push_truncated(&mut out, "/");
    }
    push_truncated(&mut out, name);

    out
}

/// Everything before the last separator, or "" (root) if there is none.
///
/// `parent("a/b/c") == "a/b"`, `parent("a") == ""`. The returned directory is
/// not checked for existence.
pub fn parent(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// Everything after the last separator, or the whole path if there is none.
pub fn basename(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Copy `s` into a bounded path buffer, truncating to whatever still fits.
pub fn to_path_buf(s: &str) -> PathBuf {
    let mut out = PathBuf::new();
    push_truncated(&mut out, s);
    out
}

fn push_truncated<const N: usize>(out: &mut String<N>, s: &str) {
    let room = N - out.len();
    let mut end = s.len().min(room);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    // Cannot fail: `end` bytes fit by construction.
    let _ = out.push_str(&s[..end]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent() {
        assert_eq!(parent("a/b/c"), "a/b");
        assert_eq!(parent("a"), "");
        assert_eq!(parent(""), "");
        assert_eq!(parent("user/"), "user");
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("a/b/c"), "c");
        assert_eq!(basename("a"), "a");
        assert_eq!(basename(""), "");
        assert_eq!(basename("user/"), "");
    }

    #[test]
    fn test_join() {
        assert_eq!(join("", "user").as_str(), "user");
        assert_eq!(join("user", "notes.txt").as_str(), "user/notes.txt");
        assert_eq!(join("", "").as_str(), "");
    }

    #[test]
    fn test_join_truncates_to_name_capacity() {
        let dir = "user/projects/enixnel";
        let joined = join(dir, "readme-first.txt");

        assert_eq!(joined.len(), MAX_NAME_LEN);
        assert_eq!(joined.as_str(), "user/projects/enixnel/readme-fi");
    }

    #[test]
    fn test_join_truncation_can_drop_the_name_entirely() {
        let dir = "abcdefghijklmnopqrstuvwxyz01234"; // exactly MAX_NAME_LEN
        assert_eq!(join(dir, "x").as_str(), dir);
    }

    #[test]
    fn test_to_path_buf_keeps_whole_characters() {
        let long = "ééééééééééééééééé"; // 34 bytes
        let buf = to_path_buf(long);
        assert_eq!(buf.len(), 30);
        assert!(buf.chars().all(|c| c == 'é'));
    }
}
