//! Collect all structs that represent parts of the file tree.

use std::fs::DirEntry;
use std::path::PathBuf;

/// Indentation below an entry that was the last of its siblings
pub const INDENT_SIGN: &str = "    ";

/// Bar below an entry that still has siblings following it
pub const TREE_SIGN: &str = "│   ";

/// In front of a file or dir if it is not the last
pub const INNER_BRANCH: &str = "├── ";

/// In front of a file or dir if it is the last
pub const FINAL_BRANCH: &str = "└── ";

/// Names starting with this character are hidden and never listed
pub const HIDDEN_MARKER: char = '.';

/// Directory name that is never listed, no matter where it appears
pub const EXCLUDED_NAME: &str = "node_modules";

/// Position of an entry among its siblings, which decides how it and its children are drawn.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TreeLevel {
    /// More siblings follow this entry
    TreeBranch,
    /// This entry is the last of its siblings
    TreeFinalBranch,
}

impl TreeLevel {
    /// Position of the entry at `index` in a list of `len` siblings.
    pub fn at(index: usize, len: usize) -> TreeLevel {
        if index + 1 == len {
            TreeLevel::TreeFinalBranch
        } else {
            TreeLevel::TreeBranch
        }
    }

    /// Glyph drawn right in front of the entry name.
    pub fn connector(self) -> &'static str {
        match self {
            TreeLevel::TreeBranch => INNER_BRANCH,
            TreeLevel::TreeFinalBranch => FINAL_BRANCH,
        }
    }

    /// Prefix handed down to the children of this entry.
    pub fn child_prefix(self, prefix: &str) -> String {
        let continuation = match self {
            TreeLevel::TreeBranch => TREE_SIGN,
            TreeLevel::TreeFinalBranch => INDENT_SIGN,
        };
        format!("{prefix}{continuation}")
    }
}

/// Represent which kind of file a TreeEntry is.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TreeEntryKind {
    /// Anything we do not descend into
    File,
    /// A directory, or a symlink pointing at one
    Directory,
}

/// A single file or directory found inside another directory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeEntry {
    /// File name as displayed in the tree
    pub name: String,

    /// Parent path joined with the name
    pub path: PathBuf,

    /// Save kind of entry to decide whether to descend into it
    pub kind: TreeEntryKind,
}

impl TreeEntry {
    /// Build an entry from a directory listing, querying the filesystem for its kind.
    pub fn from_dir_entry(entry: &DirEntry) -> TreeEntry {
        let path = entry.path();
        let kind = if path.is_dir() {
            TreeEntryKind::Directory
        } else {
            TreeEntryKind::File
        };

        TreeEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            path,
            kind,
        }
    }

    /// Whether the entry is left out of the tree entirely.
    pub fn is_excluded(name: &str) -> bool {
        name.starts_with(HIDDEN_MARKER) || name == EXCLUDED_NAME
    }

    /// Render the line for this entry below the given prefix.
    pub fn render(&self, prefix: &str, level: TreeLevel) -> String {
        format!("{}{}{}", prefix, level.connector(), self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs::{self, File};

    #[rstest]
    #[case(0, 1, TreeLevel::TreeFinalBranch)]
    #[case(0, 3, TreeLevel::TreeBranch)]
    #[case(1, 3, TreeLevel::TreeBranch)]
    #[case(2, 3, TreeLevel::TreeFinalBranch)]
    fn test_level_position(#[case] index: usize, #[case] len: usize, #[case] level: TreeLevel) {
        assert_eq!(TreeLevel::at(index, len), level);
    }

    #[rstest]
    #[case("", TreeLevel::TreeBranch, "├── name", "│   ")]
    #[case("", TreeLevel::TreeFinalBranch, "└── name", "    ")]
    #[case("│   ", TreeLevel::TreeBranch, "│   ├── name", "│   │   ")]
    #[case("│   ", TreeLevel::TreeFinalBranch, "│   └── name", "│       ")]
    #[case("    ", TreeLevel::TreeFinalBranch, "    └── name", "        ")]
    /// Verify that lines and prefixes compound one level per ancestor.
    fn test_render_and_child_prefix(
        #[case] prefix: &str,
        #[case] level: TreeLevel,
        #[case] line: &str,
        #[case] child_prefix: &str,
    ) {
        let entry = TreeEntry {
            name: "name".to_string(),
            path: PathBuf::from("name"),
            kind: TreeEntryKind::File,
        };
        assert_eq!(entry.render(prefix, level), line);
        assert_eq!(level.child_prefix(prefix), child_prefix);
    }

    #[rstest]
    #[case(".secret", true)]
    #[case(".", true)]
    #[case("node_modules", true)]
    #[case("node_modules2", false)]
    #[case("my_node_modules", false)]
    #[case("Node_modules", false)]
    #[case("file.txt", false)]
    fn test_is_excluded(#[case] name: &str, #[case] excluded: bool) {
        assert_eq!(TreeEntry::is_excluded(name), excluded);
    }

    #[test]
    /// Verify that the kind of an entry is read from the filesystem.
    fn test_from_dir_entry_kind() {
        let tmpdir = tempfile::tempdir().expect("Trying to create a temporary directoy.");
        let dir = tmpdir.path();
        fs::create_dir(dir.join("sub")).unwrap();
        File::create(dir.join("file.txt")).unwrap();

        let mut entries: Vec<TreeEntry> = fs::read_dir(dir)
            .unwrap()
            .map(|e| TreeEntry::from_dir_entry(&e.unwrap()))
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries[0].name, "file.txt");
        assert_eq!(entries[0].kind, TreeEntryKind::File);
        assert_eq!(entries[0].path, dir.join("file.txt"));
        assert_eq!(entries[1].name, "sub");
        assert_eq!(entries[1].kind, TreeEntryKind::Directory);
    }

    #[test]
    /// Symlinks to directories are descended into like the directory itself.
    fn test_from_dir_entry_symlink() {
        let tmpdir = tempfile::tempdir().expect("Trying to create a temporary directoy.");
        let dir = tmpdir.path();
        fs::create_dir(dir.join("target")).unwrap();
        std::os::unix::fs::symlink(dir.join("target"), dir.join("link")).unwrap();
        std::os::unix::fs::symlink(dir.join("missing"), dir.join("dangling")).unwrap();

        for entry in fs::read_dir(dir).unwrap() {
            let entry = TreeEntry::from_dir_entry(&entry.unwrap());
            match entry.name.as_str() {
                "target" | "link" => assert_eq!(entry.kind, TreeEntryKind::Directory),
                "dangling" => assert_eq!(entry.kind, TreeEntryKind::File),
                other => panic!("unexpected entry {other}"),
            }
        }
    }
}
