//! This crate provides a library to render a graphical representation of a directory in a tree
//! like fashion and save it to a file.
//!
//! Hidden files and folders (names starting with a dot) as well as every `node_modules` directory
//! are left out. Directories are visited one after another in a depth first manner, so the
//! rendered lines come out in the same order on every run as long as the filesystem does not
//! change.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod errors;
pub mod options;
pub mod tree_elements;

pub use errors::TreeError;
pub use options::{LogLevel, Options};

use errors::{ReadDirSnafu, WriteOutputSnafu};
use snafu::ResultExt;
use std::path::Path;
use std::{fs, io};
use tracing::{debug, info};
use tree_elements::{TreeEntry, TreeEntryKind, TreeLevel};

/// Name of the file the tree is saved to, relative to the current working directory
pub const OUTPUT_FILE: &str = "file.txt";

/// Read the directory for the given Path and sort the entries by name.
///
/// Collect all entries in the given directory, drop hidden ones and `node_modules`, and sort the
/// rest by their raw name. The ordering is case sensitive, so `Zeta` comes before `alpha`.
///
/// # Errors
///
/// Will return an error in the following situations, but not limited to:
/// * The provided `path` doesn't exist.
/// * The process lacks permissions to view the contens.
/// * The `path` points at a non-directory file.
pub fn read_dir(path: &impl AsRef<Path>) -> Result<Vec<TreeEntry>, io::Error> {
    let mut entries = fs::read_dir(path)?.collect::<Result<Vec<_>, io::Error>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    Ok(entries
        .iter()
        .filter(|entry| !TreeEntry::is_excluded(&entry.file_name().to_string_lossy()))
        .map(TreeEntry::from_dir_entry)
        .collect())
}

/// Render the lines for all children of `path`, each prefixed by `prefix`.
///
/// Every directory contributes its own line followed directly by the block of lines of its
/// children, indented by one more level. A directory that may not be listed is rendered without
/// any children.
///
/// # Errors
///
/// Any failure to list a directory other than missing permissions, most notably a `path` that
/// doesn't exist or isn't a directory.
pub fn build_tree(path: &impl AsRef<Path>, prefix: &str) -> Result<Vec<String>, TreeError> {
    let path = path.as_ref();
    debug!("Listing {}", path.display());

    let entries = match read_dir(&path) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
            debug!("Skipping {}: {}", path.display(), err);
            return Ok(Vec::new());
        }
        Err(err) => return Err(err).context(ReadDirSnafu { path }),
    };

    let mut lines = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let level = TreeLevel::at(i, entries.len());
        lines.push(entry.render(prefix, level));

        if entry.kind == TreeEntryKind::Directory {
            lines.extend(build_tree(&entry.path, &level.child_prefix(prefix))?);
        }
    }

    Ok(lines)
}

/// Collect the root path as it was given followed by all lines of the tree below it.
fn root_lines(root: &Path) -> Result<Vec<String>, TreeError> {
    let mut lines = vec![root.display().to_string()];
    lines.extend(build_tree(&root, "")?);
    Ok(lines)
}

/// Generate the full tree representation, starting with the root path as it was given.
pub fn render_tree(root: &impl AsRef<Path>) -> Result<String, TreeError> {
    Ok(root_lines(root.as_ref())?.join("\n"))
}

/// Render the tree below `root` and write it to `output`, replacing any existing file.
///
/// Returns the number of rendered entries, not counting the root line. Nothing is written when the
/// tree cannot be rendered.
pub fn save_tree(root: &impl AsRef<Path>, output: &impl AsRef<Path>) -> Result<usize, TreeError> {
    let output = output.as_ref();
    let lines = root_lines(root.as_ref())?;
    let entries = lines.len() - 1;

    fs::write(output, lines.join("\n")).context(WriteOutputSnafu { path: output })?;
    info!("Wrote {} entries to {}", entries, output.display());

    Ok(entries)
}

/// Save the tree for the configured directory to [`OUTPUT_FILE`] and report it on stdout.
pub fn run(options: &Options) -> Result<(), TreeError> {
    save_tree(&options.path, &OUTPUT_FILE)?;
    println!("Directory tree saved to {OUTPUT_FILE}");

    Ok(())
}
