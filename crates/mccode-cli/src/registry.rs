//! File registries: one `relative/path <sha256>` line per file in a
//! directory tree, for download-and-verify tooling.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Relative to the registered directory, `/`-separated.
    pub path: String,
    /// Lowercase hex SHA-256 of the file contents.
    pub digest: String,
}

/// Hash every regular file under `dir`, sorted by relative path.
pub fn build(dir: &Path) -> Result<Vec<Entry>> {
    if !dir.is_dir() {
        bail!(
            "{} can not be registered because it does not exist as a directory",
            dir.display()
        );
    }

    let mut files = Vec::new();
    collect_files(dir, &mut files)?;

    let mut entries = files
        .iter()
        .map(|file| -> Result<Entry> {
            let rel = file.strip_prefix(dir).unwrap_or(file);
            Ok(Entry {
                path: slash_path(rel),
                digest: file_sha256(file)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

pub fn render(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(|e| format!("{} {}\n", e.path, e.digest))
        .collect()
}

/// `<parent>/<dir stem>-registry.txt`.
pub fn registry_path(dir: &Path) -> Result<PathBuf> {
    let dir = dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve '{}'", dir.display()))?;
    let stem = dir
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("'{}' has no usable name", dir.display()))?;
    let parent = dir.parent().unwrap_or(dir.as_path());
    Ok(parent.join(format!("{}-registry.txt", stem)))
}

/// Build the registry for `dir` and write it next to the directory.
pub fn write(dir: &Path) -> Result<PathBuf> {
    let entries = build(dir)?;
    let out = registry_path(dir)?;
    fs::write(&out, render(&entries))
        .with_context(|| format!("Failed to write registry '{}'", out.display()))?;
    log::info!("registered {} file(s) from {}", entries.len(), dir.display());
    Ok(out)
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let listing =
        fs::read_dir(dir).with_context(|| format!("Failed to list '{}'", dir.display()))?;
    for entry in listing {
        let path = entry
            .with_context(|| format!("Failed to read an entry of '{}'", dir.display()))?
            .path();
        let meta = fs::symlink_metadata(&path)
            .with_context(|| format!("Failed to stat '{}'", path.display()))?;
        if meta.is_dir() {
            collect_files(&path, out)?;
        } else if path.is_file() {
            out.push(path);
        } else {
            log::debug!("skipping {}", path.display());
        }
    }
    Ok(())
}

fn file_sha256(path: &Path) -> Result<String> {
    let mut file =
        fs::File::open(path).with_context(|| format!("Failed to open '{}'", path.display()))?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}

fn slash_path(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    // sha256("") and sha256("abc")
    const EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
    const ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn entries_are_sorted_relative_and_hashed() {
        let dir = tempfile::tempdir().expect("create tempdir");
        let root = dir.path().join("libc");
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("b.h"), "abc").unwrap();
        fs::write(root.join("sub").join("a.c"), "").unwrap();
        fs::write(root.join("a.h"), "abc").unwrap();

        let entries = build(&root).unwrap();
        let paths: Vec<_> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["a.h", "b.h", "sub/a.c"]);
        assert_eq!(entries[0].digest, ABC);
        assert_eq!(entries[2].digest, EMPTY);
    }

    #[test]
    fn render_one_line_per_file() {
        let entries = vec![Entry {
            path: "x/y.h".into(),
            digest: ABC.into(),
        }];
        assert_eq!(render(&entries), format!("x/y.h {}\n", ABC));
    }

    #[test]
    fn write_places_registry_beside_directory() {
        let dir = tempfile::tempdir().expect("create tempdir");
        let root = dir.path().join("mcstas");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("comp.comp"), "abc").unwrap();

        let out = write(&root).unwrap();
        assert_eq!(out.file_name().unwrap(), "mcstas-registry.txt");
        assert_eq!(
            out.parent().unwrap().canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
        let text = fs::read_to_string(out).unwrap();
        assert_eq!(text, format!("comp.comp {}\n", ABC));
    }

    #[test]
    fn non_directory_is_rejected() {
        let dir = tempfile::tempdir().expect("create tempdir");
        let file = dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();
        let err = build(&file).unwrap_err();
        assert!(err
            .to_string()
            .contains("can not be registered because it does not exist as a directory"));
        assert!(build(&dir.path().join("missing")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_skipped() {
        let dir = tempfile::tempdir().expect("create tempdir");
        let root = dir.path().join("libc");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("real.h"), "abc").unwrap();
        std::os::unix::fs::symlink(root.join("gone.h"), root.join("link.h")).unwrap();

        let entries = build(&root).unwrap();
        let paths: Vec<_> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["real.h"]);
    }
}
