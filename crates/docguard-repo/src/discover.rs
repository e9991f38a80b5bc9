use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use docguard_types::RepoPath;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Recursively list files under `repo_root/start` accepted by `include`.
///
/// Behavior:
/// - every subdirectory is entered; there is no exclusion list
/// - symlinks are followed; linked entries keep their link path and a link
///   cycle is a walk error
/// - paths that are not valid UTF-8 are skipped
/// - results are repo-relative and sorted
pub fn walk_files<F>(repo_root: &Utf8Path, start: &Utf8Path, include: F) -> anyhow::Result<Vec<RepoPath>>
where
    F: Fn(&RepoPath) -> bool,
{
    let base = if start.as_str().is_empty() {
        repo_root.to_path_buf()
    } else {
        repo_root.join(start)
    };

    let mut out = Vec::new();
    for entry in WalkDir::new(&base).follow_links(true) {
        let entry = entry.with_context(|| format!("walk {}", base))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(abs) = pathbuf_to_utf8(entry.path().to_path_buf()) else {
            tracing::debug!(path = %entry.path().display(), "skipping non-UTF-8 path");
            continue;
        };
        let rel = RepoPath::new(abs.strip_prefix(repo_root).unwrap_or(&abs).as_str());
        if include(&rel) {
            out.push(rel);
        }
    }

    // Stable order.
    out.sort();
    Ok(out)
}

/// `.mdx` pages (tool coverage input).
pub fn is_mdx(path: &RepoPath) -> bool {
    path.extension() == Some("mdx")
}

/// Files scanned for banned domains: `.md`, `.mdx`, or exactly `docs.json`.
pub fn is_scanned_doc(path: &RepoPath) -> bool {
    matches!(path.extension(), Some("md" | "mdx")) || path.file_name() == "docs.json"
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn touch(path: &Utf8Path) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, "").expect("write file");
    }

    #[test]
    fn predicates_match_expected_names() {
        assert!(is_mdx(&RepoPath::new("tools/a.mdx")));
        assert!(!is_mdx(&RepoPath::new("tools/a.md")));
        assert!(!is_mdx(&RepoPath::new("tools/a.MDX")));

        assert!(is_scanned_doc(&RepoPath::new("a.md")));
        assert!(is_scanned_doc(&RepoPath::new("x/y/a.mdx")));
        assert!(is_scanned_doc(&RepoPath::new("docs.json")));
        assert!(is_scanned_doc(&RepoPath::new("nested/docs.json")));
        assert!(!is_scanned_doc(&RepoPath::new("other.json")));
        assert!(!is_scanned_doc(&RepoPath::new("mydocs.json")));
        assert!(!is_scanned_doc(&RepoPath::new("README")));
    }

    #[test]
    fn walks_nested_directories_in_sorted_order() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        touch(&root.join("tools/z.mdx"));
        touch(&root.join("tools/deep/er/a.mdx"));
        touch(&root.join("tools/b.mdx"));
        touch(&root.join("tools/skip.txt"));
        touch(&root.join("outside.mdx"));

        let files = walk_files(&root, Utf8Path::new("tools"), is_mdx).expect("walk");
        let paths: Vec<&str> = files.iter().map(|p| p.as_str()).collect();
        assert_eq!(
            paths,
            vec!["tools/b.mdx", "tools/deep/er/a.mdx", "tools/z.mdx"]
        );
    }

    #[test]
    fn empty_start_walks_whole_root() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        touch(&root.join("a.md"));
        touch(&root.join("node_modules/pkg/README.md"));

        let files = walk_files(&root, Utf8Path::new(""), is_scanned_doc).expect("walk");
        let paths: Vec<&str> = files.iter().map(|p| p.as_str()).collect();
        assert_eq!(paths, vec!["a.md", "node_modules/pkg/README.md"]);
    }

    #[test]
    fn missing_start_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        let err = walk_files(&root, Utf8Path::new("nope"), is_mdx).unwrap_err();
        assert!(err.to_string().starts_with("walk "));
    }

    #[cfg(unix)]
    #[test]
    fn follows_symlinked_directories_and_files() {
        use std::os::unix::fs::symlink;

        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        touch(&root.join("shared/list.mdx"));
        touch(&root.join("page.mdx"));
        touch(&root.join("tools/local.mdx"));
        symlink("../shared", root.join("tools/shared")).expect("dir symlink");
        symlink("../page.mdx", root.join("tools/search.mdx")).expect("file symlink");

        let files = walk_files(&root, Utf8Path::new("tools"), is_mdx).expect("walk");
        let paths: Vec<&str> = files.iter().map(|p| p.as_str()).collect();
        assert_eq!(
            paths,
            vec!["tools/local.mdx", "tools/search.mdx", "tools/shared/list.mdx"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlink_cycle_is_an_error() {
        use std::os::unix::fs::symlink;

        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        touch(&root.join("tools/a.mdx"));
        symlink(".", root.join("tools/loop")).expect("dir symlink");

        let err = walk_files(&root, Utf8Path::new("tools"), is_mdx).unwrap_err();
        assert!(err.to_string().starts_with("walk "));
    }

    #[test]
    fn pathbuf_to_utf8_rejects_invalid() {
        #[cfg(unix)]
        {
            use std::ffi::OsString;
            use std::os::unix::ffi::OsStringExt;
            let invalid = OsString::from_vec(vec![0xFF, 0xFE, 0xFD]);
            assert!(pathbuf_to_utf8(PathBuf::from(invalid)).is_none());
        }
        assert!(pathbuf_to_utf8(PathBuf::from("tools/a.mdx")).is_some());
    }
}
