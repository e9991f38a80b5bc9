use docguard_types::RepoPath;

/// One documentation file, fully loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocFile {
    pub path: RepoPath,
    pub text: String,
}

impl DocFile {
    pub fn new(path: impl AsRef<str>, text: impl Into<String>) -> Self {
        Self {
            path: RepoPath::new(path),
            text: text.into(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DocsModel {
    /// `.mdx` pages under `tools/`, sorted by path.
    pub tool_docs: Vec<DocFile>,

    /// Every `.md`, `.mdx` and `docs.json` file in the repository, sorted by path.
    pub scanned_docs: Vec<DocFile>,
}
