/// Staged `git diff --name-status` output, one `<status>\t<path>` record per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffSummary(pub String);

impl DiffSummary {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Paths from every record carrying at least a status and a path field.
    pub fn changed_files(&self) -> Vec<&str> {
        self.0
            .split('\n')
            .filter(|line| !line.is_empty())
            .filter_map(|line| line.split('\t').nth(1))
            .collect()
    }
}
