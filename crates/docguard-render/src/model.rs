#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableLocation {
    pub path: String,
    pub line: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFinding {
    pub severity: RenderableSeverity,
    pub check_id: Option<String>,
    pub code: String,
    pub message: String,
    pub location: Option<RenderableLocation>,
    /// Tool name or banned domain the finding is about.
    pub subject: Option<String>,
    /// Offending line, trimmed.
    pub excerpt: Option<String>,
    pub help: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct RenderableData {
    pub manifest_source: String,
    pub tools_declared: u32,
    pub tools_covered: u32,
    pub missing_tools: Vec<String>,
    pub banned_hits: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub findings: Vec<RenderableFinding>,
    pub data: RenderableData,
}
