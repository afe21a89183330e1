/// Output format of the license check
///
/// Shared by the CLI (inbound adapter) and the formatter factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aggregated license report as JSON (default)
    #[default]
    Json,
    /// Full compliance tree as JSON
    Tree,
    /// Human-readable Markdown summary
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "tree" => Ok(OutputFormat::Tree),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json', 'tree' or 'markdown'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Tree => write!(f, "tree"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}
