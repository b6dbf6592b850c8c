#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Print a formatted report.
    Report(String),
    /// Print the help text (interactive sessions only).
    ShowHelp,
}
