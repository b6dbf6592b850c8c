use std::fmt::Write;

use wordcount_core::{Command, ControlSyntax, Window};

/// Printed on every line break in interactive sessions.
pub const PROMPT: &str = "> ";

/// Help text listing the reserved tokens in `syntax`.
pub fn help_text(syntax: ControlSyntax, window: Window) -> String {
    let mut text = String::from("Enter text to capture word counts.\n");
    match window.as_secs() {
        Some(secs) => {
            let _ = writeln!(text, "Words will be removed from the count after {secs} seconds.");
        }
        None => text.push_str("Words are counted until the statistics are reset.\n"),
    }
    match syntax.marker() {
        Some(marker) => {
            let _ = writeln!(
                text,
                "The following keywords will not be counted (beginning with '{marker}'):"
            );
        }
        None => text.push_str("The following keywords will not be counted:\n"),
    }

    let entries = [
        (Command::Snapshot, "print statistics"),
        (Command::Reset, "reset statistics"),
        (Command::Help, "print help"),
        (Command::Terminate, "quit"),
    ];
    for (command, description) in entries {
        if let Some(spelling) = syntax.spell(&command) {
            let _ = writeln!(text, "{spelling}: {description}");
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use wordcount_core::{ControlSyntax, Window};

    use super::help_text;

    #[test]
    fn default_help_lists_marked_keywords() {
        let expected = "\
Enter text to capture word counts.
Words will be removed from the count after 60 seconds.
The following keywords will not be counted (beginning with '-'):
-stats: print statistics
-reset: reset statistics
-help: print help
-exit: quit
";
        assert_eq!(help_text(ControlSyntax::default(), Window::default()), expected);
    }

    #[test]
    fn bare_unbounded_help() {
        let text = help_text(ControlSyntax::bare(), Window::Unbounded);
        assert!(text.contains("counted until the statistics are reset"));
        assert!(text.contains("\nstats: print statistics\n"));
        assert!(text.ends_with("exit: quit\n"));
    }
}
