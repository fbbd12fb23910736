//! Terminal dialogs.

use std::io::{self, BufRead, Write};

use jacare_storefront::dialog::Dialog;

/// Prints alerts to stdout and asks confirmations on stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalDialog {
    assume_yes: bool,
}

impl TerminalDialog {
    #[must_use]
    pub const fn new() -> Self {
        Self { assume_yes: false }
    }

    /// A dialog that answers every confirmation with yes.
    #[must_use]
    pub const fn assume_yes() -> Self {
        Self { assume_yes: true }
    }
}

impl Dialog for TerminalDialog {
    #[allow(clippy::print_stdout)]
    fn alert(&mut self, message: &str) {
        println!("{message}\n");
    }

    #[allow(clippy::print_stdout)]
    fn confirm(&mut self, message: &str) -> bool {
        println!("{message}");
        if self.assume_yes {
            println!("[s/N] s\n");
            return true;
        }

        print!("[s/N] ");
        if let Err(e) = io::stdout().flush() {
            tracing::warn!(error = %e, "failed to flush prompt");
        }

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(_) => is_yes(&line),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read answer, declining");
                false
            }
        }
    }
}

/// Whether a typed answer means yes. Anything unrecognised declines.
fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "sim" | "y" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        for answer in ["s\n", "Sim", " y ", "YES"] {
            assert!(is_yes(answer), "{answer:?}");
        }
        for answer in ["", "\n", "n", "não", "talvez"] {
            assert!(!is_yes(answer), "{answer:?}");
        }
    }

    #[test]
    fn test_assume_yes_confirms() {
        assert!(TerminalDialog::assume_yes().confirm("Deseja finalizar a compra?"));
    }
}
