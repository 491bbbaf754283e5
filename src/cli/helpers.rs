//! Shared helper functions for CLI commands

use console::{style, Term};
use std::io::{self, IsTerminal};

/// Check if both stdin and stdout are attached to a terminal
///
/// Piped or redirected runs are treated as non-interactive so scripts never block.
pub fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

/// Key-press gate shown before the process exits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitGate {
    enabled: bool,
}

impl ExitGate {
    /// Gate that waits only when requested and the session is interactive
    pub fn new(requested: bool) -> Self {
        Self::with_terminal(requested, is_interactive())
    }

    pub fn with_terminal(requested: bool, interactive: bool) -> Self {
        Self {
            enabled: requested && interactive,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Block until a key is pressed; returns immediately when disabled
    pub fn wait(&self) {
        if !self.enabled {
            return;
        }
        println!("{}", style("Press any key to exit...").dim());
        if let Err(e) = Term::stdout().read_key() {
            tracing::debug!(error = %e, "failed to read key press");
        }
    }
}
