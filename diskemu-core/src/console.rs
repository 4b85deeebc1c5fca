//! Console output abstraction for the command engine.
//!
//! The `Console` trait is the engine's only output channel, so the same
//! engine drives both a real terminal and the `HeadlessConsole` used in tests.

/// Console interface for command feedback.
pub trait Console: Send {
    /// Write one line of output.
    fn write_line(&mut self, line: &str);

    /// Render a sector so it stands out in `vd` output.
    fn highlight(&self, cell: &str) -> String {
        format!("\x1b[1m\x1b[92m{}\x1b[0m", cell)
    }

    /// Clear the screen. Default is a no-op.
    fn clear_screen(&mut self) {}
}

/// Headless console for testing - captures output lines.
#[derive(Default)]
pub struct HeadlessConsole {
    lines: Vec<String>,
    clears: usize,
}

impl HeadlessConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Get output as one newline-joined string.
    pub fn output_string(&self) -> String {
        self.lines.join("\n")
    }

    /// Last line written, if any.
    pub fn last_line(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Number of clear-screen requests seen.
    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Clear output buffer.
    pub fn clear_output(&mut self) {
        self.lines.clear();
    }
}

impl Console for HeadlessConsole {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    // Brackets keep captured output readable in assertions.
    fn highlight(&self, cell: &str) -> String {
        format!("[{}]", cell)
    }

    fn clear_screen(&mut self) {
        self.clears += 1;
    }
}
