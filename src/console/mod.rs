// Captured console output for the menu

/// How an output line should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Plain,
    Heading,
    Success,
    Warning,
    Error,
}

/// A line of console output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub text: String,
    pub kind: LineKind,
}

/// Lines kept before the oldest are discarded
pub const MAX_OUTPUT_LINES: usize = 5_000;

/// What the menu has printed, oldest first (at most [`MAX_OUTPUT_LINES`])
#[derive(Debug, Clone)]
pub struct OutputLog {
    pub lines: Vec<OutputLine>,
}

impl OutputLog {
    pub fn new() -> Self {
        OutputLog { lines: Vec::new() }
    }

    /// Append text, one line per `\n`-separated segment
    pub fn push(&mut self, text: impl AsRef<str>, kind: LineKind) {
        for segment in text.as_ref().split('\n') {
            self.lines.push(OutputLine {
                text: segment.to_string(),
                kind,
            });
        }
        if self.lines.len() > MAX_OUTPUT_LINES {
            let excess = self.lines.len() - MAX_OUTPUT_LINES;
            self.lines.drain(..excess);
        }
    }

    pub fn print(&mut self, text: impl AsRef<str>) {
        self.push(text, LineKind::Plain);
    }

    pub fn heading(&mut self, text: impl AsRef<str>) {
        self.push(text, LineKind::Heading);
    }

    pub fn success(&mut self, text: impl AsRef<str>) {
        self.push(text, LineKind::Success);
    }

    pub fn warning(&mut self, text: impl AsRef<str>) {
        self.push(format!("Warning: {}", text.as_ref()), LineKind::Warning);
    }

    pub fn error(&mut self, text: impl AsRef<str>) {
        self.push(format!("Error: {}", text.as_ref()), LineKind::Error);
    }

    /// Get all lines as plain strings
    pub fn get_output(&self) -> Vec<String> {
        self.lines.iter().map(|l| l.text.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for OutputLog {
    fn default() -> Self {
        Self::new()
    }
}
