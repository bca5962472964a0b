//! Line-oriented output sinks.

use std::io::Write;

/// Destination for rendered text, one logical line per call.
pub trait Sink {
    fn write_line(&mut self, line: &str);

    fn blank(&mut self) {
        self.write_line("");
    }
}

/// Writes lines to stdout. Write failures (closed pipe) are dropped, like a console logger.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&mut self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", line);
    }
}

/// Collects lines in memory.
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl Sink for BufferSink {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
