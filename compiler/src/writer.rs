/// Line-oriented builder for generated source text.
///
/// Lines are collected with the current indentation applied and joined with
/// `\n` at the end; the output carries no trailing newline.
#[derive(Debug, Default)]
pub struct CodeWriter {
    lines:  Vec<String>,
    indent: usize,
}

const INDENT: &str = "    ";

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line at the current indentation. Empty lines stay empty.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(format!("{}{}", INDENT.repeat(self.indent), text));
        }
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Appends a pre-formatted block verbatim, ignoring indentation.
    pub fn raw(&mut self, block: &str) -> &mut Self {
        self.lines.extend(block.lines().map(str::to_string));
        self
    }

    pub fn indent(&mut self) -> &mut Self {
        self.indent += 1;
        self
    }

    pub fn dedent(&mut self) -> &mut Self {
        self.indent = self.indent.saturating_sub(1);
        self
    }

    /// Writes `open`, the body one level deeper, then `close`.
    pub fn block(&mut self, open: impl AsRef<str>, close: &str, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.line(open);
        self.indent();
        body(self);
        self.dedent();
        self.line(close)
    }

    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}
