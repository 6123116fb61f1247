/// Text buffer with indentation tracking for building declarations
#[derive(Debug, Default)]
pub struct CodeBuffer {
    buffer: String,
    indent_level: usize,
}

impl CodeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn add_line(&mut self, text: &str) {
        self.add_indented(text);
        self.add("\n");
    }

    pub fn add_indented(&mut self, text: &str) {
        for _ in 0..self.indent_level {
            self.buffer.push_str("  ");
        }
        self.buffer.push_str(text);
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn into_output(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation() {
        let mut buffer = CodeBuffer::new();
        buffer.add_line("{");
        buffer.indent();
        buffer.add_line("a: string;");
        buffer.dedent();
        buffer.dedent();
        buffer.add("}");

        assert_eq!(buffer.into_output(), "{\n  a: string;\n}");
    }
}
