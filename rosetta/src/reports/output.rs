//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render an indented key-value pair.
    fn key_value_indented(&mut self, key: &str, value: &str);

    /// Render an added item (e.g., new file).
    fn added_item(&mut self, text: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render a line of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Emit text exactly as given, without a trailing newline.
    fn raw(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        println!("  {}: {}", key, value);
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn raw(&mut self, text: &str) {
        print!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Output collecting everything into a string, warnings prefixed.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub buffer: String,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn section(&mut self, name: &str) {
        self.buffer.push_str(&format!("{}:\n", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.buffer.push_str(&format!("{}: {}\n", key, value));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.buffer.push_str(&format!("  {}: {}\n", key, value));
    }

    fn added_item(&mut self, text: &str) {
        self.buffer.push_str(&format!("  + {}\n", text));
    }

    fn warning(&mut self, msg: &str) {
        self.buffer.push_str(&format!("warning: {}\n", msg));
    }

    fn preformatted(&mut self, text: &str) {
        self.buffer.push_str(&format!("{}\n", text));
    }

    fn raw(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn newline(&mut self) {
        self.buffer.push('\n');
    }
}
