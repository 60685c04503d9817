use inksac::prelude::*;

/// Terminal coloring for the prompt line and loop output. Degrades to
/// plain text when the terminal reports no color support.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    enabled: bool,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            enabled: !matches!(support, ColorSupport::NoColor),
        }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.style(style).to_string()
    }

    /// Colors the command word as the user types: cyan for a registered
    /// command, red for anything else. The rest of the line is left as
    /// typed.
    pub fn highlight_line(&self, line: &str, command_known: bool) -> String {
        if !self.enabled {
            return line.to_string();
        }

        let trimmed = line.trim_start();
        let Some(first) = trimmed.split_whitespace().next() else {
            return line.to_string();
        };

        let color = if command_known { Color::Cyan } else { Color::Red };
        let style = Style::builder().foreground(color).bold().build();

        let leading = &line[..line.len() - trimmed.len()];
        let rest = &trimmed[first.len()..];
        format!("{}{}{}", leading, self.paint(first, style), rest)
    }

    pub fn highlight_error(&self, error: &str) -> String {
        let style = Style::builder().foreground(Color::Red).bold().build();
        self.paint(error, style)
    }

    pub fn highlight_success(&self, message: &str) -> String {
        let style = Style::builder().foreground(Color::Green).build();
        self.paint(message, style)
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        let style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();
        self.paint(hint, style)
    }
}
