//! Terminal rendering for markdown output
//!
//! Uses termimad for styled output, with a plain-text fallback for pipes,
//! tests and `--no-color`.

use termimad::{crossterm::style::Color, Alignment, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        for header in &mut skin.headers {
            header.align = Alignment::Left;
        }
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) {
        if self.rich_enabled {
            self.skin.print_text(markdown);
        } else {
            print!("{markdown}");
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_headers_left_aligned() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
        assert!(renderer
            .skin
            .headers
            .iter()
            .all(|header| header.align == Alignment::Left));
    }
}
