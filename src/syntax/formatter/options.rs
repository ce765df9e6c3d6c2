//! Writer options

/// Layout options for emitted WebIDL text
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Number of spaces per indentation level (ignored when using tabs)
    pub tab_size: usize,
    /// Use spaces for indentation (false = use tabs)
    pub insert_spaces: bool,
    /// Put a blank line between top-level definitions
    pub blank_line_between_definitions: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            tab_size: 2,
            insert_spaces: true,
            blank_line_between_definitions: true,
        }
    }
}

impl FormatOptions {
    /// Generate indentation string for the given level
    pub fn indent(&self, level: usize) -> String {
        if self.insert_spaces {
            " ".repeat(self.tab_size * level)
        } else {
            "\t".repeat(level)
        }
    }

    pub fn with_tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size;
        self
    }

    pub fn with_tabs(mut self) -> Self {
        self.insert_spaces = false;
        self
    }
}
