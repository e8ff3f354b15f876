use crossterm::style::Stylize;

/// Colors for console output. Disabled output passes text through untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Colors only when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        let no_color = std::env::var("NO_COLOR").is_ok();
        Self::new(!no_color && atty::is(atty::Stream::Stdout))
    }

    pub fn heading(&self, text: &str) -> String {
        if self.enabled {
            text.blue().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn code(&self, text: &str) -> String {
        if self.enabled {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn value(&self, text: &str) -> String {
        if self.enabled {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn success(&self, text: &str) -> String {
        self.value(text)
    }

    pub fn notice(&self, text: &str) -> String {
        self.code(text)
    }

    pub fn error(&self, text: &str) -> String {
        if self.enabled {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }
}
