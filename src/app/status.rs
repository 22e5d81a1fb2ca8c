/// The single user-visible status line.
///
/// Every workflow outcome writes one message here. Overlapping
/// exchanges may finish in any order; whichever completion lands last
/// owns the line. Nothing is queued.
#[derive(Debug, Default)]
pub struct StatusLine {
    current: String,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current message.
    pub fn set(&mut self, message: impl Into<String>) {
        self.current = message.into();
    }

    pub fn message(&self) -> &str {
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let status = StatusLine::new();
        assert_eq!(status.message(), "");
    }

    #[test]
    fn test_last_write_wins() {
        let mut status = StatusLine::new();
        status.set("Saved letter A");
        status.set("Error: connection refused");
        status.set("Handwriting rendered successfully");
        assert_eq!(status.message(), "Handwriting rendered successfully");
    }
}
