pub mod migrate;

/// Summary lines a command hands back to the CLI layer once it is done.
/// Per-record progress prints as it happens; this only carries the
/// closing confirmation.
#[derive(Debug, Clone, Default)]
pub struct CommandReport {
    pub details: Vec<String>,
}

impl CommandReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn detail(&mut self, text: impl Into<String>) {
        self.details.push(text.into());
    }
}
