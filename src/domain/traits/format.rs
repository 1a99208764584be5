use crate::domain::errors::Result;
use crate::domain::models::document::SettingsDocument;
use crate::domain::models::environment::EnvironmentSettings;

/// Port for reading settings files written by other toolchains.
pub trait SettingsParser: Send + Sync {
    /// Parse raw file content into a flattened document.
    fn parse(&self, content: &str) -> Result<SettingsDocument>;
}

/// Port for writing a settings record in a toolchain-specific format.
pub trait SettingsRenderer: Send + Sync {
    /// Render `settings` as file content.
    fn render(&self, settings: &EnvironmentSettings) -> Result<String>;

    /// File extension of rendered output (e.g. `"json"`).
    fn extension(&self) -> &'static str;
}
