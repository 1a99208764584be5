use super::environment::EnvironmentSettings;

/// A named environment with its settings after applying inheritance.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    pub name: String,
    pub settings: EnvironmentSettings,
    /// Inheritance chain from the built-in root to `name`.
    pub layers: Vec<String>,
}
