use std::path::Path;

use brewenv::adapters::formats;
use brewenv::domain::errors::Result;

use super::env_helpers;
use crate::cli::output;

/// Execute the `brewenv export --format <fmt>` command.
///
/// Writes the rendered environment to `output`, or to stdout so build
/// pipelines can redirect it.
pub fn execute(env: Option<&str>, format: &str, output_path: Option<&str>) -> Result<()> {
    let renderer = formats::renderer_by_name(format)?;
    let (_, environment) = env_helpers::resolve(env)?;
    let content = renderer.render(&environment.settings)?;

    match output_path {
        Some(path) => {
            let path = Path::new(path);
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
                && !parent.exists()
            {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &content)?;
            output::success(&format!(
                "Exported {} as {} to {}",
                environment.name,
                renderer.extension(),
                path.display()
            ));
        }
        None => print!("{content}"),
    }

    Ok(())
}
