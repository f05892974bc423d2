use std::path::Path;

use lantern_fiction::content::lantern_crossroads;

pub fn run(output: Option<&Path>) -> Result<(), String> {
    let content = lantern_crossroads()
        .to_json()
        .map_err(|e| format!("JSON serialization error: {e}"))?;

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}
