//! The `surveykit init` command.

use std::path::Path;

use anyhow::Result;

use surveykit_core::demo::DEMO_FIXTURE_JSON;

fn create(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

pub fn execute() -> Result<()> {
    create(Path::new("surveykit.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("fixtures")?;
    create(Path::new("fixtures/demo.json"), DEMO_FIXTURE_JSON)?;

    std::fs::create_dir_all("responses")?;
    create(Path::new("responses/demo.toml"), SAMPLE_RESPONSES)?;

    println!("\nNext steps:");
    println!("  1. Run: surveykit validate --fixture fixtures/demo.json");
    println!("  2. Run: surveykit take --fixture fixtures/demo.json --responses responses/demo.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# surveykit configuration

fixture = "fixtures/demo.json"
output_dir = "./surveykit-results"
log_filter = "surveykit=info"
"#;

const SAMPLE_RESPONSES: &str = r#"[[responses]]
kind = "choice"
question = 1
option = 1

[[responses]]
kind = "text"
question = 2
text = "rome"

[[responses]]
kind = "choices"
question = 3
options = [1, 2]

[[responses]]
kind = "pairs"
question = 4
pairs = [[1, 2], [2, 1]]

[[responses]]
kind = "text"
question = 5
text = "The maps"
"#;
