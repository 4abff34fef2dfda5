//! Patterns command implementation

use crate::cloaking::{CloakEngine, PatternInfo};
use crate::config::CloakConfig;
use clap::Args;
use std::collections::HashMap;

/// Arguments for the patterns command
#[derive(Args, Debug)]
pub struct PatternsArgs {
    /// Print pattern metadata as JSON
    #[arg(long)]
    pub json: bool,
}

impl PatternsArgs {
    /// Execute the patterns command
    pub async fn execute(&self, config: &CloakConfig) -> anyhow::Result<i32> {
        let engine = match CloakEngine::new(config.cloaking.clone()) {
            Ok(engine) => engine,
            Err(e) => {
                eprintln!("❌ Failed to load detection patterns");
                eprintln!("   Error: {e}");
                return Ok(2);
            }
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&engine.list_patterns())?);
            return Ok(0);
        }

        print!("{}", format_listing(&engine));
        Ok(0)
    }
}

/// Patterns grouped by category, in registration order within each group
fn format_listing(engine: &CloakEngine) -> String {
    let infos: HashMap<String, PatternInfo> = engine
        .list_patterns()
        .into_iter()
        .map(|info| (info.name.clone(), info))
        .collect();

    let mut output = String::new();
    output.push_str(&format!(
        "🔍 {} detection pattern(s)\n",
        engine.registry().len()
    ));

    for group in engine.registry().summary() {
        output.push('\n');
        output.push_str(&format!("📁 {} ({})\n", group.category, group.count));
        for name in &group.patterns {
            let Some(info) = infos.get(name) else {
                continue;
            };
            output.push_str(&format!(
                "  • {:22} [{}] priority {}\n",
                info.name, info.placeholder, info.priority
            ));
            if !info.description.is_empty() {
                output.push_str(&format!("      {}\n", info.description));
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloaking::{CloakingConfig, Pattern, PatternRegistry};

    #[test]
    fn test_listing_groups_by_category() {
        let engine = CloakEngine::new(CloakingConfig::default()).unwrap();
        let listing = format_listing(&engine);

        assert!(listing.contains("📁 Cloud Credentials"));
        assert!(listing.contains("aws-access-key"));
        assert!(listing.contains("[AWS_ACCESS_KEY]"));
    }

    #[test]
    fn test_listing_of_custom_registry() {
        let mut registry = PatternRegistry::new();
        registry
            .register(
                Pattern::from_fn("ticket", |_| Ok(Vec::new()))
                    .with_category("Internal")
                    .with_priority(4),
            )
            .unwrap();
        let listing = format_listing(&CloakEngine::with_registry(registry));

        assert!(listing.starts_with("🔍 1 detection pattern(s)"));
        assert!(listing.contains("📁 Internal (1)"));
        assert!(listing.contains("[TICKET] priority 4"));
    }
}
