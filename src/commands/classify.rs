//! Classify command handler

use anyhow::Result;

use pitchpx::retrosheet::{battedball_code, event_code};
use pitchpx::Config;

/// Print the event code and batted-ball code for a label.
pub fn handle(config: &Config, label: &str, description: Option<&str>) -> Result<()> {
    let description = description.unwrap_or(config.sentinels.unknown_full.as_str());
    println!("{}", render(label, description));
    Ok(())
}

fn render(label: &str, description: &str) -> String {
    let code = event_code(label, description);
    let battedball = battedball_code(code, label, description)
        .map(|bb| bb.as_str())
        .unwrap_or("-");
    format!("event_cd: {}\nbattedball_cd: {}", code, battedball)
}
