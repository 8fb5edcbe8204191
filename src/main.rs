use anyhow::{Context, Result};
use std::io::Read;

use weatherme_skill::{InboundEvent, Skill};

/// Local event runner: reads one speechlet event JSON document from stdin
/// and writes the response envelope to stdout. The hosting runtime's own
/// delivery mechanism wires `Skill::handle` directly.
#[tokio::main]
async fn main() -> Result<()> {
    weatherme_core::init()?;

    let (config, _validation) = weatherme_core::Config::load_validated()?;

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read event from stdin")?;

    let event: InboundEvent =
        serde_json::from_str(&input).context("Failed to parse inbound event")?;

    let skill = Skill::from_config(&config)?;

    let envelope = match skill.handle(event).await {
        Ok(envelope) => envelope,
        Err(e) => {
            tracing::error!(error = %e, "turn aborted");
            anyhow::bail!("{}", e.user_message());
        }
    };

    println!("{}", serde_json::to_string(&envelope)?);

    Ok(())
}
