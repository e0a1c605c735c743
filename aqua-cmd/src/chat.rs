//! Line-oriented chat with the assistant.

use aqua_chat::client::GeminiClient;
use aqua_chat::config::{AssistantConfig, GREETING};
use aqua_chat::ChatSession;
use log::info;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Read one message per line from stdin and print each reply.
///
/// An empty line or EOF ends the session.
pub async fn run_chat(api_key: String, model: String) -> anyhow::Result<()> {
    let config = AssistantConfig {
        model,
        ..AssistantConfig::with_api_key(api_key)
    };
    // Fail before prompting when the key is blank.
    config.api_key()?;
    info!("Chatting with {} at {}", config.model, config.generate_url());

    let client = GeminiClient::new(config);
    let mut session = ChatSession::new();
    let mut stdout = io::stdout();
    let mut lines = BufReader::new(io::stdin()).lines();

    stdout.write_all(format!("{}\n> ", GREETING).as_bytes()).await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            break;
        }
        if let Some(reply) = session.send(&client, &line).await {
            stdout
                .write_all(format!("{}\n> ", reply.content).as_bytes())
                .await?;
            stdout.flush().await?;
        }
    }

    info!("Chat ended after {} messages", session.transcript().len());
    Ok(())
}
