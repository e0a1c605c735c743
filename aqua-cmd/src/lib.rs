//! Command implementations for the lake registry CLI.
//!
//! Provides subcommands for listing and searching the built-in lake
//! registry, locating the nearest lake, and chatting with the assistant.

use aqua_lakes::quality::WaterQuality;
use clap::Subcommand;

pub mod chat;
pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// List lakes as CSV (featured lakes when no query or quality is given)
    Lakes {
        /// Case-insensitive text matched against name and location
        #[arg(short, long, default_value = "")]
        query: String,

        /// Only lakes of this quality (fresh, normal, hazardous)
        #[arg(long)]
        quality: Option<WaterQuality>,
    },

    /// Find the lake closest to a coordinate
    Nearest {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },

    /// Show the detail card for one lake
    Show {
        /// Lake id, e.g. 3
        id: String,
    },

    /// Registry composition by quality
    Summary,

    /// Chat with AI Aqua (one message per line, empty line or EOF to quit)
    Chat {
        #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
        api_key: String,

        #[arg(long, env = "AQUA_MODEL", default_value = aqua_chat::config::DEFAULT_MODEL)]
        model: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Lakes { query, quality } => report::run_lakes(&query, quality),
        Command::Nearest { lat, lon } => report::run_nearest(lat, lon),
        Command::Show { id } => report::run_show(&id),
        Command::Summary => report::run_summary(),
        Command::Chat { api_key, model } => chat::run_chat(api_key, model).await,
    }
}
