use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "patternai")]
#[command(about = "Practice-question generator backed by a Gemini proxy")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the /generate proxy and serve the browser front-end
    Serve(ServeArgs),
    /// Terminal front-end talking to a running proxy
    Ask(AskArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    // Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    // Server-held credential; absence is reported per request
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(
        long,
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com"
    )]
    pub upstream_url: String,

    #[arg(short, long, env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub model: String,

    // Directory holding index.html, script.js and styles.css
    #[arg(long, default_value = "public")]
    pub public_dir: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct AskArgs {
    // Base URL of the proxy
    #[arg(short, long, env = "PATTERNAI_SERVER", default_value = "http://localhost:3000")]
    pub server: String,

    #[arg(short, long, value_enum, default_value_t = Difficulty::Medium)]
    pub difficulty: Difficulty,
}

/// Difficulty of the generated multiple-choice question.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(s)
    }
}
