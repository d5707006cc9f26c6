//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for fundcraft
#[derive(Parser, Debug)]
#[command(name = "fundcraft")]
#[command(author, version, about = "Generate fundraising emails and social captions with an LLM")]
#[command(long_about = r#"
Fundcraft composes a campaign prompt from a few templated fields, sends it to
a completion provider, and saves the returned copy to a file.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./fundcraft.toml      Project-level config
3. ~/.config/fundcraft/config.toml   Global config

The provider API key is read from OPENROUTER_API_KEY (or GEMINI_API_KEY for
--provider gemini), falling back to the configured secret file.

Example:
  fundcraft --event "Spring Gala" --date 2025-05-30 --tone upbeat
  fundcraft --social-only --social-count 8 --output out/captions.md
  fundcraft --dry-run --additional-context "Mention the silent auction."
"#)]
pub struct Cli {
    /// Name of the event or campaign [default: Community Gala]
    #[arg(long, value_name = "NAME")]
    pub event: Option<String>,

    /// Date of the event [default: TBD]
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Tone for the content (e.g. upbeat, formal, urgent) [default: upbeat]
    #[arg(long, value_name = "TONE")]
    pub tone: Option<String>,

    /// Additional context or requirements to include
    #[arg(long, value_name = "TEXT")]
    pub additional_context: Option<String>,

    /// Generate only fundraising emails
    #[arg(long)]
    pub emails_only: bool,

    /// Generate only social media captions
    #[arg(long)]
    pub social_only: bool,

    /// Number of fundraising emails to generate [default: 5]
    #[arg(long, value_name = "N")]
    pub email_count: Option<u32>,

    /// Number of social captions to generate [default: 4]
    #[arg(long, value_name = "N")]
    pub social_count: Option<u32>,

    /// Completion provider (openrouter or gemini) [default: openrouter]
    #[arg(long, value_name = "PROVIDER")]
    pub provider: Option<String>,

    /// Model to use for generation
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Temperature for generation (0.0-1.0) [default: 0.7]
    #[arg(long, value_name = "T")]
    pub temperature: Option<f32>,

    /// Timeout in seconds for the completion call [default: 60]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// List available models and exit
    #[arg(long)]
    pub list_models: bool,

    /// Output file path [default: out/campaign.md]
    #[arg(long, alias = "outfile", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Use a custom prompt instead of the built-in template
    #[arg(long, value_name = "PROMPT")]
    pub custom_prompt: Option<String>,

    /// Show the prompt without sending it to the API
    #[arg(long)]
    pub dry_run: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_outfile_alias() {
        let cli = Cli::parse_from(["fundcraft", "--outfile", "copy.md"]);
        assert_eq!(cli.output, Some(PathBuf::from("copy.md")));
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::parse_from([
            "fundcraft",
            "--event",
            "Spring Gala",
            "--emails-only",
            "--email-count",
            "2",
            "--dry-run",
            "-vv",
        ]);
        assert_eq!(cli.event.as_deref(), Some("Spring Gala"));
        assert!(cli.emails_only);
        assert_eq!(cli.email_count, Some(2));
        assert!(cli.dry_run);
        assert_eq!(cli.verbose, 2);
    }
}
