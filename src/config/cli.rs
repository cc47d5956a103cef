use crate::config::ConfigOverrides;
use crate::core::view::OutputFormat;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "keyword-finder")]
#[command(about = "Related keywords, monthly search volume and difficulty for the French market")]
pub struct CliArgs {
    /// Seed keyword. Without one, an interactive prompt reads one query per line.
    pub query: Vec<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Model name, e.g. gemini-2.5-flash
    #[arg(long)]
    pub model: Option<String>,

    /// Provider base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Disable colored difficulty labels
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON on stderr
    #[arg(long)]
    pub log_json: bool,
}

impl CliArgs {
    /// The seed query, or `None` for interactive mode.
    pub fn joined_query(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            format: self.format,
            no_color: self.no_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_query_words_and_flags() {
        let args =
            CliArgs::try_parse_from(["keyword-finder", "-f", "json", "recette", "facile"]).unwrap();
        assert_eq!(args.joined_query().as_deref(), Some("recette facile"));
        assert_eq!(args.overrides().format, Some(OutputFormat::Json));
    }

    #[test]
    fn no_query_means_interactive() {
        let args = CliArgs::try_parse_from(["keyword-finder", "--verbose"]).unwrap();
        assert!(args.joined_query().is_none());
        assert!(args.verbose);
    }
}
