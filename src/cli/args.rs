use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "career-coach")]
#[command(version)]
#[command(about = "AI career coach: analysis, interview prep and learning paths", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Bind address (overrides configuration)
        #[arg(long)]
        host: Option<String>,
        /// Bind port (overrides configuration)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Send a single prompt to the model
    Prompt {
        /// Prompt text
        text: String,
        /// Optional system prompt
        #[arg(short, long)]
        system: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        output_format: OutputFormat,
    },
    /// Analyze a career profile
    Analyze {
        /// Comma separated skills
        #[arg(long, value_delimiter = ',')]
        skills: Vec<String>,
        /// Years of experience
        #[arg(long, default_value_t = 0)]
        years: u32,
        /// Career goals
        #[arg(long)]
        goals: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        output_format: OutputFormat,
    },
    /// Generate interview questions
    Interview {
        /// Target role
        #[arg(long)]
        role: String,
        /// junior, mid or senior
        #[arg(long, default_value = "mid")]
        level: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        output_format: OutputFormat,
    },
    /// Build a learning path towards a role
    LearningPath {
        /// Comma separated current skills
        #[arg(long, value_delimiter = ',')]
        skills: Vec<String>,
        /// Role to work towards
        #[arg(long)]
        target_role: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        output_format: OutputFormat,
    },
    /// Show LLM configuration status
    Status,
    /// Initialize configuration
    Init,
    /// Show version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Text,
    /// JSON structured output
    Json,
    /// Markdown formatted output
    Markdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::parse_from([
            "career-coach",
            "analyze",
            "--skills",
            "Rust,SQL",
            "--years",
            "4",
            "--goals",
            "staff engineer",
        ]);
        match cli.command {
            Commands::Analyze { skills, years, goals, output_format } => {
                assert_eq!(skills, vec!["Rust", "SQL"]);
                assert_eq!(years, 4);
                assert_eq!(goals, "staff engineer");
                assert_eq!(output_format, OutputFormat::Text);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["career-coach", "status", "--verbose", "--config", "c.toml"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert!(matches!(cli.command, Commands::Status));
    }

    #[test]
    fn test_prompt_output_format() {
        let cli = Cli::parse_from(["career-coach", "prompt", "hi", "--output-format", "json"]);
        match cli.command {
            Commands::Prompt { text, system, output_format } => {
                assert_eq!(text, "hi");
                assert!(system.is_none());
                assert_eq!(output_format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
