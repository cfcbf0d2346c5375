use anyhow::Result;
use colored::Colorize;
use serde_json::{json, Map, Value};

use crate::{
    app::{init_config, load_config, AppState, Config},
    gateway::{CompletionResult, InterviewLevel, LlmGateway},
    server,
};

use super::{Cli, Commands, OutputFormat};

/// Handle CLI subcommands. Returns `false` when the model call failed.
pub async fn handle_command(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Init => {
            println!("Initializing career-coach configuration...");
            let path = init_config()?;
            println!("Configuration written to {}", path.display().to_string().green());
            Ok(true)
        }
        Commands::Version => {
            show_version();
            Ok(true)
        }
        Commands::Status => {
            let config = load_config(cli.config.as_deref())?;
            show_status(&config);
            Ok(true)
        }
        Commands::Serve { host, port } => {
            let config = load_config(cli.config.as_deref())?;
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            server::serve(AppState::from_config(&config), &host, port).await?;
            Ok(true)
        }
        Commands::Prompt { text, system, output_format } => {
            let gateway = gateway(cli.config.as_deref())?;
            let result = gateway.generate(&text, system.as_deref()).await?;
            Ok(emit("Response", Vec::new(), &result, output_format))
        }
        Commands::Analyze { skills, years, goals, output_format } => {
            let gateway = gateway(cli.config.as_deref())?;
            let analysis = gateway.analyze_career_profile(&skills, years, &goals).await?;
            let fields = vec![
                ("skills", json!(analysis.skills)),
                ("experience_years", json!(analysis.experience_years)),
                ("goals", json!(analysis.goals)),
            ];
            Ok(emit("Career Analysis", fields, &analysis.result, output_format))
        }
        Commands::Interview { role, level, output_format } => {
            let level: InterviewLevel = level.parse()?;
            let gateway = gateway(cli.config.as_deref())?;
            let questions = gateway.generate_interview_questions(&role, level).await?;
            let fields = vec![
                ("role", json!(questions.role)),
                ("level", json!(questions.level)),
            ];
            Ok(emit("Interview Questions", fields, &questions.result, output_format))
        }
        Commands::LearningPath { skills, target_role, output_format } => {
            let gateway = gateway(cli.config.as_deref())?;
            let path = gateway.create_learning_path(&skills, &target_role).await?;
            let fields = vec![
                ("current_skills", json!(path.current_skills)),
                ("target_role", json!(path.target_role)),
            ];
            Ok(emit("Learning Path", fields, &path.result, output_format))
        }
    }
}

fn gateway(config_path: Option<&std::path::Path>) -> Result<LlmGateway> {
    let config = load_config(config_path)?;
    Ok(LlmGateway::from_settings(&config.llm))
}

fn emit(
    title: &str,
    fields: Vec<(&str, Value)>,
    result: &CompletionResult,
    format: OutputFormat,
) -> bool {
    println!("{}", format_result(title, &fields, result, format));
    result.is_success()
}

/// Render a completion for the terminal
pub fn format_result(
    title: &str,
    fields: &[(&str, Value)],
    result: &CompletionResult,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Json => {
            let mut object = Map::new();
            for (key, value) in fields {
                object.insert((*key).to_string(), value.clone());
            }
            object.insert("success".to_string(), json!(result.is_success()));
            match result {
                CompletionResult::Success { text, usage } => {
                    object.insert("response".to_string(), json!(text));
                    object.insert(
                        "tokens".to_string(),
                        json!({
                            "prompt": usage.prompt_tokens,
                            "completion": usage.completion_tokens,
                            "total": usage.total_tokens,
                        }),
                    );
                }
                CompletionResult::Failure { message } => {
                    object.insert("error".to_string(), json!(message));
                }
            }
            serde_json::to_string_pretty(&Value::Object(object)).unwrap_or_else(|e| {
                format!("{{\"error\": \"Failed to serialize result: {}\"}}", e)
            })
        }
        OutputFormat::Text => match result {
            CompletionResult::Success { text, usage } => {
                format!("{}\n\n--- Tokens used: {} ---", text, usage.total_tokens)
            }
            CompletionResult::Failure { message } => format!("Error: {}", message),
        },
        OutputFormat::Markdown => {
            let mut output = format!("## {}\n\n", title);

            for (key, value) in fields {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    Value::Array(items) => items
                        .iter()
                        .map(|v| v.as_str().map(String::from).unwrap_or_else(|| v.to_string()))
                        .collect::<Vec<_>>()
                        .join(", "),
                    other => other.to_string(),
                };
                output.push_str(&format!("- **{}**: {}\n", key, rendered));
            }
            if !fields.is_empty() {
                output.push('\n');
            }

            match result {
                CompletionResult::Success { text, usage } => {
                    output.push_str(text);
                    output.push_str(&format!(
                        "\n\n_Tokens: {} prompt, {} completion, {} total_\n",
                        usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
                    ));
                }
                CompletionResult::Failure { message } => {
                    output.push_str("## Errors\n\n");
                    output.push_str(&format!("- {}\n", message));
                }
            }

            output
        }
    }
}

/// Show version information
pub fn show_version() {
    println!("career-coach v{}", env!("CARGO_PKG_VERSION"));
    println!("   AI career coach backed by an OpenAI-compatible model");
}

fn show_status(config: &Config) {
    println!("Career Coach Status:");
    println!();

    if config.llm.api_key.is_some() {
        println!("  {} LLM: API key configured", "[OK]".green());
    } else {
        println!("  {} LLM: OPENAI_API_KEY not set", "[WARNING]".yellow());
    }
    println!("      • Model: {}", config.llm.model);
    println!("      • Temperature: {}", config.llm.temperature);
    println!("      • Max tokens: {}", config.llm.max_tokens);
    println!("      • Endpoint: {}", config.llm.base_url);

    println!(
        "  {} Server: {}:{} ({})",
        "[OK]".green(),
        config.server.host,
        config.server.port,
        config.server.environment
    );
    println!();
}
