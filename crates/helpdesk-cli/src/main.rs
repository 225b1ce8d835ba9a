mod config;

use clap::{Parser, Subcommand};
use config::{HelpdeskConfig, LoggingConfig};
use helpdesk_core::ToolCall;
use helpdesk_orchestrator::{
    default_profiles, it_support_agent, AgentTool, Conversation, Orchestrator, TurnEvent,
};
use helpdesk_skills::SkillRegistry;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "helpdesk", about = "Helpdesk — multi-agent IT support triage")]
struct Cli {
    /// Path to config file (defaults to ./helpdesk.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List agents, their callables and handoff edges
    Agents {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// List registered tools
    Tools,
    /// Invoke a single tool or handoff directly
    Call {
        /// Tool name, e.g. check_ticket_status
        tool: String,
        /// JSON object of arguments
        #[arg(long, default_value = "{}")]
        args: String,
    },
    /// Run one request through a fresh conversation
    Ask {
        #[arg(required = true, trailing_var_arg = true)]
        message: Vec<String>,
    },
    /// Interactive conversation on stdin (/reset, /quit)
    Chat,
}

fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn builtin_registry() -> Arc<SkillRegistry> {
    let mut registry = SkillRegistry::new();
    helpdesk_builtins::register_builtins(&mut registry);
    info!(count = registry.skill_count(), "Built-in tools registered");
    Arc::new(registry)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = HelpdeskConfig::load(cli.config.as_deref()).await?;
    init_logging(&config.logging);

    let skills = builtin_registry();

    match cli.command {
        Commands::Agents { json } => print_agents(json)?,
        Commands::Tools => print_tools(&skills),
        Commands::Call { tool, args } => call_tool(&skills, tool, &args).await?,
        Commands::Ask { message } => {
            let engine = Orchestrator::with_rules(skills, config.runtime.max_turns)?;
            let mut conversation = Conversation::new();
            let outcome = engine.run(&mut conversation, &message.join(" ")).await?;
            print_events(&outcome.events);
            println!("{}", outcome.reply);
        }
        Commands::Chat => {
            let engine = Orchestrator::with_rules(skills, config.runtime.max_turns)?;
            chat(&engine).await?;
        }
    }

    Ok(())
}

fn print_agents(json: bool) -> anyhow::Result<()> {
    let profiles = default_profiles();
    if json {
        println!("{}", serde_json::to_string_pretty(&profiles)?);
        return Ok(());
    }

    for agent in &profiles {
        println!("{} ({})", agent.name, agent.role);
        if let Some(first) = agent.instructions.lines().next() {
            println!("  {first}");
        }
        for tool in &agent.tools {
            match tool {
                AgentTool::Skill { name } => println!("    tool     {name}"),
                AgentTool::Handoff(handoff) => println!(
                    "    handoff  {} -> {}",
                    handoff.name,
                    handoff.invoke().name
                ),
            }
        }
    }
    Ok(())
}

fn print_tools(skills: &SkillRegistry) {
    println!("Registered tools:");
    for desc in skills.list_descriptors() {
        let params: Vec<String> = desc
            .parameters()
            .into_iter()
            .map(|(name, ty)| format!("{name}: {ty}"))
            .collect();
        println!("  {}({}) — {}", desc.name, params.join(", "), desc.description);
    }
    println!("\nTotal: {} tool(s)", skills.skill_count());
}

async fn call_tool(skills: &SkillRegistry, tool: String, args: &str) -> anyhow::Result<()> {
    if let Some(handoff) = it_support_agent().find_handoff(&tool) {
        println!("-> {}", handoff.invoke().name);
        return Ok(());
    }

    let arguments: serde_json::Value = serde_json::from_str(args)?;
    if !arguments.is_object() {
        anyhow::bail!("--args must be a JSON object, got: {args}");
    }

    let result = skills.execute(ToolCall::new(tool, arguments)).await?;
    if result.is_error {
        eprintln!("{}", result.content);
    } else {
        println!("{}", result.content);
    }
    Ok(())
}

fn print_events(events: &[TurnEvent]) {
    for event in events {
        if let TurnEvent::Handoff { to, .. } = event {
            println!("(transferred to {})", helpdesk_orchestrator::profile(*to).name);
        }
    }
}

async fn chat(engine: &Orchestrator) -> anyhow::Result<()> {
    let mut conversation = Conversation::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Connected to {}. Type /reset to start over, /quit to leave.", it_support_agent().name);
    loop {
        print!("you> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        match input {
            "" => continue,
            "/quit" | "/exit" => break,
            "/reset" => {
                conversation.reset();
                println!("(back with {})", it_support_agent().name);
                continue;
            }
            _ => {}
        }

        match engine.run(&mut conversation, input).await {
            Ok(outcome) => {
                print_events(&outcome.events);
                let agent = helpdesk_orchestrator::profile(outcome.agent);
                println!("{}> {}", agent.name, outcome.reply);
            }
            Err(e) => eprintln!("error: {e}"),
        }
    }

    Ok(())
}
