use anyhow::Context;
use colored::Colorize;
use serde_json::json;

use folio_server::{api, AppState, PortfolioServer, ServerConfig};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    match cli.command {
        Command::Serve(args) => cmd_serve(config, args),
        Command::Check => cmd_check(&config, &cli.format),
        Command::Export(args) => cmd_export(&config, args),
        Command::Config => cmd_config(&config),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<ServerConfig> {
    match &cli.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(ServerConfig::default()),
    }
}

fn cmd_serve(mut config: ServerConfig, args: ServeArgs) -> anyhow::Result<()> {
    if let Some(bind) = args.bind {
        config.bind_addr = bind
            .parse()
            .with_context(|| format!("invalid bind address: {bind}"))?;
    }
    config.cors |= args.cors;

    let server = PortfolioServer::new(config)?;
    tracing::info!(
        bind = %server.config().bind_addr,
        cors = server.config().cors,
        "starting portfolio server"
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.serve())?;
    println!("{} Portfolio server stopped", "✓".green().bold());
    Ok(())
}

fn cmd_check(config: &ServerConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let state = AppState::from_config(config)?;
    let store = &state.store;

    match format {
        OutputFormat::Json => {
            let report = json!({
                "ok": true,
                "skills": store.skills().len(),
                "projects": store.projects().len(),
                "experiences": store.experiences().len(),
                "rules": state.validator.rule_count(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!("{} Content and configuration valid", "✓".green().bold());
            println!("  Skills: {}", store.skills().len().to_string().bold());
            println!("  Projects: {}", store.projects().len().to_string().bold());
            for project in store.projects() {
                println!("    {} {}", project.id.cyan(), project.title.dimmed());
            }
            println!("  Experiences: {}", store.experiences().len().to_string().bold());
            println!("  Contact rules: {}", state.validator.rule_count().to_string().bold());
        }
    }
    Ok(())
}

fn cmd_export(config: &ServerConfig, args: ExportArgs) -> anyhow::Result<()> {
    let state = AppState::from_config(config)?;
    let value = match args.section {
        Section::Portfolio => serde_json::to_value(api::portfolio(&state))?,
        Section::Skills => serde_json::to_value(state.store.skills())?,
        Section::Projects => serde_json::to_value(state.store.projects())?,
        Section::Experiences => serde_json::to_value(state.store.experiences())?,
    };
    let text = if args.compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    println!("{text}");
    Ok(())
}

fn cmd_config(config: &ServerConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}
