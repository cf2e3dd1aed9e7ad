use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stylebook::config::StylebookConfig;
use stylebook::render::{self, SiteOptions};
use stylebook::{api, mcp, validate, Registry};

#[derive(Parser)]
#[command(name = "stylebook")]
#[command(about = "Elixir style guide: browse, render and serve the rules")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List categories with their rule counts
    Categories,
    /// List the rules of a category
    Rules {
        /// Category id, e.g. CodeStyle
        category: String,
    },
    /// Show a rule with its rationale and examples
    Show {
        /// Category id, e.g. CodeStyle
        category: String,
        /// Rule id, e.g. inline_block_usage
        rule: String,
    },
    /// Search rules by id, summary or rationale
    Search { query: String },
    /// Print the guide as a tree
    Index,
    /// Validate the guide content
    Check,
    /// Render the guide to disk
    Render {
        /// Output directory (HTML) or file (Markdown)
        #[arg(short, long)]
        out: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },
    /// Export the guide as JSON
    Export {
        /// Output file. Writes to stdout when omitted
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Start the preview server
    Serve {
        /// Port for the HTTP server
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Start MCP server via stdio
    Mcp,
    /// Print the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        save: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Markdown,
}

/// Initialize tracing with output to stderr (for MCP mode) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "stylebook=info,tower_http=debug".into()),
    );

    if use_stderr {
        // MCP mode: stdout is the protocol channel
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_stderr = matches!(cli.command, Some(Commands::Mcp));
    init_tracing(use_stderr);

    let config = StylebookConfig::load();
    let registry = Registry::builtin();

    match cli.command {
        Some(Commands::Categories) => {
            for category in registry.category_summaries() {
                println!(
                    "{:<20} {:>3} rules  {}",
                    category.id, category.rule_count, category.name
                );
            }
        }
        Some(Commands::Rules { category }) => {
            for rule in registry.list_rules(&category)? {
                println!("{:<32} {}", rule.id, registry.get_summary(rule));
            }
        }
        Some(Commands::Show { category, rule }) => {
            let rule = registry.get_rule(&category, &rule)?;
            println!("{}\n", rule.summary());
            println!("{}\n", rule.rationale);
            for example in &rule.examples {
                match &example.caption {
                    Some(caption) => println!("# {} ({})", example.label, caption),
                    None => println!("# {}", example.label),
                }
                println!("{}\n", example.code);
            }
        }
        Some(Commands::Search { query }) => {
            let results = registry.search(&query);
            if results.is_empty() {
                println!("No rules match '{}'", query);
            }
            for result in results {
                println!("{}/{}  {}", result.category, result.rule, result.summary);
            }
        }
        Some(Commands::Index) => {
            print!("{}", render::render_tree(registry.guide()));
        }
        Some(Commands::Check) => {
            let issues = validate::validate(registry.guide());
            if !issues.is_empty() {
                for issue in &issues {
                    eprintln!("{}", issue);
                }
                anyhow::bail!("{} content issue(s) found", issues.len());
            }
            println!(
                "{} v{}: {} rules OK",
                registry.title(),
                registry.version(),
                registry.guide().rule_count()
            );
        }
        Some(Commands::Render { out, format }) => {
            render_guide(&registry, &config, out, format)?;
        }
        Some(Commands::Export { out }) => {
            let json = serde_json::to_string_pretty(registry.guide())?;
            match out {
                Some(path) => {
                    fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!("Exported guide to {}", path.display());
                }
                None => println!("{}", json),
            }
        }
        Some(Commands::Serve { port }) => {
            serve(registry, &config, port.unwrap_or(config.port)).await?;
        }
        Some(Commands::Mcp) => {
            mcp::run_stdio_server(registry).await?;
        }
        Some(Commands::Config { save }) => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            if save {
                let path = config.save()?;
                tracing::info!("Saved config to {}", path.display());
            }
        }
        None => {
            // Default: start the preview server
            serve(registry, &config, config.port).await?;
        }
    }

    Ok(())
}

fn render_guide(
    registry: &Registry,
    config: &StylebookConfig,
    out: Option<PathBuf>,
    format: Format,
) -> anyhow::Result<()> {
    match format {
        Format::Html => {
            let out_dir = out.unwrap_or_else(|| config.out_dir.clone());
            let site = render::render_site(
                registry.guide(),
                &SiteOptions {
                    title: config.site_title.clone(),
                },
            )
            .context("Failed to render site")?;
            let written = site
                .write_to(&out_dir)
                .with_context(|| format!("Failed to write site to {}", out_dir.display()))?;
            tracing::info!("Wrote {} files to {}", written.len(), out_dir.display());
        }
        Format::Markdown => {
            let path = out.unwrap_or_else(|| config.out_dir.join("STYLE_GUIDE.md"));
            let markdown =
                render::render_markdown(registry.guide()).context("Failed to render markdown")?;
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, markdown)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
    }
    Ok(())
}

async fn serve(registry: Registry, config: &StylebookConfig, port: u16) -> anyhow::Result<()> {
    tracing::info!("Starting Stylebook preview server on port {}", port);

    let app = api::create_router(registry, config)?;

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("Stylebook preview listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}
