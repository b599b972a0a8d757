use anyhow::Context;
use blockfield_author::{RandomSeeds, SeedSource, Session};
use blockfield_common::{BlockKind, Seed};
use blockfield_input::Action;
use blockfield_kernel::{World, WorldConfig};
use blockfield_render::{DebugTextRenderer, RenderView, Renderer};
use blockfield_tools::WorldInspector;
use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "blockfield-cli", about = "CLI tool for blockfield tile worlds")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and the block table
    Info,
    /// Generate a world and print it
    Generate {
        #[command(flatten)]
        world: WorldArgs,
        /// Emit the world as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Generate a world, clear everything but grass, report counts
    Clear {
        #[command(flatten)]
        world: WorldArgs,
    },
    /// Apply an action script (one action per line, `-` for stdin)
    Script {
        path: String,
        #[command(flatten)]
        world: WorldArgs,
        /// Print the final world
        #[arg(long)]
        show: bool,
    },
}

#[derive(Args)]
struct WorldArgs {
    /// World seed; drawn at random when omitted
    #[arg(short, long, allow_hyphen_values = true)]
    seed: Option<Seed>,
    /// Columns (overrides the config file)
    #[arg(long)]
    width: Option<usize>,
    /// Rows (overrides the config file)
    #[arg(long)]
    height: Option<usize>,
    /// JSON world config
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl WorldArgs {
    fn config(&self) -> anyhow::Result<WorldConfig> {
        let mut config = match &self.config {
            Some(path) => WorldConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => WorldConfig::default(),
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        config.validate()?;
        Ok(config)
    }

    fn build(&self) -> anyhow::Result<World> {
        let config = self.config()?;
        let seed = self.seed.unwrap_or_else(|| RandomSeeds.next_seed());
        Ok(World::generate(&config, seed))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("blockfield-cli v{}", env!("CARGO_PKG_VERSION"));
            let defaults = WorldConfig::default();
            println!("default world: {}x{}", defaults.width, defaults.height);
            for (slot, info) in BlockKind::table().iter().enumerate() {
                println!(
                    "  [{}] {:<6} {:<7} {}",
                    slot + 1,
                    info.kind,
                    info.name,
                    info.color
                );
            }
            println!("  [-] {:<6} (decorative)", BlockKind::Cloud);
        }
        Commands::Generate { world, json } => {
            let world = world.build()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&world)?);
            } else {
                print!("{}", DebugTextRenderer::new().render(&world, &RenderView::default()));
                println!("{}", WorldInspector::summary(&world));
            }
        }
        Commands::Clear { world } => {
            let mut world = world.build()?;
            let before = world.count_filled();
            world.clear_non_grass();
            println!(
                "seed={} blocks before={} after={}",
                world.seed(),
                before,
                world.count_filled()
            );
        }
        Commands::Script { path, world, show } => {
            let script = read_script(&path)?;
            let mut session = Session::with_world(world.build()?, RandomSeeds);

            for (lineno, line) in script.lines().enumerate() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                let action: Action = line
                    .parse()
                    .with_context(|| format!("{path}:{}: bad action", lineno + 1))?;
                if let Err(err) = session.apply(action) {
                    tracing::warn!(line = lineno + 1, %err, "action ignored");
                }
            }

            let world = session.into_world();
            if show {
                print!("{}", DebugTextRenderer::new().render(&world, &RenderView::default()));
            }
            println!("{}", WorldInspector::summary(&world));
        }
    }

    Ok(())
}

fn read_script(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading script from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading script {path}"))
    }
}
