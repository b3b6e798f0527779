use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use mazebot_lib::{prepare_graph, replay, solve_maze, verify_solution, Grid, MazeDocument, Path};

use mazebot_cli::output::{
    render_graph, render_solution, render_verification, GraphReport, OutputFormat,
    VerificationReport,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Mazebot maze solving utilities")]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct MazeArgs {
    /// Maze file to read; omit or pass `-` to read stdin.
    #[arg(long)]
    maze: Option<PathBuf>,

    /// Treat the input as a plain text grid instead of a JSON maze document.
    #[arg(long)]
    text: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a maze and print the shortest direction sequence.
    Solve {
        #[command(flatten)]
        maze: MazeArgs,
    },
    /// Replay a direction sequence against a maze.
    Verify {
        #[command(flatten)]
        maze: MazeArgs,
        /// Moves to replay, e.g. `EESSW`.
        #[arg(long)]
        directions: String,
    },
    /// Report the reduced graph of a maze.
    Graph {
        #[command(flatten)]
        maze: MazeArgs,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Solve { maze } => handle_solve(&maze, cli.format),
        Command::Verify { maze, directions } => handle_verify(&maze, &directions, cli.format),
        Command::Graph { maze } => handle_graph(&maze, cli.format),
    }
}

fn handle_solve(args: &MazeArgs, format: OutputFormat) -> Result<()> {
    let grid = load_grid(args)?;
    let solution = solve_maze(&grid).context("failed to solve maze")?;
    println!("{}", render_solution(&solution, format)?);
    Ok(())
}

fn handle_verify(args: &MazeArgs, directions: &str, format: OutputFormat) -> Result<()> {
    let grid = load_grid(args)?;
    let path: Path = directions
        .trim()
        .parse()
        .context("failed to parse directions")?;
    verify_solution(&grid, &path).context("directions do not solve the maze")?;
    let end = replay(&grid, &path)?;

    let report = VerificationReport {
        valid: true,
        moves: path.len(),
        end,
    };
    println!("{}", render_verification(&report, format)?);
    Ok(())
}

fn handle_graph(args: &MazeArgs, format: OutputFormat) -> Result<()> {
    let grid = load_grid(args)?;
    let prepared = prepare_graph(&grid).context("failed to build maze graph")?;
    let report = GraphReport::from_prepared(&prepared);
    println!("{}", render_graph(&report, format)?);
    Ok(())
}

fn load_grid(args: &MazeArgs) -> Result<Grid> {
    let (source, contents) = match args.maze.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read maze from {}", path.display()))?;
            (path.display().to_string(), contents)
        }
        _ => {
            let mut contents = String::new();
            io::stdin()
                .read_to_string(&mut contents)
                .context("failed to read maze from stdin")?;
            ("<stdin>".to_string(), contents)
        }
    };
    debug!(source = %source, bytes = contents.len(), text = args.text, "loaded maze input");

    let grid = if args.text {
        Grid::parse(&contents)
    } else {
        MazeDocument::from_json(&contents).and_then(|document| document.to_grid())
    };
    grid.with_context(|| format!("invalid maze in {source}"))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
