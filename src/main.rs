use clap::{Parser, Subcommand, ValueEnum};
use grid_dfs::{config::Config, grid::Style, Cell, Grid, Simulator};
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};
use tracing_subscriber::EnvFilter;

/// A small layout with two sealed-off cells, used for the animation demo.
#[cfg(feature = "render")]
const DEMO: &str = "
x x x 1 x 1
x x 1 x 1 1
x x x 1 x x
x x x x x x
";

#[derive(Parser)]
#[command(name = "grid-dfs")]
#[command(about = "Depth-first walk over a grid of walls and open cells", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Rows of the random grid
    #[arg(long, global = true)]
    rows: Option<usize>,

    /// Columns of the random grid
    #[arg(long, global = true)]
    cols: Option<usize>,

    /// Seed for layouts and starts
    #[arg(long, short, global = true)]
    seed: Option<u64>,

    /// Wait for enter between printed steps
    #[arg(long, short, global = true)]
    pause: bool,

    /// Color the printed glyphs
    #[arg(long, global = true)]
    color: bool,

    /// Pixel pattern of each cell in an animation
    #[arg(long, value_enum, global = true)]
    style: Option<StyleArg>,

    /// Duration of each animation frame, in milliseconds
    #[arg(long, global = true)]
    frame_millis: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk the walled example grids, then a random grid, printing every step
    Show,
    /// Render the demo layout's walk as a gif (requires the `render` feature)
    Gif {
        /// Output file; must end in `.gif`
        output: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum StyleArg {
    Fill,
    Grid,
    Cross,
}

impl From<StyleArg> for Style {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Fill => Style::Fill,
            StyleArg::Grid => Style::Grid,
            StyleArg::Cross => Style::Cross,
        }
    }
}

impl Cli {
    /// Command-line flags win over the configuration file.
    fn apply(&self, config: &mut Config) {
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.pause |= self.pause;
        config.color |= self.color;
        if let Some(style) = self.style {
            config.style = style.into();
        }
        if let Some(frame_millis) = self.frame_millis {
            config.frame_millis = frame_millis;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::load_or_default()?;
    cli.apply(&mut config);

    match cli.command {
        None | Some(Commands::Show) => show(&config),
        Some(Commands::Gif { output }) => gif(&config, output),
    }
}

fn simulator(grid: Grid, config: &Config) -> Simulator {
    match config.seed {
        Some(seed) => Simulator::seeded(grid, seed),
        None => Simulator::new(grid),
    }
}

/// Enclosed grids complete immediately; then walk a random grid.
fn show(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();

    for layout in [vec![vec![Cell::Wall]], vec![vec![Cell::Wall; 2]; 2]] {
        let rows = layout.len();
        let cols = layout[0].len();
        let mut enclosed = simulator(Grid::new(rows, cols, &layout)?, config);
        debug_assert!(enclosed.complete());
        let shown = enclosed.show_simulation(Some(2), stdout.lock())?;
        tracing::info!(rows, cols, shown, "enclosed grid");
    }

    let mut walk = match config.seed {
        Some(seed) => Simulator::random_seeded(config.rows, config.cols, seed)?,
        None => Simulator::new(Grid::random(
            config.rows,
            config.cols,
            &mut rand::thread_rng(),
        )?),
    };
    walk.random_start(None, None)?;

    let stdin = io::stdin();
    let mut line = String::new();
    for snapshot in walk.simulate(None)? {
        let mut out = stdout.lock();
        if config.color {
            writeln!(out, "{:#}", snapshot)?;
        } else {
            writeln!(out, "{}", snapshot)?;
        }
        out.flush()?;
        if config.pause {
            line.clear();
            stdin.lock().read_line(&mut line)?;
        }
    }
    tracing::info!(steps = walk.steps_taken(), "walk complete");
    Ok(())
}

#[cfg(feature = "render")]
fn gif(config: &Config, output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.unwrap_or_else(|| config.gif_output.clone());
    let grid = Grid::try_from(DEMO)?;
    let mut walk = simulator(grid, config);
    let frames = walk.gif(&output, None, config.frame_duration(), config.style)?;
    tracing::info!(frames, output = %output.display(), "animation written");
    Ok(())
}

#[cfg(not(feature = "render"))]
fn gif(_config: &Config, _output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    Err("rendering an animation requires the `render` feature".into())
}
