use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use elbow::routing::{BoundingBox, Orientation, Point};

use crate::config::OutputFormat;

#[derive(Parser)]
#[command(name = "elbow")]
#[command(author, version, about)]
#[command(long_about = "Orthogonal connector routing.\n\n\
    Route a connector between two node ports and re-derive it after edits.\n\
    Paths are written as comma-separated axis:length segments.\n\n\
    Examples:\n  \
    elbow build --source 40,10 --source-box 0,0,40,20 --source-side right \\\n      \
    --target 100,70 --target-box 100,60,40,20 --target-side left\n  \
    elbow drag --segments x:30,y:60,x:30 --index 1 --magnitude 15\n  \
    elbow batch diagram.yaml       Route every connection in a scene")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Output format (defaults to output.format from the config file)
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Route a fresh path between two ports
    Build {
        /// Source port position (X,Y)
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        source: Point,

        /// Source node bounds (X,Y,W,H)
        #[arg(long, value_parser = parse_box, allow_hyphen_values = true)]
        source_box: BoundingBox,

        /// Side of the source node the port sits on
        #[arg(long)]
        source_side: Orientation,

        /// Target port position (X,Y)
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        target: Point,

        /// Target node bounds (X,Y,W,H)
        #[arg(long, value_parser = parse_box, allow_hyphen_values = true)]
        target_box: BoundingBox,

        /// Side of the target node the port sits on
        #[arg(long)]
        target_side: Orientation,
    },

    /// Drag one segment of a path sideways
    Drag {
        /// Path to edit (e.g. x:30,y:60,x:30)
        #[arg(long, allow_hyphen_values = true)]
        segments: String,

        /// Zero-based index of the segment to drag
        #[arg(long)]
        index: usize,

        /// Distance to move the segment along its perpendicular axis
        #[arg(long, allow_negative_numbers = true)]
        magnitude: f64,
    },

    /// Re-route a path after one of its nodes moved
    Move {
        /// Which end of the path moved
        #[arg(long, value_enum)]
        end: End,

        /// Node displacement (DX,DY)
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        delta: Point,

        /// Path to edit
        #[arg(long, allow_hyphen_values = true)]
        segments: String,
    },

    /// Turn the port at one end of a path to face another side
    Rotate {
        /// Which end of the path to turn
        #[arg(long, value_enum)]
        end: End,

        /// New port orientation
        #[arg(long)]
        orientation: Orientation,

        /// Path to edit
        #[arg(long, allow_hyphen_values = true)]
        segments: String,
    },

    /// Print the polyline of a path
    Points {
        /// Source port position (X,Y)
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        source: Point,

        /// Path to walk
        #[arg(long, allow_hyphen_values = true)]
        segments: String,

        /// Push both ends out by this distance (for drawing under port markers)
        #[arg(long)]
        extend: Option<f64>,
    },

    /// Check that a path ends at the target port
    Check {
        /// Source port position (X,Y)
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        source: Point,

        /// Target port position (X,Y)
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        target: Point,

        /// Path to check
        #[arg(long, allow_hyphen_values = true)]
        segments: String,
    },

    /// Route every connection of a YAML or JSON scene file
    Batch {
        /// Scene file (.yaml, .yml or .json)
        file: PathBuf,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. routing.stump_length, output.format)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum End {
    Source,
    Target,
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let format = self.format;
        match self.command {
            Some(Commands::Build {
                source,
                source_box,
                source_side,
                target,
                target_box,
                target_side,
            }) => crate::commands::build::run(
                (source, source_box, source_side),
                (target, target_box, target_side),
                format,
            ),
            Some(Commands::Drag {
                segments,
                index,
                magnitude,
            }) => crate::commands::edit::drag(&segments, index, magnitude, format),
            Some(Commands::Move {
                end,
                delta,
                segments,
            }) => crate::commands::edit::move_node(&segments, end, delta, format),
            Some(Commands::Rotate {
                end,
                orientation,
                segments,
            }) => crate::commands::edit::rotate(&segments, end, orientation, format),
            Some(Commands::Points {
                source,
                segments,
                extend,
            }) => crate::commands::points::run(source, &segments, extend, format),
            Some(Commands::Check {
                source,
                target,
                segments,
            }) => crate::commands::check::run(source, target, &segments, format),
            Some(Commands::Batch { file }) => {
                if !file.exists() {
                    anyhow::bail!("File not found: {}", file.display());
                }
                crate::commands::batch::run(&file)
            }
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                println!("elbow {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
            None => {
                use clap::CommandFactory;
                let mut cmd = Self::command();
                cmd.print_help()?;
                println!();
                Ok(())
            }
        }
    }
}

/// Parse `X,Y` into a point.
fn parse_point(s: &str) -> Result<Point, String> {
    match parse_numbers(s)?.as_slice() {
        &[x, y] => Ok(Point::new(x, y)),
        _ => Err(format!("Expected X,Y but got '{s}'")),
    }
}

/// Parse `X,Y,W,H` into a bounding box.
fn parse_box(s: &str) -> Result<BoundingBox, String> {
    match parse_numbers(s)?.as_slice() {
        &[x, y, width, height] if width >= 0.0 && height >= 0.0 => {
            Ok(BoundingBox::new(x, y, width, height))
        }
        &[_, _, _, _] => Err(format!("Box width and height must not be negative: '{s}'")),
        _ => Err(format!("Expected X,Y,W,H but got '{s}'")),
    }
}

fn parse_numbers(s: &str) -> Result<Vec<f64>, String> {
    s.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| format!("Invalid number '{}' in '{s}'", part.trim()))
        })
        .collect()
}
