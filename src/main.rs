//! graph-visualizer CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use graph_visualizer::renderers::style::{LineStyle, NodeShape};
use graph_visualizer::{GraphData, RenderConfig, Solution, SolutionRenderer};

/// Draw a graph with a path or node-set solution highlighted.
#[derive(Parser, Debug)]
#[command(
    name = "graph-visualizer",
    version = env!("GRAPH_VISUALIZER_VERSION"),
    about = "Draw a graph with a path or node-set solution highlighted"
)]
struct Cli {
    /// Graph JSON file: {"nodes": [...], "edges": [[a, b], ...]}
    graph: String,

    /// Solution JSON file holding an array of node ids (reads stdin if not provided)
    solution: Option<String>,

    /// JSON config file; flags below override its values
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Fill solution nodes red
    #[arg(long)]
    highlight_nodes: bool,

    /// Stroke solution edges red
    #[arg(long)]
    highlight_edges: bool,

    /// Node marker area in points squared
    #[arg(long)]
    node_size: Option<u32>,

    /// Node marker symbol (o s ^ v < > D d p h 8 *)
    #[arg(long)]
    node_shape: Option<NodeShape>,

    /// Edge width in points
    #[arg(long)]
    edge_width: Option<f64>,

    /// Edge line style (solid, dashed, dotted, dashdot)
    #[arg(long)]
    edge_style: Option<LineStyle>,

    /// Label font size in points
    #[arg(long)]
    font_size: Option<u32>,

    /// How to read the solution: "path" or "set"
    #[arg(short = 't', long)]
    solution_type: Option<String>,

    /// Save the figure to this SVG file
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Do not open the figure in a viewer
    #[arg(long)]
    no_show: bool,

    /// Seed the layout for reproducible positions
    #[arg(long)]
    seed: Option<u64>,

    /// Print the SVG to stdout instead of saving or showing it
    #[arg(long)]
    stdout: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn apply(&self, config: &mut RenderConfig) {
        config.highlight_nodes |= self.highlight_nodes;
        config.highlight_edges |= self.highlight_edges;
        if let Some(v) = self.node_size {
            config.node_size = v;
        }
        if let Some(v) = self.node_shape {
            config.node_shape = v;
        }
        if let Some(v) = self.edge_width {
            config.edge_width = v;
        }
        if let Some(v) = self.edge_style {
            config.edge_style = v;
        }
        if let Some(v) = self.font_size {
            config.font_size = v;
        }
        if let Some(ref v) = self.solution_type {
            config.solution_type = v.clone();
        }
        if let Some(ref v) = self.output {
            config.save_path = v.clone();
        }
        if self.no_show {
            config.show_plot = false;
        }
        if self.seed.is_some() {
            config.layout_seed = self.seed;
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_file(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot read '{}': {}", path, e);
            process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match cli.config {
        Some(ref path) => match RenderConfig::from_json(&read_file(path)) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("error: invalid config '{}': {}", path, e);
                process::exit(1);
            }
        },
        None => RenderConfig::default(),
    };
    cli.apply(&mut config);

    let graph = match GraphData::from_json(&read_file(&cli.graph)) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("error: invalid graph '{}': {}", cli.graph, e);
            process::exit(1);
        }
    };

    // Read the solution from file or stdin
    let solution_text = if let Some(ref path) = cli.solution {
        read_file(path)
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };
    let solution = match Solution::from_json(&solution_text) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: invalid solution: {}", e);
            process::exit(1);
        }
    };

    let mut renderer = SolutionRenderer::new(config);
    renderer.load(graph);

    if cli.stdout {
        let svg = match renderer.render_figure(&solution) {
            Ok(figure) => figure.to_svg(),
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        };
        println!("{}", svg);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
        return;
    }

    if let Err(e) = renderer.render(solution) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
