use clap::Parser;

#[derive(Parser, Debug)]
#[command(version)]
pub struct ProgramArguments {
    #[arg(long, help = "rng seed (instance generation)")]
    pub seed: Option<i128>,

    #[arg(
        short,
        long,
        help = "instance file path",
        required_unless_present = "generate_vertices",
        conflicts_with = "generate_vertices"
    )]
    pub instance: Option<String>,

    #[arg(short, long, help = "report file path")]
    pub report: Option<String>,

    #[arg(
        long,
        help = "print the adjacency list of each graph",
        default_value = "false"
    )]
    pub print_graphs: bool,

    #[arg(
        long,
        help = "print per-graph summary lines to stdout",
        default_value = "false"
    )]
    pub print_summary_to_stdout: bool,

    #[command(flatten)]
    pub generate: GeneratorArguments,
}

#[derive(clap::Args, Debug)]
pub struct GeneratorArguments {
    #[arg(
        long,
        help = "generate random connected graphs with this many vertices instead of loading an instance"
    )]
    pub generate_vertices: Option<usize>,

    #[arg(
        long,
        help = "number of edges per generated graph (default: 2x the vertices)",
        requires = "generate_vertices"
    )]
    pub generate_edges: Option<usize>,

    #[arg(
        long,
        help = "number of graphs to generate",
        default_value = "1",
        requires = "generate_vertices"
    )]
    pub num_graphs: usize,

    #[arg(
        long,
        help = "write the generated instance to this path",
        requires = "generate_vertices"
    )]
    pub instance_out: Option<String>,
}
