//! Hypernet - circuit topology hypergraph builder
//!
//! Builds the example assemblies, validates them and writes each one's
//! hypergraph next to an optional Graphviz view.
//!
//! # Usage
//!
//! ```bash
//! hypernet --component nor --component rs-nor-latch --output-dir out --dot
//! dot -Tpng out/Nor.dot -o nor.png
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use hypernet_core::{
    circuit::validate_assembly,
    components::ExampleCircuit,
    error::{HypernetError, Result},
    hypergraph::{view, HypergraphStore},
    AssemblyOptions, LabelMembership, HYPERGRAPH_EXTENSION,
};
use tracing_subscriber::EnvFilter;

/// Circuit topology hypergraph builder
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Example circuit to build (repeatable; default: all)
    #[arg(short, long = "component", value_name = "NAME")]
    components: Vec<ExampleCircuit>,

    /// Directory the hypergraph files are written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Nodes enumerated by each component's label
    #[arg(short, long, value_enum, default_value = "recursive")]
    membership: Membership,

    /// Also write a Graphviz view of each hypergraph
    #[arg(long)]
    dot: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Membership {
    /// Own nodes plus every descendant's
    Recursive,
    /// Own nodes only
    Direct,
}

impl From<Membership> for LabelMembership {
    fn from(m: Membership) -> Self {
        match m {
            Membership::Recursive => LabelMembership::Recursive,
            Membership::Direct => LabelMembership::Direct,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn write_circuit(circuit: ExampleCircuit, options: &AssemblyOptions, dir: &Path, dot: bool) -> Result<()> {
    let assembly = circuit.build(options.clone())?;
    validate_assembly(&assembly)?;

    let store = assembly.into_store();
    let path = dir.join(format!("{}.{}", circuit.type_name(), HYPERGRAPH_EXTENSION));
    store.write(&path)?;

    if dot {
        let dot_path = dir.join(format!("{}.dot", circuit.type_name()));
        fs::write(&dot_path, view::to_dot(&store)).map_err(|e| HypernetError::file_write(&dot_path, e))?;
    }

    tracing::info!(circuit = %circuit, path = %path.display(), "wrote hypergraph");
    println!(
        "{}: {} nodes, {} traces, {} labels -> {}",
        circuit,
        store.num_nodes(),
        store.traces().count(),
        store.labels().count(),
        path.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let circuits = if args.components.is_empty() {
        ExampleCircuit::ALL.to_vec()
    } else {
        args.components.clone()
    };

    let options = AssemblyOptions {
        label_membership: args.membership.into(),
    };

    fs::create_dir_all(&args.output_dir).map_err(|e| HypernetError::file_write(&args.output_dir, e))?;

    for circuit in circuits {
        write_circuit(circuit, &options, &args.output_dir, args.dot)?;
    }

    Ok(())
}
