use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{App, Arg};
use log::info;
use simplelog::{LevelFilter, SimpleLogger, TermLogger};
use spanpath_core::matrix;
use spanpath_core::shortest_path::ShortestPathFinder;
use spanpath_core::spanning::SpanningTreeBuilder;

fn run(input: &Path, seed: Option<u64>) -> Result<()> {
    let graph = matrix::read_matrix(input)
        .with_context(|| format!("could not load adjacency matrix from {}", input.display()))?;
    info!("loaded graph with {} nodes", graph.node_count());

    for endpoint in [ShortestPathFinder::SOURCE, ShortestPathFinder::TARGET] {
        if !graph.contains_node(endpoint) {
            bail!(
                "shortest path endpoint '{}' is missing from the graph",
                endpoint
            );
        }
    }

    let mut builder = match seed {
        Some(seed) => SpanningTreeBuilder::with_seed(seed),
        None => SpanningTreeBuilder::new(),
    };
    let tree = builder.build(&graph);
    let path = ShortestPathFinder::find(&graph);

    println!("Minimum Spanning Tree");
    println!("---------------------");
    match tree {
        Some(tree) => {
            print!("{}", tree.render_adjacency_matrix());
            println!("Cost: {}", tree.cost());
        }
        None => println!("No spanning tree exists for this graph."),
    }
    println!();

    println!("Shortest Path");
    println!("-------------");
    match path {
        Some(path) => {
            let labels: Vec<String> = path.keys().map(|label| label.to_string()).collect();
            let cost: i64 = path.values().sum();
            println!("{}", labels.join("->"));
            println!("Cost: {}", cost);
        }
        None => println!(
            "No path exists between '{}' and '{}'.",
            ShortestPathFinder::SOURCE,
            ShortestPathFinder::TARGET
        ),
    }
    Ok(())
}

fn main() {
    let matches = App::new("spanpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Computes the minimum spanning tree and the shortest path between the nodes 'a' and 'f' of an adjacency-matrix graph.")
        .arg(
            Arg::with_name("debug")
                .short("d")
                .long("debug")
                .help("Enables debug output")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .help("Seed for the spanning tree starting node selection")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("INPUT")
                .help("adjacency-matrix text file")
                .required(true)
                .index(1),
        )
        .get_matches();

    let log_filter = if matches.is_present("debug") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_config = simplelog::Config::default();
    if let Err(e) = TermLogger::init(
        log_filter,
        log_config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!(
            "Error, can't initialize the terminal log output: {}.\nWill degrade to a more simple logger",
            e
        );
        if let Err(e_simple) = SimpleLogger::init(log_filter, log_config) {
            eprintln!("Simple logging failed too: {}", e_simple);
        }
    }

    let seed = match matches.value_of("seed") {
        Some(raw) => match raw.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(e) => {
                eprintln!("Invalid --seed value '{}': {}", raw, e);
                std::process::exit(2);
            }
        },
        None => None,
    };
    let input = PathBuf::from(matches.value_of("INPUT").unwrap_or_default());

    if let Err(e) = run(&input, seed) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
