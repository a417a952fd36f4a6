use clap::{
    crate_authors, crate_description, crate_name, crate_version, App, AppSettings, Arg, ArgMatches,
    SubCommand,
};
use log::info;
use primst::{
    loader::{load, read_edge_list},
    mst::prim_from,
    types::VId,
    Err, SpanningTree,
};
use rayon::prelude::*;
use std::error::Error;

fn spanning_tree(path: &str, root: Option<VId>) -> Result<SpanningTree, Err> {
    let edge_list = read_edge_list(path)?;
    prim_from(&load(&edge_list)?, root, edge_list.num_vertices())
}

fn handle_mst(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let start_time = std::time::Instant::now();
    let root = match matches.value_of("root") {
        Some(root) => Some(root.parse::<VId>()?),
        None => None,
    };
    let inputs: Vec<&str> = matches.values_of("INPUT").unwrap().collect();
    let trees: Vec<_> = inputs
        .par_iter()
        .map(|&path| spanning_tree(path, root))
        .collect();
    for (path, tree) in inputs.iter().zip(trees) {
        let tree = tree?;
        if inputs.len() > 1 {
            println!("{}:", path);
        }
        if matches.is_present("tree") {
            for edge in tree.edges() {
                println!("{}", edge);
            }
        }
        println!("{}", tree);
    }
    info!("done in {:?}", start_time.elapsed());
    Ok(())
}

fn handle_display(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let edge_list = read_edge_list(matches.value_of("INPUT").unwrap())?;
    print!("{}", load(&edge_list)?);
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let matches = App::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("mst")
                .about("Computes the minimum spanning tree cost")
                .arg(
                    Arg::with_name("root")
                        .long("root")
                        .takes_value(true)
                        .value_name("ID")
                        .help("Vertex to grow the tree from [default: first vertex read]"),
                )
                .arg(
                    Arg::with_name("tree")
                        .long("tree")
                        .help("Prints the chosen edges"),
                )
                .arg(Arg::with_name("INPUT").required(true).multiple(true)),
        )
        .subcommand(
            SubCommand::with_name("display")
                .about("Prints the graph")
                .arg(Arg::with_name("INPUT").required(true)),
        )
        .get_matches();
    if let Some(matches) = matches.subcommand_matches("mst") {
        handle_mst(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("display") {
        handle_display(matches)?;
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
