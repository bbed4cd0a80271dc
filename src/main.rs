//! CLI entry point for twig

use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Env;
use log::debug;
use twig::{TreeFormatter, build_tree};

#[derive(Parser, Debug)]
#[command(name = "twig")]
#[command(about = "Print a directory subtree as a tree diagram")]
#[command(version)]
struct Args {
    /// File or directory to display
    path: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    debug!("rendering {}", args.path.display());

    let tree = match build_tree(&args.path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("twig: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = TreeFormatter::new().print(&tree) {
        eprintln!("twig: {}", e);
        process::exit(1);
    }
}
