use clap::{Parser, Subcommand};
use log::info;

use logictree::tree::{self, Operator, Tree};

use std::fs;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Combine a JSON-encoded tree into a single expression
    Combine {
        /// Path to the JSON tree file
        #[arg(short, long)]
        file: String,
    },
    /// Re-encode a JSON tree, pretty-printed (validates it on the way)
    Encode {
        /// Path to the JSON tree file
        #[arg(short, long)]
        file: String,
    },
    /// Run the worked grocery example
    Demo,
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    match command {
        Commands::Combine { file } => {
            let json = fs::read_to_string(&file)?;
            let root = tree::from_json(&json)?;
            println!("{}", root.combine()?);
        }
        Commands::Encode { file } => {
            let json = fs::read_to_string(&file)?;
            let root = tree::from_json(&json)?;
            println!("{}", tree::to_json_pretty(&root)?);
        }
        Commands::Demo => demo()?,
    }
    Ok(())
}

/// Build the tree for "milk between 4 and 6 while onions are between 1 and
/// 2, or toothpaste over 5" and show it off.
fn demo() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let milk = Tree::node(
        Operator::And,
        vec![Tree::leaf("ge .Milk 4"), Tree::leaf("le .Milk 6")],
    );
    let onions = Tree::node(
        Operator::And,
        vec![Tree::leaf("ge .Onions 1"), Tree::leaf("le .Onions 2")],
    );
    let root = Tree::node(
        Operator::Or,
        vec![
            Tree::node(Operator::And, vec![milk, onions]),
            Tree::leaf("gt .Toothpaste 5"),
        ],
    );

    println!("Tree expression: \"{}\"", root.combine()?);
    println!("Template source: \"{}\"", logictree::compile(&root)?.source());

    let json = tree::to_json_pretty(&root)?;
    println!("Tree in JSON:\n{}", json);

    let restored = tree::from_json(&json)?;
    info!("round-trip structural match: {}", restored == root);
    println!("Round-tripped expression: \"{}\"", restored.combine()?);

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(args.command) {
        eprintln!("Fatal error: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
