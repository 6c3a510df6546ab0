//! Slot Grid CLI
//!
//! Usage:
//!   slot-grid [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --columns <N>     Override the grid column count
//!   -s, --sizes <FILE>    Extra size table (TOML) checked before the built-in one
//!   -m, --map             Print the occupancy map
//!   -l, --lint            Print layout warnings (overlaps, hidden items)
//!   --drop <ITEM>         List the cells where ITEM may be dropped
//!   -d, --debug           Log engine decisions to stderr
//!   -h, --help            Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use slot_grid::report::{occupancy_map, placement_table};
use slot_grid::{Inventory, SizeTable};

#[derive(Parser)]
#[command(name = "slot-grid")]
#[command(about = "Pack inventory slots into a fixed grid and check drop targets")]
struct Cli {
    /// Inventory file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Override the grid column count
    #[arg(short, long)]
    columns: Option<u32>,

    /// Extra size table (TOML) checked before the built-in one
    #[arg(short, long)]
    sizes: Option<PathBuf>,

    /// Print the occupancy map
    #[arg(short, long)]
    map: bool,

    /// Print layout warnings
    #[arg(short, long)]
    lint: bool,

    /// List the cells where this item may be dropped
    #[arg(long, value_name = "ITEM")]
    drop: Option<String>,

    /// Log engine decisions to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.debug);

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let mut inventory = match Inventory::from_str(&source) {
        Ok(inventory) => inventory,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(path) = &cli.sizes {
        match SizeTable::from_file(path) {
            Ok(table) => inventory = inventory.with_sizes(table),
            Err(e) => {
                eprintln!("Error loading size table '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    if let Some(columns) = cli.columns {
        inventory = match inventory.with_columns(columns) {
            Ok(inventory) => inventory,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };
    }

    let arrangement = inventory.arrange();

    print!("{}", placement_table(&arrangement.packed, &inventory.slots));

    if cli.map {
        println!();
        println!("{}", occupancy_map(&arrangement.packed, inventory.grid.columns));
    }

    if cli.lint {
        let warnings = arrangement.lint();
        if !warnings.is_empty() {
            println!();
        }
        for warning in &warnings {
            println!("warning: {}", warning);
        }
    }

    if let Some(item) = &cli.drop {
        let footprint = inventory.resolver().resolve(item);
        let targets = arrangement.view.drop_targets(footprint);
        println!();
        println!("{} ({}) may be dropped at:", item, footprint);
        for index in targets {
            if let Some(cell) = arrangement.view.cell(index) {
                println!(
                    "  index {:<4} slot {:<6} col {:<3} row {}",
                    index, cell.slot, cell.col, cell.row
                );
            }
        }
    }
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("slot_grid=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_intro() {
    println!(
        r#"Slot Grid - fixed-grid inventory placement

USAGE:
    slot-grid [OPTIONS] [FILE]
    cat inventory.toml | slot-grid

OPTIONS:
    -c, --columns <N>   Override the grid column count
    -s, --sizes <FILE>  Extra size table checked before the built-in one
    -m, --map           Print the occupancy map
    -l, --lint          Print layout warnings
    --drop <ITEM>       List the cells where ITEM may be dropped
    -d, --debug         Log engine decisions to stderr
    -h, --help          Print help

INVENTORY FORMAT:
    [grid]
    columns = 10

    [[slots]]
    slot = 1
    name = "weapon_pistol"

    [[slots]]
    slot = 2

    [items.medkit]
    width = 2
    height = 2"#
    );
}
