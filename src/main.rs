use std::process;

use clap::{App, Arg};

use shoe_puzzle_solver::config::Limits;
use shoe_puzzle_solver::state::PuzzleState;
use shoe_puzzle_solver::Solve;

fn main() {
    env_logger::init();

    let matches = App::new("shoe-puzzle-solver")
        .about("Finds a move-optimal solution of the block-and-shoes puzzle")
        .arg(
            Arg::with_name("state")
                .long("--state")
                .takes_value(true)
                .help("Initial state as [(r,c),(r,c),(r,c),(r,c)] listing block, red, blue and black shoe"),
        )
        .arg(
            Arg::with_name("status")
                .short("-s")
                .long("--status")
                .help("Print progress while searching"),
        )
        .arg(
            Arg::with_name("stats")
                .long("--stats")
                .help("Print statistics when the search finishes"),
        )
        .arg(
            Arg::with_name("max-nodes")
                .long("--max-nodes")
                .takes_value(true)
                .help("Give up after creating this many search nodes"),
        )
        .get_matches();

    let initial = match matches.value_of("state") {
        None => PuzzleState::INITIAL,
        Some(state) => state.parse().unwrap_or_else(|err| {
            println!("Failed to parse state: {}", err);
            process::exit(1);
        }),
    };

    let mut limits = Limits::unlimited();
    if let Some(max_nodes) = matches.value_of("max-nodes") {
        limits.max_nodes = Some(max_nodes.parse().unwrap_or_else(|err| {
            println!("Failed to parse max-nodes: {}", err);
            process::exit(1);
        }));
    }

    println!("Solving...");
    let solver_ok = initial
        .solve(limits, matches.is_present("status"))
        .unwrap_or_else(|err| {
            println!("{}", err);
            process::exit(1);
        });

    if matches.is_present("stats") {
        println!("{}", solver_ok.stats);
    }
    match solver_ok.solution {
        Some(solution) => {
            println!("Found solution:");
            print!("{}", solution);
            println!("Moves: {}", solution.move_cnt());
        }
        None => println!("No solution found"),
    }
}
