use std::io::{self, BufRead, Write};

use battleship::input::{parse_command, Command};
use battleship::{init_logging, init_with_level, ui, Fleet, Game, Position, Ship, ShotOutcome, BOARD_SIZE};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level regardless of BATTLESHIP_LOG.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fire at a hidden random fleet from the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
        seed: Option<u64>,
        /// Show the fleet on the board while playing.
        #[arg(long)]
        reveal: bool,
    },
    /// Fire at random until the fleet is sunk and print a JSON summary.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
        seed: Option<u64>,
        /// Stop after this many shots even if ships remain.
        #[arg(long, default_value_t = (BOARD_SIZE * BOARD_SIZE) as usize)]
        max_shots: usize,
    },
}

#[derive(Serialize)]
struct SimReport<'a> {
    seed: Option<u64>,
    shots: usize,
    hits: usize,
    misses: usize,
    sunk: usize,
    remaining: usize,
    won: bool,
    fleet: &'a [Ship],
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        init_with_level(LevelFilter::Debug);
    } else {
        init_logging();
    }

    match cli.command {
        Commands::Play { seed, reveal } => play(seed, reveal),
        Commands::Sim { seed, max_shots } => sim(seed, max_shots),
    }
}

fn sim(seed: Option<u64>, max_shots: usize) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let fleet = Fleet::random(&mut rng)?;
    let mut game = Game::new(fleet);

    let mut targets: Vec<Position> = (0..BOARD_SIZE)
        .flat_map(|r| (0..BOARD_SIZE).map(move |c| Position::new(r, c)))
        .collect();
    targets.shuffle(&mut rng);

    for target in targets.iter().take(max_shots) {
        if game.is_over() {
            break;
        }
        game.fire(target);
    }

    let report = SimReport {
        seed,
        shots: game.shots().len(),
        hits: game.hits(),
        misses: game.misses(),
        sunk: game.sunk_ships(),
        remaining: game.remaining_ships(),
        won: game.is_over(),
        fleet: game.fleet().ships(),
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

fn play(seed: Option<u64>, reveal: bool) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let fleet = Fleet::random(&mut rng)?;
    let mut game = Game::new(fleet);

    println!("A fleet of {} ships is hiding on a {}x{} board.", game.fleet().len(), BOARD_SIZE, BOARD_SIZE);
    print_help();
    print!("{}", ui::render_game(&game, reveal));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let command = match parse_command(&line?) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        match command {
            Command::Fire(target) => {
                match game.fire_outcome(&target) {
                    ShotOutcome::Invalid => println!("{} is off the board.", target),
                    ShotOutcome::Repeated => {
                        println!("Already fired at {}.", ui::coord_label(&target))
                    }
                    ShotOutcome::Miss => println!("{}: miss.", ui::coord_label(&target)),
                    ShotOutcome::Hit => println!("{}: hit!", ui::coord_label(&target)),
                    ShotOutcome::Sunk(index) => {
                        let ship = &game.fleet().ships()[index];
                        println!("{}: sunk a {}!", ui::coord_label(&target), ship.category());
                    }
                }
                if game.is_over() {
                    print!("{}", ui::render_game(&game, true));
                    println!(
                        "All ships sunk in {} shots ({} hits, {} repeated, {} invalid).",
                        game.shots().len(),
                        game.hits(),
                        game.repeated_shots(),
                        game.invalid_shots()
                    );
                    break;
                }
            }
            Command::Board => print!("{}", ui::render_game(&game, reveal)),
            Command::Fleet if reveal => game.fleet().print_all_ships(),
            Command::Fleet => {
                let sunk = game.fleet().ships().iter().filter(|s| !s.still_floating());
                print!("{}", ui::render_ship_list(sunk));
            }
            Command::Status => {
                game.fleet().print_status();
                println!(
                    "Shots: {}  Hits: {}  Sunk: {}  Remaining: {}",
                    game.shots().len(),
                    game.hits(),
                    game.sunk_ships(),
                    game.remaining_ships()
                );
            }
            Command::Help => print_help(),
            Command::Quit => break,
        }
    }
    Ok(())
}

fn print_help() {
    println!("Enter a target as A5 (column letter, row number) or as two numbers 'row col' (0-based).");
    println!("Commands: board, fleet (sunk ships), status, help, quit");
}
