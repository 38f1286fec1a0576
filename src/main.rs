//! Command-line front-end.
//!
//! Usage:
//! `tile_chess [--layout <path>] [--random <plies> [--seed <u64>]]`
//!
//! Without `--random` it reads long algebraic moves (`e2e4`, `e7e8q`) from
//! stdin, one per line, and prints the board after each. `moves` lists the
//! legal moves, `board` reprints the board and `quit` exits.

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};

use tile_chess::chess_errors::ChessErrors;
use tile_chess::game_state::chess_types::Side;
use tile_chess::game_state::game_session::GameSession;
use tile_chess::game_state::position::{create_initial_position, Position};
use tile_chess::utils::long_algebraic::{move_to_long_algebraic, parse_long_algebraic};
use tile_chess::utils::random_playout::random_playout;
use tile_chess::utils::render_game_state::render_with_coordinates;
use tile_chess::utils::text_layout::parse_text_layout;

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|value| value.parse::<T>().ok())
}

fn load_start(args: &[String]) -> Result<Position, String> {
    match parse_arg::<String>(args, "--layout") {
        Some(path) => {
            let text = fs::read_to_string(&path).map_err(|e| format!("cannot read {path}: {e}"))?;
            parse_text_layout(&text, Side::White).map_err(|e| e.to_string())
        }
        None => Ok(create_initial_position()),
    }
}

fn run_random(start: &Position, plies: usize, seed: u64) -> Result<(), ChessErrors> {
    let report = random_playout(start, plies, seed)?;
    for line in &report.info_lines {
        println!("{line}");
    }
    println!("{}", render_with_coordinates(report.final_position.board()));
    Ok(())
}

fn run_interactive(start: Position) -> io::Result<()> {
    let mut session = GameSession::new(start);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", render_with_coordinates(session.position().board()));
    println!("{}", session.info_line());

    for line in stdin.lock().lines() {
        let line = line?;
        let command = line.trim();
        match command {
            "" => continue,
            "quit" => break,
            "board" => println!("{}", render_with_coordinates(session.position().board())),
            "moves" => {
                let listed: Vec<String> = session
                    .position()
                    .current_player()
                    .legal_moves()
                    .iter()
                    .filter_map(|mv| move_to_long_algebraic(mv).ok())
                    .collect();
                println!("info string legal_moves {} {}", listed.len(), listed.join(" "));
            }
            _ => {
                let outcome =
                    parse_long_algebraic(command).and_then(|(origin, destination, promotion)| {
                        session
                            .request_move(origin, destination, promotion)
                            .map(|_| ())
                    });
                match outcome {
                    Ok(()) => {
                        println!("{}", render_with_coordinates(session.position().board()));
                        println!("{}", session.info_line());
                        if session.status().is_over() {
                            break;
                        }
                    }
                    Err(e) => eprintln!("error: {e}"),
                }
            }
        }
        stdout.flush()?;
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let start = match load_start(&args) {
        Ok(position) => position,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    if let Some(plies) = parse_arg::<usize>(&args, "--random") {
        let seed = parse_arg::<u64>(&args, "--seed").unwrap_or(0);
        if let Err(e) = run_random(&start, plies, seed) {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = run_interactive(start) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
