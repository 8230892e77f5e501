use std::io::{self, Write};
use std::str::FromStr;

use crossterm::style::Stylize;
use pokle_solver::board::Board;
use pokle_solver::comparator::Color;
use pokle_solver::enumerator::Orderings;
use pokle_solver::hole::HoleCards;
use pokle_solver::solver::{ordering_from_ranks, Solver, SolverError};

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn read_hole(player: usize) -> HoleCards {
    loop {
        let line = prompt(&format!("Enter Player {player} hole cards (e.g. 10H KD): "))
            .expect("stdin read failed");
        match HoleCards::from_str(&line) {
            Ok(hole) => return hole,
            Err(e) => eprintln!("Error: {e}"),
        }
    }
}

fn read_ranks(phase: &str) -> [u8; 3] {
    loop {
        let line = prompt(&format!(
            "Enter player rank of each player's hand in the {phase} (e.g. 2 1 3): "
        ))
        .expect("stdin read failed");
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 3 {
            eprintln!("Error: please enter exactly three ranks.");
            continue;
        }
        let mut ranks = [0u8; 3];
        let mut ok = true;
        for (i, p) in parts.iter().enumerate() {
            match p.parse::<u8>() {
                Ok(r) if (1..=3).contains(&r) => ranks[i] = r,
                _ => {
                    ok = false;
                    break;
                }
            }
        }
        let mut sorted = ranks;
        sorted.sort_unstable();
        if !ok || sorted != [1, 2, 3] {
            eprintln!("Error: please enter a permutation of 1, 2, 3.");
            continue;
        }
        return ordering_from_ranks(ranks);
    }
}

fn read_colors() -> [Color; 5] {
    loop {
        let line = prompt("Enter color feedback for river cards (g=green, y=yellow, e=grey), e.g. g y e e g: ")
            .expect("stdin read failed");
        let parts: Vec<String> = line.to_lowercase().split_whitespace().map(|s| s.to_string()).collect();
        if parts.len() != 5 {
            eprintln!("Error: please enter exactly 5 colors using 'g', 'y', or 'e'.");
            continue;
        }
        let mut colors = [Color::Grey; 5];
        let mut ok = true;
        for (i, p) in parts.iter().enumerate() {
            colors[i] = match p.as_str() {
                "g" => Color::Green,
                "y" => Color::Yellow,
                "e" => Color::Grey,
                _ => {
                    ok = false;
                    break;
                }
            };
        }
        if !ok {
            eprintln!("Error: please enter exactly 5 colors using 'g', 'y', or 'e'.");
            continue;
        }
        return colors;
    }
}

fn print_board(board: &Board) {
    let tuple = board.as_tuple();
    let rendered: Vec<String> = tuple.iter().map(|c| c.to_string()).collect();
    println!("{}", rendered.join(" ").bold());
}

fn main() {
    println!("pokle {} — three-player Pokle solver", pokle_solver::VERSION);

    let hole = [read_hole(1), read_hole(2), read_hole(3)];
    let orderings =
        Orderings { flop: read_ranks("flop"), turn: read_ranks("turn"), river: read_ranks("river") };

    let mut solver = match Solver::new(hole, orderings) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let candidates = solver.solve();
    println!("Possible tables found: {}", candidates.len());

    loop {
        let guess = match solver.suggest() {
            Ok(g) => g,
            Err(SolverError::EmptyCandidates) => {
                eprintln!("No candidate boards remain; feedback was inconsistent.");
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        };
        print_board(&guess);

        let colors = read_colors();
        let all_green = colors.iter().all(|&c| c == Color::Green);
        match solver.apply_feedback(colors) {
            Ok(remaining) => {
                println!("Possible tables remaining: {}", remaining.len());
            }
            Err(e) => {
                eprintln!("Error: {e}");
                continue;
            }
        }

        if all_green {
            println!("{}", "Solved!".green().bold());
            break;
        }
    }
}
