//! Interactive console front-end for the floorbot simulator.

use std::io::{self, BufRead, Write};

use floorbot::Simulator;

fn main() -> io::Result<()> {
    println!("=== Robot Floor Simulator ===");
    println!("Commands: U/D (pen up/down), L/R (turn left/right), M n (move n spaces)");
    println!("         P (print), C (current position), I n (initialize), H (history), Q (quit)");
    println!();

    let mut simulator = Simulator::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while simulator.is_running() {
        print!("> Enter command: ");
        io::stdout().flush()?;
        match lines.next() {
            Some(line) => simulator.execute(&line?),
            None => break,
        }
    }

    Ok(())
}
