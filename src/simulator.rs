//! Command interpreter driving the robot, the floor, and the history log.
//!
//! The entry point is [`Simulator`]. Construct it with [`Simulator::new`]
//! (console output) or [`Simulator::with_sink`], then feed command lines to
//! [`Simulator::execute`]. Lines are classified by their first character,
//! case-insensitively; see the crate docs for the command table.

use crate::floor::Floor;
use crate::history::CommandHistory;
use crate::output::{ConsoleSink, OutputSink};
use crate::robot::Robot;

const NOT_INITIALIZED: &str = "Error: System not initialized. Use 'I n' command first.";

/// Interprets command lines against a robot, an optional floor, and a
/// command history.
///
/// The simulator starts *uninitialized*: the floor is absent until the first
/// valid `I <n>` command, and `m`/`p` report an error until then. A single
/// `Simulator` is one logical actor; it is not meant for concurrent use
/// without external synchronization.
pub struct Simulator<S = ConsoleSink> {
    robot: Robot,
    floor: Option<Floor>,
    history: CommandHistory,
    running: bool,
    sink: S,
}

impl Simulator<ConsoleSink> {
    /// Creates a simulator that prints to standard output.
    pub fn new() -> Self {
        Self::with_sink(ConsoleSink)
    }
}

impl Default for Simulator<ConsoleSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: OutputSink> Simulator<S> {
    /// Creates a simulator emitting all output through `sink`.
    pub fn with_sink(sink: S) -> Self {
        Self {
            robot: Robot::new(),
            floor: None,
            history: CommandHistory::new(),
            running: true,
            sink,
        }
    }

    /// The robot's current pose.
    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    /// The current floor, or `None` before the first initialization.
    pub fn floor(&self) -> Option<&Floor> {
        self.floor.as_ref()
    }

    /// The command log recorded so far.
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// False once a quit command has been executed. The enclosing read loop
    /// observes this; `execute` itself stays callable regardless.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The output sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Executes one command line.
    ///
    /// Blank lines are ignored entirely. Every other line is dispatched on
    /// its first non-whitespace character and then recorded verbatim in the
    /// history (error and unknown-command lines included), except the
    /// replay trigger `h`, which is never recorded. Malformed input is
    /// reported through the sink; this method never fails.
    pub fn execute(&mut self, input: &str) {
        let trimmed = input.trim();
        let Some(first) = trimmed.chars().next() else {
            return;
        };

        let selector = first.to_ascii_lowercase();
        match selector {
            'u' => self.robot.pen_down = false,
            'd' => self.robot.pen_down = true,
            'r' => self.robot.turn_right(),
            'l' => self.robot.turn_left(),
            'm' => self.handle_move(trimmed),
            'p' => self.handle_print(),
            'c' => self.sink.line(&self.robot.to_string()),
            'i' => self.handle_initialize(trimmed),
            'h' => self.handle_replay(),
            'q' => {
                self.running = false;
                self.sink.line("Program ended.");
            }
            other => self.sink.line(&format!("Unknown command: {other}")),
        }

        if selector != 'h' {
            self.history.append(input);
        }
    }

    /// Replaces the floor with a fresh `size` × `size` one, resets the robot
    /// and clears the history.
    ///
    /// A non-positive `size` is reported through the sink and leaves the
    /// current state untouched.
    pub fn initialize(&mut self, size: i32) {
        match Floor::new(size) {
            Ok(floor) => {
                self.floor = Some(floor);
                self.robot.reset();
                self.history.clear();
                self.sink
                    .line(&format!("System initialized with {size} x {size} floor"));
            }
            Err(err) => self.sink.line(&format!("Error: {err}")),
        }
    }

    fn handle_move(&mut self, line: &str) {
        let Some(floor) = self.floor.as_mut() else {
            self.sink.line(NOT_INITIALIZED);
            return;
        };
        match numeric_argument(line) {
            Some(spaces) if spaces < 0 => {
                self.sink.line("Error: Move distance must be non-negative");
            }
            Some(spaces) => {
                // Mark the cell being left before each step, then the final
                // cell once the walk ends, so every cell occupied during a
                // pen-down move is traced - the origin included.
                for _ in 0..spaces {
                    if self.robot.pen_down {
                        floor.mark(self.robot.position);
                    }
                    self.robot.advance(1);
                }
                if self.robot.pen_down {
                    floor.mark(self.robot.position);
                }
            }
            None => self.sink.line("Error: Invalid move distance. Usage: M <number>"),
        }
    }

    fn handle_print(&mut self) {
        match &self.floor {
            Some(floor) => self.sink.line(&floor.render()),
            None => self.sink.line(NOT_INITIALIZED),
        }
    }

    fn handle_initialize(&mut self, line: &str) {
        match numeric_argument(line) {
            Some(size) => self.initialize(size),
            None => self.sink.line("Error: Invalid floor size. Usage: I <number>"),
        }
    }

    fn handle_replay(&mut self) {
        self.sink.line("Replaying history...");
        // Snapshot first: replayed commands re-enter the history as they
        // run, and must not be replayed again in the same pass.
        for entry in self.history.all() {
            self.sink.line(&format!("> Enter command: {entry}"));
            self.execute(&entry);
        }
        self.sink.line("History replay complete.");
    }
}

/// Extracts the integer argument following the selector character.
///
/// Everything past the first character of the trimmed line is trimmed again
/// and parsed as a signed base-10 integer. An empty remainder or any
/// non-integer content yields `None`.
fn numeric_argument(line: &str) -> Option<i32> {
    let mut chars = line.chars();
    chars.next();
    chars.as_str().trim().parse().ok()
}
