//! # floorbot
//!
//! A deterministic simulator for a pen-equipped robot on a bounded square
//! floor. Command lines are dispatched on a single leading character,
//! tracing marks wherever the pen touches and keeping a replayable log of
//! every command issued.
//!
//! The state model is three leaf components, [`Robot`] (pose and pen),
//! [`Floor`] (the mark matrix) and [`CommandHistory`] (the command log),
//! orchestrated by the [`Simulator`] interpreter. All output flows through
//! an injectable [`OutputSink`], so hosts decide whether lines land on a
//! console or in a buffer.
//!
//! ```
//! use floorbot::Simulator;
//!
//! let mut sim = Simulator::with_sink(String::new());
//! sim.execute("I 6");
//! sim.execute("D");
//! sim.execute("M 3");
//! sim.execute("C");
//! assert!(sim.sink().contains("Position: 0, 3 - Pen: down - Facing: north"));
//! ```

pub mod floor;
pub mod history;
pub mod output;
pub mod robot;
pub mod simulator;

pub use floor::*;
pub use history::*;
pub use output::*;
pub use robot::*;
pub use simulator::*;
