//! Robot pose and the cardinal directions it can face.

use std::fmt;

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A cardinal direction the robot can face.
///
/// Each direction carries its own geometry: the unit vector added per move
/// step, and its neighbors in the fixed clockwise rotation cycle
/// North → East → South → West → North.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Clockwise rotation order. Turning indexes into this table.
    const CYCLE: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The grid-space unit vector one move step adds in this direction.
    pub fn unit_vector(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::East => IVec2::X,
            Self::South => IVec2::NEG_Y,
            Self::West => IVec2::NEG_X,
        }
    }

    /// One step clockwise through the rotation cycle.
    pub fn turned_right(self) -> Self {
        Self::CYCLE[(self as usize + 1) % 4]
    }

    /// One step counter-clockwise through the rotation cycle.
    pub fn turned_left(self) -> Self {
        Self::CYCLE[(self as usize + 3) % 4]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        })
    }
}

/// The state of the pen robot.
///
/// Tracks where the robot stands, whether its pen touches the floor, and the
/// direction the next move steps toward. The robot knows nothing about the
/// floor; tracing marks while it moves is the interpreter's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    /// Current cell the robot occupies.
    pub position: IVec2,

    /// When true, movement traces marks onto the floor.
    pub pen_down: bool,

    /// Direction the next move steps toward.
    pub facing: Direction,
}

impl Default for Robot {
    fn default() -> Self {
        Self {
            position: IVec2::ZERO,
            pen_down: false,
            facing: Direction::North,
        }
    }
}

impl Robot {
    /// Creates a robot at the origin with the pen up, facing north.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rotates the facing one step clockwise.
    pub fn turn_right(&mut self) {
        self.facing = self.facing.turned_right();
    }

    /// Rotates the facing one step counter-clockwise.
    pub fn turn_left(&mut self) {
        self.facing = self.facing.turned_left();
    }

    /// Steps forward `spaces` cells in the facing direction.
    ///
    /// Non-positive counts leave the position unchanged.
    pub fn advance(&mut self, spaces: i32) {
        for _ in 0..spaces {
            self.position += self.facing.unit_vector();
        }
    }

    /// Restores the initial state: origin, pen up, facing north.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position: {}, {} - Pen: {} - Facing: {}",
            self.position.x,
            self.position.y,
            if self.pen_down { "down" } else { "up" },
            self.facing
        )
    }
}
