use std::collections::HashSet;

use crate::models::{Coord, Room};

/// One cardinal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Maps an instruction symbol to its direction. Unknown symbols have
    /// already been rejected by validation.
    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'N' => Some(Direction::North),
            'E' => Some(Direction::East),
            'S' => Some(Direction::South),
            'W' => Some(Direction::West),
            _ => None,
        }
    }
}

/// Final state of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationOutcome {
    pub final_position: Coord,
    pub cleaned: usize,
}

/// Drives the hoover through the room one instruction at a time, cleaning
/// each dirt patch the first time the hoover occupies its cell.
///
/// Works on its own copy of the patch set, so the caller's collection is
/// never mutated and every distinct coordinate is credited at most once.
/// Expects validated input and never fails; an instruction that would push
/// the hoover through a wall is consumed without moving it.
pub fn navigate(
    room: Room,
    start: Coord,
    patches: &HashSet<Coord>,
    instructions: &str,
) -> NavigationOutcome {
    let mut remaining = patches.clone();
    let mut position = start;
    let mut cleaned = 0;

    if remaining.remove(&position) {
        cleaned += 1;
    }

    for direction in instructions.chars().filter_map(Direction::from_symbol) {
        if !heading_to_wall(room, position, direction) {
            position = step(position, direction);
        }
        if remaining.remove(&position) {
            cleaned += 1;
        }
    }

    NavigationOutcome {
        final_position: position,
        cleaned,
    }
}

/// True when the hoover already sits on the wall it is heading towards, so
/// the next unit step would leave the room. Checked against the current
/// position, before the delta is applied.
fn heading_to_wall(room: Room, position: Coord, direction: Direction) -> bool {
    match direction {
        Direction::North => position.y >= room.height,
        Direction::South => position.y <= 0,
        Direction::East => position.x >= room.width,
        Direction::West => position.x <= 0,
    }
}

fn step(position: Coord, direction: Direction) -> Coord {
    match direction {
        Direction::North => Coord::new(position.x, position.y + 1),
        Direction::South => Coord::new(position.x, position.y - 1),
        Direction::East => Coord::new(position.x + 1, position.y),
        Direction::West => Coord::new(position.x - 1, position.y),
    }
}
