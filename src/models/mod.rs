pub mod request;

/// A zero-based grid position within the room. Equality and hashing are by
/// value, so two coordinates naming the same cell are the same set member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Room dimensions. Positions from (0, 0) up to and including
/// (width, height) are inside the room; the walls sit exactly on the
/// boundary coordinates, not one short of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub width: i32,
    pub height: i32,
}
