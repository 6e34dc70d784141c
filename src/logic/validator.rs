use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::models::{request::HooverRequest, Coord, Room};

/// Which part of the request a coordinate came from, used to point error
/// messages at the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordClass {
    RoomSize,
    InitialPosition,
    Patch,
}

impl fmt::Display for CoordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CoordClass::RoomSize => "room size",
            CoordClass::InitialPosition => "initial position",
            CoordClass::Patch => "patch",
        };
        f.write_str(name)
    }
}

/// A rejected request. Every kind maps to a 400 response and is terminal
/// for the request; the payload itself is at fault, nothing is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Negative values are not allowed in the {0} coordinates.")]
    NegativeValue(CoordClass),
    #[error("Both room width and height must be greater than zero.")]
    InvalidRoomSize,
    #[error("The {0} coordinates are out of bounds of the room size.")]
    OutOfBounds(CoordClass),
    #[error("The {0} coordinates must contain exactly two values.")]
    MalformedCoordinate(CoordClass),
    #[error("Instructions must be a non-empty string containing only the characters N, E, S, W.")]
    MalformedInstructions,
}

impl ValidationError {
    /// Short category label carried in the error payload next to the message.
    pub fn label(&self) -> &'static str {
        match self {
            ValidationError::NegativeValue(_) => "Negative Values Error",
            ValidationError::InvalidRoomSize => "Invalid Room Size",
            ValidationError::OutOfBounds(_) => "Out of Room Bounds",
            ValidationError::MalformedCoordinate(_) => "Malformed Coordinates",
            ValidationError::MalformedInstructions => "Malformed Instructions",
        }
    }
}

/// A request that has passed every rule, lowered into typed domain values
/// ready for the navigator. Duplicate patches have collapsed into the set.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRequest {
    pub room: Room,
    pub start: Coord,
    pub patches: HashSet<Coord>,
    pub instructions: String,
}

/// Checks the raw request in a fixed order, first failure wins. Negativity
/// is diagnosed before the room size and bounds rules so a negative room
/// dimension is reported as negative rather than as a confusing bounds
/// violation.
pub fn validate(request: &HooverRequest) -> Result<ValidRequest, ValidationError> {
    // 1. Non-negativity, across every coordinate-like value in the payload.
    if request.room_size.iter().any(|v| *v < 0) {
        return Err(ValidationError::NegativeValue(CoordClass::RoomSize));
    }
    if request.coords.iter().any(|v| *v < 0) {
        return Err(ValidationError::NegativeValue(CoordClass::InitialPosition));
    }
    if request.patches.iter().flatten().any(|v| *v < 0) {
        return Err(ValidationError::NegativeValue(CoordClass::Patch));
    }

    // 2/3. Room size positivity, then bounds. A malformed room size makes
    // both rules meaningless and falls through to the structural check
    // below; positions are bounds-checked on their first two components,
    // so an over-long pair that is also out of bounds gets the bounds
    // diagnosis first.
    if let [width, height] = request.room_size[..] {
        if width <= 0 || height <= 0 {
            return Err(ValidationError::InvalidRoomSize);
        }
        if let [x, y, ..] = request.coords[..] {
            if x > width || y > height {
                return Err(ValidationError::OutOfBounds(CoordClass::InitialPosition));
            }
        }
        for patch in &request.patches {
            if let [x, y, ..] = patch[..] {
                if x > width || y > height {
                    return Err(ValidationError::OutOfBounds(CoordClass::Patch));
                }
            }
        }
    }

    // 4. Structural shape: every coordinate must be exactly two integers.
    let size = pair(&request.room_size, CoordClass::RoomSize)?;
    let room = Room {
        width: size.x,
        height: size.y,
    };
    let start = pair(&request.coords, CoordClass::InitialPosition)?;
    let mut patches = HashSet::with_capacity(request.patches.len());
    for patch in &request.patches {
        patches.insert(pair(patch, CoordClass::Patch)?);
    }

    // 5. Instruction alphabet.
    if request.instructions.is_empty()
        || request
            .instructions
            .chars()
            .any(|c| !matches!(c, 'N' | 'E' | 'S' | 'W'))
    {
        return Err(ValidationError::MalformedInstructions);
    }

    Ok(ValidRequest {
        room,
        start,
        patches,
        instructions: request.instructions.clone(),
    })
}

fn pair(raw: &[i32], class: CoordClass) -> Result<Coord, ValidationError> {
    match raw {
        [x, y] => Ok(Coord::new(*x, *y)),
        _ => Err(ValidationError::MalformedCoordinate(class)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        room_size: Vec<i32>,
        coords: Vec<i32>,
        patches: Vec<Vec<i32>>,
        instructions: &str,
    ) -> HooverRequest {
        HooverRequest {
            room_size,
            coords,
            patches,
            instructions: instructions.into(),
        }
    }

    #[test]
    fn test_valid_request_is_lowered_to_domain_values() {
        let req = request(
            vec![5, 5],
            vec![1, 2],
            vec![vec![1, 0], vec![2, 2], vec![2, 3]],
            "NNESEESWNWW",
        );
        let valid = validate(&req).unwrap();
        assert_eq!(valid.room, Room { width: 5, height: 5 });
        assert_eq!(valid.start, Coord::new(1, 2));
        assert_eq!(valid.patches.len(), 3);
        assert!(valid.patches.contains(&Coord::new(2, 3)));
        assert_eq!(valid.instructions, "NNESEESWNWW");
    }

    #[test]
    fn test_duplicate_patches_collapse() {
        let req = request(
            vec![5, 5],
            vec![0, 0],
            vec![vec![2, 2], vec![2, 2], vec![1, 1]],
            "N",
        );
        let valid = validate(&req).unwrap();
        assert_eq!(valid.patches.len(), 2);
    }

    #[test]
    fn test_zero_room_size_rejected() {
        let req = request(vec![0, 0], vec![1, 1], vec![vec![1, 0]], "N");
        assert_eq!(validate(&req), Err(ValidationError::InvalidRoomSize));
    }

    #[test]
    fn test_one_zero_dimension_rejected() {
        let req = request(vec![5, 0], vec![1, 1], vec![vec![1, 0]], "N");
        assert_eq!(validate(&req), Err(ValidationError::InvalidRoomSize));
    }

    #[test]
    fn test_negative_room_dimension_reported_as_negative() {
        // Negativity wins over the room size rule.
        let req = request(vec![-5, 5], vec![1, 1], vec![vec![1, 0]], "N");
        assert_eq!(
            validate(&req),
            Err(ValidationError::NegativeValue(CoordClass::RoomSize))
        );
    }

    #[test]
    fn test_negative_start_rejected() {
        let req = request(vec![5, 5], vec![-1, 2], vec![vec![1, 0]], "N");
        assert_eq!(
            validate(&req),
            Err(ValidationError::NegativeValue(CoordClass::InitialPosition))
        );
    }

    #[test]
    fn test_negative_patch_rejected() {
        let req = request(vec![5, 5], vec![1, 2], vec![vec![1, -3]], "N");
        assert_eq!(
            validate(&req),
            Err(ValidationError::NegativeValue(CoordClass::Patch))
        );
    }

    #[test]
    fn test_negativity_wins_over_out_of_bounds() {
        // Start is both negative on one axis and out of bounds on the other;
        // the more specific diagnosis is reported.
        let req = request(vec![5, 5], vec![-1, 9], vec![vec![1, 0]], "N");
        assert_eq!(
            validate(&req),
            Err(ValidationError::NegativeValue(CoordClass::InitialPosition))
        );
    }

    #[test]
    fn test_start_out_of_bounds_rejected() {
        let req = request(vec![5, 5], vec![6, 6], vec![vec![1, 1]], "N");
        assert_eq!(
            validate(&req),
            Err(ValidationError::OutOfBounds(CoordClass::InitialPosition))
        );
    }

    #[test]
    fn test_patch_out_of_bounds_rejected() {
        let req = request(vec![5, 5], vec![2, 2], vec![vec![6, 6]], "N");
        assert_eq!(
            validate(&req),
            Err(ValidationError::OutOfBounds(CoordClass::Patch))
        );
    }

    #[test]
    fn test_start_on_boundary_is_in_bounds() {
        // Walls sit on (width, height) inclusive.
        let req = request(vec![5, 5], vec![5, 5], vec![vec![1, 1]], "N");
        assert!(validate(&req).is_ok());
    }

    #[test]
    fn test_malformed_room_size_rejected() {
        let req = request(vec![5], vec![1, 1], vec![vec![1, 1]], "N");
        assert_eq!(
            validate(&req),
            Err(ValidationError::MalformedCoordinate(CoordClass::RoomSize))
        );
    }

    #[test]
    fn test_malformed_patch_rejected() {
        let req = request(vec![5, 5], vec![1, 1], vec![vec![1, 1, 1]], "N");
        assert_eq!(
            validate(&req),
            Err(ValidationError::MalformedCoordinate(CoordClass::Patch))
        );
    }

    #[test]
    fn test_out_of_bounds_wins_over_malformed_shape() {
        // A three-component patch whose first two values already exceed the
        // room is reported as out of bounds, per the rule ordering.
        let req = request(vec![5, 5], vec![1, 1], vec![vec![6, 6, 6]], "N");
        assert_eq!(
            validate(&req),
            Err(ValidationError::OutOfBounds(CoordClass::Patch))
        );
    }

    #[test]
    fn test_out_of_bounds_start_wins_over_malformed_shape() {
        let req = request(vec![5, 5], vec![6, 6, 6], vec![vec![1, 1]], "N");
        assert_eq!(
            validate(&req),
            Err(ValidationError::OutOfBounds(CoordClass::InitialPosition))
        );
    }

    #[test]
    fn test_empty_instructions_rejected() {
        let req = request(vec![5, 5], vec![1, 1], vec![vec![1, 1]], "");
        assert_eq!(validate(&req), Err(ValidationError::MalformedInstructions));
    }

    #[test]
    fn test_unknown_instruction_symbol_rejected() {
        let req = request(vec![5, 5], vec![1, 1], vec![vec![1, 1]], "NNXE");
        assert_eq!(validate(&req), Err(ValidationError::MalformedInstructions));
    }

    #[test]
    fn test_lowercase_instruction_symbol_rejected() {
        let req = request(vec![5, 5], vec![1, 1], vec![vec![1, 1]], "n");
        assert_eq!(validate(&req), Err(ValidationError::MalformedInstructions));
    }

    #[test]
    fn test_error_messages_name_the_offending_field() {
        assert_eq!(
            ValidationError::NegativeValue(CoordClass::Patch).to_string(),
            "Negative values are not allowed in the patch coordinates."
        );
        assert_eq!(
            ValidationError::OutOfBounds(CoordClass::InitialPosition).to_string(),
            "The initial position coordinates are out of bounds of the room size."
        );
    }

    #[test]
    fn test_error_labels() {
        assert_eq!(
            ValidationError::InvalidRoomSize.label(),
            "Invalid Room Size"
        );
        assert_eq!(
            ValidationError::OutOfBounds(CoordClass::Patch).label(),
            "Out of Room Bounds"
        );
        assert_eq!(
            ValidationError::MalformedInstructions.label(),
            "Malformed Instructions"
        );
    }
}
