//! Grid vocabulary shared by the engine and the Bevy host.

use bevy::prelude::*;

/// A cell on the arena grid. `x` grows to the right, `y` grows downwards.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    pub fn step(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether this cell lies inside a `width` x `height` grid anchored at the origin.
    pub fn is_within(&self, width: i32, height: i32) -> bool {
        (0..width).contains(&self.x) && (0..height).contains(&self.y)
    }
}

/// Heading of the bike.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Unit vector in grid coordinates.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Reads the keys pressed this frame and returns the requested heading, if any.
    pub fn from_input(keyboard_input: &ButtonInput<KeyCode>) -> Option<Direction> {
        if keyboard_input.just_pressed(KeyCode::ArrowLeft)
            || keyboard_input.just_pressed(KeyCode::KeyA)
        {
            Some(Direction::Left)
        } else if keyboard_input.just_pressed(KeyCode::ArrowRight)
            || keyboard_input.just_pressed(KeyCode::KeyD)
        {
            Some(Direction::Right)
        } else if keyboard_input.just_pressed(KeyCode::ArrowUp)
            || keyboard_input.just_pressed(KeyCode::KeyW)
        {
            Some(Direction::Up)
        } else if keyboard_input.just_pressed(KeyCode::ArrowDown)
            || keyboard_input.just_pressed(KeyCode::KeyS)
        {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn deltas_use_screen_orientation() {
        assert_eq!(Direction::Right.delta(), (1, 0));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Up.delta(), (0, -1));
    }

    #[test]
    fn step_and_bounds() {
        let cell = Cell::new(39, 0);
        assert_eq!(cell.step(Direction::Left), Cell::new(38, 0));
        assert!(cell.is_within(40, 30));
        assert!(!cell.step(Direction::Right).is_within(40, 30));
        assert!(!cell.step(Direction::Up).is_within(40, 30));
    }

    #[test]
    fn keyboard_maps_arrows_and_wasd() {
        let mut input = ButtonInput::<KeyCode>::default();
        assert_eq!(Direction::from_input(&input), None);

        input.press(KeyCode::KeyW);
        assert_eq!(Direction::from_input(&input), Some(Direction::Up));

        input.clear();
        input.release(KeyCode::KeyW);
        input.press(KeyCode::ArrowLeft);
        assert_eq!(Direction::from_input(&input), Some(Direction::Left));
    }
}
