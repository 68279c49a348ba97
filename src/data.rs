use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Add;

/// The four directions in the order the search tries them.
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i8,
    pub c: i8,
}

impl Pos {
    pub fn new(r: i8, c: i8) -> Pos {
        Pos { r, c }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.offset();
        Pos {
            r: self.r + dr,
            c: self.c + dc,
        }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.r, self.c)
    }
}

impl Debug for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    /// Row and column deltas of one move in this direction.
    pub fn offset(self) -> (i8, i8) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Right => (0, 1),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
        }
    }

    /// Reverse lookup - fails for everything that is not a cardinal unit
    /// offset, including (0,0).
    pub fn from_offset(dr: i8, dc: i8) -> Result<Dir, InvalidDirection> {
        DIRECTIONS
            .iter()
            .copied()
            .find(|dir| dir.offset() == (dr, dc))
            .ok_or(InvalidDirection { dr, dc })
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "UP"),
            Dir::Right => write!(f, "RIGHT"),
            Dir::Down => write!(f, "DOWN"),
            Dir::Left => write!(f, "LEFT"),
        }
    }
}

impl Debug for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDirection {
    pub dr: i8,
    pub dc: i8,
}

impl Display for InvalidDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No direction with offset ({},{})", self.dr, self.dc)
    }
}

impl Error for InvalidDirection {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_round_trip() {
        for &dir in &DIRECTIONS {
            let (dr, dc) = dir.offset();
            assert_eq!(Dir::from_offset(dr, dc), Ok(dir));
        }
    }

    #[test]
    fn bad_offsets_are_rejected() {
        for &(dr, dc) in &[(0, 0), (1, 1), (-1, 1), (2, 0), (0, -2)] {
            assert_eq!(Dir::from_offset(dr, dc), Err(InvalidDirection { dr, dc }));
        }
    }

    #[test]
    fn adding_directions() {
        let pos = Pos::new(1, 1);
        assert_eq!(pos + Dir::Up, Pos::new(0, 1));
        assert_eq!(pos + Dir::Right, Pos::new(1, 2));
        assert_eq!(pos + Dir::Down, Pos::new(2, 1));
        assert_eq!(pos + Dir::Left, Pos::new(1, 0));

        // offboard results are the caller's problem
        assert_eq!(Pos::new(0, 0) + Dir::Up, Pos::new(-1, 0));
    }

    #[test]
    fn formatting() {
        assert_eq!(Pos::new(2, 0).to_string(), "(2,0)");
        assert_eq!(Dir::Up.to_string(), "UP");
        assert_eq!(Dir::Right.to_string(), "RIGHT");
        assert_eq!(Dir::Down.to_string(), "DOWN");
        assert_eq!(Dir::Left.to_string(), "LEFT");
        assert_eq!(
            Dir::from_offset(0, 0).unwrap_err().to_string(),
            "No direction with offset (0,0)"
        );
    }
}
