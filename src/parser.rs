use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::Pos;
use crate::state::{InvalidState, PuzzleState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Brackets,
    Pair,
    Coordinate,
    State(InvalidState),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Brackets => write!(f, "Expected a state wrapped in [ and ]"),
            ParserErr::Pair => write!(f, "Expected a (row,col) pair"),
            ParserErr::Coordinate => write!(f, "Expected an integer coordinate"),
            ParserErr::State(ref err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParserErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            ParserErr::State(ref err) => Some(err),
            _ => None,
        }
    }
}

/// Parses the same format `Display` produces: `[(r,c),(r,c),(r,c),(r,c)]`
/// listing block, red shoe, blue shoe and black shoe.
impl FromStr for PuzzleState {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or(ParserErr::Brackets)?;

        let mut positions = Vec::new();
        for pair in inner.split("),") {
            let pair = pair.strip_prefix('(').ok_or(ParserErr::Pair)?;
            // only the last pair still has its closing paren after the split
            let pair = pair.strip_suffix(')').unwrap_or(pair);
            let mut coords = pair.splitn(2, ',');
            let r = parse_coord(coords.next())?;
            let c = parse_coord(coords.next())?;
            positions.push(Pos::new(r, c));
        }

        PuzzleState::new(&positions).map_err(ParserErr::State)
    }
}

fn parse_coord(coord: Option<&str>) -> Result<i8, ParserErr> {
    coord
        .ok_or(ParserErr::Pair)?
        .trim()
        .parse()
        .map_err(|_| ParserErr::Coordinate)
}
