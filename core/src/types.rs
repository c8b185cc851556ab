use std::fmt;

/// Edge length of the cube.
pub const BOARD_SIZE: u8 = 4;

/// Number of cells in the cube.
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Represents one of the two sides.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposite color.
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the y direction pawns of this color advance in.
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// The two kinds of pieces in the cube game.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PieceKind {
    King,
    Pawn,
}

/// A piece with both kind and color.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    /// Creates a new piece with the given kind and color.
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Single-letter symbol, uppercase for White.
    pub const fn symbol(self) -> char {
        match (self.kind, self.color) {
            (PieceKind::King, Color::White) => 'K',
            (PieceKind::Pawn, Color::White) => 'P',
            (PieceKind::King, Color::Black) => 'k',
            (PieceKind::Pawn, Color::Black) => 'p',
        }
    }
}

/// A cell of the cube.
/// Components are always in `0..BOARD_SIZE`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coord {
    x: u8,
    y: u8,
    z: u8,
}

impl Coord {
    /// Creates a coordinate, or None if any component is out of range.
    pub const fn new(x: u8, y: u8, z: u8) -> Option<Self> {
        if x < BOARD_SIZE && y < BOARD_SIZE && z < BOARD_SIZE {
            Some(Coord { x, y, z })
        } else {
            None
        }
    }

    /// Creates a coordinate from signed components.
    pub fn from_signed(x: i32, y: i32, z: i32) -> Option<Self> {
        let x = u8::try_from(x).ok()?;
        let y = u8::try_from(y).ok()?;
        let z = u8::try_from(z).ok()?;
        Self::new(x, y, z)
    }

    /// Creates a coordinate from its dense index (0-63).
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            let n = BOARD_SIZE as usize;
            Some(Coord {
                x: (index / (n * n)) as u8,
                y: ((index / n) % n) as u8,
                z: (index % n) as u8,
            })
        } else {
            None
        }
    }

    pub const fn x(self) -> u8 {
        self.x
    }

    pub const fn y(self) -> u8 {
        self.y
    }

    pub const fn z(self) -> u8 {
        self.z
    }

    /// Returns the dense index (0-63), x-major then y then z.
    pub const fn index(self) -> usize {
        let n = BOARD_SIZE as usize;
        (self.x as usize) * n * n + (self.y as usize) * n + self.z as usize
    }

    /// Returns the neighbouring cell at the given offset, if in bounds.
    pub fn offset(self, dx: i8, dy: i8, dz: i8) -> Option<Self> {
        Self::from_signed(
            self.x as i32 + dx as i32,
            self.y as i32 + dy as i32,
            self.z as i32 + dz as i32,
        )
    }

    /// Iterates over every cell of the cube in index order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..CELL_COUNT).filter_map(Coord::from_index)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.x, self.y, self.z)
    }
}

/// A move from one cell to another.
/// Construction does not check legality.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// Outcome of a finished game.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameResult {
    /// Score adjustment applied to every move of a game with this result.
    pub const fn reward(self) -> i64 {
        match self {
            GameResult::WhiteWins => 1,
            GameResult::BlackWins => -1,
            GameResult::Draw => 0,
        }
    }

    /// Returns the winning color, if any.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::WhiteWins => Some(Color::White),
            GameResult::BlackWins => Some(Color::Black),
            GameResult::Draw => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::WhiteWins => write!(f, "1-0"),
            GameResult::BlackWins => write!(f, "0-1"),
            GameResult::Draw => write!(f, "1/2-1/2"),
        }
    }
}
