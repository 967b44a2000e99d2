use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Parse a piece letter. Upper case is white, lower case is black.
    pub fn from_char(c: char) -> Option<(Team, PieceKind)> {
        let team = if c.is_ascii_uppercase() {
            Team::White
        } else {
            Team::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'r' => PieceKind::Rook,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((team, kind))
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    White,
    Black,
}

impl Team {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Rank direction a pawn of this team advances in.
    #[inline]
    pub fn forward(self) -> i32 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }

    /// Rank the team's pawns start on.
    #[inline]
    pub fn pawn_home_rank(self) -> u8 {
        match self {
            Team::White => 2,
            Team::Black => 7,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::White => f.write_str("white"),
            Team::Black => f.write_str("black"),
        }
    }
}

/// What sits on an occupied square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occupant {
    pub kind: PieceKind,
    pub team: Team,
}

impl Occupant {
    #[inline]
    pub const fn new(kind: PieceKind, team: Team) -> Self {
        Self { kind, team }
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.team, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teams_face_each_other() {
        assert_eq!(Team::White.other(), Team::Black);
        assert_eq!(Team::Black.other(), Team::White);
        assert_eq!(Team::White.forward(), -Team::Black.forward());
    }

    #[test]
    fn letter_case_picks_the_team() {
        assert_eq!(PieceKind::from_char('N'), Some((Team::White, PieceKind::Knight)));
        assert_eq!(PieceKind::from_char('q'), Some((Team::Black, PieceKind::Queen)));
        assert_eq!(PieceKind::from_char('x'), None);
    }
}
