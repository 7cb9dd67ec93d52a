use core::fmt;

/// Cosmetic representation of a [Tile]: a two character glyph and an RGB color. Neither has
/// any influence on the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileRepr {
    pub glyph: &'static str,
    pub color: (u8, u8, u8),
}

/// Classification of a single grid cell.
///
/// [Tile::Empty] and [Tile::Wall] come from the raw level. [Tile::Floor], [Tile::WallClimb],
/// [Tile::Corner] and [Tile::Node] are produced by scene analysis, [Tile::Origin] and
/// [Tile::Target] mark the endpoints of a route and the direction tiles tag path points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty,
    Wall,
    Origin,
    Target,
    Floor,
    WallClimb,
    Corner,
    Node,
    Up,
    Down,
    Left,
    Right,
    Passed,
}

impl Tile {
    /// Every tile, in declaration order.
    pub const ALL: [Tile; 13] = [
        Tile::Empty,
        Tile::Wall,
        Tile::Origin,
        Tile::Target,
        Tile::Floor,
        Tile::WallClimb,
        Tile::Corner,
        Tile::Node,
        Tile::Up,
        Tile::Down,
        Tile::Left,
        Tile::Right,
        Tile::Passed,
    ];

    /// Glyph and color used when rendering this tile.
    pub fn repr(self) -> TileRepr {
        let (glyph, color) = match self {
            Tile::Empty => ("  ", (0, 0, 0)),
            Tile::Wall => ("\u{2588}\u{2588}", (171, 171, 171)),
            Tile::Origin => ("OO", (0, 255, 0)),
            Tile::Target => ("XX", (255, 0, 0)),
            Tile::Floor => ("\u{2593}\u{2593}", (31, 207, 0)),
            Tile::WallClimb => ("\u{2591}\u{2591}", (69, 141, 230)),
            Tile::Corner => ("\u{2592}\u{2592}", (140, 155, 239)),
            Tile::Node => ("[]", (255, 255, 255)),
            Tile::Up => ("^^", (255, 255, 255)),
            Tile::Down => ("vv", (255, 255, 255)),
            Tile::Left => ("<<", (255, 255, 255)),
            Tile::Right => (">>", (255, 255, 255)),
            Tile::Passed => ("##", (255, 255, 255)),
        };
        TileRepr { glyph, color }
    }

    /// Open space in the raw level.
    pub fn is_empty(self) -> bool {
        self == Tile::Empty
    }

    pub fn is_wall(self) -> bool {
        self == Tile::Wall
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.repr().glyph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rendering relies on every glyph having the same width.
    #[test]
    fn glyphs_are_two_chars_wide() {
        for tile in Tile::ALL {
            assert_eq!(tile.repr().glyph.chars().count(), 2, "{:?}", tile);
        }
    }

    #[test]
    fn only_empty_is_empty() {
        assert_eq!(Tile::ALL.iter().filter(|t| t.is_empty()).count(), 1);
        assert_eq!(Tile::ALL.iter().filter(|t| t.is_wall()).count(), 1);
    }
}
