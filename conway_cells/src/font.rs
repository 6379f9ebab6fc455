// font.rs - Stencils used to seed the grid (clock digits and starting shapes)

/// A fixed 0/1 stencil, stored row-major.
#[derive(Debug, PartialEq, Eq)]
pub struct Font {
    pub name: &'static str,
    pub height: u16,
    pub width: u16,
    pub data: &'static [u8],
}

impl Font {
    /// Whether the stencil marks (row, col) alive. Out-of-stencil reads are dead.
    pub fn is_set(&self, row: u16, col: u16) -> bool {
        if row >= self.height || col >= self.width {
            return false;
        }
        self.data[(row as usize) * (self.width as usize) + col as usize] != 0
    }

    /// Number of alive cells in the stencil.
    pub fn population(&self) -> usize {
        self.data.iter().filter(|&&bit| bit != 0).count()
    }
}

pub const DIGIT_HEIGHT: u16 = 7;
pub const DIGIT_WIDTH: u16 = 3;

const fn digit_font(name: &'static str, data: &'static [u8]) -> Font {
    Font { name, height: DIGIT_HEIGHT, width: DIGIT_WIDTH, data }
}

pub const DIGITS: [Font; 10] = [
    digit_font("0", &[
        1,1,1,
        1,0,1,
        1,0,1,
        1,0,1,
        1,0,1,
        1,0,1,
        1,1,1,
    ]),
    digit_font("1", &[
        1,1,0,
        0,1,0,
        0,1,0,
        0,1,0,
        0,1,0,
        0,1,0,
        1,1,1,
    ]),
    digit_font("2", &[
        1,1,1,
        0,0,1,
        0,0,1,
        1,1,1,
        1,0,0,
        1,0,0,
        1,1,1,
    ]),
    digit_font("3", &[
        1,1,1,
        0,0,1,
        0,0,1,
        1,1,1,
        0,0,1,
        0,0,1,
        1,1,1,
    ]),
    digit_font("4", &[
        1,0,1,
        1,0,1,
        1,0,1,
        1,1,1,
        0,0,1,
        0,0,1,
        0,0,1,
    ]),
    digit_font("5", &[
        1,1,1,
        1,0,0,
        1,0,0,
        1,1,1,
        0,0,1,
        0,0,1,
        1,1,1,
    ]),
    digit_font("6", &[
        1,1,1,
        1,0,0,
        1,0,0,
        1,1,1,
        1,0,1,
        1,0,1,
        1,1,1,
    ]),
    digit_font("7", &[
        1,1,1,
        0,0,1,
        0,0,1,
        0,1,0,
        0,1,0,
        0,1,0,
        0,1,0,
    ]),
    digit_font("8", &[
        1,1,1,
        1,0,1,
        1,0,1,
        1,1,1,
        1,0,1,
        1,0,1,
        1,1,1,
    ]),
    digit_font("9", &[
        1,1,1,
        1,0,1,
        1,0,1,
        1,1,1,
        0,0,1,
        0,0,1,
        1,1,1,
    ]),
];

/// Stencil for a decimal digit, `None` past 9.
pub fn digit(n: u8) -> Option<&'static Font> {
    DIGITS.get(n as usize)
}

// Gliders are named after the heading they travel in.
pub const GLIDER_SE: Font = Font {
    name: "Glider (SE)", height: 3, width: 3,
    data: &[
        0,1,0,
        0,0,1,
        1,1,1,
    ],
};

pub const GLIDER_SW: Font = Font {
    name: "Glider (SW)", height: 3, width: 3,
    data: &[
        0,1,0,
        1,0,0,
        1,1,1,
    ],
};

pub const GLIDER_NE: Font = Font {
    name: "Glider (NE)", height: 3, width: 3,
    data: &[
        1,1,1,
        0,0,1,
        0,1,0,
    ],
};

pub const GLIDER_NW: Font = Font {
    name: "Glider (NW)", height: 3, width: 3,
    data: &[
        1,1,1,
        1,0,0,
        0,1,0,
    ],
};

// Spaceships all head east.
pub const LWSS: Font = Font {
    name: "Lightweight spaceship", height: 4, width: 5,
    data: &[
        1,0,0,1,0,
        0,0,0,0,1,
        1,0,0,0,1,
        0,1,1,1,1,
    ],
};

pub const MWSS: Font = Font {
    name: "Middleweight spaceship", height: 5, width: 6,
    data: &[
        0,0,1,0,0,0,
        1,0,0,0,1,0,
        0,0,0,0,0,1,
        1,0,0,0,0,1,
        0,1,1,1,1,1,
    ],
};

pub const HWSS: Font = Font {
    name: "Heavyweight spaceship", height: 5, width: 7,
    data: &[
        0,0,1,1,0,0,0,
        1,0,0,0,0,1,0,
        0,0,0,0,0,0,1,
        1,0,0,0,0,0,1,
        0,1,1,1,1,1,1,
    ],
};

pub const SPACESHIPS: [&Font; 3] = [&LWSS, &MWSS, &HWSS];

pub const R_PENTOMINO: Font = Font {
    name: "R-pentomino", height: 3, width: 3,
    data: &[
        0,1,1,
        1,1,0,
        0,1,0,
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stencils_match_their_dimensions() {
        let all = DIGITS.iter()
            .chain([&GLIDER_SE, &GLIDER_SW, &GLIDER_NE, &GLIDER_NW, &R_PENTOMINO])
            .chain(SPACESHIPS);
        for font in all {
            assert_eq!(font.data.len(), (font.height * font.width) as usize, "{}", font.name);
            assert!(font.data.iter().all(|&bit| bit <= 1), "{}", font.name);
        }
    }

    #[test]
    fn gliders_and_pentomino_have_five_cells() {
        for font in [&GLIDER_SE, &GLIDER_SW, &GLIDER_NE, &GLIDER_NW, &R_PENTOMINO] {
            assert_eq!(font.population(), 5, "{}", font.name);
        }
        assert_eq!(LWSS.population(), 9);
        assert_eq!(MWSS.population(), 11);
        assert_eq!(HWSS.population(), 13);
    }

    #[test]
    fn digit_lookup_stops_at_nine() {
        assert_eq!(digit(8).map(|f| f.name), Some("8"));
        assert!(digit(10).is_none());
    }

    #[test]
    fn is_set_outside_stencil_is_dead() {
        assert!(GLIDER_SE.is_set(0, 1));
        assert!(!GLIDER_SE.is_set(0, 3));
        assert!(!GLIDER_SE.is_set(3, 0));
    }
}
