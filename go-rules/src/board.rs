use std::fmt;

use crate::chain;
use crate::stone::Stone;

const DELIM: &str = "      ";

/// A square Go board stored as a flat array, `index = row * dim + col`.
///
/// Equality is by value: two boards are equal when they have the same
/// dimension and the same stone on every intersection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    dim: usize,
    cells: Vec<Stone>,
}

impl Default for Board {
    fn default() -> Self {
        Board::new(Board::DEFAULT_DIM)
    }
}

impl Board {
    pub const DEFAULT_DIM: usize = 9;

    /// Create an empty `dim` x `dim` board.
    pub fn new(dim: usize) -> Self {
        Board {
            dim,
            cells: vec![Stone::Empty; dim * dim],
        }
    }

    /// Create a board from an existing square cell array.
    pub fn from_cells(cells: Vec<Stone>) -> Self {
        let dim = chain::side(&cells);
        assert!(dim * dim == cells.len(), "malformed board: not square");
        Board { dim, cells }
    }

    /// Build a board from text rows. `X`/`B` is Black, `O`/`W` is White,
    /// anything else is an empty intersection.
    pub fn from_layout(layout: &[&str]) -> Self {
        let dim = layout.len();
        assert!(
            layout.iter().all(|row| row.chars().count() == dim),
            "malformed board layout"
        );

        let cells = layout
            .iter()
            .flat_map(|row| row.chars())
            .map(|c| match c {
                'X' | 'B' => Stone::Black,
                'O' | 'W' => Stone::White,
                _ => Stone::Empty,
            })
            .collect();

        Board { dim, cells }
    }

    // -- Accessors --

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn cells(&self) -> &[Stone] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when no stone of either color is on the board.
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.dim + col
    }

    pub fn row_col(&self, index: usize) -> (usize, usize) {
        (index / self.dim, index % self.dim)
    }

    pub fn is_field(&self, index: usize) -> bool {
        index < self.cells.len()
    }

    pub fn is_field_at(&self, row: usize, col: usize) -> bool {
        row < self.dim && col < self.dim
    }

    /// False for off-board indices.
    pub fn is_empty(&self, index: usize) -> bool {
        self.stone_at(index) == Some(Stone::Empty)
    }

    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.is_field_at(row, col) && self.is_empty(self.index(row, col))
    }

    pub fn stone_at(&self, index: usize) -> Option<Stone> {
        self.cells.get(index).copied()
    }

    pub fn stone_at_rc(&self, row: usize, col: usize) -> Option<Stone> {
        if self.is_field_at(row, col) {
            self.stone_at(self.index(row, col))
        } else {
            None
        }
    }

    /// Number of stones of `color` on the board.
    pub fn stones(&self, color: Stone) -> usize {
        self.cells.iter().filter(|&&s| s == color).count()
    }

    // -- Mutation --

    /// Put `stone` on `index` if that intersection exists and is empty.
    /// Occupied or off-board targets are left untouched.
    pub fn set_field(&mut self, index: usize, stone: Stone) {
        if self.is_empty(index) {
            self.cells[index] = stone;
        }
    }

    pub fn set_field_at(&mut self, row: usize, col: usize, stone: Stone) {
        if self.is_field_at(row, col) {
            self.set_field(self.index(row, col), stone);
        }
    }

    /// Clear every intersection.
    pub fn reset(&mut self) {
        self.cells.fill(Stone::Empty);
    }

    // -- Chains --

    /// Every maximal connected chain of `color` (use `Stone::Empty` for
    /// empty regions). Order of the returned chains is unspecified.
    pub fn stone_chains(&self, color: Stone) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.cells.len()];
        let mut chains = Vec::new();

        for start in 0..self.cells.len() {
            if visited[start] || self.cells[start] != color {
                continue;
            }
            let found = chain::chain(start, &self.cells);
            for &i in &found {
                visited[i] = true;
            }
            chains.push(found);
        }

        chains
    }

    /// Empty intersections adjacent to any member of `chain`, each listed once.
    pub fn liberties(&self, chain: &[usize]) -> Vec<usize> {
        let mut seen = vec![false; self.cells.len()];
        let mut libs = Vec::new();
        for &p in chain {
            for n in chain::neighbors(p, self.dim) {
                if !seen[n] && self.cells[n] == Stone::Empty {
                    seen[n] = true;
                    libs.push(n);
                }
            }
        }
        libs
    }

    /// The color that encloses `chain`.
    ///
    /// Looks at every stone adjacent to the chain that differs from the
    /// chain's own color. If they are all one color, that color owns the
    /// chain; a mixed or missing border yields `Stone::Empty`.
    pub fn owner(&self, chain: &[usize]) -> Stone {
        // bit 0 = Black seen, bit 1 = White seen
        let mut border_colors: u8 = 0;
        for &p in chain {
            let own = self.cells[p];
            for n in chain::neighbors(p, self.dim) {
                match self.cells[n] {
                    s if s == own => {}
                    Stone::Black => border_colors |= 1,
                    Stone::White => border_colors |= 2,
                    Stone::Empty => {}
                }
            }
        }

        match border_colors {
            1 => Stone::Black,
            2 => Stone::White,
            _ => Stone::Empty,
        }
    }

    // -- Scoring --

    /// Area score: stones of `color` plus every empty region owned by `color`.
    /// A board with no stones at all is neutral and scores zero territory.
    pub fn score(&self, color: Stone) -> usize {
        self.stones(color) + self.territory(color)
    }

    fn territory(&self, color: Stone) -> usize {
        let regions = self.stone_chains(Stone::Empty);
        if matches!(regions.as_slice(), [whole] if whole.len() == self.cells.len()) {
            return 0;
        }

        regions
            .iter()
            .filter(|region| self.owner(region) == color)
            .map(Vec::len)
            .sum()
    }

    // -- Captures --

    /// Remove every chain of `color` left without liberties.
    /// Returns whether anything was removed.
    pub fn calculate_captures(&mut self, color: Stone) -> bool {
        let mut captured = false;
        for chain in self.stone_chains(color) {
            if !self.liberties(&chain).is_empty() {
                continue;
            }
            tracing::trace!(color = color.name(), stones = chain.len(), "captured chain");
            for &i in &chain {
                self.cells[i] = Stone::Empty;
            }
            captured = true;
        }
        captured
    }

    /// Place `stone` on `index`, then resolve captures of the opponent
    /// followed by the mover's own (suicide) captures.
    pub(crate) fn play(&mut self, index: usize, stone: Stone) {
        self.set_field(index, stone);
        self.calculate_captures(stone.other());
        self.calculate_captures(stone);
    }

    // -- Rendering --

    fn intersection_line(&self, row: usize) -> String {
        let start = row * self.dim;
        self.cells[start..start + self.dim]
            .iter()
            .map(|s| s.symbol().to_string())
            .collect::<Vec<_>>()
            .join("----")
    }

    fn number_line(&self, row: usize) -> String {
        let start = row * self.dim;
        let mut line = String::new();
        for i in start..start + self.dim - 1 {
            line.push_str(&format!("{i:-<5}"));
        }
        line.push_str(&(start + self.dim - 1).to_string());
        line
    }

    fn box_line(&self) -> String {
        format!("{}|", "|    ".repeat(self.dim - 1))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dim {
            if row > 0 {
                writeln!(f, "{}{DELIM}{}", self.box_line(), self.box_line())?;
            }
            writeln!(
                f,
                "{}{DELIM}{}",
                self.intersection_line(row),
                self.number_line(row)
            )?;
        }
        Ok(())
    }
}
