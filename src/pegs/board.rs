//! Board representation and jump application

use super::Jump;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Peg,
    Hole,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Peg => 'P',
            Cell::Hole => 'H',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'P' | 'p' => Some(Cell::Peg),
            'H' | 'h' => Some(Cell::Hole),
            _ => None,
        }
    }
}

/// A peg board addressed by 1-based cell index.
/// Serialized as its `P`/`H` string, e.g. `"PPPPPPPPPPPPHPP"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// Full board with a single hole at `start_hole`
    pub fn new(cell_count: usize, start_hole: u8) -> Self {
        let cells = (1..=cell_count)
            .map(|cell| if cell == start_hole as usize { Cell::Hole } else { Cell::Peg })
            .collect();
        Self { cells }
    }

    /// Build a board from `P`/`H` symbols, ignoring whitespace
    pub fn parse(text: &str) -> Result<Self> {
        let mut cells = Vec::new();
        for (i, ch) in text.chars().filter(|c| !c.is_whitespace()).enumerate() {
            match Cell::from_symbol(ch) {
                Some(cell) => cells.push(cell),
                None => anyhow::bail!(
                    "Invalid character '{}' at cell {}. Only 'P' and 'H' are allowed",
                    ch,
                    i + 1
                ),
            }
        }
        if cells.is_empty() {
            anyhow::bail!("Board cannot be empty");
        }
        Ok(Self { cells })
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Cell at a 1-based index; anything off the board reads as a hole
    pub fn get(&self, cell: u8) -> Cell {
        match (cell as usize).checked_sub(1) {
            Some(idx) if idx < self.cells.len() => self.cells[idx],
            _ => Cell::Hole,
        }
    }

    pub fn is_peg(&self, cell: u8) -> bool {
        self.get(cell) == Cell::Peg
    }

    /// Whether a 1-based index addresses a cell of this board
    pub fn contains(&self, cell: u8) -> bool {
        cell >= 1 && cell as usize <= self.cells.len()
    }

    /// Peg on `from` and `over`, hole on `to`, all three on the board
    pub fn can_jump(&self, jump: &Jump) -> bool {
        self.contains(jump.to)
            && self.is_peg(jump.from)
            && self.is_peg(jump.over)
            && self.get(jump.to) == Cell::Hole
    }

    /// Apply a jump already checked with [`Board::can_jump`]
    pub fn apply(&mut self, jump: &Jump) {
        self.put(jump.from, Cell::Hole);
        self.put(jump.over, Cell::Hole);
        self.put(jump.to, Cell::Peg);
    }

    /// Reverse a jump previously applied with [`Board::apply`]
    pub fn undo(&mut self, jump: &Jump) {
        self.put(jump.from, Cell::Peg);
        self.put(jump.over, Cell::Peg);
        self.put(jump.to, Cell::Hole);
    }

    #[inline]
    fn put(&mut self, cell: u8, value: Cell) {
        self.cells[cell as usize - 1] = value;
    }

    pub fn peg_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Cell::Peg).count()
    }

    /// 1-based indices of every peg
    pub fn pegs(&self) -> Vec<u8> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Peg)
            .map(|(idx, _)| (idx + 1) as u8)
            .collect()
    }

    /// The remaining peg when exactly one is left
    pub fn last_peg(&self) -> Option<u8> {
        match self.pegs().as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl TryFrom<String> for Board {
    type Error = anyhow::Error;

    fn try_from(text: String) -> Result<Self> {
        Self::parse(&text)
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.symbol())?;
        }
        Ok(())
    }
}
