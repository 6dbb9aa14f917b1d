//! Board topology: row layout and the ordered table of legal jumps

use crate::error::PegError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A single jump: the peg on `from` hops over `over` and lands on `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Jump {
    pub from: u8,
    pub over: u8,
    pub to: u8,
}

impl Jump {
    pub const fn new(from: u8, over: u8, to: u8) -> Self {
        Self { from, over, to }
    }

    /// The same line travelled in the opposite direction
    pub fn reversed(&self) -> Self {
        Self::new(self.to, self.over, self.from)
    }
}

impl fmt::Display for Jump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Moved {} to {}, jumping over {}", self.from, self.to, self.over)
    }
}

/// Row lengths of the 15-hole triangle, top to bottom
pub const TRIANGLE_ROWS: [usize; 5] = [1, 2, 3, 4, 5];

/// Jump table for the 15-hole triangle.
/// Order is search priority and decides which solution is found first.
pub const TRIANGLE_JUMPS: [Jump; 36] = [
    Jump::new(1, 2, 4),
    Jump::new(1, 3, 6),
    Jump::new(2, 4, 7),
    Jump::new(2, 5, 9),
    Jump::new(3, 5, 8),
    Jump::new(3, 6, 10),
    Jump::new(4, 2, 1),
    Jump::new(4, 5, 6),
    Jump::new(4, 7, 11),
    Jump::new(4, 8, 13),
    Jump::new(5, 8, 12),
    Jump::new(5, 9, 14),
    Jump::new(6, 3, 1),
    Jump::new(6, 5, 4),
    Jump::new(6, 9, 13),
    Jump::new(6, 10, 15),
    Jump::new(7, 4, 2),
    Jump::new(7, 8, 9),
    Jump::new(8, 5, 3),
    Jump::new(8, 9, 10),
    Jump::new(9, 5, 2),
    Jump::new(9, 8, 7),
    Jump::new(10, 6, 3),
    Jump::new(10, 9, 8),
    Jump::new(11, 7, 4),
    Jump::new(11, 12, 13),
    Jump::new(12, 8, 5),
    Jump::new(12, 13, 14),
    Jump::new(13, 12, 11),
    Jump::new(13, 8, 4),
    Jump::new(13, 9, 6),
    Jump::new(13, 14, 15),
    Jump::new(14, 13, 12),
    Jump::new(14, 9, 5),
    Jump::new(15, 10, 6),
    Jump::new(15, 14, 13),
];

/// Row layout plus the ordered jump table of a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub rows: Vec<usize>,
    pub jumps: Vec<Jump>,
}

impl Default for Topology {
    fn default() -> Self {
        Self::triangle()
    }
}

impl Topology {
    /// The classic 15-hole triangular board
    pub fn triangle() -> Self {
        Self {
            rows: TRIANGLE_ROWS.to_vec(),
            jumps: TRIANGLE_JUMPS.to_vec(),
        }
    }

    /// Number of playable cells
    pub fn cell_count(&self) -> usize {
        self.rows.iter().sum()
    }

    /// Whether a cell index addresses a playable cell (1-based)
    pub fn contains_cell(&self, cell: i64) -> bool {
        cell >= 1 && cell <= self.cell_count() as i64
    }

    /// Whether the jump is an entry of this table
    pub fn contains_jump(&self, jump: &Jump) -> bool {
        self.jumps.contains(jump)
    }

    /// 1-based cell indices of each row, top to bottom
    pub fn row_cells(&self) -> Vec<Vec<u8>> {
        let mut next = 1usize;
        self.rows
            .iter()
            .map(|&len| {
                let row: Vec<u8> = (next..next + len).map(|cell| cell as u8).collect();
                next += len;
                row
            })
            .collect()
    }

    /// Check that the table only refers to cells of this board
    pub fn validate(&self) -> Result<(), PegError> {
        let cells = self.cell_count();
        if cells == 0 {
            return Err(PegError::InvalidConfiguration(
                "topology must have at least one cell".to_string(),
            ));
        }
        if cells > u8::MAX as usize {
            return Err(PegError::InvalidConfiguration(format!(
                "topology has {} cells, at most {} are supported",
                cells,
                u8::MAX
            )));
        }
        if self.rows.iter().any(|&len| len == 0) {
            return Err(PegError::InvalidConfiguration(
                "topology rows cannot be empty".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(self.jumps.len());
        for jump in &self.jumps {
            for cell in [jump.from, jump.over, jump.to] {
                if !self.contains_cell(cell as i64) {
                    return Err(PegError::InvalidConfiguration(format!(
                        "jump ({}, {}, {}) refers to cell {} outside 1..={}",
                        jump.from, jump.over, jump.to, cell, cells
                    )));
                }
            }
            if jump.from == jump.over || jump.over == jump.to || jump.from == jump.to {
                return Err(PegError::InvalidConfiguration(format!(
                    "jump ({}, {}, {}) must use three distinct cells",
                    jump.from, jump.over, jump.to
                )));
            }
            if !seen.insert(*jump) {
                return Err(PegError::InvalidConfiguration(format!(
                    "jump ({}, {}, {}) appears more than once",
                    jump.from, jump.over, jump.to
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every straight jump the triangle geometry allows, in no particular order
    fn derive_triangle_jumps(rows: usize) -> HashSet<Jump> {
        let index = |r: isize, c: isize| (r * (r + 1) / 2 + c + 1) as u8;
        let on_board = |r: isize, c: isize| r >= 0 && r < rows as isize && c >= 0 && c <= r;
        let directions = [(0, 1), (0, -1), (1, 0), (1, 1), (-1, 0), (-1, -1)];

        let mut jumps = HashSet::new();
        for r in 0..rows as isize {
            for c in 0..=r {
                for (dr, dc) in directions {
                    let (or, oc) = (r + dr, c + dc);
                    let (tr, tc) = (r + 2 * dr, c + 2 * dc);
                    if on_board(or, oc) && on_board(tr, tc) {
                        jumps.insert(Jump::new(index(r, c), index(or, oc), index(tr, tc)));
                    }
                }
            }
        }
        jumps
    }

    #[test]
    fn test_triangle_table_size() {
        let topology = Topology::triangle();
        assert_eq!(topology.cell_count(), 15);
        assert_eq!(topology.jumps.len(), 36);
        assert!(topology.validate().is_ok());
    }

    #[test]
    fn test_table_matches_geometry() {
        let table: HashSet<Jump> = TRIANGLE_JUMPS.iter().copied().collect();
        assert_eq!(table.len(), 36);
        assert_eq!(table, derive_triangle_jumps(5));
    }

    #[test]
    fn test_every_jump_has_reverse() {
        let topology = Topology::triangle();
        for jump in &topology.jumps {
            assert!(topology.contains_jump(&jump.reversed()), "missing reverse of {:?}", jump);
        }
    }

    #[test]
    fn test_jump_description() {
        assert_eq!(Jump::new(4, 8, 13).to_string(), "Moved 4 to 13, jumping over 8");
    }

    #[test]
    fn test_row_cells() {
        let rows = Topology::triangle().row_cells();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], vec![1]);
        assert_eq!(rows[3], vec![7, 8, 9, 10]);
        assert_eq!(rows[4], vec![11, 12, 13, 14, 15]);
    }

    #[test]
    fn test_validate_rejects_bad_tables() {
        let mut topology = Topology::triangle();
        topology.jumps.push(Jump::new(14, 15, 16));
        assert!(topology.validate().unwrap_err().is_invalid_configuration());

        let mut topology = Topology::triangle();
        topology.jumps.push(Jump::new(1, 1, 4));
        assert!(topology.validate().is_err());

        let mut topology = Topology::triangle();
        topology.jumps.push(Jump::new(1, 2, 4));
        assert!(topology.validate().is_err());

        let topology = Topology { rows: vec![], jumps: vec![] };
        assert!(topology.validate().is_err());
    }

    #[test]
    fn test_topology_yaml_round_trip() {
        let topology = Topology::triangle();
        let yaml = serde_yaml::to_string(&topology).unwrap();
        let parsed: Topology = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, topology);
    }
}
