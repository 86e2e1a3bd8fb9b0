use std::fmt;
use std::str::FromStr;

use super::error::InvalidMove;
use super::types::{Cell, Mark, CELL_COUNT};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn count_of(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.mark() == Some(mark))
            .count()
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), InvalidMove> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(InvalidMove::OutOfRange(index))?;

        if !cell.is_empty() {
            return Err(InvalidMove::CellOccupied(index));
        }

        *cell = Cell::Occupied(mark);
        Ok(())
    }

    pub fn undo(&mut self, index: usize) {
        let cell = &mut self.cells[index];
        assert!(!cell.is_empty(), "undo of empty cell {}", index);
        *cell = Cell::Empty;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(3) {
            for cell in row {
                write!(f, "{}", cell.symbol().unwrap_or('.'))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut count = 0;

        for symbol in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            if count >= CELL_COUNT {
                return Err(format!("Board has more than {} cells", CELL_COUNT));
            }
            cells[count] = match symbol {
                '.' | '_' => Cell::Empty,
                other => Cell::Occupied(
                    Mark::from_symbol(other)
                        .ok_or_else(|| format!("Unknown cell symbol '{}'", other))?,
                ),
            };
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(format!("Board needs {} cells, got {}", CELL_COUNT, count));
        }

        Ok(Self { cells })
    }
}
