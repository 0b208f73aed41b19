use std::fmt;

use desmina_core::{BoardEngine, Coord};

/// Text view of the visible board, with column and row index headers.
pub struct BoardDisplay<'a> {
    engine: &'a BoardEngine,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(engine: &'a BoardEngine) -> Self {
        Self { engine }
    }
}

impl fmt::Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.engine.board_size();
        let width = decimal_width(size.saturating_sub(1));

        write!(f, "{:width$}  ", "")?;
        for col in 0..size {
            write!(f, " {col:>width$}")?;
        }
        writeln!(f)?;

        for row in 0..size {
            write!(f, "{row:>width$} |")?;
            for col in 0..size {
                write!(f, " {:>width$}", self.engine.visible_value((row, col)))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

fn decimal_width(value: Coord) -> usize {
    match value {
        0..=9 => 1,
        10..=99 => 2,
        _ => 3,
    }
}
