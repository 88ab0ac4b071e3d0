use super::{CELL_COUNT, cell::CellState};

/// Three cell indices forming a row, column, or diagonal.
pub type Line = [usize; 3];

/// The eight winning lines.
pub const LINES: [Line; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Magic square assigning 1-9 to the cells so that every line sums to 15.
///
/// ```text
///  8 | 1 | 6
/// ---+---+---
///  3 | 5 | 7
/// ---+---+---
///  4 | 9 | 2
/// ```
pub const MAGIC_SQUARE: [u32; CELL_COUNT] = [8, 1, 6, 3, 5, 7, 4, 9, 2];

/// Line sum reached when all three cells hold `X`.
pub(crate) const X_WIN_SUM: u32 = 15;
/// Line sum reached when all three cells hold `O`.
pub(crate) const O_WIN_SUM: u32 = X_WIN_SUM * 2;

/// Weighted magic-square sum of one line.
///
/// Each cell contributes its magic value times [`CellState::weight`].
#[inline]
pub(crate) fn line_sum(cells: &[CellState; CELL_COUNT], line: Line) -> u32 {
    line.iter()
        .map(|&index| MAGIC_SQUARE[index] * cells[index].weight())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magic_square_is_permutation_of_one_to_nine() {
        let mut values = MAGIC_SQUARE;
        values.sort_unstable();
        assert_eq!(values, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_every_line_sums_to_fifteen() {
        for line in LINES {
            let sum: u32 = line.iter().map(|&i| MAGIC_SQUARE[i]).sum();
            assert_eq!(sum, 15, "line {line:?}");
        }
    }

    #[test]
    fn test_lines_are_distinct_triples() {
        for (i, a) in LINES.iter().enumerate() {
            assert!(a[0] != a[1] && a[1] != a[2] && a[0] != a[2]);
            assert!(a.iter().all(|&c| c < CELL_COUNT));
            for b in &LINES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_line_sum_weights() {
        let mut cells = [CellState::Blank; CELL_COUNT];
        assert_eq!(line_sum(&cells, LINES[0]), 0);

        cells[0] = CellState::X;
        cells[1] = CellState::X;
        cells[2] = CellState::X;
        assert_eq!(line_sum(&cells, LINES[0]), X_WIN_SUM);

        cells[0] = CellState::O;
        cells[1] = CellState::O;
        cells[2] = CellState::O;
        assert_eq!(line_sum(&cells, LINES[0]), O_WIN_SUM);

        // 8*2 + 1*1 + 6*0
        cells[1] = CellState::X;
        cells[2] = CellState::Blank;
        assert_eq!(line_sum(&cells, LINES[0]), 17);
    }
}
