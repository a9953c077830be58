//! Flood fill over a flat `dim * dim` cell array.

use std::collections::VecDeque;

use arrayvec::ArrayVec;

use crate::stone::Stone;

/// Side length implied by a square cell array.
pub(crate) fn side(cells: &[Stone]) -> usize {
    cells.len().isqrt()
}

/// The 4-connected neighbors of `index` that are on the board.
pub fn neighbors(index: usize, dim: usize) -> ArrayVec<usize, 4> {
    let mut result = ArrayVec::new();
    if dim == 0 || index >= dim * dim {
        return result;
    }
    let (row, col) = (index / dim, index % dim);
    if row > 0 {
        result.push(index - dim);
    }
    if row + 1 < dim {
        result.push(index + dim);
    }
    if col > 0 {
        result.push(index - 1);
    }
    if col + 1 < dim {
        result.push(index + 1);
    }
    result
}

/// Breadth-first search for every cell 4-connected to `start` through
/// cells of the same color as `start`. `cells` must be square.
///
/// The result holds each member once, in visit order, starting with
/// `start`. An out-of-range `start` yields an empty chain.
pub fn chain(start: usize, cells: &[Stone]) -> Vec<usize> {
    let dim = side(cells);
    if start >= dim * dim {
        return Vec::new();
    }

    let target = cells[start];
    let mut visited = vec![false; cells.len()];
    let mut queue = VecDeque::from([start]);
    let mut result = vec![start];
    visited[start] = true;

    while let Some(current) = queue.pop_front() {
        for next in neighbors(current, dim) {
            if !visited[next] && cells[next] == target {
                visited[next] = true;
                queue.push_back(next);
                result.push(next);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_from_layout(layout: &[&str]) -> Vec<Stone> {
        layout
            .iter()
            .flat_map(|row| row.chars())
            .map(|c| match c {
                'B' => Stone::Black,
                'W' => Stone::White,
                _ => Stone::Empty,
            })
            .collect()
    }

    fn sorted(mut v: Vec<usize>) -> Vec<usize> {
        v.sort_unstable();
        v
    }

    #[test]
    fn corner_neighbors() {
        assert_eq!(sorted(neighbors(0, 3).to_vec()), vec![1, 3]);
        assert_eq!(sorted(neighbors(8, 3).to_vec()), vec![5, 7]);
    }

    #[test]
    fn center_neighbors() {
        assert_eq!(sorted(neighbors(4, 3).to_vec()), vec![1, 3, 5, 7]);
    }

    #[test]
    fn no_wraparound_between_rows() {
        // index 2 is the end of row 0; index 3 starts row 1
        assert!(!neighbors(2, 3).contains(&3));
        assert!(!neighbors(3, 3).contains(&2));
    }

    #[test]
    fn off_board_has_no_neighbors() {
        assert!(neighbors(9, 3).is_empty());
        assert!(neighbors(0, 0).is_empty());
    }

    #[test]
    fn single_stone_chain() {
        let cells = cells_from_layout(&["+++", "+B+", "+++"]);
        assert_eq!(chain(4, &cells), vec![4]);
    }

    #[test]
    fn follows_same_color_only() {
        let cells = cells_from_layout(&["BB+", "WB+", "+BW"]);
        assert_eq!(sorted(chain(0, &cells)), vec![0, 1, 4, 7]);
        assert_eq!(chain(3, &cells), vec![3]);
        assert_eq!(chain(8, &cells), vec![8]);
    }

    #[test]
    fn does_not_wrap_across_row_end() {
        let cells = cells_from_layout(&["++B", "B++", "+++"]);
        assert_eq!(chain(2, &cells), vec![2]);
        assert_eq!(chain(3, &cells), vec![3]);
    }

    #[test]
    fn empty_region_chain() {
        let cells = cells_from_layout(&["+B+", "BB+", "+++"]);
        assert_eq!(chain(0, &cells), vec![0]);
        assert_eq!(sorted(chain(2, &cells)), vec![2, 5, 6, 7, 8]);
    }

    #[test]
    fn whole_empty_board_is_one_chain() {
        let cells = vec![Stone::Empty; 16];
        assert_eq!(chain(5, &cells).len(), 16);
    }

    #[test]
    fn leaves_cells_untouched() {
        let cells = cells_from_layout(&["BW+", "BW+", "+++"]);
        let before = cells.clone();
        let _ = chain(0, &cells);
        assert_eq!(cells, before);
    }

    #[test]
    fn out_of_range_start() {
        let cells = vec![Stone::Empty; 9];
        assert!(chain(9, &cells).is_empty());
    }
}
