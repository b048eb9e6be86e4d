/*

Implements the exhaustive backtracking search over a board.

The steps are the following:
1- Find the first empty cell, scanning the rows from the top and each row
   from the left
2- Try every value from 1 up to the board's size in that cell
    Skip values that already occur in the cell's row, column or box
    Recurse with the value tentatively in place
    Take the value back out when the recursion fails
3- If no value is left to try, report failure to the caller, which takes
   back its own tentative value the same way
4- If no empty cell is left, the board is completely and validly assigned

*/

use crate::board::Board;

// Recursion depth is bounded by the number of empty cells. Every call
// re-scans for the first empty cell from the top of the grid.
pub(crate) fn brute_force(board: &mut Board) -> bool {
    let (row, col) = match board.first_empty() {
        Some(cell) => cell,
        None => return true,
    };

    for value in 1..=board.size() {
        if !board.is_valid_placement(row, col, value) {
            continue;
        }

        board.set(row, col, value);
        if brute_force(board) {
            return true;
        }
        // try the next value
        board.set(row, col, Board::EMPTY);
    }

    // none of the values worked
    false
}
