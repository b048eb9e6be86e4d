use nsudoku::Board;

fn load(size: u8, rows: &[&[u8]]) -> Board {
    let mut board = Board::new(size).expect("side length is a perfect square");
    for (row, values) in rows.iter().enumerate() {
        board
            .place_row(row as u8, values)
            .expect("row of clues fits the board");
    }
    board
}

fn main() {
    let small = load(4, &[&[1, 2, 0, 0], &[0, 0, 0, 2], &[0, 0, 4, 0], &[0, 3, 0, 0]]);
    match small.solution() {
        Some(solution) => println!("{}", solution),
        None => println!("no solution"),
    }

    let regular = load(
        9,
        &[
            &[6, 9, 0, 0, 2, 0, 3, 8, 0],
            &[0, 0, 2, 6, 0, 0, 4, 7, 9],
            &[0, 4, 3, 9, 1, 7, 0, 0, 0],
            &[2, 1, 8, 0, 6, 0, 0, 0, 3],
            &[9, 0, 0, 1, 7, 4, 0, 0, 6],
            &[7, 0, 0, 0, 8, 0, 9, 1, 5],
            &[0, 0, 0, 8, 9, 1, 2, 5, 0],
            &[5, 2, 1, 0, 0, 3, 6, 0, 0],
            &[0, 8, 9, 0, 5, 0, 0, 3, 7],
        ],
    );
    match regular.solution() {
        Some(solution) => println!("{}", solution),
        None => println!("no solution"),
    }
}
