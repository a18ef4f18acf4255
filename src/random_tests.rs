use crate::Board;
use crate::sudoku::SudokuSolver;

use rand::Rng;
use rand::rngs::ThreadRng;

fn blank_random_cells(board: &Board, count: usize, rng: &mut ThreadRng)
        -> Board {
    let size = board.size();
    let mut result = board.clone();

    for _ in 0..count {
        let column = rng.gen_range(0..size);
        let row = rng.gen_range(0..size);
        result.clear_cell(column, row).unwrap();
    }

    result
}

/// Blanks `blanked` random cells of the given full grid and re-solves the
/// resulting puzzle. If the puzzle still has a unique solution, it must be
/// the original grid; otherwise every solution must be a full extension of
/// the puzzle.
fn test_round_trip(solver: &mut SudokuSolver, full: &Board, blanked: usize,
        rng: &mut ThreadRng) {
    let puzzle = blank_random_cells(full, blanked, rng);
    let solutions = solver.solve(&puzzle, Some(2)).unwrap();

    assert!(!solutions.is_empty(),
        "blanking cells made the puzzle unsolvable");

    if solutions.len() == 1 {
        assert_eq!(full, &solutions[0]);
    }
    else {
        for solution in &solutions {
            assert!(solution.is_full());
            assert!(solution.is_superset(&puzzle).unwrap());
        }
    }
}

#[test]
fn blanked_4x4_grids_round_trip() {
    let mut solver = SudokuSolver::new(4).unwrap();
    let full = Board::parse("4;\
        1,2,3,4,\
        3,4,1,2,\
        2,1,4,3,\
        4,3,2,1").unwrap();
    let mut rng = rand::thread_rng();

    for _ in 0..20 {
        test_round_trip(&mut solver, &full, 6, &mut rng);
    }
}

#[test]
fn blanked_9x9_grids_round_trip() {
    let mut solver = SudokuSolver::new(9).unwrap();
    let full = Board::parse("9;\
        7,4,6,2,8,1,3,5,9,\
        9,1,2,5,3,7,8,4,6,\
        8,5,3,4,9,6,1,7,2,\
        3,7,4,1,2,5,6,9,8,\
        6,2,8,7,4,9,5,1,3,\
        5,9,1,3,6,8,7,2,4,\
        1,6,9,8,7,4,2,3,5,\
        2,8,5,9,1,3,4,6,7,\
        4,3,7,6,5,2,9,8,1").unwrap();
    let mut rng = rand::thread_rng();

    for _ in 0..10 {
        test_round_trip(&mut solver, &full, 40, &mut rng);
    }
}

#[test]
fn fully_specified_grids_always_round_trip() {
    let mut solver = SudokuSolver::new(9).unwrap();
    let full = Board::parse("9;\
        8,1,2,7,5,3,6,4,9,\
        9,4,3,6,8,2,1,7,5,\
        6,7,5,4,9,1,2,8,3,\
        1,5,4,2,3,7,8,9,6,\
        3,6,9,8,4,5,7,2,1,\
        2,8,7,1,6,9,5,3,4,\
        5,2,1,9,7,4,3,6,8,\
        4,3,8,5,2,6,9,1,7,\
        7,9,6,3,1,8,4,5,2").unwrap();

    assert_eq!(Some(full.clone()), solver.solve_first(&full).unwrap());
}
