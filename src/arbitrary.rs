//! Random boards for property tests, and the properties themselves.

use quickcheck::{quickcheck, Arbitrary, Gen};

use crate::board::{Board, Coord, Move, Phase, Piece, CELL_COUNT, PIECES_PER_PLAYER};
use crate::engine::Engine;
use crate::eval::evaluate;
use crate::movegen::successors;
use crate::rules::{apply_opponent_move, terminal_value, winner};
use crate::search::{search, SearchConfig};

impl Arbitrary for Piece {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Piece::Red
        } else {
            Piece::Black
        }
    }
}

/// A board with at most four pieces of each color, so it is reachable in play
/// as far as piece counts go.
#[derive(Debug, Clone)]
pub struct PlayBoard(pub Board);

impl Arbitrary for PlayBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut board = Board::empty();
        for piece in [Piece::Black, Piece::Red] {
            let count = usize::arbitrary(g) % (PIECES_PER_PLAYER + 1);
            let mut placed = 0;
            while placed < count {
                let Some(at) = Coord::from_index(usize::arbitrary(g) % CELL_COUNT) else {
                    continue;
                };
                if board.is_empty_at(at) {
                    board.set(at, Some(piece));
                    placed += 1;
                }
            }
        }
        PlayBoard(board)
    }
}

/// Reference win check: looks for any four same-colored cells forming a
/// straight line of consecutive cells or a 2x2 square, by brute force.
fn has_win_brute_force(board: &Board) -> bool {
    const DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];
    for (start, cell) in board.cells() {
        let Some(piece) = cell else { continue };
        for (dr, dc) in DIRECTIONS {
            let mut run = 1;
            let mut at = start;
            while let Some(next) = at.offset(dr, dc) {
                if board.get(next) != Some(piece) {
                    break;
                }
                run += 1;
                at = next;
            }
            if run >= 4 {
                return true;
            }
        }
        let square = [(0, 1), (1, 0), (1, 1)];
        if square
            .iter()
            .all(|&(dr, dc)| start.offset(dr, dc).and_then(|c| board.get(c)) == Some(piece))
        {
            return true;
        }
    }
    false
}

fn cell_diff(a: &Board, b: &Board) -> Vec<Coord> {
    a.cells()
        .zip(b.cells())
        .filter(|((_, x), (_, y))| x != y)
        .map(|((at, _), _)| at)
        .collect()
}

quickcheck! {
    fn terminal_only_on_real_patterns(b: PlayBoard, me: Piece) -> bool {
        let board = b.0;
        let value = terminal_value(&board, me);
        let expected = has_win_brute_force(&board);
        (value != 0) == expected && value == -terminal_value(&board, me.opponent())
    }

    fn heuristic_strictly_inside_unit_interval(b: PlayBoard, me: Piece) -> bool {
        let board = b.0;
        if winner(&board).is_some() {
            return true;
        }
        let v = evaluate(&board, me);
        v > -1.0 && v < 1.0
    }

    fn drop_successors_fill_one_cell(b: PlayBoard, me: Piece) -> bool {
        let board = b.0;
        if board.phase() != Phase::Drop {
            return true;
        }
        let succ = successors(&board, me);
        succ.len() == CELL_COUNT - board.piece_count()
            && succ.iter().all(|s| {
                let diff = cell_diff(&board, s);
                diff.len() == 1 && s.get(diff[0]) == Some(me)
            })
    }

    fn move_successors_step_to_a_neighbor(b: PlayBoard, me: Piece) -> bool {
        let mut board = b.0;
        // Top the board up to the move phase.
        for piece in [Piece::Black, Piece::Red] {
            while board.count_of(piece) < PIECES_PER_PLAYER {
                let next = board.empty_cells().next();
                match next {
                    Some(at) => board.set(at, Some(piece)),
                    None => return true,
                }
            }
        }
        successors(&board, me).iter().all(|s| {
            let diff = cell_diff(&board, s);
            diff.len() == 2
                && diff[0].is_adjacent(diff[1])
                && diff.iter().all(|&at| board.get(at).or(s.get(at)) == Some(me))
                && s.count_of(me) == PIECES_PER_PLAYER
        })
    }

    fn translated_move_replays_every_successor(b: PlayBoard, me: Piece) -> bool {
        let board = b.0;
        successors(&board, me).iter().all(|s| {
            let Ok(mv) = Move::between(&board, s) else { return false };
            let mut replay = board;
            apply_opponent_move(&mut replay, mv, me).is_ok() && replay == *s
        })
    }
}

#[test]
fn engine_move_replays_through_opponent_applier() {
    let mut g = Gen::new(20);
    for _ in 0..10 {
        let PlayBoard(board) = PlayBoard::arbitrary(&mut g);
        if winner(&board).is_some() || board.piece_count() < 2 {
            continue;
        }
        let config = SearchConfig { depth: 2, pruning: false };
        let me = Piece::arbitrary(&mut g);
        let expected = search(&board, me, config).best;
        let mut engine = Engine::with_seed(me, 0).with_config(config);
        let Ok(mv) = engine.choose_move(&board) else {
            assert!(expected.is_none());
            continue;
        };
        let mut replay = board;
        apply_opponent_move(&mut replay, mv, me).unwrap();
        assert_eq!(Some(replay), expected);
    }
}
