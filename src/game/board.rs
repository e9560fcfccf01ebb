use super::grid::Bounds;
use super::input::Intent;
use super::snake::Snake;
use crate::consts;
use rand::Rng;
use ratatui::layout::Position;

/// Everything on the board: the snake and the one piece of food
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Board {
    pub(super) bounds: Bounds,
    pub(super) snake: Snake,
    pub(super) food: Position,
}

impl Board {
    /// Create the board for a new game
    pub(super) fn new() -> Board {
        Board {
            bounds: Bounds::from(consts::GAME_SIZE),
            snake: Snake::new(consts::INITIAL_SNAKE).expect("INITIAL_SNAKE should be nonempty"),
            food: consts::INITIAL_FOOD,
        }
    }

    /// Advance the snake one cell according to `intent`.
    ///
    /// The head moves by `intent.delta()`, wrapping around at the edges.  If
    /// the new head lands on the food, the snake keeps its tail (growing by
    /// one cell) and new food is placed at a uniformly random cell.  The new
    /// food may land on the snake, and the snake may run over itself; neither
    /// ends the game.
    pub(super) fn step<R: Rng + ?Sized>(&mut self, intent: Intent, rng: &mut R) -> StepOutcome {
        if !intent.is_moving() {
            return StepOutcome::Idle;
        }
        let (dx, dy) = intent.delta();
        let head = self.bounds.offset(self.snake.head(), dx, dy);
        self.snake.push_head(head);
        if head == self.food {
            self.food = Position {
                x: rng.random_range(0..self.bounds.width),
                y: rng.random_range(0..self.bounds.height),
            };
            debug_assert!(self.bounds.contains(self.food), "food placed off the board");
            StepOutcome::Ate { head }
        } else {
            self.snake.drop_tail();
            StepOutcome::Moved { head }
        }
    }

    pub(super) fn is_snake(&self, pos: Position) -> bool {
        self.snake.contains(pos)
    }

    pub(super) fn is_food(&self, pos: Position) -> bool {
        self.food == pos
    }

    pub(super) fn is_snake_at(&self, index: usize) -> bool {
        self.bounds
            .position_at(index)
            .is_some_and(|pos| self.is_snake(pos))
    }

    pub(super) fn is_food_at(&self, index: usize) -> bool {
        self.bounds
            .position_at(index)
            .is_some_and(|pos| self.is_food(pos))
    }

    /// Decide what to draw in the cell with row-major index `index`.  The
    /// snake is drawn over the food, and empty cells alternate between two
    /// shades by index parity.
    pub(super) fn cell_kind(&self, index: usize) -> CellKind {
        if self.is_snake_at(index) {
            CellKind::Snake
        } else if self.is_food_at(index) {
            CellKind::Food
        } else {
            CellKind::Background {
                odd: index % 2 == 1,
            }
        }
    }

    pub(super) fn snake_len(&self) -> usize {
        self.snake.len()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum StepOutcome {
    /// The intent was zero, so nothing moved
    Idle,
    /// The snake moved to `head` without eating
    Moved { head: Position },
    /// The snake moved to `head` and ate the food there
    Ate { head: Position },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum CellKind {
    Snake,
    Food,
    Background { odd: bool },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    const RIGHT: Intent = Intent {
        horizontal: 1,
        vertical: 0,
    };

    fn snake<const N: usize>(cells: [(u16, u16); N]) -> Snake {
        Snake::new(cells.map(|(x, y)| Position::new(x, y))).expect("snake should be nonempty")
    }

    fn board(food: Position) -> Board {
        Board {
            food,
            ..Board::new()
        }
    }

    #[test]
    fn new_board() {
        let board = Board::new();
        assert_eq!(board.bounds, Bounds::from(consts::GAME_SIZE));
        assert_eq!(board.snake, snake([(3, 3), (4, 3), (5, 3), (6, 3)]));
        assert_eq!(board.food, Position::ORIGIN);
    }

    #[test]
    fn step_onto_food_grows() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut board = board(Position::new(7, 3));
        let outcome = board.step(RIGHT, &mut rng);
        assert_eq!(
            outcome,
            StepOutcome::Ate {
                head: Position::new(7, 3)
            }
        );
        assert_eq!(board.snake, snake([(3, 3), (4, 3), (5, 3), (6, 3), (7, 3)]));
        assert_eq!(board.snake_len(), 5);
        assert!(board.bounds.contains(board.food));
    }

    #[test]
    fn step_without_food_translates() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut board = board(Position::ORIGIN);
        let outcome = board.step(RIGHT, &mut rng);
        assert_eq!(
            outcome,
            StepOutcome::Moved {
                head: Position::new(7, 3)
            }
        );
        assert_eq!(board.snake, snake([(4, 3), (5, 3), (6, 3), (7, 3)]));
        assert_eq!(board.food, Position::ORIGIN);
    }

    #[test]
    fn step_with_no_intent_does_nothing() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut board = Board::new();
        let before = board.clone();
        assert_eq!(board.step(Intent::default(), &mut rng), StepOutcome::Idle);
        assert_eq!(board, before);
    }

    #[test]
    fn cancelling_intent_does_nothing() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut board = Board::new();
        let before = board.clone();
        let intent = Intent {
            horizontal: 1,
            vertical: 1,
        };
        assert_eq!(board.step(intent, &mut rng), StepOutcome::Idle);
        assert_eq!(board, before);
    }

    #[rstest]
    #[case((10, 5), RIGHT, (0, 5))]
    #[case((0, 5), Intent { horizontal: -1, vertical: 0 }, (10, 5))]
    #[case((4, 0), Intent { horizontal: 0, vertical: 1 }, (4, 10))]
    #[case((4, 10), Intent { horizontal: 0, vertical: -1 }, (4, 0))]
    #[case((4, 4), Intent { horizontal: 0, vertical: 1 }, (4, 3))]
    fn step_moves_and_wraps(
        #[case] head: (u16, u16),
        #[case] intent: Intent,
        #[case] new_head: (u16, u16),
    ) {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut board = Board {
            snake: snake([head]),
            ..board(Position::new(9, 9))
        };
        board.step(intent, &mut rng);
        assert_eq!(board.snake, snake([new_head]));
    }

    #[test]
    fn new_head_is_one_cell_away() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut board = Board::new();
        for intent in [
            RIGHT,
            Intent {
                horizontal: 0,
                vertical: 1,
            },
            Intent {
                horizontal: -1,
                vertical: 0,
            },
            Intent {
                horizontal: 0,
                vertical: -1,
            },
        ] {
            for _ in 0..15 {
                let old = board.snake.head();
                board.step(intent, &mut rng);
                let new = board.snake.head();
                let dx = old.x.abs_diff(new.x);
                let dy = old.y.abs_diff(new.y);
                assert!(
                    ((dx == 1 || dx == 10) && dy == 0) || (dx == 0 && (dy == 1 || dy == 10)),
                    "{old:?} -> {new:?} is not a single step"
                );
            }
        }
    }

    #[test]
    fn food_always_lands_on_board() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        for _ in 0..200 {
            let mut board = board(Position::new(7, 3));
            let before = board.snake_len();
            board.step(RIGHT, &mut rng);
            assert_eq!(board.snake_len(), before + 1);
            assert!(board.bounds.contains(board.food), "{:?} is off the board", board.food);
        }
    }

    #[test]
    fn snake_may_overlap_itself() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut board = Board {
            snake: snake([(2, 2), (3, 2), (3, 3), (2, 3), (1, 3)]),
            ..board(Position::new(9, 9))
        };
        let up = Intent {
            horizontal: 0,
            vertical: 1,
        };
        let down = Intent {
            horizontal: 0,
            vertical: -1,
        };
        board.step(up, &mut rng);
        board.step(RIGHT, &mut rng);
        let outcome = board.step(down, &mut rng);
        assert_eq!(
            outcome,
            StepOutcome::Moved {
                head: Position::new(2, 3)
            }
        );
        assert_eq!(board.snake, snake([(2, 3), (1, 3), (1, 2), (2, 2), (2, 3)]));
    }

    #[test]
    fn membership_queries() {
        let board = board(Position::new(7, 3));
        assert!(board.is_snake(Position::new(3, 3)));
        assert!(board.is_snake(Position::new(6, 3)));
        assert!(!board.is_snake(Position::new(7, 3)));
        assert!(board.is_food(Position::new(7, 3)));
        assert!(!board.is_food(Position::new(6, 3)));
        assert!(board.is_snake_at(36));
        assert!(!board.is_snake_at(40));
        assert!(board.is_food_at(40));
        assert!(!board.is_food_at(121));
    }

    #[rstest]
    #[case(36, CellKind::Snake)]
    #[case(40, CellKind::Food)]
    #[case(0, CellKind::Background { odd: false })]
    #[case(1, CellKind::Background { odd: true })]
    #[case(120, CellKind::Background { odd: false })]
    fn test_cell_kind(#[case] index: usize, #[case] kind: CellKind) {
        let board = board(Position::new(7, 3));
        assert_eq!(board.cell_kind(index), kind);
    }

    #[test]
    fn snake_drawn_over_food() {
        let board = board(Position::new(5, 3));
        assert_eq!(board.cell_kind(38), CellKind::Snake);
    }
}
