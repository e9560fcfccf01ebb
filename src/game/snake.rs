use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// The cells are stored oldest first: the tail is at the front and the head
/// is at the back.  A snake always has at least one cell.  Cells may repeat,
/// since nothing stops the snake from crossing over itself.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    cells: VecDeque<Position>,
}

impl Snake {
    /// Create a snake from its cells, tail first.  Returns `None` if `cells`
    /// is empty.
    pub(super) fn new<I: IntoIterator<Item = Position>>(cells: I) -> Option<Snake> {
        let cells = VecDeque::from_iter(cells);
        (!cells.is_empty()).then_some(Snake { cells })
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        self.cells.back().copied().unwrap_or(Position::ORIGIN)
    }

    pub(super) fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether any segment of the snake occupies `pos`
    pub(super) fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Add a new head at `pos`
    pub(super) fn push_head(&mut self, pos: Position) {
        self.cells.push_back(pos);
    }

    /// Remove the tail cell.  The last remaining cell is never removed.
    pub(super) fn drop_tail(&mut self) {
        if self.cells.len() > 1 {
            let _ = self.cells.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Snake {
        Snake::new([
            Position::new(3, 3),
            Position::new(4, 3),
            Position::new(5, 3),
            Position::new(6, 3),
        ])
        .expect("sample snake should be nonempty")
    }

    #[test]
    fn empty_snake() {
        assert_eq!(Snake::new([]), None);
    }

    #[test]
    fn head_and_len() {
        let snake = sample();
        assert_eq!(snake.head(), Position::new(6, 3));
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn contains() {
        let snake = sample();
        assert!(snake.contains(Position::new(5, 3)));
        assert!(!snake.contains(Position::new(7, 3)));
        assert!(!snake.contains(Position::new(5, 4)));
    }

    #[test]
    fn push_then_drop_translates() {
        let mut snake = sample();
        snake.push_head(Position::new(7, 3));
        snake.drop_tail();
        let expected = Snake::new([
            Position::new(4, 3),
            Position::new(5, 3),
            Position::new(6, 3),
            Position::new(7, 3),
        ]);
        assert_eq!(Some(snake), expected);
    }

    #[test]
    fn drop_tail_keeps_last_cell() {
        let mut snake = Snake::new([Position::new(1, 2)]).expect("snake should be nonempty");
        snake.drop_tail();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(1, 2));
    }
}
