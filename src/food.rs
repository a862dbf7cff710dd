use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Picks a free cell uniformly at random.
///
/// Returns `None` when the snake covers every cell of the board.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    let mut candidates = Vec::with_capacity(bounds.total_cells().saturating_sub(snake.len()));

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::spawn_position;

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 2, y: 0 },
            ],
            Direction::Left,
        );
        let bounds = GridSize {
            width: 8,
            height: 6,
        };

        for _ in 0..100 {
            let food = spawn_position(&mut rng, bounds, &snake).expect("board has free cells");
            assert!(!snake.occupies(food));
            assert!(food.is_within_bounds(bounds));
        }
    }

    #[test]
    fn only_free_cell_is_always_chosen() {
        let mut rng = StdRng::seed_from_u64(11);
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 1, y: 1 },
            ],
            Direction::Down,
        );
        let bounds = GridSize {
            width: 2,
            height: 2,
        };

        for _ in 0..10 {
            assert_eq!(
                spawn_position(&mut rng, bounds, &snake),
                Some(Position { x: 0, y: 1 })
            );
        }
    }

    #[test]
    fn full_board_has_no_food_cell() {
        let mut rng = StdRng::seed_from_u64(3);
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 1, y: 1 },
                Position { x: 0, y: 1 },
            ],
            Direction::Up,
        );
        let bounds = GridSize {
            width: 2,
            height: 2,
        };

        assert_eq!(spawn_position(&mut rng, bounds, &snake), None);
    }

    #[test]
    fn selection_reaches_every_free_cell() {
        let mut rng = StdRng::seed_from_u64(19);
        let snake = Snake::new(Position { x: 2, y: 0 }, 3, Direction::Right);
        let bounds = GridSize {
            width: 3,
            height: 2,
        };

        let seen: HashSet<_> = (0..200)
            .filter_map(|_| spawn_position(&mut rng, bounds, &snake))
            .collect();

        assert_eq!(seen.len(), 3);
    }
}
