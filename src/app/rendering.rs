use ggez::graphics::{Color, DrawMode, Mesh, MeshBuilder, Rect};
use ggez::{Context, GameResult};

use crate::app::palette::Palette;
use crate::apple::ApplePlacer;
use crate::basic::Cell;
use crate::snake::SnakeBody;

/// Anything that shows up on the board as a set of filled cells
pub trait DrawCells {
    fn cells(&self) -> Vec<Cell>;
    fn fill_color(&self, palette: &Palette) -> Color;
}

pub struct SnakeView<'a>(pub &'a SnakeBody);

impl DrawCells for SnakeView<'_> {
    fn cells(&self) -> Vec<Cell> {
        self.0.segments().iter().copied().collect()
    }

    fn fill_color(&self, palette: &Palette) -> Color {
        palette.snake_color
    }
}

pub struct AppleView<'a>(pub &'a ApplePlacer);

impl DrawCells for AppleView<'_> {
    fn cells(&self) -> Vec<Cell> {
        vec![self.0.pos()]
    }

    fn fill_color(&self, palette: &Palette) -> Color {
        palette.apple_color
    }
}

pub fn cell_rect(cell: Cell, cell_size: f32) -> Rect {
    Rect::new(
        cell.x as f32 * cell_size,
        cell.y as f32 * cell_size,
        cell_size,
        cell_size,
    )
}

/// One mesh with every item, later items are drawn on top
pub fn board_mesh(
    ctx: &Context,
    items: &[&dyn DrawCells],
    cell_size: f32,
    palette: &Palette,
    draw_border: bool,
) -> GameResult<Mesh> {
    let mut builder = MeshBuilder::new();
    for item in items {
        let fill = item.fill_color(palette);
        for cell in item.cells() {
            let rect = cell_rect(cell, cell_size);
            builder.rectangle(DrawMode::fill(), rect, fill)?;
            if draw_border {
                builder.rectangle(DrawMode::stroke(1.), rect, palette.border_color)?;
            }
        }
    }
    Ok(Mesh::from_data(ctx, builder.build()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::{BoardDim, Dir};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_cell_rect() {
        let rect = cell_rect(Cell { x: 3, y: 2 }, 20.);
        assert_eq!(rect, Rect::new(60., 40., 20., 20.));
    }

    #[test]
    fn test_views() {
        let board = BoardDim::new(8, 8).unwrap();
        let snake = SnakeBody::builder()
            .board_dim(board)
            .segments(vec![Cell { x: 1, y: 1 }, Cell { x: 1, y: 2 }])
            .dir(Dir::U)
            .build()
            .unwrap();
        let apple = ApplePlacer::new(board, snake.segments(), &mut StdRng::seed_from_u64(0)).unwrap();
        let palette = Palette::default();

        assert_eq!(SnakeView(&snake).cells(), vec![Cell { x: 1, y: 1 }, Cell { x: 1, y: 2 }]);
        assert_eq!(SnakeView(&snake).fill_color(&palette), palette.snake_color);
        assert_eq!(AppleView(&apple).cells(), vec![apple.pos()]);
        assert_eq!(AppleView(&apple).fill_color(&palette), palette.apple_color);
    }
}
