//! Rendering of solved mazes, as plain text and as an interactive terminal view.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{grid::Grid, types::Coordinate, App};

/// Returns the rows of `grid` with every cell on `path` replaced by `marker`.
///
/// Coordinates outside the grid are skipped.
pub(crate) fn overlay_path(grid: &Grid<char>, path: &[Coordinate], marker: char) -> Vec<String> {
    let mut rows: Vec<Vec<char>> = grid.rows().map(<[char]>::to_vec).collect();

    for coordinate in path {
        if let Some(cell) = rows
            .get_mut(coordinate.y)
            .and_then(|row| row.get_mut(coordinate.x))
        {
            *cell = marker;
        }
    }

    rows.into_iter()
        .map(|row| row.into_iter().collect())
        .collect()
}

/// Transforms grid coordinates to canvas coordinates centred on the origin.
///
/// This function converts grid coordinates (column, row) to screen coordinates (x, y) with the
/// formulas y = (rows - 1) / 2 - row, so row 0 ends up at the top, and x = column - (cols - 1) / 2.
///
/// # Errors
///
/// This function fails if a grid dimension or coordinate does not fit in a terminal dimension.
pub(crate) fn to_screen_coords<T>(
    coords: &[Coordinate],
    grid: &Grid<T>,
) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(grid.height())?);
    let cols_n = f64::from(u16::try_from(grid.width())?);

    coords
        .iter()
        .map(|coordinate| {
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(coordinate.y)?);
            let screen_x = f64::from(u16::try_from(coordinate.x)?) - (cols_n - 1.) / 2.;

            Ok((screen_x, screen_y))
        })
        .collect()
}

/// Renders the solved maze with its path, plus a tooltip with the result and the quit key.
///
/// Walls are drawn green and path cells red, one canvas point per maze cell, centred in the
/// frame.
///
/// # Errors
///
/// This function may return errors from layout lookups or coordinate conversion, for instance when
/// the maze is larger than a terminal can address.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    frame.render_widget(Clear, frame.area());

    let maze_rows = u16::try_from(app.grid.height())?;
    let maze_columns = u16::try_from(app.grid.width())?;

    // Maze area on top, tooltip block at the bottom
    let overall_layout =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(frame.area());

    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let tooltip_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    let maze_area = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(maze_rows),
        Constraint::Min(1),
    ])
    .split(maze_content_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze area from layout")?;

    let space = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(maze_columns),
        Constraint::Min(1),
    ])
    .split(maze_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze space from horizontal layout")?;

    // Pre-compute screen coordinates to handle errors before the paint closure
    let walls: Vec<Coordinate> = app.grid.positions(|&cell| cell == app.wall).collect();
    let wall_screen_coords = to_screen_coords(&walls, &app.grid)?;
    let path_screen_coords = to_screen_coords(&app.path, &app.grid)?;

    let maze = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(Marker::Dot)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &wall_screen_coords,
                color: Color::Green,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &path_screen_coords,
                color: Color::Red,
            });
        });

    frame.render_widget(maze, space);

    let tooltip_block = Block::bordered()
        .title(format!("{} / (q) quit", app.summary()))
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, tooltip_area);

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;
    use ratatui::{backend::TestBackend, buffer::Cell, Terminal};

    use super::*;
    use crate::Cli;

    /// Builds an application from command-line arguments.
    fn create_test_app(args: &[&str]) -> App {
        let cli = Cli::try_parse_from(args).expect("test arguments should parse");
        App::new(&cli).expect("test maze should solve")
    }

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    /// Draws `app` into a fresh test terminal and returns the rendered symbols.
    fn render(app: &App) -> String {
        let mut terminal = create_test_terminal();

        let _ = terminal
            .draw(|frame| draw(app, frame).expect("drawing should succeed in test"))
            .expect("drawing to a test backend should succeed");

        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(Cell::symbol)
            .collect()
    }

    #[test]
    fn test_overlay_path() {
        let grid = Grid::from_rows(&["x  x", "x  x", "xxxx"]).expect("grid should be valid");
        let path = [
            Coordinate::new(1, 0),
            Coordinate::new(1, 1),
            Coordinate::new(2, 1),
        ];

        assert_eq!(
            overlay_path(&grid, &path, '*'),
            vec!["x* x", "x**x", "xxxx"]
        );
    }

    #[test]
    fn test_overlay_path_skips_out_of_bounds() {
        let grid = Grid::from_rows(&["  ", "  "]).expect("grid should be valid");
        let path = [Coordinate::new(5, 0), Coordinate::new(0, 9)];

        assert_eq!(overlay_path(&grid, &path, '*'), vec!["  ", "  "]);
    }

    #[test]
    fn test_overlay_empty_path() {
        let grid = Grid::from_rows(&["x x"]).expect("grid should be valid");

        assert_eq!(overlay_path(&grid, &[], '*'), vec!["x x"]);
    }

    #[test]
    fn test_to_screen_coords() {
        let grid = Grid::from_rows(&["...", "...", "..."]).expect("grid should be valid");
        let coords = [
            Coordinate::new(0, 0),
            Coordinate::new(1, 1),
            Coordinate::new(2, 2),
        ];

        let screen = to_screen_coords(&coords, &grid).expect("small grid should convert");

        assert_eq!(screen, vec![(-1., 1.), (0., 0.), (1., -1.)]);
    }

    #[test]
    fn test_to_screen_coords_rejects_huge_grid() {
        let grid = Grid::new(vec![vec![0_u8; 70_000]]).expect("grid should be valid");

        assert!(
            to_screen_coords(&[Coordinate::new(0, 0)], &grid).is_err(),
            "grid wider than u16 should not convert"
        );
    }

    #[test]
    fn test_draw_solved_maze() {
        let app = create_test_app(&["mazepath"]);

        let screen = render(&app);

        assert!(screen.contains("steps: 14 / (q) quit"), "tooltip missing");
    }

    #[test]
    fn test_draw_unsolved_maze() {
        let app = create_test_app(&["mazepath", "-g", "0,0"]);

        let screen = render(&app);

        assert!(
            screen.contains("no path from (10, 0) to (0, 0)"),
            "tooltip missing"
        );
    }
}
