use match_gems::core::{Board, GameSession};
use match_gems::term::{gem_rgb, AnchorY, BoardView, Overlay, Viewport};
use match_gems::types::{Cell, GemColor, Position};

const R: Cell = Cell::Gem(GemColor::Red);
const B: Cell = Cell::Gem(GemColor::Blue);
const E: Cell = Cell::Empty;

fn session() -> GameSession {
    let board = Board::from_rows(&[[R, E, B], [E, B, R]]).unwrap();
    GameSession::with_board(board, 1)
}

#[test]
fn renders_border_around_board() {
    let snap = session().snapshot();
    let mut view = BoardView::default();

    // 3 cols * 2 chars + border = 8 wide, 2 rows + border = 4 tall.
    let fb = view.render(&snap, Overlay::default(), Viewport::new(8, 4));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(7, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 3).unwrap().ch, '└');
    assert_eq!(fb.get(7, 3).unwrap().ch, '┘');
}

#[test]
fn gems_use_their_color_and_empties_are_dots() {
    let snap = session().snapshot();
    let mut view = BoardView::default();
    let fb = view.render(&snap, Overlay::default(), Viewport::new(8, 4));

    let red = fb.get(1, 1).unwrap();
    assert_eq!(red.style.fg, gem_rgb(GemColor::Red));
    assert_eq!(fb.get(3, 1).unwrap().ch, '·');
    assert_eq!(fb.get(5, 1).unwrap().style.fg, gem_rgb(GemColor::Blue));
}

#[test]
fn selection_and_cursor_change_the_background() {
    let mut s = session();
    let plain = BoardView::default()
        .render(&s.snapshot(), Overlay::default(), Viewport::new(8, 4))
        .get(1, 1)
        .unwrap();

    s.click(Position::new(0, 0)).unwrap();
    let mut view = BoardView::default();
    let overlay = Overlay {
        cursor: Some(Position::new(1, 2)),
        frame: 0,
    };
    let fb = view.render(&s.snapshot(), overlay, Viewport::new(8, 4));

    assert_ne!(fb.get(1, 1).unwrap().style.bg, plain.style.bg);
    assert_ne!(fb.get(5, 2).unwrap().style.bg, plain.style.bg);
    assert_ne!(fb.get(5, 2).unwrap().style.bg, fb.get(1, 1).unwrap().style.bg);
}

#[test]
fn hit_test_maps_screen_to_cells() {
    let snap = session().snapshot();
    let view = BoardView::default();
    // Frame is 8x4 centered in 20x10: origin (6, 3).
    let vp = Viewport::new(20, 10);

    assert_eq!(view.cell_at(&snap, vp, 7, 4), Some(Position::new(0, 0)));
    // Cells are two columns wide.
    assert_eq!(view.cell_at(&snap, vp, 8, 4), Some(Position::new(0, 0)));
    assert_eq!(view.cell_at(&snap, vp, 9, 4), Some(Position::new(0, 1)));
    assert_eq!(view.cell_at(&snap, vp, 12, 5), Some(Position::new(1, 2)));
    // Border and outside.
    assert_eq!(view.cell_at(&snap, vp, 6, 4), None);
    assert_eq!(view.cell_at(&snap, vp, 13, 4), None);
    assert_eq!(view.cell_at(&snap, vp, 7, 6), None);
}

#[test]
fn top_anchor_draws_from_row_zero() {
    let snap = session().snapshot();
    let mut view = BoardView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Overlay::default(), Viewport::new(8, 12));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn side_panel_shows_counters_when_wide_enough() {
    let mut s = session();
    s.drop_tick();
    let mut view = BoardView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&s.snapshot(), Overlay::default(), Viewport::new(40, 16));

    let all: String = (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect();
    assert!(all.contains("SWAPS"));
    assert!(all.contains("TICKS"));
    assert!(all.contains("EMPTY"));
    assert!(all.contains("q quit"));
}

#[test]
fn glyph_cache_is_owned_by_the_view_and_grows_with_use() {
    let snap = session().snapshot();
    let mut view = BoardView::default();
    assert_eq!(view.glyphs().len(), 1);

    view.render(&snap, Overlay::default(), Viewport::new(8, 4));
    let after_one = view.glyphs().len();
    assert_eq!(after_one, 3);

    view.render(&snap, Overlay::default(), Viewport::new(8, 4));
    assert_eq!(view.glyphs().len(), after_one);
}
