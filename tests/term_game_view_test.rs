use shootris::core::{Bullet, Engine, Figure, GameSnapshot};
use shootris::term::{AnchorY, FrameBuffer, GameView, Viewport};
use shootris::types::{PieceKind, RunState};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn empty_snapshot() -> GameSnapshot {
    let mut snap = Engine::with_seed(1).snapshot();
    // Park the active figure off the board so only what a test adds is drawn.
    snap.active = Figure::new(PieceKind::O).shifted(0, 40);
    snap
}

#[test]
fn term_view_renders_border_corners_below_shooter_row() {
    let snap = Engine::with_seed(1).snapshot();
    let view = GameView::default();

    // 10x20 board, 2 columns per cell => 22 wide with border.
    // 20 rows + border + shooter row => 23 tall.
    let fb = view.render(&snap, Viewport::new(22, 23));

    assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 1).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 22).unwrap().ch, '└');
    assert_eq!(fb.get(21, 22).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = empty_snapshot();
    snap.set_cell(0, 19, PieceKind::I.color());

    let fb = GameView::default().render(&snap, Viewport::new(22, 23));

    // Inside border: board origin at (1, 2). Each cell is 2 chars wide.
    let y0 = 2 + 19;
    assert_eq!(fb.get(1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(2, y0).unwrap().ch, '█');
    assert_eq!(fb.get(3, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_figure() {
    let mut snap = empty_snapshot();
    snap.active = Figure::new(PieceKind::O);

    let fb = GameView::default().render(&snap, Viewport::new(22, 23));

    // O at anchor (3, 0) covers board cells (4..=5, 0..=1).
    assert_eq!(fb.get(1 + 4 * 2, 2).unwrap().ch, '█');
    assert_eq!(fb.get(1 + 5 * 2 + 1, 3).unwrap().ch, '█');
    assert_eq!(fb.get(1 + 3 * 2, 2).unwrap().ch, '·');
}

#[test]
fn term_view_draws_shooter_and_bullets() {
    let mut snap = empty_snapshot();
    snap.shooter_x = 5;
    snap.bullets = vec![Bullet::new(3, 2)];

    let fb = GameView::default().render(&snap, Viewport::new(22, 23));

    assert_eq!(fb.get(1 + 5 * 2, 0).unwrap().ch, '▼');
    assert_eq!(fb.get(1 + 5 * 2 + 1, 0).unwrap().ch, '▼');
    assert_eq!(fb.get(1 + 4 * 2, 0).unwrap().ch, ' ');
    assert_eq!(fb.get(1 + 3 * 2, 2 + 2).unwrap().ch, '•');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = Engine::with_seed(1).snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.hold = Some(Figure::new(PieceKind::T));

    let fb = GameView::default().render(&snap, Viewport::new(60, 23));
    let all = screen_text(&fb);

    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("LEVEL"));
    assert!(all.contains("HOLD"));
    assert!(all.contains("NEXT"));

    // Every queued figure is listed by letter under NEXT.
    let next_row = (0..fb.height())
        .find(|&y| fb.row_text(y).contains("NEXT"))
        .unwrap();
    for (i, figure) in snap.next_queue.iter().enumerate() {
        let row = fb.row_text(next_row + 1 + i as u16);
        assert!(row.contains(figure.kind.letter()), "row {i}: {row:?}");
    }
}

#[test]
fn term_view_hides_side_panel_when_narrow() {
    let snap = Engine::with_seed(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 23));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_shows_overlays() {
    let view = GameView::default();

    let mut snap = empty_snapshot();
    snap.paused = true;
    assert!(screen_text(&view.render(&snap, Viewport::new(22, 23))).contains("PAUSED"));

    snap.paused = false;
    snap.run_state = RunState::GameOver;
    assert!(screen_text(&view.render(&snap, Viewport::new(22, 23))).contains("GAME OVER"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = Engine::with_seed(1).snapshot();

    // Board block is 23 rows tall => start = (31 - 23) / 2 = 4; frame one row lower.
    let fb = GameView::default().render(&snap, Viewport::new(22, 31));
    assert_eq!(fb.get(0, 5).unwrap().ch, '┌');

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(22, 31));
    assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
}

#[test]
fn term_view_render_into_reuses_buffer_across_sizes() {
    let snap = Engine::with_seed(1).snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&snap, Viewport::new(30, 25), &mut fb);
    assert_eq!((fb.width(), fb.height()), (30, 25));

    view.render_into(&snap, Viewport::new(22, 23), &mut fb);
    assert_eq!(fb, view.render(&snap, Viewport::new(22, 23)));
}
