use stackfall::core::{GameState, ScriptedShapes};
use stackfall::term::{AnchorY, FrameBuffer, GameView, Viewport};
use stackfall::types::{GamePhase, PieceKind};

fn o_game() -> GameState<ScriptedShapes> {
    GameState::with_shapes(ScriptedShapes::repeat(PieceKind::O))
}

fn render_wide(snap: &stackfall::core::GameSnapshot) -> FrameBuffer {
    GameView::default().render(snap, Viewport::new(60, 22))
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameState::new(1).snapshot();
    // Locked I block at bottom-left.
    snap.board[19][0] = 1;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece_and_ghost_while_playing() {
    let mut game = o_game();
    game.start();
    let snap = game.snapshot();
    assert_eq!(snap.ghost_y, Some(18));

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // O at box x=3: columns 3 and 4 => terminal x = 1 + 3*2 = 7.
    assert_eq!(fb.get(7, 1).unwrap().ch, '█');
    assert_eq!(fb.get(10, 2).unwrap().ch, '█');
    assert_eq!(fb.get(7, 19).unwrap().ch, '░');
    assert_eq!(fb.get(10, 20).unwrap().ch, '░');
}

#[test]
fn term_view_lists_levels_on_level_select() {
    let mut game = GameState::new(1);
    game.select_level(3);
    let fb = render_wide(&game.snapshot());
    let all = fb.text();

    assert!(all.contains("SELECT LEVEL"));
    for level in ["Level 1", "Level 2", "Level 4", "Level 5"] {
        assert!(all.contains(&format!("  {}", level)), "{} should be unmarked", level);
    }
    assert!(all.contains("> Level 3"));
    assert!(all.contains("ENTER start"));
    assert!(!all.contains("KEYS"));
}

#[test]
fn term_view_draws_stats_and_keys_while_playing() {
    let mut game = o_game().with_high_score(4200);
    game.start();
    let mut snap = game.snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 7;
    snap.elapsed_ms = 65_000;

    let all = render_wide(&snap).text();

    assert!(all.contains("SCORE    1234"));
    assert!(all.contains("LEVEL    2"));
    assert!(all.contains("LINES    7"));
    assert!(all.contains("TIME     65s"));
    assert!(all.contains("HIGHEST  4200"));
    assert!(all.contains("KEYS"));
    assert!(!all.contains("SELECT LEVEL"));
}

#[test]
fn term_view_shows_pause_and_game_over_overlays() {
    let mut game = o_game();
    game.start();
    game.toggle_pause();
    let all = render_wide(&game.snapshot()).text();
    assert!(all.contains("PAUSED"));
    assert!(all.contains("R: restart"));

    game.toggle_pause();
    while game.phase() == GamePhase::Playing {
        game.hard_drop();
    }
    let all = render_wide(&game.snapshot()).text();
    assert!(all.contains("GAME OVER"));
    assert!(!all.contains("PAUSED"));
}

#[test]
fn term_view_keeps_last_board_behind_level_select() {
    let mut game = o_game();
    game.start();
    game.hard_drop();
    game.toggle_pause();
    game.restart();

    let snap = game.snapshot();
    assert_eq!(snap.phase, GamePhase::LevelSelect);
    assert!(snap.active.is_none());

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert_eq!(fb.get(7, 20).unwrap().ch, '█');
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameState::new(1).snapshot();

    // Board frame is 22 rows tall (20 + border).
    let fb = GameView::default().render(&snap, Viewport::new(22, 30));

    // start_y = (30 - 22) / 2 = 4 => top-left corner at (0,4).
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    let fb = view.render(&snap, Viewport::new(22, 30));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_survives_tiny_viewports() {
    let mut game = o_game();
    game.start();
    let snap = game.snapshot();

    for (w, h) in [(0, 0), (1, 1), (5, 3), (21, 21)] {
        let fb = GameView::default().render(&snap, Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}
