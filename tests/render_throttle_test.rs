use classic_tetris::core::GameState;
use classic_tetris::term::RenderThrottle;

#[test]
fn render_throttle_renders_first_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
}

#[test]
fn render_throttle_static_renders_on_change() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(t.should_render(1, 2, true));
}

#[test]
fn render_throttle_static_throttles_when_unchanged() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(!t.should_render(10, 1, true));
    assert!(!t.should_render(249, 1, true));
    assert!(t.should_render(250, 1, true));
}

#[test]
fn render_throttle_dynamic_always_renders() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, false));
    assert!(t.should_render(1, 1, false));
    assert!(t.should_render(2, 1, false));
}

#[test]
fn render_throttle_follows_game_phase() {
    let mut t = RenderThrottle::new(250);
    let mut game = GameState::in_memory(8);

    // Title screen is static.
    assert!(t.should_render_snapshot(0, &game.snapshot()));
    assert!(!t.should_render_snapshot(16, &game.snapshot()));

    // Playing frames always render, even when nothing moved.
    game.start();
    assert!(t.should_render_snapshot(32, &game.snapshot()));
    assert!(t.should_render_snapshot(48, &game.snapshot()));

    // Pausing changes the picture once, then goes quiet.
    game.toggle_pause();
    assert!(t.should_render_snapshot(64, &game.snapshot()));
    assert!(!t.should_render_snapshot(80, &game.snapshot()));
}
