//! Frame pacing for the renderer.
//!
//! While a piece is falling every frame is drawn. Title, pause and game-over
//! screens only change on input, so they are redrawn when their fingerprint
//! changes plus a slow keep-alive refresh.

use crate::core::GameSnapshot;

/// Keep-alive redraw period for static screens
pub const STATIC_REFRESH_MS: u64 = 500;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl Default for RenderThrottle {
    fn default() -> Self {
        Self::new(STATIC_REFRESH_MS)
    }
}

impl RenderThrottle {
    pub fn new(static_interval_ms: u64) -> Self {
        Self {
            static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    /// Decide whether to draw `snap` at `now_ms`.
    pub fn should_render_snapshot(&mut self, now_ms: u64, snap: &GameSnapshot) -> bool {
        self.should_render(now_ms, snap.fingerprint(), !snap.playable())
    }

    /// Non-static frames always render. Static frames render on a fingerprint
    /// change, otherwise at most once per interval. The first call always
    /// renders.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let changed = self.last_fingerprint != Some(fingerprint);
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.static_interval_ms;

        if is_static && !changed && !stale {
            return false;
        }

        self.last_render_ms = now_ms;
        self.last_fingerprint = Some(fingerprint);
        true
    }

    /// Forget the last frame so the next call renders (after a resize).
    pub fn reset(&mut self) {
        self.last_fingerprint = None;
    }
}
