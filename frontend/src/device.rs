use web_sys::window;

// Coarse primary pointer means touch-first; the compare preview skips autoplay there.
pub fn is_touch_primary() -> bool {
    window()
        .and_then(|w| w.match_media("(pointer: coarse)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}
