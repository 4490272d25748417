/// Seam for the rendering layer: the board widget plus the page chrome
/// around it (game link, inline error text).
///
/// The session calls these in response order; implementations only need to
/// reflect the latest call. `show_error` replaces any error already shown,
/// and `clear_error` is a no-op when none is visible.
pub trait BoardView {
    /// Render the given position on the board widget.
    fn set_position(&mut self, fen: &str);

    /// Publish the current game's ID (link text, shareable URL, cache).
    fn set_game_id(&mut self, game_id: &str);

    fn show_error(&mut self, message: &str);

    fn clear_error(&mut self);
}
