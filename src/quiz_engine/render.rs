use crate::quiz_engine::models::{Mode, Outcome, Symbol};

/// Outbound hooks a presentation layer implements to show the game.
///
/// The session calls these as state changes; every method has an empty
/// default so a front end only overrides what it draws.
pub trait QuizRenderer {
    fn render_question(&mut self, _mode: Mode, _question: &Symbol) {}
    fn render_choices(&mut self, _options: &[Symbol]) {}
    fn render_score(&mut self, _score: u32) {}
    /// `elapsed` is already formatted as `MM:SS`.
    fn render_elapsed(&mut self, _elapsed: &str) {}
    fn render_outcome(&mut self, _outcome: Outcome) {}
    fn render_game_over(&mut self, _final_score: u32, _elapsed: &str) {}
}

/// Renderer that draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl QuizRenderer for NullRenderer {}

/// Format seconds as zero-padded `MM:SS`. Minutes keep counting past 59.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
