//! Session state machine: `Idle → Active → Ended`.
//!
//! `Active` loops over rounds. A correct answer bumps the score and schedules
//! the next round; a wrong one schedules the end of the game. Both transitions
//! wait for a short feedback delay, fired by [`SessionState::poll`]. A pending
//! transition remembers the session generation it belongs to and is dropped if
//! the session was quit or restarted before it fired.
//!
//! The elapsed-time timer is cancelled on every path out of `Active`, exactly
//! once per path.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::quiz_engine::{
    clock::Clock,
    config::QuizConfig,
    evaluator::{evaluate_choice, evaluate_typed},
    generator::QuestionSource,
    models::{GameOver, Mode, Outcome, Phase, QuizRound},
    render::{format_elapsed, QuizRenderer},
    timer::PeriodicTimer,
};

/// What `submit_answer` did with the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// No game running, or the current round is already decided.
    Ignored,
    /// Typed input is not a complete answer yet; nothing changed.
    NotReady,
    Correct { score: u32 },
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionKind {
    /// Move on to a fresh question.
    Advance,
    /// Finish the game.
    End,
}

/// A state change waiting for its feedback delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTransition {
    pub kind: TransitionKind,
    pub due_at_ms: u64,
    pub generation: u64,
}

pub struct SessionState<C: Clock, V: QuizRenderer> {
    config: QuizConfig,
    source: QuestionSource,
    clock: C,
    renderer: V,
    timer: PeriodicTimer,
    phase: Phase,
    mode: Option<Mode>,
    score: u32,
    started_at_ms: u64,
    elapsed_secs: u64,
    round: Option<QuizRound>,
    pending: Option<PendingTransition>,
    generation: u64,
    game_over: Option<GameOver>,
}

impl<C: Clock, V: QuizRenderer> SessionState<C, V> {
    /// Build an idle session. The question source is seeded from
    /// `config.rng_seed` when set.
    pub fn new(config: QuizConfig, clock: C, renderer: V) -> Self {
        let source = QuestionSource::new(config.rng_seed, config.choices);
        Self::with_source(config, source, clock, renderer)
    }

    pub fn with_source(config: QuizConfig, source: QuestionSource, clock: C, renderer: V) -> Self {
        let timer = PeriodicTimer::new(config.tick_interval_ms);
        SessionState {
            config,
            source,
            clock,
            renderer,
            timer,
            phase: Phase::Idle,
            mode: None,
            score: 0,
            started_at_ms: 0,
            elapsed_secs: 0,
            round: None,
            pending: None,
            generation: 0,
            game_over: None,
        }
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Begin a new game in `mode`, discarding everything from the last one.
    pub fn start(&mut self, mode: Mode) {
        if self.phase == Phase::Active {
            self.timer.cancel();
        }
        let now = self.clock.now_ms();

        self.generation += 1;
        self.phase = Phase::Active;
        self.mode = Some(mode);
        self.score = 0;
        self.started_at_ms = now;
        self.elapsed_secs = 0;
        self.pending = None;
        self.game_over = None;
        self.timer.arm(now);

        info!(generation = self.generation, ?mode, "session started");

        self.renderer.render_score(0);
        self.renderer.render_elapsed(&format_elapsed(0));
        self.next_round(mode);
    }

    /// Start again with the last mode played. Returns false if there is none.
    pub fn play_again(&mut self) -> bool {
        match self.mode {
            Some(mode) => {
                self.start(mode);
                true
            }
            None => false,
        }
    }

    /// End a running game immediately.
    pub fn quit(&mut self) {
        if self.phase == Phase::Active {
            debug!(generation = self.generation, "quit requested");
            self.end_game();
        }
    }

    /// Leave the game for mode selection. A running game is stopped without a
    /// game-over screen.
    pub fn return_to_menu(&mut self) {
        if self.phase == Phase::Active {
            self.timer.cancel();
        }
        self.phase = Phase::Idle;
        self.round = None;
        self.pending = None;
        self.game_over = None;
        debug!("returned to menu");
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Judge `input` against the current round, using the choice or typed
    /// protocol depending on the mode.
    ///
    /// Typed modes call this on every keystroke; incomplete input returns
    /// [`SubmitOutcome::NotReady`] and changes nothing.
    pub fn submit_answer(&mut self, input: &str) -> SubmitOutcome {
        if self.phase != Phase::Active || self.awaiting_feedback() {
            return SubmitOutcome::Ignored;
        }
        let Some(round) = self.round.as_ref() else {
            return SubmitOutcome::Ignored;
        };

        let correct = if round.mode.is_choice() {
            evaluate_choice(input, round.answer)
        } else {
            let verdict = evaluate_typed(input, round.mode, round.answer);
            if !verdict.is_valid {
                return SubmitOutcome::NotReady;
            }
            verdict.is_correct
        };
        debug!(round_id = round.round_id, input, correct, "answer submitted");

        if correct {
            self.score += 1;
            self.renderer.render_score(self.score);
            self.renderer.render_outcome(Outcome::Correct);
            self.schedule(TransitionKind::Advance, self.config.feedback.correct_ms);
            SubmitOutcome::Correct { score: self.score }
        } else {
            self.renderer.render_outcome(Outcome::Incorrect);
            self.schedule(TransitionKind::End, self.config.feedback.incorrect_ms);
            SubmitOutcome::Incorrect
        }
    }

    // -----------------------------------------------------------------------
    // Time-driven work
    // -----------------------------------------------------------------------

    /// Refresh the elapsed time while a game runs. Display only.
    pub fn tick(&mut self) {
        if self.phase != Phase::Active {
            return;
        }
        self.elapsed_secs = self.current_elapsed_secs();
        self.renderer.render_elapsed(&format_elapsed(self.elapsed_secs));
    }

    /// Run whatever is due: the periodic tick and a pending transition whose
    /// delay has passed. Hosts call this from their event loop.
    pub fn poll(&mut self) {
        let now = self.clock.now_ms();
        if self.timer.take_due(now) {
            self.tick();
        }
        if let Some(pending) = self.pending {
            if now >= pending.due_at_ms {
                self.pending = None;
                self.fire(pending);
            }
        }
    }

    fn schedule(&mut self, kind: TransitionKind, delay_ms: u64) {
        let transition = PendingTransition {
            kind,
            due_at_ms: self.clock.now_ms() + delay_ms,
            generation: self.generation,
        };
        if delay_ms == 0 {
            self.fire(transition);
        } else {
            self.pending = Some(transition);
        }
    }

    fn fire(&mut self, transition: PendingTransition) {
        if transition.generation != self.generation || self.phase != Phase::Active {
            debug!(
                kind = ?transition.kind,
                generation = transition.generation,
                current = self.generation,
                phase = %self.phase,
                "dropping stale transition"
            );
            return;
        }
        match transition.kind {
            TransitionKind::Advance => {
                if let Some(mode) = self.round.as_ref().map(|r| r.mode) {
                    self.next_round(mode);
                }
            }
            TransitionKind::End => self.end_game(),
        }
    }

    fn next_round(&mut self, mode: Mode) {
        let round = self.source.next_round(mode);
        self.renderer.render_question(mode, &round.question);
        if let Some(choices) = &round.choices {
            self.renderer.render_choices(choices);
        }
        self.round = Some(round);
    }

    fn end_game(&mut self) {
        self.timer.cancel();
        self.phase = Phase::Ended;
        self.elapsed_secs = self.current_elapsed_secs();

        if let Some(mode) = self.mode {
            let over = GameOver { mode, final_score: self.score, elapsed_secs: self.elapsed_secs };
            info!(
                generation = self.generation,
                final_score = over.final_score,
                elapsed_secs = over.elapsed_secs,
                "session ended"
            );
            self.game_over = Some(over);
        }
        self.renderer.render_game_over(self.score, &format_elapsed(self.elapsed_secs));
    }

    fn current_elapsed_secs(&self) -> u64 {
        self.clock.now_ms().saturating_sub(self.started_at_ms) / 1000
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Seconds as of the last tick (or game end).
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn current_round(&self) -> Option<&QuizRound> {
        self.round.as_ref()
    }

    /// True between a decided answer and its transition.
    pub fn awaiting_feedback(&self) -> bool {
        self.pending.is_some_and(|p| p.generation == self.generation)
    }

    pub fn pending(&self) -> Option<PendingTransition> {
        self.pending
    }

    /// Final figures, present only in `Ended`.
    pub fn game_over(&self) -> Option<GameOver> {
        match self.phase {
            Phase::Ended => self.game_over,
            _ => None,
        }
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn timer(&self) -> &PeriodicTimer {
        &self.timer
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn renderer(&self) -> &V {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut V {
        &mut self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::{
        alphabet::{letter_to_position, position_to_letter},
        clock::ManualClock,
        config::FeedbackDelays,
        models::{Position, Symbol},
        render::NullRenderer,
    };

    fn immediate(seed: u64) -> SessionState<ManualClock, NullRenderer> {
        let config = QuizConfig {
            feedback: FeedbackDelays::immediate(),
            rng_seed: Some(seed),
            ..QuizConfig::default()
        };
        SessionState::new(config, ManualClock::new(), NullRenderer)
    }

    fn delayed(seed: u64) -> SessionState<ManualClock, NullRenderer> {
        let config = QuizConfig { rng_seed: Some(seed), ..QuizConfig::default() };
        SessionState::new(config, ManualClock::new(), NullRenderer)
    }

    fn right(session: &SessionState<ManualClock, NullRenderer>) -> String {
        session.current_round().unwrap().answer.to_string()
    }

    /// An answer one place after the right one, wrapping Z to A.
    fn wrong(session: &SessionState<ManualClock, NullRenderer>) -> String {
        let answer = session.current_round().unwrap().answer;
        let position = match answer {
            Symbol::Position(p) => p,
            Symbol::Letter(l) => letter_to_position(l),
        };
        let next = Position::new(position.get() % 26 + 1).unwrap();
        match answer {
            Symbol::Position(_) => next.to_string(),
            Symbol::Letter(_) => position_to_letter(next).to_string(),
        }
    }

    #[test]
    fn new_session_is_idle() {
        let s = immediate(1);
        assert_eq!(s.phase(), Phase::Idle);
        assert!(s.current_round().is_none());
        assert!(!s.timer().is_armed());
    }

    #[test]
    fn submissions_before_start_are_ignored() {
        let mut s = immediate(1);
        assert_eq!(s.submit_answer("7"), SubmitOutcome::Ignored);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn correct_then_incorrect_lifecycle() {
        let mut s = immediate(2);
        s.start(Mode::LetterToNumberChoice);
        for expected in 1..=3 {
            let answer = right(&s);
            assert_eq!(s.submit_answer(&answer), SubmitOutcome::Correct { score: expected });
        }
        assert_eq!(s.score(), 3);
        assert_eq!(s.phase(), Phase::Active);

        let miss = wrong(&s);
        assert_eq!(s.submit_answer(&miss), SubmitOutcome::Incorrect);
        assert_eq!(s.phase(), Phase::Ended);
        assert_eq!(s.game_over().unwrap().final_score, 3);
        assert_eq!(s.submit_answer("1"), SubmitOutcome::Ignored);
    }

    #[test]
    fn typed_mode_waits_for_valid_input() {
        let mut s = immediate(3);
        s.start(Mode::LetterToNumberTyped);
        let round_id = s.current_round().unwrap().round_id;
        assert_eq!(s.submit_answer(""), SubmitOutcome::NotReady);
        assert_eq!(s.submit_answer("0"), SubmitOutcome::NotReady);
        assert_eq!(s.submit_answer("99"), SubmitOutcome::NotReady);
        assert_eq!(s.phase(), Phase::Active);
        assert_eq!(s.current_round().unwrap().round_id, round_id);
    }

    #[test]
    fn delayed_advance_fires_on_poll() {
        let mut s = delayed(4);
        s.start(Mode::NumberToLetterTyped);
        let first = s.current_round().unwrap().round_id;
        let answer = right(&s).to_lowercase();
        assert_eq!(s.submit_answer(&answer), SubmitOutcome::Correct { score: 1 });
        assert!(s.awaiting_feedback());
        assert_eq!(s.submit_answer(&answer), SubmitOutcome::Ignored);

        s.clock().advance(799);
        s.poll();
        assert_eq!(s.current_round().unwrap().round_id, first);

        s.clock().advance(1);
        s.poll();
        assert!(!s.awaiting_feedback());
        assert_eq!(s.current_round().unwrap().round_id, first + 1);
        assert_eq!(s.current_round().unwrap().mode, Mode::NumberToLetterTyped);
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn delayed_end_fires_on_poll() {
        let mut s = delayed(5);
        s.start(Mode::LetterToNumberChoice);
        let miss = wrong(&s);
        assert_eq!(s.submit_answer(&miss), SubmitOutcome::Incorrect);
        assert_eq!(s.phase(), Phase::Active);
        s.clock().advance(1_200);
        s.poll();
        assert_eq!(s.phase(), Phase::Ended);
        assert_eq!(s.game_over().unwrap().elapsed_secs, 1);
    }

    #[test]
    fn quit_beats_a_pending_advance() {
        let mut s = delayed(6);
        s.start(Mode::LetterToNumberChoice);
        let answer = right(&s);
        s.submit_answer(&answer);
        let round_id = s.current_round().unwrap().round_id;

        s.quit();
        assert_eq!(s.phase(), Phase::Ended);
        s.clock().advance(5_000);
        s.poll();
        assert_eq!(s.phase(), Phase::Ended);
        assert_eq!(s.current_round().unwrap().round_id, round_id);
        assert_eq!(s.game_over().unwrap().final_score, 1);
    }

    #[test]
    fn tick_tracks_elapsed_only_while_active() {
        let mut s = immediate(7);
        s.start(Mode::NumberToLetterChoice);
        s.clock().advance(65_400);
        s.tick();
        assert_eq!(s.elapsed_secs(), 65);
        s.quit();
        s.clock().advance(10_000);
        s.tick();
        assert_eq!(s.elapsed_secs(), 65);
    }

    #[test]
    fn restart_resets_score_and_elapsed() {
        let mut s = immediate(8);
        s.start(Mode::LetterToNumberChoice);
        let answer = right(&s);
        s.submit_answer(&answer);
        s.clock().advance(30_000);
        s.tick();
        s.quit();

        s.start(Mode::LetterToNumberChoice);
        assert_eq!(s.score(), 0);
        assert_eq!(s.elapsed_secs(), 0);
        assert_eq!(s.phase(), Phase::Active);
        assert!(s.game_over().is_none());
    }

    #[test]
    fn timer_cancelled_once_per_exit() {
        let mut s = immediate(9);
        s.start(Mode::LetterToNumberChoice);
        s.quit();
        s.quit();
        assert_eq!(s.timer().cancellations(), 1);

        s.start(Mode::LetterToNumberChoice);
        s.start(Mode::LetterToNumberTyped);
        assert_eq!(s.timer().cancellations(), 2);

        let miss = wrong(&s);
        s.submit_answer(&miss);
        assert_eq!(s.timer().cancellations(), 3);

        s.start(Mode::NumberToLetterTyped);
        s.return_to_menu();
        s.return_to_menu();
        assert_eq!(s.timer().cancellations(), 4);
        assert_eq!(s.timer().arms(), 4);
        assert!(!s.timer().is_armed());
    }

    #[test]
    fn play_again_reuses_last_mode() {
        let mut s = immediate(10);
        assert!(!s.play_again());
        s.start(Mode::NumberToLetterTyped);
        s.quit();
        assert!(s.play_again());
        assert_eq!(s.mode(), Some(Mode::NumberToLetterTyped));
        assert_eq!(s.phase(), Phase::Active);
    }
}
