use serde_json::{json, Value};

use crate::quiz_engine::{
    clock::Clock,
    models::{Phase, Symbol},
    render::{format_elapsed, QuizRenderer},
    session::SessionState,
};

/// Option buttons as the client draws them: index plus display text.
fn choice_buttons(choices: &[Symbol]) -> Value {
    Value::Array(
        choices
            .iter()
            .enumerate()
            .map(|(i, c)| json!({ "index": i, "value": c.to_string() }))
            .collect(),
    )
}

/// The round block. The answer is withheld; clients learn it only through
/// the outcome of a submission.
fn round_block<C: Clock, V: QuizRenderer>(session: &SessionState<C, V>) -> Value {
    match session.current_round() {
        Some(round) if session.phase() == Phase::Active => {
            let input = if round.mode.is_choice() { "choice" } else { "typed" };
            let choices = round.choices.as_deref().map(choice_buttons).unwrap_or(Value::Null);
            json!({
                "round_id": round.round_id,
                "prompt":   round.mode.prompt(),
                "question": round.question.to_string(),
                "input":    input,
                "choices":  choices,
                "awaiting_feedback": session.awaiting_feedback(),
            })
        }
        _ => Value::Null,
    }
}

/// Map a session to a JSON view state for web or remote front ends.
pub fn view_state<C: Clock, V: QuizRenderer>(session: &SessionState<C, V>) -> Value {
    let game_over = session
        .game_over()
        .map(|over| {
            json!({
                "final_score": over.final_score,
                "elapsed_secs": over.elapsed_secs,
                "elapsed": format_elapsed(over.elapsed_secs),
            })
        })
        .unwrap_or(Value::Null);

    json!({
        "phase":     session.phase().to_string(),
        "mode":      session.mode().map(|m| m.number()),
        "mode_name": session.mode().map(|m| m.to_string()),
        "score":     session.score(),
        "elapsed":   format_elapsed(session.elapsed_secs()),
        "round":     round_block(session),
        "game_over": game_over,
    })
}
