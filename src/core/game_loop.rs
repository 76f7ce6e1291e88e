//! The turn loop: render, read a choice, dispatch, repeat until the session ends.

use crate::core::constants::CHOICE_PROMPT;
use crate::core::game_state::{Session, SessionStatus};
use crate::io::Console;
use crate::locations::{move_player, show_location, MoveOutcome};
use chrono::Utc;

/// Plays one turn. Returns `None` once the session is already over.
///
/// An empty read from a closed console counts as quitting.
pub fn play_turn(session: &mut Session, io: &mut impl Console) -> Option<MoveOutcome> {
    if !session.is_running() {
        return None;
    }

    show_location(session.player.location, io);
    let input = io.read_line(CHOICE_PROMPT);
    if input.trim().is_empty() && io.is_closed() {
        tracing::info!("input closed");
        session.status = SessionStatus::Quit;
        return Some(MoveOutcome::Quit);
    }

    Some(move_player(session, &input, io))
}

/// Runs the session to completion and prints the closing message.
pub fn run(session: &mut Session, io: &mut impl Console) -> SessionStatus {
    let span = tracing::info_span!("session", id = %session.id);
    let _enter = span.enter();

    let mut turns: u64 = 0;
    while play_turn(session, io).is_some() {
        turns += 1;
    }

    io.write_line(&farewell(session));
    let elapsed_secs = (Utc::now() - session.started_at).num_seconds();
    tracing::info!(status = ?session.status, turns, elapsed_secs, "session over");
    session.status
}

fn farewell(session: &Session) -> String {
    match session.status {
        SessionStatus::Won => format!(
            "\nCongratulations, {}! The village is safe once more.",
            session.player.name
        ),
        SessionStatus::Defeated => "\nGAME OVER. Your quest ends here.".to_string(),
        SessionStatus::Quit | SessionStatus::Running => {
            "\nThanks for playing The Dragon's Quest!".to_string()
        }
    }
}
