//! Shared fixtures for the integration tests.

use station_escape::game::{GameSession, Rules, TextCatalog};

/// Fresh session on the canonical station with default rules and copy.
#[allow(dead_code)]
pub fn new_session() -> GameSession {
    session_with_rules(Rules::default())
}

#[allow(dead_code)]
pub fn session_with_rules(rules: Rules) -> GameSession {
    GameSession::orbital_station(rules, Box::new(TextCatalog::new()))
}

/// Feed each line through the session, returning the last reply's message.
#[allow(dead_code)]
pub fn play(session: &mut GameSession, lines: &[&str]) -> String {
    let mut last = String::new();
    for line in lines {
        last = session.process(line).message;
    }
    last
}
