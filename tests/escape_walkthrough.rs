// End-to-end runs of the canonical station from start to escape.

mod common;

use station_escape::game::{
    CannotUseReason, GameError, SessionState, WinBlocker, DOCKING_BAY, MAINTENANCE_TUNNELS,
};

#[test]
fn optimal_route_scores_every_milestone() {
    let mut s = common::new_session();

    let reply = s.process("pick up tool");
    assert!(reply.is_success());
    assert_eq!(s.player().score, 10);
    assert!(reply.message.ends_with("(SCORE: 10 | HAZARDS: 0)"));

    let reply = s.process("use tool");
    assert!(reply.message.contains("DROID REBOOT"));
    assert_eq!(s.player().score, 30);

    let reply = s.process("east");
    assert!(reply.is_success());
    assert!(reply.message.contains("=== DOCKING BAY ==="));
    assert!(reply.message.contains("<< ITEMS: Energy Crystal"));
    assert_eq!(s.player().current_location, DOCKING_BAY);

    s.process("pick up crystal");
    assert_eq!(s.player().score, 80);

    let reply = s.process("win");
    assert!(reply.is_success());
    assert!(reply.message.contains("Final Score: 110 | Hazards: 0"));
    assert_eq!(s.state(), SessionState::Won);
    assert_eq!(s.summary().score, 110);
}

#[test]
fn win_is_refused_until_both_conditions_hold() {
    let mut s = common::new_session();

    let reply = s.process("win");
    assert_eq!(
        reply.error,
        Some(GameError::CannotWinYet(WinBlocker::WrongLocation(
            "Docking Bay".into()
        )))
    );
    assert_eq!(
        reply.message,
        "You can't win yet! The escape pod is in the Docking Bay."
    );

    common::play(&mut s, &["pick up tool", "use tool", "east"]);
    let reply = s.process("win");
    assert_eq!(
        reply.error,
        Some(GameError::CannotWinYet(WinBlocker::MissingCrystal))
    );
    assert_eq!(s.player().score, 30);
    assert_eq!(s.state(), SessionState::Playing);
}

#[test]
fn crystal_is_not_lost_when_walking_back() {
    let mut s = common::new_session();
    common::play(&mut s, &["pick up tool", "use tool", "e", "pick up crystal", "w"]);
    assert_eq!(s.player().current_location, MAINTENANCE_TUNNELS);
    assert!(s.player().has_crystal);

    let reply = s.process("win");
    assert!(matches!(
        reply.error,
        Some(GameError::CannotWinYet(WinBlocker::WrongLocation(_)))
    ));

    s.process("east");
    assert!(s.process("win").is_success());
    assert_eq!(s.player().score, 110);
}

#[test]
fn tool_use_failures_do_not_score() {
    let mut s = common::new_session();
    assert_eq!(
        s.process("use tool").error,
        Some(GameError::CannotUse(CannotUseReason::NoTool))
    );
    common::play(&mut s, &["pick up tool", "use tool"]);
    assert_eq!(
        s.process("use tool").error,
        Some(GameError::CannotUse(CannotUseReason::AlreadyRepaired))
    );
    s.process("east");
    assert_eq!(
        s.process("use tool").error,
        Some(GameError::CannotUse(CannotUseReason::NoObstacle))
    );
    assert_eq!(s.player().score, 30);
}

#[test]
fn items_disappear_from_the_room_once_taken() {
    let mut s = common::new_session();
    assert!(s.look().contains("<< ITEMS: Diagnostic Tool"));
    s.process("take tool");
    assert!(s.look().contains("<< ITEMS: ~No items available~"));

    let reply = s.process("pick up tool");
    assert_eq!(reply.message, "There's no tool here to pick up.");
    assert_eq!(s.player().score, 10);
}

#[test]
fn commands_after_victory_change_nothing() {
    let mut s = common::new_session();
    common::play(
        &mut s,
        &["pick up tool", "use tool", "east", "pick up crystal", "win"],
    );
    let before = s.player().clone();
    for line in ["west", "win", "status"] {
        assert_eq!(s.process(line).error, Some(GameError::SessionOver));
    }
    assert_eq!(s.player(), &before);
}
