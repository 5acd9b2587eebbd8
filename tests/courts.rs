//! Integration tests for court allocation.

use court_tournament::{
    assign_court, release_court, suggest_court, Court, CourtStatus, Match, Participant,
    TournamentError,
};

fn game() -> Match {
    Match::new("pool-m0", Participant::new("a"), Participant::new("b"), 0, 0)
}

#[test]
fn suggests_lowest_numbered_available_court() {
    let mut busy = Court::new("c1", 1, "Centre");
    busy.status = CourtStatus::InUse;
    let courts = vec![
        Court::new("c4", 4, "Four"),
        busy,
        Court::closed("c2", 2, "Two"),
        Court::new("c3", 3, "Three"),
    ];
    assert_eq!(suggest_court(&courts).map(|c| c.number), Some(3));
}

#[test]
fn no_suggestion_when_nothing_available() {
    let courts = vec![Court::closed("c1", 1, "One")];
    assert!(suggest_court(&courts).is_none());
    assert!(suggest_court(&[]).is_none());
}

#[test]
fn assign_and_release_return_copies() {
    let court = Court::new("c1", 1, "Centre");
    let m = game();

    let (assigned, placed) = assign_court(&court, &m).unwrap();
    assert_eq!(assigned.status, CourtStatus::InUse);
    assert_eq!(assigned.current_match_id.as_deref(), Some("pool-m0"));
    assert_eq!(placed.court_number, Some(1));
    assert_eq!(court, Court::new("c1", 1, "Centre"));
    assert_eq!(m, game());

    let released = release_court(&assigned).unwrap();
    assert_eq!(released.status, CourtStatus::Available);
    assert!(released.current_match_id.is_none());
    assert_eq!(assigned.status, CourtStatus::InUse);
}

#[test]
fn busy_or_closed_court_cannot_be_assigned() {
    let (in_use, _) = assign_court(&Court::new("c1", 1, "Centre"), &game()).unwrap();
    assert_eq!(
        assign_court(&in_use, &game()),
        Err(TournamentError::CourtUnavailable {
            number: 1,
            status: CourtStatus::InUse
        })
    );
    assert!(matches!(
        assign_court(&Court::closed("c2", 2, "Two"), &game()),
        Err(TournamentError::CourtUnavailable { number: 2, .. })
    ));
}

#[test]
fn only_in_use_court_can_be_released() {
    assert_eq!(
        release_court(&Court::new("c1", 1, "Centre")),
        Err(TournamentError::CourtNotInUse(1))
    );
    assert_eq!(
        release_court(&Court::closed("c2", 2, "Two")),
        Err(TournamentError::CourtNotInUse(2))
    );
}

#[test]
fn match_already_on_a_court_cannot_be_moved_to_another() {
    let (first, placed) = assign_court(&Court::new("c1", 1, "Centre"), &game()).unwrap();
    let second = Court::new("c2", 2, "Two");
    assert_eq!(
        assign_court(&second, &placed),
        Err(TournamentError::MatchAlreadyOnCourt {
            match_id: "pool-m0".into(),
            number: 1
        })
    );
    assert_eq!(first.current_match_id.as_deref(), Some("pool-m0"));
    assert_eq!(second.status, CourtStatus::Available);
}
