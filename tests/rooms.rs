//! Integration tests for room read/replace/patch over both store backends.

mod common;

use common::{room_with_rounds, REGRESSION_SCORES};
use padel_scorecard::rooms::{patch_match, read, replace, PatchRequest, RoomError};
use padel_scorecard::{
    player_stats, FileStore, MatchPatch, MemoryStore, RoomStore, Roster, RoundId,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn stores() -> (MemoryStore, FileStore, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let file = FileStore::new(dir.path().join("rooms"));
    (MemoryStore::new(), file, dir)
}

fn for_each_store(test: impl Fn(&dyn RoomStore)) {
    let (memory, file, _dir) = stores();
    test(&memory);
    test(&file);
}

#[test]
fn read_absent_room_is_none() {
    for_each_store(|store| {
        assert!(read(store, Some("nobody")).unwrap().is_none());
    });
}

#[test]
fn replace_then_read_round_trips() {
    for_each_store(|store| {
        let state = room_with_rounds(&[(REGRESSION_SCORES, [1, 0, 0, 2]), ([(6, 4); 6], [0; 4])]);
        replace(store, Some("friday"), Some(&state)).unwrap();
        assert_eq!(read(store, Some("friday")).unwrap(), Some(state));
    });
}

#[test]
fn replace_is_last_writer_wins() {
    for_each_store(|store| {
        let first = room_with_rounds(&[(REGRESSION_SCORES, [0; 4])]);
        let second = room_with_rounds(&[]);
        replace(store, Some("r"), Some(&first)).unwrap();
        replace(store, Some("r"), Some(&second)).unwrap();
        replace(store, Some("r"), Some(&second)).unwrap();
        assert_eq!(read(store, Some("r")).unwrap(), Some(second));
    });
}

#[test]
fn rooms_are_independent() {
    for_each_store(|store| {
        let state = room_with_rounds(&[(REGRESSION_SCORES, [0; 4])]);
        replace(store, Some("a"), Some(&state)).unwrap();
        assert!(read(store, Some("b")).unwrap().is_none());
    });
}

#[test]
fn missing_room_or_data_is_rejected() {
    let store = MemoryStore::new();
    let state = room_with_rounds(&[]);
    assert!(matches!(read(&store, None), Err(RoomError::Validation(_))));
    assert!(matches!(read(&store, Some("  ")), Err(RoomError::Validation(_))));
    assert!(matches!(
        replace(&store, Some(""), Some(&state)),
        Err(RoomError::Validation(_))
    ));
    assert!(matches!(
        replace(&store, Some("r"), None),
        Err(RoomError::Validation(_))
    ));
    assert!(store.is_empty());
}

fn request<'a>(
    room: &'a str,
    round_id: RoundId,
    match_index: i64,
    patch: &'a MatchPatch,
) -> PatchRequest<'a> {
    PatchRequest {
        room: Some(room),
        round_id: Some(round_id),
        match_index: Some(match_index),
        updated_match: Some(patch),
    }
}

#[test]
fn patch_merges_fields_and_recomputes_loser() {
    for_each_store(|store| {
        let roster = Roster::default();
        let state = room_with_rounds(&[(REGRESSION_SCORES, [0; 4])]);
        let id = state.history[0].id;
        replace(store, Some("r"), Some(&state)).unwrap();
        assert_eq!(state.history[0].loser_index, Some(2));

        // Players 1 and 2 take matches 2 and 3: player 2 climbs to two wins,
        // leaving player 0 on two wins with the fewest games.
        let flip = MatchPatch {
            score1: Some(0),
            score2: Some(6),
        };
        patch_match(store, &roster, request("r", id, 2, &flip)).unwrap();
        let only_score1 = MatchPatch {
            score1: Some(7),
            score2: None,
        };
        patch_match(store, &roster, request("r", id, 3, &only_score1)).unwrap();

        let stored = read(store, Some("r")).unwrap().unwrap();
        let round = &stored.history[0];
        assert_eq!((round.matches[2].score1, round.matches[2].score2), (0, 6));
        assert_eq!((round.matches[3].score1, round.matches[3].score2), (7, 6));
        assert_eq!(round.matches[0], state.history[0].matches[0]);
        assert_eq!(round.loser_index, Some(0));
        assert_eq!(round.loser_name, "Lau");
    });
}

#[test]
fn patch_unknown_round_or_match_is_not_found_and_writes_nothing() {
    for_each_store(|store| {
        let roster = Roster::default();
        let state = room_with_rounds(&[(REGRESSION_SCORES, [0; 4])]);
        let id = state.history[0].id;
        replace(store, Some("r"), Some(&state)).unwrap();
        let patch = MatchPatch {
            score1: Some(0),
            score2: Some(0),
        };

        let err = patch_match(store, &roster, request("r", RoundId(id.0 + 1), 0, &patch));
        assert!(matches!(err, Err(RoomError::NotFound(_))));
        let err = patch_match(store, &roster, request("r", id, 6, &patch));
        assert!(matches!(err, Err(RoomError::NotFound(_))));
        let err = patch_match(store, &roster, request("r", id, -1, &patch));
        assert!(matches!(err, Err(RoomError::NotFound(_))));
        let err = patch_match(store, &roster, request("elsewhere", id, 0, &patch));
        assert!(matches!(err, Err(RoomError::NotFound(_))));

        assert_eq!(read(store, Some("r")).unwrap(), Some(state));
        assert!(read(store, Some("elsewhere")).unwrap().is_none());
    });
}

#[test]
fn patch_with_huge_score_saturates() {
    for_each_store(|store| {
        let roster = Roster::default();
        let state = room_with_rounds(&[([(6, 4); 6], [0; 4])]);
        let id = state.history[0].id;
        replace(store, Some("r"), Some(&state)).unwrap();
        // Every match won by t1: all players on three wins and 30 games.
        assert_eq!(state.history[0].loser_index, Some(0));

        let huge: MatchPatch = serde_json::from_value(json!({ "score1": 1e12 })).unwrap();
        assert_eq!(huge.score1, Some(u32::MAX));
        patch_match(store, &roster, request("r", id, 0, &huge)).unwrap();

        // Players 0 and 1 saturate their game count; 2 and 3 stay on 30.
        let stored = read(store, Some("r")).unwrap().unwrap();
        let round = &stored.history[0];
        assert_eq!(round.matches[0].score1, u32::MAX);
        assert_eq!(round.loser_index, Some(2));
        assert_eq!(round.loser_name, "Lopper");

        let stats = player_stats(&stored.history);
        assert_eq!(stats[0].games_won, u32::MAX);
        assert_eq!(stats[1].games_won, u32::MAX);
        assert_eq!(stats[2].games_won, 30);
        assert_eq!(stats[2].rounds_lost, 1);
    });
}

#[test]
fn patch_requires_all_fields() {
    let store = MemoryStore::new();
    let roster = Roster::default();
    let patch = MatchPatch {
        score1: Some(1),
        score2: None,
    };
    let empty = MatchPatch::default();
    let full = request("r", RoundId(1), 0, &patch);

    let cases = [
        PatchRequest { room: None, ..full },
        PatchRequest { room: Some(" "), ..full },
        PatchRequest { round_id: None, ..full },
        PatchRequest { match_index: None, ..full },
        PatchRequest { updated_match: None, ..full },
        PatchRequest { updated_match: Some(&empty), ..full },
    ];
    for case in cases {
        assert!(
            matches!(patch_match(&store, &roster, case), Err(RoomError::Validation(_))),
            "{case:?}"
        );
    }
}

#[test]
fn file_store_names_files_by_hex_room_code() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    let state = room_with_rounds(&[]);
    replace(&store, Some("../escape me"), Some(&state)).unwrap();
    let path = store.room_path("../escape me");
    assert_eq!(path.parent(), Some(dir.path()));
    assert!(path.exists());
    assert_eq!(read(&store, Some("../escape me")).unwrap(), Some(state));
}

#[test]
fn file_store_reports_corrupt_documents() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    std::fs::write(store.room_path("bad"), "{ not json").unwrap();
    assert!(matches!(read(&store, Some("bad")), Err(RoomError::Store(_))));
}
