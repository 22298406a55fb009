//! Controller integration tests
//!
//! Tests for queue installation, navigation, and boundary logic.
//! Focus on real-world scenarios: playing from an episode list,
//! next/previous buttons, shuffle gating.

use pod_playback::{Episode, PlaybackController, PlayerError, PlayerEvent};
use std::time::Duration;

// ===== Test Helpers =====

fn create_episode(id: &str, title: &str, duration_secs: u64) -> Episode {
    Episode {
        id: id.to_string(),
        title: title.to_string(),
        thumbnail: format!("/thumbnails/{}.jpg", id),
        members: "Ana, Bruno".to_string(),
        url: format!("https://cdn.example.com/{}.mp3", id),
        duration: Duration::from_secs(duration_secs),
    }
}

fn three_episodes() -> Vec<Episode> {
    vec![
        create_episode("a", "Episode A", 1800),
        create_episode("b", "Episode B", 2400),
        create_episode("c", "Episode C", 1200),
    ]
}

// ===== Queue Installation Tests =====

#[test]
fn test_play_list_sets_index_and_starts_playing() {
    let mut controller = PlaybackController::default();

    controller.play_list(three_episodes(), 1).unwrap();

    assert_eq!(controller.current_index(), Some(1));
    assert_eq!(controller.current_episode().unwrap().id, "b");
    assert!(controller.is_playing());
    assert_eq!(controller.queue_len(), 3);
}

#[test]
fn test_play_list_every_valid_index() {
    for start in 0..3 {
        let mut controller = PlaybackController::default();
        controller.play_list(three_episodes(), start).unwrap();
        assert_eq!(controller.current_index(), Some(start));
        assert!(controller.is_playing());
    }
}

#[test]
fn test_play_list_rejects_out_of_range_index() {
    let mut controller = PlaybackController::default();
    controller.play(create_episode("x", "Episode X", 900));

    let result = controller.play_list(three_episodes(), 3);
    assert!(matches!(result, Err(PlayerError::IndexOutOfBounds(3))));

    // Prior state untouched
    assert_eq!(controller.current_episode().unwrap().id, "x");
    assert_eq!(controller.queue_len(), 1);
}

#[test]
fn test_play_list_rejects_empty_list() {
    let mut controller = PlaybackController::default();
    let result = controller.play_list(Vec::new(), 0);
    assert!(matches!(result, Err(PlayerError::EmptyQueue)));
    assert!(controller.episodes().is_empty());
}

#[test]
fn test_play_replaces_previous_list() {
    let mut controller = PlaybackController::default();
    controller.play_list(three_episodes(), 2).unwrap();

    // Playing a single episode drops the old list context
    controller.play(create_episode("solo", "Standalone", 600));

    assert_eq!(controller.queue_len(), 1);
    assert_eq!(controller.current_index(), Some(0));
    assert!(!controller.has_next());
    assert!(!controller.has_previous());
}

// ===== has_next / has_previous Tests =====

#[test]
fn test_has_next_sequential() {
    let mut controller = PlaybackController::default();
    controller.play_list(three_episodes(), 0).unwrap();

    assert!(controller.has_next());

    controller.play_next();
    assert!(controller.has_next());

    controller.play_next();
    // Last position: nothing further
    assert!(!controller.has_next());
}

#[test]
fn test_has_next_with_shuffle_on_any_nonempty_queue() {
    let mut controller = PlaybackController::default();
    controller.play_list(three_episodes(), 2).unwrap();

    // Sequentially exhausted
    assert!(!controller.has_next());

    // A random pick is always available under shuffle
    controller.toggle_shuffle();
    assert!(controller.has_next());

    controller.toggle_shuffle();
    assert!(!controller.has_next());
}

#[test]
fn test_has_next_with_shuffle_on_empty_queue() {
    let mut controller = PlaybackController::default();
    controller.toggle_shuffle();
    assert!(!controller.has_next());
}

#[test]
fn test_has_previous_ignores_shuffle() {
    let mut controller = PlaybackController::default();
    controller.play_list(three_episodes(), 0).unwrap();
    controller.toggle_shuffle();

    // Shuffle never affects "previous"
    assert!(!controller.has_previous());

    let mut controller = PlaybackController::default();
    controller.play_list(three_episodes(), 1).unwrap();
    controller.toggle_shuffle();
    assert!(controller.has_previous());
}

// ===== Navigation Tests =====

#[test]
fn test_play_next_walks_sequentially_then_stops() {
    let mut controller = PlaybackController::default();
    controller.play_list(three_episodes(), 0).unwrap();

    controller.play_next();
    assert_eq!(controller.current_index(), Some(1));

    controller.play_next();
    assert_eq!(controller.current_index(), Some(2));

    // Further calls are no-ops
    controller.play_next();
    controller.play_next();
    assert_eq!(controller.current_index(), Some(2));
    assert!(!controller.has_next());
}

#[test]
fn test_play_previous_walks_back_then_stops() {
    let mut controller = PlaybackController::default();
    controller.play_list(three_episodes(), 2).unwrap();

    controller.play_previous();
    assert_eq!(controller.current_index(), Some(1));

    controller.play_previous();
    assert_eq!(controller.current_index(), Some(0));

    // Further calls are no-ops
    controller.play_previous();
    assert_eq!(controller.current_index(), Some(0));
    assert!(!controller.has_previous());
}

#[test]
fn test_navigation_leaves_playing_flag_alone() {
    let mut controller = PlaybackController::default();
    controller.play_list(three_episodes(), 0).unwrap();

    controller.play_next();
    assert!(controller.is_playing());

    controller.set_playing_state(false);
    controller.play_next();
    assert!(!controller.is_playing());

    controller.play_previous();
    assert!(!controller.is_playing());
}

#[test]
fn test_shuffled_next_stays_in_bounds_and_keeps_playing() {
    let mut controller = PlaybackController::default();
    controller.play_list(three_episodes(), 0).unwrap();
    controller.toggle_shuffle();

    for _ in 0..50 {
        controller.play_next();
        let index = controller.current_index().unwrap();
        assert!(index < 3, "index {} out of bounds", index);
        assert!(controller.is_playing());
    }
}

#[test]
fn test_shuffled_next_on_single_episode_repicks_it() {
    let mut controller = PlaybackController::default();
    controller.play(create_episode("only", "Only Episode", 600));
    controller.toggle_shuffle();

    // Repeats allowed: the single episode is always the pick
    assert!(controller.has_next());
    controller.play_next();
    assert_eq!(controller.current_index(), Some(0));
}

// ===== Event Tests =====

#[test]
fn test_play_list_emits_episode_state_and_queue_events() {
    let mut controller = PlaybackController::default();
    controller.play_list(three_episodes(), 1).unwrap();

    let events = controller.drain_events();
    assert!(events.contains(&PlayerEvent::EpisodeChanged {
        episode_id: "b".to_string(),
        previous_episode_id: None,
    }));
    assert!(events.contains(&PlayerEvent::StateChanged { is_playing: true }));
    assert!(events.contains(&PlayerEvent::QueueChanged { length: 3 }));
}

#[test]
fn test_episode_changed_carries_previous_id() {
    let mut controller = PlaybackController::default();
    controller.play_list(three_episodes(), 0).unwrap();
    controller.drain_events();

    controller.play_next();

    let events = controller.drain_events();
    assert_eq!(
        events,
        vec![PlayerEvent::EpisodeChanged {
            episode_id: "b".to_string(),
            previous_episode_id: Some("a".to_string()),
        }]
    );
}

#[test]
fn test_noop_navigation_emits_nothing() {
    let mut controller = PlaybackController::default();
    controller.play_list(three_episodes(), 0).unwrap();
    controller.drain_events();

    controller.play_previous();
    assert!(!controller.has_pending_events());
}

#[test]
fn test_toggle_modes_emit_mode_changed() {
    let mut controller = PlaybackController::default();

    controller.toggle_loop();
    let events = controller.drain_events();
    assert_eq!(
        events,
        vec![PlayerEvent::ModeChanged {
            is_looping: true,
            is_shuffling: false,
        }]
    );

    controller.toggle_shuffle();
    let events = controller.drain_events();
    assert_eq!(
        events,
        vec![PlayerEvent::ModeChanged {
            is_looping: true,
            is_shuffling: true,
        }]
    );
}

// ===== Snapshot Tests =====

#[test]
fn test_snapshot_mirrors_controller_state() {
    let mut controller = PlaybackController::default();
    controller.play_list(three_episodes(), 1).unwrap();
    controller.toggle_loop();

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.episodes.len(), 3);
    assert_eq!(snapshot.current_index, Some(1));
    assert!(snapshot.is_playing);
    assert!(snapshot.is_looping);
    assert!(!snapshot.is_shuffling);
    assert_eq!(snapshot.current_episode().unwrap().id, "b");
}

#[test]
fn test_snapshot_is_a_copy() {
    let mut controller = PlaybackController::default();
    controller.play_list(three_episodes(), 0).unwrap();

    let snapshot = controller.snapshot();
    controller.play_next();

    // The snapshot does not follow later transitions
    assert_eq!(snapshot.current_index, Some(0));
    assert_eq!(controller.current_index(), Some(1));
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let mut controller = PlaybackController::default();
    controller.play_list(three_episodes(), 2).unwrap();
    controller.toggle_shuffle();

    let snapshot = controller.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: pod_playback::PlayerSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(snapshot, back);
}
