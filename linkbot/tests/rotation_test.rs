//! Integration tests for rotation ticks: cyclic order, empty-link no-op, and
//! persistence of the advanced cursor.

use linkbot::BotService;
use storage::{BotState, StateStore};
use tempfile::TempDir;

fn service_with(dir: &TempDir, state: &BotState) -> BotService {
    let store = StateStore::new(dir.path().join("bot_data.json"));
    store.save(state).expect("Failed to seed state");
    BotService::new(store)
}

#[tokio::test]
async fn test_two_links_flip_and_flip_back() {
    // rotation_interval=300 with two links: one tick flips 0 -> 1, a second
    // tick flips back to 0.
    let dir = tempfile::tempdir().unwrap();
    let mut state = BotState::default();
    state.add_link("https://t.me/a");
    state.add_link("https://t.me/b");
    let service = service_with(&dir, &state);

    assert!(service.rotate_once().await.unwrap());
    assert_eq!(service.snapshot().await.current_link_index, 1);
    assert!(service.rotate_once().await.unwrap());
    assert_eq!(service.snapshot().await.current_link_index, 0);
}

#[tokio::test]
async fn test_n_ticks_visit_every_link_once_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = BotState::default();
    for link in ["https://t.me/a", "https://t.me/b", "https://t.me/c"] {
        state.add_link(link);
    }
    let service = service_with(&dir, &state);

    let mut visited = Vec::new();
    for _ in 0..3 {
        service.rotate_once().await.unwrap();
        visited.push(service.current_link().await.unwrap());
    }
    assert_eq!(
        visited,
        vec!["https://t.me/b", "https://t.me/c", "https://t.me/a"]
    );
    assert_eq!(service.snapshot().await.current_link_index, 0);
}

#[tokio::test]
async fn test_tick_with_no_links_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_with(&dir, &BotState::default());

    assert!(!service.rotate_once().await.unwrap());
    assert_eq!(service.snapshot().await.current_link_index, 0);
}

#[tokio::test]
async fn test_tick_persists_cursor() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bot_data.json");
    let mut state = BotState::default();
    state.add_link("https://t.me/a");
    state.add_link("https://t.me/b");
    let service = service_with(&dir, &state);

    service.rotate_once().await.unwrap();
    assert_eq!(StateStore::new(path).load().current_link_index, 1);
}

#[tokio::test]
async fn test_interval_change_visible_to_next_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = BotState::default();
    state.admins.add("1");
    let service = service_with(&dir, &state);

    assert_eq!(
        service.rotation_interval().await,
        std::time::Duration::from_secs(300)
    );
    service
        .set_timer("1", &["2".to_string()])
        .await
        .unwrap();
    assert_eq!(
        service.rotation_interval().await,
        std::time::Duration::from_secs(120)
    );
}
