use battle_core::{AvatarId, OwnerId, RankingBoard, RankingEntry, Timestamp, UpdateOutcome};
use battle_runtime::Runtime;

fn owner(n: u8) -> OwnerId {
    OwnerId([n; 20])
}

fn avatar(n: u8) -> AvatarId {
    AvatarId([n; 20])
}

#[tokio::test]
async fn leaderboard_round_trip() {
    let runtime = Runtime::builder().build().await.unwrap();
    let handle = runtime.handle();

    for (n, exp, at) in [(1, 2, 10), (2, 1, 20), (3, 3, 30)] {
        let outcome = handle
            .update_ranking(RankingEntry::new(owner(n), avatar(n), exp, Timestamp(at)))
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Inserted);
    }

    let experience: Vec<u64> = handle
        .query_ranking(10, None)
        .await
        .unwrap()
        .into_iter()
        .map(|entry| entry.experience)
        .collect();
    assert_eq!(experience, vec![3, 2, 1]);

    assert_eq!(
        handle.ranked_owners(10, Some(Timestamp(20))).await.unwrap(),
        vec![owner(1), owner(2)]
    );

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn stale_updates_do_not_replace_entries() {
    let runtime = Runtime::builder().build().await.unwrap();
    let handle = runtime.handle();

    handle
        .update_ranking(RankingEntry::new(owner(1), avatar(1), 50, Timestamp(500)))
        .await
        .unwrap();
    let outcome = handle
        .update_ranking(RankingEntry::new(owner(1), avatar(9), 80, Timestamp(400)))
        .await
        .unwrap();
    assert_eq!(outcome, UpdateOutcome::Stale);

    let entry = handle.ranking_entry(owner(1)).await.unwrap().unwrap();
    assert_eq!(entry.avatar, avatar(1));
    assert!(handle.ranking_entry(owner(2)).await.unwrap().is_none());

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn seeded_board_and_wall_clock_progress() {
    let mut board = RankingBoard::new();
    board.update(RankingEntry::new(owner(1), avatar(1), 10, Timestamp(1)));

    let runtime = Runtime::builder().ranking_board(board).build().await.unwrap();
    let handle = runtime.handle();

    let outcome = handle.record_progress(owner(1), avatar(2), 20).await.unwrap();
    assert_eq!(outcome, UpdateOutcome::Replaced);

    let entry = handle.ranking_entry(owner(1)).await.unwrap().unwrap();
    assert_eq!(entry.avatar, avatar(2));
    assert!(entry.updated_at > Timestamp(1));

    drop(handle);
    runtime.shutdown().await.unwrap();
}
