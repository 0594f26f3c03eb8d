use battle_core::{AvatarId, OwnerId, RankingBoard, RankingEntry, SharedRankingBoard, Timestamp};

fn owner(n: u8) -> OwnerId {
    OwnerId([n; 20])
}

fn avatar(n: u8) -> AvatarId {
    AvatarId([n; 20])
}

#[test]
fn one_entry_per_owner() {
    let mut board = RankingBoard::new();
    board.update(RankingEntry::new(owner(1), avatar(1), 5, Timestamp(100)));
    board.update(RankingEntry::new(owner(1), avatar(2), 3, Timestamp(200)));

    let entries = board.query(10, None);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].avatar, avatar(2));
    assert_eq!(board.owners(10, None), vec![owner(1)]);
}

#[test]
fn orders_by_experience_descending() {
    let mut board = RankingBoard::new();
    for (n, exp) in [(1, 2), (2, 1), (3, 3)] {
        board.update(RankingEntry::new(owner(n), avatar(n), exp, Timestamp(100)));
    }

    let experience: Vec<u64> = board.query(10, None).iter().map(|e| e.experience).collect();
    assert_eq!(experience, vec![3, 2, 1]);
    assert_eq!(board.owners(2, None), vec![owner(3), owner(1)]);
}

#[test]
fn equal_experience_orders_by_older_update() {
    let mut board = RankingBoard::new();
    board.update(RankingEntry::new(owner(1), avatar(1), 10, Timestamp(300)));
    board.update(RankingEntry::new(owner(2), avatar(2), 10, Timestamp(100)));
    board.update(RankingEntry::new(owner(3), avatar(3), 10, Timestamp(200)));

    assert_eq!(board.owners(10, None), vec![owner(2), owner(3), owner(1)]);
}

#[test]
fn as_of_excludes_later_updates() {
    let mut board = RankingBoard::new();
    board.update(RankingEntry::new(owner(1), avatar(1), 10, Timestamp(100)));
    board.update(RankingEntry::new(owner(2), avatar(2), 20, Timestamp(200)));
    board.update(RankingEntry::new(owner(3), avatar(3), 30, Timestamp(300)));

    let owners = board.owners(10, Some(Timestamp(200)));
    assert_eq!(owners, vec![owner(2), owner(1)]);
    assert!(board.query(10, Some(Timestamp(50))).is_empty());
    assert_eq!(board.len(), 3);
}

#[test]
fn shared_board_is_visible_across_threads() {
    let shared = SharedRankingBoard::new();
    let writers: Vec<_> = (1..=8u8)
        .map(|n| {
            let board = shared.clone();
            std::thread::spawn(move || {
                board
                    .update(RankingEntry::new(owner(n), avatar(n), n as u64, Timestamp(n as i64)))
                    .unwrap();
            })
        })
        .collect();
    for writer in writers {
        writer.join().unwrap();
    }

    assert_eq!(shared.len().unwrap(), 8);
    let top = shared.query(3, None).unwrap();
    let experience: Vec<u64> = top.iter().map(|e| e.experience).collect();
    assert_eq!(experience, vec![8, 7, 6]);
}
