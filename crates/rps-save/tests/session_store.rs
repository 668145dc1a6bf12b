use rps_core::{GameRng, Move, Session};
use rps_save::{JsonFileStore, load_scores, save_scores};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("rps_it_{}_{}.json", std::process::id(), name))
}

#[test]
fn test_session_writes_ledger_on_reset() {
    let path = temp_path("reset");
    std::fs::remove_file(&path).ok();

    let mut session = Session::new(JsonFileStore::at(&path), GameRng::new(5));
    assert!(session.high_scores().is_empty());
    for _ in 0..3 {
        session.play_against(Move::Rock, Move::Scissors);
    }
    session.reset();

    assert_eq!(load_scores(&path).unwrap(), vec![3]);
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_session_reads_existing_ledger() {
    let path = temp_path("existing");
    save_scores(&path, &[2, 9, 9, 4]).unwrap();

    let session = Session::new(JsonFileStore::at(&path), GameRng::new(5));
    assert_eq!(session.high_scores().entries(), &[9, 4, 2]);
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_clear_writes_empty_array() {
    let path = temp_path("clear");
    save_scores(&path, &[5, 1]).unwrap();

    let mut session = Session::new(JsonFileStore::at(&path), GameRng::new(5));
    session.clear_high_scores();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_corrupt_file_starts_empty_then_recovers() {
    let path = temp_path("corrupt");
    std::fs::write(&path, "{{{{").unwrap();

    let mut session = Session::new(JsonFileStore::at(&path), GameRng::new(5));
    assert!(session.high_scores().is_empty());
    session.play_against(Move::Paper, Move::Rock);
    session.quit();

    assert_eq!(load_scores(&path).unwrap(), vec![1]);
    std::fs::remove_file(&path).ok();
}
