use cardkeeper::collection::Collection;
use cardkeeper::error::CardkeeperError;
use cardkeeper::persist::{PersistenceMode, Persistor};
use cardkeeper::settings::Settings;

#[test]
fn mutations_are_refused_before_range_checks() {
    let mut persistor = Persistor::open(&PersistenceMode::InMemory).expect("db");
    persistor.initialize(10).expect("init");
    persistor.set_count(2, 1).expect("set");
    let mut album = Collection::new(&mut persistor, Settings::new(10, 5, 4).read_only(true));
    for n in [0, 1, 2, 10, 11] {
        assert!(matches!(album.add(n), Err(CardkeeperError::ReadOnly)));
        assert!(matches!(album.remove(n), Err(CardkeeperError::ReadOnly)));
    }
    assert_eq!(album.read(2).expect("read").count, 1);
    let stats = album.stats().expect("stats");
    assert_eq!(stats.owned, 1);
    assert_eq!(stats.total_copies, 1);
}

#[test]
fn read_only_still_lists_and_exports() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut persistor = Persistor::open(&PersistenceMode::InMemory).expect("db");
    persistor.initialize(3).expect("init");
    let album = Collection::new(&mut persistor, Settings::new(3, 5, 4).read_only(true));
    assert_eq!(album.listings().expect("listings").missing, vec![1, 2, 3]);
    assert_eq!(album.export(dir.path().join("out.csv")).expect("export"), 3);
}
