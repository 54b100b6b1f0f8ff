use cardkeeper::collection::{Collection, Stats};
use cardkeeper::persist::{PersistenceMode, Persistor};
use cardkeeper::settings::Settings;

fn album_of_ten() -> Persistor {
    let mut persistor = Persistor::open(&PersistenceMode::InMemory).expect("db");
    persistor.initialize(10).expect("init");
    persistor
}

#[test]
fn stats_after_a_few_additions() {
    let mut persistor = album_of_ten();
    let mut album = Collection::new(&mut persistor, Settings::new(10, 5, 4));
    album.add(1).expect("add");
    album.add(1).expect("add");
    album.add(2).expect("add");
    assert_eq!(
        album.stats().expect("stats"),
        Stats { owned: 2, missing: 8, total_copies: 3, duplicate_copies: 1 }
    );
}

#[test]
fn empty_album_has_everything_missing() {
    let mut persistor = album_of_ten();
    let album = Collection::new(&mut persistor, Settings::new(10, 5, 4));
    assert_eq!(
        album.stats().expect("stats"),
        Stats { owned: 0, missing: 10, total_copies: 0, duplicate_copies: 0 }
    );
}

#[test]
fn listings_split_missing_and_duplicates() {
    let mut persistor = album_of_ten();
    let mut album = Collection::new(&mut persistor, Settings::new(10, 5, 4));
    for n in [1, 1, 1, 2, 4, 4, 5, 6, 7, 8, 9, 10] {
        album.add(n).expect("add");
    }
    let listings = album.listings().expect("listings");
    assert_eq!(listings.missing, vec![3]);
    assert_eq!(listings.duplicates, vec![1, 4]);
    assert_eq!(listings.render_missing(), "3");
    assert_eq!(listings.render_duplicates(), "1, 4");
    assert_eq!(album.stats().expect("stats").duplicate_copies, 3);
}
