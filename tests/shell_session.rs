use std::io::Cursor;

use cardkeeper::collection::Collection;
use cardkeeper::interface::Shell;
use cardkeeper::persist::{PersistenceMode, Persistor};
use cardkeeper::settings::Settings;

fn session(settings: Settings, script: &str) -> (String, Vec<(i64, i64)>) {
    let mut persistor = Persistor::open(&PersistenceMode::InMemory).expect("db");
    let mut output = Vec::new();
    {
        let mut album = Collection::new(&mut persistor, settings);
        album.initialize().expect("init");
        let mut shell = Shell::new(&mut album, Cursor::new(script.to_string()), &mut output);
        shell.run().expect("shell");
    }
    let rows = persistor.export_all().expect("export");
    (String::from_utf8(output).expect("utf8"), rows)
}

#[test]
fn add_read_and_quit() {
    let (out, rows) = session(Settings::new(10, 5, 4), "i\n3\nI\n3\nr\n3\nq\n");
    assert!(out.contains("- New: Yes\n- Card position: \n-- Page: 1\n-- Row: 1\n-- Column: 3\n"));
    assert!(out.contains("- New: No\n"));
    assert!(out.contains("- Card quantity: 2\n"));
    assert_eq!(rows[2], (3, 2));
}

#[test]
fn user_errors_do_not_end_the_session() {
    let script = "x\ni\n0\ni\nabc\nd\n4\ns\nq\n";
    let (out, rows) = session(Settings::new(10, 5, 4), script);
    assert!(out.contains("Option not found, try again..."));
    assert!(out.contains("- Error: Out of range 1 - 10\n"));
    assert!(out.contains("- Error: Not a card number: abc\n"));
    assert!(out.contains("- Error: Card 4 is not owned\n"));
    assert!(out.contains("- Cards to collect: 10\n"));
    assert!(rows.iter().all(|&(_, count)| count == 0));
}

#[test]
fn read_only_session_reports_and_continues() {
    let (out, _) = session(Settings::new(5, 5, 4).read_only(true), "i\n1\nl\n");
    assert!(out.contains("- Error: Read only mode\n"));
    assert!(out.contains("- Missing cards: 1, 2, 3, 4, 5\n"));
}

#[test]
fn end_of_input_behaves_like_quit() {
    let (out, rows) = session(Settings::new(5, 5, 4), "i\n2\ni\n");
    assert!(out.ends_with("Card number: "));
    assert_eq!(rows[1], (2, 1));
}
