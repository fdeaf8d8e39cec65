use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use shiftboard::models::{Dashboard, Status};

mod common;
use common::TestEnv;

fn stored_board(env: &TestEnv) -> Dashboard {
    let raw = env.stored_blob().expect("board persisted");
    serde_json::from_str(&raw).expect("valid blob")
}

#[test]
fn test_init_seeds_default_board() {
    let env = TestEnv::new();

    env.sb()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Board ready with 1 row(s)"));

    assert_eq!(stored_board(&env), Dashboard::default());
}

#[test]
fn test_show_lists_rows_and_mode() {
    let env = TestEnv::new();
    env.init();

    env.sb()
        .arg("show")
        .assert()
        .success()
        .stdout(contains("EDIT mode"))
        .stdout(contains("Shift Start"))
        .stdout(contains("Second Break"))
        .stdout(contains("-- [not-clocked]"))
        .stdout(contains("-- [not-started]"));
}

#[test]
fn test_show_without_init_self_heals() {
    let env = TestEnv::new();

    env.sb().arg("show").assert().success();
    assert_eq!(stored_board(&env), Dashboard::default());
}

#[test]
fn test_set_text_in_edit_mode() {
    let env = TestEnv::new();
    env.init();

    env.sb()
        .args(["set", "1", "name", "Alice"])
        .assert()
        .success();
    env.run_ok(&["set", "1", "shift-start", "09:00"]);

    let board = stored_board(&env);
    assert_eq!(board.employees[0].name.text, "Alice");
    assert_eq!(board.employees[0].shift_start.text, "09:00");

    env.sb()
        .arg("show")
        .assert()
        .success()
        .stdout(contains("Alice [not-clocked]"))
        .stdout(contains("09:00 [normal]"));
}

#[test]
fn test_cycle_refused_in_edit_mode() {
    let env = TestEnv::new();
    env.init();

    env.sb()
        .args(["cycle", "1", "name"])
        .assert()
        .failure()
        .stderr(contains("manage mode"));

    assert_eq!(stored_board(&env).employees[0].name.status, Status::NotClocked);
}

#[test]
fn test_mode_toggle_then_cycle_three_times() {
    let env = TestEnv::new();
    env.init();

    env.sb()
        .arg("mode")
        .assert()
        .success()
        .stdout(contains("manage mode"));

    env.sb()
        .args(["cycle", "1", "name"])
        .assert()
        .success()
        .stdout(contains("clocked-in"));
    env.sb()
        .args(["cycle", "1", "name"])
        .assert()
        .success()
        .stdout(contains("clocked-out"));
    env.sb()
        .args(["cycle", "1", "name"])
        .assert()
        .success()
        .stdout(contains("not-clocked"));

    env.sb()
        .args(["set", "1", "name", "Bob"])
        .assert()
        .failure()
        .stderr(contains("edit mode"));

    env.sb()
        .arg("show")
        .assert()
        .success()
        .stdout(contains("MANAGE mode"));
}

#[test]
fn test_cross_field_tags_in_show() {
    let env = TestEnv::new();
    env.init();
    env.run_ok(&["set", "1", "name", "Carla"]);
    env.run_ok(&["mode"]);
    env.run_ok(&["cycle", "1", "shiftEnd"]);

    let board = stored_board(&env);
    assert_eq!(board.employees[0].shift_end.status, Status::Tardy);

    env.sb()
        .arg("show")
        .assert()
        .success()
        .stdout(contains("Carla [not-clocked]"))
        .stdout(contains("-- [tardy]"));
}

#[test]
fn test_add_and_delete_rows() {
    let env = TestEnv::new();
    env.init();

    env.sb()
        .arg("add")
        .assert()
        .success()
        .stdout(contains("Row #2 added"));
    env.run_ok(&["add"]);
    env.run_ok(&["set", "2", "name", "Bob"]);
    env.run_ok(&["set", "3", "name", "Cid"]);

    env.sb()
        .args(["del", "2", "--yes"])
        .assert()
        .success()
        .stdout(contains("2 rows left"));

    let names: Vec<String> = stored_board(&env)
        .employees
        .into_iter()
        .map(|e| e.name.text)
        .collect();
    assert_eq!(names, ["", "Cid"]);
}

#[test]
fn test_delete_last_row_clears_it() {
    let env = TestEnv::new();
    env.init();
    env.run_ok(&["set", "1", "name", "Solo"]);

    env.sb()
        .args(["del", "1", "-y"])
        .assert()
        .success()
        .stdout(contains("cleared"));

    assert_eq!(stored_board(&env), Dashboard::default());
}

#[test]
fn test_delete_asks_for_confirmation() {
    let env = TestEnv::new();
    env.init();
    env.run_ok(&["add"]);

    env.sb()
        .args(["del", "2"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));
    assert_eq!(stored_board(&env).employees.len(), 2);

    env.sb()
        .args(["del", "2"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Row #2 deleted"));
    assert_eq!(stored_board(&env).employees.len(), 1);
}

#[test]
fn test_invalid_row_is_an_error() {
    let env = TestEnv::new();
    env.init();

    env.sb()
        .args(["del", "5", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Invalid row: 5"));

    env.sb()
        .args(["set", "0", "name", "x"])
        .assert()
        .failure()
        .stderr(contains("Invalid row: 0"));
}

#[test]
fn test_unknown_field_is_rejected_by_parser() {
    let env = TestEnv::new();
    env.init();

    env.sb()
        .args(["set", "1", "coffee", "x"])
        .assert()
        .failure()
        .stderr(contains("unknown field 'coffee'"));
}

#[test]
fn test_reset_restores_default_board() {
    let env = TestEnv::new();
    env.init();
    env.run_ok(&["add"]);
    env.run_ok(&["set", "1", "name", "Ann"]);
    env.run_ok(&["mode"]);

    env.sb()
        .arg("reset")
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));
    assert_eq!(stored_board(&env).employees.len(), 2);

    env.sb()
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(contains("Board reset"));
    assert_eq!(stored_board(&env), Dashboard::default());
}

#[test]
fn test_corrupt_blob_is_replaced_on_next_run() {
    let env = TestEnv::new();
    env.init();

    let conn = rusqlite::Connection::open(&env.db).unwrap();
    conn.execute(
        "UPDATE kv SET value = '{broken' WHERE key = 'employeeDashboard'",
        [],
    )
    .unwrap();
    drop(conn);

    env.sb()
        .arg("show")
        .assert()
        .success()
        .stdout(contains("EDIT mode"));
    assert_eq!(stored_board(&env), Dashboard::default());
}

#[test]
fn test_custom_key_keeps_boards_apart() {
    let env = TestEnv::new();
    env.init();

    env.run_ok(&["--key", "night", "set", "1", "name", "Nora"]);

    assert_eq!(stored_board(&env).employees[0].name.text, "");
    env.sb()
        .args(["--key", "night", "show"])
        .assert()
        .success()
        .stdout(contains("Nora"));
}

#[test]
fn test_export_json_and_csv() {
    let env = TestEnv::new();
    env.init();
    env.run_ok(&["set", "1", "name", "Ann"]);
    env.run_ok(&["set", "1", "lunch", "12:30"]);

    let json_out = env.home.path().join("out/board.json");
    let json_out = json_out.to_str().unwrap();
    env.sb()
        .args(["export", "--format", "json", "--file", json_out])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let exported: Dashboard =
        serde_json::from_str(&std::fs::read_to_string(json_out).unwrap()).unwrap();
    assert_eq!(exported, stored_board(&env));

    let csv_out = env.home.path().join("board.csv");
    let csv_out = csv_out.to_str().unwrap();
    env.run_ok(&["export", "--format", "csv", "--file", csv_out]);

    let csv = std::fs::read_to_string(csv_out).unwrap();
    let mut lines = csv.lines();
    assert!(lines.next().unwrap().starts_with("row,name,name_status,shift_start"));
    assert_eq!(
        lines.next().unwrap(),
        "1,Ann,not-clocked,,normal,,normal,,not-started,12:30,not-started,,not-started"
    );
}

#[test]
fn test_export_does_not_overwrite_without_force() {
    let env = TestEnv::new();
    env.init();

    let out = env.home.path().join("board.json");
    std::fs::write(&out, "keep me").unwrap();
    let out = out.to_str().unwrap();

    env.sb()
        .args(["export", "--file", out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));
    assert_eq!(std::fs::read_to_string(out).unwrap(), "keep me");

    env.sb()
        .args(["export", "--file", out, "--force"])
        .assert()
        .success();
    assert!(std::fs::read_to_string(out).unwrap().contains("isEditMode"));
}

#[test]
fn test_init_writes_config_file() {
    let env = TestEnv::new();

    env.sb().arg("init").assert().success();

    let conf = env.home.path().join(".shiftboard/shiftboard.conf");
    let content = std::fs::read_to_string(conf).unwrap();
    assert!(content.contains("storage_key: employeeDashboard"));
    assert!(content.contains(&env.db));

    env.sb()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("storage_key").and(contains("color: true")));
}

#[test]
fn test_relative_db_path_is_taken_from_working_dir() {
    let env = TestEnv::new();

    env.bare()
        .args(["--db", "rel.sqlite", "--test", "init"])
        .assert()
        .success();
    env.bare()
        .args(["--db", "rel.sqlite", "set", "1", "name", "Rita"])
        .assert()
        .success();

    let local = env.home.path().join("rel.sqlite");
    assert!(local.exists());
    assert!(!env.home.path().join(".shiftboard/rel.sqlite").exists());

    let conn = rusqlite::Connection::open(&local).unwrap();
    let raw: String = conn
        .query_row(
            "SELECT value FROM kv WHERE key = 'employeeDashboard'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    let board: Dashboard = serde_json::from_str(&raw).unwrap();
    assert_eq!(board.employees[0].name.text, "Rita");
}

#[test]
fn test_unopenable_database_falls_back_to_memory() {
    let env = TestEnv::new();
    let missing = env.home.path().join("no/such/dir/board.sqlite");
    let missing = missing.to_str().unwrap();

    env.bare()
        .args(["--db", missing, "show"])
        .assert()
        .success()
        .stdout(contains("changes will not be saved"))
        .stdout(contains("EDIT mode"));

    env.bare()
        .args(["--db", missing, "add"])
        .assert()
        .success()
        .stdout(contains("Row #2 added"));

    assert!(!env.home.path().join("no").exists());
}
