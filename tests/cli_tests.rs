//! End-to-end CLI tests: authentication gate, upload → overview flow, the
//! analyst view and the logbook.

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{TestEnv, ptk};

#[test]
fn data_commands_require_credentials() {
    let env = TestEnv::new();

    ptk()
        .args([
            "--data-dir",
            env.data_dir.to_str().unwrap(),
            "--credentials",
            env.credentials.to_str().unwrap(),
            "overview",
        ])
        .assert()
        .failure()
        .stderr(contains("Missing credentials"));
}

#[test]
fn wrong_password_is_rejected_without_detail() {
    let env = TestEnv::new();

    ptk()
        .args([
            "--data-dir",
            env.data_dir.to_str().unwrap(),
            "--credentials",
            env.credentials.to_str().unwrap(),
            "-u",
            "usuario1",
            "-p",
            "errada",
            "overview",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid username or password"))
        .stderr(contains("usuario1").not());
}

#[test]
fn unknown_user_gets_the_same_message_as_wrong_password() {
    let env = TestEnv::new();

    ptk()
        .args([
            "--data-dir",
            env.data_dir.to_str().unwrap(),
            "--credentials",
            env.credentials.to_str().unwrap(),
            "-u",
            "fantasma",
            "-p",
            "x",
            "overview",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid username or password"));
}

#[test]
fn upload_then_overview_shows_the_expected_metrics() {
    let env = TestEnv::new();

    let upload = env.write_upload(
        "novos.csv",
        &[[
            "12345",
            "usuario1",
            "FINALIZADO",
            "00:01:30",
            "01/01/2024 10:00:00",
            "",
        ]],
    );

    env.cmd()
        .args(["upload", upload.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("carregado e processado com sucesso"));

    assert!(env.table_file().exists());

    env.cmd()
        .args(["overview", "--from", "01/01/2024", "--to", "01/01/2024"])
        .assert()
        .success()
        .stdout(contains("Total de Cadastros"))
        .stdout(contains("1 min 30 sec"))
        .stdout(contains("Ranking Dinâmico"))
        .stdout(contains("usuario1"));
}

#[test]
fn overview_on_an_empty_table_shows_zero_metrics() {
    let env = TestEnv::new();

    env.cmd()
        .args(["overview"])
        .assert()
        .success()
        .stdout(contains("Total de Cadastros"))
        .stdout(contains("0 min"));
}

#[test]
fn inverted_date_range_warns_and_still_renders() {
    let env = TestEnv::new();

    let upload = env.write_upload(
        "novos.csv",
        &[[
            "1",
            "usuario1",
            "FINALIZADO",
            "00:01:00",
            "05/01/2024 10:00:00",
            "",
        ]],
    );
    env.cmd()
        .args(["upload", upload.to_str().unwrap()])
        .assert()
        .success();

    env.cmd()
        .args(["overview", "--from", "06/01/2024", "--to", "05/01/2024"])
        .assert()
        .success()
        .stdout(contains("is after end date"))
        .stdout(contains("Distribuição de Status"));
}

#[test]
fn malformed_filter_date_is_an_input_error() {
    let env = TestEnv::new();

    env.cmd()
        .args(["overview", "--from", "2024-01-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn analyst_view_without_rows_shows_empty_states_not_a_crash() {
    let env = TestEnv::new();

    env.cmd()
        .args(["analyst", "usuario2"])
        .assert()
        .success()
        .stdout(contains("Total de Cadastros"))
        .stdout(contains("0 min"))
        .stdout(contains("Nenhum ponto de atenção encontrado."));
}

#[test]
fn analyst_view_scopes_metrics_and_flags_slow_items() {
    let env = TestEnv::new();

    let upload = env.write_upload(
        "novos.csv",
        &[
            [
                "1,111",
                "usuario1",
                "FINALIZADO",
                "00:02:01",
                "01/01/2024 10:00:00",
                "Carteira A",
            ],
            [
                "2222",
                "usuario1",
                "FINALIZADO",
                "00:02:00",
                "01/01/2024 11:00:00",
                "Carteira B",
            ],
            [
                "3333",
                "usuario2",
                "FINALIZADO",
                "00:09:00",
                "01/01/2024 12:00:00",
                "",
            ],
        ],
    );
    env.cmd()
        .args(["upload", upload.to_str().unwrap()])
        .assert()
        .success();

    env.cmd()
        .args(["analyst", "usuario1"])
        .assert()
        .success()
        .stdout(contains("Carteira A"))
        .stdout(contains("Carteira B"))
        // the 2:01 item is flagged with its protocol cleaned of commas
        .stdout(contains("1111"))
        .stdout(contains("1,111").not())
        // usuario2's slow item stays out of this view
        .stdout(contains("3333").not());
}

#[test]
fn analyst_list_prints_distinct_users() {
    let env = TestEnv::new();

    let upload = env.write_upload(
        "novos.csv",
        &[
            ["1", "usuario1", "FINALIZADO", "", "01/01/2024 10:00:00", ""],
            ["2", "usuario2", "FINALIZADO", "", "01/01/2024 10:00:00", ""],
            ["3", "usuario1", "FINALIZADO", "", "01/01/2024 10:00:00", ""],
        ],
    );
    env.cmd()
        .args(["upload", upload.to_str().unwrap()])
        .assert()
        .success();

    env.cmd()
        .args(["analyst", "--list"])
        .assert()
        .success()
        .stdout(contains("usuario1"))
        .stdout(contains("usuario2"));
}

#[test]
fn analyst_list_honours_the_date_filter() {
    let env = TestEnv::new();

    let upload = env.write_upload(
        "novos.csv",
        &[
            ["1", "usuario1", "FINALIZADO", "", "01/01/2024 10:00:00", ""],
            ["2", "usuario2", "FINALIZADO", "", "15/02/2024 10:00:00", ""],
            // no parseable timestamp: never inside a bounded range
            ["3", "usuario3", "FINALIZADO", "", "", ""],
        ],
    );
    env.cmd()
        .args(["upload", upload.to_str().unwrap()])
        .assert()
        .success();

    env.cmd()
        .args([
            "analyst",
            "--list",
            "--from",
            "01/01/2024",
            "--to",
            "31/01/2024",
        ])
        .assert()
        .success()
        .stdout(contains("usuario1"))
        .stdout(contains("usuario2").not())
        .stdout(contains("usuario3").not());
}

#[test]
fn logbook_flow_blank_rejected_then_note_appended() {
    let env = TestEnv::new();

    // empty state first
    env.cmd()
        .args(["log"])
        .assert()
        .success()
        .stdout(contains("Nenhuma anotação encontrada."));

    // blank note: validation error, nothing written
    env.cmd()
        .args(["log", "--add", "   "])
        .assert()
        .failure()
        .stderr(contains("cannot be empty"));
    assert!(!env.log_file().exists());

    // real note: appended and re-displayed
    env.cmd()
        .args(["log", "--add", "ok"])
        .assert()
        .success()
        .stdout(contains("Anotação salva com sucesso!"))
        .stdout(contains("- ok"));

    let content = std::fs::read_to_string(env.log_file()).expect("read log");
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn save_rewrites_the_full_table_in_canonical_form() {
    let env = TestEnv::new();

    let upload = env.write_upload(
        "novos.csv",
        &[[
            "1",
            "usuario1",
            "FINALIZADO",
            "0 days 00:01:30",
            "01/01/2024 10:00:00",
            "",
        ]],
    );
    env.cmd()
        .args(["upload", upload.to_str().unwrap()])
        .assert()
        .success();

    env.cmd().args(["save"]).assert().success();

    let content = std::fs::read_to_string(env.table_file()).expect("read table");
    // the long pandas-style duration was normalized on save
    assert!(content.contains("00:01:30"));
    assert!(!content.contains("0 days"));
}
