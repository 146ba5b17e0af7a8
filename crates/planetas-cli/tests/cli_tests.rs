use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a test database
fn planetas_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("planetas").expect("Failed to find planetas binary");
    let db_path = temp_dir.path().join("cli_test.db");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

fn add_mars(temp_dir: &TempDir) {
    planetas_cmd(temp_dir)
        .args(["add", "--name", "Mars", "--distance", "1.52", "--size", "6779"])
        .assert()
        .success();
}

#[test]
fn test_cli_list_empty() {
    let temp_dir = create_cli_test_environment();

    planetas_cmd(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Gerenciador de Planetas"))
        .stdout(predicate::str::contains("Nenhum planeta cadastrado"));
}

#[test]
fn test_cli_default_command_lists() {
    let temp_dir = create_cli_test_environment();

    planetas_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nenhum planeta cadastrado"));
}

#[test]
fn test_cli_add_planet() {
    let temp_dir = create_cli_test_environment();

    planetas_cmd(&temp_dir)
        .args(["add", "--name", "Mars", "--distance", "1.52", "--size", "6779"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Planeta adicionado com sucesso!"))
        .stdout(predicate::str::contains("## 1. Mars"))
        .stdout(predicate::str::contains("Sem apelido"));
}

#[test]
fn test_cli_add_with_nickname() {
    let temp_dir = create_cli_test_environment();

    planetas_cmd(&temp_dir)
        .args([
            "add", "-n", "Earth", "-d", "1", "-s", "12742", "-k", "Terra",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("## 1. Earth"))
        .stdout(predicate::str::contains("Terra"));
}

#[test]
fn test_cli_add_rejects_invalid_input() {
    let temp_dir = create_cli_test_environment();

    let cases: [&[&str]; 4] = [
        &["add", "--distance", "1.52", "--size", "6779"],
        &["add", "--name", "Mars", "--distance", "abc", "--size", "6779"],
        &["add", "--name", "Mars", "--distance", "-3", "--size", "6779"],
        &["add", "--name", "Mars", "--distance", "1.52", "--size", "0"],
    ];
    for args in cases {
        planetas_cmd(&temp_dir)
            .args(args)
            .assert()
            .failure()
            .stdout(predicate::str::contains("# Adicionar Planeta"))
            .stdout(predicate::str::contains("Preencha os campos corretamente"));
    }

    planetas_cmd(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nenhum planeta cadastrado"));
}

#[test]
fn test_cli_edit_sets_nickname() {
    let temp_dir = create_cli_test_environment();
    add_mars(&temp_dir);

    planetas_cmd(&temp_dir)
        .args(["edit", "1", "--nickname", "Red Planet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Planeta atualizado com sucesso!"))
        .stdout(predicate::str::contains("## 1. Mars"))
        .stdout(predicate::str::contains("Red Planet"));
}

#[test]
fn test_cli_edit_clears_nickname() {
    let temp_dir = create_cli_test_environment();
    add_mars(&temp_dir);

    planetas_cmd(&temp_dir)
        .args(["edit", "1", "--nickname", "Red Planet"])
        .assert()
        .success();

    planetas_cmd(&temp_dir)
        .args(["edit", "1", "--nickname", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sem apelido"));
}

#[test]
fn test_cli_edit_invalid_keeps_record() {
    let temp_dir = create_cli_test_environment();
    add_mars(&temp_dir);

    planetas_cmd(&temp_dir)
        .args(["edit", "1", "--size", "-1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("# Editar Planeta"))
        .stdout(predicate::str::contains("Preencha os campos corretamente"));

    planetas_cmd(&temp_dir)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"size\": 6779.0"));
}

#[test]
fn test_cli_edit_unknown_planet() {
    let temp_dir = create_cli_test_environment();

    planetas_cmd(&temp_dir)
        .args(["edit", "42", "--name", "Ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot edit planet 42"));
}

#[test]
fn test_cli_delete_planet() {
    let temp_dir = create_cli_test_environment();
    add_mars(&temp_dir);

    planetas_cmd(&temp_dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Planeta excluído com sucesso!"))
        .stdout(predicate::str::contains("Nenhum planeta cadastrado"));
}

#[test]
fn test_cli_delete_missing_planet_fails() {
    let temp_dir = create_cli_test_environment();

    planetas_cmd(&temp_dir)
        .args(["rm", "7"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Falha ao excluir planeta."))
        .stderr(predicate::str::contains("Falha ao excluir planeta."));
}

#[test]
fn test_cli_list_json() {
    let temp_dir = create_cli_test_environment();

    planetas_cmd(&temp_dir)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));

    add_mars(&temp_dir);

    planetas_cmd(&temp_dir)
        .args(["ls", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Mars\""))
        .stdout(predicate::str::contains("\"distance\": 1.52"))
        .stdout(predicate::str::contains("nickname").not());
}
