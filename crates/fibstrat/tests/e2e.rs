//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn fibstrat() -> Command {
    Command::cargo_bin("fibstrat").expect("binary not found")
}

#[test]
fn help_flag() {
    fibstrat()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci"));
}

#[test]
fn version_flag() {
    fibstrat()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fibstrat"));
}

#[test]
fn default_run_computes_f0() {
    fibstrat()
        .env_remove("FIBSTRAT_N")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci number 0 = 0"));
}

#[test]
fn compute_f100_squaring() {
    fibstrat()
        .args(["--n", "100", "--method", "squaring"])
        .assert()
        .success()
        .stdout(predicate::str::contains("354224848179261915075"));
}

#[test]
fn compute_f100_by_ordinal() {
    fibstrat()
        .args(["--n", "100", "--method", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("354224848179261915075"));
}

#[test]
fn compute_f50_multiply() {
    fibstrat()
        .args(["--n", "50", "--method", "multiply"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12586269025"));
}

#[test]
fn compute_f10_sequential_case_insensitive() {
    fibstrat()
        .args(["--n", "10", "--method", "Sequential"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci number 10 = 55"));
}

#[test]
fn compute_f1000() {
    fibstrat()
        .args(["--n", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "43466557686937456435688527675040625802564",
        ));
}

#[test]
fn eigen_approximation() {
    fibstrat()
        .args(["--n", "19", "--method", "eigen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4181"));
}

#[test]
fn hide_suppresses_output() {
    fibstrat()
        .args(["--n", "100", "--hide"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn list_strategies() {
    fibstrat()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("0  naive"))
        .stdout(predicate::str::contains("5  squaring"))
        .stdout(predicate::str::contains("7  golden"));
}

#[test]
fn negative_n_fails_with_domain_error() {
    fibstrat()
        .args(["--n", "-1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("must be a non-negative integer"));
}

#[test]
fn unknown_method_lists_available() {
    fibstrat()
        .args(["--method", "bogus"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("unknown strategy"))
        .stderr(predicate::str::contains("5=squaring"));
}

#[test]
fn fixed_width_beyond_bound_fails() {
    fibstrat()
        .args(["--n", "100", "--method", "fixed"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("exact up to n = 92"));
}

#[test]
fn fixed_width_inside_bound_succeeds() {
    fibstrat()
        .args(["--n", "92", "--method", "fixed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("7540113804746346429"));
}

#[test]
fn env_var_fibstrat_n() {
    fibstrat()
        .env("FIBSTRAT_N", "42")
        .assert()
        .success()
        .stdout(predicate::str::contains("267914296"));
}
