// Smoke tests: each demo binary runs to completion and prints its headline.

use assert_cmd::Command;
use predicates::prelude::*;

fn demo(name: &str) -> Command {
    Command::cargo_bin(name).expect("demo binary builds")
}

#[test]
fn data_demo_runs() {
    demo("data")
        .assert()
        .success()
        .stdout(predicate::str::contains("demonstrate value types"))
        .stdout(predicate::str::contains("That's all Folks!"));
}

#[test]
fn objects_demo_runs() {
    demo("objects")
        .assert()
        .success()
        .stdout(predicate::str::contains("demonstrate reference types"))
        .stdout(predicate::str::contains("first is the same instance as second"))
        .stdout(predicate::str::contains("first is not the same instance as third"));
}

#[test]
fn generics_demo_runs() {
    demo("generics")
        .assert()
        .success()
        .stdout(predicate::str::contains("demonstrate generic types"))
        .stdout(predicate::str::contains("max over empty"));
}

#[test]
fn iteration_demo_runs() {
    demo("iteration")
        .assert()
        .success()
        .stdout(predicate::str::contains("demonstrate iteration protocols"))
        .stdout(predicate::str::contains("That's all Folks!"));
}
