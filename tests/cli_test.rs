use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_demo_sequence() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payment-strategy"));

    cmd.assert().success().stdout(predicate::eq(
        "Paid 100 with cash\n\
         Paid 200 with PayPal\n\
         Paid 300 with credit card\n\
         Paid 400 with bank transfer\n",
    ));

    Ok(())
}

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payment-strategy"));
    cmd.arg("tests/fixtures/payments.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Paid 100 with cash"))
        .stdout(predicate::str::contains("Paid 400 with bank transfer"));

    Ok(())
}

#[test]
fn test_cli_csv_output() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payment-strategy"));
    cmd.arg("tests/fixtures/payments.csv").arg("--output").arg("csv");

    cmd.assert().success().stdout(predicate::eq(
        "method,amount\ncash,100\npaypal,200\ncredit_card,300\nbank_transfer,400\n",
    ));

    Ok(())
}

#[test]
fn test_cli_missing_input_fails() {
    let mut cmd = Command::new(cargo_bin!("payment-strategy"));
    cmd.arg("tests/fixtures/does_not_exist.csv");

    cmd.assert().failure();
}
