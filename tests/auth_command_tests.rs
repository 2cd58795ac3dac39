mod common;

use anyhow::Result;
use common::fixtures::*;
use common::storefront::*;
use predicates::prelude::*;

#[test]
fn test_login_rejects_short_password() -> Result<()> {
    let store = setup_storefront()?;

    store
        .nexbuy()
        .args(["login", "--email", "asha@example.com", "--password", "123"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Provide valid credentials (6+ chars)."));

    assert!(!store.session_file().exists());

    Ok(())
}

#[test]
fn test_whoami_after_login() -> Result<()> {
    let store = signed_in_storefront()?;

    store
        .nexbuy()
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hi, asha"))
        .stdout(predicate::str::contains("Signed in as asha@example.com since"));

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.session_file())?)?;
    assert_eq!(saved["email"], "asha@example.com");
    assert!(saved["loggedAt"].is_i64());

    Ok(())
}

#[test]
fn test_logout() -> Result<()> {
    let store = signed_in_storefront()?;

    store
        .nexbuy()
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out asha@example.com"));

    store
        .nexbuy()
        .arg("whoami")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Not signed in"));

    store
        .nexbuy()
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nobody was signed in"));

    Ok(())
}
