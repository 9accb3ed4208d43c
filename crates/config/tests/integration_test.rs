//! Integration tests for the public configuration API.
//!
//! These exercise the crate the way the client and the test harness do:
//! load a dotenv file, then resolve options from the resulting environment.

use std::fs;

use app_search_config::constants::{API_ENDPOINT_ENV, API_KEY_ENV};
use app_search_config::{ClientOptions, load_dotenv_file, resolve_client_options};
use secrecy::ExposeSecret;
use serial_test::serial;
use tempfile::TempDir;

const CREDENTIAL_VARS: [&str; 5] = [
    "AS_API_KEY",
    "AS_PRIVATE_KEY",
    "AS_ACCOUNT_HOST_KEY",
    "AS_HOST_IDENTIFIER",
    "AS_API_ENDPOINT",
];

fn unset_all() -> Vec<(&'static str, Option<&'static str>)> {
    CREDENTIAL_VARS
        .iter()
        .map(|name| (*name, None))
        .chain(std::iter::once(("DOTENV_DISABLED", None)))
        .collect()
}

#[test]
#[serial]
fn test_dotenv_then_resolve() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".env.test");
    fs::write(
        &path,
        concat!(
            "AS_API_KEY=private-from-file\n",
            "AS_ACCOUNT_HOST_KEY=host-from-file\n",
            "AS_API_ENDPOINT=http://127.0.0.1:3002/api/as/v1/\n",
        ),
    )
    .unwrap();

    temp_env::with_vars(unset_all(), || {
        load_dotenv_file(&path).unwrap();
        let options = resolve_client_options();
        assert_eq!(options.api_key().expose_secret(), "private-from-file");
        assert_eq!(options.account_host_key(), "host-from-file");
        assert_eq!(
            options.api_endpoint(),
            Some("http://127.0.0.1:3002/api/as/v1/")
        );
    });
}

#[test]
#[serial]
fn test_shell_credentials_survive_dotenv() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".env.test");
    fs::write(&path, "AS_API_KEY=private-from-file\nAS_ACCOUNT_HOST_KEY=host-from-file\n").unwrap();

    let mut vars = unset_all();
    vars.retain(|(name, _)| *name != API_KEY_ENV);
    vars.push((API_KEY_ENV, Some("private-from-shell")));

    temp_env::with_vars(vars, || {
        assert!(load_dotenv_file(&path).unwrap());
        let options = resolve_client_options();
        assert_eq!(options.api_key().expose_secret(), "private-from-shell");
        assert_eq!(options.account_host_key(), "host-from-file");
    });
}

#[test]
#[serial]
fn test_resolved_options_match_constructed_options() {
    temp_env::with_vars(
        [
            (API_KEY_ENV, Some("private-key")),
            ("AS_ACCOUNT_HOST_KEY", Some("host-key")),
            (API_ENDPOINT_ENV, Some("https://example.api-endpoint.io")),
        ],
        || {
            let expected = ClientOptions::new("private-key", "host-key")
                .with_api_endpoint("https://example.api-endpoint.io");
            assert_eq!(resolve_client_options(), expected);
        },
    );
}
