//! Seed selection for randomized suite ordering.
//!
//! A seed supplied on the command line wins over `APP_SEARCH_TEST_SEED`.
//! Absent both, the harness draws a fresh one.

use app_search_config::constants::TEST_SEED_ENV;
use app_search_config::env_var_or_none;

use super::error::HarnessError;

/// Parse a seed value.
pub fn parse_seed(value: &str) -> Result<u64, HarnessError> {
    value.trim().parse().map_err(|_| HarnessError::InvalidSeed {
        value: value.to_string(),
    })
}

/// Find `--seed N` or `--seed=N` among the process arguments.
///
/// Arguments the harness does not recognize are ignored, since cargo
/// forwards its own test flags to every test binary.
pub fn seed_from_args<I, S>(args: I) -> Result<Option<u64>, HarnessError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        let arg = arg.as_ref();
        if let Some(value) = arg.strip_prefix("--seed=") {
            return parse_seed(value).map(Some);
        }
        if arg == "--seed" {
            return match iter.next() {
                Some(value) => parse_seed(value.as_ref()).map(Some),
                None => Err(HarnessError::InvalidSeed {
                    value: String::new(),
                }),
            };
        }
    }
    Ok(None)
}

/// Read the seed from `APP_SEARCH_TEST_SEED`.
pub fn seed_from_env() -> Result<Option<u64>, HarnessError> {
    env_var_or_none(TEST_SEED_ENV)
        .map(|value| parse_seed(&value))
        .transpose()
}
