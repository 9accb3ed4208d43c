//! Seeded, randomized test suite runner.
//!
//! Cases are registered in a fixed order and executed in a permutation of
//! that order derived from the harness seed. The same seed always yields the
//! same permutation, so a failing order can be replayed with `--seed`.
//!
//! Cases run one at a time, each in its own task so a panic fails only that
//! case. A case also fails if its context saw an unmocked request.

use std::future::Future;

use futures::FutureExt;
use futures::future::BoxFuture;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::context::TestContext;
use super::harness::Harness;

type CaseFn = Box<dyn Fn(TestContext) -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync>;

struct TestCase {
    name: String,
    run: CaseFn,
}

/// A collection of named async test cases.
#[derive(Default)]
pub struct Suite {
    cases: Vec<TestCase>,
}

impl Suite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a case.
    pub fn case<F, Fut>(mut self, name: impl Into<String>, case: F) -> Self
    where
        F: Fn(TestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.cases.push(TestCase {
            name: name.into(),
            run: Box::new(move |ctx| case(ctx).boxed()),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.cases.iter().map(|case| case.name.as_str()).collect()
    }

    /// Names in the order a run with `seed` executes them.
    pub fn order(&self, seed: u64) -> Vec<&str> {
        self.shuffled_indices(seed)
            .into_iter()
            .map(|i| self.cases[i].name.as_str())
            .collect()
    }

    fn shuffled_indices(&self, seed: u64) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.cases.len()).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);
        indices
    }

    /// Run every case in seeded order and collect the outcome.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn run(&self, harness: &Harness) -> SuiteReport {
        let seed = harness.seed();
        let mut report = SuiteReport {
            seed,
            passed: Vec::new(),
            failed: Vec::new(),
        };

        println!("\nrunning {} tests (seed {})", self.cases.len(), seed);

        for index in self.shuffled_indices(seed) {
            let case = &self.cases[index];
            let ctx = harness.context().await;

            let outcome = tokio::spawn((case.run)(ctx.clone())).await;
            let mut failure = match outcome {
                Ok(Ok(())) => None,
                Ok(Err(err)) => Some(format!("{:#}", err)),
                Err(join_err) if join_err.is_panic() => {
                    Some(panic_message(join_err.into_panic()))
                }
                Err(join_err) => Some(join_err.to_string()),
            };

            if let Ok(server) = ctx.server() {
                let unmocked = server.unmocked_requests();
                if !unmocked.is_empty() {
                    let reason = format!("unmocked requests: {}", unmocked.join(", "));
                    failure = Some(match failure {
                        Some(existing) => format!("{}; {}", existing, reason),
                        None => reason,
                    });
                }
            }

            match failure {
                None => {
                    println!("test {} ... ok", case.name);
                    report.passed.push(case.name.clone());
                }
                Some(reason) => {
                    println!("test {} ... FAILED", case.name);
                    report.failed.push(CaseFailure {
                        name: case.name.clone(),
                        reason,
                    });
                }
            }
        }

        report.print_summary();
        report
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(message) => format!("panicked: {}", message),
        Err(payload) => match payload.downcast::<&'static str>() {
            Ok(message) => format!("panicked: {}", message),
            Err(_) => "panicked".to_string(),
        },
    }
}

/// A failed case and why it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFailure {
    pub name: String,
    pub reason: String,
}

/// Outcome of a [`Suite::run`].
#[derive(Debug, Clone)]
pub struct SuiteReport {
    pub seed: u64,
    pub passed: Vec<String>,
    pub failed: Vec<CaseFailure>,
}

impl SuiteReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    fn print_summary(&self) {
        if !self.failed.is_empty() {
            println!("\nfailures:");
            for failure in &self.failed {
                println!("    {}: {}", failure.name, failure.reason);
            }
        }
        println!(
            "\ntest result: {}. {} passed; {} failed",
            if self.is_success() { "ok" } else { "FAILED" },
            self.passed.len(),
            self.failed.len()
        );
        println!("Randomized with seed {} (rerun with --seed {})\n", self.seed, self.seed);
    }

    /// Exit the process: status 0 on success, 101 on failure.
    pub fn exit(self) -> ! {
        std::process::exit(if self.is_success() { 0 } else { 101 })
    }
}
