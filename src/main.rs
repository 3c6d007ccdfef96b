//! Says hello, then checks that the 19th Fibonacci number is 4181.
//!
//! Nothing is configurable. Set `RUST_LOG=debug` to watch the
//! computation on stderr.
extern crate easy_shortcuts as es;

use env_logger::{Builder, Env};
use es::traits::Die;

mod assertion;
mod fibonacci;

use assertion::{assert_truthy, AssertionError};
use fibonacci::fibonacci;

const GREETING: &str = "Hello, JS";
const FIB_LEN: u32 = 19;
const EXPECTED: u64 = 4181;

fn run_with(expected: u64) -> Result<(), AssertionError> {
    println!("{}", GREETING);

    let res = fibonacci(FIB_LEN);
    log::info!("fibonacci({}) = {}", FIB_LEN, res);

    assert_truthy(res == expected)?;
    Ok(())
}

fn main() {
    Builder::from_env(Env::default().default_filter_or("off")).init();

    // reported as "<program> error: uncaught Assertion failed", exit status 1
    run_with(EXPECTED).or_die("uncaught");
}
