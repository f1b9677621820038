//! Lambda entry point for the expression-evaluator function.

use calc_functions::handlers::evaluate;
use lambda_runtime::{run, service_fn, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    run(service_fn(evaluate::handle)).await
}
