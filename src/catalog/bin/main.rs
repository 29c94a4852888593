use lambda_http::{run, Error};
use tracing::info;
use library_catalog::catalog::controller::routes;
use library_catalog::core::controller::AppState;
use library_catalog::core::domain::Configuration;
use library_catalog::utils::ddb::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/images-test.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::from_env()?;
    if config.dev_mode {
        std::env::set_var("AWS_LAMBDA_FUNCTION_NAME", "_");
        std::env::set_var("AWS_LAMBDA_FUNCTION_MEMORY_SIZE", "4096");
        std::env::set_var("AWS_LAMBDA_FUNCTION_VERSION", "1");
        std::env::set_var("AWS_LAMBDA_RUNTIME_API", "http://[::]:9000/.rt");
    }

    let state = AppState::new(config).await;
    info!(branch = state.config.branch_id.as_str(), store = %state.config.store, "catalog service starting");

    run(routes(state)).await
}
