use lambda_http::{run, Error};

use paramecho_api::{config::Config, create_app, logging};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init_logger();
    let config = Config::from_env()?;
    let app = create_app(config);
    run(app).await
}
