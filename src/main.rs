mod telemetry;

use calendar_store_api::Application;
use calendar_store_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("calendar_store".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context()
        .await
        .map_err(|e| std::io::Error::other(format!("Failed to setup context: {:?}", e)))?;

    let app = Application::new(context).await?;
    app.start().await
}
