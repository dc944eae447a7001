use calendar_store_api::Application;
use calendar_store_infra::{CalendarContext, ISys};
use calendar_store_sdk::CalendarSDK;
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;

/// Clock frozen at the morning of 2025-08-22
pub struct StaticTimeSys {}
impl ISys for StaticTimeSys {
    fn now(&self) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 22)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .expect("Valid datetime")
    }
}

pub struct TestApp {
    pub sys: Arc<dyn ISys>,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, CalendarSDK, String) {
    let mut ctx = CalendarContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.sys = Arc::new(StaticTimeSys {});

    let sys = ctx.sys.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { sys };
    let sdk = CalendarSDK::new(address.clone());
    (app, sdk, address)
}
