/// Greeting served by the DB-probe service
pub const APP_GREETING: &str = "Hello from app-microservice!";

/// Greeting served by the photo service
pub const PHOTO_GREETING: &str = "Hello from photo-microservice!";

/// GET / on the DB-probe service
pub async fn app_index() -> &'static str {
    APP_GREETING
}

/// GET / on the photo service
pub async fn photo_index() -> &'static str {
    PHOTO_GREETING
}
