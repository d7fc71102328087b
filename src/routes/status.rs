/// Fixed body returned for every request once the process reaches serving.
pub const SUCCESS_BODY: &str = "Successfully connected to the database!";

/// Root endpoint
///
/// Ignores the request entirely and confirms the startup probe succeeded.
/// Plain text, status 200.
pub async fn status() -> &'static str {
    SUCCESS_BODY
}
