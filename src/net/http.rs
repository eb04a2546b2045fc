//! Plain-text HTTP front for the account service.
//!
//! Every route answers `200 OK`; failures are only visible in the body text.

use axum::{
    Router,
    extract::{Path, State, rejection::PathRejection},
    routing::{delete, get, put},
};
use chrono::{NaiveDate, NaiveDateTime, SecondsFormat};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::Registry;
use crate::error::{AccountError, InfraResult};
use crate::models::types::Timestamp;

pub const CREATE_REQUIRED: &str = "Username, email and password fields are mandatory to create an account";
pub const UPDATE_REQUIRED: &str = "Username and password are mandatory to update an account";
pub const DELETE_REQUIRED: &str = "Username is mandatory to delete an account";
pub const LOGIN_CHECK_REQUIRED: &str = "Username and Date is mandatory to verify the last login";

#[derive(Clone)]
struct HttpAppCtx {
    registry: Arc<Registry>,
}

pub fn router(registry: Arc<Registry>) -> Router {
    Router::new()
        .route("/create/{username}/{password}/{email}", get(create_account))
        .route("/update/{username}/{password}", put(update_account))
        .route("/delete/{username}", delete(delete_account))
        .route("/logindetails/{username}/{date}", get(has_logged_in_since))
        .with_state(HttpAppCtx { registry })
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
}

/// Run the HTTP server until it fails
pub async fn serve(addr: std::net::SocketAddr, registry: Arc<Registry>) -> InfraResult<()> {
    let app = router(registry);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "accountstore http listening");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn create_account(
    State(ctx): State<HttpAppCtx>,
    params: Result<Path<(String, String, String)>, PathRejection>,
) -> String {
    let Path((username, password, email)) = match params {
        Ok(params) => params,
        Err(rejection) => return unreadable(CREATE_REQUIRED, rejection),
    };
    if is_blank(&username) || is_blank(&password) || is_blank(&email) {
        tracing::info!("{CREATE_REQUIRED}");
        return CREATE_REQUIRED.to_string();
    }

    match ctx.registry.services.account.create_account(&username, &password, &email).await {
        Ok(account) => format!("Account ID:{}", account.id),
        Err(e) => failure("creating an account", &username, e),
    }
}

async fn update_account(
    State(ctx): State<HttpAppCtx>,
    params: Result<Path<(String, String)>, PathRejection>,
) -> String {
    let Path((username, password)) = match params {
        Ok(params) => params,
        Err(rejection) => return unreadable(UPDATE_REQUIRED, rejection),
    };
    if is_blank(&username) || is_blank(&password) {
        tracing::info!("{UPDATE_REQUIRED}");
        return UPDATE_REQUIRED.to_string();
    }

    match ctx.registry.services.account.update_account(&username, &password).await {
        Ok(account) => format!("Account updated time:{}", render_timestamp(&account.last_login)),
        Err(e) => failure("updating an account", &username, e),
    }
}

async fn delete_account(State(ctx): State<HttpAppCtx>, params: Result<Path<String>, PathRejection>) -> String {
    let Path(username) = match params {
        Ok(params) => params,
        Err(rejection) => return unreadable(DELETE_REQUIRED, rejection),
    };
    if is_blank(&username) {
        tracing::info!("{DELETE_REQUIRED}");
        return DELETE_REQUIRED.to_string();
    }

    match ctx.registry.services.account.delete_account(&username).await {
        Ok(()) => "Account deleted Successfully".to_string(),
        Err(e) => failure("deleting an account", &username, e),
    }
}

async fn has_logged_in_since(
    State(ctx): State<HttpAppCtx>,
    params: Result<Path<(String, String)>, PathRejection>,
) -> String {
    let Path((username, date)) = match params {
        Ok(params) => params,
        Err(rejection) => return unreadable(LOGIN_CHECK_REQUIRED, rejection),
    };
    let since = match parse_since(&date) {
        Some(since) if !is_blank(&username) => since,
        _ => {
            tracing::info!("{LOGIN_CHECK_REQUIRED}");
            return LOGIN_CHECK_REQUIRED.to_string();
        }
    };

    match ctx.registry.services.account.has_logged_in_since(&username, since).await {
        Ok(status) => {
            tracing::info!(username = %username, since = %since, status, "login status checked");
            format!("User login status since{}:{}", render_timestamp(&since), status)
        }
        Err(e) => failure("verifying the login since", &username, e),
    }
}

fn failure(action: &str, username: &str, e: AccountError) -> String {
    tracing::error!(username = %username, error = %e, "exception occurred while {action}");
    e.to_string()
}

/// Path segments that cannot be decoded count as missing input.
fn unreadable(message: &'static str, rejection: PathRejection) -> String {
    tracing::info!(error = %rejection, "{message}");
    message.to_string()
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

pub fn render_timestamp(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.fff]` taken as UTC, or a
/// plain `YYYY-MM-DD` meaning midnight UTC.
pub fn parse_since(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(ts.to_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn parses_supported_date_forms() {
        let expect = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

        assert_eq!(parse_since("2024-01-02T03:04:05Z"), Some(expect));
        assert_eq!(parse_since("2024-01-02T05:04:05+02:00"), Some(expect));
        assert_eq!(parse_since("2024-01-02T03:04:05"), Some(expect));
        assert_eq!(
            parse_since("2024-01-02"),
            Some(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn rejects_bad_dates() {
        assert_eq!(parse_since(""), None);
        assert_eq!(parse_since("   "), None);
        assert_eq!(parse_since("yesterday"), None);
        assert_eq!(parse_since("2024-13-01"), None);
    }

    #[test]
    fn timestamps_render_with_millis() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap() + chrono::Duration::milliseconds(678);
        assert_eq!(render_timestamp(&ts), "2024-01-02T03:04:05.678Z");
    }
}
