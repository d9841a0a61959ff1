//! Request handlers
//!
//! Two GET endpoints serve the section list and the accounts grouped by
//! section; every state-changing operation arrives as a form-encoded POST
//! to the root path with an `action` discriminator. Domain failures come
//! back as 400 with the message in the body, upstream lookup failures as
//! 404 or 500, and storage failures as 500.

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::TrackerError;
use crate::lookup::{LookupError, RankClient};
use crate::models::{Account, AccountKey, PlayerRank};
use crate::services::{AccountService, SectionService};
use crate::storage::Storage;

/// Form payload for the action endpoint
///
/// Only `action` is required; the remaining fields default to empty so a
/// client sends just the ones its action needs.
#[derive(Debug, Deserialize)]
pub struct ActionForm {
    pub action: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub hashtag: String,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default)]
    pub account_username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub section_name: String,
}

fn default_region() -> String {
    "na".to_string()
}

/// Error payload for lookup and server failures
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ErrorBody {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Outcome payload for state-changing actions
#[derive(Debug, Serialize)]
struct ActionStatus {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ActionStatus {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// List all sections, ordered by name
#[get("/get_sections")]
pub async fn get_sections(storage: web::Data<Storage>) -> HttpResponse {
    match SectionService::new(&storage).list() {
        Ok(sections) => HttpResponse::Ok().json(sections),
        Err(err) => storage_failure(err),
    }
}

/// List all accounts, grouped by section name
#[get("/get_accounts")]
pub async fn get_accounts(storage: web::Data<Storage>) -> HttpResponse {
    match AccountService::new(&storage).list_by_section() {
        Ok(grouped) => HttpResponse::Ok().json(grouped),
        Err(err) => storage_failure(err),
    }
}

/// Dispatch a form-encoded action
#[post("/")]
pub async fn post_action(
    storage: web::Data<Storage>,
    lookup: web::Data<RankClient>,
    form: web::Form<ActionForm>,
) -> HttpResponse {
    let form = form.into_inner();
    match form.action.as_str() {
        "check" => check_rank(&lookup, &form).await,
        "save" => save_account(&storage, &lookup, form).await,
        "delete" => delete_account(&storage, &form),
        "create_section" => create_section(&storage, &form),
        "delete_section" => delete_section(&storage, &form),
        _ => HttpResponse::BadRequest().json(ErrorBody::new("Unknown action")),
    }
}

/// Look up a player's rank without touching the store
async fn check_rank(lookup: &RankClient, form: &ActionForm) -> HttpResponse {
    match lookup
        .fetch_rank(&form.username, &form.hashtag, &form.region)
        .await
    {
        Ok(data) if data.rank.is_some() => HttpResponse::Ok().json(PlayerRank {
            player_name: format!("{}#{}", form.username, form.hashtag),
            rank: data.rank,
            rr: data.rr,
        }),
        Ok(_) => {
            HttpResponse::InternalServerError().json(ErrorBody::new("Could not parse rank data."))
        }
        Err(err @ LookupError::Status(_)) => {
            HttpResponse::NotFound().json(ErrorBody::new(err.to_string()))
        }
        Err(err) => HttpResponse::InternalServerError().json(ErrorBody::new(err.to_string())),
    }
}

/// Save an account, enriched with fresh rank data when the lookup
/// service answers in time
async fn save_account(storage: &Storage, lookup: &RankClient, form: ActionForm) -> HttpResponse {
    if form.username.trim().is_empty() || form.hashtag.trim().is_empty() {
        return HttpResponse::BadRequest()
            .json(ActionStatus::failed("In-game Name and Hashtag are required."));
    }

    let mut account = Account::new(form.username, form.hashtag, form.region);
    account.account_username = form.account_username;
    account.password = form.password;
    account.section = form.section;

    // Enrichment is best-effort: an unreachable lookup service must not
    // block the save.
    match lookup
        .fetch_rank(&account.username, &account.hashtag, &account.region)
        .await
    {
        Ok(data) if data.rank.is_some() => {
            account.rank = data.rank;
            account.rr = data.rr;
        }
        Ok(_) => {}
        Err(err) => {
            warn!(account = %account.key(), error = %err, "rank enrichment failed");
        }
    }

    match AccountService::new(storage).save(account) {
        Ok(saved) => {
            info!(account = %saved.key(), section = %saved.section, "account saved");
            HttpResponse::Ok().json(ActionStatus::ok())
        }
        Err(err) => action_failure(err),
    }
}

/// Delete an account by its key; deleting an unknown account is a no-op
fn delete_account(storage: &Storage, form: &ActionForm) -> HttpResponse {
    let key = AccountKey::new(
        form.username.clone(),
        form.hashtag.clone(),
        form.region.clone(),
    );
    match AccountService::new(storage).delete(&key) {
        Ok(removed) => {
            if removed {
                info!(account = %key, "account deleted");
            }
            HttpResponse::Ok().json(ActionStatus::ok())
        }
        Err(err) => action_failure(err),
    }
}

/// Create a new, empty section
fn create_section(storage: &Storage, form: &ActionForm) -> HttpResponse {
    match SectionService::new(storage).create(&form.section_name) {
        Ok(section) => {
            info!(section = %section.name, "section created");
            HttpResponse::Ok().json(ActionStatus::ok())
        }
        Err(err) => action_failure(err),
    }
}

/// Delete a section, moving its accounts to Default first
fn delete_section(storage: &Storage, form: &ActionForm) -> HttpResponse {
    match SectionService::new(storage).delete(&form.section_name) {
        Ok(moved) => {
            info!(section = %form.section_name, moved, "section deleted");
            HttpResponse::Ok().json(ActionStatus::ok())
        }
        Err(err) => action_failure(err),
    }
}

/// Map a service error onto an action response
///
/// Domain rejections keep their message and come back as 400; anything
/// else is a server fault and collapses to 500.
fn action_failure(err: TrackerError) -> HttpResponse {
    match &err {
        TrackerError::Validation(msg) => HttpResponse::BadRequest().json(ActionStatus::failed(msg)),
        TrackerError::NotFound { .. } | TrackerError::Duplicate { .. } => {
            HttpResponse::BadRequest().json(ActionStatus::failed(err.to_string()))
        }
        _ => {
            warn!(error = %err, "action failed");
            HttpResponse::InternalServerError()
                .json(ActionStatus::failed(format!("Server error: {err}")))
        }
    }
}

/// Map a storage error on a read endpoint onto a 500 response
fn storage_failure(err: TrackerError) -> HttpResponse {
    warn!(error = %err, "storage read failed");
    HttpResponse::InternalServerError().json(ErrorBody::new(format!("Server error: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::storage::initialize_storage;
    use actix_web::{test, App};
    use serde_json::Value;
    use std::time::Duration;
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        initialize_storage(&storage).unwrap();
        (temp_dir, storage)
    }

    /// A lookup client pointed at a closed port, so enrichment fails fast
    fn unreachable_lookup() -> RankClient {
        RankClient::new("http://127.0.0.1:9", Duration::from_millis(200)).unwrap()
    }

    fn test_app(
        storage: Storage,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(storage))
            .app_data(web::Data::new(unreachable_lookup()))
            .configure(crate::server::configure)
    }

    async fn post_form(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        fields: &[(&str, &str)],
    ) -> actix_web::dev::ServiceResponse {
        let request = test::TestRequest::post()
            .uri("/")
            .set_form(fields)
            .to_request();
        test::call_service(app, request).await
    }

    #[actix_web::test]
    async fn test_get_sections_starts_with_default() {
        let (_dir, storage) = test_storage();
        let app = test::init_service(test_app(storage)).await;

        let request = test::TestRequest::get().uri("/get_sections").to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_success());

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body, serde_json::json!([{"name": "Default"}]));
    }

    #[actix_web::test]
    async fn test_create_section_then_duplicate() {
        let (_dir, storage) = test_storage();
        let app = test::init_service(test_app(storage)).await;

        let response = post_form(
            &app,
            &[("action", "create_section"), ("section_name", "Smurfs")],
        )
        .await;
        assert!(response.status().is_success());
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["success"], Value::Bool(true));

        let response = post_form(
            &app,
            &[("action", "create_section"), ("section_name", "Smurfs")],
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["success"], Value::Bool(false));
        assert_eq!(body["error"], "Section already exists: Smurfs");
    }

    #[actix_web::test]
    async fn test_create_section_rejects_blank_name() {
        let (_dir, storage) = test_storage();
        let app = test::init_service(test_app(storage)).await;

        let response = post_form(
            &app,
            &[("action", "create_section"), ("section_name", "   ")],
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "Section name cannot be empty.");
    }

    #[actix_web::test]
    async fn test_save_account_survives_unreachable_lookup() {
        let (_dir, storage) = test_storage();
        let app = test::init_service(test_app(storage)).await;

        let response = post_form(
            &app,
            &[
                ("action", "save"),
                ("username", "Shroud"),
                ("hashtag", "1234"),
                ("region", "na"),
                ("account_username", "shroudmain"),
                ("password", "hunter2"),
            ],
        )
        .await;
        assert!(response.status().is_success());
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["success"], Value::Bool(true));

        let request = test::TestRequest::get().uri("/get_accounts").to_request();
        let response = test::call_service(&app, request).await;
        let body: Value = test::read_body_json(response).await;
        let saved = &body["Default"][0];
        assert_eq!(saved["username"], "Shroud");
        assert_eq!(saved["hashtag"], "1234");
        assert_eq!(saved["section"], "Default");
        assert_eq!(saved["rank"], Value::Null);
    }

    #[actix_web::test]
    async fn test_save_account_requires_name_and_hashtag() {
        let (_dir, storage) = test_storage();
        let app = test::init_service(test_app(storage)).await;

        let response = post_form(
            &app,
            &[("action", "save"), ("username", "Shroud"), ("hashtag", " ")],
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "In-game Name and Hashtag are required.");
    }

    #[actix_web::test]
    async fn test_save_account_rejects_unknown_section() {
        let (_dir, storage) = test_storage();
        let app = test::init_service(test_app(storage)).await;

        let response = post_form(
            &app,
            &[
                ("action", "save"),
                ("username", "Shroud"),
                ("hashtag", "1234"),
                ("section", "Ghosts"),
            ],
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "Section not found: Ghosts");
    }

    #[actix_web::test]
    async fn test_delete_account_is_idempotent() {
        let (_dir, storage) = test_storage();
        let app = test::init_service(test_app(storage)).await;

        post_form(
            &app,
            &[("action", "save"), ("username", "Amy"), ("hashtag", "111")],
        )
        .await;

        let fields = [
            ("action", "delete"),
            ("username", "Amy"),
            ("hashtag", "111"),
            ("region", "na"),
        ];
        for _ in 0..2 {
            let response = post_form(&app, &fields).await;
            assert!(response.status().is_success());
            let body: Value = test::read_body_json(response).await;
            assert_eq!(body["success"], Value::Bool(true));
        }
    }

    #[actix_web::test]
    async fn test_delete_section_moves_accounts_to_default() {
        let (_dir, storage) = test_storage();
        let app = test::init_service(test_app(storage)).await;

        post_form(
            &app,
            &[("action", "create_section"), ("section_name", "Smurfs")],
        )
        .await;
        post_form(
            &app,
            &[
                ("action", "save"),
                ("username", "Amy"),
                ("hashtag", "111"),
                ("section", "Smurfs"),
            ],
        )
        .await;

        let response = post_form(
            &app,
            &[("action", "delete_section"), ("section_name", "Smurfs")],
        )
        .await;
        assert!(response.status().is_success());

        let request = test::TestRequest::get().uri("/get_accounts").to_request();
        let response = test::call_service(&app, request).await;
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["Default"][0]["username"], "Amy");
        assert_eq!(body["Default"][0]["section"], "Default");

        let request = test::TestRequest::get().uri("/get_sections").to_request();
        let response = test::call_service(&app, request).await;
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body, serde_json::json!([{"name": "Default"}]));
    }

    #[actix_web::test]
    async fn test_delete_section_protects_default() {
        let (_dir, storage) = test_storage();
        let app = test::init_service(test_app(storage)).await;

        let response = post_form(
            &app,
            &[("action", "delete_section"), ("section_name", "Default")],
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "Cannot delete the Default section.");
    }

    #[actix_web::test]
    async fn test_unknown_action_is_rejected() {
        let (_dir, storage) = test_storage();
        let app = test::init_service(test_app(storage)).await;

        let response = post_form(&app, &[("action", "explode")]).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "Unknown action");
    }

    #[actix_web::test]
    async fn test_check_reports_unreachable_lookup() {
        let (_dir, storage) = test_storage();
        let app = test::init_service(test_app(storage)).await;

        let response = post_form(
            &app,
            &[("action", "check"), ("username", "Amy"), ("hashtag", "111")],
        )
        .await;
        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
        let body: Value = test::read_body_json(response).await;
        assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    }

    #[actix_web::test]
    async fn test_get_accounts_omits_empty_sections() {
        let (_dir, storage) = test_storage();
        let app = test::init_service(test_app(storage)).await;

        post_form(
            &app,
            &[("action", "create_section"), ("section_name", "Smurfs")],
        )
        .await;
        post_form(
            &app,
            &[
                ("action", "save"),
                ("username", "Amy"),
                ("hashtag", "111"),
                ("section", "Smurfs"),
            ],
        )
        .await;

        let request = test::TestRequest::get().uri("/get_accounts").to_request();
        let response = test::call_service(&app, request).await;
        let body: Value = test::read_body_json(response).await;
        let grouped = body.as_object().unwrap();
        assert_eq!(grouped.len(), 1);
        assert!(grouped.contains_key("Smurfs"));
    }
}
