//! Item pages and form handlers
//!
//! Every mutating route follows the same steps:
//! 1. validate the form; on failure flash the reason and send the user back
//!    to the same form without touching the store
//! 2. run the mutation in a session, commit on success, roll back on failure
//! 3. an update or delete that matches no row flashes "Item not found"
//! 4. the session is released on every path when it goes out of scope
//!
//! Store failures are flashed with their cause and the user lands on the
//! list; nothing is escalated past the handler.

use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use axum_extra::extract::SignedCookieJar;
use tracing::{error, info, warn};

use crate::db::{ItemRepo, Store, StoreError};
use crate::http::error::HttpError;
use crate::http::extractors::ItemId;
use crate::http::flash;
use crate::models::{Item, ItemForm, ItemInput};
use crate::state::AppState;
use crate::views::{self, PageContext};

const INDEX_PATH: &str = "/";
const NEW_ITEM_PATH: &str = "/item/new";

fn edit_path(id: i64) -> String {
    format!("/item/{}/edit", id)
}

/// GET / - list items, newest first
async fn list_items(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Html<String>), HttpError> {
    let items = load_items(state.store()).await?;

    let (jar, flashes) = flash::take(jar);
    let page = PageContext::new("Items", &flashes, state.database_display());
    Ok((jar, Html(views::index_page(&page, &items))))
}

/// GET /item/new - empty creation form
async fn new_item_form(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Html<String>) {
    let (jar, flashes) = flash::take(jar);
    let page = PageContext::new("New Item", &flashes, state.database_display());
    (jar, Html(views::form_page(&page, None)))
}

/// POST /item/new - validate and create
async fn create_item(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<ItemForm>,
) -> (SignedCookieJar, Redirect) {
    let input = match form.validate() {
        Ok(input) => input,
        Err(err) => {
            warn!(reason = %err, "Rejected new item");
            return flash::redirect(jar, err.to_string(), NEW_ITEM_PATH);
        }
    };

    match insert_item(state.store(), &input).await {
        Ok(id) => {
            info!(id, "Item created");
            flash::redirect(jar, "Item created", INDEX_PATH)
        }
        Err(err) => {
            error!(error = %err, "Failed to create item");
            flash::redirect(jar, format!("Error creating item: {}", err), INDEX_PATH)
        }
    }
}

/// GET /item/{id}/edit - edit form for an existing item
async fn edit_item_form(
    State(state): State<AppState>,
    ItemId(id): ItemId,
    jar: SignedCookieJar,
) -> Result<Response, HttpError> {
    let Some(item) = load_item(state.store(), id).await? else {
        warn!(id, "Edit requested for unknown item");
        return Ok(flash::redirect(jar, "Item not found", INDEX_PATH).into_response());
    };

    let (jar, flashes) = flash::take(jar);
    let page = PageContext::new("Edit Item", &flashes, state.database_display());
    Ok((jar, Html(views::form_page(&page, Some(&item)))).into_response())
}

/// POST /item/{id}/edit - validate and update
async fn update_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
    jar: SignedCookieJar,
    Form(form): Form<ItemForm>,
) -> (SignedCookieJar, Redirect) {
    let input = match form.validate() {
        Ok(input) => input,
        Err(err) => {
            warn!(id, reason = %err, "Rejected item update");
            return flash::redirect(jar, err.to_string(), &edit_path(id));
        }
    };

    match update_item_fields(state.store(), id, &input).await {
        Ok(()) => {
            info!(id, "Item updated");
            flash::redirect(jar, "Item updated", INDEX_PATH)
        }
        Err(err) if err.is_not_found() => {
            warn!(id, "Update requested for unknown item");
            flash::redirect(jar, "Item not found", INDEX_PATH)
        }
        Err(err) => {
            error!(id, error = %err, "Failed to update item");
            flash::redirect(jar, format!("Error updating item: {}", err), INDEX_PATH)
        }
    }
}

/// POST /item/{id}/delete - hard delete
async fn delete_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Redirect) {
    match delete_item_by_id(state.store(), id).await {
        Ok(()) => {
            info!(id, "Item deleted");
            flash::redirect(jar, "Item deleted", INDEX_PATH)
        }
        Err(err) if err.is_not_found() => {
            warn!(id, "Delete requested for unknown item");
            flash::redirect(jar, "Item not found", INDEX_PATH)
        }
        Err(err) => {
            error!(id, error = %err, "Failed to delete item");
            flash::redirect(jar, format!("Error deleting item: {}", err), INDEX_PATH)
        }
    }
}

async fn load_items(store: &Store) -> Result<Vec<Item>, StoreError> {
    let mut session = store.session().await?;
    let outcome = ItemRepo::new(&mut session).list_all_desc().await;
    session.finish(outcome).await
}

async fn load_item(store: &Store, id: i64) -> Result<Option<Item>, StoreError> {
    let mut session = store.session().await?;
    let outcome = ItemRepo::new(&mut session).get_by_id(id).await;
    session.finish(outcome).await
}

async fn insert_item(store: &Store, input: &ItemInput) -> Result<i64, StoreError> {
    let mut session = store.session().await?;
    let outcome = ItemRepo::new(&mut session).insert(input).await;
    session.finish(outcome).await
}

// Update and delete go straight to the write: a missing row shows up as
// zero rows affected, and no read snapshot is held before the write lock.
async fn update_item_fields(store: &Store, id: i64, input: &ItemInput) -> Result<(), StoreError> {
    let mut session = store.session().await?;
    let outcome = ItemRepo::new(&mut session).update_fields(id, input).await;
    session.finish(outcome).await
}

async fn delete_item_by_id(store: &Store, id: i64) -> Result<(), StoreError> {
    let mut session = store.session().await?;
    let outcome = ItemRepo::new(&mut session).delete_by_id(id).await;
    session.finish(outcome).await
}

/// Item routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items))
        .route(NEW_ITEM_PATH, get(new_item_form).post(create_item))
        .route("/item/{id}/edit", get(edit_item_form).post(update_item))
        .route("/item/{id}/delete", post(delete_item))
}
