use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    response::IntoResponse,
    Extension,
};
use futures::{SinkExt, StreamExt};
use serde::de::DeserializeOwned;
use serde_json::{json, to_string, Value};
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};

use crate::auth::{require_admin, AuthUser};
use crate::catalog::MovieFilter;
use crate::controllers::{
    movie_controller::remove_movie,
    seat_controller::seat_grid_for,
    theater_controller::{remove_selected_screen, remove_theater, TheaterQuery},
};
use crate::error::{ApiError, CatalogError};
use crate::models::user_model::Role;
use crate::state::AppState;

#[derive(Default)]
pub struct SharedState {
    clients: Vec<UnboundedSender<Message>>,
}

impl SharedState {
    pub fn new() -> Self {
        SharedState {
            clients: Vec::new(),
        }
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    pub fn subscribe(&mut self, client: UnboundedSender<Message>) {
        self.clients.push(client);
    }

    pub fn unsubscribe(&mut self, client: &UnboundedSender<Message>) {
        self.clients.retain(|other| !other.same_channel(client));
    }

    /// Sends to every client, dropping the ones whose socket has gone away.
    pub fn broadcast(&mut self, action_type: &str, status: &str, data: Value) {
        let message = json!({
            "action_type": action_type,
            "status": status,
            "data": data
        });
        let message_text = to_string(&message).unwrap_or_else(|_| "{}".to_string());
        self.clients.retain(|client| {
            match client.send(Message::Text(message_text.clone())) {
                Ok(()) => true,
                Err(e) => {
                    tracing::debug!("dropping websocket client: {}", e);
                    false
                }
            }
        });
    }
}

impl AppState {
    pub async fn notify(&self, action_type: &str, data: Value) {
        self.sockets.lock().await.broadcast(action_type, "success", data);
    }
}

/// Anyone may connect and read. Mutating actions check the role the
/// connection was opened with.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    user: Option<AuthUser>,
    Extension(state): Extension<AppState>,
) -> impl IntoResponse {
    let role = user.map(|AuthUser(role)| role);
    ws.on_upgrade(move |socket| handle_socket(socket, state, role))
}

async fn handle_socket(socket: WebSocket, state: AppState, role: Option<Role>) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = unbounded_channel::<Message>();

    tokio::spawn(async move {
        while let Some(message) = rx.recv().await {
            if let Err(e) = sender.send(message).await {
                tracing::warn!("failed to send websocket message: {}", e);
                break;
            }
        }
    });

    state.sockets.lock().await.subscribe(tx.clone());
    tracing::debug!(role = ?role, "websocket client connected");

    while let Some(frame) = receiver.next().await {
        let text = match frame {
            Ok(Message::Text(text)) => text,
            Ok(Message::Close(_)) => break,
            Ok(_) => continue,
            Err(e) => {
                tracing::debug!("websocket receive failed: {}", e);
                break;
            }
        };
        let request: Value = serde_json::from_str(&text).unwrap_or_else(|_| {
            tracing::warn!("failed to parse websocket request as JSON");
            Value::Null
        });

        let (action_type, status, data) = match request["action"].as_str() {
            Some(action_type) => {
                let (status, data) = match dispatch(&state, role, action_type, &request).await {
                    Ok(data) => ("success", data),
                    Err(e) => {
                        tracing::warn!(action = action_type, "websocket action failed: {}", e);
                        ("error", json!({ "error": e.to_string() }))
                    }
                };
                (action_type.to_string(), status, data)
            }
            None => {
                tracing::warn!("websocket request without an action");
                (
                    "error".to_string(),
                    "error",
                    json!({ "error": "Action type is missing" }),
                )
            }
        };

        state
            .sockets
            .lock()
            .await
            .broadcast(&action_type, status, data);
    }
    state.sockets.lock().await.unsubscribe(&tx);
    tracing::debug!("websocket client disconnected");
}

fn field<'a>(request: &'a Value, key: &str) -> Result<&'a str, CatalogError> {
    request[key]
        .as_str()
        .ok_or_else(|| CatalogError::Validation(format!("missing field {}", key)))
}

/// Missing or null `data` means no criteria; anything else must match `T`.
fn data<T: DeserializeOwned + Default>(request: &Value) -> Result<T, CatalogError> {
    match &request["data"] {
        Value::Null => Ok(T::default()),
        data => serde_json::from_value(data.clone())
            .map_err(|e| CatalogError::Validation(format!("invalid data: {}", e))),
    }
}

async fn dispatch(
    state: &AppState,
    role: Option<Role>,
    action: &str,
    request: &Value,
) -> Result<Value, ApiError> {
    match action {
        "get_movies" => {
            let filter: MovieFilter = data(request)?;
            let store = state.store.read().await;
            let movies: Vec<_> = store
                .get_movies(&filter)
                .into_iter()
                .map(|movie| store.summarize(movie))
                .collect();
            Ok(json!(movies))
        }
        "get_theaters" => {
            let query: TheaterQuery = data(request)?;
            let store = state.store.read().await;
            Ok(json!(store.get_theaters(query.text.as_deref())))
        }
        "delete_movie" => {
            require_admin(role)?;
            let id = field(request, "id")?;
            remove_movie(state, id).await?;
            Ok(json!({ "message": "Movie deleted successfully", "id": id }))
        }
        "delete_theater" => {
            require_admin(role)?;
            let id = field(request, "id")?;
            remove_theater(state, id).await?;
            Ok(json!({ "message": "Theater deleted successfully", "id": id }))
        }
        "delete_screen" => {
            require_admin(role)?;
            let id = field(request, "id")?;
            let theater = remove_selected_screen(state, id).await?;
            Ok(json!(theater))
        }
        "seat_grid" => {
            let movie_id = field(request, "movie_id")?;
            let show_time_id = field(request, "show_time_id")?;
            let store = state.store.read().await;
            let grid = seat_grid_for(&store, movie_id, show_time_id, state.seat_grid_cells)?;
            Ok(json!(grid))
        }
        _ => Err(CatalogError::Validation(format!("unsupported action {}", action)).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn broadcast_reaches_clients_and_drops_closed_ones() {
        let mut shared = SharedState::new();
        let (open_tx, mut open_rx) = unbounded_channel();
        let (closed_tx, closed_rx) = unbounded_channel();
        drop(closed_rx);
        shared.subscribe(open_tx);
        shared.subscribe(closed_tx);

        shared.broadcast("delete_movie", "success", json!({ "id": "m1" }));
        assert_eq!(shared.client_count(), 1);

        match open_rx.recv().await {
            Some(Message::Text(text)) => {
                let value: Value = serde_json::from_str(&text).unwrap();
                assert_eq!(value["action_type"], "delete_movie");
                assert_eq!(value["data"]["id"], "m1");
            }
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[test]
    fn unsubscribe_removes_only_that_client() {
        let mut shared = SharedState::new();
        let (first, _first_rx) = unbounded_channel();
        let (second, _second_rx) = unbounded_channel();
        shared.subscribe(first.clone());
        shared.subscribe(second.clone());

        shared.unsubscribe(&first);
        assert_eq!(shared.client_count(), 1);
        shared.unsubscribe(&first);
        assert_eq!(shared.client_count(), 1);
        shared.unsubscribe(&second);
        assert_eq!(shared.client_count(), 0);
    }

    #[tokio::test]
    async fn dispatch_runs_catalog_actions() {
        let state = AppState::new(16);
        let admin = Some(Role::Admin);

        let movies = dispatch(
            &state,
            None,
            "get_movies",
            &json!({ "data": { "genre": "Comedy" } }),
        )
        .await
        .unwrap();
        assert_eq!(movies.as_array().map(Vec::len), Some(1));

        let theaters = dispatch(&state, None, "get_theaters", &json!({ "action": "get_theaters" }))
            .await
            .unwrap();
        assert_eq!(theaters.as_array().map(Vec::len), Some(3));

        let grid = dispatch(
            &state,
            None,
            "seat_grid",
            &json!({ "movie_id": "m1", "show_time_id": "m1-st2" }),
        )
        .await
        .unwrap();
        assert_eq!(grid["cells"].as_array().map(Vec::len), Some(16));

        let missing = dispatch(&state, admin, "delete_movie", &json!({ "id": "nope" })).await;
        assert!(matches!(
            missing,
            Err(ApiError::Catalog(CatalogError::NotFound { entity: "Movie", .. }))
        ));

        let no_selection = dispatch(&state, admin, "delete_screen", &json!({ "id": "t1-s1" })).await;
        assert!(matches!(
            no_selection,
            Err(ApiError::Catalog(CatalogError::Conflict(_)))
        ));

        assert!(dispatch(&state, None, "launch", &json!({})).await.is_err());
    }

    #[tokio::test]
    async fn deletes_require_the_admin_role() {
        let state = AppState::new(16);
        let before = state.store.read().await.movies.len();

        let anonymous = dispatch(&state, None, "delete_movie", &json!({ "id": "m1" })).await;
        assert!(matches!(anonymous, Err(ApiError::Unauthorized)));

        let user = Some(Role::User);
        for (action, id) in [("delete_movie", "m1"), ("delete_theater", "t1"), ("delete_screen", "t1-s1")] {
            let refused = dispatch(&state, user, action, &json!({ "id": id })).await;
            assert!(matches!(refused, Err(ApiError::Forbidden)), "{}", action);
        }
        assert_eq!(state.store.read().await.movies.len(), before);
        assert_eq!(state.store.read().await.get_theaters(None).len(), 3);

        let deleted = dispatch(&state, Some(Role::Admin), "delete_movie", &json!({ "id": "m1" }))
            .await
            .unwrap();
        assert_eq!(deleted["id"], "m1");
        assert_eq!(state.store.read().await.movies.len(), before - 1);
    }

    #[tokio::test]
    async fn malformed_filter_data_is_rejected() {
        let state = AppState::new(16);

        let movies = dispatch(&state, None, "get_movies", &json!({ "data": { "genre": 5 } })).await;
        assert!(matches!(
            movies,
            Err(ApiError::Catalog(CatalogError::Validation(_)))
        ));

        let theaters = dispatch(&state, None, "get_theaters", &json!({ "data": { "text": 5 } })).await;
        assert!(matches!(
            theaters,
            Err(ApiError::Catalog(CatalogError::Validation(_)))
        ));

        let listed = dispatch(&state, None, "get_theaters", &json!({ "data": { "text": "pune" } }))
            .await
            .unwrap();
        assert_eq!(listed.as_array().map(Vec::len), Some(1));
    }
}
