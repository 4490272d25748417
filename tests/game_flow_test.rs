//! End-to-end tests for the game endpoints, driven over HTTP against an
//! in-process server.

mod common;

use serde_json::Value;

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a game and return its ID.
async fn create_game(client: &reqwest::Client, base: &str) -> i64 {
    let resp = client
        .get(format!("{base}/new"))
        .send()
        .await
        .expect("Failed to send new-game request");
    assert_eq!(resp.status(), 200, "Create should succeed");
    resp.text()
        .await
        .unwrap()
        .trim()
        .parse()
        .expect("Game ID should be numeric")
}

async fn fetch_state(client: &reqwest::Client, base: &str, game_id: &str) -> reqwest::Response {
    client
        .get(format!("{base}/state"))
        .query(&[("gameId", game_id)])
        .send()
        .await
        .expect("Failed to send state request")
}

async fn send_move(
    client: &reqwest::Client,
    base: &str,
    game_id: &str,
    from: &str,
    to: &str,
) -> reqwest::Response {
    client
        .get(format!("{base}/move"))
        .query(&[("gameId", game_id), ("from", from), ("to", to)])
        .send()
        .await
        .expect("Failed to send move request")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_then_read_starting_state() {
    let base = common::spawn_server().await;
    let client = common::client();

    let game_id = create_game(&client, &base).await;
    assert!(game_id > 0);

    let resp = fetch_state(&client, &base, &game_id.to_string()).await;
    assert_eq!(resp.status(), 200, "State should be readable");

    let state: Value = resp.json().await.unwrap();
    assert_eq!(state["fen"], START_FEN);
    assert_eq!(state["engineState"]["fen"], START_FEN);
    assert_eq!(state["engineState"]["history"], Value::Array(vec![]));
    assert_eq!(state["engineState"]["isFinished"], false);
}

#[tokio::test]
async fn game_ids_strictly_increase() {
    let base = common::spawn_server().await;
    let client = common::client();

    let first = create_game(&client, &base).await;
    let second = create_game(&client, &base).await;
    assert!(second > first, "IDs must be strictly increasing");
}

/// One full move exchange: the reply must be legal and the stored state
/// must advance by exactly two half-moves.
#[tokio::test]
async fn move_exchanges_two_half_moves() {
    let base = common::spawn_server().await;
    let client = common::client();
    let game_id = create_game(&client, &base).await;

    let resp = send_move(&client, &base, &game_id.to_string(), "e2", "e4").await;
    assert_eq!(resp.status(), 200, "Legal move should succeed");

    let reply: Value = resp.json().await.unwrap();
    let from = reply["from"].as_str().expect("Reply should name a square");
    let to = reply["to"].as_str().expect("Reply should name a square");
    assert_eq!(from, from.to_lowercase(), "Reply squares are lowercase");
    assert_eq!(to, to.to_lowercase(), "Reply squares are lowercase");

    // Replaying both half-moves locally must reproduce the stored position.
    let mut game = chess_engine::EngineGame::new();
    game.play("e2", "e4").expect("player move is legal");
    game.play(from, to).expect("Engine reply should be legal");

    let state: Value = fetch_state(&client, &base, &game_id.to_string())
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(state["fen"], game.fen());
    assert_eq!(state["engineState"]["history"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn uppercase_squares_accepted() {
    let base = common::spawn_server().await;
    let client = common::client();
    let game_id = create_game(&client, &base).await;

    let resp = send_move(&client, &base, &game_id.to_string(), "E2", "E4").await;
    assert_eq!(resp.status(), 200, "Square case should not matter");
}

#[tokio::test]
async fn health_endpoint_responds() {
    let base = common::spawn_server().await;
    let client = common::client();

    let resp = client
        .get(format!("{base}/health"))
        .send()
        .await
        .expect("Failed to send health request");
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn static_index_served_on_fallback() {
    let base = common::spawn_server().await;
    let client = common::client();

    let resp = client
        .get(format!("{base}/"))
        .send()
        .await
        .expect("Failed to request index page");
    assert_eq!(resp.status(), 200, "Index page should be served");
}
