//! End-to-end tests: a real relay server on an ephemeral port, driven by
//! WebSocket clients.

use std::{sync::Arc, time::Duration};

use futures_util::{SinkExt, StreamExt};
use scribble_server::{
    infrastructure::{
        dto::{
            http::RosterDto,
            websocket::{ClientFrame, ServerFrame},
        },
        message_pusher::WebSocketMessagePusher,
    },
    ui::Server,
    usecase::RelayActor,
};
use tokio::{net::TcpListener, sync::oneshot};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async, tungstenite::protocol::Message,
};

type Socket = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// Helper managing a relay server running inside the test runtime
struct TestServer {
    addr: std::net::SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (relay, _actor) = RelayActor::spawn(Arc::new(WebSocketMessagePusher::new()));
        let (shutdown, stopped) = oneshot::channel::<()>();

        tokio::spawn(async move {
            Server::new(relay, None)
                .serve(listener, async move {
                    let _ = stopped.await;
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            shutdown: Some(shutdown),
        }
    }

    fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    fn http_url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn connect(&self) -> Socket {
        let (socket, _response) = connect_async(self.ws_url()).await.unwrap();
        socket
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

async fn send(socket: &mut Socket, frame: ClientFrame) {
    let json = serde_json::to_string(&frame).unwrap();
    socket.send(Message::Text(json.into())).await.unwrap();
}

async fn recv(socket: &mut Socket) -> ServerFrame {
    loop {
        let message = tokio::time::timeout(RECV_TIMEOUT, socket.next())
            .await
            .expect("timed out waiting for a frame")
            .expect("socket closed")
            .expect("websocket error");
        if let Message::Text(text) = message {
            return serde_json::from_str(text.as_str()).unwrap();
        }
    }
}

/// Log in and wait until the relay has processed it.
///
/// The ping reply doubles as a barrier: the relay handles events in order, so
/// once the roster comes back the login has been applied.
async fn login(socket: &mut Socket, nickname: &str) -> Vec<String> {
    send(
        socket,
        ClientFrame::Login {
            nickname: nickname.to_string(),
        },
    )
    .await;
    roster(socket).await
}

/// Request the roster and return the nicknames in it.
///
/// Fails if any other frame was queued for this socket before the reply.
async fn roster(socket: &mut Socket) -> Vec<String> {
    send(socket, ClientFrame::Ping).await;
    match recv(socket).await {
        ServerFrame::Pong { sockets } => sockets.into_iter().map(|p| p.nickname).collect(),
        other => panic!("expected pong, got {:?}", other),
    }
}

fn pong_names(frame: ServerFrame) -> Vec<String> {
    match frame {
        ServerFrame::Pong { sockets } => {
            assert!(sockets.iter().all(|p| p.points == 0));
            sockets.into_iter().map(|p| p.nickname).collect()
        }
        other => panic!("expected pong, got {:?}", other),
    }
}

#[tokio::test]
async fn test_health_check_responds_ok() {
    // テスト項目: ヘルスチェックが ok を返す
    // given (前提条件):
    let server = TestServer::start().await;

    // when (操作):
    let body: serde_json::Value = reqwest::get(server.http_url("/api/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(body, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn test_second_login_is_announced_to_first_client_only() {
    // テスト項目: Bob のログインは Alice に通知され、Bob 自身には通知されない
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = server.connect().await;
    assert_eq!(login(&mut alice, "Alice").await, vec!["Alice"]);
    let mut bob = server.connect().await;

    // when (操作):
    let bob_roster = login(&mut bob, "Bob").await;

    // then (期待する結果):
    assert_eq!(
        recv(&mut alice).await,
        ServerFrame::NewUser {
            nickname: "Bob".to_string()
        }
    );
    assert_eq!(pong_names(recv(&mut alice).await), vec!["Alice", "Bob"]);
    // Bob の最初のフレームは自分の ping への応答 (参加通知は届いていない)
    assert_eq!(bob_roster, vec!["Alice", "Bob"]);
}

#[tokio::test]
async fn test_chat_and_drawing_are_relayed_to_others_only() {
    // テスト項目: チャット・描画イベントは相手にだけ中継され、送信者には返らない
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = server.connect().await;
    login(&mut alice, "Alice").await;
    let mut bob = server.connect().await;
    login(&mut bob, "Bob").await;
    recv(&mut alice).await; // newUser Bob
    recv(&mut alice).await; // roster

    // when (操作):
    send(
        &mut alice,
        ClientFrame::SendMessage {
            message: "hi".to_string(),
        },
    )
    .await;
    send(&mut alice, ClientFrame::Painting { x: 10.0, y: 20.0 }).await;
    send(&mut alice, ClientFrame::Moving { x: 3.0, y: 4.0 }).await;
    send(
        &mut alice,
        ClientFrame::Filling {
            color: "rgb(88, 86, 214)".to_string(),
        },
    )
    .await;

    // then (期待する結果):
    assert_eq!(
        recv(&mut bob).await,
        ServerFrame::ReceiveMessage {
            message: "hi".to_string(),
            nickname: "Alice".to_string(),
        }
    );
    assert_eq!(recv(&mut bob).await, ServerFrame::Painted { x: 10.0, y: 20.0 });
    assert_eq!(recv(&mut bob).await, ServerFrame::Moved { x: 3.0, y: 4.0 });
    assert_eq!(
        recv(&mut bob).await,
        ServerFrame::Filled {
            color: "rgb(88, 86, 214)".to_string()
        }
    );
    // Alice には何も返っていない: 次のフレームは自分の ping への応答
    assert_eq!(roster(&mut alice).await, vec!["Alice", "Bob"]);
}

#[tokio::test]
async fn test_disconnect_is_announced_with_updated_roster() {
    // テスト項目: Bob の切断で Alice に退出通知と更新後の名簿が届く
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = server.connect().await;
    login(&mut alice, "Alice").await;
    let mut bob = server.connect().await;
    login(&mut bob, "Bob").await;
    recv(&mut alice).await; // newUser Bob
    recv(&mut alice).await; // roster

    // when (操作):
    bob.close(None).await.unwrap();

    // then (期待する結果):
    assert_eq!(
        recv(&mut alice).await,
        ServerFrame::Disconnected {
            nickname: "Bob".to_string()
        }
    );
    assert_eq!(pong_names(recv(&mut alice).await), vec!["Alice"]);
}

#[tokio::test]
async fn test_malformed_and_early_frames_are_dropped() {
    // テスト項目: 不正なフレームやログイン前のイベントは破棄され、接続は維持される
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = server.connect().await;
    login(&mut alice, "Alice").await;
    let mut lurker = server.connect().await;

    // when (操作):
    lurker
        .send(Message::Text("not json".into()))
        .await
        .unwrap();
    lurker
        .send(Message::Text(r#"{"event":"dance"}"#.into()))
        .await
        .unwrap();
    send(
        &mut lurker,
        ClientFrame::SendMessage {
            message: "before login".to_string(),
        },
    )
    .await;

    // then (期待する結果): 未ログインでも ping には応答し、Alice には何も届かない
    assert_eq!(roster(&mut lurker).await, vec!["Alice"]);
    assert_eq!(roster(&mut alice).await, vec!["Alice"]);
}

#[tokio::test]
async fn test_roster_endpoint_reflects_logins() {
    // テスト項目: /api/roster が現在の名簿とゲーム進行フラグを返す
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = server.connect().await;
    login(&mut alice, "Alice").await;
    let mut bob = server.connect().await;
    login(&mut bob, "Bob").await;

    // when (操作):
    let roster: RosterDto = reqwest::get(server.http_url("/api/roster"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // then (期待する結果):
    assert!(!roster.in_progress);
    assert_eq!(roster.participant_count, 2);
    let names: Vec<&str> = roster
        .participants
        .iter()
        .map(|p| p.nickname.as_str())
        .collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
}
