//! Client session tests against an in-process broker.

use std::{sync::Arc, time::Duration};

use pipechat_client::{ClientError, SessionEnd, run_session};
use pipechat_server::{
    domain::Directory,
    ui::{Server, ServerConfig},
    usecase::CommandDispatcher,
};
use tokio::{
    net::TcpListener,
    sync::{Mutex, mpsc},
    task::JoinHandle,
    time::timeout,
};

const WAIT: Duration = Duration::from_secs(5);

async fn start_server() -> String {
    let config = ServerConfig {
        port: 0,
        ..ServerConfig::default()
    };
    let dispatcher = CommandDispatcher::new(Arc::new(Mutex::new(Directory::new())));
    let server = Server::bind(&config, dispatcher).await.unwrap();
    let addr = server.local_addr().unwrap().to_string();
    tokio::spawn(server.serve(std::future::pending()));
    addr
}

/// A session driven by channels instead of the keyboard and terminal.
struct Session {
    input: mpsc::UnboundedSender<String>,
    output: mpsc::UnboundedReceiver<String>,
    task: JoinHandle<Result<SessionEnd, ClientError>>,
}

impl Session {
    fn start(addr: &str) -> Self {
        let (input, input_rx) = mpsc::unbounded_channel();
        let (output_tx, output) = mpsc::unbounded_channel();
        let addr = addr.to_string();
        let task = tokio::spawn(async move {
            run_session(&addr, input_rx, move |line| {
                let _ = output_tx.send(line.to_string());
            })
            .await
        });
        Self {
            input,
            output,
            task,
        }
    }

    async fn request(&mut self, line: &str) -> String {
        self.input.send(line.to_string()).unwrap();
        self.recv().await
    }

    async fn recv(&mut self) -> String {
        timeout(WAIT, self.output.recv())
            .await
            .expect("timed out waiting for server line")
            .expect("session ended")
    }
}

#[tokio::test]
async fn test_session_exchanges_messages() {
    // テスト項目: 入力行がそのまま送信され、サーバーからの行が render に渡される
    // given (前提条件):
    let addr = start_server().await;
    let mut alice = Session::start(&addr);
    let mut bob = Session::start(&addr);
    assert_eq!(alice.request("USER|alice").await, "OK|Name set in USER");
    assert_eq!(bob.request("USER|bob").await, "OK|Name set in USER");

    // when (操作):
    let sent = alice.request("CHAT_REQ|bob|hello").await;

    // then (期待する結果):
    assert_eq!(sent, "OK|Message sent with CHAT_RSP");
    assert_eq!(bob.recv().await, "CHAT_RSP|alice|hello");
}

#[tokio::test]
async fn test_session_ends_when_input_closes() {
    // テスト項目: 入力が閉じられるとセッションは UserExit で終了する
    // given (前提条件):
    let addr = start_server().await;
    let mut session = Session::start(&addr);
    assert_eq!(session.request("LIST").await, "OK|");

    // when (操作):
    drop(session.input);
    let end = timeout(WAIT, session.task).await.unwrap().unwrap();

    // then (期待する結果):
    assert_eq!(end.unwrap(), SessionEnd::UserExit);
}

#[tokio::test]
async fn test_session_ends_when_server_closes() {
    // テスト項目: サーバーが接続を閉じるとセッションは ServerClosed で終了する
    // given (前提条件):
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    let session = Session::start(&addr);

    // when (操作):
    let (socket, _) = listener.accept().await.unwrap();
    drop(socket);
    let end = timeout(WAIT, session.task).await.unwrap().unwrap();

    // then (期待する結果):
    assert_eq!(end.unwrap(), SessionEnd::ServerClosed);
    drop(session.input);
}

#[tokio::test]
async fn test_session_connect_failure() {
    // テスト項目: 接続できない場合は Connect エラーになる
    // given (前提条件):
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    drop(listener);
    let (_input, input_rx) = mpsc::unbounded_channel();

    // when (操作):
    let result = run_session(&addr, input_rx, |_| {}).await;

    // then (期待する結果):
    match result {
        Err(ClientError::Connect { addr: failed, .. }) => assert_eq!(failed, addr),
        other => panic!("expected connect error, got {:?}", other),
    }
}
