//! Shared fixtures for the broker integration tests.
#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc, time::Duration};

use pipechat_server::{
    domain::Directory,
    ui::{Server, ServerConfig},
    usecase::CommandDispatcher,
};
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::{
        TcpStream,
        tcp::{OwnedReadHalf, OwnedWriteHalf},
    },
    sync::{Mutex, oneshot},
    time::timeout,
};

pub const RECV_TIMEOUT: Duration = Duration::from_secs(5);
pub const SILENCE: Duration = Duration::from_millis(200);

/// In-process broker bound to ephemeral ports; shut down on drop.
pub struct TestServer {
    pub addr: SocketAddr,
    pub http_addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub async fn start() -> Self {
        Self::start_with(ServerConfig::default().max_line_length).await
    }

    pub async fn start_with(max_line_length: usize) -> Self {
        let config = ServerConfig {
            port: 0,
            http_port: Some(0),
            max_line_length,
            ..ServerConfig::default()
        };
        let dispatcher = CommandDispatcher::new(Arc::new(Mutex::new(Directory::new())));
        let server = Server::bind(&config, dispatcher)
            .await
            .expect("Failed to bind test server");
        let addr = server.local_addr().unwrap();
        let http_addr = server.http_addr().unwrap().unwrap();

        let (tx, rx) = oneshot::channel();
        tokio::spawn(server.serve(async move {
            let _ = rx.await;
        }));

        Self {
            addr,
            http_addr,
            shutdown: Some(tx),
        }
    }

    pub async fn client(&self) -> TestClient {
        TestClient::connect(self.addr).await
    }

    /// Connect and register `name`, asserting success.
    pub async fn registered(&self, name: &str) -> TestClient {
        let mut client = self.client().await;
        client.send(&format!("USER|{}", name)).await;
        assert_eq!(client.recv().await, "OK|Name set in USER");
        client
    }

    pub fn http_url(&self, path: &str) -> String {
        format!("http://{}{}", self.http_addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// Raw line client speaking the broker protocol.
pub struct TestClient {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

impl TestClient {
    pub async fn connect(addr: SocketAddr) -> Self {
        let stream = TcpStream::connect(addr)
            .await
            .expect("Failed to connect to test server");
        let (read_half, write_half) = stream.into_split();
        Self {
            reader: BufReader::new(read_half),
            writer: write_half,
        }
    }

    /// Send one line; a trailing newline is appended.
    pub async fn send(&mut self, line: &str) {
        self.send_raw(format!("{}\n", line).as_bytes()).await;
    }

    pub async fn send_raw(&mut self, bytes: &[u8]) {
        self.writer.write_all(bytes).await.expect("write failed");
        self.writer.flush().await.expect("flush failed");
    }

    /// Next line from the server without its terminator.
    pub async fn recv(&mut self) -> String {
        self.try_recv(RECV_TIMEOUT)
            .await
            .expect("timed out waiting for a line")
            .expect("connection closed by server")
    }

    /// `Err` on timeout, `Ok(None)` on end of stream.
    pub async fn try_recv(&mut self, wait: Duration) -> Result<Option<String>, ()> {
        let mut line = String::new();
        match timeout(wait, self.reader.read_line(&mut line)).await {
            Ok(Ok(0)) => Ok(None),
            Ok(Ok(_)) => Ok(Some(line.trim_end_matches(['\r', '\n']).to_string())),
            Ok(Err(_)) => Ok(None),
            Err(_) => Err(()),
        }
    }

    /// Assert nothing arrives for a short while.
    pub async fn assert_silent(&mut self) {
        if let Ok(line) = self.try_recv(SILENCE).await {
            panic!("expected no traffic, got {:?}", line);
        }
    }

    pub async fn request(&mut self, line: &str) -> String {
        self.send(line).await;
        self.recv().await
    }
}
