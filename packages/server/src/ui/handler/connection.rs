//! Per-connection handler for the line-oriented chat protocol.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use tokio::{net::TcpStream, sync::mpsc, task::JoinHandle};
use tokio_util::codec::Framed;

use crate::{
    domain::{ConnectionHandle, ConnectionId, ConnectionState},
    infrastructure::message_pusher::ChannelMessagePusher,
    ui::codec::{CommandCodec, Inbound},
    usecase::{CommandDispatcher, ProtocolError},
};

/// How long queued lines may take to drain after the connection closes.
const FLUSH_TIMEOUT: Duration = Duration::from_secs(5);

type LineSink = SplitSink<Framed<TcpStream, CommandCodec>, String>;

/// Spawns the single writer task for a connection.
///
/// Every outbound line for this peer (replies to its own commands and
/// messages routed from other connections) goes through `rx`, so lines are
/// written whole and in queue order. The task ends when all senders are
/// dropped or a write fails.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sink: LineSink,
    peer: SocketAddr,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(line) = rx.recv().await {
            if let Err(e) = sink.send(line).await {
                tracing::debug!("[{}] Write failed: {}", peer, e);
                break;
            }
        }
    })
}

/// Serve one client connection until it closes.
///
/// Reads newline-terminated commands one at a time and hands each to the
/// dispatcher. On end of stream, read failure or write failure the
/// connection's registration is removed and the socket is closed.
pub async fn handle_connection(
    stream: TcpStream,
    peer: SocketAddr,
    dispatcher: CommandDispatcher,
    max_line_length: usize,
) {
    let framed = Framed::new(stream, CommandCodec::new(max_line_length));
    let (sink, mut lines) = framed.split();

    let id = ConnectionId::generate();
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = ConnectionHandle::new(id, peer, Arc::new(ChannelMessagePusher::new(id, tx)));
    let mut send_task = pusher_loop(rx, sink, peer);
    let mut writer_finished = false;
    let mut state = ConnectionState::default();

    tracing::info!("[{}] Connected. ({})", peer, id);

    loop {
        tokio::select! {
            next = lines.next() => match next {
                Some(Ok(Inbound::Line(line))) => {
                    if let Some(name) = dispatcher.dispatch(&handle, &line).await {
                        state.register(name);
                    }
                }
                Some(Ok(Inbound::TooLong)) => {
                    tracing::warn!("[{}] Line exceeds {} bytes, discarding", peer, max_line_length);
                    dispatcher.reject(&handle, ProtocolError::LineTooLong).await;
                }
                Some(Err(e)) => {
                    tracing::debug!("[{}] Read failed: {}", peer, e);
                    break;
                }
                None => break,
            },
            _ = &mut send_task => {
                writer_finished = true;
                break;
            }
        }
    }

    // The directory holds a clone of the handle; unregister first.
    dispatcher.disconnect(&handle).await;
    let freed = state.terminate();
    drop(handle);

    // Remaining queued lines are flushed once the last sender is gone.
    if !writer_finished {
        match tokio::time::timeout(FLUSH_TIMEOUT, &mut send_task).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::debug!("[{}] Writer task failed: {}", peer, e),
            Err(_) => {
                tracing::debug!("[{}] Gave up flushing outbound queue", peer);
                send_task.abort();
            }
        }
    }

    match freed {
        Some(name) => tracing::info!("[{}] Disconnected. ({} released)", peer, name),
        None => tracing::info!("[{}] Disconnected.", peer),
    }
}
