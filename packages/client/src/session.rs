//! TCP chat client session management.

use futures_util::{SinkExt, StreamExt};
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::{net::TcpStream, sync::mpsc};
use tokio_util::codec::{Framed, LinesCodec};

use crate::{
    error::ClientError,
    formatter::MessageFormatter,
    ui::{PROMPT, redisplay_prompt},
};

/// Keyboard line that closes the connection instead of being sent.
pub const EXIT_COMMAND: &str = "exit";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The input ended (`exit`, Ctrl+C, Ctrl+D)
    UserExit,
    /// The server closed the connection or it failed
    ServerClosed,
}

/// What to do with one keyboard line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Send(String),
    Skip,
    Exit,
}

impl Input {
    pub fn classify(line: &str) -> Self {
        match line.trim() {
            "" => Input::Skip,
            EXIT_COMMAND => Input::Exit,
            command => Input::Send(command.to_string()),
        }
    }
}

/// Run the interactive client against `addr` until exit or server disconnect.
pub async fn run_client(addr: &str) -> Result<(), ClientError> {
    let (input_tx, input_rx) = mpsc::unbounded_channel::<String>();

    // rustyline is synchronous; keep it on its own thread
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                tracing::error!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => match Input::classify(&line) {
                    Input::Send(command) => {
                        rl.add_history_entry(command.as_str()).ok();
                        if input_tx.send(command).is_err() {
                            break;
                        }
                    }
                    Input::Skip => {}
                    Input::Exit => break,
                },
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    let end = run_session(addr, input_rx, |line| {
        println!("\r{}", MessageFormatter::format_line(line));
        redisplay_prompt();
    })
    .await?;

    if end == SessionEnd::ServerClosed {
        println!("\r{}", MessageFormatter::format_disconnected(addr));
    }
    Ok(())
}

/// Drive one connection: forward `input` lines to the server and hand every
/// server line to `render`.
///
/// Returns when `input` is closed or the server side of the connection ends.
pub async fn run_session<F>(
    addr: &str,
    mut input: mpsc::UnboundedReceiver<String>,
    mut render: F,
) -> Result<SessionEnd, ClientError>
where
    F: FnMut(&str) + Send + 'static,
{
    let stream = TcpStream::connect(addr)
        .await
        .map_err(|source| ClientError::Connect {
            addr: addr.to_string(),
            source,
        })?;
    let peer = stream.peer_addr()?;
    tracing::info!("Connected to {}", peer);
    println!("{}", MessageFormatter::format_connected(&peer.to_string()));

    let (mut writer, mut reader) = Framed::new(stream, LinesCodec::new()).split();

    let mut read_task = tokio::spawn(async move {
        while let Some(result) = reader.next().await {
            match result {
                Ok(line) => render(&line),
                Err(e) => {
                    tracing::warn!("Read error: {}", e);
                    break;
                }
            }
        }
    });

    loop {
        tokio::select! {
            _ = &mut read_task => {
                tracing::info!("Server closed the connection");
                return Ok(SessionEnd::ServerClosed);
            }
            next = input.recv() => match next {
                Some(command) => {
                    tracing::debug!("-> {}", command);
                    writer.send(command).await?;
                }
                None => {
                    if let Err(e) = writer.close().await {
                        tracing::debug!("Error closing connection: {}", e);
                    }
                    read_task.abort();
                    return Ok(SessionEnd::UserExit);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_command_is_trimmed() {
        // テスト項目: 入力行は前後の空白を除いて送信される
        // when (操作):
        let input = Input::classify("  USER|alice  ");

        // then (期待する結果):
        assert_eq!(input, Input::Send("USER|alice".to_string()));
    }

    #[test]
    fn test_classify_blank_line_is_skipped() {
        // テスト項目: 空行・空白のみの行は送信されない
        // then (期待する結果):
        assert_eq!(Input::classify(""), Input::Skip);
        assert_eq!(Input::classify("   "), Input::Skip);
    }

    #[test]
    fn test_classify_exit() {
        // テスト項目: exit で終了する（大文字小文字は区別する）
        // then (期待する結果):
        assert_eq!(Input::classify("exit"), Input::Exit);
        assert_eq!(Input::classify(" exit "), Input::Exit);
        assert_eq!(Input::classify("EXIT"), Input::Send("EXIT".to_string()));
    }
}
