//! Server line formatting for client display.

use pipechat_shared::{
    protocol::{Response, keyword},
    time::local_clock,
};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format one line received from the server.
    ///
    /// Lines that are not a recognised response are shown unchanged.
    pub fn format_line(line: &str) -> String {
        match line.parse::<Response>() {
            Ok(response) => Self::format_response(&response),
            Err(_) => line.to_string(),
        }
    }

    /// Format a parsed server response
    ///
    /// * `OK` / `OK|detail` in green as `OK` / `OK: detail`
    /// * `ERROR|reason` in red as `ERROR: reason`
    /// * `CHAT_RSP|from|message` as `[from]: message`, sender in blue
    pub fn format_response(response: &Response) -> String {
        match response {
            Response::Ok(None) => format!("{}{}{}", GREEN, keyword::OK, RESET),
            Response::Ok(Some(detail)) => {
                format!("{}{}: {}{}", GREEN, keyword::OK, detail, RESET)
            }
            Response::Error(reason) => format!("{}{}: {}{}", RED, keyword::ERROR, reason, RESET),
            Response::ChatRsp { from, message } => {
                format!("[{}{}{}]: {}", BLUE, from, RESET, message)
            }
        }
    }

    /// Format the connection notice
    pub fn format_connected(peer: &str) -> String {
        format!("[ {} ] Connected to server at {}", peer, local_clock())
    }

    /// Format the notice shown when the server closes the connection
    pub fn format_disconnected(peer: &str) -> String {
        format!("[ {} ] Server disconnected at {}", peer, local_clock())
    }
}
