//! Line protocol spoken between the pipechat broker and its clients.
//!
//! Every frame is one UTF-8 line, fields separated by `|`:
//!
//! ```text
//! client -> server: USER|<name>  CHAT_REQ|<name>|<message>  BCAST_REQ|<message>  LIST
//! server -> client: OK  OK|<detail>  ERROR|<reason>  CHAT_RSP|<sender>|<message>
//! ```
//!
//! There is no escaping, so a field can never contain `|`.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Field delimiter inside a line.
pub const FIELD_DELIMITER: char = '|';

/// Separator between names in a `LIST` reply.
pub const NAME_SEPARATOR: char = ',';

pub mod keyword {
    pub const USER: &str = "USER";
    pub const CHAT_REQ: &str = "CHAT_REQ";
    pub const BCAST_REQ: &str = "BCAST_REQ";
    pub const LIST: &str = "LIST";
    pub const OK: &str = "OK";
    pub const ERROR: &str = "ERROR";
    pub const CHAT_RSP: &str = "CHAT_RSP";
}

/// Split a line (terminator already stripped) into its fields.
///
/// Field 0 is the keyword. An empty line yields a single empty field.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_DELIMITER).collect()
}

/// Why a line could not be turned into a frame.
///
/// The `Display` output is the reason sent back in `ERROR|<reason>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Missing {expected} in {keyword}")]
    MissingArguments {
        keyword: &'static str,
        expected: &'static str,
    },

    #[error("Additional parameters added to {keyword}")]
    ExtraArguments { keyword: &'static str },

    #[error("Invalid Command")]
    UnknownCommand(String),
}

/// Check that `args` has exactly `count` entries.
fn expect_args(
    args: &[&str],
    count: usize,
    keyword: &'static str,
    expected: &'static str,
) -> Result<(), ParseError> {
    match args.len() {
        n if n < count => Err(ParseError::MissingArguments { keyword, expected }),
        n if n > count => Err(ParseError::ExtraArguments { keyword }),
        _ => Ok(()),
    }
}

/// A client request, borrowing its fields from the received line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request<'a> {
    /// `USER|name`
    User { name: &'a str },
    /// `CHAT_REQ|name|message`
    ChatReq { to: &'a str, message: &'a str },
    /// `BCAST_REQ|message`
    BcastReq { message: &'a str },
    /// `LIST`
    List,
}

impl<'a> Request<'a> {
    /// Parse one received line into a request, checking the argument count.
    pub fn parse(line: &'a str) -> Result<Self, ParseError> {
        let fields = split_fields(line);
        // `split` always yields at least one field.
        let (command, args) = (fields[0], &fields[1..]);

        match command {
            keyword::USER => {
                expect_args(args, 1, keyword::USER, "name")?;
                Ok(Request::User { name: args[0] })
            }
            keyword::CHAT_REQ => {
                expect_args(args, 2, keyword::CHAT_REQ, "user or message")?;
                Ok(Request::ChatReq {
                    to: args[0],
                    message: args[1],
                })
            }
            keyword::BCAST_REQ => {
                expect_args(args, 1, keyword::BCAST_REQ, "message")?;
                Ok(Request::BcastReq { message: args[0] })
            }
            keyword::LIST => {
                expect_args(args, 0, keyword::LIST, "")?;
                Ok(Request::List)
            }
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

/// A line sent by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// `OK` or `OK|detail`
    Ok(Option<String>),
    /// `ERROR|reason`
    Error(String),
    /// `CHAT_RSP|from|message`, a relayed chat message
    ChatRsp { from: String, message: String },
}

impl Response {
    pub fn ok(detail: impl Into<String>) -> Self {
        Response::Ok(Some(detail.into()))
    }

    pub fn error(reason: impl ToString) -> Self {
        Response::Error(reason.to_string())
    }

    pub fn chat(from: impl Into<String>, message: impl Into<String>) -> Self {
        Response::ChatRsp {
            from: from.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Ok(None) => f.write_str(keyword::OK),
            Response::Ok(Some(detail)) => write!(f, "{}|{}", keyword::OK, detail),
            Response::Error(reason) => write!(f, "{}|{}", keyword::ERROR, reason),
            Response::ChatRsp { from, message } => {
                write!(f, "{}|{}|{}", keyword::CHAT_RSP, from, message)
            }
        }
    }
}

impl FromStr for Response {
    type Err = ParseError;

    /// Parse a server line. `OK` and `ERROR` keep only their first argument.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields = split_fields(line);
        // `split` always yields at least one field.
        let (command, args) = (fields[0], &fields[1..]);

        match command {
            keyword::OK => Ok(Response::Ok(args.first().map(|s| s.to_string()))),
            keyword::ERROR => Ok(Response::Error(
                args.first().map(|s| s.to_string()).unwrap_or_default(),
            )),
            keyword::CHAT_RSP => {
                expect_args(args, 2, keyword::CHAT_RSP, "sender or message")?;
                Ok(Response::chat(args[0], args[1]))
            }
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}
