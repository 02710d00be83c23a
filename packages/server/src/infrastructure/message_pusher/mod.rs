//! メッセージ送信（push）の実装
//!
//! ## 実装
//!
//! - `channel`: tokio の mpsc チャンネルで接続の writer タスクへ渡す実装

pub mod channel;

pub use channel::ChannelMessagePusher;
