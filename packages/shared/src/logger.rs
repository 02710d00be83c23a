//! Logging setup utilities for the pipechat binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Library crates whose log output follows the binary's default level.
const WORKSPACE_CRATES: &[&str] = &["pipechat_shared", "pipechat_server", "pipechat_client"];

/// Build the default filter directive, e.g. `pipechat_shared=debug,...,pipechat_server=debug`.
fn default_directive(binary_name: &str, default_log_level: &str) -> String {
    WORKSPACE_CRATES
        .iter()
        .copied()
        .chain(std::iter::once(binary_name))
        .map(|target| format!("{}={}", target.replace('-', "_"), default_log_level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the tracing subscriber with the specified default log level.
///
/// The log level can be overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "pipechat-server")
/// * `default_log_level` - The default log level (e.g., "debug", "info")
///
/// # Examples
///
/// ```no_run
/// use pipechat_shared::logger::setup_logger;
///
/// setup_logger("pipechat-server", "debug");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_covers_workspace_and_binary() {
        // テスト項目: デフォルトのフィルタにワークスペースのクレートとバイナリが含まれる
        // given (前提条件):
        let binary_name = "pipechat-server";

        // when (操作):
        let directive = default_directive(binary_name, "info");

        // then (期待する結果):
        assert!(directive.contains("pipechat_shared=info"));
        assert!(directive.contains("pipechat_client=info"));
        assert!(directive.ends_with("pipechat_server=info"));
        assert!(!directive.contains('-'));
    }
}
