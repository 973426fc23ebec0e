//! Password strength scorer - main scoring logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    Section, diversity_section, digit_section, length_section, lowercase_section,
    symbol_section, uppercase_section,
};
use crate::types::StrengthResult;

/// Delay before an async evaluation starts, so rapid option changes only
/// score the last password.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Scores a password on a 0-100 scale.
///
/// Never fails: the empty password lands in the lowest length bucket and
/// scores `Weak`.
pub fn score(password: &SecretString) -> StrengthResult {
    score_str(password.expose_secret())
}

fn score_str(pwd: &str) -> StrengthResult {
    // Orchestrator: every section runs, points add up
    let sections: [(&str, Section); 6] = [
        ("length", length_section),
        ("lowercase", lowercase_section),
        ("uppercase", uppercase_section),
        ("digit", digit_section),
        ("symbol", symbol_section),
        ("diversity", diversity_section),
    ];

    let mut total: u8 = 0;
    for (_section_name, section_fn) in sections {
        let points = section_fn(pwd);
        #[cfg(feature = "tracing")]
        tracing::trace!("Section {} awarded {} points", _section_name, points);
        total = total.saturating_add(points);
    }

    let result = StrengthResult::from_score(total);

    #[cfg(feature = "tracing")]
    tracing::debug!("Password scored {} ({})", result.score, result.level);

    result
}

/// Async version that sends the score via channel.
///
/// Waits [`DEBOUNCE`] first. If `token` is cancelled by then, nothing is
/// sent.
#[cfg(feature = "async")]
pub async fn score_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("scoring is about to start...");

    tokio::time::sleep(DEBOUNCE).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Scoring cancelled before start");
        return;
    }

    let result = score(password);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password score: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_score_tx_sends_result() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        score_tx(&secret("Ab3!Ab3!Ab3!"), token, tx).await;

        let result = rx.recv().await.expect("Should receive score");
        assert_eq!(result.score, 90);
    }

    #[tokio::test(start_paused = true)]
    async fn test_score_tx_with_cancellation() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        score_tx(&secret("SomePassword123!"), token, tx).await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_score_tx_closed_channel_does_not_panic() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        score_tx(&secret("TestPass123!"), CancellationToken::new(), tx).await;
    }
}
