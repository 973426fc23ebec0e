//! Best-effort clipboard copy.
//!
//! The clipboard itself belongs to the host (browser, desktop, terminal).
//! A failed copy is reported back as an advisory and never touches the
//! session.

use secrecy::ExposeSecret;
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::session::{EntryId, Session};

const MANUAL_COPY_ADVISORY: &str = "Could not copy automatically. Please copy it manually.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard unavailable")]
    Unavailable,
    #[error("Clipboard write rejected: {0}")]
    Rejected(String),
}

/// Host clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// What happened to a copy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    NotFound,
    /// The copy failed; the message is meant for the user.
    Failed(String),
}

/// Copies `text` to the clipboard, turning failures into an advisory.
pub fn copy_text<C: Clipboard + ?Sized>(text: &str, clipboard: &mut C) -> CopyOutcome {
    match clipboard.write_text(text) {
        Ok(()) => CopyOutcome::Copied,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Clipboard copy failed: {}", _e);
            CopyOutcome::Failed(MANUAL_COPY_ADVISORY.to_string())
        }
    }
}

/// Copies the password of entry `id`.
pub fn copy_entry<C: Clipboard + ?Sized>(
    session: &Session,
    id: EntryId,
    clipboard: &mut C,
) -> CopyOutcome {
    match session.get(id) {
        Some(entry) => copy_text(entry.value.expose_secret(), clipboard),
        None => {
            #[cfg(feature = "tracing")]
            tracing::debug!("Copy ignored: no entry {}", id);
            CopyOutcome::NotFound
        }
    }
}

/// Async version that sends the outcome via channel.
///
/// Fire-and-forget: a closed channel is only logged.
#[cfg(feature = "async")]
pub async fn copy_text_tx<C: Clipboard + ?Sized>(
    text: &str,
    clipboard: &mut C,
    tx: mpsc::Sender<CopyOutcome>,
) {
    let outcome = copy_text(text, clipboard);

    if let Err(_e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send clipboard outcome: {}", _e);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use secrecy::SecretString;

    /// In-memory clipboard that can be told to fail.
    #[derive(Default)]
    pub(crate) struct MemoryClipboard {
        pub contents: Option<String>,
        pub fail_with: Option<ClipboardError>,
    }

    impl Clipboard for MemoryClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if let Some(err) = self.fail_with.clone() {
                return Err(err);
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_copy_entry_success() {
        let mut session = Session::new();
        let id = session.append(Some("site"), secret("Ab3!Ab3!Ab3!")).id;
        let mut clipboard = MemoryClipboard::default();

        let outcome = copy_entry(&session, id, &mut clipboard);
        assert_eq!(outcome, CopyOutcome::Copied);
        assert_eq!(clipboard.contents.as_deref(), Some("Ab3!Ab3!Ab3!"));
    }

    #[test]
    fn test_copy_entry_unknown_id() {
        let session = Session::new();
        let mut clipboard = MemoryClipboard::default();

        let outcome = copy_entry(&session, EntryId::from(42), &mut clipboard);
        assert_eq!(outcome, CopyOutcome::NotFound);
        assert!(clipboard.contents.is_none());
    }

    #[test]
    fn test_copy_failure_leaves_session_untouched() {
        let mut session = Session::new();
        let id = session.append(None, secret("abcdefgh")).id;
        let before = session.stats();
        let mut clipboard = MemoryClipboard {
            contents: None,
            fail_with: Some(ClipboardError::Unavailable),
        };

        let outcome = copy_entry(&session, id, &mut clipboard);
        assert!(matches!(outcome, CopyOutcome::Failed(ref msg) if msg.contains("manually")));
        assert_eq!(session.stats(), before);
        assert!(session.get(id).is_some());
    }

    #[test]
    fn test_clipboard_error_messages() {
        assert_eq!(ClipboardError::Unavailable.to_string(), "Clipboard unavailable");
        assert_eq!(
            ClipboardError::Rejected("denied".to_string()).to_string(),
            "Clipboard write rejected: denied"
        );
    }
}

#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::tests::MemoryClipboard;
    use super::*;

    #[tokio::test]
    async fn test_copy_text_tx_sends_outcome() {
        let (tx, mut rx) = mpsc::channel(1);
        let mut clipboard = MemoryClipboard::default();

        copy_text_tx("secret-value", &mut clipboard, tx).await;

        let outcome = rx.recv().await.expect("Should receive outcome");
        assert_eq!(outcome, CopyOutcome::Copied);
        assert_eq!(clipboard.contents.as_deref(), Some("secret-value"));
    }

    #[tokio::test]
    async fn test_copy_text_tx_reports_failure() {
        let (tx, mut rx) = mpsc::channel(1);
        let mut clipboard = MemoryClipboard {
            contents: None,
            fail_with: Some(ClipboardError::Rejected("permission denied".to_string())),
        };

        copy_text_tx("secret-value", &mut clipboard, tx).await;

        let outcome = rx.recv().await.expect("Should receive outcome");
        assert!(matches!(outcome, CopyOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_copy_text_tx_closed_channel() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let mut clipboard = MemoryClipboard::default();

        copy_text_tx("secret-value", &mut clipboard, tx).await;
        assert_eq!(clipboard.contents.as_deref(), Some("secret-value"));
    }
}
