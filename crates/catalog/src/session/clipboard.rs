//! Контракт буфера обмена.
//!
//! Ядро этот интерфейс только потребляет; реализации (Web Clipboard API,
//! синхронный select-and-copy через скрытый текстовый буфер) живут на
//! стороне платформы.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    /// Копирование не удалось. Локально для одного действия пользователя:
    /// на состояние сессии и каталога не влияет, повторов нет.
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

pub trait ClipboardSink {
    /// Поддерживается ли приёмник на текущей платформе.
    fn is_available(&self) -> bool {
        true
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Пробует основной приёмник, при неудаче — запасной.
pub fn copy_with_fallback(
    primary: &dyn ClipboardSink,
    fallback: &dyn ClipboardSink,
    text: &str,
) -> Result<(), ClipboardError> {
    if primary.is_available() {
        match primary.write_text(text) {
            Ok(()) => return Ok(()),
            Err(e) => tracing::warn!("Primary clipboard sink failed: {}", e),
        }
    }
    if fallback.is_available() {
        return fallback.write_text(text);
    }
    Err(ClipboardError::WriteFailed(
        "no clipboard sink available".into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingSink {
        available: bool,
        fail: bool,
        written: RefCell<Vec<String>>,
    }

    impl RecordingSink {
        fn new(available: bool, fail: bool) -> Self {
            Self {
                available,
                fail,
                written: RefCell::new(Vec::new()),
            }
        }
    }

    impl ClipboardSink for RecordingSink {
        fn is_available(&self) -> bool {
            self.available
        }

        fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::WriteFailed("denied".into()));
            }
            self.written.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_primary_sink_is_preferred() {
        let primary = RecordingSink::new(true, false);
        let fallback = RecordingSink::new(true, false);
        copy_with_fallback(&primary, &fallback, "block").unwrap();
        assert_eq!(primary.written.borrow().len(), 1);
        assert!(fallback.written.borrow().is_empty());
    }

    #[test]
    fn test_fallback_on_unavailable_or_failing_primary() {
        let primary = RecordingSink::new(false, false);
        let fallback = RecordingSink::new(true, false);
        copy_with_fallback(&primary, &fallback, "block").unwrap();
        assert_eq!(fallback.written.borrow().len(), 1);

        let primary = RecordingSink::new(true, true);
        let fallback = RecordingSink::new(true, false);
        copy_with_fallback(&primary, &fallback, "block").unwrap();
        assert_eq!(fallback.written.borrow().len(), 1);
    }

    #[test]
    fn test_error_when_both_fail() {
        let primary = RecordingSink::new(true, true);
        let fallback = RecordingSink::new(true, true);
        assert!(copy_with_fallback(&primary, &fallback, "block").is_err());

        let primary = RecordingSink::new(false, false);
        let fallback = RecordingSink::new(false, false);
        assert!(matches!(
            copy_with_fallback(&primary, &fallback, "block"),
            Err(ClipboardError::WriteFailed(_))
        ));
    }
}
