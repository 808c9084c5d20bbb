//! Pass-through translator for tests and disabled mode

use async_trait::async_trait;

use medbridge_core::{Result, Translator};

/// Translator that returns its input unchanged
#[derive(Debug, Default)]
pub struct NoopTranslator;

impl NoopTranslator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Translator for NoopTranslator {
    async fn translate(&self, text: &str, _source: Option<&str>, _target: &str) -> Result<String> {
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_passthrough() {
        let translator = NoopTranslator::new();
        let out = translator
            .translate("Hello world", Some("English"), "Spanish")
            .await
            .unwrap();
        assert_eq!(out, "Hello world");
    }
}
