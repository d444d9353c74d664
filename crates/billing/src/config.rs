//! Statement rendering configuration.

use serde::{Deserialize, Serialize};
use tracing::warn;

use playbill_core::DomainError;

/// Environment variable consulted by [`StatementConfig::from_env`].
pub const LOCALE_ENV: &str = "PLAYBILL_LOCALE";

/// Language of the statement labels. Currency is always rendered as USD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementLocale {
    #[default]
    En,
    Ko,
}

impl StatementLocale {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementLocale::En => "en",
            StatementLocale::Ko => "ko",
        }
    }

    pub(crate) fn default_indent(&self) -> &'static str {
        match self {
            StatementLocale::En => "  ",
            StatementLocale::Ko => " ",
        }
    }

    pub(crate) fn header(&self, customer: &str) -> String {
        match self {
            StatementLocale::En => format!("Statement for {customer}"),
            StatementLocale::Ko => format!("청구 내역 (고객명 {customer})"),
        }
    }

    pub(crate) fn seats(&self, audience: u32) -> String {
        match self {
            StatementLocale::En => format!("{audience} seats"),
            StatementLocale::Ko => format!("{audience}석"),
        }
    }

    pub(crate) fn amount_owed(&self, amount: &str) -> String {
        match self {
            StatementLocale::En => format!("Amount owed is {amount}"),
            StatementLocale::Ko => format!("총액: {amount}"),
        }
    }

    pub(crate) fn credits_earned(&self, credits: u64) -> String {
        match self {
            StatementLocale::En => format!("You earned {credits} credits"),
            StatementLocale::Ko => format!("적립 포인트: {credits}점"),
        }
    }
}

impl core::fmt::Display for StatementLocale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for StatementLocale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(StatementLocale::En),
            "ko" | "ko-kr" | "korean" => Ok(StatementLocale::Ko),
            other => Err(DomainError::validation(format!(
                "unknown statement locale: {other}"
            ))),
        }
    }
}

/// How a [`crate::Statement`] is rendered to text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatementConfig {
    pub locale: StatementLocale,
    /// Prefix for each performance line; `None` uses the locale's default.
    pub line_indent: Option<String>,
}

impl StatementConfig {
    pub fn with_locale(mut self, locale: StatementLocale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_line_indent(mut self, indent: impl Into<String>) -> Self {
        self.line_indent = Some(indent.into());
        self
    }

    pub fn line_indent(&self) -> &str {
        self.line_indent
            .as_deref()
            .unwrap_or_else(|| self.locale.default_indent())
    }

    /// Build from `PLAYBILL_LOCALE`; unset or unrecognised values fall back to
    /// English.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let locale = match lookup(LOCALE_ENV) {
            Some(raw) => raw.parse::<StatementLocale>().unwrap_or_else(|err| {
                warn!(var = LOCALE_ENV, value = %raw, error = %err, "statement locale not recognised; using en");
                StatementLocale::En
            }),
            None => StatementLocale::default(),
        };

        Self {
            locale,
            line_indent: None,
        }
    }
}
