use regex::Regex;
use std::sync::LazyLock;

use veil_core::errors::ConfigError;
use veil_core::EntityType;

use super::checksums;
use super::secrets::secret_patterns;

/// A compiled PII detection pattern.
#[derive(Clone)]
pub struct PiiPattern {
    pub name: &'static str,
    pub entity_type: EntityType,
    pub regex: &'static LazyLock<Option<Regex>>,
    pub base_score: f64,
    /// Rejects matches that fit the shape but fail a checksum or range rule.
    pub validator: Option<fn(&str) -> bool>,
    /// Words that raise confidence when they appear shortly before a match.
    pub context: &'static [&'static str],
}

macro_rules! pii_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Email ──────────────────────────────────────────────────────────────────
pii_pattern!(
    RE_EMAIL,
    r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}"
);

// ── Phone numbers (NANP, optional +1, optional parenthesised area code) ────
pii_pattern!(
    RE_PHONE,
    r"(?:\+1[-.\s]?)?(?:\(\d{3}\)\s?|\b\d{3}[-.\s]?)\d{3}[-.\s]\d{4}\b"
);

// ── SSN ────────────────────────────────────────────────────────────────────
pii_pattern!(RE_SSN, r"\b\d{3}-\d{2}-\d{4}\b");

// ── Credit card (Visa, MC, Amex, Discover) ─────────────────────────────────
pii_pattern!(
    RE_CREDIT_CARD,
    r"\b(?:4\d{3}|5[1-5]\d{2}|3[47]\d{2}|6(?:011|5\d{2}))[-\s]?\d{4}[-\s]?\d{4}[-\s]?\d{3,4}\b"
);

// ── IPv4 ───────────────────────────────────────────────────────────────────
pii_pattern!(
    RE_IPV4,
    r"\b(?:(?:25[0-5]|2[0-4]\d|[01]?\d\d?)\.){3}(?:25[0-5]|2[0-4]\d|[01]?\d\d?)\b"
);

// ── IPv6 (full form) ───────────────────────────────────────────────────────
pii_pattern!(RE_IPV6, r"\b(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}\b");

// ── IBAN (compact or grouped by four) ──────────────────────────────────────
pii_pattern!(
    RE_IBAN,
    r"\b[A-Z]{2}\d{2}(?: ?[A-Z0-9]{4}){2,7}(?: ?[A-Z0-9]{1,4})?\b"
);

// ── MAC Address ────────────────────────────────────────────────────────────
pii_pattern!(
    RE_MAC_ADDRESS,
    r"\b(?:[0-9A-Fa-f]{2}[:\-]){5}[0-9A-Fa-f]{2}\b"
);

/// All built-in patterns, most specific first.
pub fn all_patterns() -> Vec<PiiPattern> {
    vec![
        PiiPattern {
            name: "email",
            entity_type: EntityType::EMAIL,
            regex: &RE_EMAIL,
            base_score: 0.95,
            validator: None,
            context: &["email", "e-mail", "mail", "contact"],
        },
        PiiPattern {
            name: "ssn",
            entity_type: EntityType::SSN,
            regex: &RE_SSN,
            base_score: 0.85,
            validator: Some(checksums::is_valid_ssn),
            context: &["ssn", "social security", "social"],
        },
        PiiPattern {
            name: "credit_card",
            entity_type: EntityType::CREDIT_CARD,
            regex: &RE_CREDIT_CARD,
            base_score: 0.90,
            validator: Some(checksums::luhn_valid),
            context: &["card", "credit", "visa", "mastercard", "amex", "payment"],
        },
        PiiPattern {
            name: "iban",
            entity_type: EntityType::IBAN,
            regex: &RE_IBAN,
            base_score: 0.85,
            validator: Some(checksums::iban_valid),
            context: &["iban", "account", "bank", "transfer"],
        },
        PiiPattern {
            name: "mac_address",
            entity_type: EntityType::MAC_ADDRESS,
            regex: &RE_MAC_ADDRESS,
            base_score: 0.70,
            validator: None,
            context: &["mac", "hardware", "device"],
        },
        PiiPattern {
            name: "ipv6",
            entity_type: EntityType::IP_ADDRESS,
            regex: &RE_IPV6,
            base_score: 0.75,
            validator: None,
            context: &["ip", "ipv6", "address", "host"],
        },
        PiiPattern {
            name: "ipv4",
            entity_type: EntityType::IP_ADDRESS,
            regex: &RE_IPV4,
            base_score: 0.70,
            validator: None,
            context: &["ip", "ipv4", "address", "host", "server"],
        },
        PiiPattern {
            name: "phone",
            entity_type: EntityType::PHONE,
            regex: &RE_PHONE,
            base_score: 0.60,
            validator: None,
            context: &["phone", "call", "tel", "mobile", "cell", "fax", "contact"],
        },
    ]
}

/// Fail if any built-in or credential pattern did not compile.
pub fn check_pattern_health() -> Result<(), ConfigError> {
    for pat in all_patterns().into_iter().chain(secret_patterns()) {
        if pat.regex.is_none() {
            return Err(ConfigError::ValidationFailed {
                field: format!("patterns.{}", pat.name),
                message: "regex compilation failed".to_string(),
            });
        }
    }
    Ok(())
}
