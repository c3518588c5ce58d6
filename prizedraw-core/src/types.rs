use serde::{Deserialize, Serialize};
use std::fmt;

/// Eligible participant after normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    #[serde(rename = "urc")]
    pub identity_code: String,
}

impl Participant {
    /// Trims the name and upper-cases the identity code
    pub fn new(name: &str, identity_code: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            identity_code: identity_code.trim().to_uppercase(),
        }
    }

    /// Case and whitespace insensitive identity used for deduplication
    pub fn identity_key(&self) -> (String, String) {
        (
            self.name.trim().to_lowercase(),
            self.identity_code.trim().to_uppercase(),
        )
    }

    pub fn with_prize(self, prize: PrizeTag) -> DrawEntry {
        DrawEntry {
            name: self.name,
            identity_code: self.identity_code,
            prize,
        }
    }
}

/// Prize identifier such as `silver_coin` or `washing_machine`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrizeTag(String);

impl PrizeTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display label: `washing_machine` -> `Washing Machine`
    pub fn label(&self) -> String {
        let mut label = String::with_capacity(self.0.len());
        let mut prev_alpha = false;
        for c in self.0.chars() {
            let c = if c == '_' { ' ' } else { c };
            if c.is_alphabetic() {
                if prev_alpha {
                    label.extend(c.to_lowercase());
                } else {
                    label.extend(c.to_uppercase());
                }
                prev_alpha = true;
            } else {
                label.push(c);
                prev_alpha = false;
            }
        }
        label
    }
}

impl fmt::Display for PrizeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PrizeTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

/// One position of a draw sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawEntry {
    pub name: String,
    #[serde(rename = "urc")]
    pub identity_code: String,
    pub prize: PrizeTag,
}

impl DrawEntry {
    pub fn new(name: &str, identity_code: &str, prize: impl Into<PrizeTag>) -> Self {
        Self {
            name: name.to_string(),
            identity_code: identity_code.to_string(),
            prize: prize.into(),
        }
    }
}

/// Revealed entry together with its 1-based position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revealed {
    pub index: usize,
    pub entry: DrawEntry,
}

/// One line of the draw log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    #[serde(rename = "count")]
    pub position: usize,
    pub name: String,
    #[serde(rename = "urc")]
    pub identity_code: String,
    #[serde(rename = "prize")]
    pub prize_label: String,
}

impl LogRecord {
    pub fn from_revealed(revealed: &Revealed) -> Self {
        Self {
            position: revealed.index,
            name: revealed.entry.name.clone(),
            identity_code: revealed.entry.identity_code.clone(),
            prize_label: revealed.entry.prize.label(),
        }
    }
}
