//! Stored card tags and their display rendering.
//!
//! Results are persisted with uppercase tag strings (e.g. suit "CLUBS",
//! value "SEVEN") by the recorder that originally played the game. Rendering
//! to glyphs is a total function: unrecognized tags pass through escaped
//! instead of failing, so one odd record never breaks a whole page.

use serde::{Deserialize, Serialize};

/// Stored suit tag, e.g. "CLUBS".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuitTag(pub String);

/// Stored card value tag, e.g. "SEVEN".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueTag(pub String);

/// One played card as stored: serialized as a `[value, suit]` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoredCard(pub ValueTag, pub SuitTag);

impl SuitTag {
    pub fn glyph(&self) -> String {
        match self.0.as_str() {
            "CLUBS" => "\u{2663}".to_string(),
            "SPADES" => "\u{2660}".to_string(),
            "DIAMONDS" => "\u{2666}".to_string(),
            "HEARTS" => "\u{2665}".to_string(),
            other => escape_html(other),
        }
    }
}

impl ValueTag {
    pub fn glyph(&self) -> String {
        match self.0.as_str() {
            "SEVEN" => "7".to_string(),
            "EIGHT" => "8".to_string(),
            "NINE" => "9".to_string(),
            "TEN" => "10".to_string(),
            "JACK" => "J".to_string(),
            "QUEEN" => "Q".to_string(),
            "KING" => "K".to_string(),
            "ACE" => "A".to_string(),
            other => escape_html(other),
        }
    }
}

/// Escape a raw tag so the rendering collaborator can inline it safely.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
