// src/cards.rs

use serde::{Deserialize, Serialize};

/// Canonical rank alphabet, strongest first.
pub const RANKS: [&str; 13] = [
    "A", "K", "Q", "J", "T", "9", "8", "7", "6", "5", "4", "3", "2",
];

/// Canonical suit glyphs.
pub const SUITS: [&str; 4] = ["♠", "♥", "♦", "♣"];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Card {
    pub rank: String, // "2"-"9", "T", "J", "Q", "K", "A" once normalized
    pub suit: String, // "♠", "♥", "♦", "♣" once normalized
}

impl Card {
    pub fn new(rank: impl Into<String>, suit: impl Into<String>) -> Card {
        Card {
            rank: rank.into(),
            suit: suit.into(),
        }
    }

    /// Map recognizer vocabulary onto the canonical alphabet. Unknown values
    /// pass through unchanged so an unfamiliar recognizer vocabulary never
    /// breaks the session; downstream comparisons simply won't match them.
    pub fn normalized(&self) -> Card {
        let suit = match self.suit.to_lowercase().as_str() {
            "spades" | "♠" => "♠".to_string(),
            "hearts" | "♥" => "♥".to_string(),
            "diamonds" | "♦" => "♦".to_string(),
            "clubs" | "♣" => "♣".to_string(),
            _ => self.suit.clone(),
        };
        let rank = match self.rank.to_lowercase().as_str() {
            "10" | "ten" => "T".to_string(),
            _ => self.rank.to_uppercase(),
        };
        Card { rank, suit }
    }

    /// Parse a compact token like "As", "10h" or "K♦" from terminal input.
    /// Returns `None` unless the token ends in a recognizable suit.
    pub fn parse_shorthand(token: &str) -> Option<Card> {
        let token = token.trim();
        let suit_char = token.chars().last()?;
        let rank: String = {
            let mut chars: Vec<char> = token.chars().collect();
            chars.pop();
            chars.into_iter().collect()
        };
        if rank.is_empty() {
            return None;
        }
        let suit = match suit_char.to_ascii_lowercase() {
            's' => "spades",
            'h' => "hearts",
            'd' => "diamonds",
            'c' => "clubs",
            '♠' => "♠",
            '♥' => "♥",
            '♦' => "♦",
            '♣' => "♣",
            _ => return None,
        };
        Some(Card::new(rank, suit).normalized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_recognizer_vocabulary() {
        assert_eq!(
            Card::new("10", "spades").normalized(),
            Card::new("T", "♠")
        );
        assert_eq!(Card::new("ten", "HEARTS").normalized(), Card::new("T", "♥"));
        assert_eq!(Card::new("a", "Clubs").normalized(), Card::new("A", "♣"));
        assert_eq!(Card::new("Q", "♦").normalized(), Card::new("Q", "♦"));
    }

    #[test]
    fn normalization_is_idempotent() {
        let inputs = [
            Card::new("10", "spades"),
            Card::new("q", "♦"),
            Card::new("ten", "clubs"),
            Card::new("X", "stars"),
        ];
        for input in inputs {
            let once = input.normalized();
            assert_eq!(once.normalized(), once);
        }
    }

    #[test]
    fn unknown_values_pass_through() {
        assert_eq!(
            Card::new("joker", "stars").normalized(),
            Card::new("JOKER", "stars")
        );
    }

    #[test]
    fn parses_shorthand_tokens() {
        assert_eq!(Card::parse_shorthand("As"), Some(Card::new("A", "♠")));
        assert_eq!(Card::parse_shorthand("10h"), Some(Card::new("T", "♥")));
        assert_eq!(Card::parse_shorthand("K♦"), Some(Card::new("K", "♦")));
        assert_eq!(Card::parse_shorthand("qC"), Some(Card::new("Q", "♣")));
        assert_eq!(Card::parse_shorthand("s"), None);
        assert_eq!(Card::parse_shorthand("AK"), None);
    }
}
