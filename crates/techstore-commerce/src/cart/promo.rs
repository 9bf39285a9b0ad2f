//! Promo codes.

use crate::catalog::builtin_promo_codes;
use crate::error::CommerceError;
use crate::money::Percent;
use serde::{Deserialize, Serialize};

/// A promo code and the percentage it takes off the cart total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromoCode {
    /// Code as displayed (e.g., "SAVE15").
    pub code: String,
    pub percent: Percent,
}

impl PromoCode {
    pub fn new(code: impl Into<String>, percent: Percent) -> Self {
        Self {
            code: code.into(),
            percent,
        }
    }

    /// Case-insensitive exact comparison with user input.
    pub fn matches(&self, input: &str) -> bool {
        self.code.to_lowercase() == input.to_lowercase()
    }

    /// Footer label, e.g. "SAVE15 (-15%)".
    pub fn label(&self) -> String {
        format!("{} (-{})", self.code, self.percent)
    }
}

/// Matches user input against the fixed list of valid codes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromoEngine {
    codes: Vec<PromoCode>,
}

impl PromoEngine {
    pub fn new(codes: Vec<PromoCode>) -> Self {
        Self { codes }
    }

    /// The store's compiled-in codes.
    pub fn builtin() -> Self {
        Self::new(builtin_promo_codes())
    }

    /// Find the code matching the input, ignoring case.
    ///
    /// Input is not trimmed and partial matches do not count.
    pub fn lookup(&self, input: &str) -> Option<&PromoCode> {
        self.codes.iter().find(|c| c.matches(input))
    }

    /// Resolve the input to the percentage it grants.
    pub fn resolve(&self, input: &str) -> Result<Percent, CommerceError> {
        self.lookup(input)
            .map(|c| c.percent)
            .ok_or_else(|| CommerceError::InvalidPromoCode(input.to_string()))
    }

    pub fn codes(&self) -> &[PromoCode] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for PromoEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_codes() {
        let engine = PromoEngine::builtin();
        assert_eq!(engine.len(), 3);
        assert_eq!(engine.resolve("WELCOME10"), Ok(Percent::saturating(10)));
        assert_eq!(engine.resolve("SUMMER20"), Ok(Percent::saturating(20)));
        assert_eq!(engine.resolve("SAVE15"), Ok(Percent::saturating(15)));
    }

    #[test]
    fn test_lookup_ignores_case() {
        let engine = PromoEngine::builtin();
        assert_eq!(engine.resolve("welcome10"), Ok(Percent::saturating(10)));
        assert_eq!(engine.resolve("Summer20"), Ok(Percent::saturating(20)));
    }

    #[test]
    fn test_no_partial_or_padded_match() {
        let engine = PromoEngine::builtin();
        assert!(engine.lookup("WELCOME").is_none());
        assert!(engine.lookup("WELCOME100").is_none());
        assert!(engine.lookup(" SAVE15").is_none());
        assert!(engine.lookup("").is_none());
    }

    #[test]
    fn test_unknown_code_error() {
        let engine = PromoEngine::builtin();
        assert_eq!(
            engine.resolve("BOGUS"),
            Err(CommerceError::InvalidPromoCode("BOGUS".to_string()))
        );
    }

    #[test]
    fn test_label() {
        let code = PromoCode::new("SAVE15", Percent::saturating(15));
        assert_eq!(code.label(), "SAVE15 (-15%)");
    }
}
