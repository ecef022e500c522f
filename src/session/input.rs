//! Editable numeric inputs.
//!
//! A text edit that fails to parse never surfaces an error: under
//! [`ParsePolicy::RetainLastValid`] the previous value is kept and the
//! caller is told the edit was retained.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::parse_decimal;

/// What to do with text that does not parse as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsePolicy {
    /// Discard the edit silently and keep the last valid value.
    #[default]
    RetainLastValid,
}

/// The result of applying a text edit to an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditOutcome {
    /// The text parsed and the value was updated.
    Accepted,
    /// The text did not parse; the previous value was kept.
    Retained,
}

/// A numeric field seeded from a record default and edited as text.
#[derive(Debug, Clone, Copy)]
pub struct EditableInput {
    value: Decimal,
    policy: ParsePolicy,
    normalize: fn(Decimal) -> Decimal,
}

impl EditableInput {
    /// Creates an input that stores values as entered.
    pub fn new(value: Decimal) -> Self {
        Self::with_normalizer(value, |v| v)
    }

    /// Creates an input that passes every accepted value through `normalize`,
    /// including the initial one.
    pub fn with_normalizer(value: Decimal, normalize: fn(Decimal) -> Decimal) -> Self {
        Self {
            value: normalize(value),
            policy: ParsePolicy::RetainLastValid,
            normalize,
        }
    }

    /// Returns the current value.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Applies a text edit.
    ///
    /// # Examples
    ///
    /// ```
    /// use savings_engine::session::{EditOutcome, EditableInput};
    /// use rust_decimal::Decimal;
    ///
    /// let mut input = EditableInput::new(Decimal::from(40));
    /// assert_eq!(input.edit("abc"), EditOutcome::Retained);
    /// assert_eq!(input.value(), Decimal::from(40));
    /// assert_eq!(input.edit("42.5"), EditOutcome::Accepted);
    /// assert_eq!(input.value(), Decimal::new(425, 1));
    /// ```
    pub fn edit(&mut self, text: &str) -> EditOutcome {
        match (parse_decimal(text), self.policy) {
            (Some(parsed), _) => {
                self.value = (self.normalize)(parsed);
                EditOutcome::Accepted
            }
            (None, ParsePolicy::RetainLastValid) => {
                debug!(text = %text, retained = %self.value, "Discarded unparseable edit");
                EditOutcome::Retained
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::round_one_decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_valid_edit_is_accepted() {
        let mut input = EditableInput::new(dec("40.00"));

        assert_eq!(input.edit("45.25"), EditOutcome::Accepted);
        assert_eq!(input.value(), dec("45.25"));
    }

    #[test]
    fn test_invalid_edit_keeps_previous_value() {
        let mut input = EditableInput::new(dec("40.00"));

        for text in ["", "abc", "12,5", "$40", "4o"] {
            assert_eq!(input.edit(text), EditOutcome::Retained, "text {:?}", text);
            assert_eq!(input.value(), dec("40.00"));
        }
    }

    #[test]
    fn test_retains_latest_valid_not_initial() {
        let mut input = EditableInput::new(dec("40.00"));
        input.edit("50");
        input.edit("not a number");

        assert_eq!(input.value(), dec("50"));
    }

    #[test]
    fn test_whitespace_and_negative_values_are_accepted() {
        let mut input = EditableInput::new(dec("1"));

        assert_eq!(input.edit("  -3.5 "), EditOutcome::Accepted);
        assert_eq!(input.value(), dec("-3.5"));
    }

    #[test]
    fn test_normalizer_applies_to_seed_and_edits() {
        let mut input = EditableInput::with_normalizer(dec("2.36"), round_one_decimal);
        assert_eq!(input.value(), dec("2.4"));

        input.edit("7.05");
        assert_eq!(input.value(), dec("7.0"));
    }

    #[test]
    fn test_default_policy_is_retain_last_valid() {
        assert_eq!(ParsePolicy::default(), ParsePolicy::RetainLastValid);
        assert_eq!(EditableInput::new(Decimal::ZERO).policy, ParsePolicy::RetainLastValid);
    }
}
