use thiserror::Error;
use uuid::Uuid;

/// Errors raised when assembling a wheel from a menu.
///
/// All of these are construction-time precondition failures. A wheel that
/// constructed successfully cannot fail mid-spin; the animation loop does
/// no I/O and no fallible work.
#[derive(Debug, Error)]
pub enum WheelError {
    #[error("Need at least 2 enabled choices to spin, got {got}")]
    NotEnoughChoices { got: usize },

    #[error("A wheel needs at least 2 wedges, got {wedges}")]
    TooFewWedges { wedges: usize },

    #[error("Wedge count {wedges} exceeds the {max} available wedge colors")]
    TooManyWedges { wedges: usize, max: usize },
}

/// Errors raised by menu editing operations.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Dish label cannot be blank")]
    BlankLabel,

    #[error("Dish '{label}' is already on the menu")]
    DuplicateLabel { label: String },

    #[error("No dish with key {key}")]
    UnknownChoice { key: Uuid },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_error_formatting() {
        let error = WheelError::TooManyWedges {
            wedges: 16,
            max: 12,
        };
        let msg = error.to_string();
        assert!(msg.contains("16"));
        assert!(msg.contains("12"));

        let msg = WheelError::NotEnoughChoices { got: 1 }.to_string();
        assert!(msg.contains('1'));
    }

    #[test]
    fn test_menu_error_formatting() {
        let error = MenuError::DuplicateLabel {
            label: "Ramen".to_string(),
        };
        assert!(error.to_string().contains("Ramen"));
    }
}
