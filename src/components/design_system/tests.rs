//! Design System Component Tests
//!
//! Unit tests for design system enums, variants, and styling logic.

use crate::components::design_system::{BadgeVariant, ButtonVariant};

// ========================================================================
// ButtonVariant Tests
// ========================================================================

#[test]
fn test_button_variant_default() {
    assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
}

#[test]
fn test_button_variant_equality() {
    assert_eq!(ButtonVariant::Primary, ButtonVariant::Primary);
    assert_eq!(ButtonVariant::Secondary, ButtonVariant::Secondary);
    assert_eq!(ButtonVariant::Danger, ButtonVariant::Danger);
    assert_eq!(ButtonVariant::Ghost, ButtonVariant::Ghost);

    assert_ne!(ButtonVariant::Primary, ButtonVariant::Secondary);
    assert_ne!(ButtonVariant::Danger, ButtonVariant::Ghost);
}

#[test]
fn test_button_variant_copy() {
    let variant = ButtonVariant::Secondary;
    let copied: ButtonVariant = variant;
    assert_eq!(variant, copied);
}

// ========================================================================
// BadgeVariant Tests
// ========================================================================

#[test]
fn test_badge_variant_default() {
    assert_eq!(BadgeVariant::default(), BadgeVariant::Default);
}

#[test]
fn test_badge_variant_equality() {
    assert_eq!(BadgeVariant::Default, BadgeVariant::Default);
    assert_eq!(BadgeVariant::Success, BadgeVariant::Success);
    assert_eq!(BadgeVariant::Info, BadgeVariant::Info);

    assert_ne!(BadgeVariant::Default, BadgeVariant::Success);
    assert_ne!(BadgeVariant::Success, BadgeVariant::Info);
}
