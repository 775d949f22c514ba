//! Per-invocation values shared by every reply generator.

use wise_core::UserProfile;

use crate::format::{format_amount, format_whole};

/// Months of income the emergency-fund target covers.
pub const EMERGENCY_MONTHS: f64 = 3.0;

/// The normalized question plus profile-derived text, computed once per call.
#[derive(Debug, Clone)]
pub struct AdviceContext {
    question: String,
    profile_note: String,
    emergency_target: Option<f64>,
}

impl AdviceContext {
    pub fn new(question: &str, profile: Option<&UserProfile>) -> Self {
        let profile_note = profile
            .map(|p| {
                format!(
                    "\nYour profile: balance ${}, income ${}.",
                    format_amount(p.current_balance()),
                    format_amount(p.annual_income())
                )
            })
            .unwrap_or_default();

        let emergency_target = profile
            .map(|p| p.monthly_income() * EMERGENCY_MONTHS)
            .filter(|target| *target > 0.0);

        Self {
            question: normalize(question),
            profile_note,
            emergency_target,
        }
    }

    /// Lower-cased, trimmed question text.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Balance/income suffix, empty without a profile.
    pub fn profile_note(&self) -> &str {
        &self.profile_note
    }

    /// Three months of income, only when income is known and positive.
    pub fn emergency_target(&self) -> Option<f64> {
        self.emergency_target
    }

    /// The target as display text (`"9,000"`), rounded to whole units.
    pub fn emergency_target_display(&self) -> Option<String> {
        self.emergency_target.map(format_whole)
    }
}

/// Case-fold and trim a question for matching.
pub fn normalize(question: &str) -> String {
    question.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_question() {
        let ctx = AdviceContext::new("  What is a ROTH IRA?\n", None);
        assert_eq!(ctx.question(), "what is a roth ira?");
    }

    #[test]
    fn no_profile_means_no_note_and_no_target() {
        let ctx = AdviceContext::new("budget", None);
        assert_eq!(ctx.profile_note(), "");
        assert!(ctx.emergency_target().is_none());
    }

    #[test]
    fn profile_note_formats_both_fields() {
        let profile = UserProfile::new(Some(52_000.0), Some(1_234.5));
        let ctx = AdviceContext::new("q", Some(&profile));
        assert_eq!(
            ctx.profile_note(),
            "\nYour profile: balance $1,234.5, income $52,000."
        );
    }

    #[test]
    fn missing_fields_show_zero() {
        let profile = UserProfile::default();
        let ctx = AdviceContext::new("q", Some(&profile));
        assert_eq!(ctx.profile_note(), "\nYour profile: balance $0, income $0.");
        assert!(ctx.emergency_target().is_none());
    }

    #[test]
    fn emergency_target_is_three_months() {
        let profile = UserProfile::new(Some(36_000.0), None);
        let ctx = AdviceContext::new("q", Some(&profile));
        assert_eq!(ctx.emergency_target(), Some(9_000.0));
        assert_eq!(ctx.emergency_target_display().as_deref(), Some("9,000"));
    }

    #[test]
    fn emergency_target_rounds_to_whole_units() {
        let profile = UserProfile::new(Some(50_001.0), None);
        let ctx = AdviceContext::new("q", Some(&profile));
        // 50_001 / 12 * 3 = 12_500.25
        assert_eq!(ctx.emergency_target_display().as_deref(), Some("12,500"));
    }
}
