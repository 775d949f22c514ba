//! Question dispatch: topic table, then fee follow-up, then glossary, then
//! the generic fallback. The first rule that produces a reply wins.

use tracing::debug;
use wise_core::{ConversationTurn, Reply, UserProfile};

use crate::context::AdviceContext;
use crate::rules;
use crate::topics::topics;

/// Which rule produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// A topic from the ordered table, by id
    Topic(&'static str),
    /// A fees question following investing advice
    FeeFollowUp,
    /// A glossary definition, by term
    Glossary(&'static str),
    /// General guidance
    Fallback,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Topic(id) => write!(f, "topic:{id}"),
            Rule::FeeFollowUp => write!(f, "fee_follow_up"),
            Rule::Glossary(term) => write!(f, "glossary:{term}"),
            Rule::Fallback => write!(f, "fallback"),
        }
    }
}

/// A reply together with the rule that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    pub rule: Rule,
    pub reply: Reply,
}

/// Answer a question with no I/O. Always produces a non-empty reply.
///
/// `history` is oldest first and only consulted for the fee follow-up.
pub fn dispatch(
    question: &str,
    profile: Option<&UserProfile>,
    history: &[ConversationTurn],
) -> Dispatch {
    let ctx = AdviceContext::new(question, profile);

    let (rule, reply) = if let Some(topic) = topics().iter().find(|t| t.matches(ctx.question())) {
        (Rule::Topic(topic.id()), topic.reply_with(&ctx))
    } else if let Some(reply) = rules::fee_follow_up(&ctx, history) {
        (Rule::FeeFollowUp, reply)
    } else if let Some((term, reply)) = rules::glossary_lookup(&ctx) {
        (Rule::Glossary(term), reply)
    } else {
        (Rule::Fallback, rules::fallback(&ctx))
    };

    debug!(
        rule = %rule,
        sources = reply.sources.len(),
        personalized = profile.is_some(),
        "Dispatched question"
    );

    Dispatch { rule, reply }
}

/// [`dispatch`] without the rule.
pub fn advise(
    question: &str,
    profile: Option<&UserProfile>,
    history: &[ConversationTurn],
) -> Reply {
    dispatch(question, profile, history).reply
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Link;
    use std::collections::HashSet;

    fn rule_of(q: &str) -> Rule {
        dispatch(q, None, &[]).rule
    }

    #[test]
    fn roth_question_hits_roth_topic() {
        let d = dispatch("What is a Roth IRA?", None, &[]);
        assert_eq!(d.rule, Rule::Topic("roth"));
        assert_eq!(d.reply.sources.len(), 1);
        assert_eq!(d.reply.sources[0].url, "https://www.irs.gov/retirement-plans/roth-iras");
    }

    #[test]
    fn nonsense_falls_back() {
        let d = dispatch("blorf", None, &[]);
        assert_eq!(d.rule, Rule::Fallback);
        assert!(d.reply.answer.contains("clarify your goal"));
        assert_eq!(d.reply.sources.len(), 2);
    }

    #[test]
    fn fees_after_investing_answer() {
        let history = vec![
            ConversationTurn::user("how should I invest"),
            ConversationTurn::assistant("Keep investing simple with index funds."),
        ];
        let d = dispatch("what about fees?", None, &history);
        assert_eq!(d.rule, Rule::FeeFollowUp);
        assert_eq!(d.reply.sources, vec![Link::InvestorFees.source()]);
    }

    #[test]
    fn fees_without_context_fall_back() {
        assert_eq!(rule_of("what about fees?"), Rule::Fallback);
    }

    #[test]
    fn bare_apr_is_a_glossary_lookup() {
        let d = dispatch("APR", None, &[]);
        assert_eq!(d.rule, Rule::Glossary("apr"));
        assert_eq!(d.reply.sources, vec![Link::FinraAprApy.source()]);
        assert!(d.reply.answer.starts_with("APR is the yearly borrowing rate"));
    }

    #[test]
    fn apr_comparison_is_a_topic() {
        let d = dispatch("APR vs APY?", None, &[]);
        assert_eq!(d.rule, Rule::Topic("apr_apy"));
        assert_eq!(d.reply.sources.len(), 2);
    }

    #[test]
    fn bare_apy_stays_with_the_topic() {
        let d = dispatch("what is APY?", None, &[]);
        assert_eq!(d.rule, Rule::Topic("apr_apy"));
        assert_eq!(d.reply.sources.len(), 2);
    }

    #[test]
    fn budget_with_income_shows_emergency_target() {
        let profile = UserProfile::new(Some(36_000.0), None);
        let d = dispatch("help me budget", Some(&profile), &[]);
        assert_eq!(d.rule, Rule::Topic("budget_saving"));
        assert!(d.reply.answer.contains("$9,000"));
    }

    #[test]
    fn empty_profile_never_renders_placeholders() {
        let profile = UserProfile::default();
        for q in ["tax", "budget", "invest", "debt", "blorf"] {
            let answer = advise(q, Some(&profile), &[]).answer;
            for bad in ["NaN", "undefined", "null", "None", "inf"] {
                assert!(!answer.contains(bad), "{q}: {bad}");
            }
        }
    }

    #[test]
    fn missing_profile_never_renders_placeholders() {
        let mut replies: Vec<Reply> = topics().iter().map(|t| t.reply(t.id(), None)).collect();
        let investing = vec![ConversationTurn::assistant("Consider low-cost index funds.")];
        let fee = dispatch("what about fees?", None, &investing);
        assert_eq!(fee.rule, Rule::FeeFollowUp);
        replies.push(fee.reply);
        for entry in rules::glossary() {
            let ctx = AdviceContext::new(entry.term(), None);
            let (_, reply) = rules::glossary_lookup(&ctx).unwrap();
            replies.push(reply);
        }
        let fallback = dispatch("blorf", None, &[]);
        assert_eq!(fallback.rule, Rule::Fallback);
        replies.push(fallback.reply);

        for reply in replies {
            for bad in ["NaN", "undefined", "null"] {
                assert!(!reply.answer.contains(bad), "{bad} in {:?}", reply.answer);
            }
        }
    }

    #[test]
    fn table_order_decides_ties() {
        // "tax" and "roth" both match; taxes comes first.
        assert_eq!(rule_of("roth ira tax rules"), Rule::Topic("taxes"));
        // "credit" belongs to taxes before credit_debt.
        assert_eq!(rule_of("credit score"), Rule::Topic("taxes"));
        assert_eq!(rule_of("my debt is huge"), Rule::Topic("credit_debt"));
        // The insurance umbrella shadows life insurance.
        assert_eq!(rule_of("term life insurance"), Rule::Topic("insurance_general"));
        assert_eq!(rule_of("term life"), Rule::Topic("life_insurance"));
    }

    #[test]
    fn topic_beats_glossary() {
        // "etf" is both an investing trigger and a glossary term.
        assert_eq!(rule_of("etf"), Rule::Topic("investing"));
    }

    #[test]
    fn topic_beats_fee_follow_up() {
        let history = vec![ConversationTurn::assistant("invest wisely")];
        let d = dispatch("what does a broker cost?", None, &history);
        assert_eq!(d.rule, Rule::Topic("investing"));
    }

    #[test]
    fn every_rule_yields_bounded_unique_sources() {
        let questions = [
            "tax", "budget", "invest", "debt", "roth", "401k", "hsa", "student loan", "mortgage",
            "529", "apr vs apy", "cd", "fsa", "fico range", "dti", "rent or buy",
            "how much to retire", "insurance", "whole life", "ynab", "i bond", "apy", "blorf",
        ];
        for q in questions {
            let reply = advise(q, None, &[]);
            assert!(!reply.answer.is_empty(), "{q}");
            assert!(!reply.sources.is_empty() && reply.sources.len() <= 3, "{q}");
            let urls: HashSet<_> = reply.sources.iter().map(|s| &s.url).collect();
            assert_eq!(urls.len(), reply.sources.len(), "{q}");
        }
    }

    #[test]
    fn dispatch_is_deterministic() {
        let profile = UserProfile::new(Some(75_000.0), Some(4_200.0));
        let a = dispatch("how do I save more?", Some(&profile), &[]);
        let b = dispatch("how do I save more?", Some(&profile), &[]);
        assert_eq!(a, b);
    }

    #[test]
    fn unusual_input_still_answers() {
        assert_eq!(rule_of(""), Rule::Fallback);
        assert_eq!(rule_of("   \n\t"), Rule::Fallback);
        assert_eq!(rule_of("¿Cómo ahorro dinero? 💰"), Rule::Fallback);
        let long = "blorf ".repeat(10_000);
        assert_eq!(rule_of(&long), Rule::Fallback);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(rule_of("MORTGAGE"), Rule::Topic("mortgage"));
        assert_eq!(rule_of("  Mortgage  "), Rule::Topic("mortgage"));
    }
}
