//! Rules consulted after the topic table: the fee follow-up, the term
//! glossary and the generic fallback.

use std::sync::LazyLock;

use regex_lite::Regex;
use wise_core::{ConversationTurn, Reply, message::last_assistant};

use crate::catalog::Link;
use crate::context::AdviceContext;

static FEE_QUESTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"fee|expense ratio|cost").expect("fee pattern is static and valid")
});

const FEE_ANSWER: &str = "Mind fees: favor low expense ratios (many index funds/ETFs are 0.03–0.15%). High fees erode compounding over time. Prefer no‑load, low‑cost funds and avoid frequent trading.";

const FALLBACK_ANSWER: &str = "Here’s general guidance: clarify your goal and time horizon, list constraints (income, fixed bills, debt), create a simple budget, then automate savings toward your goal. If you share more specifics (income, major expenses, debts), I can tailor a step‑by‑step plan.";

/// A question about fees right after the assistant talked about investing.
///
/// Only the most recent assistant turn counts; its content is compared
/// case-insensitively.
pub fn fee_follow_up(ctx: &AdviceContext, history: &[ConversationTurn]) -> Option<Reply> {
    if !FEE_QUESTION.is_match(ctx.question()) {
        return None;
    }
    let last = last_assistant(history)?;
    if !last.content.to_lowercase().contains("invest") {
        return None;
    }
    Some(Reply::new(FEE_ANSWER).cite(Link::InvestorFees.source()))
}

/// One glossary definition.
pub struct GlossaryEntry {
    term: &'static str,
    key: Regex,
    text: &'static str,
    cite: Link,
}

impl GlossaryEntry {
    pub fn term(&self) -> &'static str {
        self.term
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn matches(&self, normalized: &str) -> bool {
        self.key.is_match(normalized)
    }

    fn reply(&self) -> Reply {
        Reply::new(self.text).cite(self.cite.source())
    }
}

const GLOSSARY_TABLE: &[(&str, &str, &str, Link)] = &[
    (
        "apr",
        r"apr",
        "APR is the yearly borrowing rate not including compounding. Use it to compare loan costs.",
        Link::FinraAprApy,
    ),
    (
        "apy",
        r"apy",
        "APY is the yearly yield including compounding—useful for comparing savings returns.",
        Link::FinraAprApy,
    ),
    (
        "cd",
        r"cd|certificate of deposit",
        "A CD is a time‑deposit with a fixed term and rate; early withdrawals incur penalties.",
        Link::InvestorCd,
    ),
    (
        "etf",
        r"etf",
        "An ETF is a basket of securities that trades intraday like a stock, often tracking an index.",
        Link::InvestorEtf,
    ),
    (
        "mutual fund",
        r"mutual fund",
        "A mutual fund pools investor money to buy a portfolio of securities; priced once per day.",
        Link::InvestorMutual,
    ),
    (
        "roth ira",
        r"roth ira",
        "A Roth IRA uses after‑tax contributions; qualified withdrawals are tax‑free in retirement.",
        Link::IrsRoth,
    ),
    (
        "401k",
        r"401k|401\(k\)",
        "A 401(k) is an employer retirement plan; contribute at least to get the full employer match.",
        Link::Irs401k,
    ),
    (
        "hsa",
        r"hsa",
        "An HSA allows pre‑tax saving for medical costs (with HDHP) and rolls over indefinitely.",
        Link::HealthcareHsa,
    ),
    (
        "529",
        r"529",
        "A 529 is a tax‑advantaged education savings plan; growth is tax‑free for qualified expenses.",
        Link::Sec529,
    ),
    (
        "emergency fund",
        r"emergency fund",
        "An emergency fund covers 3–6 months of essential expenses; keep it liquid and safe.",
        Link::InvestopediaEmergency,
    ),
];

static GLOSSARY: LazyLock<Vec<GlossaryEntry>> = LazyLock::new(|| {
    GLOSSARY_TABLE
        .iter()
        .map(|&(term, pattern, text, cite)| GlossaryEntry {
            term,
            key: Regex::new(pattern).expect("glossary patterns are static and valid"),
            text,
            cite,
        })
        .collect()
});

/// Glossary entries in lookup order.
pub fn glossary() -> &'static [GlossaryEntry] {
    &GLOSSARY
}

/// First glossary entry whose key matches, with its one-line reply.
pub fn glossary_lookup(ctx: &AdviceContext) -> Option<(&'static str, Reply)> {
    glossary()
        .iter()
        .find(|entry| entry.matches(ctx.question()))
        .map(|entry| (entry.term, entry.reply()))
}

/// General guidance when nothing else matched. Never fails.
pub fn fallback(ctx: &AdviceContext) -> Reply {
    Reply::new(format!("{FALLBACK_ANSWER}{}", ctx.profile_note()))
        .cite(Link::CfpbBudget.source())
        .cite(Link::InvestorBasics.source())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wise_core::UserProfile;

    fn ctx(q: &str) -> AdviceContext {
        AdviceContext::new(q, None)
    }

    #[test]
    fn fee_follow_up_after_investing_talk() {
        let history = vec![
            ConversationTurn::user("how do I invest?"),
            ConversationTurn::assistant("For long‑term growth, keep INVESTING simple"),
        ];
        let reply = fee_follow_up(&ctx("what about fees?"), &history).unwrap();
        assert!(reply.answer.starts_with("Mind fees"));
        assert_eq!(reply.sources, vec![Link::InvestorFees.source()]);
    }

    #[test]
    fn fee_follow_up_only_looks_at_last_assistant_turn() {
        let history = vec![
            ConversationTurn::assistant("Let's talk about investing."),
            ConversationTurn::user("ok"),
            ConversationTurn::assistant("Here's how a mortgage works."),
        ];
        assert!(fee_follow_up(&ctx("what about fees?"), &history).is_none());
    }

    #[test]
    fn fee_follow_up_needs_history() {
        assert!(fee_follow_up(&ctx("what about fees?"), &[]).is_none());
        let users_only = vec![ConversationTurn::user("invest invest invest")];
        assert!(fee_follow_up(&ctx("cost?"), &users_only).is_none());
    }

    #[test]
    fn glossary_first_match_wins() {
        let (term, reply) = glossary_lookup(&ctx("apr")).unwrap();
        assert_eq!(term, "apr");
        assert_eq!(reply.sources, vec![Link::FinraAprApy.source()]);

        let (term, _) = glossary_lookup(&ctx("mutual fund")).unwrap();
        assert_eq!(term, "mutual fund");
        assert!(glossary_lookup(&ctx("blorf")).is_none());
    }

    #[test]
    fn glossary_has_ten_entries() {
        assert_eq!(glossary().len(), 10);
        assert!(glossary().iter().all(|g| !g.text().is_empty()));
    }

    #[test]
    fn fallback_cites_two_sources_and_appends_note() {
        let reply = fallback(&ctx("blorf"));
        assert!(reply.answer.contains("clarify your goal"));
        assert_eq!(reply.sources.len(), 2);

        let profile = UserProfile::new(Some(48_000.0), Some(900.0));
        let with_note = fallback(&AdviceContext::new("blorf", Some(&profile)));
        assert!(with_note.answer.ends_with("Your profile: balance $900, income $48,000."));
    }
}
