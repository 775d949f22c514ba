//! Citation extraction for replies that arrive without sources.
//!
//! Free-form answers from an external model carry no citations; this scans
//! the answer text for well-known keywords and attaches the matching
//! reference.

use wise_core::{MAX_SOURCES, Source};

/// Keyword (lower-case substring) to reference, checked in order.
const KEYWORD_SOURCES: &[(&str, &str, &str)] = &[
    ("irs", "IRS - Tax Information", "https://www.irs.gov"),
    ("tax", "IRS - Tax Information", "https://www.irs.gov"),
    (
        "401",
        "IRS - 401(k) Plans",
        "https://www.irs.gov/retirement-plans/plan-participant-employee/401k-resource-guide",
    ),
    (
        "roth",
        "IRS - Roth IRA",
        "https://www.irs.gov/retirement-plans/roth-iras",
    ),
    (
        "ira",
        "Investor.gov - IRAs",
        "https://www.investor.gov/introduction-investing/investing-basics/save-invest/retirement/individual-retirement-accounts",
    ),
    (
        "invest",
        "Investor.gov - Investing Basics",
        "https://www.investor.gov/introduction-investing/investing-basics",
    ),
    (
        "etf",
        "Investor.gov - ETFs",
        "https://www.investor.gov/introduction-investing/investing-basics/investment-products/exchange-traded-funds-etfs",
    ),
    (
        "index fund",
        "Investor.gov - Mutual Funds",
        "https://www.investor.gov/introduction-investing/investing-basics/investment-products/mutual-funds",
    ),
    (
        "budget",
        "CFPB - Budgeting",
        "https://www.consumerfinance.gov/consumer-tools/budgeting/",
    ),
    (
        "credit",
        "USA.gov - Credit Reports",
        "https://www.usa.gov/credit-reports",
    ),
    (
        "emergency fund",
        "Investopedia - Emergency Fund",
        "https://www.investopedia.com/terms/e/emergency_fund.asp",
    ),
    (
        "student loan",
        "StudentAid.gov - Loan Repayment",
        "https://studentaid.gov/manage-loans/repayment",
    ),
    ("mortgage", "USA.gov - Mortgages", "https://www.usa.gov/mortgages"),
    ("insurance", "USA.gov - Insurance", "https://www.usa.gov/insurance"),
];

/// Sources for every keyword found in `text`, unique by url, at most
/// [`MAX_SOURCES`].
pub fn extract_sources(text: &str) -> Vec<Source> {
    let lower = text.to_lowercase();
    let mut sources: Vec<Source> = Vec::new();

    for &(keyword, title, url) in KEYWORD_SOURCES {
        if sources.len() >= MAX_SOURCES {
            break;
        }
        if lower.contains(keyword) && !sources.iter().any(|s| s.url == url) {
            sources.push(Source::new(title, url));
        }
    }
    sources
}
