//! Citation catalog: the reputable references replies may point at.
//!
//! Read-only for the life of the process. Replies cite by [`Link`] key so a
//! url is written down exactly once.

use wise_core::Source;

/// Symbolic key for a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Link {
    IrsTax,
    IrsWithholding,
    CfpbBudget,
    Cfpb503020,
    InvestorBasics,
    InvestorFees,
    InvestopediaEmergency,
    UsaGovCredit,
    InvestorEtf,
    InvestorMutual,
    Irs401k,
    HealthcareHsa,
    StudentAid,
    UsaGovMortgage,
    IrsRoth,
    Sec529,
    Fdic,
    FinraAprApy,
    InvestorCompound,
    CfpbDti,
    CfpbCreditScore,
    HealthcareFsa,
    InvestorCd,
    NaicConsumer,
    UsaInsurance,
    StudentAidSave,
    TreasuryDirectIBond,
    FtaStateTax,
}

impl Link {
    /// Every catalog entry, in declaration order.
    pub const ALL: [Link; 28] = [
        Link::IrsTax,
        Link::IrsWithholding,
        Link::CfpbBudget,
        Link::Cfpb503020,
        Link::InvestorBasics,
        Link::InvestorFees,
        Link::InvestopediaEmergency,
        Link::UsaGovCredit,
        Link::InvestorEtf,
        Link::InvestorMutual,
        Link::Irs401k,
        Link::HealthcareHsa,
        Link::StudentAid,
        Link::UsaGovMortgage,
        Link::IrsRoth,
        Link::Sec529,
        Link::Fdic,
        Link::FinraAprApy,
        Link::InvestorCompound,
        Link::CfpbDti,
        Link::CfpbCreditScore,
        Link::HealthcareFsa,
        Link::InvestorCd,
        Link::NaicConsumer,
        Link::UsaInsurance,
        Link::StudentAidSave,
        Link::TreasuryDirectIBond,
        Link::FtaStateTax,
    ];

    pub fn title(self) -> &'static str {
        self.entry().0
    }

    pub fn url(self) -> &'static str {
        self.entry().1
    }

    pub fn source(self) -> Source {
        let (title, url) = self.entry();
        Source::new(title, url)
    }

    fn entry(self) -> (&'static str, &'static str) {
        match self {
            Link::IrsTax => ("IRS · Tax Information", "https://www.irs.gov"),
            Link::IrsWithholding => (
                "IRS · Withholding Estimator",
                "https://www.irs.gov/individuals/tax-withholding-estimator",
            ),
            Link::CfpbBudget => (
                "CFPB · Budgeting and saving",
                "https://www.consumerfinance.gov/consumer-tools/budgeting/",
            ),
            Link::Cfpb503020 => (
                "CFPB · 50/30/20 rule",
                "https://www.consumerfinance.gov/ask-cfpb/what-is-the-50-30-20-rule-en-2107/",
            ),
            Link::InvestorBasics => (
                "Investor.gov · Investing Basics",
                "https://www.investor.gov/introduction-investing/investing-basics",
            ),
            Link::InvestorFees => (
                "Investor.gov · Fees and expenses",
                "https://www.investor.gov/introduction-investing/investing-basics/what-are-my-investment-options/fees-expenses",
            ),
            Link::InvestopediaEmergency => (
                "Investopedia · Emergency Fund",
                "https://www.investopedia.com/terms/e/emergency_fund.asp",
            ),
            Link::UsaGovCredit => (
                "USA.gov · Credit reports & scores",
                "https://www.usa.gov/credit-reports",
            ),
            Link::InvestorEtf => (
                "Investor.gov · ETFs",
                "https://www.investor.gov/introduction-investing/investing-basics/investment-products/exchange-traded-funds-etfs",
            ),
            Link::InvestorMutual => (
                "Investor.gov · Mutual Funds",
                "https://www.investor.gov/introduction-investing/investing-basics/investment-products/mutual-funds",
            ),
            Link::Irs401k => (
                "IRS · 401(k) resource",
                "https://www.irs.gov/retirement-plans/plan-participant-employee/retirement-topics-401k-and-profit-sharing-plan-contribution-limits",
            ),
            Link::HealthcareHsa => (
                "HealthCare.gov · HSA overview",
                "https://www.healthcare.gov/glossary/health-savings-account-HSA/",
            ),
            Link::StudentAid => (
                "StudentAid.gov · Repayment options",
                "https://studentaid.gov/manage-loans/repayment/plans",
            ),
            Link::UsaGovMortgage => ("USA.gov · Mortgages", "https://www.usa.gov/mortgages"),
            Link::IrsRoth => (
                "IRS · Roth IRA",
                "https://www.irs.gov/retirement-plans/roth-iras",
            ),
            Link::Sec529 => (
                "SEC · 529 Plans",
                "https://www.investor.gov/introduction-investing/investing-basics/education-savings/529-plans",
            ),
            Link::Fdic => (
                "FDIC · Deposit Insurance",
                "https://www.fdic.gov/resources/deposit-insurance/",
            ),
            Link::FinraAprApy => (
                "FINRA · APR vs. APY",
                "https://www.finra.org/investors/learn-to-invest/key-investing-concepts/apr-apy",
            ),
            Link::InvestorCompound => (
                "Investor.gov · Compound Interest",
                "https://www.investor.gov/financial-tools-calculators/calculators/compound-interest-calculator",
            ),
            Link::CfpbDti => (
                "CFPB · Debt‑to‑income ratio",
                "https://www.consumerfinance.gov/ask-cfpb/what-is-a-debt-to-income-ratio-en-1791/",
            ),
            Link::CfpbCreditScore => (
                "CFPB · Credit scores",
                "https://www.consumerfinance.gov/ask-cfpb/what-is-a-credit-score-en-315/",
            ),
            Link::HealthcareFsa => (
                "Healthcare.gov · FSA overview",
                "https://www.healthcare.gov/have-job-based-coverage/flexible-spending-accounts/",
            ),
            Link::InvestorCd => (
                "Investor.gov · Certificates of Deposit",
                "https://www.investor.gov/introduction-investing/investing-basics/investment-products/certificates-deposit-cds",
            ),
            Link::NaicConsumer => (
                "NAIC · Insurance consumer resources",
                "https://content.naic.org/consumer.htm",
            ),
            Link::UsaInsurance => ("USA.gov · Insurance", "https://www.usa.gov/insurance"),
            Link::StudentAidSave => (
                "StudentAid.gov · SAVE Plan",
                "https://studentaid.gov/announcements-events/save-plan",
            ),
            Link::TreasuryDirectIBond => (
                "TreasuryDirect · Series I Bonds",
                "https://www.treasurydirect.gov/savings-bonds/i-bonds/",
            ),
            Link::FtaStateTax => (
                "State Tax Agencies (FTA directory)",
                "https://www.taxadmin.org/state-tax-agencies",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn urls_are_unique_and_https() {
        let mut seen = HashSet::new();
        for link in Link::ALL {
            assert!(link.url().starts_with("https://"), "{link:?}");
            assert!(seen.insert(link.url()), "duplicate url for {link:?}");
            assert!(!link.title().is_empty());
        }
    }

    #[test]
    fn source_carries_title_and_url() {
        let source = Link::IrsRoth.source();
        assert_eq!(source.title, "IRS · Roth IRA");
        assert_eq!(source.url, "https://www.irs.gov/retirement-plans/roth-iras");
    }
}
