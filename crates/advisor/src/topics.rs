//! The ordered topic table.
//!
//! Each topic pairs a trigger pattern over the normalized question with a
//! reply generator. Order is priority: the dispatcher stops at the first
//! topic whose trigger matches, so more specific topics that must win over a
//! broader one have to sit above it.

use std::sync::LazyLock;

use regex_lite::Regex;
use wise_core::{Reply, UserProfile};

use crate::catalog::Link;
use crate::context::AdviceContext;

type ReplyFn = fn(&AdviceContext) -> Reply;

/// A named rule: trigger pattern plus canned, possibly personalized reply.
pub struct Topic {
    id: &'static str,
    trigger: Regex,
    reply: ReplyFn,
}

impl Topic {
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// The trigger pattern source.
    pub fn pattern(&self) -> &str {
        self.trigger.as_str()
    }

    /// Test the trigger against an already-normalized question.
    pub fn matches(&self, normalized: &str) -> bool {
        self.trigger.is_match(normalized)
    }

    /// Generate this topic's reply directly, bypassing dispatch.
    pub fn reply(&self, question: &str, profile: Option<&UserProfile>) -> Reply {
        self.reply_with(&AdviceContext::new(question, profile))
    }

    pub(crate) fn reply_with(&self, ctx: &AdviceContext) -> Reply {
        (self.reply)(ctx)
    }
}

impl std::fmt::Debug for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Topic")
            .field("id", &self.id)
            .field("trigger", &self.trigger.as_str())
            .finish()
    }
}

/// (id, trigger, reply) in priority order.
const TOPIC_TABLE: &[(&str, &str, ReplyFn)] = &[
    (
        "taxes",
        r"tax|irs|withhold|refund|w-4|deduct|credit|filing",
        taxes,
    ),
    (
        "budget_saving",
        r"save|savings|budget|spend|50/?30/?20|emergency|emergency fund",
        budget_saving,
    ),
    (
        "investing",
        r"invest|broker|portfolio|etf|index|stocks|bonds|diversif|rebalanc",
        investing,
    ),
    (
        "credit_debt",
        r"credit|loan|debt|score|report|utilization|collections",
        credit_debt,
    ),
    ("roth", r"roth ?ira|roth", roth),
    (
        "401k",
        r"401k|401\(k\)|employer match|retirement plan",
        retirement_401k,
    ),
    ("hsa", r"hsa|health savings account", hsa),
    (
        "student_loans",
        r"student loan|repay|ib|income[- ]?based|save plan",
        student_loans,
    ),
    (
        "mortgage",
        r"mortgage|house|home loan|down payment",
        mortgage,
    ),
    ("college_529", r"529|college savings", college_529),
    // Bare "apr" is left to the glossary.
    (
        "apr_apy",
        r"apy|difference between apr|interest rate.*(simple|compound)|compound interest",
        apr_apy,
    ),
    (
        "cd_vs_savings",
        r"cd|certificate of deposit|money market|high[- ]yield savings",
        cd_vs_savings,
    ),
    ("fsa_vs_hsa", r"fsa|flexible spending|hsa vs fsa", fsa_vs_hsa),
    (
        "credit_score_ranges",
        r"credit score range|what is a good credit score|fico range",
        credit_score_ranges,
    ),
    ("dti", r"dti|debt[- ]to[- ]income|debt to income", dti),
    ("rent_vs_buy", r"rent vs buy|rent or buy", rent_vs_buy),
    (
        "retirement_savings_rate",
        r"how much.*retire|how much should i save.*retirement|retirement savings rate",
        retirement_savings_rate,
    ),
    (
        "insurance_general",
        r"insurance|policy|premium|deductible|coverage|liability",
        insurance_general,
    ),
    (
        "life_insurance",
        r"life insurance|term life|whole life|permanent life",
        life_insurance,
    ),
    (
        "auto_renters_home",
        r"auto insurance|car insurance|renters insurance|homeowners insurance|home insurance",
        auto_renters_home,
    ),
    (
        "budgeting_tools",
        r"zero[- ]based|envelope budget|budget app|spreadsheet budget|mint|ynab|everydollar",
        budgeting_tools,
    ),
    (
        "student_loans_save",
        r"save plan|idr save|income[- ]driven save|income driven save",
        student_loans_save,
    ),
    (
        "i_bonds",
        r"i[- ]?bond|series i bond|ibond|inflation bond|treasurydirect",
        i_bonds,
    ),
    (
        "state_taxes",
        r"state tax|state income tax|california tax|new york tax|ny tax|ca tax|nj tax|tx tax|fl tax",
        state_taxes,
    ),
];

static TOPICS: LazyLock<Vec<Topic>> = LazyLock::new(|| {
    TOPIC_TABLE
        .iter()
        .map(|&(id, pattern, reply)| Topic {
            id,
            trigger: Regex::new(pattern).expect("topic trigger patterns are static and valid"),
            reply,
        })
        .collect()
});

/// All topics in priority order.
pub fn topics() -> &'static [Topic] {
    &TOPICS
}

/// Look up a topic by id.
pub fn topic(id: &str) -> Option<&'static Topic> {
    topics().iter().find(|t| t.id == id)
}

// ── Reply generators ────────────────────────────────────────────────────

fn taxes(ctx: &AdviceContext) -> Reply {
    const BODY: &str = concat!(
        "For taxes, start with the basics and build good habits:\n\n",
        "• Withholding: Use the IRS estimator to dial in W‑4 so you avoid big refunds or balances due. Review after major life changes (raise, marriage, side‑income).\n",
        "• Filing status & credits: Your status (single/married/head of household) drives brackets and credits. Know eligibility for EITC, education credits, child credit, and savers credit.\n",
        "• Deductions: If you don’t itemize, make sure you capture above‑the‑line deductions you qualify for (HSA, IRA contributions, student‑loan interest where applicable).\n",
        "• Documentation: Keep W‑2s, 1099s, receipts, donation letters, medical, and education forms organized all year to prevent last‑minute scrambling.\n",
        "• Tools: File electronically with reputable software or use a qualified preparer when your situation gets complex (business, rental, multi‑state).\n",
    );
    Reply::new(format!("{BODY}{}", ctx.profile_note()))
        .cite(Link::IrsTax.source())
        .cite(Link::IrsWithholding.source())
}

fn budget_saving(ctx: &AdviceContext) -> Reply {
    const NEEDS: u8 = 50;
    const WANTS: u8 = 30;
    const SAVE: u8 = 20;
    const BODY: &str = concat!(
        "• Build your emergency fund first (3–6 months of essential expenses). Keep it in a high‑yield savings for safety and liquidity.\n",
        "• Automate: schedule transfers on payday so saving happens before spending. Small, consistent transfers beat sporadic big ones.\n",
        "• Track: review 2–3 big categories (housing, food, transportation) for quick wins; cancel unused subscriptions and renegotiate recurring bills.\n",
        "• Adjust: if income varies, use a base budget for essentials and a percentage‑based plan for extras.\n",
    );
    let target = ctx
        .emergency_target_display()
        .map(|t| format!(" Your 3‑month emergency target is about ${t}."))
        .unwrap_or_default();

    Reply::new(format!(
        "A practical starting plan is the 50/30/20 method: about {NEEDS}% needs, {WANTS}% wants, and {SAVE}% to savings/debt.\n\n{BODY}{target}{}",
        ctx.profile_note()
    ))
    .cite(Link::CfpbBudget.source())
    .cite(Link::Cfpb503020.source())
    .cite(Link::InvestopediaEmergency.source())
}

fn investing(ctx: &AdviceContext) -> Reply {
    const BODY: &str = concat!(
        "For long‑term growth, keep investing simple and repeatable:\n\n",
        "• Use broad, low‑cost index funds/ETFs for diversification; avoid chasing hot picks.\n",
        "• Match risk to time horizon: more stocks for long‑term goals, more bonds/cash for near‑term needs.\n",
        "• Keep fees tiny (expense ratios matter); minimize trading and taxes.\n",
        "• Contribute on a schedule (e.g., monthly dollar‑cost averaging) and rebalance once or twice a year.\n",
        "• Prioritize tax‑advantaged accounts first (401(k)/IRA/HSA when eligible).\n",
    );
    // Four candidates; the citation cap keeps the first three.
    Reply::new(format!("{BODY}{}", ctx.profile_note()))
        .cite(Link::InvestorBasics.source())
        .cite(Link::InvestorFees.source())
        .cite(Link::InvestorEtf.source())
        .cite(Link::InvestorMutual.source())
}

fn credit_debt(ctx: &AdviceContext) -> Reply {
    const BODY: &str = concat!(
        "Healthy credit and debt payoff come from a few high‑impact moves:\n\n",
        "• Payment history matters most—pay on time, every time (use autopay/reminders).\n",
        "• Keep utilization low (<30% of limits; <10% is even better). Request limit increases without increasing balances.\n",
        "• For payoff, pick a method you’ll finish: Snowball (quick wins) or Avalanche (lowest interest cost).\n",
        "• Pull your credit reports and dispute errors; avoid unnecessary hard inquiries.\n",
        "• If overwhelmed, consider nonprofit credit counseling.\n",
    );
    Reply::new(format!("{BODY}{}", ctx.profile_note()))
        .cite(Link::UsaGovCredit.source())
        .cite(Link::CfpbBudget.source())
}

fn roth(_ctx: &AdviceContext) -> Reply {
    Reply::new(concat!(
        "A Roth IRA uses after‑tax contributions and offers tax‑free qualified withdrawals in retirement:\n\n",
        "• Good fit if you expect higher future tax rates or value tax‑free income later.\n",
        "• Check current‑year income and contribution limits; consider backdoor Roth strategies only if you understand the tax rules.\n",
        "• Invest inside the Roth with diversified, low‑cost index funds or target‑date funds; the Roth is the account, not the investment.\n",
    ))
    .cite(Link::IrsRoth.source())
}

fn retirement_401k(_ctx: &AdviceContext) -> Reply {
    Reply::new(concat!(
        "A 401(k) is a powerful retirement tool sponsored by your employer:\n\n",
        "• Contribute at least enough to capture the full employer match—this is a guaranteed return.\n",
        "• Work toward 10–15% of income between you and your employer over time.\n",
        "• Investment options: a target‑date fund for simplicity, or a mix of broad US/international stock and bond index funds.\n",
        "• Revisit contributions after raises and review beneficiaries annually.\n",
    ))
    .cite(Link::Irs401k.source())
}

fn hsa(_ctx: &AdviceContext) -> Reply {
    Reply::new(concat!(
        "An HSA (available with a qualifying high‑deductible health plan) offers rare triple tax benefits:\n\n",
        "• Contributions reduce taxable income; growth is tax‑free; qualified medical withdrawals are tax‑free.\n",
        "• Great for long‑term medical savings: invest HSA funds once your emergency fund is set.\n",
        "• Keep receipts for later reimbursement; after age 65, non‑medical withdrawals are taxed like a traditional IRA.\n",
    ))
    .cite(Link::HealthcareHsa.source())
}

fn student_loans(_ctx: &AdviceContext) -> Reply {
    Reply::new(concat!(
        "For federal student loans, compare income‑driven repayment (IDR) vs standard plans:\n\n",
        "• IDR ties payments to your income/family size and may offer forgiveness after a set period. Recertify annually and track qualifying months.\n",
        "• If paying aggressively, target extra payments to the highest‑rate loans first after making minimums on all.\n",
        "• Keep documentation of employment/service if you pursue PSLF.\n",
    ))
    .cite(Link::StudentAid.source())
}

fn mortgage(_ctx: &AdviceContext) -> Reply {
    Reply::new(concat!(
        "Before taking a mortgage, reality‑check affordability and risk:\n\n",
        "• 28/36 rule: housing ≤ ~28% of gross income; total debt ≤ ~36% (lenders may allow higher but risk rises).\n",
        "• Save for down payment, closing costs, and a move‑in buffer; keep an emergency fund intact.\n",
        "• Compare fixed‑rate terms and total cost of ownership (taxes, insurance, HOA, maintenance ~1–2% home value/yr).\n",
    ))
    .cite(Link::UsaGovMortgage.source())
}

fn college_529(_ctx: &AdviceContext) -> Reply {
    Reply::new(concat!(
        "529 plans are tax‑advantaged accounts for qualified education expenses:\n\n",
        "• Growth and withdrawals for qualified uses are generally tax‑free.\n",
        "• Many states offer tax deductions/credits for contributions—check your state plan.\n",
        "• Choose age‑based or low‑cost index portfolios; keep fees low to maximize growth.\n",
    ))
    .cite(Link::Sec529.source())
}

fn apr_apy(_ctx: &AdviceContext) -> Reply {
    Reply::new(concat!(
        "APR is the yearly borrowing rate without compounding; APY includes compounding and is best for comparing savings yields.\n\n",
        "• For loans, compare APR across lenders; for savings, compare APY.\n",
        "• Compound interest grows on both principal and previously earned interest—growth accelerates with time and higher APY.\n",
        "• Keep emergency funds in a high‑yield account; invest longer‑term money for higher expected returns with appropriate risk.\n",
    ))
    .cite(Link::FinraAprApy.source())
    .cite(Link::InvestorCompound.source())
}

fn cd_vs_savings(_ctx: &AdviceContext) -> Reply {
    Reply::new(concat!(
        "Savings/MMAs are liquid and flexible but rates can change; CDs offer higher fixed rates in exchange for locking funds.\n\n",
        "• Use savings for emergency funds and short‑term needs; consider CDs for time‑bound goals you won’t touch.\n",
        "• Check early‑withdrawal penalties before buying CDs and ensure bank/credit union insurance (FDIC/NCUA).\n",
    ))
    .cite(Link::InvestorCd.source())
    .cite(Link::Fdic.source())
}

fn fsa_vs_hsa(_ctx: &AdviceContext) -> Reply {
    Reply::new(concat!(
        "HSA (with a qualifying HDHP) offers triple tax benefits and rolls over indefinitely; FSAs are generally use‑it‑or‑lose‑it by plan year (some allow small carryovers).\n\n",
        "• Max an HSA if eligible; invest once your cash cushion is set. Use FSAs for predictable expenses like prescriptions or childcare (DCFSA).\n",
    ))
    .cite(Link::HealthcareFsa.source())
    .cite(Link::HealthcareHsa.source())
}

fn credit_score_ranges(_ctx: &AdviceContext) -> Reply {
    Reply::new(concat!(
        "Typical FICO ranges: Poor <580, Fair 580–669, Good 670–739, Very Good 740–799, Exceptional 800+.\n\n",
        "• Improve by paying on time, lowering utilization (<30%, ideally <10%), keeping older accounts open, and limiting hard inquiries.\n",
        "• Diversify with a mix of installment and revolving credit only as needed—don’t open accounts just for the mix.\n",
    ))
    .cite(Link::CfpbCreditScore.source())
}

fn dti(_ctx: &AdviceContext) -> Reply {
    Reply::new(concat!(
        "Debt‑to‑Income (DTI) = monthly debt payments ÷ gross monthly income.\n\n",
        "• Many lenders prefer DTI ≤ ~36%; mortgages sometimes allow higher with strong compensating factors.\n",
        "• Lower DTI by paying down revolving balances, avoiding new debt, and increasing income.\n",
    ))
    .cite(Link::CfpbDti.source())
}

fn rent_vs_buy(_ctx: &AdviceContext) -> Reply {
    Reply::new(concat!(
        "Rent vs buy depends on time horizon, local markets, and total costs:\n\n",
        "• Buying often favors horizons ≥5–7 years; otherwise, closing costs and market swings can overwhelm.\n",
        "• Compare all‑in costs: property taxes, insurance, HOA, upkeep (~1–2% value/yr), and opportunity cost of down payment.\n",
        "• Maintain emergency reserves regardless of choice.\n",
    ))
    .cite(Link::UsaGovMortgage.source())
}

fn retirement_savings_rate(_ctx: &AdviceContext) -> Reply {
    Reply::new(concat!(
        "A common rule of thumb is saving ~15% of gross income toward retirement (including employer match).\n\n",
        "• If 15% is too high now, start smaller and step up 1–2% after each raise.\n",
        "• Maximize employer match, then use IRAs/HSA (if eligible), then taxable investing.\n",
        "• Use age‑appropriate stock/bond mixes or a target‑date fund; revisit annually.\n",
    ))
    .cite(Link::InvestorBasics.source())
}

fn insurance_general(_ctx: &AdviceContext) -> Reply {
    Reply::new(concat!(
        "Insurance transfers financial risk from you to the insurer. Key concepts:\n\n",
        "• Premium: what you pay; Deductible: what you pay before the insurer; Limits: max insurer payout.\n",
        "• Insure catastrophic risks first (health, disability, life if dependents). Keep adequate liability limits on auto/home policies.\n",
        "• Consider higher deductibles to reduce premiums—but only if you have cash reserves.\n",
    ))
    .cite(Link::NaicConsumer.source())
    .cite(Link::UsaInsurance.source())
}

fn life_insurance(_ctx: &AdviceContext) -> Reply {
    Reply::new(concat!(
        "Term life is typically the most cost‑effective way to protect dependents:\n\n",
        "• Pick a term that covers your highest‑need years (e.g., until mortgage payoff or kids are independent).\n",
        "• Coverage amount often targets income replacement + debts + education needs.\n",
        "• Permanent/whole life includes a cash‑value component but is costlier and complex—many households start with term.\n",
    ))
    .cite(Link::NaicConsumer.source())
}

fn auto_renters_home(_ctx: &AdviceContext) -> Reply {
    Reply::new(concat!(
        "Protect your vehicle and home wisely:\n\n",
        "• Auto: meet state minimums but consider higher liability; add comprehensive/collision based on car value and risk tolerance.\n",
        "• Renters/Home: covers belongings and liability (home adds structure). Choose deductibles you can handle and inventory major items.\n",
        "• Bundle policies, shop periodically, and ask about discounts to manage costs.\n",
    ))
    .cite(Link::NaicConsumer.source())
    .cite(Link::Fdic.source())
}

fn budgeting_tools(_ctx: &AdviceContext) -> Reply {
    Reply::new(concat!(
        "Pick a budgeting style you’ll actually maintain:\n\n",
        "• Zero‑based: give every dollar a job; great for control.\n",
        "• Envelopes: set category caps and stick to them (cash or digital envelopes).\n",
        "• 50/30/20: quick, low‑maintenance split for beginners.\n",
        "• Tools: spreadsheets, bank category tracking, or apps (YNAB/EveryDollar). Automate bills and saving to reduce friction.\n",
    ))
    .cite(Link::CfpbBudget.source())
}

fn student_loans_save(_ctx: &AdviceContext) -> Reply {
    Reply::new(concat!(
        "The SAVE plan is an income‑driven repayment (IDR) option for federal loans:\n\n",
        "• Payments are tied to income and family size; interest subsidies can prevent balances from growing.\n",
        "• Forgiveness may be available after a set period of qualifying payments; recertify annually.\n",
        "• Consider SAVE if cash flow is tight, or standard/accelerated payoff if you can eliminate loans quickly.\n",
    ))
    .cite(Link::StudentAidSave.source())
}

fn i_bonds(_ctx: &AdviceContext) -> Reply {
    Reply::new(concat!(
        "Series I Bonds protect savings from inflation:\n\n",
        "• Rate = fixed component + inflation component (resets twice yearly). Great for long‑term, inflation‑linked savings.\n",
        "• Hold at least 12 months; redeeming before 5 years forfeits 3 months of interest.\n",
        "• Annual electronic purchase limit is typically $10k per person (+$5k paper via tax refund).\n",
    ))
    .cite(Link::TreasuryDirectIBond.source())
}

fn state_taxes(_ctx: &AdviceContext) -> Reply {
    Reply::new(concat!(
        "State taxes depend on your residency, local rules, and credits:\n\n",
        "• Check your state revenue site for current brackets, credits, and filing requirements (especially if you moved states).\n",
        "• Some states have no income tax but higher sales/property taxes; consider the full picture.\n",
        "• Remote/hybrid work can create multi‑state issues—confirm where income is sourced and taxed.\n",
    ))
    .cite(Link::FtaStateTax.source())
    .cite(Link::IrsTax.source())
}
