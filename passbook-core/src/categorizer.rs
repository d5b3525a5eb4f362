//! Narration-based categorization.
//!
//! Rules are evaluated top to bottom and the first match wins, so specific
//! merchants must stay above generic keywords like "upi".

use crate::transaction::Category;

/// One row of the rule table: matches when the lowercased narration contains any
/// of `any_of` and none of `none_of`.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub any_of: &'static [&'static str],
    pub none_of: &'static [&'static str],
    pub category: Category,
}

impl Rule {
    const fn new(any_of: &'static [&'static str], category: Category) -> Self {
        Self {
            any_of,
            none_of: &[],
            category,
        }
    }

    const fn excluding(mut self, none_of: &'static [&'static str]) -> Self {
        self.none_of = none_of;
        self
    }

    /// `narration` must already be lowercase.
    pub fn matches(&self, narration: &str) -> bool {
        self.any_of.iter().any(|k| narration.contains(k))
            && !self.none_of.iter().any(|k| narration.contains(k))
    }
}

/// Ordered rule table.
pub const RULES: &[Rule] = &[
    Rule::new(&["zerodha"], Category::StockInvestment),
    Rule::new(&["leelavathi"], Category::WifeSpending),
    Rule::new(&["kotak securities"], Category::KotakMoney),
    Rule::new(&["autorelli"], Category::CarSpending),
    Rule::new(&["babyhug"], Category::BabySpending),
    Rule::new(&["zomato"], Category::ZomatoFoodOrders),
    Rule::new(&["sudha coffee"], Category::CoffeeSpending),
    Rule::new(&["fuel"], Category::Petrol),
    Rule::new(&["jewellers", "thangamaliga"], Category::Jewellers),
    Rule::new(
        &["indian clearing corp", "pgim", "india corp clearing"],
        Category::MutualFund,
    ),
    Rule::new(&["openai", "claude"], Category::AiMonthlyPurchase),
    Rule::new(&["apollo"], Category::MedicalExpense),
    Rule::new(&["bsnl", "bharat sanchar nigam"], Category::BroadbandExpense),
    Rule::new(&["airtel"], Category::DthMobileExpense),
    Rule::new(&["fasttag"], Category::TollExpense),
    Rule::new(&["appleservices"], Category::AppleExpenses),
    Rule::new(&["hlic"], Category::TermPlan),
    Rule::new(&["amazon"], Category::Amazon),
    Rule::new(&["alice"], Category::AliceSuperMarket),
    Rule::new(&["trends"], Category::RelianceTrends),
    // ATM withdrawals
    Rule::new(&["nwd", "atw", "eaw", "nfs", "awb"], Category::AtmWithdrawal),
    // substring match, so keep provider names containing "ats" out
    Rule::new(&["ats"], Category::AtmWithdrawal).excluding(&["bharat", "sanchar"]),
    Rule::new(&["upi"], Category::UpiPayments),
];

/// Categorize a narration. Empty narrations and unmatched text fall back to `Others`.
pub fn categorize(narration: &str) -> Category {
    if narration.is_empty() {
        return Category::Others;
    }
    let desc = narration.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&desc))
        .map(|rule| rule.category)
        .unwrap_or(Category::Others)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_zomato() {
        assert_eq!(categorize("ZOMATO ORDER 123"), Category::ZomatoFoodOrders);
    }

    #[test]
    fn test_broadband_beats_ats_guard() {
        assert_eq!(
            categorize("NEFT BHARAT SANCHAR NIGAM LTD PAYMENT"),
            Category::BroadbandExpense
        );
        assert_eq!(
            categorize("PAYMENT ATS BHARAT SANCHAR NIGAM"),
            Category::BroadbandExpense
        );
        assert_ne!(categorize("PAYMENT ATS BHARAT SANCHAR"), Category::AtmWithdrawal);
    }

    #[test]
    fn test_ats_guard_without_broadband_rule() {
        // "bharat" alone does not hit the broadband rule, but still blocks the ATS rule
        assert_eq!(categorize("ATS BHARAT PETROLEUM UPI"), Category::UpiPayments);
        assert_eq!(categorize("ATS/0042 MG ROAD"), Category::AtmWithdrawal);
    }

    #[test]
    fn test_atm_codes() {
        assert_eq!(categorize("NWD-512345-ATM MG ROAD"), Category::AtmWithdrawal);
        assert_eq!(categorize("EAW-4321 CASH"), Category::AtmWithdrawal);
    }

    #[test]
    fn test_first_match_wins() {
        // zerodha sits above upi
        assert_eq!(categorize("UPI-ZERODHA BROKING-zerodha@hdfc"), Category::StockInvestment);
        // openai sits above upi and amazon
        assert_eq!(categorize("UPI OPENAI AMAZON PAY"), Category::AiMonthlyPurchase);
    }

    #[test]
    fn test_multi_keyword_rules() {
        assert_eq!(categorize("POS THANGAMALIGA CHENNAI"), Category::Jewellers);
        assert_eq!(categorize("ACH D- INDIAN CLEARING CORP-XYZ"), Category::MutualFund);
        assert_eq!(categorize("CLAUDE.AI SUBSCRIPTION"), Category::AiMonthlyPurchase);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(categorize("Sudha Coffee Works"), Category::CoffeeSpending);
        assert_eq!(categorize("indian oil FUEL station"), Category::Petrol);
    }

    #[test]
    fn test_fallback_to_others() {
        assert_eq!(categorize(""), Category::Others);
        assert_eq!(categorize("NEFT CR SALARY ACME"), Category::Others);
    }

    #[test]
    fn test_rule_table_order_is_stable() {
        assert_eq!(RULES.first().map(|r| r.category), Some(Category::StockInvestment));
        assert_eq!(RULES.last().map(|r| r.category), Some(Category::UpiPayments));
        let ats = RULES.iter().position(|r| r.any_of == ["ats"]).unwrap();
        let broadband = RULES
            .iter()
            .position(|r| r.category == Category::BroadbandExpense)
            .unwrap();
        assert!(broadband < ats);
    }
}
