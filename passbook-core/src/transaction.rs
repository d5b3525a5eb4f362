//! Transaction record types for a parsed bank statement

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::StatementError;

/// One posted statement entry. Built once by the parser and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Posting date
    pub date: NaiveDate,
    /// Free-text description as it appeared on the statement
    pub narration: String,
    /// Money out, never negative
    pub debit_amount: f64,
    /// Money in, never negative
    pub credit_amount: f64,
    /// `credit_amount - debit_amount`
    pub net_amount: f64,
    /// Account balance after this entry posted
    pub closing_balance: f64,
    /// Assigned by the categorizer at parse time
    pub category: Category,
    #[serde(rename = "type")]
    pub kind: TxnKind,
}

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TxnKind {
    #[serde(rename = "debit")]
    Debit,
    #[serde(rename = "credit")]
    Credit,
}

impl TxnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxnKind::Debit => "debit",
            TxnKind::Credit => "credit",
        }
    }
}

impl Transaction {
    /// Create a transaction, deriving `net_amount` and `kind` from the two amount columns.
    pub fn new(
        date: NaiveDate,
        narration: impl Into<String>,
        debit_amount: f64,
        credit_amount: f64,
        closing_balance: f64,
        category: Category,
    ) -> Self {
        let kind = if debit_amount > 0.0 {
            TxnKind::Debit
        } else {
            TxnKind::Credit
        };
        Self {
            date,
            narration: narration.into(),
            debit_amount,
            credit_amount,
            net_amount: credit_amount - debit_amount,
            closing_balance,
            category,
            kind,
        }
    }

    pub fn is_debit(&self) -> bool {
        self.debit_amount > 0.0
    }

    pub fn is_credit(&self) -> bool {
        self.credit_amount > 0.0
    }

    /// Signed amount for display: negative for money out, positive for money in.
    pub fn signed_amount(&self) -> f64 {
        self.net_amount
    }
}

/// Spending categories, one per transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "Stock Investment")]
    StockInvestment,
    #[serde(rename = "Wife Spending")]
    WifeSpending,
    #[serde(rename = "Kotak Money")]
    KotakMoney,
    #[serde(rename = "Car Spending")]
    CarSpending,
    #[serde(rename = "Baby Spending")]
    BabySpending,
    #[serde(rename = "Zomato Food Orders")]
    ZomatoFoodOrders,
    #[serde(rename = "Coffee Spending")]
    CoffeeSpending,
    #[serde(rename = "Petrol")]
    Petrol,
    #[serde(rename = "Jewellers")]
    Jewellers,
    #[serde(rename = "Mutual Fund")]
    MutualFund,
    #[serde(rename = "AI Monthly Purchase")]
    AiMonthlyPurchase,
    #[serde(rename = "Medical Expense")]
    MedicalExpense,
    #[serde(rename = "Broadband Expense")]
    BroadbandExpense,
    #[serde(rename = "DTH & Mobile Expense")]
    DthMobileExpense,
    #[serde(rename = "Toll Expense")]
    TollExpense,
    #[serde(rename = "Apple Expenses")]
    AppleExpenses,
    #[serde(rename = "Term Plan")]
    TermPlan,
    #[serde(rename = "Amazon")]
    Amazon,
    #[serde(rename = "Alice Super Market")]
    AliceSuperMarket,
    #[serde(rename = "Reliance Trends")]
    RelianceTrends,
    #[serde(rename = "ATM Withdrawal")]
    AtmWithdrawal,
    #[serde(rename = "UPI Payments")]
    UpiPayments,
    #[serde(rename = "Others")]
    Others,
}

impl Category {
    pub const ALL: [Category; 23] = [
        Category::StockInvestment,
        Category::WifeSpending,
        Category::KotakMoney,
        Category::CarSpending,
        Category::BabySpending,
        Category::ZomatoFoodOrders,
        Category::CoffeeSpending,
        Category::Petrol,
        Category::Jewellers,
        Category::MutualFund,
        Category::AiMonthlyPurchase,
        Category::MedicalExpense,
        Category::BroadbandExpense,
        Category::DthMobileExpense,
        Category::TollExpense,
        Category::AppleExpenses,
        Category::TermPlan,
        Category::Amazon,
        Category::AliceSuperMarket,
        Category::RelianceTrends,
        Category::AtmWithdrawal,
        Category::UpiPayments,
        Category::Others,
    ];

    /// Human-readable label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Category::StockInvestment => "Stock Investment",
            Category::WifeSpending => "Wife Spending",
            Category::KotakMoney => "Kotak Money",
            Category::CarSpending => "Car Spending",
            Category::BabySpending => "Baby Spending",
            Category::ZomatoFoodOrders => "Zomato Food Orders",
            Category::CoffeeSpending => "Coffee Spending",
            Category::Petrol => "Petrol",
            Category::Jewellers => "Jewellers",
            Category::MutualFund => "Mutual Fund",
            Category::AiMonthlyPurchase => "AI Monthly Purchase",
            Category::MedicalExpense => "Medical Expense",
            Category::BroadbandExpense => "Broadband Expense",
            Category::DthMobileExpense => "DTH & Mobile Expense",
            Category::TollExpense => "Toll Expense",
            Category::AppleExpenses => "Apple Expenses",
            Category::TermPlan => "Term Plan",
            Category::Amazon => "Amazon",
            Category::AliceSuperMarket => "Alice Super Market",
            Category::RelianceTrends => "Reliance Trends",
            Category::AtmWithdrawal => "ATM Withdrawal",
            Category::UpiPayments => "UPI Payments",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Category {
    type Err = StatementError;

    /// Exact label match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| StatementError::UnknownCategory(s.to_string()))
    }
}
