//! Plain-data view handed to a renderer: entry rows, totals, alert flag,
//! display strings (masked when the balance is hidden) and chart series.

use pocket_domain::{EntryDate, Ledger, LedgerTotals, MonthKey, Transaction, TransactionKind};
use serde::Serialize;

use crate::{
    aggregate_service::AggregateService,
    alert_service::AlertService,
    filter_service::FilterService,
    format::{CurrencyFormatter, MASKED_AMOUNT},
};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EntryRow {
    pub id: i64,
    pub text: String,
    pub category: Option<String>,
    pub kind: TransactionKind,
    pub magnitude: f64,
    pub date: EntryDate,
}

impl From<&Transaction> for EntryRow {
    fn from(txn: &Transaction) -> Self {
        let category = (txn.is_expense() && !txn.category.is_empty()).then(|| txn.category.clone());
        Self {
            id: txn.id,
            text: txn.text.clone(),
            category,
            kind: txn.kind(),
            magnitude: txn.magnitude(),
            date: txn.date.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BalanceDisplay {
    pub balance: String,
    pub income: String,
    pub expense: String,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Dashboard {
    pub month: Option<MonthKey>,
    pub rows: Vec<EntryRow>,
    pub totals: LedgerTotals,
    pub overspending: bool,
    pub hide_balance: bool,
    pub display: BalanceDisplay,
    /// Expense per category.
    pub category_chart: ChartSeries,
    /// Income against expense.
    pub flow_chart: ChartSeries,
}

pub struct DashboardService;

impl DashboardService {
    pub fn build(
        ledger: &Ledger,
        month: Option<&MonthKey>,
        hide_balance: bool,
        formatter: &dyn CurrencyFormatter,
    ) -> Dashboard {
        let selected = FilterService::select_month(ledger, month);
        let rows = selected.iter().map(|txn| EntryRow::from(*txn)).collect();
        let totals = AggregateService::aggregate(selected);
        let overspending = AlertService::evaluate(&totals);
        let display = Self::balance_display(&totals, hide_balance, formatter);
        let category_chart = ChartSeries {
            labels: totals
                .category_totals
                .iter()
                .map(|entry| entry.name.clone())
                .collect(),
            values: totals
                .category_totals
                .iter()
                .map(|entry| entry.amount)
                .collect(),
        };
        let flow_chart = ChartSeries {
            labels: vec![
                TransactionKind::Income.to_string(),
                TransactionKind::Expense.to_string(),
            ],
            values: vec![totals.total_income, totals.total_expense],
        };

        Dashboard {
            month: month.cloned(),
            rows,
            totals,
            overspending,
            hide_balance,
            display,
            category_chart,
            flow_chart,
        }
    }

    pub fn balance_display(
        totals: &LedgerTotals,
        hide_balance: bool,
        formatter: &dyn CurrencyFormatter,
    ) -> BalanceDisplay {
        let show = |amount: f64| {
            if hide_balance {
                MASKED_AMOUNT.to_string()
            } else {
                formatter.format_amount(amount)
            }
        };
        BalanceDisplay {
            balance: show(totals.balance),
            income: show(totals.total_income),
            expense: show(totals.total_expense),
        }
    }
}
