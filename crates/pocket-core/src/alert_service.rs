use pocket_domain::LedgerTotals;

pub struct AlertService;

impl AlertService {
    /// Expenses exceed income, and there was some income to exceed.
    ///
    /// A period with no income at all is not flagged.
    pub fn is_overspending(total_income: f64, total_expense: f64) -> bool {
        total_expense > total_income && total_income > 0.0
    }

    pub fn evaluate(totals: &LedgerTotals) -> bool {
        Self::is_overspending(totals.total_income, totals.total_expense)
    }
}
