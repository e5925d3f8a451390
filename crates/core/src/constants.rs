/// Calendar date format used for transaction dates (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Stored value for income transactions
pub const TRANSACTION_KIND_INCOME: &str = "income";

/// Stored value for expense transactions
pub const TRANSACTION_KIND_EXPENSE: &str = "expense";

/// Largest year accepted by monthly reports
pub const MAX_REPORT_YEAR: i32 = 9999;
