/// Decimal precision for stored and displayed money amounts
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Smallest accepted expense amount
pub const MIN_EXPENSE_AMOUNT: &str = "0.01";

/// Largest accepted expense amount
pub const MAX_EXPENSE_AMOUNT: &str = "1000000000.00";

/// Role assigned to every newly registered user
pub const DEFAULT_USER_ROLE: &str = "USER";

/// Category name used when an expense points at a category that no longer exists
pub const UNKNOWN_CATEGORY_NAME: &str = "Unknown";

/// Global categories seeded at startup, shared by every user
pub const DEFAULT_CATEGORY_NAMES: [&str; 8] = [
    "Food",
    "Transportation",
    "Utilities",
    "Entertainment",
    "Healthcare",
    "Education",
    "Shopping",
    "Travel",
];

/// Lookback windows used by analytics
pub const MONTHLY_SUMMARY_MONTHS: u32 = 12;
pub const YEARLY_SUMMARY_YEARS: i32 = 5;
pub const RECENT_WINDOW_MONTHS: u32 = 6;

/// Date format used in reports and on the wire
pub const DATE_FORMAT: &str = "%Y-%m-%d";
