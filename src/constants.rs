/// Largest place count with a curated share row.
pub const MAX_CURATED_PLACES: u32 = 8;

/// Upper bound on the place count.
///
/// Larger values are clamped here so an equal split never allocates more
/// than this many shares. The tournament model caps the field at 30.
pub const MAX_PLACE_COUNT: u32 = 1000;

/// Place count used when the field is missing or not a positive integer.
pub const DEFAULT_PLACE_COUNT: u32 = 1;

/// Curated share percentages, indexed by `place_count - 1`.
///
/// Each row sums to exactly 100. This is business policy, not derived.
pub const CURATED_SHARES: [&[f64]; MAX_CURATED_PLACES as usize] = [
    &[100.0],
    &[60.0, 40.0],
    &[50.0, 30.0, 20.0],
    &[40.0, 30.0, 20.0, 10.0],
    &[40.0, 25.0, 15.0, 12.0, 8.0],
    &[35.0, 25.0, 15.0, 12.0, 8.0, 5.0],
    &[35.0, 22.0, 15.0, 11.0, 8.0, 5.0, 4.0],
    &[35.0, 20.0, 13.0, 10.0, 8.0, 6.0, 4.0, 4.0],
];

/// Thousands separator used in displayed amounts (Arabic comma).
pub const GROUP_SEPARATOR: char = '،';

/// Currency label appended to displayed amounts.
pub const CURRENCY_LABEL: &str = "تومان";

/// Medals for the podium ranks 1-3
pub const PODIUM_MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

/// Medal for every rank below the podium
pub const RANK_MEDAL: &str = "🏅";

/// Form field names, as the admin page submits them.
pub const FIELD_ENTRY_FEE: &str = "entry_fee";
pub const FIELD_MAX_PARTICIPANTS: &str = "max_participants";
pub const FIELD_COMMISSION: &str = "platform_commission";
pub const FIELD_PLACE_COUNT: &str = "best_of";
