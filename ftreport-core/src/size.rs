/// Unit suffixes for decimal (power of 1000) scaling
const SUFFIXES: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format bytes into a human-readable string such as `999B` or `1.50KB`.
///
/// Scaling divides by 1000 while the value is at least 1000. Scaled values
/// carry exactly two decimals, truncated, so a value never shows the next
/// unit's magnitude (`999999` is `999.99KB`, not `1000.00KB`).
pub fn format_size(bytes: u64) -> String {
    let mut divisor: u128 = 1;
    let mut suffix = 0;

    while suffix + 1 < SUFFIXES.len() && u128::from(bytes) >= divisor * 1000 {
        divisor *= 1000;
        suffix += 1;
    }

    if suffix == 0 {
        return format!("{}{}", bytes, SUFFIXES[0]);
    }

    let hundredths = u128::from(bytes) * 100 / divisor;
    format!(
        "{}.{:02}{}",
        hundredths / 100,
        hundredths % 100,
        SUFFIXES[suffix]
    )
}
