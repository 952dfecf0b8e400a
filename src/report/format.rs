// ABOUTME: Human-readable byte size formatting.
// ABOUTME: Fixed 1024-based units from B to TB, two decimal places.

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count for display.
///
/// `None` means the engine never reported a size and renders as "N/A".
/// Values are divided by 1024 until they fit the unit; anything past TB stays
/// in TB with an unbounded magnitude.
pub fn format_bytes(bytes: Option<u64>) -> String {
    let Some(bytes) = bytes else {
        return "N/A".to_string();
    };
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.2} {}", value, BYTE_UNITS[unit])
}
