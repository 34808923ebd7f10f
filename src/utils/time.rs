//! Conversión de timestamps para presentación
//!
//! Los timestamps se almacenan siempre en UTC; la interfaz los muestra
//! en hora estándar de India (UTC+5:30).

use chrono::{DateTime, FixedOffset, Utc};

/// Offset fijo de la zona de presentación (UTC+5:30)
fn ist_offset() -> FixedOffset {
    FixedOffset::east_opt(5 * 3600 + 30 * 60).expect("IST offset is in range")
}

/// Formatear un instante UTC como texto de presentación en IST,
/// por ejemplo "01 Jan 2024, 03:30 PM IST"
pub fn to_ist_display(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&ist_offset())
        .format("%d %b %Y, %I:%M %p IST")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_display_shifts_by_five_thirty() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        assert_eq!(to_ist_display(instant), "01 Jan 2024, 03:30 PM IST");
    }

    #[test]
    fn test_display_crosses_midnight() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 20, 0, 0).unwrap();
        assert_eq!(to_ist_display(instant), "02 Jan 2024, 01:30 AM IST");
    }
}
