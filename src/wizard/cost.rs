//! Cálculo del costo de la reserva
//!
//! El costo se cobra por hora completa: cualquier fracción de hora se
//! redondea hacia arriba.

use chrono::{DateTime, Utc};

/// Tarifa fija por hora, en unidades de moneda
pub const HOURLY_RATE: i64 = 50;

/// Costo de estacionar entre `entry_time` y `exit_time`.
///
/// Una ventana vacía o invertida cuesta 0; las guardas del asistente no
/// dejan llegar aquí con una salida anterior a la entrada.
pub fn booking_cost(entry_time: DateTime<Utc>, exit_time: DateTime<Utc>) -> i64 {
    let seconds = (exit_time - entry_time).num_seconds();
    if seconds <= 0 {
        return 0;
    }
    let hours = (seconds + 3599) / 3600;
    hours * HOURLY_RATE
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, h, m, 0).unwrap()
    }

    #[test]
    fn test_one_minute_costs_a_full_hour() {
        assert_eq!(booking_cost(utc(10, 0), utc(10, 1)), 50);
    }

    #[test]
    fn test_whole_hours() {
        assert_eq!(booking_cost(utc(10, 0), utc(12, 0)), 100);
    }

    #[test]
    fn test_fraction_rounds_up() {
        // 3.5 horas se cobran como 4
        assert_eq!(booking_cost(utc(10, 0), utc(13, 30)), 200);
    }

    #[test]
    fn test_cost_is_monotone_in_duration() {
        let entry = utc(8, 0);
        let mut previous = 0;
        for minutes in (30..=600).step_by(30) {
            let exit = entry + chrono::Duration::minutes(minutes);
            let cost = booking_cost(entry, exit);
            assert!(cost >= previous, "cost decreased at {} minutes", minutes);
            previous = cost;
        }
    }

    #[test]
    fn test_inverted_window_costs_nothing() {
        assert_eq!(booking_cost(utc(12, 0), utc(10, 0)), 0);
        assert_eq!(booking_cost(utc(10, 0), utc(10, 0)), 0);
    }
}
