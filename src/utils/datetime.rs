use chrono::{Datelike, Local, Timelike};

/// Today's date in the Jalali (Solar Hijri) calendar, formatted `YYYY-MM-DD`.
/// The source site publishes quotes against this calendar.
pub fn jalali_today() -> String {
    let now = Local::now();
    let (jy, jm, jd) = gregorian_to_jalali(now.year(), now.month(), now.day());
    format!("{:04}-{:02}-{:02}", jy, jm, jd)
}

/// Current local time as `HH:MM:SS` (24-hour).
pub fn current_time() -> String {
    let now = Local::now();
    format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second())
}

/// Arithmetic Gregorian to Jalali conversion (33-year cycle).
pub fn gregorian_to_jalali(gy: i32, gm: u32, gd: u32) -> (i32, u32, u32) {
    const G_DAYS_IN_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

    let gy = gy as i64;
    let gy2 = if gm > 2 { gy + 1 } else { gy };
    let mut days = 355_666 + 365 * gy + (gy2 + 3) / 4 - (gy2 + 99) / 100 + (gy2 + 399) / 400
        + gd as i64
        + G_DAYS_IN_MONTH[(gm - 1) as usize];

    let mut jy = -1595 + 33 * (days / 12053);
    days %= 12053;
    jy += 4 * (days / 1461);
    days %= 1461;
    if days > 365 {
        jy += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    let (jm, jd) = if days < 186 {
        (1 + days / 31, 1 + days % 31)
    } else {
        (7 + (days - 186) / 30, 1 + (days - 186) % 30)
    };

    (jy as i32, jm as u32, jd as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nowruz_anchors() {
        assert_eq!(gregorian_to_jalali(2024, 3, 20), (1403, 1, 1));
        assert_eq!(gregorian_to_jalali(2023, 3, 21), (1402, 1, 1));
    }

    #[test]
    fn test_known_dates() {
        assert_eq!(gregorian_to_jalali(1979, 2, 11), (1357, 11, 22));
        assert_eq!(gregorian_to_jalali(2024, 3, 19), (1402, 12, 29));
    }

    #[test]
    fn test_formatting() {
        let date = jalali_today();
        assert_eq!(date.len(), 10);
        assert_eq!(date.matches('-').count(), 2);

        let time = current_time();
        assert_eq!(time.len(), 8);
        assert_eq!(time.matches(':').count(), 2);
    }
}
