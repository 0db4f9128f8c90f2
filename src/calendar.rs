//! Serial day number (Julian day number) arithmetic for the Hebrew and
//! proleptic Gregorian calendars.
//!
//! The Hebrew side follows the fixed calendar: molad times counted in parts
//! (1/1080 hour), a 19-year cycle of 12- and 13-month years, and the four
//! postponement rules that decide the weekday of 1 Tishrei.
//!
//! Conversions into a day number return `None` for input the algorithm has no
//! answer for (month 0, day 0, years before the epoch and so on).

use crate::consts::{
    AM3_11_20, AM9_32_43, DAYS_PER_4_YEARS, DAYS_PER_400_YEARS, DAYS_PER_5_MONTHS, FRIDAY,
    GREGORIAN_SDN_OFFSET, HALAKIM_PER_DAY, HALAKIM_PER_LUNAR_CYCLE, HALAKIM_PER_METONIC_CYCLE,
    HEBREW_SDN_MAX, HEBREW_SDN_OFFSET, MAX_HEBREW_DAY, MIN_GREGORIAN_YEAR, MONDAY,
    MONTHS_PER_YEAR, NEW_MOON_OF_CREATION, NOON, SUNDAY, TUESDAY, WEDNESDAY, YEAR_OFFSET,
};
use crate::types::{GregorianDate, HebrewDate, HebrewMonth};

/// Time of a new moon: whole days since the epoch plus parts into the day.
#[derive(Debug, Clone, Copy)]
struct Molad {
    day: i64,
    halakim: i64,
}

impl Molad {
    fn of_metonic_cycle(cycle: i64) -> Self {
        let total = NEW_MOON_OF_CREATION + cycle * HALAKIM_PER_METONIC_CYCLE;
        Self {
            day: total / HALAKIM_PER_DAY,
            halakim: total % HALAKIM_PER_DAY,
        }
    }

    fn advance(&mut self, halakim: i64) {
        self.halakim += halakim;
        self.day += self.halakim / HALAKIM_PER_DAY;
        self.halakim %= HALAKIM_PER_DAY;
    }

    /// Moves to the molad of Tishrei of the following year.
    fn advance_year(&mut self, metonic_year: usize) {
        self.advance(HALAKIM_PER_LUNAR_CYCLE * MONTHS_PER_YEAR[metonic_year]);
    }
}

/// Day of 1 Tishrei for the year whose Tishrei molad is `molad`.
fn tishri1(metonic_year: usize, molad: Molad) -> i64 {
    let leap_year = matches!(metonic_year, 2 | 5 | 7 | 10 | 13 | 16 | 18);
    let last_was_leap_year = matches!(metonic_year, 0 | 3 | 6 | 8 | 11 | 14 | 17);

    let mut day = molad.day;
    let mut dow = day % 7;

    if molad.halakim >= NOON
        || (!leap_year && dow == TUESDAY && molad.halakim >= AM3_11_20)
        || (last_was_leap_year && dow == MONDAY && molad.halakim >= AM9_32_43)
    {
        day += 1;
        dow = (dow + 1) % 7;
    }
    // applied last, it can add a second day
    if dow == WEDNESDAY || dow == FRIDAY || dow == SUNDAY {
        day += 1;
    }
    day
}

/// Locates the Tishrei molad at or shortly before `input_day`.
fn find_tishri_molad(input_day: i64) -> (i64, usize, Molad) {
    let mut cycle = (input_day + 310) / 6940;
    let mut molad = Molad::of_metonic_cycle(cycle);

    while molad.day < input_day - 6940 + 310 {
        cycle += 1;
        molad.advance(HALAKIM_PER_METONIC_CYCLE);
    }

    let mut metonic_year = 0;
    while metonic_year < 18 && molad.day <= input_day - 74 {
        molad.advance_year(metonic_year);
        metonic_year += 1;
    }

    (cycle, metonic_year, molad)
}

/// Start of Hebrew `year`: its place in the cycle, its molad and 1 Tishrei.
fn find_start_of_year(year: i64) -> (usize, Molad, i64) {
    let cycle = (year - 1) / 19;
    let metonic_year = year_in_cycle(year);

    let mut molad = Molad::of_metonic_cycle(cycle);
    molad.advance(HALAKIM_PER_LUNAR_CYCLE * YEAR_OFFSET[metonic_year]);

    (metonic_year, molad, tishri1(metonic_year, molad))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn year_in_cycle(year: i64) -> usize {
    (year - 1).rem_euclid(19) as usize
}

fn months_in_year(year: i64) -> i64 {
    MONTHS_PER_YEAR[year_in_cycle(year)]
}

/// True if Hebrew `year` has thirteen months.
pub fn is_hebrew_leap_year(year: u32) -> bool {
    year > 0 && months_in_year(i64::from(year)) == 13
}

/// Number of days in Hebrew `year`: 353-355 for common years, 383-385 for leap years.
pub fn hebrew_year_length(year: u32) -> Option<u16> {
    if year == 0 {
        return None;
    }
    let year = i64::from(year);
    let (_, _, start) = find_start_of_year(year);
    let (_, _, end) = find_start_of_year(year + 1);
    u16::try_from(end - start).ok()
}

/// Number of days in `month` of Hebrew `year`.
///
/// In a common year `AdarI` is the single Adar (29 days) and `AdarII` does
/// not exist.
pub fn hebrew_month_length(year: u32, month: HebrewMonth) -> Option<u8> {
    let year_length = hebrew_year_length(year)?;
    let leap = is_hebrew_leap_year(year);

    let days = match month {
        HebrewMonth::Tishrei
        | HebrewMonth::Shevat
        | HebrewMonth::Nisan
        | HebrewMonth::Sivan
        | HebrewMonth::Av => 30,
        HebrewMonth::Tevet
        | HebrewMonth::Iyar
        | HebrewMonth::Tammuz
        | HebrewMonth::Elul => 29,
        // complete years (355/385) lengthen Cheshvan
        HebrewMonth::Cheshvan if year_length % 10 == 5 => 30,
        HebrewMonth::Cheshvan => 29,
        // deficient years (353/383) shorten Kislev
        HebrewMonth::Kislev if year_length % 10 == 3 => 29,
        HebrewMonth::Kislev => 30,
        HebrewMonth::AdarI if leap => 30,
        HebrewMonth::AdarI => 29,
        HebrewMonth::AdarII if leap => 29,
        HebrewMonth::AdarII => return None,
    };
    Some(days)
}

/// Serial day number of a Hebrew date.
///
/// Months are numbered from Tishrei (1) to Elul (13). In a common year both 6
/// and 7 name Adar. The day is only checked to be in 1..=30, so a day past
/// the end of a short month rolls into the next one.
pub fn hebrew_to_jdn(year: u32, month: u8, day: u32) -> Option<i64> {
    if year == 0 || day == 0 || day > u32::from(MAX_HEBREW_DAY) {
        return None;
    }
    let year = i64::from(year);
    let day = i64::from(day);

    let sdn = match month {
        1 | 2 => {
            let (_, _, start) = find_start_of_year(year);
            if month == 1 { start + day - 1 } else { start + day + 29 }
        }
        3 => {
            let (metonic_year, mut molad, start) = find_start_of_year(year);
            molad.advance_year(metonic_year);
            let end = tishri1((metonic_year + 1) % 19, molad);

            match end - start {
                355 | 385 => start + day + 59,
                _ => start + day + 58,
            }
        }
        4..=6 => {
            let (_, _, next_start) = find_start_of_year(year + 1);
            let adar_days = if months_in_year(year) == 12 { 29 } else { 59 };
            let before_next = match month {
                4 => 237,
                5 => 208,
                _ => 178,
            };
            next_start + day - adar_days - before_next
        }
        7..=13 => {
            let (_, _, next_start) = find_start_of_year(year + 1);
            let before_next = match month {
                7 => 207,
                8 => 178,
                9 => 148,
                10 => 119,
                11 => 89,
                12 => 60,
                _ => 30,
            };
            next_start + day - before_next
        }
        _ => return None,
    };

    Some(sdn + HEBREW_SDN_OFFSET)
}

/// Hebrew date of a serial day number.
///
/// Adar of a common year comes back as month 7.
pub fn jdn_to_hebrew(jdn: i64) -> Option<HebrewDate> {
    if jdn <= HEBREW_SDN_OFFSET || jdn > HEBREW_SDN_MAX {
        return None;
    }
    let (year, month, day) = sdn_to_hebrew_parts(jdn - HEBREW_SDN_OFFSET);

    Some(HebrewDate {
        year: u32::try_from(year).ok()?,
        month: HebrewMonth::from_number(u8::try_from(month).ok()?).ok()?,
        day: u8::try_from(day).ok()?,
    })
}

#[allow(clippy::cast_possible_wrap)]
fn sdn_to_hebrew_parts(input_day: i64) -> (i64, i64, i64) {
    let (cycle, metonic_year, mut molad) = find_tishri_molad(input_day);
    let mut start = tishri1(metonic_year, molad);
    let year;
    let end;

    if input_day >= start {
        // 1 Tishrei found at the start of the year
        year = cycle * 19 + metonic_year as i64 + 1;
        if input_day < start + 30 {
            return (year, 1, input_day - start + 1);
        }
        if input_day < start + 59 {
            return (year, 2, input_day - start - 29);
        }
        molad.advance_year(metonic_year);
        end = tishri1((metonic_year + 1) % 19, molad);
    } else {
        // 1 Tishrei found at the start of the next year
        year = cycle * 19 + metonic_year as i64;

        if input_day >= start - 177 {
            // Nisan through Elul have fixed lengths
            for (month, offset) in [(13, 30), (12, 60), (11, 89), (10, 119), (9, 148)] {
                if input_day > start - offset {
                    return (year, month, input_day - start + offset);
                }
            }
            return (year, 8, input_day - start + 178);
        }

        let mut month = 7;
        let mut day = input_day - start + 207;
        if day > 0 {
            return (year, month, day);
        }
        if months_in_year(year) == 13 {
            month -= 1;
            day += 30;
            if day > 0 {
                return (year, month, day);
            }
            month -= 1;
        } else {
            month -= 2;
        }
        day += 30;
        if day > 0 {
            return (year, month, day);
        }
        month -= 1;
        day += 29;
        if day > 0 {
            return (year, month, day);
        }

        // Kislev or Cheshvan: the year length decides
        end = start;
        let (_, previous_year, previous_molad) = find_tishri_molad(molad.day - 365);
        start = tishri1(previous_year, previous_molad);
    }

    let mut day = input_day - start - 29;
    let cheshvan_days = match end - start {
        355 | 385 => 30,
        _ => 29,
    };
    if day <= cheshvan_days {
        return (year, 2, day);
    }
    day -= cheshvan_days;
    (year, 3, day)
}

/// Serial day number of a proleptic Gregorian date.
///
/// Year 0 does not exist (1 BC is -1). Day numbers start on 25 Nov 4714 BC.
pub fn gregorian_to_jdn(year: i32, month: u8, day: u8) -> Option<i64> {
    if year == 0
        || year < MIN_GREGORIAN_YEAR
        || !(1..=12).contains(&month)
        || !(1..=31).contains(&day)
    {
        return None;
    }
    if year == MIN_GREGORIAN_YEAR && (month < 11 || (month == 11 && day < 25)) {
        return None;
    }

    let mut year = i64::from(year) + if year < 0 { 4801 } else { 4800 };
    let month = if month > 2 {
        i64::from(month) - 3
    } else {
        year -= 1;
        i64::from(month) + 9
    };

    Some(
        (year / 100) * DAYS_PER_400_YEARS / 4
            + (year % 100) * DAYS_PER_4_YEARS / 4
            + (month * DAYS_PER_5_MONTHS + 2) / 5
            + i64::from(day)
            - GREGORIAN_SDN_OFFSET,
    )
}

/// Proleptic Gregorian date of a serial day number.
pub fn jdn_to_gregorian(jdn: i64) -> Option<GregorianDate> {
    if jdn <= 0 || jdn > (i64::MAX - 4 * GREGORIAN_SDN_OFFSET) / 4 {
        return None;
    }

    let mut temp = (jdn + GREGORIAN_SDN_OFFSET) * 4 - 1;
    let century = temp / DAYS_PER_400_YEARS;

    temp = ((temp % DAYS_PER_400_YEARS) / 4) * 4 + 3;
    let mut year = century * 100 + temp / DAYS_PER_4_YEARS;
    let day_of_year = (temp % DAYS_PER_4_YEARS) / 4 + 1;

    temp = day_of_year * 5 - 3;
    let mut month = temp / DAYS_PER_5_MONTHS;
    let day = (temp % DAYS_PER_5_MONTHS) / 5 + 1;

    // the computation counts years from March
    if month < 10 {
        month += 3;
    } else {
        year += 1;
        month -= 9;
    }

    year -= 4800;
    if year <= 0 {
        year -= 1;
    }

    Some(GregorianDate::new(
        u8::try_from(day).ok()?,
        u8::try_from(month).ok()?,
        i32::try_from(year).ok()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hebrew(year: u32, month: HebrewMonth, day: u8) -> HebrewDate {
        HebrewDate { year, month, day }
    }

    #[test]
    fn test_gregorian_known_day_numbers() {
        assert_eq!(gregorian_to_jdn(1948, 4, 14), Some(2_432_656));
        assert_eq!(gregorian_to_jdn(2000, 1, 1), Some(2_451_545));
        assert_eq!(gregorian_to_jdn(-4714, 11, 25), Some(1));
    }

    #[test]
    fn test_gregorian_rejects_invalid() {
        assert_eq!(gregorian_to_jdn(0, 1, 1), None);
        assert_eq!(gregorian_to_jdn(2000, 0, 1), None);
        assert_eq!(gregorian_to_jdn(2000, 13, 1), None);
        assert_eq!(gregorian_to_jdn(2000, 1, 0), None);
        assert_eq!(gregorian_to_jdn(2000, 1, 32), None);
        assert_eq!(gregorian_to_jdn(-4714, 11, 24), None);
        assert_eq!(gregorian_to_jdn(-4715, 12, 31), None);
    }

    #[test]
    fn test_jdn_to_gregorian() {
        assert_eq!(jdn_to_gregorian(2_451_545), Some(GregorianDate::new(1, 1, 2000)));
        assert_eq!(jdn_to_gregorian(1), Some(GregorianDate::new(25, 11, -4714)));
        assert_eq!(jdn_to_gregorian(0), None);
        assert_eq!(jdn_to_gregorian(-5), None);
    }

    #[test]
    fn test_gregorian_leap_day() {
        let jdn = gregorian_to_jdn(2024, 2, 29).unwrap();
        assert_eq!(jdn_to_gregorian(jdn), Some(GregorianDate::new(29, 2, 2024)));
        assert_eq!(jdn_to_gregorian(jdn + 1), Some(GregorianDate::new(1, 3, 2024)));
    }

    #[test]
    fn test_independence_day() {
        let jdn = hebrew_to_jdn(5708, 9, 5).unwrap();
        assert_eq!(jdn_to_gregorian(jdn), Some(GregorianDate::new(14, 5, 1948)));
    }

    #[test]
    fn test_rosh_hashana() {
        struct TestCase {
            year: u32,
            gregorian: GregorianDate,
        }

        let cases = [
            TestCase {
                year: 5777,
                gregorian: GregorianDate::new(3, 10, 2016),
            },
            TestCase {
                year: 5784,
                gregorian: GregorianDate::new(16, 9, 2023),
            },
            TestCase {
                year: 5785,
                gregorian: GregorianDate::new(3, 10, 2024),
            },
        ];

        for case in &cases {
            let jdn = hebrew_to_jdn(case.year, 1, 1).unwrap();
            assert_eq!(
                jdn_to_gregorian(jdn),
                Some(case.gregorian),
                "1 Tishrei {}",
                case.year
            );
            assert_eq!(jdn_to_hebrew(jdn), Some(hebrew(case.year, HebrewMonth::Tishrei, 1)));
        }
    }

    #[test]
    fn test_adar_in_leap_year() {
        // Purim 5784 fell in Adar II
        let jdn = gregorian_to_jdn(2024, 3, 24).unwrap();
        assert_eq!(jdn_to_hebrew(jdn), Some(hebrew(5784, HebrewMonth::AdarII, 14)));
        assert_eq!(hebrew_to_jdn(5784, 7, 14), Some(jdn));

        let jdn = gregorian_to_jdn(2024, 2, 15).unwrap();
        assert_eq!(jdn_to_hebrew(jdn), Some(hebrew(5784, HebrewMonth::AdarI, 6)));
    }

    #[test]
    fn test_adar_in_common_year() {
        // 5783 has a single Adar; both month numbers reach it
        assert!(!is_hebrew_leap_year(5783));
        let six = hebrew_to_jdn(5783, 6, 14).unwrap();
        let seven = hebrew_to_jdn(5783, 7, 14).unwrap();
        assert_eq!(six, seven);
        assert_eq!(jdn_to_gregorian(six), Some(GregorianDate::new(7, 3, 2023)));
        assert_eq!(jdn_to_hebrew(six), Some(hebrew(5783, HebrewMonth::AdarII, 14)));
    }

    #[test]
    fn test_hebrew_rejects_invalid() {
        assert_eq!(hebrew_to_jdn(0, 0, 0), None);
        assert_eq!(hebrew_to_jdn(5784, 0, 1), None);
        assert_eq!(hebrew_to_jdn(5784, 14, 1), None);
        assert_eq!(hebrew_to_jdn(5784, 1, 0), None);
        assert_eq!(hebrew_to_jdn(5784, 1, 31), None);
        assert_eq!(jdn_to_hebrew(HEBREW_SDN_OFFSET), None);
        assert_eq!(jdn_to_hebrew(0), None);
    }

    #[test]
    fn test_leap_years_follow_cycle() {
        let leap: Vec<u32> = (5701..=5719).filter(|y| is_hebrew_leap_year(*y)).collect();
        assert_eq!(leap, [5703, 5706, 5708, 5711, 5714, 5717, 5719]);
        assert!(!is_hebrew_leap_year(0));
    }

    #[test]
    fn test_year_lengths() {
        assert_eq!(hebrew_year_length(5783), Some(355));
        assert_eq!(hebrew_year_length(5784), Some(383));
        assert_eq!(hebrew_year_length(5785), Some(355));
        assert_eq!(hebrew_year_length(0), None);

        for year in 5600..5900 {
            let length = hebrew_year_length(year).unwrap();
            assert!(
                matches!(length, 353..=355 | 383..=385),
                "year {year} has {length} days"
            );
            assert_eq!(length > 380, is_hebrew_leap_year(year));
        }
    }

    #[test]
    fn test_month_lengths_sum_to_year_length() {
        for year in 5700..5800 {
            let total: u16 = HebrewMonth::ALL
                .iter()
                .filter_map(|m| hebrew_month_length(year, *m))
                .map(u16::from)
                .sum();
            assert_eq!(Some(total), hebrew_year_length(year), "year {year}");
        }
    }

    #[test]
    fn test_adar_ii_only_in_leap_years() {
        assert_eq!(hebrew_month_length(5783, HebrewMonth::AdarII), None);
        assert_eq!(hebrew_month_length(5783, HebrewMonth::AdarI), Some(29));
        assert_eq!(hebrew_month_length(5784, HebrewMonth::AdarI), Some(30));
        assert_eq!(hebrew_month_length(5784, HebrewMonth::AdarII), Some(29));
    }

    #[test]
    fn test_consecutive_days() {
        let start = gregorian_to_jdn(2023, 9, 1).unwrap();
        let mut previous = jdn_to_hebrew(start).unwrap();
        for jdn in start + 1..start + 800 {
            let date = jdn_to_hebrew(jdn).unwrap();
            assert_eq!(
                hebrew_to_jdn(date.year, date.month.number(), u32::from(date.day)),
                Some(jdn)
            );
            if date.day != 1 {
                assert_eq!(date.day, previous.day + 1);
                assert_eq!(date.month, previous.month);
            }
            previous = date;
        }
    }
}
