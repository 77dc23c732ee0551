//! Birth-date keepsake lookups used on announcement artifacts:
//! western zodiac sign, birthstone, and life-path number. Pure
//! calendar lookups with no persistence.

use chrono::{Datelike, NaiveDate};

/// Western zodiac sign for a birth date
pub fn zodiac_sign(date: NaiveDate) -> &'static str {
    let (month, day) = (date.month(), date.day());
    match (month, day) {
        (3, 21..) | (4, ..=19) => "Aries",
        (4, _) | (5, ..=20) => "Taurus",
        (5, _) | (6, ..=20) => "Gemini",
        (6, _) | (7, ..=22) => "Cancer",
        (7, _) | (8, ..=22) => "Leo",
        (8, _) | (9, ..=22) => "Virgo",
        (9, _) | (10, ..=22) => "Libra",
        (10, _) | (11, ..=21) => "Scorpio",
        (11, _) | (12, ..=21) => "Sagittarius",
        (12, _) | (1, ..=19) => "Capricorn",
        (1, _) | (2, ..=18) => "Aquarius",
        _ => "Pisces",
    }
}

/// Traditional birthstone for a birth month
pub fn birthstone(date: NaiveDate) -> &'static str {
    match date.month() {
        1 => "Garnet",
        2 => "Amethyst",
        3 => "Aquamarine",
        4 => "Diamond",
        5 => "Emerald",
        6 => "Pearl",
        7 => "Ruby",
        8 => "Peridot",
        9 => "Sapphire",
        10 => "Opal",
        11 => "Topaz",
        _ => "Turquoise",
    }
}

/// Numerology life-path number: the digits of YYYYMMDD summed and
/// reduced until a single digit remains, keeping the master numbers
/// 11, 22, and 33 unreduced.
pub fn life_path_number(date: NaiveDate) -> u32 {
    let digits = format!("{:04}{:02}{:02}", date.year(), date.month(), date.day());
    let mut total: u32 = digits.chars().filter_map(|c| c.to_digit(10)).sum();

    while total > 9 && total != 11 && total != 22 && total != 33 {
        total = digit_sum(total);
    }
    total
}

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}
