//! # Fixture Generation
//!
//! Random value generation for mock payloads. Handlers never reach for a
//! global generator; they ask the [`FixtureSource`] held in the application
//! state for a fresh [`Faker`] per request, so tests can swap in a seeded
//! source and get reproducible output.

use std::fmt;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use rand::{Rng, SeedableRng, rngs::StdRng};

mod words;

/// Hands out one fixture generator per request.
pub trait FixtureSource: Send + Sync + fmt::Debug {
    fn faker(&self) -> Faker;
}

/// Production source: OS-seeded randomness and the current wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropySource;

impl FixtureSource for EntropySource {
    fn faker(&self) -> Faker {
        Faker::new(StdRng::from_entropy(), Utc::now())
    }
}

/// Deterministic source: every generator starts from the same seed and the
/// same reference instant, so identical requests yield identical payloads.
#[derive(Debug, Clone, Copy)]
pub struct SeededSource {
    seed: u64,
    now: DateTime<Utc>,
}

impl SeededSource {
    /// Seeded source anchored at the moment of construction.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            now: Utc::now(),
        }
    }

    /// Pin the reference instant used for relative dates.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl FixtureSource for SeededSource {
    fn faker(&self) -> Faker {
        Faker::new(StdRng::seed_from_u64(self.seed), self.now)
    }
}

/// Generator of plausible-looking primitive values.
#[derive(Debug)]
pub struct Faker {
    rng: StdRng,
    now: DateTime<Utc>,
}

impl Faker {
    pub fn new(rng: StdRng, now: DateTime<Utc>) -> Self {
        Self { rng, now }
    }

    /// Reference instant for relative dates.
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Underlying random number generator.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Build `count` records with `make`.
    pub fn multiple<T>(&mut self, count: usize, mut make: impl FnMut(&mut Self) -> T) -> Vec<T> {
        (0..count).map(|_| make(self)).collect()
    }

    /// Random v4-shaped UUID drawn from this generator.
    pub fn uuid(&mut self) -> String {
        uuid::Builder::from_random_bytes(self.rng.r#gen())
            .into_uuid()
            .to_string()
    }

    /// Uniform integer in `[min, max]`.
    pub fn int(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    /// Uniform count in `[min, max]`.
    pub fn count(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    /// Uniform float in `[min, max]`, rounded to `fraction_digits` decimals.
    pub fn float(&mut self, min: f64, max: f64, fraction_digits: i32) -> f64 {
        let value = if max <= min {
            min
        } else {
            self.rng.gen_range(min..=max)
        };
        round_to(value, fraction_digits)
    }

    /// `0` or `1` with equal probability.
    pub fn flag(&mut self) -> u8 {
        u8::from(self.rng.gen_bool(0.5))
    }

    /// One element of `options`.
    ///
    /// # Panics
    ///
    /// Panics if `options` is empty.
    pub fn pick<'a, T>(&mut self, options: &'a [T]) -> &'a T {
        &options[self.rng.gen_range(0..options.len())]
    }

    fn pick_str(&mut self, options: &[&'static str]) -> &'static str {
        *self.pick(options)
    }

    fn from_charset(&mut self, charset: &[u8], len: usize) -> String {
        (0..len)
            .map(|_| char::from(*self.pick(charset)))
            .collect()
    }

    /// String of `len` decimal digits.
    pub fn numeric(&mut self, len: usize) -> String {
        self.from_charset(b"0123456789", len)
    }

    pub fn alpha_upper(&mut self, len: usize) -> String {
        self.from_charset(words::UPPER_ALPHA, len)
    }

    pub fn alphanumeric_upper(&mut self, len: usize) -> String {
        self.from_charset(words::UPPER_ALPHANUMERIC, len)
    }

    /// Mainland mobile number: `1` followed by ten digits.
    pub fn mobile(&mut self) -> String {
        format!("1{}", self.numeric(10))
    }

    pub fn first_name(&mut self) -> String {
        self.pick_str(words::GIVEN_NAMES).to_string()
    }

    pub fn full_name(&mut self) -> String {
        let surname = self.pick_str(words::SURNAMES);
        let given = self.pick_str(words::GIVEN_NAMES);
        format!("{surname}{given}")
    }

    pub fn job_title(&mut self) -> String {
        self.pick_str(words::JOB_TITLES).to_string()
    }

    pub fn city(&mut self) -> String {
        self.pick_str(words::CITIES).to_string()
    }

    pub fn street_address(&mut self) -> String {
        let street = self.pick_str(words::STREETS);
        let number = self.int(1, 999);
        format!("{street}{number}号")
    }

    pub fn word(&mut self) -> &'static str {
        self.pick_str(words::LOREM)
    }

    /// Capitalized lorem sentence of three to ten words ending in a period.
    pub fn sentence(&mut self) -> String {
        let count = self.count(3, 10);
        let text = self.multiple(count, |f| f.word()).join(" ");
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
            None => String::new(),
        }
    }

    pub fn sentences(&mut self, count: usize) -> String {
        self.multiple(count, |f| f.sentence()).join(" ")
    }

    pub fn company_name(&mut self) -> String {
        let city = self.city();
        let suffix = self.pick_str(words::COMPANY_SUFFIXES);
        format!("{city}{suffix}")
    }

    pub fn product_adjective(&mut self) -> String {
        self.pick_str(words::PRODUCT_ADJECTIVES).to_string()
    }

    pub fn product_material(&mut self) -> String {
        self.pick_str(words::PRODUCT_MATERIALS).to_string()
    }

    pub fn product(&mut self) -> String {
        self.pick_str(words::PRODUCTS).to_string()
    }

    pub fn product_name(&mut self) -> String {
        let adjective = self.product_adjective();
        let material = self.product_material();
        let product = self.product();
        format!("{adjective} {material} {product}")
    }

    pub fn product_description(&mut self) -> String {
        let name = self.product_name();
        let detail = self.sentence();
        format!("The {name} is designed for daily care. {detail}")
    }

    pub fn catch_phrase_adjective(&mut self) -> String {
        self.pick_str(words::CATCH_PHRASE_ADJECTIVES).to_string()
    }

    pub fn chemical_element(&mut self) -> String {
        self.pick_str(words::CHEMICAL_ELEMENTS).to_string()
    }

    pub fn human_color(&mut self) -> String {
        self.pick_str(words::HUMAN_COLORS).to_string()
    }

    pub fn url(&mut self) -> String {
        let host = self.from_charset(words::LOWER_ALPHA, 8);
        let suffix = self.pick_str(words::DOMAIN_SUFFIXES);
        format!("https://{host}.{suffix}/")
    }

    pub fn avatar(&mut self) -> String {
        let id = self.int(1, 99_999_999);
        format!("https://avatars.githubusercontent.com/u/{id}")
    }

    pub fn image_url(&mut self, width: u32, height: u32) -> String {
        let seed = self.alphanumeric_upper(10);
        format!("https://picsum.photos/seed/{seed}/{width}/{height}")
    }

    /// Instant within the last `years` years.
    pub fn past(&mut self, years: i64) -> DateTime<Utc> {
        self.recent(years * 365)
    }

    /// Instant within the last `days` days.
    pub fn recent(&mut self, days: i64) -> DateTime<Utc> {
        let seconds = self.int(1, days * 86_400);
        self.now - Duration::seconds(seconds)
    }

    /// Instant within the next `days` days.
    pub fn soon(&mut self, days: i64) -> DateTime<Utc> {
        let seconds = self.int(1, days * 86_400);
        self.now + Duration::seconds(seconds)
    }

    /// Calendar date inside the years `[min_year, max_year]`.
    pub fn birthdate(&mut self, min_year: i32, max_year: i32) -> NaiveDate {
        let year = self.int(i64::from(min_year), i64::from(max_year)) as i32;
        let ordinal = self.int(1, 365) as u32;
        NaiveDate::from_yo_opt(year, ordinal).unwrap_or_else(|| self.now.date_naive())
    }
}

/// Round half away from zero to `fraction_digits` decimals.
pub fn round_to(value: f64, fraction_digits: i32) -> f64 {
    let factor = 10f64.powi(fraction_digits);
    (value * factor).round() / factor
}

/// `YYYY-MM-DD`
pub fn format_date(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d").to_string()
}

/// `YYYY-MM-DD HH:MM:SS`
pub fn format_date_time(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// `HH:MM`
pub fn format_time(instant: DateTime<Utc>) -> String {
    instant.format("%H:%M").to_string()
}

const WEEK_LABELS: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

/// Chinese weekday label, `周日` through `周六`.
pub fn week_label(instant: DateTime<Utc>) -> String {
    let index = instant.weekday().num_days_from_sunday() as usize;
    format!("周{}", WEEK_LABELS[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 9, 8, 30, 0).unwrap()
    }

    fn faker() -> Faker {
        SeededSource::new(11).with_now(fixed_now()).faker()
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let source = SeededSource::new(5).with_now(fixed_now());
        let mut a = source.faker();
        let mut b = source.faker();
        assert_eq!(a.uuid(), b.uuid());
        assert_eq!(a.full_name(), b.full_name());
        assert_eq!(a.int(0, 1_000_000), b.int(0, 1_000_000));
        assert_eq!(source.seed(), 5);
    }

    #[test]
    fn test_entropy_source_varies() {
        let mut a = EntropySource.faker();
        let mut b = EntropySource.faker();
        assert_ne!(a.uuid(), b.uuid());
    }

    #[test]
    fn test_uuid_shape() {
        let id = faker().uuid();
        assert!(uuid::Uuid::parse_str(&id).is_ok());
        assert_eq!(id.len(), 36);
    }

    #[test]
    fn test_bounded_draws() {
        let mut f = faker();
        for _ in 0..200 {
            let n = f.int(3, 5);
            assert!((3..=5).contains(&n));
            let x = f.float(40.0, 80.0, 1);
            assert!((40.0..=80.0).contains(&x));
            assert_eq!(round_to(x, 1), x);
            assert!(f.flag() <= 1);
        }
        assert_eq!(f.int(9, 2), 9);
        assert_eq!(f.float(1.5, 1.5, 2), 1.5);
    }

    #[test]
    fn test_string_shapes() {
        let mut f = faker();
        let mobile = f.mobile();
        assert_eq!(mobile.len(), 11);
        assert!(mobile.starts_with('1'));
        assert!(mobile.chars().all(|c| c.is_ascii_digit()));

        let code = f.alphanumeric_upper(16);
        assert_eq!(code.len(), 16);
        assert!(
            code.chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );

        let sentence = f.sentence();
        assert!(sentence.ends_with('.'));
        assert!(sentence.chars().next().unwrap().is_uppercase());
    }

    #[test]
    fn test_relative_dates() {
        let mut f = faker();
        let now = fixed_now();
        for _ in 0..50 {
            let past = f.recent(180);
            assert!(past < now && past >= now - Duration::days(180));
            let soon = f.soon(60);
            assert!(soon > now && soon <= now + Duration::days(60));
            let birthday = f.birthdate(1950, 2015);
            assert!((1950..=2015).contains(&birthday.year()));
        }
    }

    #[test]
    fn test_formatting_helpers() {
        let instant = fixed_now();
        assert_eq!(format_date(instant), "2025-03-09");
        assert_eq!(format_date_time(instant), "2025-03-09 08:30:00");
        assert_eq!(format_time(instant), "08:30");
        assert_eq!(week_label(instant), "周日");
        assert_eq!(week_label(instant + Duration::days(3)), "周三");
    }
}
