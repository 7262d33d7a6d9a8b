//! # Response Envelope
//!
//! Every endpoint answers with the same wrapper:
//! `{ "success": true, "data": ..., "message": "" }`. List endpoints use
//! [`PageEnvelope`], which adds `total`, `page` and `size` next to a
//! sequence payload.

use rand::Rng;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Default page number when the request does not carry a usable one.
pub const DEFAULT_PAGE: u64 = 1;

/// Default page size when the request does not carry a usable one.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Upper bound on the number of fixture records generated for one list request.
pub const MAX_FIXTURE_ITEMS: u64 = 5;

/// Empty JSON object, the base payload before `data` is overridden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct Empty {}

/// Uniform success wrapper around an arbitrary payload.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Envelope<T> {
    /// Always `true`; no failure envelope is ever produced
    pub success: bool,
    /// Response payload
    pub data: T,
    /// Human-readable confirmation text, empty unless overridden
    pub message: String,
    /// Optional business code, omitted unless set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl<T> Envelope<T> {
    /// Wrap `data` with the default envelope fields.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            message: String::new(),
            code: None,
        }
    }

    /// Override the message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the optional business code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Replace the payload wholesale, keeping every other field.
    pub fn with_data<U>(self, data: U) -> Envelope<U> {
        Envelope {
            success: self.success,
            data,
            message: self.message,
            code: self.code,
        }
    }

    /// Turn this envelope into a paginated one over `items`.
    ///
    /// `total` is reported as given; callers that need the randomized
    /// total go through [`paginate`].
    pub fn into_page<I>(self, items: Vec<I>, total: u64, page: u64) -> PageEnvelope<I> {
        let size = items.len() as u64;
        PageEnvelope {
            success: self.success,
            data: items,
            message: self.message,
            code: self.code,
            total,
            page,
            size,
        }
    }
}

impl Envelope<Empty> {
    /// Envelope over an empty object.
    pub fn empty() -> Self {
        Self::new(Empty::default())
    }
}

impl Envelope<bool> {
    /// `data: true` with a confirmation message, used by every mutating endpoint.
    pub fn confirmed(message: impl Into<String>) -> Self {
        Envelope::empty().with_data(true).with_message(message)
    }
}

/// Envelope over a sequence with pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PageEnvelope<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Reported number of matching records across all pages
    pub total: u64,
    /// 1-based page number that was requested, after normalization
    pub page: u64,
    /// Number of items in `data`
    pub size: u64,
}

impl<T> PageEnvelope<T> {
    /// A listing that is complete in a single page: `total == size`, `page == 1`.
    pub fn single_page(items: Vec<T>) -> Self {
        let total = items.len() as u64;
        Envelope::empty().into_page(items, total, DEFAULT_PAGE)
    }
}

/// Build a paginated envelope with a randomized `total`.
///
/// `total` is drawn uniformly from `[max(len, 1), max(len, 1) * 4]`, so a
/// client always sees at least as many records as were returned and usually
/// more pages to load.
pub fn paginate<T, R>(items: Vec<T>, page: u64, rng: &mut R) -> PageEnvelope<T>
where
    R: Rng + ?Sized,
{
    let base_total = (items.len() as u64).max(1);
    let total = rng.gen_range(base_total..=base_total * 4);
    Envelope::empty().into_page(items, total, page)
}

/// Coerce an untrusted JSON value to a positive integer.
///
/// Numbers are taken as-is, strings are trimmed and parsed (an empty string
/// counts as zero), `true` is one and `false`/`null` are zero. Arrays and
/// objects are unusable. Finite values above zero are floored; anything else
/// yields `fallback`.
pub fn normalize_positive_int(value: Option<&Value>, fallback: u64) -> u64 {
    match value.and_then(coerce_number) {
        Some(number) if number.is_finite() && number > 0.0 => number.floor() as u64,
        _ => fallback,
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        Value::Array(_) | Value::Object(_) => None,
    }
}
