//! The request body for creating and updating transactions.

use serde::Deserialize;
use time::{
    Date, OffsetDateTime, UtcOffset, format_description::well_known::Iso8601,
    macros::format_description,
};

use crate::{Error, models::TransactionBuilder};

/// The candidate record submitted by the client.
///
/// All four fields are required. They are declared optional here so that an
/// incomplete body deserializes successfully and [TransactionForm::validate]
/// can reject it with the API's own error shape instead of a generic
/// deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionForm {
    /// The amount of money spent.
    #[serde(default)]
    pub amount: Option<f64>,
    /// A text description of what the transaction was for.
    #[serde(default)]
    pub description: Option<String>,
    /// When the transaction happened, as a calendar date or ISO-8601 timestamp.
    #[serde(default)]
    pub date: Option<String>,
    /// The category label for the transaction.
    #[serde(default)]
    pub category: Option<String>,
}

impl TransactionForm {
    /// Check the form and convert it into a [TransactionBuilder].
    ///
    /// The amount must be finite and strictly positive: zero, NaN and
    /// infinity are all rejected as missing.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::MissingFields] if any field is absent, null, empty after
    ///   trimming, or the amount is not a positive finite number,
    /// - [Error::InvalidDate] if the date string cannot be parsed.
    pub fn validate(self) -> Result<TransactionBuilder, Error> {
        let (Some(amount), Some(description), Some(date), Some(category)) =
            (self.amount, self.description, self.date, self.category)
        else {
            return Err(Error::MissingFields);
        };

        let description = description.trim().to_owned();
        let category = category.trim().to_owned();

        if description.is_empty() || category.is_empty() {
            return Err(Error::MissingFields);
        }

        if !amount.is_finite() || amount <= 0.0 {
            return Err(Error::MissingFields);
        }

        let date = parse_transaction_date(&date)?;

        Ok(TransactionBuilder {
            amount,
            description,
            date,
            category,
        })
    }
}

/// Parse the date field into a UTC timestamp.
///
/// Accepts either a bare calendar date (e.g. "2024-01-05", taken as midnight
/// UTC) or an ISO-8601 timestamp, which is converted to UTC. Timestamps are
/// truncated to whole seconds so every stored value shares the same
/// fixed-width text encoding and the store's date ordering stays
/// chronological.
fn parse_transaction_date(input: &str) -> Result<OffsetDateTime, Error> {
    if let Ok(date) = Date::parse(input, format_description!("[year]-[month]-[day]")) {
        return Ok(date.midnight().assume_utc());
    }

    let date_time = OffsetDateTime::parse(input, &Iso8601::DEFAULT)
        .map_err(|_| Error::InvalidDate(input.to_owned()))?
        .to_offset(UtcOffset::UTC);

    date_time
        .replace_nanosecond(0)
        .map_err(|_| Error::InvalidDate(input.to_owned()))
}
