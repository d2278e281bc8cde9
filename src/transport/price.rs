use serde::Deserialize;
use serde::de::Error as DeError;
use serde_json::value::RawValue;

use crate::domain::NumberPrice;

/// One price field of a number offer, as the exact text Infobip sent.
///
/// Infobip writes prices as JSON numbers (`1.50`) on most accounts and as strings
/// (`"1.50"`) on some. Number tokens are copied verbatim so no float rounding or
/// trailing-zero loss happens between the wire and [`NumberPrice`].
#[derive(Debug, Clone, PartialEq, Eq)]
struct PriceAmount(String);

impl<'de> Deserialize<'de> for PriceAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <Box<RawValue>>::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first() {
            Some(b'"') => serde_json::from_str::<String>(token)
                .map(Self)
                .map_err(D::Error::custom),
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            _ => Err(D::Error::custom(format!(
                "price must be a JSON number or string, got {token}"
            ))),
        }
    }
}

/// `price` object of a number offer. Every field may be absent or `null`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberPriceJson {
    price_per_month: Option<PriceAmount>,
    setup_price: Option<PriceAmount>,
    initial_month_price: Option<PriceAmount>,
    currency: Option<String>,
}

impl From<NumberPriceJson> for NumberPrice {
    fn from(value: NumberPriceJson) -> Self {
        let text = |amount: Option<PriceAmount>| amount.map(|PriceAmount(text)| text);
        Self {
            price_per_month: text(value.price_per_month),
            setup_price: text(value.setup_price),
            initial_month_price: text(value.initial_month_price),
            currency: value.currency.filter(|it| !it.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Result<NumberPrice, serde_json::Error> {
        serde_json::from_str::<NumberPriceJson>(json).map(NumberPrice::from)
    }

    #[test]
    fn number_tokens_are_kept_verbatim() {
        let price = decode(r#"{"pricePerMonth": 1.50, "setupPrice": 0, "currency": "EUR"}"#)
            .unwrap();
        assert_eq!(price.price_per_month.as_deref(), Some("1.50"));
        assert_eq!(price.setup_price.as_deref(), Some("0"));
        assert_eq!(price.initial_month_price, None);
        assert_eq!(price.currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn string_amounts_are_unquoted() {
        let price = decode(r#"{"initialMonthPrice": "0.30"}"#).unwrap();
        assert_eq!(price.initial_month_price.as_deref(), Some("0.30"));
    }

    #[test]
    fn null_and_missing_fields_are_none() {
        assert_eq!(decode(r#"{"setupPrice": null}"#).unwrap(), NumberPrice::default());
        assert_eq!(decode("{}").unwrap(), NumberPrice::default());
    }

    #[test]
    fn other_json_types_are_rejected() {
        assert!(decode(r#"{"pricePerMonth": true}"#).is_err());
        assert!(decode(r#"{"setupPrice": {"amount": 1}}"#).is_err());
    }
}
