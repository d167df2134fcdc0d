//! Conversion: PriceResponse + envelope currency → PriceInformation.

use super::wire::PriceResponse;
use super::PriceInformation;

impl From<(PriceResponse, String)> for PriceInformation {
    fn from((price, currency): (PriceResponse, String)) -> Self {
        PriceInformation {
            price: price.price,
            price_single: price.price_single,
            period: price.period,
            count: price.count,
            currency,
        }
    }
}
