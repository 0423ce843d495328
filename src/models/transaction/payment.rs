//! Payment transactions, including cross-currency payment paths.

use serde::{Deserialize, Serialize};

use super::{encode_x_address_field, required};
use crate::models::amount::XrpCurrencyAmount;
use crate::models::error::DecodeError;
use crate::models::network::XrplNetwork;
use crate::models::wire::{WirePath, WirePathElement, WirePayment};
use crate::services::address::AddressCodec;

/// Delivers value from the sender to a destination, optionally rippling
/// through issued-currency paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrpPayment {
    pub amount: XrpCurrencyAmount,
    /// The destination and its optional tag, folded into an X-address.
    pub destination_x_address: String,
    pub deliver_min: Option<XrpCurrencyAmount>,
    pub invoice_id: Option<Vec<u8>>,
    pub paths: Vec<XrpPath>,
    pub send_max: Option<XrpCurrencyAmount>,
}

/// One payment path: an ordered list of ripple steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct XrpPath {
    pub elements: Vec<XrpPathElement>,
}

/// One step in a payment path. Fields are mutually optional on the ledger;
/// they are carried through as reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct XrpPathElement {
    pub account: Option<String>,
    pub currency: Option<String>,
    pub issuer: Option<String>,
}

impl XrpPayment {
    pub fn from_wire(
        wire: &WirePayment,
        network: XrplNetwork,
        codec: &dyn AddressCodec,
    ) -> Result<Self, DecodeError> {
        let amount = wire
            .amount
            .as_ref()
            .ok_or_else(|| {
                DecodeError::InvalidTransaction(
                    "Payment is missing its mandatory amount field".to_string(),
                )
            })
            .and_then(XrpCurrencyAmount::from_wire)?;

        let destination = required(&wire.destination, "Payment", "destination")?;
        let destination_x_address = encode_x_address_field(
            codec,
            network,
            &destination,
            wire.destination_tag,
            "Payment destination",
        )?;

        let deliver_min = wire
            .deliver_min
            .as_ref()
            .map(XrpCurrencyAmount::from_wire)
            .transpose()?;
        let send_max = wire
            .send_max
            .as_ref()
            .map(XrpCurrencyAmount::from_wire)
            .transpose()?;

        Ok(XrpPayment {
            amount,
            destination_x_address,
            deliver_min,
            invoice_id: wire.invoice_id.clone(),
            paths: wire.paths.iter().map(XrpPath::from).collect(),
            send_max,
        })
    }
}

impl From<&WirePath> for XrpPath {
    fn from(wire: &WirePath) -> Self {
        XrpPath {
            elements: wire.elements.iter().map(XrpPathElement::from).collect(),
        }
    }
}

impl From<&WirePathElement> for XrpPathElement {
    fn from(wire: &WirePathElement) -> Self {
        XrpPathElement {
            account: wire.account.clone(),
            currency: wire
                .currency
                .as_ref()
                .and_then(|currency| currency.name.clone()),
            issuer: wire.issuer.clone(),
        }
    }
}
