use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Detail field that is always required regardless of method.
pub const AMOUNT_FIELD: &str = "amount";

/// Supported settlement methods.
///
/// Each method carries a fixed, ordered list of detail fields that must be
/// filled before the draft is considered submittable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    Cash,
    BankTransfer,
    Cheque,
    MobileBanking,
    Others,
}

impl PaymentMethod {
    pub fn slug(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::BankTransfer => "bank-transfer",
            PaymentMethod::Cheque => "cheque",
            PaymentMethod::MobileBanking => "mobile-banking",
            PaymentMethod::Others => "others",
        }
    }

    /// Detail fields required for this method, in prompt order.
    ///
    /// The amount field is handled separately and never appears here.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            PaymentMethod::Cash => &[],
            PaymentMethod::BankTransfer => &["bank_name", "account_number", "reference"],
            PaymentMethod::Cheque => &["cheque_number", "bank_name"],
            PaymentMethod::MobileBanking => &["provider", "wallet_number", "reference"],
            PaymentMethod::Others => &["reference"],
        }
    }
}

/// Mapping of detail-field name to the value the user entered.
///
/// A `BTreeMap` keeps iteration and serialization order stable, so an
/// unchanged draft always assembles to an identical payload.
pub type PaymentDetails = BTreeMap<String, String>;
