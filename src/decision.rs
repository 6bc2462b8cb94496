use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::AgeRejection;

/// outcome of a loan request, immutable once built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    outcome: Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Approved { amount: Money, period_months: u32 },
    Rejected(AgeRejection),
}

impl Decision {
    pub(crate) fn approved(amount: Money, period_months: u32) -> Self {
        Self {
            outcome: Outcome::Approved {
                amount,
                period_months,
            },
        }
    }

    pub(crate) fn rejected(reason: AgeRejection) -> Self {
        Self {
            outcome: Outcome::Rejected(reason),
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self.outcome, Outcome::Approved { .. })
    }

    pub fn loan_amount(&self) -> Option<Money> {
        match self.outcome {
            Outcome::Approved { amount, .. } => Some(amount),
            Outcome::Rejected(_) => None,
        }
    }

    pub fn loan_period(&self) -> Option<u32> {
        match self.outcome {
            Outcome::Approved { period_months, .. } => Some(period_months),
            Outcome::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<AgeRejection> {
        match self.outcome {
            Outcome::Approved { .. } => None,
            Outcome::Rejected(reason) => Some(reason),
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.rejection().map(|reason| reason.to_string())
    }

    pub fn view(&self) -> DecisionView {
        DecisionView::from_decision(self)
    }
}

/// serializable view of a decision in the public response shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionView {
    pub loan_amount: Option<i64>,
    pub loan_period: Option<u32>,
    pub error_message: Option<String>,
}

impl DecisionView {
    pub fn from_decision(decision: &Decision) -> Self {
        DecisionView {
            loan_amount: decision.loan_amount().and_then(|amount| amount.to_major()),
            loan_period: decision.loan_period(),
            error_message: decision.error_message(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
