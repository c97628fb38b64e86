//! Form state for one bank-marketing contact.

use serde::Serialize;

use crate::domain::field::FieldName;

/// Current values of the sixteen registered fields.
///
/// Values are kept verbatim as text. No coercion, bounds check or option check
/// happens here, and the key set is fixed by the type. An empty string means
/// the field is unset. Serializes to a JSON object with the keys in registry
/// order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    age: String,
    job: String,
    marital: String,
    education: String,
    default: String,
    balance: String,
    housing: String,
    loan: String,
    contact: String,
    day: String,
    month: String,
    duration: String,
    campaign: String,
    pdays: String,
    previous: String,
    poutcome: String,
}

impl Record {
    /// Creates a record with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, name: FieldName) -> &String {
        match name {
            FieldName::Age => &self.age,
            FieldName::Job => &self.job,
            FieldName::Marital => &self.marital,
            FieldName::Education => &self.education,
            FieldName::Default => &self.default,
            FieldName::Balance => &self.balance,
            FieldName::Housing => &self.housing,
            FieldName::Loan => &self.loan,
            FieldName::Contact => &self.contact,
            FieldName::Day => &self.day,
            FieldName::Month => &self.month,
            FieldName::Duration => &self.duration,
            FieldName::Campaign => &self.campaign,
            FieldName::Pdays => &self.pdays,
            FieldName::Previous => &self.previous,
            FieldName::Poutcome => &self.poutcome,
        }
    }

    fn slot_mut(&mut self, name: FieldName) -> &mut String {
        match name {
            FieldName::Age => &mut self.age,
            FieldName::Job => &mut self.job,
            FieldName::Marital => &mut self.marital,
            FieldName::Education => &mut self.education,
            FieldName::Default => &mut self.default,
            FieldName::Balance => &mut self.balance,
            FieldName::Housing => &mut self.housing,
            FieldName::Loan => &mut self.loan,
            FieldName::Contact => &mut self.contact,
            FieldName::Day => &mut self.day,
            FieldName::Month => &mut self.month,
            FieldName::Duration => &mut self.duration,
            FieldName::Campaign => &mut self.campaign,
            FieldName::Pdays => &mut self.pdays,
            FieldName::Previous => &mut self.previous,
            FieldName::Poutcome => &mut self.poutcome,
        }
    }

    /// Replaces the value of `name`, leaving every other field untouched.
    pub fn set(&mut self, name: FieldName, value: impl Into<String>) {
        *self.slot_mut(name) = value.into();
    }

    /// Current value of `name`.
    pub fn get(&self, name: FieldName) -> &str {
        self.slot(name)
    }

    /// Copy of the full mapping as it is right now.
    #[must_use]
    pub fn snapshot(&self) -> Record {
        self.clone()
    }

    /// Iterates over `(name, value)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        FieldName::ALL
            .into_iter()
            .map(move |name| (name, self.get(name)))
    }

    /// Whether every field is still unset.
    pub fn is_blank(&self) -> bool {
        self.iter().all(|(_, value)| value.is_empty())
    }
}
