//! Registry of the sixteen fields collected for one bank-marketing contact.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::domain::types::TypeConstraintError;

/// Name of a registered field. Variants are declared in registry order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Age,
    Job,
    Marital,
    Education,
    Default,
    Balance,
    Housing,
    Loan,
    Contact,
    Day,
    Month,
    Duration,
    Campaign,
    Pdays,
    Previous,
    Poutcome,
}

impl FieldName {
    /// Every field name in registry order.
    pub const ALL: [FieldName; 16] = [
        FieldName::Age,
        FieldName::Job,
        FieldName::Marital,
        FieldName::Education,
        FieldName::Default,
        FieldName::Balance,
        FieldName::Housing,
        FieldName::Loan,
        FieldName::Contact,
        FieldName::Day,
        FieldName::Month,
        FieldName::Duration,
        FieldName::Campaign,
        FieldName::Pdays,
        FieldName::Previous,
        FieldName::Poutcome,
    ];

    /// Key used for this field in forms and JSON payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldName::Age => "age",
            FieldName::Job => "job",
            FieldName::Marital => "marital",
            FieldName::Education => "education",
            FieldName::Default => "default",
            FieldName::Balance => "balance",
            FieldName::Housing => "housing",
            FieldName::Loan => "loan",
            FieldName::Contact => "contact",
            FieldName::Day => "day",
            FieldName::Month => "month",
            FieldName::Duration => "duration",
            FieldName::Campaign => "campaign",
            FieldName::Pdays => "pdays",
            FieldName::Previous => "previous",
            FieldName::Poutcome => "poutcome",
        }
    }

    /// Position of the field in the registry.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Presentation metadata for this field.
    pub fn descriptor(self) -> &'static FieldDescriptor {
        &FIELDS[self.index()]
    }
}

impl Display for FieldName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| TypeConstraintError::UnknownField(s.to_string()))
    }
}

/// How a field is presented and which hints accompany it.
///
/// Bounds and step of [`FieldKind::Input`] are advisory: they are rendered as
/// input attributes and never enforced on submitted values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    Input {
        min: Option<i64>,
        max: Option<i64>,
        step: Option<i64>,
        helper_text: Option<&'static str>,
    },
    Choice {
        options: &'static [&'static str],
    },
}

/// Static description of one registered field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: FieldName,
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Options of a closed-choice field, `None` for free input.
    pub fn options(&self) -> Option<&'static [&'static str]> {
        match self.kind {
            FieldKind::Choice { options } => Some(options),
            FieldKind::Input { .. } => None,
        }
    }

    /// Whether `value` can be produced by this field's control.
    ///
    /// Free input accepts anything. A closed choice accepts its options and
    /// the empty "unset" value.
    pub fn accepts(&self, value: &str) -> bool {
        match self.options() {
            Some(options) => value.is_empty() || options.contains(&value),
            None => true,
        }
    }
}

const fn input(
    name: FieldName,
    label: &'static str,
    min: Option<i64>,
    max: Option<i64>,
    step: Option<i64>,
    helper_text: Option<&'static str>,
) -> FieldDescriptor {
    FieldDescriptor {
        name,
        label,
        kind: FieldKind::Input {
            min,
            max,
            step,
            helper_text,
        },
    }
}

const fn choice(
    name: FieldName,
    label: &'static str,
    options: &'static [&'static str],
) -> FieldDescriptor {
    FieldDescriptor {
        name,
        label,
        kind: FieldKind::Choice { options },
    }
}

const YES_NO: &[&str] = &["yes", "no"];

/// The field registry, indexed by [`FieldName::index`].
pub static FIELDS: [FieldDescriptor; 16] = [
    input(FieldName::Age, "Age", Some(0), None, None, None),
    choice(
        FieldName::Job,
        "Job",
        &[
            "admin.",
            "blue-collar",
            "entrepreneur",
            "housemaid",
            "management",
            "retired",
            "self-employed",
            "services",
            "student",
            "technician",
            "unemployed",
            "unknown",
        ],
    ),
    choice(
        FieldName::Marital,
        "Marital Status",
        &["divorced", "married", "single"],
    ),
    choice(
        FieldName::Education,
        "Education",
        &["unknown", "secondary", "primary", "tertiary"],
    ),
    choice(FieldName::Default, "Has Credit in Default?", YES_NO),
    input(
        FieldName::Balance,
        "Balance",
        None,
        None,
        None,
        Some("Average yearly balance in euros"),
    ),
    choice(FieldName::Housing, "Has Housing Loan?", YES_NO),
    choice(FieldName::Loan, "Has Personal Loan?", YES_NO),
    choice(
        FieldName::Contact,
        "Contact Communication Type",
        &["unknown", "telephone", "cellular"],
    ),
    input(
        FieldName::Day,
        "Day of Month",
        Some(1),
        Some(31),
        None,
        Some("Last contact day of the month"),
    ),
    choice(
        FieldName::Month,
        "Month",
        &[
            "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
        ],
    ),
    input(
        FieldName::Duration,
        "Duration",
        Some(0),
        None,
        None,
        Some("Last contact duration in seconds"),
    ),
    input(
        FieldName::Campaign,
        "Campaign",
        Some(1),
        None,
        Some(1),
        Some("Number of contacts performed during this campaign"),
    ),
    input(
        FieldName::Pdays,
        "Pdays",
        Some(-1),
        None,
        None,
        Some("Number of days since last contact (-1 means never contacted)"),
    ),
    input(
        FieldName::Previous,
        "Previous",
        Some(0),
        None,
        None,
        Some("Number of contacts before this campaign"),
    ),
    choice(
        FieldName::Poutcome,
        "Previous Outcome",
        &["unknown", "failure", "success"],
    ),
];
