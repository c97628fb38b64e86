//! Form posted by the prediction page.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::field::FieldName;
use crate::domain::record::Record;
use crate::forms::FormError;

/// Raw key/value pairs of a submitted prediction form.
///
/// Deserializes from both `application/x-www-form-urlencoded` bodies and flat
/// JSON objects with string values.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct PredictionForm(pub HashMap<String, String>);

impl TryFrom<PredictionForm> for Record {
    type Error = FormError;

    /// Builds a record from the posted pairs.
    ///
    /// Keys outside the registry are ignored and missing keys stay unset.
    /// Values are copied verbatim, except that a closed-choice field only
    /// takes one of its options.
    fn try_from(form: PredictionForm) -> Result<Self, Self::Error> {
        let mut record = Record::new();
        for (key, value) in form.0 {
            let Ok(name) = key.parse::<FieldName>() else {
                log::debug!("Ignoring unknown form key {key:?}");
                continue;
            };
            if !name.descriptor().accepts(&value) {
                return Err(FormError::InvalidChoice { field: name, value });
            }
            record.set(name, value);
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> PredictionForm {
        PredictionForm(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn copies_values_verbatim() {
        let record = Record::try_from(form(&[
            ("age", "35"),
            ("pdays", "-1"),
            ("balance", "abc"),
            ("job", "admin."),
        ]))
        .unwrap();

        assert_eq!(record.get(FieldName::Age), "35");
        assert_eq!(record.get(FieldName::Pdays), "-1");
        assert_eq!(record.get(FieldName::Balance), "abc");
        assert_eq!(record.get(FieldName::Job), "admin.");
    }

    #[test]
    fn missing_keys_stay_unset_and_unknown_keys_are_ignored() {
        let record = Record::try_from(form(&[("age", "35"), ("salary", "9000")])).unwrap();

        let serialized = serde_json::to_value(&record).unwrap();
        assert_eq!(serialized.as_object().unwrap().len(), 16);
        assert!(serialized.get("salary").is_none());
        assert_eq!(record.get(FieldName::Month), "");
    }

    #[test]
    fn rejects_value_outside_option_set() {
        let err = Record::try_from(form(&[("month", "smarch")])).unwrap_err();
        assert_eq!(
            err,
            FormError::InvalidChoice {
                field: FieldName::Month,
                value: "smarch".to_string(),
            }
        );
    }

    #[test]
    fn accepts_unset_choice() {
        let record = Record::try_from(form(&[("poutcome", "")])).unwrap();
        assert_eq!(record.get(FieldName::Poutcome), "");
    }

    #[test]
    fn deserializes_from_json_object() {
        let form: PredictionForm =
            serde_json::from_str(r#"{"age":"35","default":"no"}"#).unwrap();
        let record = Record::try_from(form).unwrap();
        assert_eq!(record.get(FieldName::Default), "no");
    }
}
