//! Request validation from per-type field rules.
//!
//! Each request type lists its rules in field-declaration order; every failing field is
//! reported, one line each, as `Validation error, field: <Type>.<Field>, tag: <tag>`.

use crate::error::AppError;
use std::fmt;

/// Tag reported when a required string is empty.
pub const REQUIRED: &str = "required";

pub trait Validate {
    /// Type name used as the namespace prefix in messages.
    const NAME: &'static str;

    /// Apply this type's rules, in declaration order.
    fn check(&self, rules: &mut FieldRules);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    pub namespace: String,
    pub tag: &'static str,
}

impl fmt::Display for FieldFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation error, field: {}, tag: {}", self.namespace, self.tag)
    }
}

pub struct FieldRules {
    type_name: &'static str,
    failures: Vec<FieldFailure>,
}

impl FieldRules {
    fn new(type_name: &'static str) -> Self {
        FieldRules {
            type_name,
            failures: Vec::new(),
        }
    }

    pub fn required(&mut self, field: &str, value: &str) -> &mut Self {
        if value.is_empty() {
            self.fail(field, REQUIRED);
        }
        self
    }

    /// Absent is fine; present must be non-empty.
    pub fn required_if_present(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        match value {
            Some(v) => self.required(field, v),
            None => self,
        }
    }

    fn fail(&mut self, field: &str, tag: &'static str) {
        self.failures.push(FieldFailure {
            namespace: format!("{}.{}", self.type_name, field),
            tag,
        });
    }
}

pub struct RequestValidator;

impl RequestValidator {
    pub fn failures<T: Validate>(input: &T) -> Vec<FieldFailure> {
        let mut rules = FieldRules::new(T::NAME);
        input.check(&mut rules);
        rules.failures
    }

    /// All failures joined with `\n`, as a 400.
    pub fn validate<T: Validate>(input: &T) -> Result<(), AppError> {
        let failures = Self::failures(input);
        if failures.is_empty() {
            return Ok(());
        }
        let message = failures
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        Err(AppError::BadRequest(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ticket {
        title: String,
        owner: String,
        note: Option<String>,
    }

    impl Validate for Ticket {
        const NAME: &'static str = "Ticket";

        fn check(&self, rules: &mut FieldRules) {
            rules
                .required("Title", &self.title)
                .required("Owner", &self.owner)
                .required_if_present("Note", self.note.as_deref());
        }
    }

    fn ticket(title: &str, owner: &str, note: Option<&str>) -> Ticket {
        Ticket {
            title: title.into(),
            owner: owner.into(),
            note: note.map(Into::into),
        }
    }

    #[test]
    fn passes_when_every_rule_holds() {
        assert!(RequestValidator::validate(&ticket("a", "b", None)).is_ok());
        assert!(RequestValidator::validate(&ticket("a", "b", Some("c"))).is_ok());
    }

    #[test]
    fn reports_all_failures_in_declaration_order() {
        let err = RequestValidator::validate(&ticket("", "", Some(""))).unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert_eq!(
                msg,
                "Validation error, field: Ticket.Title, tag: required\n\
                 Validation error, field: Ticket.Owner, tag: required\n\
                 Validation error, field: Ticket.Note, tag: required"
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn single_failure_has_no_newline() {
        let failures = RequestValidator::failures(&ticket("a", "", None));
        assert_eq!(failures.len(), 1);
        assert_eq!(
            failures[0].to_string(),
            "Validation error, field: Ticket.Owner, tag: required"
        );
    }

    #[test]
    fn whitespace_counts_as_present() {
        assert!(RequestValidator::failures(&ticket(" ", "x", None)).is_empty());
    }
}
