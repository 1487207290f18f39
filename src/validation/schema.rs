//! Declarative form schemas and the validator

use super::rules::{CrossFieldRule, Rule};
use super::value::{format_number, FieldValue, FormValues};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Message used when a number field holds something that is not a number
pub const DEFAULT_TYPE_MESSAGE: &str = "Please enter a number";

/// A selectable option: (stored value, display label)
pub type Choice = (&'static str, &'static str);

/// How a field is presented and which value kind it holds
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputKind {
    Text,
    TextArea,
    Email,
    Phone,
    Number,
    Checkbox,
    Select(&'static [Choice]),
    Radio(&'static [Choice]),
    MultiSelect(&'static [Choice]),
}

/// Primitive kind a field's value must have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Number,
    Bool,
    List,
}

impl InputKind {
    pub fn value_kind(&self) -> ValueKind {
        match self {
            InputKind::Number => ValueKind::Number,
            InputKind::Checkbox => ValueKind::Bool,
            InputKind::MultiSelect(_) => ValueKind::List,
            InputKind::Text
            | InputKind::TextArea
            | InputKind::Email
            | InputKind::Phone
            | InputKind::Select(_)
            | InputKind::Radio(_) => ValueKind::Text,
        }
    }

    pub fn choices(&self) -> &'static [Choice] {
        match self {
            InputKind::Select(c) | InputKind::Radio(c) | InputKind::MultiSelect(c) => c,
            _ => &[],
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, InputKind::TextArea)
    }
}

/// Declaration of one form field: presentation plus constraints
#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub input: InputKind,
    pub required: Option<String>,
    pub type_message: String,
    pub default: Option<FieldValue>,
    pub rules: Vec<Rule>,
}

impl Field {
    pub fn new(name: &'static str, label: &'static str, input: InputKind) -> Self {
        let mut rules = Vec::new();
        if let InputKind::Select(choices) | InputKind::Radio(choices) = input {
            rules.push(Rule::OneOf(
                choices.iter().map(|(v, _)| v.to_string()).collect(),
                "Please select a valid option".to_string(),
            ));
        }
        Self {
            name,
            label,
            input,
            required: None,
            type_message: DEFAULT_TYPE_MESSAGE.to_string(),
            default: None,
            rules,
        }
    }

    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, InputKind::Text)
    }

    pub fn textarea(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, InputKind::TextArea)
    }

    pub fn number(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, InputKind::Number)
    }

    pub fn checkbox(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, InputKind::Checkbox)
    }

    pub fn select(name: &'static str, label: &'static str, choices: &'static [Choice]) -> Self {
        Self::new(name, label, InputKind::Select(choices))
    }

    pub fn radio(name: &'static str, label: &'static str, choices: &'static [Choice]) -> Self {
        Self::new(name, label, InputKind::Radio(choices))
    }

    pub fn multi_select(
        name: &'static str,
        label: &'static str,
        choices: &'static [Choice],
    ) -> Self {
        Self::new(name, label, InputKind::MultiSelect(choices))
    }

    /// Mark the field required; blank values report `message`.
    /// Select and radio fields report it for unknown choices as well.
    pub fn required(mut self, message: &str) -> Self {
        self.required = Some(message.to_string());
        for rule in &mut self.rules {
            if let Rule::OneOf(_, m) = rule {
                *m = message.to_string();
            }
        }
        self
    }

    /// Keep the listed choices as suggestions but accept any text
    pub fn open_choices(mut self) -> Self {
        self.rules.retain(|rule| !matches!(rule, Rule::OneOf(..)));
        self
    }

    /// Message for a number field holding non-numeric text.
    /// Required number fields use it for blank values too.
    pub fn type_message(mut self, message: &str) -> Self {
        self.type_message = message.to_string();
        self
    }

    pub fn default_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn min_len(self, n: usize, message: &str) -> Self {
        self.rule(Rule::MinLength(n, message.to_string()))
    }

    pub fn max_len(self, n: usize, message: &str) -> Self {
        self.rule(Rule::MaxLength(n, message.to_string()))
    }

    pub fn email(self, message: &str) -> Self {
        self.rule(Rule::Email(message.to_string()))
    }

    pub fn phone(self, message: &str) -> Self {
        self.rule(Rule::Phone(message.to_string()))
    }

    pub fn min(self, min: f64, message: &str) -> Self {
        self.rule(Rule::Min(min, message.to_string()))
    }

    pub fn max(self, max: f64, message: &str) -> Self {
        self.rule(Rule::Max(max, message.to_string()))
    }

    pub fn min_items(self, n: usize, message: &str) -> Self {
        self.rule(Rule::MinItems(n, message.to_string()))
    }

    pub fn must_be_true(self, message: &str) -> Self {
        self.rule(Rule::IsTrue(message.to_string()))
    }

    pub fn is_required(&self) -> bool {
        self.required.is_some()
    }

    /// Initial value for a fresh form
    pub fn initial_value(&self) -> FieldValue {
        if let Some(ref value) = self.default {
            return value.clone();
        }
        match self.input.value_kind() {
            ValueKind::Text => FieldValue::Text(String::new()),
            ValueKind::Number => FieldValue::Null,
            ValueKind::Bool => FieldValue::Bool(false),
            ValueKind::List => FieldValue::List(Vec::new()),
        }
    }

    /// Normalize a raw value to this field's kind where that is lossless.
    /// Empty text in a number field becomes Null instead of a parse error.
    pub fn coerce(&self, value: FieldValue) -> FieldValue {
        match (self.input.value_kind(), value) {
            (ValueKind::Number, FieldValue::Text(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    FieldValue::Null
                } else {
                    match trimmed.parse::<f64>() {
                        Ok(n) if n.is_finite() => FieldValue::Number(n),
                        _ => FieldValue::Text(s),
                    }
                }
            }
            (ValueKind::Bool, FieldValue::Null) => FieldValue::Bool(false),
            (ValueKind::Bool, FieldValue::Text(s)) => match s.as_str() {
                "true" | "on" => FieldValue::Bool(true),
                "false" | "" => FieldValue::Bool(false),
                _ => FieldValue::Text(s),
            },
            (ValueKind::Text, FieldValue::Null) => FieldValue::Text(String::new()),
            (ValueKind::Text, FieldValue::Number(n)) => FieldValue::Text(format_number(n)),
            (ValueKind::List, FieldValue::Null) => FieldValue::List(Vec::new()),
            (ValueKind::List, FieldValue::Text(s)) if s.is_empty() => FieldValue::List(Vec::new()),
            (_, value) => value,
        }
    }

    /// Validate one (already coerced) value, returning the first failure
    pub fn validate(&self, value: &FieldValue) -> Option<String> {
        if value.is_blank() {
            return self.required.clone();
        }

        let kind_matches = match self.input.value_kind() {
            ValueKind::Text => value.as_text().is_some(),
            ValueKind::Number => value.as_number().is_some(),
            ValueKind::Bool => value.as_bool().is_some(),
            ValueKind::List => value.as_list().is_some(),
        };
        if !kind_matches {
            return Some(match self.input.value_kind() {
                ValueKind::Number => self.type_message.clone(),
                _ => format!("{} has an invalid value", self.label),
            });
        }

        self.rules
            .iter()
            .find_map(|rule| rule.check(value))
            .map(str::to_string)
    }
}

/// Field name to human-readable message, one message per field
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<String, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A form's declared fields and cross-field constraints
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<Field>,
    cross_rules: Vec<CrossFieldRule>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn cross_rule(mut self, rule: CrossFieldRule) -> Self {
        self.cross_rules.push(rule);
        self
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    /// A fresh record built from every field's initial value
    pub fn defaults(&self) -> FormValues {
        self.fields
            .iter()
            .map(|f| (f.name, f.initial_value()))
            .collect()
    }

    /// Coerce a value for `field`; undeclared fields pass through unchanged
    pub fn coerce(&self, field: &str, value: FieldValue) -> FieldValue {
        match self.get_field(field) {
            Some(f) => f.coerce(value),
            None => value,
        }
    }

    /// Coerce every declared field of a record, filling missing ones with Null
    pub fn normalize(&self, values: &FormValues) -> FormValues {
        let mut normalized = values.clone();
        for field in &self.fields {
            let raw = values.get(field.name).cloned().unwrap_or_default();
            normalized.set(field.name, field.coerce(raw));
        }
        normalized
    }

    /// Validate the whole record. An empty map means the record is valid.
    pub fn validate(&self, values: &FormValues) -> ErrorMap {
        let normalized = self.normalize(values);
        let mut errors = ErrorMap::new();

        for field in &self.fields {
            let value = normalized.get(field.name).cloned().unwrap_or_default();
            if let Some(message) = field.validate(&value) {
                errors.insert(field.name, message);
            }
        }

        for rule in &self.cross_rules {
            if errors.contains(rule.target) {
                continue;
            }
            if let Some(message) = rule.check(&normalized) {
                errors.insert(rule.target, message);
            }
        }

        errors
    }
}
