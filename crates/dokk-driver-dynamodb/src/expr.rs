use crate::value;

use aws_sdk_dynamodb::types::AttributeValue;
use dokk_core::{Condition, KeyCondition, SortCondition, Value as CoreValue};
use std::collections::HashMap;

/// Placeholders for attribute names and values referenced by an expression.
///
/// Every attribute name goes through a `#n_{i}` placeholder so that reserved
/// words (`Name`, `Status`, ...) never need special casing.
#[derive(Debug, Default)]
pub(crate) struct ExprAttrs {
    placeholders: HashMap<String, String>,
    attr_names: HashMap<String, String>,
    attr_values: HashMap<String, AttributeValue>,
}

impl ExprAttrs {
    pub(crate) fn name(&mut self, attr: &str) -> String {
        if let Some(placeholder) = self.placeholders.get(attr) {
            return placeholder.clone();
        }

        let placeholder = format!("#n_{}", self.placeholders.len());
        self.placeholders
            .insert(attr.to_string(), placeholder.clone());
        self.attr_names
            .insert(placeholder.clone(), attr.to_string());
        placeholder
    }

    pub(crate) fn value(&mut self, val: &CoreValue) -> String {
        self.ddb_value(value::to_ddb(val))
    }

    pub(crate) fn string(&mut self, val: &str) -> String {
        self.ddb_value(AttributeValue::S(val.to_string()))
    }

    fn ddb_value(&mut self, val: AttributeValue) -> String {
        let i = self.attr_values.len();
        let name = format!(":v_{i}");
        self.attr_values.insert(name.clone(), val);
        name
    }

    /// The `ExpressionAttributeNames` and `ExpressionAttributeValues` maps,
    /// each `None` when empty as the store rejects empty maps.
    pub(crate) fn into_parts(
        self,
    ) -> (
        Option<HashMap<String, String>>,
        Option<HashMap<String, AttributeValue>>,
    ) {
        let names = (!self.attr_names.is_empty()).then_some(self.attr_names);
        let values = (!self.attr_values.is_empty()).then_some(self.attr_values);
        (names, values)
    }
}

pub(crate) fn ddb_condition(attrs: &mut ExprAttrs, condition: &Condition) -> String {
    match condition {
        Condition::AttributeExists(attr) => format!("attribute_exists({})", attrs.name(attr)),
        Condition::AttributeNotExists(attr) => {
            format!("attribute_not_exists({})", attrs.name(attr))
        }
        Condition::Compare { attr, op, value } => {
            let name = attrs.name(attr);
            let value = attrs.value(value);
            format!("{name} {} {value}", op.as_str())
        }
        Condition::BeginsWith { attr, prefix } => {
            let name = attrs.name(attr);
            let prefix = attrs.string(prefix);
            format!("begins_with({name}, {prefix})")
        }
        Condition::Between { attr, low, high } => {
            let name = attrs.name(attr);
            let low = attrs.value(low);
            let high = attrs.value(high);
            format!("{name} BETWEEN {low} AND {high}")
        }
        Condition::And(operands) => ddb_join(attrs, operands, " AND "),
        Condition::Or(operands) => ddb_join(attrs, operands, " OR "),
        Condition::Not(operand) => format!("NOT ({})", ddb_condition(attrs, operand)),
    }
}

fn ddb_join(attrs: &mut ExprAttrs, operands: &[Condition], sep: &str) -> String {
    if let [operand] = operands {
        return ddb_condition(attrs, operand);
    }

    operands
        .iter()
        .map(|operand| format!("({})", ddb_condition(attrs, operand)))
        .collect::<Vec<_>>()
        .join(sep)
}

pub(crate) fn ddb_key_condition(attrs: &mut ExprAttrs, key_condition: &KeyCondition) -> String {
    let partition = attrs.name(&key_condition.partition_attr);
    let partition_value = attrs.string(&key_condition.partition_value);
    let mut expr = format!("{partition} = {partition_value}");

    let Some(sort) = &key_condition.sort else {
        return expr;
    };

    let name = attrs.name(&key_condition.sort_attr);

    let sort = match sort {
        SortCondition::Eq(v) => format!("{name} = {}", attrs.string(v)),
        SortCondition::Lt(v) => format!("{name} < {}", attrs.string(v)),
        SortCondition::Le(v) => format!("{name} <= {}", attrs.string(v)),
        SortCondition::Gt(v) => format!("{name} > {}", attrs.string(v)),
        SortCondition::Ge(v) => format!("{name} >= {}", attrs.string(v)),
        SortCondition::Between(low, high) => {
            let low = attrs.string(low);
            let high = attrs.string(high);
            format!("{name} BETWEEN {low} AND {high}")
        }
        SortCondition::BeginsWith(prefix) => {
            format!("begins_with({name}, {})", attrs.string(prefix))
        }
    };

    expr.push_str(" AND ");
    expr.push_str(&sort);
    expr
}

pub(crate) fn ddb_projection(attrs: &mut ExprAttrs, projection: Option<&[String]>) -> Option<String> {
    let projection = projection?;

    if projection.is_empty() {
        return None;
    }

    Some(
        projection
            .iter()
            .map(|attr| attrs.name(attr))
            .collect::<Vec<_>>()
            .join(", "),
    )
}
