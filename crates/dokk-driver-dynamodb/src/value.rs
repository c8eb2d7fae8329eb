use aws_sdk_dynamodb::{primitives::Blob, types::AttributeValue};
use dokk_core::{Attributes, Error, Result, Value as CoreValue};
use std::collections::HashMap;

/// A dokk value on its way to or from DynamoDB.
#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a DynamoDB attribute value. Numbers decode as `I64` when they
    /// are integral and as `F64` otherwise; string, number and binary sets
    /// decode as lists.
    pub fn from_ddb(val: &AttributeValue) -> Result<Self> {
        use AttributeValue as AV;

        let value = match val {
            AV::Null(_) => CoreValue::Null,
            AV::Bool(v) => CoreValue::Bool(*v),
            AV::N(v) => parse_number(v)?,
            AV::S(v) => CoreValue::String(v.clone()),
            AV::B(v) => CoreValue::Bytes(v.as_ref().to_vec()),
            AV::Ss(v) => CoreValue::List(v.iter().cloned().map(CoreValue::String).collect()),
            AV::Ns(v) => CoreValue::List(
                v.iter()
                    .map(|n| parse_number(n))
                    .collect::<Result<Vec<_>>>()?,
            ),
            AV::Bs(v) => CoreValue::List(
                v.iter()
                    .map(|b| CoreValue::Bytes(b.as_ref().to_vec()))
                    .collect(),
            ),
            AV::L(v) => CoreValue::List(
                v.iter()
                    .map(|v| Value::from_ddb(v).map(Value::into_inner))
                    .collect::<Result<Vec<_>>>()?,
            ),
            AV::M(v) => CoreValue::Map(item_from_ddb(v)?),
            _ => {
                return Err(Error::invalid_response(format!(
                    "unsupported attribute value: {val:?}"
                )))
            }
        };

        Ok(Self(value))
    }
}

pub(crate) fn to_ddb(value: &CoreValue) -> AttributeValue {
    use AttributeValue as AV;

    match value {
        CoreValue::Null => AV::Null(true),
        CoreValue::Bool(v) => AV::Bool(*v),
        CoreValue::I64(v) => AV::N(v.to_string()),
        CoreValue::F64(v) => AV::N(v.to_string()),
        CoreValue::String(v) => AV::S(v.clone()),
        CoreValue::Bytes(v) => AV::B(Blob::new(v.clone())),
        CoreValue::List(v) => AV::L(v.iter().map(to_ddb).collect()),
        CoreValue::Map(v) => AV::M(item_to_ddb(v)),
    }
}

fn parse_number(raw: &str) -> Result<CoreValue> {
    if let Ok(v) = raw.parse::<i64>() {
        return Ok(CoreValue::I64(v));
    }

    raw.parse::<f64>()
        .map(CoreValue::F64)
        .map_err(|_| Error::invalid_response(format!("malformed number `{raw}`")))
}

pub(crate) fn item_to_ddb(item: &Attributes) -> HashMap<String, AttributeValue> {
    item.iter()
        .map(|(name, value)| (name.clone(), to_ddb(value)))
        .collect()
}

/// Attribute order is not preserved by the store, so items come back sorted
/// by attribute name.
pub(crate) fn item_from_ddb(item: &HashMap<String, AttributeValue>) -> Result<Attributes> {
    let mut names = item.keys().collect::<Vec<_>>();
    names.sort();

    names
        .into_iter()
        .map(|name| Ok((name.clone(), Value::from_ddb(&item[name])?.into_inner())))
        .collect()
}
