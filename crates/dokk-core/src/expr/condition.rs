use crate::{Attributes, Value};
use std::cmp::Ordering;

/// A predicate the store evaluates atomically against the current item
/// before applying a write.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    AttributeExists(String),
    AttributeNotExists(String),
    Compare {
        attr: String,
        op: CompareOp,
        value: Value,
    },
    BeginsWith {
        attr: String,
        prefix: String,
    },
    Between {
        attr: String,
        low: Value,
        high: Value,
    },
    And(Vec<Condition>),
    Or(Vec<Condition>),
    Not(Box<Condition>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Condition {
    pub fn attribute_exists(attr: impl Into<String>) -> Condition {
        Condition::AttributeExists(attr.into())
    }

    pub fn attribute_not_exists(attr: impl Into<String>) -> Condition {
        Condition::AttributeNotExists(attr.into())
    }

    pub fn compare(attr: impl Into<String>, op: CompareOp, value: impl Into<Value>) -> Condition {
        Condition::Compare {
            attr: attr.into(),
            op,
            value: value.into(),
        }
    }

    pub fn eq(attr: impl Into<String>, value: impl Into<Value>) -> Condition {
        Condition::compare(attr, CompareOp::Eq, value)
    }

    pub fn ne(attr: impl Into<String>, value: impl Into<Value>) -> Condition {
        Condition::compare(attr, CompareOp::Ne, value)
    }

    pub fn lt(attr: impl Into<String>, value: impl Into<Value>) -> Condition {
        Condition::compare(attr, CompareOp::Lt, value)
    }

    pub fn le(attr: impl Into<String>, value: impl Into<Value>) -> Condition {
        Condition::compare(attr, CompareOp::Le, value)
    }

    pub fn gt(attr: impl Into<String>, value: impl Into<Value>) -> Condition {
        Condition::compare(attr, CompareOp::Gt, value)
    }

    pub fn ge(attr: impl Into<String>, value: impl Into<Value>) -> Condition {
        Condition::compare(attr, CompareOp::Ge, value)
    }

    pub fn begins_with(attr: impl Into<String>, prefix: impl Into<String>) -> Condition {
        Condition::BeginsWith {
            attr: attr.into(),
            prefix: prefix.into(),
        }
    }

    pub fn between(
        attr: impl Into<String>,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Condition {
        Condition::Between {
            attr: attr.into(),
            low: low.into(),
            high: high.into(),
        }
    }

    pub fn and(self, other: Condition) -> Condition {
        match self {
            Condition::And(mut operands) => {
                operands.push(other);
                Condition::And(operands)
            }
            this => Condition::And(vec![this, other]),
        }
    }

    pub fn or(self, other: Condition) -> Condition {
        match self {
            Condition::Or(mut operands) => {
                operands.push(other);
                Condition::Or(operands)
            }
            this => Condition::Or(vec![this, other]),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Condition {
        Condition::Not(Box::new(self))
    }

    /// Evaluates the condition against the current state of an item. A
    /// missing item behaves like an item without attributes.
    pub fn eval(&self, item: Option<&Attributes>) -> bool {
        let get = |attr: &str| item.and_then(|item| item.get(attr));

        match self {
            Condition::AttributeExists(attr) => get(attr).is_some(),
            Condition::AttributeNotExists(attr) => get(attr).is_none(),
            Condition::Compare { attr, op, value } => match get(attr) {
                Some(actual) => op.eval(actual, value),
                None => *op == CompareOp::Ne,
            },
            Condition::BeginsWith { attr, prefix } => get(attr)
                .and_then(Value::as_str)
                .map(|actual| actual.starts_with(prefix.as_str()))
                .unwrap_or(false),
            Condition::Between { attr, low, high } => get(attr)
                .map(|actual| {
                    CompareOp::Ge.eval(actual, low) && CompareOp::Le.eval(actual, high)
                })
                .unwrap_or(false),
            Condition::And(operands) => operands.iter().all(|c| c.eval(item)),
            Condition::Or(operands) => operands.iter().any(|c| c.eval(item)),
            Condition::Not(operand) => !operand.eval(item),
        }
    }
}

impl CompareOp {
    pub fn eval(self, lhs: &Value, rhs: &Value) -> bool {
        let ordering = lhs.compare(rhs);

        match self {
            CompareOp::Eq => ordering == Some(Ordering::Equal) || lhs == rhs,
            CompareOp::Ne => !(ordering == Some(Ordering::Equal) || lhs == rhs),
            CompareOp::Lt => ordering == Some(Ordering::Less),
            CompareOp::Le => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
            CompareOp::Gt => ordering == Some(Ordering::Greater),
            CompareOp::Ge => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
        }
    }

    /// The comparator as written in an expression.
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "<>",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }
}
