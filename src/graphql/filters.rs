// SPDX-License-Identifier: AGPL-3.0-or-later

//! Translation of GraphQL filter arguments into backend query filters.
//!
//! GraphQL filters name their operators plainly (`eq`, `in`, `and`), the backend expects them
//! prefixed with `$` (`$eq`, `$in`, `$and`). Attribute names are kept as they are.
use async_graphql::indexmap::IndexMap;
use async_graphql::{Name, Value};

use crate::content_type::ContentType;
use crate::errors::FilterError;
use crate::graphql::collaborators::FilterTranslator;
use crate::graphql::constants::{
    FLAG_OPERATORS, ID_ARG, LIST_OPERATORS, LOGICAL_OPERATORS, SCALAR_OPERATORS,
};

fn is_logical_operator(key: &str) -> bool {
    LOGICAL_OPERATORS.contains(&key)
}

fn is_comparison_operator(key: &str) -> bool {
    SCALAR_OPERATORS.contains(&key)
        || FLAG_OPERATORS.contains(&key)
        || LIST_OPERATORS.contains(&key)
}

fn backend_operator(key: &str) -> Name {
    Name::new(format!("${key}"))
}

/// Filter translator following the operator conventions of the backend query layer.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultFilterTranslator;

impl DefaultFilterTranslator {
    /// Translate the operators applied to a single scalar attribute.
    fn translate_operators(&self, field: &str, value: &Value) -> Result<Value, FilterError> {
        let operators = match value {
            Value::Null => return Ok(Value::Null),
            Value::Object(operators) => operators,
            _ => return Err(FilterError::ExpectedOperators(field.to_owned())),
        };

        let mut result = IndexMap::new();
        for (operator, operand) in operators {
            let translated = match operator.as_str() {
                "and" | "or" => match operand {
                    Value::List(items) => Value::List(
                        items
                            .iter()
                            .map(|item| self.translate_operators(field, item))
                            .collect::<Result<Vec<Value>, FilterError>>()?,
                    ),
                    _ => self.translate_operators(field, operand)?,
                },
                "not" => self.translate_operators(field, operand)?,
                key if is_comparison_operator(key) => operand.clone(),
                key => return Err(FilterError::UnknownOperator(key.to_owned())),
            };

            result.insert(backend_operator(operator.as_str()), translated);
        }

        Ok(Value::Object(result))
    }

    /// Translate filters on related entities.
    ///
    /// The content type of the relation target is not known here, operator keys are translated
    /// wherever they occur and everything else is kept.
    fn translate_nested(&self, value: &Value) -> Value {
        match value {
            Value::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(key, value)| {
                        let key = if is_logical_operator(key.as_str())
                            || is_comparison_operator(key.as_str())
                        {
                            backend_operator(key.as_str())
                        } else {
                            key.clone()
                        };
                        (key, self.translate_nested(value))
                    })
                    .collect(),
            ),
            Value::List(items) => {
                Value::List(items.iter().map(|item| self.translate_nested(item)).collect())
            }
            value => value.clone(),
        }
    }
}

impl FilterTranslator for DefaultFilterTranslator {
    fn translate(
        &self,
        filters: &Value,
        content_type: &ContentType,
    ) -> Result<Value, FilterError> {
        let fields = match filters {
            Value::Null => return Ok(Value::Object(IndexMap::new())),
            Value::List(items) => {
                return items
                    .iter()
                    .map(|item| self.translate(item, content_type))
                    .collect::<Result<Vec<Value>, FilterError>>()
                    .map(Value::List)
            }
            Value::Object(fields) => fields,
            _ => return Err(FilterError::ExpectedOperators(content_type.uid().to_owned())),
        };

        let mut result = IndexMap::new();
        for (key, value) in fields {
            if is_logical_operator(key.as_str()) {
                result.insert(
                    backend_operator(key.as_str()),
                    self.translate(value, content_type)?,
                );
                continue;
            }

            let translated = match content_type.attribute(key.as_str()) {
                _ if key.as_str() == ID_ARG => self.translate_operators(ID_ARG, value)?,
                Some(attribute) if attribute.is_scalar() => {
                    self.translate_operators(key.as_str(), value)?
                }
                Some(_) => self.translate_nested(value),
                None => return Err(FilterError::UnknownField(key.to_string())),
            };

            result.insert(key.clone(), translated);
        }

        Ok(Value::Object(result))
    }
}
