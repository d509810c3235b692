//! Structural types for IR values.
//!
//! Types mirror the shape of values: a scalar kind, an ordered struct of
//! element types, or a function from a parameter type to a result type.
//! Identity is structural; there are no nominal types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a scalar leaf.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarKind {
    String,
    Int32,
    Bool,
}

impl ScalarKind {
    /// Stable upper-case name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::String => "STRING",
            ScalarKind::Int32 => "INT32",
            ScalarKind::Bool => "BOOL",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Function signature: one parameter, one result.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionType {
    pub parameter: Box<Type>,
    pub result: Box<Type>,
}

/// A type tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Scalar(ScalarKind),
    Struct(Vec<Type>),
    Function(FunctionType),
}

impl Type {
    pub fn string() -> Self {
        Type::Scalar(ScalarKind::String)
    }

    pub fn int32() -> Self {
        Type::Scalar(ScalarKind::Int32)
    }

    pub fn boolean() -> Self {
        Type::Scalar(ScalarKind::Bool)
    }

    pub fn structure(elements: impl IntoIterator<Item = Type>) -> Self {
        Type::Struct(elements.into_iter().collect())
    }

    pub fn function(parameter: Type, result: Type) -> Self {
        Type::Function(FunctionType {
            parameter: Box::new(parameter),
            result: Box::new(result),
        })
    }

    /// Short name of the outermost shape.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Type::Scalar(_) => "scalar",
            Type::Struct(_) => "struct",
            Type::Function(_) => "function",
        }
    }

    /// Element types if this is a struct type.
    pub fn as_struct(&self) -> Option<&[Type]> {
        match self {
            Type::Struct(elements) => Some(elements),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Scalar(kind) => write!(f, "{kind}"),
            Type::Struct(elements) => {
                f.write_str("<")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str(">")
            }
            Type::Function(func) => write!(f, "({} -> {})", func.parameter, func.result),
        }
    }
}
