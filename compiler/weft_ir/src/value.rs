//! IR value trees.
//!
//! A [`Value`] is an immutable, freely clonable tree. Each node has a
//! [`ValueKind`] (the shape), an optional label, and an optional [`Type`]
//! annotation. The annotation is written at most once: later writers must
//! go through [`Value::verify_or_set_type`], which runs a caller-supplied
//! equality check instead of overwriting.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ty::Type;

/// Scalar leaf payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scalar {
    Str(String),
    Int32(i32),
    Bool(bool),
}

/// Projection of one element out of a struct-valued source.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub source: Box<Value>,
    /// Negative on malformed input; inference rejects it.
    pub index: i32,
}

/// Application of a function to a single (usually struct) argument.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Call {
    pub function: Box<Value>,
    pub argument: Box<Value>,
}

/// Descriptor of a primitive operation.
///
/// `static_parameter` is compile-time configuration, distinct from the
/// dynamic argument supplied per call.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Intrinsic {
    pub uri: String,
    pub static_parameter: Option<Box<Value>>,
}

impl Intrinsic {
    pub fn new(uri: impl Into<String>, static_parameter: Option<Value>) -> Self {
        Intrinsic {
            uri: uri.into(),
            static_parameter: static_parameter.map(Box::new),
        }
    }

    #[inline]
    pub fn static_parameter(&self) -> Option<&Value> {
        self.static_parameter.as_deref()
    }
}

/// Shape of a value node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Scalar(Scalar),
    Struct(Vec<Value>),
    Selection(Selection),
    Call(Call),
    Reference(String),
    Intrinsic(Intrinsic),
}

impl ValueKind {
    /// Short name of the shape, for diagnostics.
    pub fn shape_name(&self) -> &'static str {
        match self {
            ValueKind::Scalar(Scalar::Str(_)) => "str",
            ValueKind::Scalar(Scalar::Int32(_)) => "int_32",
            ValueKind::Scalar(Scalar::Bool(_)) => "boolean",
            ValueKind::Struct(_) => "struct",
            ValueKind::Selection(_) => "selection",
            ValueKind::Call(_) => "call",
            ValueKind::Reference(_) => "reference",
            ValueKind::Intrinsic(_) => "intrinsic",
        }
    }
}

/// An IR node.
///
/// Field order is part of the canonical encoding; do not reorder.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Value {
    kind: ValueKind,
    label: Option<String>,
    ty: Option<Type>,
}

impl Value {
    pub fn new(kind: ValueKind) -> Self {
        Value {
            kind,
            label: None,
            ty: None,
        }
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::new(ValueKind::Scalar(Scalar::Str(s.into())))
    }

    pub fn int32(i: i32) -> Self {
        Value::new(ValueKind::Scalar(Scalar::Int32(i)))
    }

    pub fn boolean(b: bool) -> Self {
        Value::new(ValueKind::Scalar(Scalar::Bool(b)))
    }

    pub fn structure(elements: impl IntoIterator<Item = Value>) -> Self {
        Value::new(ValueKind::Struct(elements.into_iter().collect()))
    }

    pub fn selection(source: Value, index: i32) -> Self {
        Value::new(ValueKind::Selection(Selection {
            source: Box::new(source),
            index,
        }))
    }

    pub fn call(function: Value, argument: Value) -> Self {
        Value::new(ValueKind::Call(Call {
            function: Box::new(function),
            argument: Box::new(argument),
        }))
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Value::new(ValueKind::Reference(name.into()))
    }

    pub fn intrinsic(uri: impl Into<String>, static_parameter: Option<Value>) -> Self {
        Value::new(ValueKind::Intrinsic(Intrinsic::new(uri, static_parameter)))
    }

    /// Attach a label (named struct element / static parameter).
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Preset the type annotation on a freshly built node.
    ///
    /// # Panics
    /// Debug builds panic if the node is already annotated; use
    /// [`Value::verify_or_set_type`] for that case.
    #[must_use]
    pub fn with_type(mut self, ty: Type) -> Self {
        debug_assert!(self.ty.is_none(), "type annotation is write-once");
        self.ty = Some(ty);
        self
    }

    #[inline]
    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    #[inline]
    pub fn kind_mut(&mut self) -> &mut ValueKind {
        &mut self.kind
    }

    #[inline]
    pub fn into_kind(self) -> ValueKind {
        self.kind
    }

    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[inline]
    pub fn ty(&self) -> Option<&Type> {
        self.ty.as_ref()
    }

    /// Record `ty` as this node's type.
    ///
    /// An empty annotation is set. An existing one is never overwritten:
    /// `verify(existing, &ty)` decides, and its error is returned as is.
    pub fn verify_or_set_type(
        &mut self,
        ty: Type,
        verify: impl FnOnce(&Type, &Type) -> Result<()>,
    ) -> Result<()> {
        match &self.ty {
            None => {
                self.ty = Some(ty);
                Ok(())
            }
            Some(existing) => verify(existing, &ty),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.kind {
            ValueKind::Scalar(Scalar::Bool(b)) => Some(b),
            _ => None,
        }
    }

    pub fn as_int32(&self) -> Option<i32> {
        match self.kind {
            ValueKind::Scalar(Scalar::Int32(i)) => Some(i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            ValueKind::Scalar(Scalar::Str(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&[Value]> {
        match &self.kind {
            ValueKind::Struct(elements) => Some(elements),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<&str> {
        match &self.kind {
            ValueKind::Reference(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_intrinsic(&self) -> Option<&Intrinsic> {
        match &self.kind {
            ValueKind::Intrinsic(intrinsic) => Some(intrinsic),
            _ => None,
        }
    }

    #[inline]
    pub fn is_reference(&self) -> bool {
        matches!(self.kind, ValueKind::Reference(_))
    }

    /// Find a struct element by label.
    pub fn field(&self, label: &str) -> Option<&Value> {
        self.as_struct()?
            .iter()
            .find(|element| element.label() == Some(label))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::boolean(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::int32(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = &self.label {
            write!(f, "{label}=")?;
        }
        match &self.kind {
            ValueKind::Scalar(Scalar::Str(s)) => write!(f, "{s:?}"),
            ValueKind::Scalar(Scalar::Int32(i)) => write!(f, "{i}"),
            ValueKind::Scalar(Scalar::Bool(b)) => write!(f, "{b}"),
            ValueKind::Struct(elements) => {
                f.write_str("<")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str(">")
            }
            ValueKind::Selection(sel) => write!(f, "{}[{}]", sel.source, sel.index),
            ValueKind::Call(call) => write!(f, "{}({})", call.function, call.argument),
            ValueKind::Reference(name) => f.write_str(name),
            ValueKind::Intrinsic(intrinsic) => match intrinsic.static_parameter() {
                Some(param) => write!(f, "{}{{{param}}}", intrinsic.uri),
                None => f.write_str(&intrinsic.uri),
            },
        }
    }
}
