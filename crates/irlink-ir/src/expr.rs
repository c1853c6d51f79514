//! Expressions found in function bodies, initializers and annotations.
//!
//! Only the shape needed to carry symbol references is modeled; evaluation
//! semantics belong to later compilation stages.

use crate::ids::SymbolId;
use crate::name::Name;
use crate::types::IrType;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ConstValue {
    Null,
    Boolean(bool),
    Int(i64),
    Double(f64),
    String(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeOperator {
    Cast,
    SafeCast,
    InstanceOf,
    NotInstanceOf,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Const(ConstValue),
    /// Read of a value parameter or local by name.
    GetValue { name: Name },
    Call {
        callee: SymbolId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        receiver: Option<Box<Expression>>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        type_arguments: Vec<IrType>,
        #[serde(default)]
        arguments: Vec<Expression>,
    },
    ConstructorCall {
        constructor: SymbolId,
        ty: IrType,
        #[serde(default)]
        arguments: Vec<Expression>,
    },
    GetProperty {
        property: SymbolId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        receiver: Option<Box<Expression>>,
    },
    SetProperty {
        property: SymbolId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        receiver: Option<Box<Expression>>,
        value: Box<Expression>,
    },
    GetEnumEntry { entry: SymbolId },
    GetObject { class: SymbolId },
    TypeOperator {
        operator: TypeOperator,
        operand: IrType,
        argument: Box<Expression>,
    },
    Block { statements: Vec<Expression> },
    Return {
        target: SymbolId,
        value: Box<Expression>,
    },
}

/// An annotation use: the annotation class plus constructor arguments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub class: SymbolId,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Expression>,
}
