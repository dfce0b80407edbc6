//! Operator vocabulary.
//!
//! Every source-level operator is resolved at runtime by looking up a
//! conventional member name in the receiver's method table. This module
//! is the single place that fixes those names.

/// Conventional member names resolved by the dispatch core.
pub mod member {
    pub const UNARY_PLUS: &str = "__unary_plus__";
    pub const UNARY_MINUS: &str = "__unary_minus__";
    pub const UNARY_NEGATE: &str = "__unary_negate__";
    pub const UNARY_COMPL: &str = "__unary_compl__";

    pub const MULTIPLY: &str = "__multiply__";
    pub const DIVIDE: &str = "__divide__";
    pub const MODULO: &str = "__modulo__";
    pub const INT_DIVIDE: &str = "__int_divide__";
    pub const ADD: &str = "__add__";
    pub const SUB: &str = "__sub__";
    pub const RANGE: &str = "__range__";
    pub const INCRANGE: &str = "__incrange__";
    pub const EQUALS: &str = "__equals__";
    pub const NOT_EQUALS: &str = "__not_equals__";
    pub const LESS: &str = "__less__";
    pub const GREATER: &str = "__greater__";
    pub const LESS_EQUALS: &str = "__less_equals__";
    pub const GREATER_EQUALS: &str = "__greater_equals__";
    pub const AND: &str = "__and__";
    pub const OR: &str = "__or__";
    pub const XOR: &str = "__xor__";

    pub const ASSIGN_PLUS: &str = "__assign_plus__";
    pub const ASSIGN_MINUS: &str = "__assign_minus__";
    pub const ASSIGN_MULTIPLY: &str = "__assign_multiply__";
    pub const ASSIGN_DIVIDE: &str = "__assign_divide__";
    pub const ASSIGN_INT_DIVIDE: &str = "__assign_int_divide__";
    pub const ASSIGN_MODULO: &str = "__assign_modulo__";

    pub const CALL: &str = "__call__";
    pub const NEW: &str = "new";
    pub const TO_STRING: &str = "to_string";
    pub const NAME: &str = "name";
    pub const IS_SUBCLASS: &str = "is_subclass";

    /// Every name above, pre-interned by the global interner.
    pub const ALL: [&str; 32] = [
        UNARY_PLUS,
        UNARY_MINUS,
        UNARY_NEGATE,
        UNARY_COMPL,
        MULTIPLY,
        DIVIDE,
        MODULO,
        INT_DIVIDE,
        ADD,
        SUB,
        RANGE,
        INCRANGE,
        EQUALS,
        NOT_EQUALS,
        LESS,
        GREATER,
        LESS_EQUALS,
        GREATER_EQUALS,
        AND,
        OR,
        XOR,
        ASSIGN_PLUS,
        ASSIGN_MINUS,
        ASSIGN_MULTIPLY,
        ASSIGN_DIVIDE,
        ASSIGN_INT_DIVIDE,
        ASSIGN_MODULO,
        CALL,
        NEW,
        TO_STRING,
        NAME,
        IS_SUBCLASS,
    ];
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Plus,
    Minus,
    Negate,
    Complement,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 4] = [Self::Plus, Self::Minus, Self::Negate, Self::Complement];

    /// Member name this operator resolves in the receiver's table.
    pub const fn member_name(self) -> &'static str {
        match self {
            Self::Plus => member::UNARY_PLUS,
            Self::Minus => member::UNARY_MINUS,
            Self::Negate => member::UNARY_NEGATE,
            Self::Complement => member::UNARY_COMPL,
        }
    }

    /// Source-level symbol, used in diagnostics.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Negate => "!",
            Self::Complement => "~",
        }
    }
}

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Mul,
    Div,
    Mod,
    IntDiv,
    Add,
    Sub,

    // Ranges
    Range,
    RangeInclusive,

    // Comparison
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Logical
    And,
    Or,
    Xor,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 17] = [
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::IntDiv,
        Self::Add,
        Self::Sub,
        Self::Range,
        Self::RangeInclusive,
        Self::Eq,
        Self::NotEq,
        Self::Lt,
        Self::Gt,
        Self::LtEq,
        Self::GtEq,
        Self::And,
        Self::Or,
        Self::Xor,
    ];

    /// Member name this operator resolves in the left operand's table.
    pub const fn member_name(self) -> &'static str {
        match self {
            Self::Mul => member::MULTIPLY,
            Self::Div => member::DIVIDE,
            Self::Mod => member::MODULO,
            Self::IntDiv => member::INT_DIVIDE,
            Self::Add => member::ADD,
            Self::Sub => member::SUB,
            Self::Range => member::RANGE,
            Self::RangeInclusive => member::INCRANGE,
            Self::Eq => member::EQUALS,
            Self::NotEq => member::NOT_EQUALS,
            Self::Lt => member::LESS,
            Self::Gt => member::GREATER,
            Self::LtEq => member::LESS_EQUALS,
            Self::GtEq => member::GREATER_EQUALS,
            Self::And => member::AND,
            Self::Or => member::OR,
            Self::Xor => member::XOR,
        }
    }

    /// Source-level symbol, used in diagnostics.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::IntDiv => "//",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Range => "..",
            Self::RangeInclusive => "...",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::And => "&&",
            Self::Or => "||",
            Self::Xor => "^^",
        }
    }
}

/// Compound assignment operators.
///
/// These mutate the receiver's native scalar in place and yield None.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AssignOp {
    Add,
    Sub,
    Mul,
    Div,
    IntDiv,
    Mod,
}

impl AssignOp {
    pub const ALL: [AssignOp; 6] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::IntDiv,
        Self::Mod,
    ];

    /// Member name this operator resolves in the target's table.
    pub const fn member_name(self) -> &'static str {
        match self {
            Self::Add => member::ASSIGN_PLUS,
            Self::Sub => member::ASSIGN_MINUS,
            Self::Mul => member::ASSIGN_MULTIPLY,
            Self::Div => member::ASSIGN_DIVIDE,
            Self::IntDiv => member::ASSIGN_INT_DIVIDE,
            Self::Mod => member::ASSIGN_MODULO,
        }
    }

    /// Source-level symbol, used in diagnostics.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+=",
            Self::Sub => "-=",
            Self::Mul => "*=",
            Self::Div => "/=",
            Self::IntDiv => "//=",
            Self::Mod => "%=",
        }
    }
}
