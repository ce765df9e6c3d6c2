//! Typed WebIDL definition tree.
//!
//! Ownership is strictly top-down: a [`Definition`] owns its [`Member`]s,
//! which own their [`Argument`]s and [`IdlType`]s. Nothing points back up.

/// Name given to constructor operations once detected.
pub const CONSTRUCTOR_NAME: &str = "constructor";

// ============================================================================
// DEFINITIONS
// ============================================================================

/// A top-level WebIDL declaration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "lowercase")
)]
pub enum Definition {
    Interface(Interface),
    Dictionary(Dictionary),
    Enum(Enum),
    Typedef(Typedef),
    Callback(Callback),
    Implements(Implements),
}

/// Discriminant of a [`Definition`], used for logging and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    Interface,
    Dictionary,
    Enum,
    Typedef,
    Callback,
    Implements,
}

impl DefinitionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interface => "interface",
            Self::Dictionary => "dictionary",
            Self::Enum => "enum",
            Self::Typedef => "typedef",
            Self::Callback => "callback",
            Self::Implements => "implements",
        }
    }
}

impl std::fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Interface {
    pub name: String,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub partial: bool,
    /// `callback interface`
    #[cfg_attr(feature = "interchange", serde(default))]
    pub callback: bool,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub inheritance: Option<String>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub members: Vec<Member>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub ext_attrs: Vec<ExtAttr>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Dictionary {
    pub name: String,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub partial: bool,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub inheritance: Option<String>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub members: Vec<Member>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub ext_attrs: Vec<ExtAttr>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Enum {
    pub name: String,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub values: Vec<String>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub ext_attrs: Vec<ExtAttr>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Typedef {
    pub name: String,
    pub idl_type: IdlType,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub ext_attrs: Vec<ExtAttr>,
}

/// `callback Name = ReturnType (arguments);`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Callback {
    pub name: String,
    pub idl_type: IdlType,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub arguments: Vec<Argument>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub ext_attrs: Vec<ExtAttr>,
}

/// `Target implements Source;`
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Implements {
    pub target: String,
    pub implements: String,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub ext_attrs: Vec<ExtAttr>,
}

impl Definition {
    pub fn kind(&self) -> DefinitionKind {
        match self {
            Self::Interface(_) => DefinitionKind::Interface,
            Self::Dictionary(_) => DefinitionKind::Dictionary,
            Self::Enum(_) => DefinitionKind::Enum,
            Self::Typedef(_) => DefinitionKind::Typedef,
            Self::Callback(_) => DefinitionKind::Callback,
            Self::Implements(_) => DefinitionKind::Implements,
        }
    }

    /// The declared name. `implements` relations have none.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Interface(d) => Some(&d.name),
            Self::Dictionary(d) => Some(&d.name),
            Self::Enum(d) => Some(&d.name),
            Self::Typedef(d) => Some(&d.name),
            Self::Callback(d) => Some(&d.name),
            Self::Implements(_) => None,
        }
    }

    pub fn name_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::Interface(d) => Some(&mut d.name),
            Self::Dictionary(d) => Some(&mut d.name),
            Self::Enum(d) => Some(&mut d.name),
            Self::Typedef(d) => Some(&mut d.name),
            Self::Callback(d) => Some(&mut d.name),
            Self::Implements(_) => None,
        }
    }

    /// Member list of interfaces and dictionaries.
    pub fn members(&self) -> Option<&[Member]> {
        match self {
            Self::Interface(d) => Some(&d.members),
            Self::Dictionary(d) => Some(&d.members),
            _ => None,
        }
    }

    pub fn members_mut(&mut self) -> Option<&mut Vec<Member>> {
        match self {
            Self::Interface(d) => Some(&mut d.members),
            Self::Dictionary(d) => Some(&mut d.members),
            _ => None,
        }
    }

    pub fn into_members(self) -> Option<Vec<Member>> {
        match self {
            Self::Interface(d) => Some(d.members),
            Self::Dictionary(d) => Some(d.members),
            _ => None,
        }
    }

    /// Enumeration values, for enums only.
    pub fn values(&self) -> Option<&[String]> {
        match self {
            Self::Enum(d) => Some(&d.values),
            _ => None,
        }
    }

    pub fn inheritance(&self) -> Option<&str> {
        match self {
            Self::Interface(d) => d.inheritance.as_deref(),
            Self::Dictionary(d) => d.inheritance.as_deref(),
            _ => None,
        }
    }

    /// Slot holding the parent name, for kinds that can inherit.
    pub fn inheritance_mut(&mut self) -> Option<&mut Option<String>> {
        match self {
            Self::Interface(d) => Some(&mut d.inheritance),
            Self::Dictionary(d) => Some(&mut d.inheritance),
            _ => None,
        }
    }

    pub fn ext_attrs(&self) -> &[ExtAttr] {
        match self {
            Self::Interface(d) => &d.ext_attrs,
            Self::Dictionary(d) => &d.ext_attrs,
            Self::Enum(d) => &d.ext_attrs,
            Self::Typedef(d) => &d.ext_attrs,
            Self::Callback(d) => &d.ext_attrs,
            Self::Implements(d) => &d.ext_attrs,
        }
    }

    pub fn is_interface(&self) -> bool {
        matches!(self, Self::Interface(_))
    }
}

// ============================================================================
// MEMBERS
// ============================================================================

/// A member of an interface or dictionary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "lowercase")
)]
pub enum Member {
    Operation(Operation),
    Attribute(Attribute),
    Const(Const),
    Field(Field),
    Iterable(Iterable),
    Iterator(LegacyIterator),
}

impl Member {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Operation(m) => m.name.as_deref(),
            Self::Attribute(m) => Some(&m.name),
            Self::Const(m) => Some(&m.name),
            Self::Field(m) => Some(&m.name),
            Self::Iterable(_) | Self::Iterator(_) => None,
        }
    }

    pub fn as_operation(&self) -> Option<&Operation> {
        match self {
            Self::Operation(op) => Some(op),
            _ => None,
        }
    }

    pub fn as_attribute(&self) -> Option<&Attribute> {
        match self {
            Self::Attribute(attr) => Some(attr),
            _ => None,
        }
    }
}

/// Special operation keyword preceding an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Special {
    Getter,
    Setter,
    Creator,
    Deleter,
    LegacyCaller,
    Stringifier,
}

impl Special {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "getter" => Some(Self::Getter),
            "setter" => Some(Self::Setter),
            "creator" => Some(Self::Creator),
            "deleter" => Some(Self::Deleter),
            "legacycaller" => Some(Self::LegacyCaller),
            "stringifier" => Some(Self::Stringifier),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Getter => "getter",
            Self::Setter => "setter",
            Self::Creator => "creator",
            Self::Deleter => "deleter",
            Self::LegacyCaller => "legacycaller",
            Self::Stringifier => "stringifier",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Operation {
    /// Unnamed special operations (`getter any (long index)`) have no name.
    pub name: Option<String>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub special: Option<Special>,
    #[cfg_attr(feature = "interchange", serde(default, rename = "static"))]
    pub is_static: bool,
    /// Return type
    pub idl_type: IdlType,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub arguments: Vec<Argument>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub ext_attrs: Vec<ExtAttr>,
}

impl Operation {
    pub fn new(name: impl Into<String>, return_type: IdlType) -> Self {
        Self {
            name: Some(name.into()),
            special: None,
            is_static: false,
            idl_type: return_type,
            arguments: Vec::new(),
            ext_attrs: Vec::new(),
        }
    }

    pub fn is_constructor(&self) -> bool {
        self.name.as_deref() == Some(CONSTRUCTOR_NAME)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Attribute {
    pub name: String,
    pub idl_type: IdlType,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub readonly: bool,
    #[cfg_attr(feature = "interchange", serde(default, rename = "static"))]
    pub is_static: bool,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub inherit: bool,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub stringifier: bool,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub ext_attrs: Vec<ExtAttr>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, idl_type: IdlType) -> Self {
        Self {
            name: name.into(),
            idl_type,
            readonly: false,
            is_static: false,
            inherit: false,
            stringifier: false,
            ext_attrs: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Const {
    pub name: String,
    pub idl_type: IdlType,
    pub value: Value,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub ext_attrs: Vec<ExtAttr>,
}

/// Dictionary member.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Field {
    pub name: String,
    pub idl_type: IdlType,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub required: bool,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub default: Option<Value>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub ext_attrs: Vec<ExtAttr>,
}

/// `iterable<V>;` or `iterable<K, V>;`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Iterable {
    #[cfg_attr(feature = "interchange", serde(default))]
    pub key_type: Option<IdlType>,
    pub value_type: IdlType,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub ext_attrs: Vec<ExtAttr>,
}

/// Legacy `Type iterator;`, `Type iterator object;` or
/// `Type iterator = IteratorName;` member.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct LegacyIterator {
    pub idl_type: IdlType,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub object: bool,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub iterator_object: Option<String>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub ext_attrs: Vec<ExtAttr>,
}

// ============================================================================
// TYPES, ARGUMENTS, EXTENDED ATTRIBUTES
// ============================================================================

/// A (possibly composite) type reference.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct IdlType {
    pub body: TypeBody,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub nullable: bool,
    /// Number of trailing `[]`
    #[cfg_attr(feature = "interchange", serde(default))]
    pub array: u32,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub ext_attrs: Vec<ExtAttr>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum TypeBody {
    /// Primitive or named type, e.g. `unsigned long` or `Node`.
    Named(String),
    /// `sequence<T>`, `Promise<T>`, `record<K, V>`, ...
    Generic { name: String, args: Vec<IdlType> },
    /// `(A or B)`
    Union(Vec<IdlType>),
}

impl IdlType {
    pub fn named(name: impl Into<String>) -> Self {
        Self::from_body(TypeBody::Named(name.into()))
    }

    pub fn generic(name: impl Into<String>, args: Vec<IdlType>) -> Self {
        Self::from_body(TypeBody::Generic {
            name: name.into(),
            args,
        })
    }

    pub fn union(members: Vec<IdlType>) -> Self {
        Self::from_body(TypeBody::Union(members))
    }

    fn from_body(body: TypeBody) -> Self {
        Self {
            body,
            nullable: false,
            array: 0,
            ext_attrs: Vec::new(),
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// The plain type name, when this type is not composite.
    pub fn name(&self) -> Option<&str> {
        match &self.body {
            TypeBody::Named(name) => Some(name),
            _ => None,
        }
    }

    pub fn name_mut(&mut self) -> Option<&mut String> {
        match &mut self.body {
            TypeBody::Named(name) => Some(name),
            _ => None,
        }
    }

    pub fn generic_name(&self) -> Option<&str> {
        match &self.body {
            TypeBody::Generic { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_sequence(&self) -> bool {
        self.generic_name() == Some("sequence")
    }

    pub fn is_union(&self) -> bool {
        matches!(self.body, TypeBody::Union(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Argument {
    pub name: String,
    pub idl_type: IdlType,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub optional: bool,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub variadic: bool,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub default: Option<Value>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub ext_attrs: Vec<ExtAttr>,
}

impl Argument {
    pub fn new(name: impl Into<String>, idl_type: IdlType) -> Self {
        Self {
            name: name.into(),
            idl_type,
            optional: false,
            variadic: false,
            default: None,
            ext_attrs: Vec::new(),
        }
    }
}

/// `[Name]`, `[Name=Value]`, `[Name(args)]` or `[Name=Ident(args)]`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ExtAttr {
    pub name: String,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub rhs: Option<ExtAttrRhs>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub arguments: Option<Vec<Argument>>,
}

impl ExtAttr {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rhs: None,
            arguments: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum ExtAttrRhs {
    Identifier(String),
    IdentifierList(Vec<String>),
    /// String or numeric literal, kept as written.
    Literal(String),
}

/// Constant and default values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Value {
    /// String literal contents without quotes.
    String(String),
    /// Numeric literal as written.
    Number(String),
    Boolean(bool),
    Null,
    EmptySequence,
    EmptyDictionary,
    Infinity,
    NegativeInfinity,
    NaN,
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => write!(f, "\"{}\"", s),
            Self::Number(n) => f.write_str(n),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Null => f.write_str("null"),
            Self::EmptySequence => f.write_str("[]"),
            Self::EmptyDictionary => f.write_str("{}"),
            Self::Infinity => f.write_str("Infinity"),
            Self::NegativeInfinity => f.write_str("-Infinity"),
            Self::NaN => f.write_str("NaN"),
        }
    }
}
