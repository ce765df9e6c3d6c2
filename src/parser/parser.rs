//! Recursive descent parser for WebIDL
//!
//! Builds the typed definition tree directly from tokens. Parsing stops at
//! the first syntax error.

use super::errors::ParseError;
use super::lexer::{Lexer, Token, TokenKind};
use crate::base::{LineIndex, TextRange, TextSize};
use crate::syntax::ast::{
    Argument, Attribute, Callback, Const, Definition, Dictionary, Enum, ExtAttr, ExtAttrRhs,
    Field, IdlType, Implements, Interface, Iterable, LegacyIterator, Member, Operation, Special,
    TypeBody, Typedef, Value,
};

type PResult<T> = Result<T, ParseError>;

/// Parser collaborator of the rewrite pipeline.
pub trait IdlParser {
    fn parse(&self, source: &str) -> Result<Vec<Definition>, ParseError>;
}

/// Default [`IdlParser`] for WebIDL text.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebIdlParser;

impl IdlParser for WebIdlParser {
    fn parse(&self, source: &str) -> Result<Vec<Definition>, ParseError> {
        parse(source)
    }
}

/// Parse WebIDL source into its top-level definitions.
pub fn parse(input: &str) -> PResult<Vec<Definition>> {
    let tokens: Vec<_> = Lexer::new(input)
        .filter(|t| !t.kind.is_trivia())
        .collect();
    let mut parser = Parser::new(input, &tokens);
    parser.parse_definitions()
}

/// Primitive type words that may be followed by more words.
const MULTI_WORD_PREFIXES: &[&str] = &["unsigned", "unrestricted", "long"];

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    source_len: TextSize,
    line_index: LineIndex,
}

impl<'a> Parser<'a> {
    fn new(source: &str, tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            source_len: TextSize::of(source),
            line_index: LineIndex::new(source),
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    fn at_keyword(&self, keyword: &str) -> bool {
        self.current()
            .map(|t| t.kind == TokenKind::Ident && t.text == keyword)
            .unwrap_or(false)
    }

    fn nth_is_keyword(&self, n: usize, keyword: &str) -> bool {
        self.tokens
            .get(self.pos + n)
            .map(|t| t.kind == TokenKind::Ident && t.text == keyword)
            .unwrap_or(false)
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) -> &'a str {
        let text = self.tokens.get(self.pos).map(|t| t.text).unwrap_or("");
        self.pos += 1;
        text
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.at_keyword(keyword) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> PResult<&'a str> {
        if self.at(kind) {
            Ok(self.bump())
        } else {
            Err(self.error(format!("expected {}", kind.describe())))
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> PResult<()> {
        if self.eat_keyword(keyword) {
            Ok(())
        } else {
            Err(self.error(format!("expected '{}'", keyword)))
        }
    }

    fn expect_ident(&mut self) -> PResult<String> {
        self.expect(TokenKind::Ident).map(str::to_string)
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&self, message: impl Into<String>) -> ParseError {
        let (range, found) = match self.current() {
            Some(t) => (
                TextRange::at(t.offset, TextSize::of(t.text)),
                format!("'{}'", t.text),
            ),
            None => (TextRange::empty(self.source_len), "end of input".to_string()),
        };
        let message = format!("{}, found {}", message.into(), found);
        ParseError::new(message, range, self.line_index.line_col(range.start()))
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn parse_definitions(&mut self) -> PResult<Vec<Definition>> {
        let mut definitions = Vec::new();
        while !self.at_eof() {
            let ext_attrs = self.parse_ext_attrs()?;
            definitions.push(self.parse_definition(ext_attrs)?);
        }
        Ok(definitions)
    }

    fn parse_definition(&mut self, ext_attrs: Vec<ExtAttr>) -> PResult<Definition> {
        if self.eat_keyword("callback") {
            if self.eat_keyword("interface") {
                return self.parse_interface(ext_attrs, false, true);
            }
            return self.parse_callback(ext_attrs);
        }
        if self.eat_keyword("partial") {
            if self.eat_keyword("interface") {
                return self.parse_interface(ext_attrs, true, false);
            }
            if self.eat_keyword("dictionary") {
                return self.parse_dictionary(ext_attrs, true);
            }
            return Err(self.error("expected 'interface' or 'dictionary' after 'partial'"));
        }
        if self.eat_keyword("interface") {
            return self.parse_interface(ext_attrs, false, false);
        }
        if self.eat_keyword("dictionary") {
            return self.parse_dictionary(ext_attrs, false);
        }
        if self.eat_keyword("enum") {
            return self.parse_enum(ext_attrs);
        }
        if self.eat_keyword("typedef") {
            return self.parse_typedef(ext_attrs);
        }
        if self.at(TokenKind::Ident) && self.nth_is_keyword(1, "implements") {
            let target = self.expect_ident()?;
            self.expect_keyword("implements")?;
            let implements = self.expect_ident()?;
            self.expect(TokenKind::Semicolon)?;
            return Ok(Definition::Implements(Implements {
                target,
                implements,
                ext_attrs,
            }));
        }
        Err(self.error("expected definition"))
    }

    fn parse_inheritance(&mut self) -> PResult<Option<String>> {
        if self.eat(TokenKind::Colon) {
            Ok(Some(self.expect_ident()?))
        } else {
            Ok(None)
        }
    }

    fn parse_interface(
        &mut self,
        ext_attrs: Vec<ExtAttr>,
        partial: bool,
        callback: bool,
    ) -> PResult<Definition> {
        let name = self.expect_ident()?;
        let inheritance = self.parse_inheritance()?;
        self.expect(TokenKind::LBrace)?;
        let mut members = Vec::new();
        while !self.eat(TokenKind::RBrace) {
            if self.at_eof() {
                return Err(self.error(format!("unclosed interface '{}'", name)));
            }
            members.push(self.parse_interface_member()?);
        }
        self.expect(TokenKind::Semicolon)?;
        Ok(Definition::Interface(Interface {
            name,
            partial,
            callback,
            inheritance,
            members,
            ext_attrs,
        }))
    }

    fn parse_dictionary(&mut self, ext_attrs: Vec<ExtAttr>, partial: bool) -> PResult<Definition> {
        let name = self.expect_ident()?;
        let inheritance = self.parse_inheritance()?;
        self.expect(TokenKind::LBrace)?;
        let mut members = Vec::new();
        while !self.eat(TokenKind::RBrace) {
            if self.at_eof() {
                return Err(self.error(format!("unclosed dictionary '{}'", name)));
            }
            members.push(self.parse_dictionary_member()?);
        }
        self.expect(TokenKind::Semicolon)?;
        Ok(Definition::Dictionary(Dictionary {
            name,
            partial,
            inheritance,
            members,
            ext_attrs,
        }))
    }

    fn parse_enum(&mut self, ext_attrs: Vec<ExtAttr>) -> PResult<Definition> {
        let name = self.expect_ident()?;
        self.expect(TokenKind::LBrace)?;
        let mut values = Vec::new();
        while !self.at(TokenKind::RBrace) {
            let literal = self.expect(TokenKind::String)?;
            values.push(unquote(literal).to_string());
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RBrace)?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Definition::Enum(Enum {
            name,
            values,
            ext_attrs,
        }))
    }

    fn parse_typedef(&mut self, ext_attrs: Vec<ExtAttr>) -> PResult<Definition> {
        let idl_type = self.parse_type()?;
        let name = self.expect_ident()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Definition::Typedef(Typedef {
            name,
            idl_type,
            ext_attrs,
        }))
    }

    fn parse_callback(&mut self, ext_attrs: Vec<ExtAttr>) -> PResult<Definition> {
        let name = self.expect_ident()?;
        self.expect(TokenKind::Eq)?;
        let idl_type = self.parse_type()?;
        let arguments = self.parse_arguments()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Definition::Callback(Callback {
            name,
            idl_type,
            arguments,
            ext_attrs,
        }))
    }

    // =========================================================================
    // Members
    // =========================================================================

    fn parse_interface_member(&mut self) -> PResult<Member> {
        let ext_attrs = self.parse_ext_attrs()?;

        if self.eat_keyword("const") {
            let idl_type = self.parse_type()?;
            let name = self.expect_ident()?;
            self.expect(TokenKind::Eq)?;
            let value = self.parse_value()?;
            self.expect(TokenKind::Semicolon)?;
            return Ok(Member::Const(Const {
                name,
                idl_type,
                value,
                ext_attrs,
            }));
        }

        if self.eat_keyword("iterable") {
            self.expect(TokenKind::Lt)?;
            let first = self.parse_type()?;
            let (key_type, value_type) = if self.eat(TokenKind::Comma) {
                (Some(first), self.parse_type()?)
            } else {
                (None, first)
            };
            self.expect(TokenKind::Gt)?;
            self.expect(TokenKind::Semicolon)?;
            return Ok(Member::Iterable(Iterable {
                key_type,
                value_type,
                ext_attrs,
            }));
        }

        let is_static = self.eat_keyword("static");
        let stringifier = self.eat_keyword("stringifier");
        let inherit = self.eat_keyword("inherit");
        let readonly = self.eat_keyword("readonly");

        if self.eat_keyword("attribute") {
            let idl_type = self.parse_type()?;
            let name = self.expect_ident()?;
            self.expect(TokenKind::Semicolon)?;
            return Ok(Member::Attribute(Attribute {
                name,
                idl_type,
                readonly,
                is_static,
                inherit,
                stringifier,
                ext_attrs,
            }));
        }
        if inherit || readonly {
            return Err(self.error("expected 'attribute'"));
        }

        let mut special = stringifier.then_some(Special::Stringifier);
        while let Some(keyword) = self.current().and_then(|t| Special::from_keyword(t.text)) {
            self.bump();
            special.get_or_insert(keyword);
        }

        let idl_type = self.parse_type()?;

        if self.eat_keyword("iterator") {
            let mut iterator = LegacyIterator {
                idl_type,
                object: false,
                iterator_object: None,
                ext_attrs,
            };
            if self.eat_keyword("object") {
                iterator.object = true;
            } else if self.eat(TokenKind::Eq) {
                iterator.iterator_object = Some(self.expect_ident()?);
            }
            self.expect(TokenKind::Semicolon)?;
            return Ok(Member::Iterator(iterator));
        }

        let mut idl_type = idl_type;
        let name = if self.at(TokenKind::Ident) {
            Some(self.expect_ident()?)
        } else if special.is_none() && is_bare_name(&idl_type) {
            // `Foo();` declares an operation named after its interface.
            let name = idl_type.name().map(str::to_string);
            idl_type = IdlType::named("void");
            name
        } else {
            None
        };
        let arguments = self.parse_arguments()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Member::Operation(Operation {
            name,
            special,
            is_static,
            idl_type,
            arguments,
            ext_attrs,
        }))
    }

    fn parse_dictionary_member(&mut self) -> PResult<Member> {
        let ext_attrs = self.parse_ext_attrs()?;
        let required = self.eat_keyword("required");
        let idl_type = self.parse_type()?;
        let name = self.expect_ident()?;
        let default = if self.eat(TokenKind::Eq) {
            Some(self.parse_value()?)
        } else {
            None
        };
        self.expect(TokenKind::Semicolon)?;
        Ok(Member::Field(Field {
            name,
            idl_type,
            required,
            default,
            ext_attrs,
        }))
    }

    fn parse_arguments(&mut self) -> PResult<Vec<Argument>> {
        self.expect(TokenKind::LParen)?;
        let mut arguments = Vec::new();
        while !self.at(TokenKind::RParen) {
            arguments.push(self.parse_argument()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(arguments)
    }

    fn parse_argument(&mut self) -> PResult<Argument> {
        let ext_attrs = self.parse_ext_attrs()?;
        let optional = self.eat_keyword("optional");
        let idl_type = self.parse_type()?;
        let variadic = self.eat(TokenKind::Ellipsis);
        let name = self.expect_ident()?;
        let default = if self.eat(TokenKind::Eq) {
            Some(self.parse_value()?)
        } else {
            None
        };
        Ok(Argument {
            name,
            idl_type,
            optional,
            variadic,
            default,
            ext_attrs,
        })
    }

    // =========================================================================
    // Types
    // =========================================================================

    fn parse_type(&mut self) -> PResult<IdlType> {
        let ext_attrs = self.parse_ext_attrs()?;

        let body = if self.eat(TokenKind::LParen) {
            let mut members = vec![self.parse_type()?];
            while self.eat_keyword("or") {
                members.push(self.parse_type()?);
            }
            self.expect(TokenKind::RParen)?;
            TypeBody::Union(members)
        } else {
            let name = self.parse_type_name()?;
            if self.eat(TokenKind::Lt) {
                let mut args = vec![self.parse_type()?];
                while self.eat(TokenKind::Comma) {
                    args.push(self.parse_type()?);
                }
                self.expect(TokenKind::Gt)?;
                TypeBody::Generic { name, args }
            } else {
                TypeBody::Named(name)
            }
        };

        let mut ty = IdlType {
            body,
            nullable: false,
            array: 0,
            ext_attrs,
        };
        loop {
            if self.eat(TokenKind::Question) {
                ty.nullable = true;
            } else if self.at(TokenKind::LBracket) {
                self.bump();
                self.expect(TokenKind::RBracket)?;
                ty.array += 1;
            } else {
                break;
            }
        }
        Ok(ty)
    }

    /// A single identifier, or a multi-word primitive such as
    /// `unsigned long long` or `unrestricted double`.
    fn parse_type_name(&mut self) -> PResult<String> {
        let first = self.expect_ident()?;
        if !MULTI_WORD_PREFIXES.contains(&first.as_str()) {
            return Ok(first);
        }
        let mut words = vec![first];
        if words[0] != "long" {
            words.push(self.expect_ident()?);
        }
        if words.last().map(String::as_str) == Some("long") && self.at_keyword("long") {
            self.bump();
            words.push("long".to_string());
        }
        Ok(words.join(" "))
    }

    // =========================================================================
    // Values and extended attributes
    // =========================================================================

    fn parse_value(&mut self) -> PResult<Value> {
        let Some((kind, text)) = self.current().map(|t| (t.kind, t.text)) else {
            return Err(self.error("expected value"));
        };
        let value = match kind {
            TokenKind::String => Value::String(unquote(text).to_string()),
            TokenKind::Integer | TokenKind::Float => Value::Number(text.to_string()),
            TokenKind::Ident => match text {
                "true" => Value::Boolean(true),
                "false" => Value::Boolean(false),
                "null" => Value::Null,
                "Infinity" => Value::Infinity,
                "NaN" => Value::NaN,
                _ => return Err(self.error("expected value")),
            },
            TokenKind::Minus if self.nth_is_keyword(1, "Infinity") => {
                self.bump();
                Value::NegativeInfinity
            }
            TokenKind::LBracket => {
                self.bump();
                if !self.at(TokenKind::RBracket) {
                    return Err(self.error("expected ']'"));
                }
                Value::EmptySequence
            }
            TokenKind::LBrace => {
                self.bump();
                if !self.at(TokenKind::RBrace) {
                    return Err(self.error("expected '}'"));
                }
                Value::EmptyDictionary
            }
            _ => return Err(self.error("expected value")),
        };
        self.bump();
        Ok(value)
    }

    fn parse_ext_attrs(&mut self) -> PResult<Vec<ExtAttr>> {
        let mut ext_attrs = Vec::new();
        if !self.eat(TokenKind::LBracket) {
            return Ok(ext_attrs);
        }
        loop {
            ext_attrs.push(self.parse_ext_attr()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RBracket)?;
        Ok(ext_attrs)
    }

    fn parse_ext_attr(&mut self) -> PResult<ExtAttr> {
        let mut attr = ExtAttr::new(self.expect_ident()?);
        if self.eat(TokenKind::Eq) {
            let rhs = match self.current_kind() {
                Some(TokenKind::Ident) => ExtAttrRhs::Identifier(self.expect_ident()?),
                Some(TokenKind::LParen) => {
                    self.bump();
                    let mut idents = vec![self.expect_ident()?];
                    while self.eat(TokenKind::Comma) {
                        idents.push(self.expect_ident()?);
                    }
                    self.expect(TokenKind::RParen)?;
                    ExtAttrRhs::IdentifierList(idents)
                }
                Some(TokenKind::String | TokenKind::Integer | TokenKind::Float) => {
                    ExtAttrRhs::Literal(self.bump().to_string())
                }
                _ => return Err(self.error("expected extended attribute value")),
            };
            attr.rhs = Some(rhs);
        }
        if self.at(TokenKind::LParen) {
            attr.arguments = Some(self.parse_arguments()?);
        }
        Ok(attr)
    }
}

fn is_bare_name(ty: &IdlType) -> bool {
    ty.name().is_some() && !ty.nullable && ty.array == 0 && ty.ext_attrs.is_empty()
}

fn unquote(literal: &str) -> &str {
    literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(literal)
}
