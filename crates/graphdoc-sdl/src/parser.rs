use graphdoc_core::types::{TypeExpr, TypeKind, TypeRecord};
use graphdoc_core::SchemaRegistry;

use crate::error::ParseError;
use crate::scanner::{Dispatch, Scanner, Step};

/// Field sub-state inside a `{ ... }` body.
#[derive(Debug)]
enum FieldPhase {
    /// Expecting a field or value name.
    Name,
    /// A field name was read; expecting its type expression.
    TypeExpr { field: String },
}

/// Declaration-level state.
///
/// The in-progress record lives inside the state, so a partially parsed
/// declaration is never visible outside the machine.
#[derive(Debug)]
enum DeclState {
    /// Between declarations.
    Idle,
    /// A declaration keyword was read; expecting the name.
    Name { kind: TypeKind },
    /// Inside a declaration body.
    Body { record: TypeRecord, phase: FieldPhase },
}

/// Single-pass SDL parser.
///
/// The scanner accumulates characters into tokens and the declaration
/// machine interprets each (token, delimiter) pair, building records
/// directly into the registry without an intermediate AST.
#[derive(Debug)]
pub struct Parser {
    scanner: Scanner,
    registry: SchemaRegistry,
    state: DeclState,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            scanner: Scanner::new(),
            registry: SchemaRegistry::new(),
            state: DeclState::Idle,
        }
    }

    /// Feeds one character of the document.
    pub fn feed(&mut self, ch: char) -> Result<(), ParseError> {
        match self.scanner.advance(ch) {
            Step::Consumed => Ok(()),
            Step::Dispatch(dispatch) => self.dispatch(dispatch),
        }
    }

    /// Ends the run and returns the registry.
    ///
    /// A declaration left open at end of input is discarded.
    pub fn finish(self) -> SchemaRegistry {
        if !matches!(self.state, DeclState::Idle) {
            tracing::debug!("input ended inside a declaration; partial record discarded");
        }
        self.registry
    }

    fn dispatch(&mut self, dispatch: Dispatch) -> Result<(), ParseError> {
        let state = std::mem::replace(&mut self.state, DeclState::Idle);
        self.state = match state {
            DeclState::Idle => self.on_idle(dispatch)?,
            DeclState::Name { kind } => self.on_name(kind, dispatch)?,
            DeclState::Body { record, phase } => self.on_body(record, phase, dispatch)?,
        };
        Ok(())
    }

    fn on_idle(&mut self, d: Dispatch) -> Result<DeclState, ParseError> {
        if !matches!(d.delimiter, ' ' | '\n') {
            return Err(ParseError::UnexpectedDelimiter {
                found: d.delimiter,
                expected: "whitespace between declarations",
                span: d.delimiter_span,
            });
        }
        if d.token.is_empty() {
            return Ok(DeclState::Idle);
        }
        match TypeKind::from_keyword(&d.token) {
            Some(kind) => Ok(DeclState::Name { kind }),
            None => Err(ParseError::UnknownDeclaration {
                found: d.token,
                span: d.token_span,
            }),
        }
    }

    fn on_name(&mut self, kind: TypeKind, d: Dispatch) -> Result<DeclState, ParseError> {
        if !matches!(d.delimiter, ' ' | '\n' | '{') {
            return Err(ParseError::UnexpectedDelimiter {
                found: d.delimiter,
                expected: "a declaration name followed by whitespace or '{'",
                span: d.delimiter_span,
            });
        }
        if d.token.is_empty() {
            return Ok(DeclState::Name { kind });
        }
        if kind.has_body() {
            Ok(DeclState::Body {
                record: TypeRecord::new(d.token, kind),
                phase: FieldPhase::Name,
            })
        } else {
            // Scalars have no body and finalize at their name.
            self.registry.register_scalar(d.token.clone());
            self.finalize(TypeRecord::new(d.token, kind));
            Ok(DeclState::Idle)
        }
    }

    fn on_body(
        &mut self,
        mut record: TypeRecord,
        phase: FieldPhase,
        d: Dispatch,
    ) -> Result<DeclState, ParseError> {
        match d.delimiter {
            '}' => {
                // Closes the body even when a token is still pending.
                self.finalize(record);
                return Ok(DeclState::Idle);
            }
            '=' => {
                // Default-value expressions are skipped to end of line,
                // along with anything buffered before the '='.
                self.scanner.skip_rest_of_line();
                return Ok(DeclState::Body { record, phase });
            }
            _ => {}
        }

        if d.token.is_empty() {
            return Ok(DeclState::Body { record, phase });
        }
        if d.delimiter == '{' {
            return Err(ParseError::UnexpectedDelimiter {
                found: '{',
                expected: "field definitions inside the body",
                span: d.delimiter_span,
            });
        }

        let phase = match phase {
            FieldPhase::Name => {
                if record.kind == TypeKind::Enum {
                    if d.delimiter == ':' {
                        return Err(ParseError::UnexpectedDelimiter {
                            found: ':',
                            expected: "enum values separated by whitespace",
                            span: d.delimiter_span,
                        });
                    }
                    record.put_field(d.token, TypeExpr::default());
                    FieldPhase::Name
                } else {
                    FieldPhase::TypeExpr { field: d.token }
                }
            }
            FieldPhase::TypeExpr { field } => {
                if matches!(d.delimiter, ' ' | '\n') {
                    record.put_field(field, TypeExpr::new(d.token));
                    FieldPhase::Name
                } else {
                    // A repeated ':' is absorbed; the pending name stands.
                    FieldPhase::TypeExpr { field }
                }
            }
        };
        Ok(DeclState::Body { record, phase })
    }

    fn finalize(&mut self, record: TypeRecord) {
        tracing::debug!(
            name = %record.name,
            kind = %record.kind,
            fields = record.fields.len(),
            "declaration complete"
        );
        self.registry.insert(record);
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a complete SDL document into a registry.
///
/// One forced newline is fed after the input so a token at end of file is
/// flushed through the scanner.
pub fn parse(source: &str) -> Result<SchemaRegistry, ParseError> {
    let mut parser = Parser::new();
    for ch in source.chars() {
        parser.feed(ch)?;
    }
    parser.feed('\n')?;
    let registry = parser.finish();
    tracing::debug!(types = registry.len(), "parse complete");
    Ok(registry)
}
