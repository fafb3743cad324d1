//! Reading generated stylesheets back.
//!
//! The generator writes a file other tools consume, and that file is also
//! checked into static assets, so it can drift from the table. This module
//! parses a stylesheet with `cssparser` (the tokenizer used by Firefox)
//! into [`ThemeBlock`]s and checks it against a registry with [`verify`].
//!
//! Only the shape the generator emits is recognised: top-level qualified
//! rules whose selector carries a `[data-theme="<id>"]` attribute, holding
//! plain declarations. Declaration values are kept as raw source text.
//!
//! # Example
//!
//! ```rust
//! use echofield_palette::{css, inspect, ThemeRegistry};
//!
//! let registry = ThemeRegistry::builtin().unwrap();
//! let sheet = css::stylesheet(registry);
//!
//! let blocks = inspect::parse_stylesheet(&sheet).unwrap();
//! assert_eq!(blocks.len(), registry.len());
//! assert_eq!(blocks[0].get("--ctp-base"), Some("#eff1f5"));
//!
//! inspect::verify(registry, &sheet).unwrap();
//! ```

use std::path::Path;

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, Token,
};

use crate::css::theme_css;
use crate::error::PaletteError;
use crate::theme::ThemeRegistry;

/// Error describing why a stylesheet does not match expectations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InspectError {
    /// The CSS could not be parsed into theme blocks.
    #[error("syntax error on line {line}: '{snippet}'")]
    Syntax { line: u32, snippet: String },

    /// Theme blocks are missing, extra, or out of order.
    #[error("theme blocks {found:?} do not match registry order {expected:?}")]
    ThemeOrder {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// A role property is not declared.
    #[error("theme '{theme}' does not declare {property}")]
    MissingProperty { theme: String, property: String },

    /// A role property is declared more than once.
    #[error("theme '{theme}' declares {property} {count} times")]
    DuplicateProperty {
        theme: String,
        property: String,
        count: usize,
    },

    /// A block declares a property the generator never writes.
    #[error("theme '{theme}' declares unexpected {property}")]
    UnexpectedProperty { theme: String, property: String },

    /// A property has a different value than the registry implies.
    #[error("theme '{theme}' sets {property} to '{found}', expected '{expected}'")]
    ValueMismatch {
        theme: String,
        property: String,
        expected: String,
        found: String,
    },
}

/// A single `name: value` pair, value kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
}

/// One `[data-theme="..."]` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeBlock {
    pub id: String,
    pub declarations: Vec<Declaration>,
}

impl ThemeBlock {
    /// Value of the first declaration named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.value.as_str())
    }

    pub fn count(&self, name: &str) -> usize {
        self.declarations.iter().filter(|d| d.name == name).count()
    }
}

/// Parses a stylesheet into theme blocks, in source order.
pub fn parse_stylesheet(css: &str) -> Result<Vec<ThemeBlock>, InspectError> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);

    let mut sheet_parser = ThemeSheetParser { errors: Vec::new() };
    let mut blocks = Vec::new();

    {
        let rule_list_parser = cssparser::StyleSheetParser::new(&mut parser, &mut sheet_parser);
        for result in rule_list_parser {
            match result {
                Ok(block) => blocks.push(block),
                Err((err, snippet)) => {
                    return Err(InspectError::Syntax {
                        line: err.location.line + 1,
                        snippet: snippet.trim().to_string(),
                    });
                }
            }
        }
    }

    if let Some(first) = sheet_parser.errors.into_iter().next() {
        return Err(first);
    }

    Ok(blocks)
}

/// Checks a stylesheet against the registry.
///
/// Each block must hold exactly the declarations [`theme_css`] writes for
/// its theme: palette roles, aliases and derived tokens, each once, with the
/// same value. Blocks must appear in registry order.
pub fn verify(registry: &ThemeRegistry, css: &str) -> Result<(), InspectError> {
    let blocks = parse_stylesheet(css)?;

    let expected: Vec<String> = registry.ids().map(str::to_string).collect();
    let found: Vec<String> = blocks.iter().map(|b| b.id.clone()).collect();
    if expected != found {
        return Err(InspectError::ThemeOrder { expected, found });
    }

    for (theme, block) in registry.iter().zip(&blocks) {
        let generated = parse_stylesheet(&theme_css(theme))?;
        let wanted = generated
            .first()
            .map(|b| b.declarations.as_slice())
            .unwrap_or_default();

        for decl in wanted {
            check_single(block, &decl.name, &decl.value)?;
        }
        if let Some(extra) = block
            .declarations
            .iter()
            .find(|d| !wanted.iter().any(|w| w.name == d.name))
        {
            return Err(InspectError::UnexpectedProperty {
                theme: block.id.clone(),
                property: extra.name.clone(),
            });
        }
    }

    Ok(())
}

fn check_single(block: &ThemeBlock, property: &str, expected: &str) -> Result<(), InspectError> {
    match block.count(property) {
        0 => Err(InspectError::MissingProperty {
            theme: block.id.clone(),
            property: property.to_string(),
        }),
        1 => {
            let found = block.get(property).unwrap_or_default();
            if found == expected {
                Ok(())
            } else {
                Err(InspectError::ValueMismatch {
                    theme: block.id.clone(),
                    property: property.to_string(),
                    expected: expected.to_string(),
                    found: found.to_string(),
                })
            }
        }
        count => Err(InspectError::DuplicateProperty {
            theme: block.id.clone(),
            property: property.to_string(),
            count,
        }),
    }
}

/// Reads `path` and verifies it. Returns the number of theme blocks.
pub fn verify_file(registry: &ThemeRegistry, path: impl AsRef<Path>) -> Result<usize, PaletteError> {
    let path = path.as_ref();
    let css = std::fs::read_to_string(path).map_err(|source| PaletteError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    verify(registry, &css).map_err(|source| PaletteError::Stale {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(registry.len())
}

struct ThemeSheetParser {
    errors: Vec<InspectError>,
}

impl<'i> QualifiedRuleParser<'i> for ThemeSheetParser {
    type Prelude = String;
    type QualifiedRule = ThemeBlock;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let mut id = None;

        loop {
            match input.next() {
                Ok(Token::SquareBracketBlock) => {
                    let value = input.parse_nested_block(|input| {
                        input.expect_ident_matching("data-theme")?;
                        input.expect_delim('=')?;
                        let value = input.expect_string()?.as_ref().to_string();
                        Ok::<_, ParseError<'i, ()>>(value)
                    })?;
                    id = Some(value);
                }
                Ok(_) => continue,
                Err(_) => break,
            }
        }

        id.ok_or_else(|| input.new_custom_error::<(), ()>(()))
    }

    fn parse_block<'t>(
        &mut self,
        id: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let mut decl_parser = RawDeclarationParser;
        let body = RuleBodyParser::new(input, &mut decl_parser);

        let mut declarations = Vec::new();
        for item in body {
            match item {
                Ok(decl) => declarations.push(decl),
                Err((err, snippet)) => self.errors.push(InspectError::Syntax {
                    line: err.location.line + 1,
                    snippet: snippet.trim().to_string(),
                }),
            }
        }

        Ok(ThemeBlock { id, declarations })
    }
}

impl<'i> AtRuleParser<'i> for ThemeSheetParser {
    type Prelude = ();
    type AtRule = ThemeBlock;
    type Error = ();
}

struct RawDeclarationParser;

impl<'i> DeclarationParser<'i> for RawDeclarationParser {
    type Declaration = Declaration;
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let start = input.position();
        while input.next().is_ok() {}
        let value = input.slice_from(start).trim().to_string();
        if value.is_empty() {
            return Err(input.new_custom_error::<(), ()>(()));
        }
        Ok(Declaration {
            name: name.as_ref().to_string(),
            value,
        })
    }
}

impl<'i> AtRuleParser<'i> for RawDeclarationParser {
    type Prelude = ();
    type AtRule = Declaration;
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for RawDeclarationParser {
    type Prelude = ();
    type QualifiedRule = Declaration;
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, Declaration, ()> for RawDeclarationParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::stylesheet;

    fn registry() -> &'static ThemeRegistry {
        ThemeRegistry::builtin().unwrap()
    }

    #[test]
    fn test_parse_single_block() {
        let css = theme_css(registry().get("latte").unwrap());
        let blocks = parse_stylesheet(&css).unwrap();
        assert_eq!(blocks.len(), 1);

        let block = &blocks[0];
        assert_eq!(block.id, "latte");
        assert_eq!(block.get("--ctp-blue"), Some("#1e66f5"));
        assert_eq!(block.get("--bg"), Some("var(--ctp-base)"));
        assert_eq!(block.get("--accent-soft"), Some("rgba(30, 102, 245, 0.12)"));
        assert_eq!(
            block.get("--shadow-soft"),
            Some("0 8px 16px rgba(15, 23, 42, 0.06)")
        );
    }

    #[test]
    fn test_declarations_in_source_order() {
        let css = theme_css(registry().get("mocha").unwrap());
        let blocks = parse_stylesheet(&css).unwrap();
        let names: Vec<_> = blocks[0]
            .declarations
            .iter()
            .take(3)
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["--ctp-rosewater", "--ctp-flamingo", "--ctp-pink"]);
        // 26 roles + 12 semantic tokens
        assert_eq!(blocks[0].declarations.len(), 38);
    }

    #[test]
    fn test_header_comment_ignored() {
        let blocks = parse_stylesheet(&stylesheet(registry())).unwrap();
        assert_eq!(blocks.len(), registry().len());
    }

    #[test]
    fn test_verify_generated_stylesheet() {
        assert_eq!(verify(registry(), &stylesheet(registry())), Ok(()));
    }

    #[test]
    fn test_verify_detects_changed_value() {
        let css = stylesheet(registry()).replacen("#1e66f5", "#000000", 1);
        match verify(registry(), &css) {
            Err(InspectError::ValueMismatch {
                theme, property, ..
            }) => {
                assert_eq!(theme, "latte");
                assert_eq!(property, "--ctp-blue");
            }
            other => panic!("Expected ValueMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_verify_detects_duplicate() {
        let css = stylesheet(registry()).replacen(
            "  --ctp-red: #d20f39;\n",
            "  --ctp-red: #d20f39;\n  --ctp-red: #d20f39;\n",
            1,
        );
        assert!(matches!(
            verify(registry(), &css),
            Err(InspectError::DuplicateProperty { count: 2, .. })
        ));
    }

    #[test]
    fn test_verify_detects_missing_role() {
        let css = stylesheet(registry()).replacen("  --ctp-crust: #dce0e8;\n", "", 1);
        assert_eq!(
            verify(registry(), &css),
            Err(InspectError::MissingProperty {
                theme: "latte".into(),
                property: "--ctp-crust".into(),
            })
        );
    }

    #[test]
    fn test_verify_detects_edited_derived_token() {
        let css = stylesheet(registry()).replacen(
            "  --accent-contrast: #000000;\n",
            "  --accent-contrast: #ffffff;\n",
            1,
        );
        assert_eq!(
            verify(registry(), &css),
            Err(InspectError::ValueMismatch {
                theme: "latte".into(),
                property: "--accent-contrast".into(),
                expected: "#000000".into(),
                found: "#ffffff".into(),
            })
        );
    }

    #[test]
    fn test_verify_detects_edited_shadow_and_soft_accent() {
        let sheet = stylesheet(registry());
        let css = sheet.replacen("0 8px 16px rgba(0, 0, 0, 0.3)", "none", 1);
        assert!(matches!(
            verify(registry(), &css),
            Err(InspectError::ValueMismatch { property, .. }) if property == "--shadow-soft"
        ));

        let css = sheet.replacen("rgba(30, 102, 245, 0.12)", "red", 1);
        assert!(matches!(
            verify(registry(), &css),
            Err(InspectError::ValueMismatch { property, .. }) if property == "--accent-soft"
        ));
    }

    #[test]
    fn test_verify_detects_extra_declaration() {
        let css = stylesheet(registry()).replacen(
            "  --shadow-soft:",
            "  --bogus: 1;\n  --shadow-soft:",
            1,
        );
        assert_eq!(
            verify(registry(), &css),
            Err(InspectError::UnexpectedProperty {
                theme: "latte".into(),
                property: "--bogus".into(),
            })
        );
    }

    #[test]
    fn test_verify_detects_order() {
        let only_nord = theme_css(registry().get("nord").unwrap());
        assert!(matches!(
            verify(registry(), &only_nord),
            Err(InspectError::ThemeOrder { .. })
        ));
    }

    #[test]
    fn test_rule_without_theme_attribute_is_error() {
        let err = parse_stylesheet(":root { --bg: red; }").unwrap_err();
        assert!(matches!(err, InspectError::Syntax { line: 1, .. }));
    }
}
