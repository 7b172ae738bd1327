use std::collections::BTreeMap;

use log::info;
use serde::Serialize;

use crate::{
    errors::errors::Error,
    lexer::{
        lexer::tokenize,
        tokens::{export_tokens, TokenRecord},
    },
    parser::parser::parse,
    type_checker::{symbols::SymbolRecord, type_checker::type_check},
};

/// The phase a failed run stopped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    File,
    Syntax,
    Semantic,
    Unknown,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompileResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<Phase>,
    pub tokens: Vec<TokenRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ast: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_table: Option<BTreeMap<String, SymbolRecord>>,
    pub errors: Vec<String>,
    /// Syntax diagnostics with their positions, for rendering
    #[serde(skip)]
    pub syntax_errors: Vec<Error>,
}

impl CompileResult {
    fn failure(phase: Phase, errors: Vec<String>) -> Self {
        CompileResult {
            success: false,
            phase: Some(phase),
            tokens: vec![],
            ast: None,
            symbol_table: None,
            errors,
            syntax_errors: vec![],
        }
    }

    /// Result for a source unit that could not be read at all.
    pub fn file_error(message: impl Into<String>) -> Self {
        CompileResult::failure(Phase::File, vec![message.into()])
    }

    pub fn exit_code(&self) -> i32 {
        if self.success {
            0
        } else {
            1
        }
    }

    pub fn to_json(&self, compact: bool) -> Result<String, serde_json::Error> {
        if compact {
            serde_json::to_string(self)
        } else {
            serde_json::to_string_pretty(self)
        }
    }
}

/// Runs every phase over `source`, stopping at the first phase that fails.
pub fn compile(source: &str) -> CompileResult {
    let tokens = tokenize(source);
    info!("lexed {} tokens", tokens.len());
    let exported_tokens = export_tokens(&tokens);

    let program = match parse(tokens) {
        Ok(program) => program,
        Err(errors) => {
            info!("syntax phase failed with {} errors", errors.len());
            let mut result = CompileResult::failure(
                Phase::Syntax,
                errors.iter().map(ToString::to_string).collect(),
            );
            result.tokens = exported_tokens;
            result.syntax_errors = errors;
            return result;
        }
    };

    let ast = match program.to_json() {
        Ok(ast) => ast,
        Err(error) => {
            let mut result = CompileResult::failure(Phase::Unknown, vec![error.to_string()]);
            result.tokens = exported_tokens;
            return result;
        }
    };

    let type_checker = type_check(&program);
    let errors: Vec<String> = type_checker
        .get_errors()
        .iter()
        .map(ToString::to_string)
        .collect();

    if errors.is_empty() {
        info!("compiled {} statements", program.statements.len());
    } else {
        info!("semantic phase failed with {} errors", errors.len());
    }

    CompileResult {
        success: errors.is_empty(),
        phase: if errors.is_empty() {
            None
        } else {
            Some(Phase::Semantic)
        },
        tokens: exported_tokens,
        ast: Some(ast),
        symbol_table: Some(type_checker.symbol_table()),
        errors,
        syntax_errors: vec![],
    }
}
