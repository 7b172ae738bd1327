use std::collections::BTreeMap;

use log::{debug, trace};

use crate::{
    ast::{
        ast::{Block, Expr, Program, Stmt},
        expressions::{BinaryExpr, CallExpr, UnaryExpr},
        statements::{AssignmentStmt, FnDeclStmt, ReturnStmt, VarDeclStmt},
        types::ValueType,
    },
    errors::errors::SemanticError,
};

use super::symbols::{Environment, FunctionContext, Symbol, SymbolRecord};

/// Type of an expression, `None` once an error made it unknown. Unknown
/// types are never reported again by the enclosing construct.
pub type ExprType = Option<ValueType>;

/// Symbol state saved before a function body is analyzed.
#[derive(Debug, Clone)]
pub struct Snapshot {
    globals: Environment,
    environment_path: Vec<Environment>,
}

#[derive(Debug, Default)]
pub struct TypeChecker {
    pub globals: Environment,
    /// One environment per function body currently being analyzed
    pub environment_path: Vec<Environment>,
    pub errors: Vec<SemanticError>,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker::default()
    }

    /// Runs a fresh analysis over `program`, discarding any earlier state.
    /// Returns whether the program is free of semantic errors.
    pub fn analyze(&mut self, program: &Program) -> bool {
        *self = TypeChecker::new();

        for stmt in program.statements.iter() {
            type_check_stmt(self, stmt);
        }

        debug!(
            "semantic analysis finished: {} symbols, {} errors",
            self.globals.symbol_lookup.len(),
            self.errors.len()
        );

        self.errors.is_empty()
    }

    pub fn succeeded(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get_errors(&self) -> &[SemanticError] {
        &self.errors
    }

    /// The global symbols as exported in the result document.
    pub fn symbol_table(&self) -> BTreeMap<String, SymbolRecord> {
        self.globals.export()
    }

    pub fn add_error(&mut self, error: SemanticError) {
        trace!("semantic error: {}", error);
        self.errors.push(error);
    }

    pub fn get_current_environment(&mut self) -> &mut Environment {
        match self.environment_path.last_mut() {
            Some(environment) => environment,
            None => &mut self.globals,
        }
    }

    pub fn push_environment(&mut self, environment: Environment) {
        self.environment_path.push(environment);
        debug!("entered scope at depth {}", self.environment_path.len());
    }

    pub fn pop_environment(&mut self) {
        if let Some(environment) = self.environment_path.pop() {
            debug!(
                "left scope at depth {} ({} locals dropped)",
                self.environment_path.len() + 1,
                environment.symbol_lookup.len()
            );
        }
    }

    /// Copies every active environment, to be put back with [`restore`](Self::restore).
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            globals: self.globals.clone(),
            environment_path: self.environment_path.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: Snapshot) {
        self.globals = snapshot.globals;
        self.environment_path = snapshot.environment_path;
    }

    /// Resolves `name` from the innermost environment outwards.
    pub fn fetch_symbol(&self, name: &str) -> Option<&Symbol> {
        self.environment_path
            .iter()
            .rev()
            .find_map(|environment| environment.get(name))
            .or_else(|| self.globals.get(name))
    }

    pub fn fetch_symbol_mut(&mut self, name: &str) -> Option<&mut Symbol> {
        for environment in self.environment_path.iter_mut().rev() {
            if environment.contains(name) {
                return environment.get_mut(name);
            }
        }

        self.globals.get_mut(name)
    }

    pub fn current_function(&self) -> Option<&FunctionContext> {
        self.environment_path
            .last()
            .and_then(|environment| environment.function.as_ref())
    }
}

pub fn type_check_expr(type_checker: &mut TypeChecker, expr: &Expr) -> ExprType {
    match expr {
        Expr::IntegerLiteral { .. } => Some(ValueType::Int),
        Expr::FloatLiteral { .. } => Some(ValueType::Float),
        Expr::BooleanLiteral { .. } => Some(ValueType::Bool),
        Expr::Identifier { name } => type_check_identifier(type_checker, name),
        Expr::FunctionCall(call) => type_check_call(type_checker, call),
        Expr::BinaryOp(binary) => type_check_binary(type_checker, binary),
        Expr::UnaryOp(unary) => type_check_unary(type_checker, unary),
    }
}

fn type_check_identifier(type_checker: &mut TypeChecker, name: &str) -> ExprType {
    let Some(symbol) = type_checker.fetch_symbol(name).cloned() else {
        type_checker.add_error(SemanticError::UndefinedVariable {
            name: String::from(name),
        });
        return None;
    };

    if symbol.is_function {
        type_checker.add_error(SemanticError::FunctionUsedAsVariable {
            name: String::from(name),
        });
        return None;
    }

    // Reported but not fatal, the declared type is still known
    if !symbol.initialized {
        type_checker.add_error(SemanticError::UsedBeforeInitialization {
            name: String::from(name),
        });
    }

    Some(symbol.declared_type)
}

pub fn type_check_call(type_checker: &mut TypeChecker, call: &CallExpr) -> ExprType {
    let callee = type_checker.fetch_symbol(&call.name).cloned();
    match &callee {
        None => type_checker.add_error(SemanticError::UndefinedFunction {
            name: call.name.clone(),
        }),
        Some(symbol) if !symbol.is_function => type_checker.add_error(SemanticError::NotAFunction {
            name: call.name.clone(),
        }),
        Some(_) => {}
    }

    let argument_types: Vec<ExprType> = call
        .arguments
        .iter()
        .map(|argument| type_check_expr(type_checker, argument))
        .collect();

    let function = callee.filter(|symbol| symbol.is_function)?;

    if argument_types.len() != function.param_types.len() {
        type_checker.add_error(SemanticError::ArgumentCountMismatch {
            name: call.name.clone(),
            expected: function.param_types.len(),
            received: argument_types.len(),
        });
        return Some(function.declared_type);
    }

    for (index, (received, expected)) in argument_types
        .iter()
        .zip(function.param_types.iter())
        .enumerate()
    {
        if let Some(received) = received {
            if received != expected {
                type_checker.add_error(SemanticError::ArgumentTypeMismatch {
                    name: call.name.clone(),
                    position: index + 1,
                    expected: *expected,
                    received: *received,
                });
            }
        }
    }

    Some(function.declared_type)
}

fn type_check_binary(type_checker: &mut TypeChecker, binary: &BinaryExpr) -> ExprType {
    let left = type_check_expr(type_checker, &binary.left);
    let right = type_check_expr(type_checker, &binary.right);

    match binary.operator.as_str() {
        "+" | "-" | "*" | "/" => {
            let (left, right) = (left?, right?);

            for operand in [left, right] {
                if !operand.is_numeric() {
                    type_checker.add_error(SemanticError::InvalidOperand {
                        operator: binary.operator.clone(),
                        received: operand,
                    });
                    return None;
                }
            }

            if left == ValueType::Float || right == ValueType::Float {
                Some(ValueType::Float)
            } else {
                Some(ValueType::Int)
            }
        }
        "==" | "!=" | "<" | ">" | "<=" | ">=" => {
            if let (Some(left), Some(right)) = (left, right) {
                if left != right {
                    type_checker.add_error(SemanticError::ComparisonMismatch { left, right });
                }
            }

            Some(ValueType::Bool)
        }
        "and" | "or" => {
            for operand in [left, right].into_iter().flatten() {
                if operand != ValueType::Bool {
                    type_checker.add_error(SemanticError::InvalidOperand {
                        operator: binary.operator.clone(),
                        received: operand,
                    });
                }
            }

            Some(ValueType::Bool)
        }
        _ => None,
    }
}

fn type_check_unary(type_checker: &mut TypeChecker, unary: &UnaryExpr) -> ExprType {
    let operand = type_check_expr(type_checker, &unary.operand);

    match unary.operator.as_str() {
        "not" => {
            if let Some(operand) = operand.filter(|operand| *operand != ValueType::Bool) {
                type_checker.add_error(SemanticError::InvalidOperand {
                    operator: String::from("not"),
                    received: operand,
                });
            }

            Some(ValueType::Bool)
        }
        "-" => {
            let operand = operand?;
            if !operand.is_numeric() {
                type_checker.add_error(SemanticError::InvalidOperand {
                    operator: String::from("unary -"),
                    received: operand,
                });
            }

            Some(operand)
        }
        _ => None,
    }
}

/// Reports a known, non-boolean condition of `construct`.
fn type_check_condition(type_checker: &mut TypeChecker, construct: &'static str, condition: &Expr) {
    if let Some(received) = type_check_expr(type_checker, condition) {
        if received != ValueType::Bool {
            type_checker.add_error(SemanticError::InvalidCondition { construct, received });
        }
    }
}

pub fn type_check_stmt(type_checker: &mut TypeChecker, stmt: &Stmt) {
    trace!("checking {}", stmt.kind_name());

    match stmt {
        Stmt::VarDeclaration(var_decl) => type_check_var_decl(type_checker, var_decl),
        Stmt::Assignment(assignment) => type_check_assignment(type_checker, assignment),
        Stmt::PrintStatement(print) => {
            type_check_expr(type_checker, &print.expression);
        }
        Stmt::IfStatement(if_stmt) => {
            type_check_condition(type_checker, "If", &if_stmt.condition);
            type_check_block(type_checker, &if_stmt.then_statements);
            type_check_block(type_checker, &if_stmt.else_statements);
        }
        Stmt::WhileStatement(while_stmt) => {
            type_check_condition(type_checker, "While", &while_stmt.condition);
            type_check_block(type_checker, &while_stmt.body);
        }
        Stmt::ForStatement(for_stmt) => {
            if let Some(init) = &for_stmt.init {
                type_check_stmt(type_checker, init);
            }
            if let Some(condition) = &for_stmt.condition {
                type_check_condition(type_checker, "For", condition);
            }
            if let Some(update) = &for_stmt.update {
                type_check_stmt(type_checker, update);
            }
            type_check_block(type_checker, &for_stmt.body);
        }
        Stmt::DoWhileStatement(do_while) => {
            type_check_block(type_checker, &do_while.body);
            type_check_condition(type_checker, "Do-while", &do_while.condition);
        }
        Stmt::FunctionDeclaration(fn_decl) => type_check_fn_decl(type_checker, fn_decl),
        Stmt::FunctionCall(call) => {
            type_check_call(type_checker, call);
        }
        Stmt::ReturnStatement(return_stmt) => type_check_return(type_checker, return_stmt),
    }
}

/// Checks the statements of a block in order. Blocks share the enclosing scope.
pub fn type_check_block(type_checker: &mut TypeChecker, block: &Block) {
    for stmt in block.iter() {
        type_check_stmt(type_checker, stmt);
    }
}

fn type_check_var_decl(type_checker: &mut TypeChecker, var_decl: &VarDeclStmt) {
    if type_checker.fetch_symbol(&var_decl.name).is_some() {
        type_checker.add_error(SemanticError::VariableAlreadyDeclared {
            name: var_decl.name.clone(),
        });
        return;
    }

    let initialized = match &var_decl.value {
        Some(value) => {
            if let Some(received) = type_check_expr(type_checker, value) {
                if received != var_decl.var_type {
                    type_checker.add_error(SemanticError::DeclarationTypeMismatch {
                        expected: var_decl.var_type,
                        received,
                    });
                }
            }
            true
        }
        None => false,
    };

    let symbol = Symbol::variable(var_decl.var_type, initialized);
    if let Err(error) = type_checker
        .get_current_environment()
        .declare(&var_decl.name, symbol)
    {
        type_checker.add_error(error);
    }
}

fn type_check_assignment(type_checker: &mut TypeChecker, assignment: &AssignmentStmt) {
    let Some(target) = type_checker.fetch_symbol(&assignment.name).cloned() else {
        type_checker.add_error(SemanticError::UndefinedVariable {
            name: assignment.name.clone(),
        });
        return;
    };

    if target.is_function {
        type_checker.add_error(SemanticError::AssignmentToFunction {
            name: assignment.name.clone(),
        });
        return;
    }

    if let Some(received) = type_check_expr(type_checker, &assignment.value) {
        if received != target.declared_type {
            type_checker.add_error(SemanticError::AssignmentTypeMismatch {
                expected: target.declared_type,
                received,
            });
        }
    }

    if let Some(symbol) = type_checker.fetch_symbol_mut(&assignment.name) {
        symbol.initialized = true;
    }
}

fn type_check_fn_decl(type_checker: &mut TypeChecker, fn_decl: &FnDeclStmt) {
    if type_checker.fetch_symbol(&fn_decl.name).is_some() {
        type_checker.add_error(SemanticError::FunctionAlreadyDeclared {
            name: fn_decl.name.clone(),
        });
        return;
    }

    // Registered before the body so the function can call itself
    let signature = Symbol::function(fn_decl.return_type, fn_decl.parameter_types());
    if let Err(error) = type_checker
        .get_current_environment()
        .declare(&fn_decl.name, signature)
    {
        type_checker.add_error(error);
        return;
    }

    // Whatever the body does to enclosing symbols is undone afterwards
    let snapshot = type_checker.snapshot();
    type_checker.push_environment(Environment::for_function(
        &fn_decl.name,
        fn_decl.return_type,
    ));

    for parameter in fn_decl.parameters.iter() {
        let binding = Symbol::variable(parameter.param_type, true);
        if type_checker
            .get_current_environment()
            .declare(&parameter.name, binding)
            .is_err()
        {
            type_checker.add_error(SemanticError::DuplicateParameter {
                function: fn_decl.name.clone(),
                parameter: parameter.name.clone(),
            });
        }
    }

    type_check_block(type_checker, &fn_decl.body);

    type_checker.pop_environment();
    type_checker.restore(snapshot);
}

fn type_check_return(type_checker: &mut TypeChecker, return_stmt: &ReturnStmt) {
    let received = return_stmt
        .value
        .as_ref()
        .and_then(|value| type_check_expr(type_checker, value));

    let Some(function) = type_checker.current_function().cloned() else {
        type_checker.add_error(SemanticError::ReturnOutsideFunction);
        return;
    };

    if let Some(received) = received {
        if received != function.return_type {
            type_checker.add_error(SemanticError::ReturnTypeMismatch {
                function: function.name,
                expected: function.return_type,
                received,
            });
        }
    }
}

/// Analyzes `program` with a fresh type checker and hands it back for its
/// verdict, errors and symbol table.
pub fn type_check(program: &Program) -> TypeChecker {
    let mut type_checker = TypeChecker::new();
    type_checker.analyze(program);

    type_checker
}
