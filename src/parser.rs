mod errors;

pub mod stmt;
pub mod expr;
pub mod operator;

pub use errors::{ParserError, ParserErrorKind};

use std::fmt;
use std::rc::Rc;

use crate::language::{IntType, FloatType};
use crate::lexer::{Lexer, TokenKind, TokenMeta};

use stmt::{Stmt, LetStmt, ReturnStmt, ExprStmt, BlockStmt, Program};
use expr::*;
use operator::{PrefixOp, BinaryOp, Precedence};
use errors::ErrorKind;


/// Common interface of every AST node.
/// The Display impl is the canonical rendering, with all operator nesting made explicit
pub trait Node: fmt::Display {
    fn token_literal(&self) -> String;
}


// Pratt parser

type InternalResult<T> = Result<T, ParserError>;

type PrefixParseFn = fn(&mut Parser) -> InternalResult<Expr>;

#[derive(Debug, Clone, Copy)]
enum InfixHandler {
    Binary(BinaryOp),
    Call,
    Index,
}

pub struct Parser {
    lexer: Lexer,
    current: TokenMeta,
    peek: TokenMeta,
    errors: Vec<ParserError>,
}

impl Parser {

    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Parser {
            lexer,
            current,
            peek,
            errors: Vec::new(),
        }
    }

    pub fn errors(&self) -> &[ParserError] { &self.errors }

    pub fn into_errors(self) -> Vec<ParserError> { self.errors }

    fn advance(&mut self) {
        // the lexer keeps producing EOF once input runs out
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    fn current_is(&self, kind: TokenKind) -> bool { self.current.kind() == kind }

    fn peek_is(&self, kind: TokenKind) -> bool { self.peek.kind() == kind }

    // advance only if the next token is the expected kind
    fn expect_peek(&mut self, kind: TokenKind) -> InternalResult<()> {
        if !self.peek_is(kind) {
            return Err(ParserError::unexpected_token(kind, &self.peek));
        }
        self.advance();
        Ok(())
    }

    fn skip_optional_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::of_token(self.peek.kind())
    }

    /// Parse until EOF. Syntax errors are collected and can be retrieved with `errors()`
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::EOF) {
            match self.parse_statement() {
                Ok(stmt) => program.stmts.push(stmt),

                Err(error) => {
                    log::debug!("syntax error: {}", error);
                    self.errors.push(error);
                    self.synchronize_stmt();
                },
            }

            self.advance();
        }

        program
    }

    // Discards tokens until we reach a statement boundary
    fn synchronize_stmt(&mut self) {
        while !self.current_is(TokenKind::Semicolon) && !self.current_is(TokenKind::EOF) {
            self.advance();
        }
    }

    /*** Statement Parsing ***/

    // on success the current token is the last token of the statement

    fn parse_statement(&mut self) -> InternalResult<Stmt> {
        match self.current.kind() {
            TokenKind::Let => Ok(Stmt::Let(self.parse_let_stmt()?)),
            TokenKind::Return => Ok(Stmt::Return(self.parse_return_stmt()?)),
            _ => Ok(Stmt::Expression(self.parse_expr_stmt()?)),
        }
    }

    // let-statement ::= "let" IDENTIFIER "=" expression ( ";" )? ;
    fn parse_let_stmt(&mut self) -> InternalResult<LetStmt> {
        let token = self.current.token.clone();

        self.expect_peek(TokenKind::Ident)?;
        let name = self.current_identifier();

        self.expect_peek(TokenKind::Assign)?;
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok(LetStmt { token, name, value })
    }

    // return-statement ::= "return" expression ( ";" )? ;
    fn parse_return_stmt(&mut self) -> InternalResult<ReturnStmt> {
        let token = self.current.token.clone();
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok(ReturnStmt { token, value })
    }

    fn parse_expr_stmt(&mut self) -> InternalResult<ExprStmt> {
        let token = self.current.token.clone();

        let expr = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok(ExprStmt { token, expr })
    }

    // block ::= "{" statement* "}" ;
    // a missing closing brace simply ends the block at EOF
    fn parse_block_stmt(&mut self) -> InternalResult<BlockStmt> {
        let token = self.current.token.clone();
        self.advance();

        let mut stmts = Vec::new();
        while !self.current_is(TokenKind::CloseBrace) && !self.current_is(TokenKind::EOF) {
            stmts.push(self.parse_statement()?);
            self.advance();
        }

        Ok(BlockStmt {
            token,
            stmts: stmts.into_boxed_slice(),
        })
    }

    /*** Expression Parsing ***/

    fn parse_expression(&mut self, precedence: Precedence) -> InternalResult<Expr> {
        let prefix = Self::prefix_parse_fn(self.current.kind())
            .ok_or_else(|| ParserError::no_prefix_parse_fn(&self.current))?;

        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let handler = match Self::infix_handler(self.peek.kind()) {
                Some(handler) => handler,
                None => break,
            };

            self.advance();

            left = match handler {
                InfixHandler::Binary(op) => self.parse_infix_expr(op, left)?,
                InfixHandler::Call => self.parse_call_expr(left)?,
                InfixHandler::Index => self.parse_index_expr(left)?,
            };
        }

        Ok(left)
    }

    fn prefix_parse_fn(kind: TokenKind) -> Option<PrefixParseFn> {
        let parse_fn: PrefixParseFn = match kind {
            TokenKind::Ident      => Self::parse_identifier,
            TokenKind::Int        => Self::parse_integer_literal,
            TokenKind::Float      => Self::parse_float_literal,
            TokenKind::String     => Self::parse_string_literal,
            TokenKind::True       => Self::parse_boolean_literal,
            TokenKind::False      => Self::parse_boolean_literal,
            TokenKind::Bang       => Self::parse_prefix_expr,
            TokenKind::Minus      => Self::parse_prefix_expr,
            TokenKind::OpenParen  => Self::parse_grouped_expr,
            TokenKind::OpenSquare => Self::parse_array_literal,
            TokenKind::If         => Self::parse_if_expr,
            TokenKind::Function   => Self::parse_function_literal,

            _ => return None,
        };

        Some(parse_fn)
    }

    fn infix_handler(kind: TokenKind) -> Option<InfixHandler> {
        if let Some(op) = Self::which_binary_op(kind) {
            return Some(InfixHandler::Binary(op));
        }

        match kind {
            TokenKind::OpenParen => Some(InfixHandler::Call),
            TokenKind::OpenSquare => Some(InfixHandler::Index),
            _ => None,
        }
    }

    fn which_prefix_op(kind: TokenKind) -> Option<PrefixOp> {
        let op = match kind {
            TokenKind::Minus => PrefixOp::Neg,
            TokenKind::Bang  => PrefixOp::Not,

            _ => return None,
        };

        Some(op)
    }

    fn which_binary_op(kind: TokenKind) -> Option<BinaryOp> {
        let op = match kind {
            TokenKind::Asterisk => BinaryOp::Mul,
            TokenKind::Slash    => BinaryOp::Div,
            TokenKind::Percent  => BinaryOp::Mod,
            TokenKind::Plus     => BinaryOp::Add,
            TokenKind::Minus    => BinaryOp::Sub,
            TokenKind::LT       => BinaryOp::LT,
            TokenKind::GT       => BinaryOp::GT,
            TokenKind::EQ       => BinaryOp::EQ,
            TokenKind::NotEq    => BinaryOp::NE,

            _ => return None,
        };

        Some(op)
    }

    /*** Prefix Handlers ***/

    fn current_identifier(&self) -> Identifier {
        Identifier {
            token: self.current.token.clone(),
            value: Rc::from(self.current.literal()),
        }
    }

    fn parse_identifier(&mut self) -> InternalResult<Expr> {
        Ok(Expr::Identifier(self.current_identifier()))
    }

    fn parse_integer_literal(&mut self) -> InternalResult<Expr> {
        let literal = self.current.literal();
        let value = literal.parse::<IntType>()
            .map_err(|_| ParserError::new(
                ErrorKind::InvalidInteger(literal.to_string()), self.current.span
            ))?;

        Ok(Expr::IntegerLiteral(IntegerLiteral {
            token: self.current.token.clone(),
            value,
        }))
    }

    fn parse_float_literal(&mut self) -> InternalResult<Expr> {
        let literal = self.current.literal();
        let value = literal.parse::<FloatType>()
            .map_err(|_| ParserError::new(
                ErrorKind::InvalidFloat(literal.to_string()), self.current.span
            ))?;

        Ok(Expr::FloatLiteral(FloatLiteral {
            token: self.current.token.clone(),
            value,
        }))
    }

    fn parse_string_literal(&mut self) -> InternalResult<Expr> {
        Ok(Expr::StringLiteral(StringLiteral {
            token: self.current.token.clone(),
            value: Rc::from(self.current.literal()),
        }))
    }

    fn parse_boolean_literal(&mut self) -> InternalResult<Expr> {
        Ok(Expr::Boolean(BooleanLiteral {
            token: self.current.token.clone(),
            value: self.current_is(TokenKind::True),
        }))
    }

    // prefix-expression ::= ( "-" | "!" ) expression ;
    fn parse_prefix_expr(&mut self) -> InternalResult<Expr> {
        let op = Self::which_prefix_op(self.current.kind())
            .ok_or_else(|| ParserError::no_prefix_parse_fn(&self.current))?;

        let token = self.current.token.clone();
        self.advance();

        let right = self.parse_expression(Precedence::Prefix)?;

        Ok(Expr::Prefix(PrefixExpr {
            token, op,
            right: Box::new(right),
        }))
    }

    // group ::= "(" expression ")" ;
    fn parse_grouped_expr(&mut self) -> InternalResult<Expr> {
        self.advance();

        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::CloseParen)?;

        Ok(expr)
    }

    // array-literal ::= "[" ( expression ( "," expression )* )? "]" ;
    fn parse_array_literal(&mut self) -> InternalResult<Expr> {
        let token = self.current.token.clone();
        let elements = self.parse_expression_list(TokenKind::CloseSquare)?;

        Ok(Expr::Array(ArrayLiteral { token, elements }))
    }

    /*
        If expression syntax:

        if-expression ::= "if" condition block ( "else if" condition block )* ( "else" block )? ;
        condition ::= "(" expression ")" ;
    */
    fn parse_if_expr(&mut self) -> InternalResult<Expr> {
        let token = self.current.token.clone();

        let (condition, consequence) = self.parse_conditional_branch()?;

        let mut else_ifs = Vec::new();
        while self.peek_is(TokenKind::ElseIf) {
            self.advance();

            let (condition, consequence) = self.parse_conditional_branch()?;
            else_ifs.push(ConditionalBranch { condition, consequence });
        }

        let mut alternative = None;
        if self.peek_is(TokenKind::Else) {
            self.advance();
            self.expect_peek(TokenKind::OpenBrace)?;

            alternative = Some(self.parse_block_stmt()?);
        }

        Ok(Expr::If(IfExpr {
            token,
            condition: Box::new(condition),
            consequence,
            else_ifs,
            alternative,
        }))
    }

    // the current token is the keyword that introduces the branch
    fn parse_conditional_branch(&mut self) -> InternalResult<(Expr, BlockStmt)> {
        self.expect_peek(TokenKind::OpenParen)?;
        self.advance();

        let condition = self.parse_expression(Precedence::Lowest)?;

        self.expect_peek(TokenKind::CloseParen)?;
        self.expect_peek(TokenKind::OpenBrace)?;

        let consequence = self.parse_block_stmt()?;

        Ok((condition, consequence))
    }

    // function-literal ::= "fn" "(" ( IDENTIFIER ( "," IDENTIFIER )* )? ")" block ;
    fn parse_function_literal(&mut self) -> InternalResult<Expr> {
        let token = self.current.token.clone();

        self.expect_peek(TokenKind::OpenParen)?;
        let params = self.parse_function_params()?;

        self.expect_peek(TokenKind::OpenBrace)?;
        let body = self.parse_block_stmt()?;

        Ok(Expr::Function(FunctionLiteral {
            token,
            params: params.into(),
            body: Rc::new(body),
        }))
    }

    fn parse_function_params(&mut self) -> InternalResult<Vec<Identifier>> {
        let mut params = Vec::new();

        if self.peek_is(TokenKind::CloseParen) {
            self.advance();
            return Ok(params);
        }

        self.expect_peek(TokenKind::Ident)?;
        params.push(self.current_identifier());

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.expect_peek(TokenKind::Ident)?;
            params.push(self.current_identifier());
        }

        self.expect_peek(TokenKind::CloseParen)?;

        Ok(params)
    }

    /*** Infix Handlers ***/

    // the current token is the operator
    fn parse_infix_expr(&mut self, op: BinaryOp, left: Expr) -> InternalResult<Expr> {
        let token = self.current.token.clone();
        self.advance();

        // binding at the operator's own level makes equal precedence left-associative
        let right = self.parse_expression(op.precedence_level())?;

        Ok(Expr::Infix(InfixExpr {
            token, op,
            left: Box::new(left),
            right: Box::new(right),
        }))
    }

    // invocation ::= primary "(" ( expression ( "," expression )* )? ")" ;
    fn parse_call_expr(&mut self, function: Expr) -> InternalResult<Expr> {
        let token = self.current.token.clone();
        let args = self.parse_expression_list(TokenKind::CloseParen)?;

        Ok(Expr::Call(CallExpr {
            token,
            function: Box::new(function),
            args,
        }))
    }

    // subscript ::= primary "[" expression "]" ;
    fn parse_index_expr(&mut self, left: Expr) -> InternalResult<Expr> {
        let token = self.current.token.clone();
        self.advance();

        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::CloseSquare)?;

        Ok(Expr::Index(IndexExpr {
            token,
            left: Box::new(left),
            index: Box::new(index),
        }))
    }

    // comma separated expressions, the current token is the opening delimiter
    fn parse_expression_list(&mut self, end: TokenKind) -> InternalResult<Vec<Expr>> {
        let mut list = Vec::new();

        if self.peek_is(end) {
            self.advance();
            return Ok(list);
        }

        self.advance();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.advance();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(end)?;

        Ok(list)
    }
}
