use lazy_static::lazy_static;
use regex::Regex;

use crate::lexer::tokens::TokenKind;

use super::parser::Parser;

lazy_static! {
    static ref IDENT_START: Regex = Regex::new("^[A-Za-z_]").unwrap();
}

/// An expression opening with an identifier may be an assignment or a
/// plain expression, and one token of lookahead cannot tell: the
/// identifier may be qualified before the deciding token appears. The
/// chain is parsed speculatively; without an assignment operator after
/// it, the checkpoint rewinds (dropping any trace entries and error
/// increments from the attempt) and the tokens re-parse as a simple
/// expression.
pub fn parse_expression(parser: &mut Parser) {
    if parser.current_kind() == TokenKind::Identifier {
        let checkpoint = parser.checkpoint();
        parse_id_chain(parser);
        if parser.current_kind() == TokenKind::AssignmentOp {
            parser.next_token();
            parse_expression(parser);
        } else {
            parser.rewind(checkpoint);
            parse_simple_expression(parser);
        }
    } else {
        parse_simple_expression(parser);
    }
}

/// Identifier, optionally followed by access chains or one bracketed
/// index.
pub fn parse_id_chain(parser: &mut Parser) {
    if parser.current_kind() == TokenKind::Identifier {
        if !IDENT_START.is_match(&parser.current().text) {
            let line = parser.current().line;
            parser.push_diagnostic(
                line,
                format!(
                    "Line : {} Not Matched Error: Invalid identifier \"{}\"",
                    line,
                    parser.current().text
                ),
            );
            parser.recover();
        } else {
            parser.next_token();
            if parser.current_kind() == TokenKind::AccessOp {
                parser.next_token();
                parse_id_chain(parser);
            } else if parser.at_brace("[") {
                parser.next_token();
                if parser.current_kind() == TokenKind::Identifier {
                    parse_id_chain(parser);
                } else if parser.current_kind() == TokenKind::Constant {
                    parser.next_token();
                } else {
                    parser.recover();
                }
                if !parser.at_brace("]") {
                    parser.recover();
                } else {
                    parser.next_token();
                }
            }
        }
    } else {
        parser.recover();
    }
}

pub fn parse_simple_expression(parser: &mut Parser) {
    parse_additive_expression(parser);
    if parser.current_kind() == TokenKind::RelationalOp
        || parser.current_kind() == TokenKind::LogicOp
    {
        parse_relop(parser);
        parse_additive_expression(parser);
    }
}

pub fn parse_relop(parser: &mut Parser) {
    if parser.current_kind() == TokenKind::RelationalOp
        || parser.current_kind() == TokenKind::LogicOp
    {
        parser.next_token();
    } else {
        parser.recover();
    }
}

pub fn parse_additive_expression(parser: &mut Parser) {
    parse_term(parser);
    parse_additive_expression_prime(parser);
}

fn parse_additive_expression_prime(parser: &mut Parser) {
    if parser.current_kind() == TokenKind::AddOp {
        parse_add_op(parser);
        parse_term(parser);
        parse_additive_expression_prime(parser);
    }
}

pub fn parse_add_op(parser: &mut Parser) {
    if parser.current_kind() == TokenKind::AddOp {
        parser.next_token();
    } else {
        parser.recover();
    }
}

pub fn parse_term(parser: &mut Parser) {
    parse_factor(parser);
    parse_term_prime(parser);
}

fn parse_term_prime(parser: &mut Parser) {
    if parser.current_kind() == TokenKind::MulOp {
        parse_mul_op(parser);
        parse_factor(parser);
        parse_term_prime(parser);
    }
}

pub fn parse_mul_op(parser: &mut Parser) {
    if parser.current_kind() == TokenKind::MulOp {
        parser.next_token();
    } else {
        parser.recover();
    }
}

pub fn parse_factor(parser: &mut Parser) {
    match parser.current_kind() {
        TokenKind::Brace => {
            if parser.current().text == "(" {
                parser.next_token();
                parse_expression(parser);
                if parser.at_brace(")") {
                    parser.next_token();
                } else {
                    parser.recover();
                }
            } else {
                parser.recover();
            }
        }
        TokenKind::Identifier => {
            parse_id_chain(parser);
            if parser.at_brace("(") {
                parse_call(parser);
            } else if parser.current_kind() == TokenKind::AccessOp {
                parser.next_token();
                parse_id_chain(parser);
            }
        }
        TokenKind::Constant | TokenKind::StringLiteral | TokenKind::CharacterLiteral => {
            parser.next_token();
        }
        TokenKind::AddOp => {
            parse_signed_num(parser);
        }
        TokenKind::ArithmeticOp => {
            if parser.current().text == "*" {
                parser.next_token();
                parse_factor(parser);
            } else {
                parser.recover();
            }
        }
        _ => parser.recover(),
    }
}

pub fn parse_call(parser: &mut Parser) {
    if parser.at_brace("(") {
        parser.next_token();
        parse_args(parser);
        if parser.at_brace(")") {
            parser.next_token();
        } else {
            parser.recover();
        }
    } else {
        parser.recover();
    }
}

pub fn parse_args(parser: &mut Parser) {
    if !parser.at_brace(")") {
        parse_arg_list(parser);
    }
}

pub fn parse_arg_list(parser: &mut Parser) {
    parse_expression(parser);
    parse_a_list(parser);
}

fn parse_a_list(parser: &mut Parser) {
    if parser.current_kind() == TokenKind::Comma {
        parser.next_token();
        parse_expression(parser);
        parse_a_list(parser);
    }
}

pub fn parse_signed_num(parser: &mut Parser) {
    if parser.current_kind() == TokenKind::AddOp {
        if parser.current().text == "+" {
            parse_pos_num(parser);
        } else if parser.current().text == "-" {
            parse_neg_num(parser);
        } else {
            parser.recover();
        }
    } else {
        parser.recover();
    }
}

fn parse_pos_num(parser: &mut Parser) {
    if parser.current_kind() == TokenKind::AddOp && parser.current().text == "+" {
        parser.next_token();
        parse_value(parser);
    } else {
        parser.recover();
    }
}

fn parse_neg_num(parser: &mut Parser) {
    if parser.current_kind() == TokenKind::AddOp && parser.current().text == "-" {
        parser.next_token();
        parse_value(parser);
    } else {
        parser.recover();
    }
}

fn parse_value(parser: &mut Parser) {
    if parser.current_kind() == TokenKind::Constant {
        parser.next_token();
    } else {
        parser.recover();
    }
}
