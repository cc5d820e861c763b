use crate::lexer::tokens::{Token, TokenKind};

use super::{
    decls::{parse_comment, parse_local_decs, parse_type_specifier, parse_var_dec},
    expr::parse_expression,
    parser::Parser,
};

fn is_start_of_statement(token: &Token) -> bool {
    token.kind == TokenKind::Identifier
        || token.kind == TokenKind::Constant
        || token.kind == TokenKind::StringLiteral
        || token.kind == TokenKind::CharacterLiteral
        || (token.kind == TokenKind::Brace && (token.text == "(" || token.text == "{"))
        || token.kind == TokenKind::Condition
        || token.kind == TokenKind::Loop
        || token.kind == TokenKind::Return
        || token.kind == TokenKind::Break
}

pub fn parse_compound_stmt(parser: &mut Parser) {
    if parser.at_brace("{") {
        parser.next_token();
        if parser.current_kind() == TokenKind::CommentStart
            || parser.current_kind() == TokenKind::LineCommentStart
        {
            parse_comment(parser);
        }
        parse_local_decs(parser);
        parse_stmt_list(parser);
        if parser.at_brace("}") {
            parser.next_token();
        } else {
            parser.recover();
        }
    } else {
        parser.recover();
    }
}

pub fn parse_stmt_list(parser: &mut Parser) {
    while is_start_of_statement(parser.current()) {
        parse_statement(parser);
    }
}

pub fn parse_statement(parser: &mut Parser) {
    match parser.current_kind() {
        TokenKind::Identifier
        | TokenKind::Constant
        | TokenKind::StringLiteral
        | TokenKind::CharacterLiteral => {
            parser.trace_rule("Expression-statement");
            parse_expression_stmt(parser);
        }
        TokenKind::Brace => {
            if parser.current().text == "(" {
                parser.trace_rule("Expression-statement");
                parse_expression_stmt(parser);
            } else if parser.current().text == "{" {
                parser.trace_rule("Compound-statement");
                parse_compound_stmt(parser);
            } else {
                parser.recover();
            }
        }
        TokenKind::Condition => {
            parser.trace_rule("Selection-statement");
            parse_selection_stmt(parser);
        }
        TokenKind::Loop => {
            parser.trace_rule("Iteration-statement");
            parse_iteration_stmt(parser);
        }
        TokenKind::Return | TokenKind::Break => {
            parser.trace_rule("Jump-statement");
            parse_jump_stmt(parser);
        }
        _ => parser.recover(),
    }
}

pub fn parse_expression_stmt(parser: &mut Parser) {
    if parser.current_kind() == TokenKind::Semicolon {
        parser.next_token();
        return;
    }
    parse_expression(parser);
    if parser.current_kind() == TokenKind::Semicolon {
        parser.next_token();
    } else {
        parser.recover();
    }
}

pub fn parse_selection_stmt(parser: &mut Parser) {
    if parser.current_kind() == TokenKind::Condition {
        parser.next_token();
        if parser.at_brace("(") {
            parser.next_token();
            parse_expression(parser);
            if parser.at_brace(")") {
                parser.next_token();
                parse_statement(parser);
                if parser.current_kind() == TokenKind::Condition
                    && parser.current().text == "Otherwise"
                {
                    parser.next_token();
                    parse_statement(parser);
                }
            } else {
                parser.recover();
            }
        } else {
            parser.recover();
        }
    } else {
        parser.recover();
    }
}

/// Both loop forms share the loop keyword category; the spelling picks
/// the production. The three-clause form's init may be a type-led
/// declaration, parsed in semicolon-optional mode so the clause
/// separator is consumed here, once.
pub fn parse_iteration_stmt(parser: &mut Parser) {
    if parser.current_kind() == TokenKind::Loop {
        if parser.current().text == "Reiterate" {
            parser.next_token();
            if parser.at_brace("(") {
                parser.next_token();
                if parser.current_kind().is_data_type() {
                    parse_type_specifier(parser);
                    parse_var_dec(parser, false, false);
                } else {
                    parse_expression(parser);
                }
                if parser.current_kind() == TokenKind::Semicolon {
                    parser.next_token();
                    parse_expression(parser);
                    if parser.current_kind() == TokenKind::Semicolon {
                        parser.next_token();
                        parse_expression(parser);
                        if parser.at_brace(")") {
                            parser.next_token();
                            parse_statement(parser);
                        } else {
                            parser.recover();
                        }
                    } else {
                        parser.recover();
                    }
                } else {
                    parser.recover();
                }
            } else {
                parser.recover();
            }
        } else {
            parser.next_token();
            if parser.at_brace("(") {
                parser.next_token();
                parse_expression(parser);
                if parser.at_brace(")") {
                    parser.next_token();
                    parse_statement(parser);
                } else {
                    parser.recover();
                }
            } else {
                parser.recover();
            }
        }
    } else {
        parser.recover();
    }
}

pub fn parse_jump_stmt(parser: &mut Parser) {
    if parser.current_kind() == TokenKind::Return {
        parser.next_token();
        if parser.current_kind() != TokenKind::Semicolon {
            parse_expression(parser);
        }
        if parser.current_kind() == TokenKind::Semicolon {
            parser.next_token();
        } else {
            parser.recover();
        }
    } else if parser.current_kind() == TokenKind::Break {
        parser.next_token();
        if parser.current_kind() == TokenKind::Semicolon {
            parser.next_token();
        } else {
            parser.recover();
        }
    } else {
        parser.recover();
    }
}
