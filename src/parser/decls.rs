use crate::lexer::tokens::TokenKind;

use super::{
    expr::{parse_expression, parse_id_chain},
    parser::Parser,
    stmt::parse_compound_stmt,
};

/// Program level: zero or more of inclusion directive, comment, or
/// declaration. Anything else ends the loop and is caught by the
/// end-of-stream check in `Parser::parse`.
pub fn parse_declarations(parser: &mut Parser) {
    while parser.current_kind().is_data_type()
        || parser.current_kind() == TokenKind::Inclusion
        || parser.current_kind() == TokenKind::CommentStart
        || parser.current_kind() == TokenKind::LineCommentStart
    {
        if parser.current_kind() == TokenKind::Inclusion {
            parse_include_command(parser);
        } else if parser.current_kind() == TokenKind::CommentStart
            || parser.current_kind() == TokenKind::LineCommentStart
        {
            parse_comment(parser);
        } else {
            parse_declaration(parser);
        }
    }
}

pub fn parse_declaration(parser: &mut Parser) {
    if parser.current_kind().is_data_type() {
        let is_struct = parser.current_kind() == TokenKind::Struct;
        parse_type_specifier(parser);
        if parser.current_kind() == TokenKind::Identifier {
            parse_id_chain(parser);
            if parser.at_brace("(") {
                parser.trace_rule("Function-declaration");
                parser.set_function_scope(true);
                parse_fun_dec(parser);
                parser.set_function_scope(false);
            } else if parser.at_brace("{") {
                parser.trace_rule("Struct-declaration");
                parse_struct_dec(parser);
            } else {
                parser.trace_rule("Variable-declaration");
                parse_var_dec(parser, is_struct, true);
            }
        } else {
            parser.recover();
        }
    } else {
        parser.recover();
    }
}

pub fn parse_type_specifier(parser: &mut Parser) {
    if parser.current_kind().is_data_type() {
        parser.next_token();
    } else {
        parser.recover();
    }
}

pub fn parse_struct_dec(parser: &mut Parser) {
    if parser.at_brace("{") {
        parser.next_token();
        parse_local_decs(parser);
        if parser.at_brace("}") {
            parser.next_token();
            if parser.current_kind() == TokenKind::Semicolon {
                parser.next_token();
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

/// Variable tail after the type specifier and name have been consumed.
/// `is_struct` declarations carry the struct's type name before the
/// variable name, so the chain is parsed twice. With `consume_semi`
/// false (loop-init clauses) the terminating semicolon is left for the
/// caller.
pub fn parse_var_dec(parser: &mut Parser, is_struct: bool, consume_semi: bool) {
    if parser.current_kind() == TokenKind::Identifier {
        if is_struct {
            parse_id_chain(parser);
        }
        parse_id_chain(parser);
        if parser.current_kind() == TokenKind::AssignmentOp {
            if !parser.in_function_scope() {
                let line = parser.report_line();
                parser.push_diagnostic(
                    line,
                    format!(
                        "Line : {} ERROR: Variable initialization only allowed inside function",
                        line
                    ),
                );
                parser.recover();
            } else {
                parser.next_token();
                parse_expression(parser);
            }
        }
        if parser.at_brace("[") {
            parser.next_token();
            if parser.current_kind() == TokenKind::Constant {
                parser.next_token();
                if parser.at_brace("]") {
                    parser.next_token();
                } else {
                    parser.recover();
                }
            } else {
                parser.recover();
            }
        }
    } else if parser.current_kind() == TokenKind::ArithmeticOp && parser.current().text == "*" {
        parser.next_token();
        if parser.current_kind() == TokenKind::Identifier {
            parse_id_chain(parser);
        } else {
            parser.recover();
        }
    } else if parser.current_kind() == TokenKind::Semicolon {
        if consume_semi {
            parser.next_token();
        }
        return;
    } else {
        parser.recover();
    }

    if !consume_semi {
        return;
    }
    if parser.current_kind() == TokenKind::Semicolon {
        parser.next_token();
    } else {
        parser.recover();
    }
}

pub fn parse_local_decs(parser: &mut Parser) {
    while parser.current_kind().is_data_type() {
        let is_struct = parser.current_kind() == TokenKind::Struct;
        parse_type_specifier(parser);
        parse_var_dec(parser, is_struct, true);
    }
}

pub fn parse_fun_dec(parser: &mut Parser) {
    if parser.at_brace("(") {
        parser.next_token();
        parse_params(parser);
        if parser.at_brace(")") {
            parser.next_token();
            if parser.at_brace("{") {
                parse_compound_stmt(parser);
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

pub fn parse_params(parser: &mut Parser) {
    if parser.current_kind() == TokenKind::Void {
        parser.next_token();
        return;
    }
    if parser.current_kind().is_data_type() {
        parse_param_list(parser);
    }
}

pub fn parse_param_list(parser: &mut Parser) {
    parse_param(parser);
    parse_p_list(parser);
}

pub fn parse_p_list(parser: &mut Parser) {
    if parser.current_kind() == TokenKind::Comma {
        parser.next_token();
        parse_param(parser);
        parse_p_list(parser);
    }
}

pub fn parse_param(parser: &mut Parser) {
    if parser.current_kind().is_data_type() {
        if parser.current_kind() == TokenKind::Struct {
            parser.next_token();
        }
        parser.next_token();
        if parser.current_kind() == TokenKind::Identifier {
            parse_id_chain(parser);
        } else {
            parser.recover();
        }
    } else {
        parser.recover();
    }
}

/// Comments reach the recognizer as their token triples/pairs and count
/// as a matched production. A block comment closed by the
/// invalid-comment placeholder still matches; the flagged token was
/// already counted on the lexical side.
pub fn parse_comment(parser: &mut Parser) {
    if parser.current_kind() == TokenKind::CommentStart {
        parser.next_token();
        if parser.current_kind() == TokenKind::CommentContent {
            parser.next_token();
        }
        if parser.current_kind() == TokenKind::CommentEnd
            || parser.current_kind() == TokenKind::InvalidComment
        {
            parser.next_token();
        } else {
            parser.recover();
            return;
        }
        parser.trace_rule("Comment");
    } else if parser.current_kind() == TokenKind::LineCommentStart {
        parser.next_token();
        if parser.current_kind() == TokenKind::LineCommentContent {
            parser.next_token();
        }
        parser.trace_rule("Comment");
    } else {
        parser.recover();
    }
}

pub fn parse_include_command(parser: &mut Parser) {
    if parser.current_kind() == TokenKind::Inclusion {
        parser.next_token();
        if parser.current_kind() == TokenKind::StringLiteral
            || parser.current_kind() == TokenKind::InvalidInclusion
        {
            parse_f_name(parser);
            if parser.current_kind() == TokenKind::Semicolon {
                parser.trace_rule("Include-command");
                parser.next_token();
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

pub fn parse_f_name(parser: &mut Parser) {
    if parser.current_kind() == TokenKind::StringLiteral
        || parser.current_kind() == TokenKind::InvalidInclusion
    {
        parser.next_token();
    } else {
        parser.recover();
    }
}
