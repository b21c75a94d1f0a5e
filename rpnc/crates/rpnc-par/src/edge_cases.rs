//! Edge case tests for rpnc-par

#[cfg(test)]
mod tests {
    use crate::{parse, render, Parser, PostfixItem, PostfixKind};
    use rpnc_lex::Lexer;
    use rpnc_util::{ErrorKind, Position};

    fn translate(input: &str) -> String {
        match parse(input) {
            Ok(record) => render(&record),
            Err(err) => panic!("{:?} should parse, got: {}", input, err),
        }
    }

    fn error(input: &str) -> String {
        match parse(input) {
            Ok(record) => panic!("{:?} should fail, got: {}", input, render(&record)),
            Err(err) => err.to_string(),
        }
    }

    // ==================== STATEMENTS ====================

    #[test]
    fn test_edge_assignments() {
        assert_eq!(translate("a= \t10-5\n\n"), "a 10 5 - =");
        assert_eq!(translate("a=b\n"), "a b =");
        assert_eq!(translate("a =+2\n"), "a 2 u+ =");
        assert_eq!(translate("a  =  -2\n"), "a 2 u- =");
        assert_eq!(translate("e1 = 0\n"), "e1 0 =");
        assert_eq!(translate("a=( b )\n"), "a b =");
    }

    #[test]
    fn test_edge_invalid_assignments() {
        assert_eq!(error("a=="), "expected expression, got '='");
        assert_eq!(error("a=\n"), "expected expression, got end of line");
        assert_eq!(error("a=*"), "expected expression, got '*'");
        assert_eq!(error("a=/help"), "expected expression, got '/'");
        assert_eq!(error("a=1=2"), "expected end of line, got '='");
    }

    #[test]
    fn test_edge_assignment_item_kinds() {
        let record = parse("x = 1.5").unwrap();
        assert_eq!(
            record,
            vec![
                PostfixItem::new(PostfixKind::Identifier, "x"),
                PostfixItem::new(PostfixKind::Float, "1.5"),
                PostfixItem::new(PostfixKind::Assign, "="),
            ]
        );
    }

    #[test]
    fn test_edge_commands() {
        assert_eq!(translate(" /help  \n"), "help");
        assert_eq!(parse("/exit").unwrap(), vec![PostfixItem::command("/exit")]);
        assert_eq!(error("/go*1"), "expected end of line, got '*'");
        assert_eq!(error("/go  1"), "expected end of line, got '1'");
        assert_eq!(error("/a /b"), "expected end of line, got '/b'");
    }

    #[test]
    fn test_edge_bare_slash_is_not_a_command() {
        assert_eq!(error("/"), "expected expression or command, got '/'");
        assert_eq!(error("/ help"), "expected expression or command, got '/'");
    }

    #[test]
    fn test_edge_empty_statements() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse(" \n \n\n\n").unwrap().is_empty());
        assert!(parse("\t").unwrap().is_empty());
        assert!(parse("\t\r\n").unwrap().is_empty());
    }

    #[test]
    fn test_edge_invalid_statement_starts() {
        assert_eq!(error("*1"), "expected expression or command, got '*'");
        assert_eq!(error(")a"), "expected expression or command, got ')'");
        assert_eq!(error("!"), "expected expression or command, got '!'");
        assert_eq!(error(",1"), "expected expression or command, got ','");
        assert_eq!(error("=1"), "expected expression or command, got '='");
    }

    // ==================== EXPRESSIONS ====================

    #[test]
    fn test_edge_simple_expressions() {
        assert_eq!(translate("5\n"), "5");
        assert_eq!(translate("e\n"), "e");
        assert_eq!(translate("+ 10\n"), "10 u+");
        assert_eq!(translate("(1)\n"), "1");
        assert_eq!(translate("1-1\n"), "1 1 -");
        assert_eq!(translate("a + b\n"), "a b +");
        assert_eq!(translate("10 -  2\n"), "10 2 -");
        assert_eq!(translate("\t 20\t*\t32\n"), "20 32 *");
        assert_eq!(translate("10/0\n"), "10 0 /");
        assert_eq!(translate("10/a\n"), "10 a /");
        assert_eq!(translate("41  ^ \t 11\n"), "41 11 ^");
        assert_eq!(translate("5!\n"), "5 !");
    }

    #[test]
    fn test_edge_adjacent_values_without_implicit_product() {
        // Only numbers and `)` imply a product; blanks and postfix
        // operators do not.
        assert_eq!(error("24 12"), "expected end of line, got '12'");
        assert_eq!(error("10!a"), "expected end of line, got 'a'");
        assert_eq!(error("2!!%2"), "expected end of line, got '2'");
        assert_eq!(error("a b"), "expected end of line, got 'b'");
    }

    #[test]
    fn test_edge_association() {
        assert_eq!(translate("9 + 1 - 2\n"), "9 1 + 2 -");
        assert_eq!(translate("12 * 8 / 21\n"), "12 8 * 21 /");
        assert_eq!(translate(" +-+++ 12\n"), "12 u+ u+ u+ u- u+");
        assert_eq!(translate("2^3^9\n"), "2 3 9 ^ ^");
    }

    #[test]
    fn test_edge_priorities_without_parentheses() {
        assert_eq!(translate("1 - 2e\n"), "1 2 e * -");
        assert_eq!(translate("1 - +-2e\n"), "1 2 u- u+ e * -");
        assert_eq!(
            translate("--+10 +-+-+-+ +-13\n"),
            "10 u+ u- u- 13 u- u+ u+ u- u+ u- u+ u- +"
        );
        assert_eq!(translate("--10 %+ -10\n"), "10 % u- u- 10 u- +");
        assert_eq!(translate("-7^+-2!\n"), "7 2 ! u- u+ ^ u-");
        assert_eq!(
            translate("-7^+-2!!^-7  \t- +- \t4 * --4var/another_var\n"),
            "7 2 ! ! 7 u- ^ u- u+ ^ u- 4 u- u+ 4 u- u- * var * another_var / -"
        );
    }

    #[test]
    fn test_edge_invalid_without_parentheses() {
        assert_eq!(error("-7+\n"), "expected expression, got end of line");
        assert_eq!(error("abc/%\n"), "expected expression, got '%'");
        assert_eq!(error("+/abc\n"), "expected expression, got '/'");
        assert_eq!(error("-7^*2"), "expected expression, got '*'");
    }

    #[test]
    fn test_edge_priorities_with_parentheses() {
        assert_eq!(translate("(1 + 2) * 3\n"), "1 2 + 3 *");
        assert_eq!(translate("(1 - 2)e\n"), "1 2 - e *");
        assert_eq!(
            translate("(((-7)^(+2)!!)^-7 - +-4) * (--4var/another_var)\n"),
            "7 u- 2 u+ ! ! ^ 7 u- ^ 4 u- u+ - 4 u- u- var * another_var / *"
        );
    }

    #[test]
    fn test_edge_invalid_with_parentheses() {
        assert_eq!(error("()\n"), "expected expression, got ')'");
        assert_eq!(error("(1"), "expected ')', got end of line");
        assert_eq!(error("(1 + 2 * 3"), "expected ')', got end of line");
        assert_eq!(error("(2,"), "expected ')', got ','");
        assert_eq!(error("1)"), "expected end of line, got ')'");
    }

    // ==================== CALLS ====================

    #[test]
    fn test_edge_calls() {
        assert_eq!(translate("log(2, 1)"), "log 2 put_arg 1 put_arg invoke");
        assert_eq!(translate("f()"), "f invoke");
        assert_eq!(translate("f ( )"), "f invoke");
        assert_eq!(translate("max(a+1, -b, c!)"), "max a 1 + put_arg b u- put_arg c ! put_arg invoke");
        assert_eq!(translate("2f(x)"), "2 f x put_arg invoke *");
        assert_eq!(translate("f(x)(y)"), "f x put_arg invoke y *");
        assert_eq!(translate("y = -f(x)^2"), "y f x put_arg invoke 2 ^ u- =");
    }

    #[test]
    fn test_edge_call_item_kinds() {
        let record = parse("f(1)").unwrap();
        assert_eq!(record[2], PostfixItem::new(PostfixKind::Action, "put_arg"));
        assert_eq!(record[3], PostfixItem::new(PostfixKind::Action, "invoke"));
    }

    #[test]
    fn test_edge_invalid_calls() {
        assert_eq!(error("f(,)"), "expected expression, got ','");
        assert_eq!(error("f(1,)"), "expected expression, got ')'");
        assert_eq!(error("f(1 2)"), "expected ')', got '2'");
        assert_eq!(error("f(1"), "expected ')', got end of line");
    }

    // ==================== ERRORS ====================

    #[test]
    fn test_edge_lexical_errors_abort_statement() {
        let err = parse("a = 1 + @").unwrap_err();
        assert_eq!(err.to_string(), "illegal character '@'");
        assert_eq!(err.kind(), ErrorKind::Lexical);
        assert_eq!(err.position(), Position::new(1, 9));

        assert_eq!(error("1 + .x"), "illegal character '.'");
    }

    #[test]
    fn test_edge_error_positions() {
        let err = parse("a=1=2").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(err.position(), Position::new(1, 4));

        let err = parse("(1 + 2").unwrap_err();
        assert_eq!(err.position(), Position::new(1, 7));

        let err = parse("\tx y").unwrap_err();
        assert_eq!(err.position(), Position::new(1, 7));
    }

    #[test]
    fn test_edge_error_position_with_tab_width() {
        let err = Parser::new(Lexer::with_tab_width("\t)", 8))
            .parse()
            .unwrap_err();
        assert_eq!(err.position(), Position::new(1, 9));
    }

    // ==================== NESTING ====================

    #[test]
    fn test_edge_deeply_nested_parentheses() {
        let depth = 2000;
        let input = format!("{}1{}\n", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(translate(&input), "1");
    }

    #[test]
    fn test_edge_very_deep_nesting_does_not_overflow() {
        let depth = 100_000;
        let input = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(parse(&input).unwrap().len(), 1);

        let unclosed = format!("{}x", "(".repeat(depth));
        assert_eq!(
            parse(&unclosed).unwrap_err().to_string(),
            "expected ')', got end of line"
        );
    }

    #[test]
    fn test_edge_long_unary_chain() {
        let depth = 50_000;
        let input = format!("{}1", "-".repeat(depth));
        let record = parse(&input).unwrap();
        assert_eq!(record.len(), depth + 1);
        assert!(record[1..].iter().all(|item| item.lexeme == "u-"));
    }

    #[test]
    fn test_edge_long_power_chain() {
        let depth = 10_000;
        let input = vec!["2"; depth].join("^");
        let record = parse(&input).unwrap();
        assert_eq!(record.len(), 2 * depth - 1);
        assert!(record[..depth].iter().all(|item| item.lexeme == "2"));
        assert!(record[depth..].iter().all(|item| item.lexeme == "^"));
    }

    #[test]
    fn test_edge_deeply_nested_calls() {
        let depth = 5000;
        let input = format!("{}x{}", "f(".repeat(depth), ")".repeat(depth));
        let record = parse(&input).unwrap();
        assert_eq!(record.len(), 1 + depth * 3);
        assert_eq!(record.last(), Some(&PostfixItem::invoke()));
    }
}
