use super::*;

#[test]
fn test_numbered_type() {
    let (ln, tokens) = lex("1.10 T \"HI\"!");
    assert_eq!(ln, Some(110));
    assert_eq!(
        tokens,
        [
            Token::Word(Word::Type("T".into())),
            Token::Whitespace(1),
            Token::Literal(Literal::String("HI".into())),
            Token::Bang,
        ]
    );
}

#[test]
fn test_single_step_digit_is_tens() {
    assert_eq!(lex("2.1 Q").0, Some(210));
    assert_eq!(lex("2.01 Q").0, Some(201));
    assert_eq!(lex("31.99 Q").0, Some(3199));
}

#[test]
fn test_not_a_line_number() {
    assert_eq!(lex("2 Q").0, None);
    assert_eq!(lex("2.0 Q").0, None);
    assert_eq!(lex("2.123 Q").0, None);
    assert_eq!(lex("32.10 Q").0, None);
}

#[test]
fn test_encoded_and_exponent_literals() {
    let (_, tokens) = lex("S A=0YES");
    assert_eq!(tokens.last(), Some(&Token::Literal(Literal::Encoded("0YES".into()))));
    let (_, tokens) = lex("S A=1E-3");
    assert_eq!(tokens.last(), Some(&Token::Literal(Literal::Number("1E-3".into()))));
}

#[test]
fn test_words_only_at_statement_start() {
    let (_, tokens) = lex("S T=1;T T");
    assert_eq!(tokens[0], Token::Word(Word::Set("S".into())));
    assert_eq!(tokens[2], Token::Ident("T".into()));
    assert_eq!(tokens[6], Token::Word(Word::Type("T".into())));
    assert_eq!(tokens[8], Token::Ident("T".into()));
}

#[test]
fn test_comment_swallows_line() {
    let (_, tokens) = lex("c hello; type 1   ");
    assert_eq!(
        tokens,
        [
            Token::Word(Word::Comment("C".into())),
            Token::Unknown(" hello; type 1".into()),
        ]
    );
}
