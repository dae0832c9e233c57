use super::*;
use crate::repr::Repr;
use pretty_assertions::assert_eq;

fn stmt(expression: Expression) -> Option<Body> {
    Some(Body::from(expression))
}

fn clause(condition: &str, body: Vec<Option<Body>>) -> IfClause {
    IfClause {
        condition: Box::new(ident(condition)),
        body,
    }
}

#[test]
fn test_if_with_two_clauses_and_else() {
    let if_body = body(BodyKind::If(If {
        clauses: vec![
            clause("c1", vec![stmt(ident("b1"))]),
            clause("c2", vec![]),
        ],
        else_body: vec![stmt(ident("e"))],
    }));

    assert_eq!(
        if_body.repr(0),
        "if:\n\tif clause:\n\t\tcondition:\n\t\t\tc1\n\t\tbody:\n\t\t\tb1\
         \n\tif clause:\n\t\tcondition:\n\t\t\tc2\
         \n\telse body:\n\t\te"
    );
}

#[test]
fn test_if_without_clauses_or_else() {
    let if_body = body(BodyKind::If(If {
        clauses: vec![],
        else_body: vec![],
    }));
    assert_eq!(if_body.repr(0), "if:");
}

#[test]
fn test_while_nested_in_function() {
    let main = Function::new(["main"], span()).with_body(vec![body(BodyKind::While(While {
        condition: Box::new(ident("x")),
        body: vec![Some(body(BodyKind::Statement(Statement::Break {
            loop_count: 1,
        })))],
    }))]);

    assert_eq!(
        main.repr(0),
        "function:\n\tstatic: false\n\taccess: public\n\tname: main\n\targument(s): [none]\
         \n\tbody:\n\t\twhile:\n\t\t\tcondition:\n\t\t\t\tx\n\t\t\tbody:\n\t\t\t\tstatement: break 1"
    );
}

#[test]
fn test_empty_loop_bodies_are_omitted() {
    let while_body = body(BodyKind::While(While {
        condition: Box::new(ident("running")),
        body: vec![],
    }));
    assert_eq!(while_body.repr(0), "while:\n\tcondition:\n\t\trunning");

    let do_while = body(BodyKind::DoWhile(DoWhile {
        body: vec![stmt(ident("b"))],
        condition: Box::new(ident("x")),
    }));
    assert_eq!(
        do_while.repr(0),
        "do while:\n\tcondition:\n\t\tx\n\tbody:\n\t\tb"
    );
}

#[test]
fn test_for_parts() {
    let full = body(BodyKind::For(For {
        initializer: Some(Box::new(ident("i"))),
        condition: Some(Box::new(ident("c"))),
        step: Some(Box::new(ident("s"))),
        body: vec![stmt(ident("b"))],
    }));
    assert_eq!(
        full.repr(0),
        "for:\n\tinitializer:\n\t\ti\n\tcondition:\n\t\tc\n\tstep:\n\t\ts\n\tbody:\n\t\tb"
    );

    let bare = body(BodyKind::For(For {
        initializer: None,
        condition: None,
        step: None,
        body: vec![],
    }));
    assert_eq!(bare.repr(0), "for:");

    let step_only = body(BodyKind::For(For {
        initializer: None,
        condition: None,
        step: Some(Box::new(ident("i"))),
        body: vec![None],
    }));
    assert_eq!(step_only.repr(0), "for:\n\tstep:\n\t\ti\n\tbody:");
}

#[test]
fn test_foreach_targets_and_iterator() {
    let for_each = body(BodyKind::ForEach(ForEach {
        targets: vec![
            Some(Declaration::new("t1", span())),
            None,
            Some(Declaration::new("t2", span())),
        ],
        iterator: Box::new(ident("it")),
        body: vec![],
    }));

    assert_eq!(
        for_each.repr(0),
        "foreach:\n\ttarget(s):\n\t\tdeclare:\n\t\t\tname: t1\n\t\tdeclare:\n\t\t\tname: t2\
         \n\titerator:\n\t\tit"
    );
}

#[test]
fn test_statements() {
    let repr = |statement: Statement| body(BodyKind::Statement(statement)).repr(0);

    assert_eq!(repr(Statement::Continue { loop_count: 2 }), "statement: continue 2");
    assert_eq!(repr(Statement::Break { loop_count: 1 }), "statement: break 1");
    assert_eq!(repr(Statement::Return(None)), "statement: return");
    assert_eq!(
        repr(Statement::Return(Some(Box::new(int(0))))),
        "statement: return\n\tinteger: 0"
    );
}

#[test]
fn test_expression_body_renders_expression() {
    assert_eq!(Body::from(ident("std.exit")).repr(3), "std.exit");
}

#[test]
fn test_body_kind_names() {
    assert_eq!(Body::from(ident("x")).kind.name(), "identifier");
    assert_eq!(
        body(BodyKind::DoWhile(DoWhile {
            body: vec![],
            condition: Box::new(ident("x")),
        }))
        .kind
        .name(),
        "do while"
    );
    assert_eq!(
        body(BodyKind::Statement(Statement::Return(None))).kind.name(),
        "statement"
    );
}
