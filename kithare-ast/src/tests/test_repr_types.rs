use super::*;
use crate::repr::Repr;
use pretty_assertions::assert_eq;
use std::sync::Arc;

#[test]
fn test_enum_members_in_order() {
    let color = EnumType::new(["Color"], span())
        .with_member("RED", 0)
        .with_member("GREEN", 1);

    assert_eq!(
        color.repr(0),
        "enum:\n\tname: Color\n\tmember(s):\n\t\tRED: 0\n\t\tGREEN: 1"
    );
}

#[test]
fn test_enum_without_members() {
    let empty = EnumType::new(["kh", "Empty"], span());
    assert_eq!(empty.repr(0), "enum:\n\tname: kh.Empty\n\tmember(s):");
}

#[test]
fn test_symbolic_import() {
    let import = Import::import(["std"], "std", false, span());
    assert_eq!(
        import.repr(0),
        "import:\n\ttype: absolute\n\tpath: std\n\tidentifier: std"
    );
}

#[test]
fn test_include_has_no_identifier() {
    let include = Import::include(["a", "b"], true, span());
    assert_eq!(include.repr(0), "include:\n\ttype: relative\n\tpath: a.b");
}

#[test]
fn test_dotted_paths_with_repeated_segments() {
    let cases: [(&[&str], &str); 5] = [
        (&[], "path: "),
        (&["a"], "path: a"),
        (&["a", "a"], "path: a.a"),
        (&["a", "b", "a"], "path: a.b.a"),
        (&["x", "x", "x", "x"], "path: x.x.x.x"),
    ];

    for (path, expected) in cases {
        let import = Import::include(path.iter().copied(), false, span());
        let rendered = import.repr(0);
        let line = rendered.lines().nth(2).unwrap().trim_start();
        assert_eq!(line, expected);
        assert_eq!(
            line.matches('.').count(),
            path.len().saturating_sub(1),
            "separator count for {:?}",
            path
        );
    }
}

#[test]
fn test_class_with_base_members_and_methods() {
    let base = Arc::new(Identifier::new(["Base"]));
    let mut class = UserType::new(UserTypeKind::Class, ["Point"], span());
    class.bases.push(Some(base));
    class.generic_params = vec!["T".to_string(), "U".to_string()];
    class
        .members
        .push(Some(Declaration::new("x", span()).with_type(type_named("int"))));
    class.methods.push(Some(Function::new(["get"], span())));

    assert_eq!(
        class.repr(0),
        "class:\n\tname: Point\n\tbase(s):\n\t\tBase\n\tgeneric argument(s): T, U\
         \n\tmember(s):\n\t\tdeclare:\n\t\t\ttype: int\n\t\t\tname: x\
         \n\tmethod(s):\n\t\tfunction:\n\t\t\tstatic: false\n\t\t\taccess: public\
         \n\t\t\tname: get\n\t\t\targument(s): [none]\n\t\t\tbody:"
    );
}

#[test]
fn test_struct_skips_absent_members() {
    let mut point = UserType::new(UserTypeKind::Struct, ["geo", "Point"], span());
    point
        .members
        .push(Some(Declaration::new("x", span()).with_type(type_named("float"))));
    point.members.push(None);
    point
        .members
        .push(Some(Declaration::new("y", span()).with_type(type_named("float"))));

    assert_eq!(
        point.repr(0),
        "struct:\n\tname: geo.Point\n\tmember(s):\
         \n\t\tdeclare:\n\t\t\ttype: float\n\t\t\tname: x\
         \n\t\tdeclare:\n\t\t\ttype: float\n\t\t\tname: y"
    );
}

#[test]
fn test_shared_base_renders_identically_from_both_owners() {
    let base = Arc::new(Identifier::new(["shapes", "Shape"]));

    let mut circle = UserType::new(UserTypeKind::Class, ["Circle"], span());
    circle.bases.push(Some(Arc::clone(&base)));
    let mut square = UserType::new(UserTypeKind::Struct, ["Square"], span());
    square.bases.push(Some(Arc::clone(&base)));

    assert_eq!(Arc::strong_count(&base), 3);

    let circle_base = circle.repr(0).lines().nth(3).map(str::to_owned);
    let square_base = square.repr(0).lines().nth(3).map(str::to_owned);
    assert_eq!(circle_base.as_deref(), Some("\t\tshapes.Shape"));
    assert_eq!(circle_base, square_base);

    drop(circle);
    assert_eq!(Arc::strong_count(&base), 2);
    assert_eq!(square.repr(0).lines().nth(3), Some("\t\tshapes.Shape"));
}

#[test]
fn test_module_field_order() {
    let mut module = Module::new(span());
    module
        .variables
        .push(Some(Declaration::new("counter", span())));
    module
        .enums
        .push(Some(EnumType::new(["Color"], span()).with_member("RED", 0)));
    module
        .classes
        .push(Some(UserType::new(UserTypeKind::Class, ["Widget"], span())));
    module
        .structs
        .push(Some(UserType::new(UserTypeKind::Struct, ["Pair"], span())));
    module.functions.push(Some(Function::new(["main"], span())));
    module.functions.push(None);
    module
        .imports
        .push(Some(Import::import(["std"], "std", false, span())));

    let rendered = module.repr(0);
    let headers: Vec<&str> = rendered
        .lines()
        .filter(|line| line.starts_with('\t') && !line.starts_with("\t\t"))
        .map(str::trim)
        .collect();

    assert_eq!(
        headers,
        vec!["import:", "function:", "struct:", "class:", "enum:", "declare:"]
    );
    assert!(rendered.starts_with("ast:\n\timport:\n\t\ttype: absolute"));
}

#[test]
fn test_empty_module() {
    assert_eq!(Module::new(span()).repr(0), "ast:");
}

#[test]
fn test_display_matches_repr() {
    let color = EnumType::new(["Color"], span()).with_member("BLUE", 2);
    assert_eq!(color.to_string(), color.repr(0));

    let mut module = Module::new(span());
    module.enums.push(Some(color));
    assert_eq!(format!("{}", module), crate::represent(&module));
}

#[test]
fn test_enum_base_is_rendered_after_name() {
    let flags = EnumType::new(["Flags"], span())
        .with_base(Arc::new(Identifier::new(["ubyte"])))
        .with_member("READ", 1);

    assert_eq!(
        flags.repr(0),
        "enum:\n\tname: Flags\n\tbase: ubyte\n\tmember(s):\n\t\tREAD: 1"
    );
}
