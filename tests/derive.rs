#![allow(dead_code)]
#![cfg(feature = "derive")]

use fitbod_csv::{
    DecodeError, decode,
    record::Record,
    row::from_line,
    shape::{FieldDescriptor, FieldKind},
};

#[derive(Debug, Default, PartialEq, Record)]
struct Set {
    exercise: String,
    reps: i64,
    weight: f64,
}

#[test]
fn shape_follows_declaration_order() {
    assert_eq!(
        Set::SHAPE.fields().copied().collect::<Vec<_>>(),
        [
            FieldDescriptor::new("exercise", FieldKind::Text),
            FieldDescriptor::new("reps", FieldKind::Integer),
            FieldDescriptor::new("weight", FieldKind::Decimal),
        ]
    );
}

#[test]
fn decode_set() {
    let mut set = Set::default();
    decode(&mut from_line("Bench Press,10,135.5", b','), &mut set).unwrap();

    assert_eq!(
        set,
        Set {
            exercise: "Bench Press".into(),
            reps: 10,
            weight: 135.5,
        }
    );
}

#[test]
fn reordered_columns_are_reinterpreted() {
    let mut set = Set::default();
    let err = decode(&mut from_line("10,Bench Press,135.5", b','), &mut set).unwrap_err();

    assert!(matches!(
        err,
        DecodeError::FieldConversion {
            field: "reps",
            kind: FieldKind::Integer,
            ..
        }
    ));
    assert_eq!(set, Set::default());
}

#[derive(Debug, Default, Record)]
struct Annotated {
    #[column(name = "Warmup?")]
    warmup: bool,
    #[column(skip)]
    line: usize,
    r#type: String,
}

#[test]
fn decode_annotated() {
    assert_eq!(
        Annotated::SHAPE.fields().map(|f| f.name).collect::<Vec<_>>(),
        ["Warmup?", "type"]
    );

    let mut annotated = Annotated {
        line: 7,
        ..Default::default()
    };
    decode(&mut from_line("TRUE,cardio", b','), &mut annotated).unwrap();

    assert!(annotated.warmup);
    assert_eq!(annotated.line, 7);
    assert_eq!(annotated.r#type, "cardio");
}

#[derive(Debug, Default, Record)]
struct Unsupported {
    name: String,
    sets: u32,
    tags: Vec<String>,
}

#[test]
fn unsupported_types_are_declared() {
    assert_eq!(Unsupported::SHAPE.field(1).unwrap().kind, FieldKind::Unsupported("u32"));
    assert_eq!(
        Unsupported::SHAPE.field(2).unwrap().kind,
        FieldKind::Unsupported("Vec<String>")
    );

    assert!(matches!(
        Unsupported::SHAPE.validate(),
        Err(DecodeError::UnsupportedFieldKind { kind: "u32" })
    ));

    let mut unsupported = Unsupported::default();
    let err = decode(&mut from_line("Plank,3,core", b','), &mut unsupported).unwrap_err();

    assert!(matches!(err, DecodeError::UnsupportedFieldKind { kind: "u32" }));
    assert_eq!(unsupported.name, "");
}

#[derive(Debug, Default, Record)]
struct Wrapper<T: Default> {
    label: String,
    #[column(skip)]
    extra: T,
}

#[test]
fn decode_generic() {
    let mut wrapper = Wrapper::<Vec<u8>>::default();
    decode(&mut from_line("x", b','), &mut wrapper).unwrap();

    assert_eq!(wrapper.label, "x");
    assert!(wrapper.extra.is_empty());
}
