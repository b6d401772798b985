//! Rows → records.

mod common;

use common::*;
use rowmap::{
    ErrorKind, MapError, RecordDecoder, Row, decode_row, decode_row_by_names, decode_rows, decode_rows_by_names,
    encode_one,
};

// ============================================================================
// Positional mapping
// ============================================================================

#[test]
fn test_decode_row_positional() {
    let mut student = Student::default();

    decode_row(&["王五", "12", "6年级", "123.01", "wangwu@qq.com", "133111"], &mut student).unwrap();

    assert_eq!(student, wang_wu());
}

#[test]
fn test_round_trip_without_transforms() {
    let original = Scalars {
        text: "hello, world".into(),
        tiny: i8::MIN,
        small: -2,
        int: 42,
        long: i64::MAX,
        size: isize::MIN,
        byte: u8::MAX,
        ushort: 1,
        uint: u32::MAX,
        ulong: u64::MAX,
        usize_: 9,
        single: 99.01,
        double: 123.456_789,
        flag: true,
    };

    let rows = encode_one(&original, false).unwrap();
    let mut decoded = Scalars::default();
    decode_row(&rows[0], &mut decoded).unwrap();

    assert_eq!(decoded, original);
}

#[test]
fn test_masked_fields_do_not_round_trip() {
    let rows = encode_one(&zhang_san(), false).unwrap();
    let mut decoded = Student::default();
    decode_row(&rows[0], &mut decoded).unwrap();

    assert_eq!(decoded.name, "张三");
    assert_eq!(decoded.phone, "133****5559");
    assert_ne!(decoded, zhang_san());
}

#[test]
fn test_decode_row_longer_than_fields() {
    let mut person = Person::default();

    decode_row(&["Alice", "30", "extra", "more"], &mut person).unwrap();

    assert_eq!(
        person,
        Person {
            name: "Alice".into(),
            age: 30
        }
    );
}

#[test]
fn test_decode_row_shorter_than_fields() {
    let mut student = Student {
        phone: "keep".into(),
        ..Student::default()
    };

    decode_row(&["Bob", "9"], &mut student).unwrap();

    assert_eq!(student.name, "Bob");
    assert_eq!(student.age, 9);
    assert_eq!(student.grade, "");
    assert_eq!(student.phone, "keep");
}

#[test]
fn test_decode_row_conversion_error_is_not_transactional() {
    let mut person = Person::default();

    let err = decode_row(&["Alice", "thirty"], &mut person).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Conversion);
    assert_eq!(person.name, "Alice");
    assert_eq!(person.age, 0);
}

#[test]
fn test_decode_row_overflow() {
    let mut scalars = Scalars::default();

    let err = decode_row(&["", "128"], &mut scalars).unwrap_err();

    let MapError::Conversion { record, field, text, .. } = err else {
        panic!("expected conversion error");
    };
    assert_eq!((record, field, text.as_str()), ("Scalars", "tiny", "128"));
}

#[test]
fn test_decode_row_bool_is_lenient() {
    let mut scalars = Scalars {
        flag: true,
        ..Scalars::default()
    };
    let mut fields = vec!["0"; 14];
    fields[0] = "";
    fields[13] = "not-a-bool";

    decode_row(&fields, &mut scalars).unwrap();

    assert!(!scalars.flag);
}

#[test]
fn test_decode_row_unsupported_type() {
    let mut ranked = Ranked::default();

    let err = decode_row(&["kim", "L3"], &mut ranked).unwrap_err();

    assert_eq!(
        err,
        MapError::UnsupportedType {
            record: "Ranked",
            field: "level",
            type_name: "Level"
        }
    );
    assert_eq!(ranked.name, "kim");
}

type Years = i32;

#[derive(rowmap::Record, Debug, Default)]
struct Aged {
    years: Years,
}

#[test]
fn test_aliased_scalar_is_unsupported() {
    let rows = encode_one(&Aged { years: 7 }, false).unwrap();
    assert_eq!(rows, vec![row(&["7"])]);

    let mut aged = Aged::default();
    let err = decode_row(&["7"], &mut aged).unwrap_err();

    assert_eq!(
        err,
        MapError::UnsupportedType {
            record: "Aged",
            field: "years",
            type_name: "Years"
        }
    );
}

#[test]
fn test_decode_row_into_boxed_target() {
    let mut boxed = Box::<Person>::default();

    decode_row(&["Alice", "30"], &mut boxed).unwrap();

    assert_eq!(boxed.age, 30);
}

#[test]
fn test_rejected_assignment_is_a_target_error() {
    let mut broken = Broken::default();

    let err = decode_row(&["7", "boo"], &mut broken).unwrap_err();

    assert_eq!(err, MapError::Target { record: "Broken", index: 1 });
    assert_eq!(broken.id, 7);
}

#[test]
fn test_decode_rows_positional() {
    let rows = vec![row(&["Alice", "30"]), row(&["Bob", "25", "ignored"]), row(&["Carol"])];
    let mut people: Vec<Person> = Vec::new();

    decode_rows(&rows, &mut people).unwrap();

    assert_eq!(
        people,
        vec![
            Person {
                name: "Alice".into(),
                age: 30
            },
            Person {
                name: "Bob".into(),
                age: 25
            },
            Person {
                name: "Carol".into(),
                age: 0
            },
        ]
    );
}

#[test]
fn test_decode_rows_into_boxed_elements() {
    let rows = vec![row(&["Alice", "30"]), row(&["Bob", "25"])];
    let mut people: Vec<Box<Person>> = Vec::new();

    decode_rows(&rows, &mut people).unwrap();

    assert_eq!(people.len(), 2);
    assert_eq!(people[1].name, "Bob");
}

#[test]
fn test_decode_rows_replaces_target_only_on_success() {
    let mut people = vec![Person {
        name: "existing".into(),
        age: 1,
    }];

    let err = decode_rows(&[row(&["Alice", "30"]), row(&["Bob", "x"])], &mut people).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conversion);
    assert_eq!(people.len(), 1);
    assert_eq!(people[0].name, "existing");

    decode_rows(&[row(&["Alice", "30"])], &mut people).unwrap();
    assert_eq!(people.len(), 1);
    assert_eq!(people[0].name, "Alice");
}

#[test]
fn test_decode_rows_empty_is_ok() {
    let rows: Vec<Row> = Vec::new();
    let mut people = vec![Person::default()];

    decode_rows(&rows, &mut people).unwrap();

    assert!(people.is_empty());
}

// ============================================================================
// Name-based mapping
// ============================================================================

#[test]
fn test_decode_row_by_names() {
    let mut student = Student {
        grade: "unchanged".into(),
        ..Student::default()
    };

    decode_row_by_names(&["name", "age"], &["Alice", "30"], &mut student).unwrap();

    assert_eq!(student.name, "Alice");
    assert_eq!(student.age, 30);
    assert_eq!(student.grade, "unchanged");
}

#[test]
fn test_decode_row_by_names_matches_declared_names_only() {
    let mut student = Student::default();

    // "分数" is the column label of `score`, not its name; "Age" differs in case.
    decode_row_by_names(&["分数", "Age", "score"], &["1.5", "30", "2.5"], &mut student).unwrap();

    assert_eq!(student.score, 2.5);
    assert_eq!(student.age, 0);
}

#[test]
fn test_decode_row_by_names_out_of_order() {
    let mut person = Person::default();

    decode_row_by_names(&["age", "unknown", "name"], &["41", "zzz", "Dana"], &mut person).unwrap();

    assert_eq!(
        person,
        Person {
            name: "Dana".into(),
            age: 41
        }
    );
}

#[test]
fn test_decode_row_by_names_arity() {
    let mut person = Person {
        name: "before".into(),
        age: 5,
    };

    let err = decode_row_by_names(&["name", "age"], &["Alice", "30", "extra"], &mut person).unwrap_err();
    assert_eq!(err, MapError::Arity { names: 2, columns: 3 });
    assert_eq!(person.name, "before");
    assert_eq!(person.age, 5);

    let no_names: [&str; 0] = [];
    let no_fields: [&str; 0] = [];
    let err = decode_row_by_names(&no_names, &no_fields, &mut person).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Arity);
}

#[test]
fn test_decode_rows_by_names() {
    let names = ["score", "email", "phone", "name", "age", "grade"];
    let rows = vec![
        row(&["123.01", "wangwu@qq.com", "133111", "王五", "12", "6年级"]),
        row(&["123.02", "zh@qq.com", "13322225559", "张三", "11", "5年级"]),
    ];
    let mut students: Vec<Student> = Vec::new();

    decode_rows_by_names(&names, &rows, &mut students).unwrap();

    assert_eq!(students, vec![wang_wu(), zhang_san()]);
}

#[test]
fn test_decode_rows_by_names_requires_rows() {
    let rows: Vec<Row> = Vec::new();
    let mut people: Vec<Person> = Vec::new();

    let err = decode_rows_by_names(&["name"], &rows, &mut people).unwrap_err();

    assert_eq!(err, MapError::EmptyInput { what: "rows" });
}

#[test]
fn test_decode_rows_by_names_arity_per_row() {
    let rows = vec![row(&["Alice", "30"]), row(&["Bob"])];
    let mut people: Vec<Person> = Vec::new();

    let err = decode_rows_by_names(&["name", "age"], &rows, &mut people).unwrap_err();

    assert_eq!(err, MapError::Arity { names: 2, columns: 1 });
    assert!(people.is_empty());
}

// ============================================================================
// RecordDecoder
// ============================================================================

#[test]
fn test_record_decoder_modes() {
    let positional = RecordDecoder::positional();
    assert!(positional.names().is_none());

    let mut person = Person::default();
    positional.decode_row(&["Alice", "30"], &mut person).unwrap();
    assert_eq!(person.age, 30);

    let by_names = RecordDecoder::with_names(["age", "name"]);
    assert_eq!(by_names.names(), Some(&["age".to_string(), "name".to_string()][..]));

    let mut people: Vec<Person> = Vec::new();
    by_names.decode_rows(&[row(&["1", "a"]), row(&["2", "b"])], &mut people).unwrap();
    assert_eq!(people[1], Person { name: "b".into(), age: 2 });
}
