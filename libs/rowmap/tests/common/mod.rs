#![allow(dead_code)]

use std::fmt;
use std::sync::OnceLock;

use rowmap::{FieldDescriptor, MapError, Record, RecordMut, RecordSchema, RecordType, Row, ScalarKind, Value};

#[derive(Record, Debug, Default, Clone, PartialEq)]
pub struct Student {
    #[csv("name")]
    pub name: String,
    pub age: i32,
    pub grade: String,
    #[csv("分数")]
    pub score: f64,
    #[csv("邮箱,email_desensitization")]
    pub email: String,
    #[csv("手机号,phone_desensitization")]
    pub phone: String,
}

pub fn wang_wu() -> Student {
    Student {
        name: "王五".into(),
        age: 12,
        grade: "6年级".into(),
        score: 123.01,
        email: "wangwu@qq.com".into(),
        phone: "133111".into(),
    }
}

pub fn zhang_san() -> Student {
    Student {
        name: "张三".into(),
        age: 11,
        grade: "5年级".into(),
        score: 123.02,
        email: "zh@qq.com".into(),
        phone: "13322225559".into(),
    }
}

/// Every decodable scalar kind, no transforms.
#[derive(Record, Debug, Default, Clone, PartialEq)]
pub struct Scalars {
    pub text: String,
    pub tiny: i8,
    pub small: i16,
    pub int: i32,
    pub long: i64,
    pub size: isize,
    pub byte: u8,
    pub ushort: u16,
    pub uint: u32,
    pub ulong: u64,
    pub usize_: usize,
    pub single: f32,
    pub double: f64,
    pub flag: bool,
}

#[derive(Record, Debug, Default, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: i64,
}

/// Same shape as `Person`, different type.
#[derive(Record, Debug, Default, Clone, PartialEq)]
pub struct Pet {
    pub name: String,
    pub age: i64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Level(pub u8);

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// A field type without a coercion rule.
#[derive(Record, Debug, Default, Clone, PartialEq)]
pub struct Ranked {
    pub name: String,
    pub level: Level,
}

/// Hand-written record whose accessors disagree with its schema.
#[derive(Debug, Default)]
pub struct Broken {
    pub id: i64,
}

impl Record for Broken {
    fn schema(&self) -> &'static RecordSchema {
        Self::describe()
    }

    fn value(&self, index: usize) -> Option<Value<'_>> {
        match index {
            0 => Some(Value::Int64(self.id)),
            _ => None,
        }
    }
}

impl RecordMut for Broken {
    fn set_value(&mut self, index: usize, value: Value<'_>) -> Result<(), MapError> {
        match index {
            0 => rowmap::coerce::assign(&mut self.id, value, Self::describe(), 0),
            _ => Err(MapError::target(Self::describe(), index)),
        }
    }
}

impl RecordType for Broken {
    fn describe() -> &'static RecordSchema {
        static SCHEMA: OnceLock<RecordSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            RecordSchema::new(
                "Broken",
                vec![
                    FieldDescriptor::from_tag("id", 0, None, ScalarKind::Int { bits: 64 }),
                    FieldDescriptor::from_tag("ghost", 1, None, ScalarKind::String),
                ],
            )
        })
    }
}

pub fn row(fields: &[&str]) -> Row {
    fields.iter().map(|f| f.to_string()).collect()
}
