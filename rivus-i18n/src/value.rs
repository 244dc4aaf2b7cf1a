//! 参数值及其默认字符串表示
//!
//! `Ts` 的参数可以是任意类型，这里用显式的枚举来区分各类值，
//! 而不是依赖运行时反射。

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// 翻译参数值
///
/// 浮点数使用 Rust 的 `Display` 输出：`1e21` 输出为 `1000000000000000000000`，
/// 无穷大为 `inf`，非数为 `NaN`，不采用科学计数法。
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float32(f32),
    Float64(f64),
    /// 空值，输出为 `<nil>`
    Nil,
    Seq(Vec<Value>),
    Map(Vec<(Value, Value)>),
    /// 具名字段的结构体，输出为 `{Field:value ...}`
    Record(Vec<(String, Value)>),
    /// 已经格式化好的任意可显示值（错误、自定义类型等）
    Other(String),
}

impl Value {
    /// 使用 `Display` 实现生成参数值
    pub fn display<T: fmt::Display + ?Sized>(v: &T) -> Self {
        Value::Other(v.to_string())
    }

    /// 构造结构体形式的参数值，字段保持传入顺序
    pub fn record<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Record(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) | Value::Other(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Uint(u) => write!(f, "{}", u),
            Value::Float32(v) => write!(f, "{}", v),
            Value::Float64(v) => write!(f, "{}", v),
            Value::Nil => f.write_str("<nil>"),
            Value::Seq(items) => {
                f.write_str("[")?;
                write_joined(f, items.iter(), |f, item| write!(f, "{}", item))?;
                f.write_str("]")
            }
            Value::Map(entries) => {
                f.write_str("map[")?;
                write_joined(f, entries.iter(), |f, (k, v)| write!(f, "{}:{}", k, v))?;
                f.write_str("]")
            }
            Value::Record(fields) => {
                f.write_str("{")?;
                write_joined(f, fields.iter(), |f, (k, v)| write!(f, "{}:{}", k, v))?;
                f.write_str("}")
            }
        }
    }
}

fn write_joined<'a, T: 'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = &'a T>,
    mut write_item: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write_item(f, item)?;
    }
    Ok(())
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Str(v.clone())
    }
}

/// `char` 按字符输出，而不是码点数值
impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v as $target)
                }
            }
        )*
    };
}

impl_from_int!(Int, i64: i8, i16, i32, i64, isize);
impl_from_int!(Uint, u64: u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Nil, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Seq(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(v: &[T]) -> Self {
        Value::Seq(v.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Value::Seq(v.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(v: BTreeMap<K, V>) -> Self {
        Value::Map(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// `HashMap` 无序，按键的字符串形式排序后输出，保证结果稳定
impl<K: Into<Value>, V: Into<Value>, S> From<HashMap<K, V, S>> for Value {
    fn from(v: HashMap<K, V, S>) -> Self {
        let mut entries: Vec<(Value, Value)> =
            v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        entries.sort_by_cached_key(|(k, _)| k.to_string());
        Value::Map(entries)
    }
}

/// 将参数展开为 `Ts` 需要的扁平列表：名称、值交替出现
///
/// ```
/// use rivus_i18n::params;
///
/// let p = params!["name", "Foo", "count", 42];
/// assert_eq!(p.len(), 4);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($v:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($v)),+]
    };
}
