//! Supported option value types.
//!
//! The set of types an option may hold is closed: `bool`, the signed and unsigned integers from
//! 8 to 64 bits, `f32`, `f64` and `String`. Each of them implements the sealed [`OptionValue`]
//! trait, so declaring an option of any other type does not compile.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::Error;
use crate::store::{OptionInfo, Options, TypedOption};

mod private {
    pub trait Sealed {}
}

/// A type that can be held by an option.
pub trait OptionValue: Clone + fmt::Debug + fmt::Display + private::Sealed + Sized {
    /// The kind of this type.
    const KIND: Kind;

    /// Convert a raw command line value to this type.
    fn from_raw(raw: &str) -> Option<Self>;

    /// Wrap into a tagged [`Value`].
    fn into_value(self) -> Value;

    /// The partition holding options of this type.
    #[doc(hidden)]
    fn partition(partitions: &Partitions) -> &Vec<TypedOption<Self>>;

    /// The partition holding options of this type.
    #[doc(hidden)]
    fn partition_mut(partitions: &mut Partitions) -> &mut Vec<TypedOption<Self>>;
}

/// Boolean options accept `""`, `true` and `1` as true, `false` and `0` as false, ignoring case.
fn parse_bool(raw: &str) -> Option<bool> {
    const TRUE: [&str; 3] = ["", "true", "1"];
    const FALSE: [&str; 2] = ["false", "0"];

    if TRUE.iter().any(|x| raw.eq_ignore_ascii_case(x)) {
        Some(true)
    } else if FALSE.iter().any(|x| raw.eq_ignore_ascii_case(x)) {
        Some(false)
    } else {
        None
    }
}

fn parse_number<T: FromStr>(raw: &str) -> Option<T> {
    raw.parse::<T>().ok()
}

fn parse_string(raw: &str) -> Option<String> {
    Some(String::from(raw))
}

macro_rules! supported_types {
    ($($ty:ty => $kind:ident, $field:ident, $label:literal, $parse:ident;)*) => {
        /// Closed enumeration of the supported option types.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub enum Kind {
            $(
                #[doc = concat!("`", stringify!($ty), "` option, labelled `", $label, "`.")]
                $kind,
            )*
        }

        impl Kind {
            /// All supported kinds, in declaration order.
            pub const ALL: &'static [Kind] = &[$(Kind::$kind,)*];

            /// Human-readable type name, as shown in the usage text.
            pub const fn label(self) -> &'static str {
                match self {
                    $(Kind::$kind => $label,)*
                }
            }

            /// Convert a raw command line value to a value of this kind.
            pub fn convert(self, raw: &str) -> Option<Value> {
                match self {
                    $(Kind::$kind => <$ty as OptionValue>::from_raw(raw).map(Value::$kind),)*
                }
            }
        }

        /// Tagged value of one of the supported types.
        #[derive(Clone, Debug, PartialEq)]
        pub enum Value {
            $(
                #[doc = concat!("`", $label, "` value.")]
                $kind($ty),
            )*
        }

        impl Value {
            /// The kind of this value.
            pub fn kind(&self) -> Kind {
                match self {
                    $(Value::$kind(_) => Kind::$kind,)*
                }
            }

            pub(crate) fn set_into(self, options: &mut Options, name: &str) -> Result<(), Error> {
                match self {
                    $(Value::$kind(x) => options.set::<$ty>(name, x),)*
                }
            }
        }

        /// Option storage, one homogeneous collection per supported type.
        #[derive(Clone, Debug, Default)]
        pub struct Partitions {
            $($field: Vec<TypedOption<$ty>>,)*
        }

        impl Partitions {
            /// Look up the kind of the option with the given normalized name.
            pub(crate) fn kind_of(&self, name: &str) -> Option<Kind> {
                $(
                    if self.$field.iter().any(|x| x.name() == name) {
                        return Some(Kind::$kind);
                    }
                )*

                None
            }

            /// Remove the option with the given normalized name.
            pub(crate) fn remove(&mut self, name: &str) -> bool {
                $(
                    if let Some(index) = self.$field.iter().position(|x| x.name() == name) {
                        self.$field.remove(index);
                        return true;
                    }
                )*

                false
            }

            pub(crate) fn describe(&self) -> Vec<OptionInfo<'_>> {
                let mut out = Vec::with_capacity(self.len());
                $(out.extend(self.$field.iter().map(TypedOption::info));)*
                out
            }

            pub(crate) fn len(&self) -> usize {
                0 $(+ self.$field.len())*
            }
        }

        $(
            impl private::Sealed for $ty {}

            impl OptionValue for $ty {
                const KIND: Kind = Kind::$kind;

                #[inline(always)]
                fn from_raw(raw: &str) -> Option<Self> {
                    $parse(raw)
                }

                #[inline(always)]
                fn into_value(self) -> Value {
                    Value::$kind(self)
                }

                #[inline(always)]
                fn partition(partitions: &Partitions) -> &Vec<TypedOption<Self>> {
                    &partitions.$field
                }

                #[inline(always)]
                fn partition_mut(partitions: &mut Partitions) -> &mut Vec<TypedOption<Self>> {
                    &mut partitions.$field
                }
            }
        )*
    };
}

supported_types! {
    bool => Bool, bools, "bool", parse_bool;
    i8 => Int8, int8s, "int8", parse_number;
    i16 => Int16, int16s, "int16", parse_number;
    i32 => Int32, int32s, "int32", parse_number;
    i64 => Int64, int64s, "int64", parse_number;
    u8 => Uint8, uint8s, "uint8", parse_number;
    u16 => Uint16, uint16s, "uint16", parse_number;
    u32 => Uint32, uint32s, "uint32", parse_number;
    u64 => Uint64, uint64s, "uint64", parse_number;
    f32 => Float, floats, "float", parse_number;
    f64 => Double, doubles, "double", parse_number;
    String => String, strings, "string", parse_string;
}

impl Kind {
    /// The kind of a supported type.
    #[inline(always)]
    pub const fn of<T: OptionValue>() -> Kind {
        T::KIND
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(x) => fmt::Display::fmt(x, f),
            Value::Int8(x) => fmt::Display::fmt(x, f),
            Value::Int16(x) => fmt::Display::fmt(x, f),
            Value::Int32(x) => fmt::Display::fmt(x, f),
            Value::Int64(x) => fmt::Display::fmt(x, f),
            Value::Uint8(x) => fmt::Display::fmt(x, f),
            Value::Uint16(x) => fmt::Display::fmt(x, f),
            Value::Uint32(x) => fmt::Display::fmt(x, f),
            Value::Uint64(x) => fmt::Display::fmt(x, f),
            Value::Float(x) => fmt::Display::fmt(x, f),
            Value::Double(x) => fmt::Display::fmt(x, f),
            Value::String(x) => f.write_str(x),
        }
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[test]
    fn it_should_list_all_kinds_in_order() {
        assert_that!(Kind::ALL.len(), eq(12));
        assert_that!(Kind::ALL[0], eq(Kind::Bool));
        assert_that!(Kind::ALL[11], eq(Kind::String));
    }

    #[test]
    fn it_should_map_types_to_kinds() {
        assert_that!(Kind::of::<bool>(), eq(Kind::Bool));
        assert_that!(Kind::of::<i64>(), eq(Kind::Int64));
        assert_that!(Kind::of::<u8>(), eq(Kind::Uint8));
        assert_that!(Kind::of::<f32>(), eq(Kind::Float));
        assert_that!(Kind::of::<f64>(), eq(Kind::Double));
        assert_that!(Kind::of::<String>(), eq(Kind::String));
    }

    #[test]
    fn it_should_label_kinds() {
        let labels: Vec<&str> = Kind::ALL.iter().map(|x| x.label()).collect();

        assert_that!(
            labels.as_slice(),
            eq(&[
                "bool", "int8", "int16", "int32", "int64", "uint8", "uint16", "uint32", "uint64",
                "float", "double", "string",
            ][..])
        );
    }

    #[test]
    fn it_should_convert_booleans() {
        for raw in ["", "true", "TRUE", "1"] {
            assert_that!(bool::from_raw(raw), eq(Some(true)));
        }

        for raw in ["false", "False", "0"] {
            assert_that!(bool::from_raw(raw), eq(Some(false)));
        }

        for raw in ["yes", "2", "truee"] {
            assert_that!(bool::from_raw(raw), eq(None));
        }
    }

    #[test]
    fn it_should_convert_numbers() {
        assert_that!(i8::from_raw("-128"), eq(Some(-128)));
        assert_that!(i8::from_raw("128"), eq(None));
        assert_that!(u16::from_raw("65535"), eq(Some(65535)));
        assert_that!(u32::from_raw("-1"), eq(None));
        assert_that!(i64::from_raw("12abc"), eq(None));
        assert_that!(i32::from_raw(""), eq(None));
        assert_that!(f64::from_raw("2.5e3"), eq(Some(2500.0)));
        assert_that!(f32::from_raw("one"), eq(None));
    }

    #[test]
    fn it_should_keep_strings_verbatim() {
        let value = String::from_raw("Hello World");
        assert_that!(value.as_deref(), eq(Some("Hello World")));
    }

    #[test]
    fn it_should_convert_by_kind() {
        assert_that!(Kind::Bool.convert("0"), eq(&Some(Value::Bool(false))));
        assert_that!(Kind::Uint8.convert("200"), eq(&Some(Value::Uint8(200))));
        assert_that!(Kind::Int16.convert("x"), eq(&None));
        assert_that!(
            Kind::String.convert("abc"),
            eq(&Some(Value::String(String::from("abc"))))
        );
    }

    #[test]
    fn it_should_tag_values() {
        assert_that!(42i32.into_value().kind(), eq(Kind::Int32));
        assert_that!(1.5f32.into_value().kind(), eq(Kind::Float));
    }
}
