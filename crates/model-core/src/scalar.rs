//! Scalar field kinds.

use std::fmt::Debug;

use clustermgmt_json::{JsonError, JsonReader, JsonWriter};

/// Value type of a scalar field: text, boolean, integer, float or a list of
/// text values.
///
/// Getters hand out [`Scalar::Ref`], a borrowed view of the stored value,
/// and fall back to [`Scalar::zero`] when the field is absent.
pub trait Scalar: Clone + Debug + Default + PartialEq {
    type Ref<'a>: Copy
    where
        Self: 'a;

    fn view(&self) -> Self::Ref<'_>;

    /// View returned for an absent field.
    fn zero<'a>() -> Self::Ref<'a>
    where
        Self: 'a;

    fn write_json(&self, writer: &mut JsonWriter);

    fn read_json(reader: &mut JsonReader<'_>) -> Result<Self, JsonError>;
}

/// Borrowed view of a scalar of type `T`.
pub type ScalarRef<'a, T> = <T as Scalar>::Ref<'a>;

impl Scalar for String {
    type Ref<'a> = &'a str;

    fn view(&self) -> &str {
        self
    }

    fn zero<'a>() -> &'a str {
        ""
    }

    fn write_json(&self, writer: &mut JsonWriter) {
        writer.write_str(self);
    }

    fn read_json(reader: &mut JsonReader<'_>) -> Result<Self, JsonError> {
        reader.read_str()
    }
}

impl Scalar for bool {
    type Ref<'a> = bool;

    fn view(&self) -> bool {
        *self
    }

    fn zero<'a>() -> bool
    where
        Self: 'a,
    {
        false
    }

    fn write_json(&self, writer: &mut JsonWriter) {
        writer.write_bool(*self);
    }

    fn read_json(reader: &mut JsonReader<'_>) -> Result<Self, JsonError> {
        reader.read_bool()
    }
}

impl Scalar for i64 {
    type Ref<'a> = i64;

    fn view(&self) -> i64 {
        *self
    }

    fn zero<'a>() -> i64
    where
        Self: 'a,
    {
        0
    }

    fn write_json(&self, writer: &mut JsonWriter) {
        writer.write_i64(*self);
    }

    fn read_json(reader: &mut JsonReader<'_>) -> Result<Self, JsonError> {
        reader.read_i64()
    }
}

impl Scalar for f64 {
    type Ref<'a> = f64;

    fn view(&self) -> f64 {
        *self
    }

    fn zero<'a>() -> f64
    where
        Self: 'a,
    {
        0.0
    }

    fn write_json(&self, writer: &mut JsonWriter) {
        writer.write_f64(*self);
    }

    fn read_json(reader: &mut JsonReader<'_>) -> Result<Self, JsonError> {
        reader.read_f64()
    }
}

impl Scalar for Vec<String> {
    type Ref<'a> = &'a [String];

    fn view(&self) -> &[String] {
        self
    }

    fn zero<'a>() -> &'a [String] {
        &[]
    }

    fn write_json(&self, writer: &mut JsonWriter) {
        writer.write_start_arr();
        for item in self {
            writer.write_str(item);
        }
        writer.write_end_arr();
    }

    fn read_json(reader: &mut JsonReader<'_>) -> Result<Self, JsonError> {
        let mut items = Vec::new();
        reader.read_array(|reader| {
            items.push(reader.read_str()?);
            Ok(())
        })?;
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode<T: Scalar>(value: &T) -> String {
        let mut writer = JsonWriter::new();
        value.write_json(&mut writer);
        String::from_utf8(writer.finish()).unwrap()
    }

    fn decode<T: Scalar>(json: &str) -> Result<T, JsonError> {
        let mut reader = JsonReader::new(json.as_bytes());
        T::read_json(&mut reader)
    }

    #[test]
    fn test_zero_views() {
        assert_eq!(<String as Scalar>::zero(), "");
        assert!(!<bool as Scalar>::zero());
        assert_eq!(<i64 as Scalar>::zero(), 0);
        assert_eq!(<f64 as Scalar>::zero(), 0.0);
        assert!(<Vec<String> as Scalar>::zero().is_empty());
    }

    #[test]
    fn test_strings_encode_as_array() {
        let routes = vec!["a=b".to_string(), "c\"d".to_string()];
        assert_eq!(encode(&routes), r#"["a=b","c\"d"]"#);
        assert_eq!(decode::<Vec<String>>(r#"["a=b","c\"d"]"#).unwrap(), routes);
        assert!(decode::<Vec<String>>("[]").unwrap().is_empty());
    }

    #[test]
    fn test_type_mismatch_is_error() {
        assert!(decode::<i64>(r#""5""#).is_err());
        assert!(decode::<i64>("1.5").is_err());
        assert!(decode::<bool>("1").is_err());
        assert!(decode::<String>("null").is_err());
        assert!(decode::<Vec<String>>("[1]").is_err());
    }
}
