use crate::{
    error::DaoError,
    FromValue,
    ToValue,
    Value,
};
use serde::{
    ser::{
        Serialize,
        Serializer,
    },
    Deserialize,
    Deserializer,
};
use std::collections::BTreeMap;

/// One catalog row, keyed by column name.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Dao(pub BTreeMap<String, Value>);

impl Dao {
    pub fn new() -> Self { Dao::default() }

    pub fn insert<K, V>(&mut self, k: K, v: V)
    where
        K: ToString,
        V: ToValue,
    {
        self.0.insert(k.to_string(), v.to_value());
    }

    pub fn insert_value<K>(&mut self, k: K, value: &Value)
    where
        K: ToString,
    {
        self.0.insert(k.to_string(), value.clone());
    }

    pub fn get<'a, T>(&'a self, s: &str) -> Result<T, DaoError>
    where
        T: FromValue,
    {
        let value: Option<&'a Value> = self.0.get(s);
        match value {
            Some(v) => FromValue::from_value(v).map_err(DaoError::ConvertError),
            None => Err(DaoError::NoSuchValueError(s.into())),
        }
    }

    pub fn get_opt<'a, T>(&'a self, s: &str) -> Result<Option<T>, DaoError>
    where
        T: FromValue,
    {
        let value: Option<&'a Value> = self.0.get(s);
        match value {
            Some(v) => {
                match v {
                    Value::Nil => Ok(None),
                    _ => {
                        Ok(Some(
                            FromValue::from_value(v).map_err(DaoError::ConvertError)?,
                        ))
                    }
                }
            }
            None => Ok(None),
        }
    }

    pub fn get_value(&self, s: &str) -> Option<&Value> { self.0.get(s) }
}

impl<'a> Serialize for Dao {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Dao {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        BTreeMap::deserialize(deserializer).map(Dao)
    }
}

pub trait FromDao: Sized {
    /// convert a catalog row into the corresponding model
    fn from_dao(dao: &Dao) -> Result<Self, DaoError>;
}

pub trait ToDao {
    /// convert from an instance of the model to a catalog row
    fn to_dao(&self) -> Dao;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    #[test]
    fn insert_text() {
        let mut dao = Dao::new();
        dao.insert("Host", "localhost");
        let host: Result<String, DaoError> = dao.get("Host");
        assert_eq!(host.unwrap(), "localhost");
    }

    #[test]
    fn missing_column() {
        let dao = Dao::new();
        let host: Result<String, DaoError> = dao.get("Host");
        assert!(matches!(host, Err(DaoError::NoSuchValueError(ref c)) if c == "Host"));
    }

    #[test]
    fn serialize_json() {
        let mut dao = Dao::new();
        dao.insert("life", 42);
        dao.insert("lemons", "lemonade");
        let json = serde_json::to_string(&dao).unwrap();
        let expected = r#"{"lemons":{"Text":"lemonade"},"life":{"Int":42}}"#;
        assert_eq!(json, expected);
        let back: Dao = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dao);
    }

    #[test]
    fn test_get_opt() {
        let mut dao = Dao::new();
        dao.insert("Grantor", None::<String>);
        dao.insert("life", 42);
        let grantor: Result<Option<String>, _> = dao.get_opt("Grantor");
        assert_eq!(grantor.unwrap(), None);
        let life: Result<Option<i32>, _> = dao.get_opt("life");
        assert_eq!(life.unwrap(), Some(42));
        let absent: Result<Option<i32>, _> = dao.get_opt("absent");
        assert_eq!(absent.unwrap(), None);
    }

    #[test]
    fn referenced() {
        let mut dao = Dao::new();
        let v = 42;
        let s = "lemonade";
        dao.insert("life", &v);
        dao.insert("lemons", s);
        let life: Result<Option<i32>, _> = dao.get("life");
        assert_eq!(life.unwrap(), Some(42));
    }
}
