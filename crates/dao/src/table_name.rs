use crate::common;
use serde::{
    Deserialize,
    Serialize,
};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TableName {
    pub name: String,
    pub schema: Option<String>,
}

impl TableName {
    pub fn new(schema: &str, name: &str) -> Self {
        TableName {
            schema: Some(schema.to_owned()),
            name: name.to_owned(),
        }
    }

    /// create table with name, splitting an optional `schema.` prefix
    pub fn from(arg: &str) -> Self {
        match arg.find('.') {
            Some(dot) => {
                TableName {
                    schema: Some(arg[..dot].to_owned()),
                    name: arg[dot + 1..].to_owned(),
                }
            }
            None => {
                TableName {
                    schema: None,
                    name: arg.to_owned(),
                }
            }
        }
    }

    pub fn name(&self) -> String { self.name.to_owned() }

    /// return the long name of the table using schema.table_name
    pub fn complete_name(&self) -> String {
        match self.schema {
            Some(ref schema) => format!("{}.{}", schema, self.name),
            None => self.name.to_owned(),
        }
    }

    /// the complete name quoted as a single identifier
    pub fn safe_complete_name(&self) -> String { common::quote_ident(&self.complete_name()) }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.complete_name()) }
}
