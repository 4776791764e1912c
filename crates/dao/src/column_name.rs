use crate::common;
use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ColumnName {
    pub name: String,
    pub table: Option<String>,
}

impl ColumnName {
    /// create column with name
    pub fn from(arg: &str) -> Self {
        match arg.find('.') {
            Some(dot) => {
                ColumnName {
                    name: arg[dot + 1..].to_owned(),
                    table: Some(arg[..dot].to_owned()),
                }
            }
            None => {
                ColumnName {
                    name: arg.to_owned(),
                    table: None,
                }
            }
        }
    }

    /// return the long name of the column using table.column_name
    pub fn complete_name(&self) -> String {
        match self.table {
            Some(ref table) => format!("{}.{}", table, self.name),
            None => self.name.to_owned(),
        }
    }

    pub fn safe_name(&self) -> String { common::quote_ident(&self.name) }

    /// case-insensitive match against a bare column name
    pub fn is(&self, name: &str) -> bool { self.name.eq_ignore_ascii_case(name) }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bare() {
        let column = ColumnName::from("Select_priv");
        assert_eq!(column.table, None);
        assert_eq!(column.safe_name(), "\"Select_priv\"");
        assert!(column.is("select_priv"));
    }

    #[test]
    fn qualified() {
        let column = ColumnName::from("user.Host");
        assert_eq!(column.table, Some("user".to_string()));
        assert_eq!(column.complete_name(), "user.Host");
    }
}
