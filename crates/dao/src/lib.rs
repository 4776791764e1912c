pub use column_name::ColumnName;
pub use common::quote_ident;
pub use dao::{
    Dao,
    FromDao,
    ToDao,
};
pub use error::{
    ConvertError,
    DaoError,
};
pub use rows::Rows;
pub use table_name::TableName;
pub use value::{
    FromValue,
    ToValue,
    Value,
};

mod column_name;
mod common;
mod dao;
mod error;
mod rows;
mod table_name;
pub mod value;
