//! Decimal columns.
//!
//! SQLite has no exact numeric type, so quantities and footprints are stored
//! as TEXT and parsed back into [`Decimal`]. Models keep plain `Decimal`
//! fields and route them through [`StoredDecimal`] with
//! `#[diesel(deserialize_as = ...)]` / `#[diesel(serialize_as = ...)]`.

use diesel::backend::Backend;
use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use diesel::sqlite::Sqlite;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
pub struct StoredDecimal(pub Decimal);

impl From<Decimal> for StoredDecimal {
    fn from(value: Decimal) -> Self {
        StoredDecimal(value)
    }
}

impl From<StoredDecimal> for Decimal {
    fn from(value: StoredDecimal) -> Self {
        value.0
    }
}

impl FromSql<Text, Sqlite> for StoredDecimal {
    fn from_sql(bytes: <Sqlite as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let text = <String as FromSql<Text, Sqlite>>::from_sql(bytes)?;
        let value = text.trim().parse::<Decimal>()?;
        Ok(StoredDecimal(value))
    }
}

impl ToSql<Text, Sqlite> for StoredDecimal {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
        out.set_value(self.0.to_string());
        Ok(IsNull::No)
    }
}
