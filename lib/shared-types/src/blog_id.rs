use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a blog entry, generated on creation and never changed afterwards.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct BlogId(Uuid);

impl BlogId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl FromStr for BlogId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for BlogId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

/// Stored as the hyphenated string in a `char(36)` column
#[cfg(feature = "sea-orm")]
mod sea_orm_impls {
    use sea_orm::sea_query::{ArrayType, ColumnType, Nullable, StringLen, ValueType, ValueTypeErr};
    use sea_orm::{ColIdx, DbErr, QueryResult, TryFromU64, TryGetError, TryGetable, Value};

    use super::BlogId;

    impl From<BlogId> for Value {
        fn from(source: BlogId) -> Self {
            source.to_string().into()
        }
    }

    // `Column::Id.eq(&id)`
    impl From<&BlogId> for Value {
        fn from(source: &BlogId) -> Self {
            source.to_string().into()
        }
    }

    // `Entity::find_by_id(&id)`
    impl From<&BlogId> for BlogId {
        fn from(source: &BlogId) -> Self {
            *source
        }
    }

    impl TryGetable for BlogId {
        fn try_get_by<I: ColIdx>(res: &QueryResult, idx: I) -> Result<Self, TryGetError> {
            let value = <String as TryGetable>::try_get_by(res, idx)?;

            value.parse().map_err(|error| {
                TryGetError::DbErr(DbErr::Type(format!("Failed to parse BlogId: {error}")))
            })
        }
    }

    impl ValueType for BlogId {
        fn try_from(v: Value) -> Result<Self, ValueTypeErr> {
            <String as ValueType>::try_from(v)?
                .parse()
                .map_err(|_| ValueTypeErr)
        }

        fn type_name() -> String {
            "BlogId".to_owned()
        }

        fn array_type() -> ArrayType {
            ArrayType::String
        }

        fn column_type() -> ColumnType {
            ColumnType::String(StringLen::N(36))
        }
    }

    impl Nullable for BlogId {
        fn null() -> Value {
            Value::String(None)
        }
    }

    // primary keys are generated client-side
    impl TryFromU64 for BlogId {
        fn try_from_u64(_n: u64) -> Result<Self, DbErr> {
            Err(DbErr::ConvertFromU64("BlogId"))
        }
    }
}
