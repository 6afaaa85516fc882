use sea_orm_migration::prelude::*;

pub trait ColumnDefExt {
    fn datetime_millisecond_precision(&mut self, manager: &SchemaManager) -> &mut ColumnDef;
}

impl ColumnDefExt for ColumnDef {
    fn datetime_millisecond_precision(&mut self, manager: &SchemaManager) -> &mut ColumnDef {
        let dt = match manager.get_database_backend() {
            sea_orm::DatabaseBackend::MySql => "datetime(3)",
            sea_orm::DatabaseBackend::Postgres => "timestamp(3)",
            sea_orm::DatabaseBackend::Sqlite => "datetime",
        };

        self.custom(Alias::new(dt));

        self
    }
}
