use diesel::prelude::*;
use diesel::sql_types::Text;

use crate::db::models::label::{Label, LabelChanges, NewLabel};

diesel::define_sql_function! {
    fn lower(x: Text) -> Text;
}

pub struct LabelRepo;

impl LabelRepo {
    pub fn find_by_id(
        conn: &mut PgConnection,
        label_id: uuid::Uuid,
    ) -> Result<Option<Label>, diesel::result::Error> {
        use crate::schema::labels::dsl::*;
        labels.filter(id.eq(label_id)).first::<Label>(conn).optional()
    }

    pub fn exists_by_id(
        conn: &mut PgConnection,
        label_id: uuid::Uuid,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::labels::dsl::*;
        diesel::select(diesel::dsl::exists(labels.filter(id.eq(label_id)))).get_result(conn)
    }

    /// Case-insensitive name lookup, the uniqueness invariant is on
    /// `lower(name)`.
    pub fn find_by_name_folded(
        conn: &mut PgConnection,
        label_name: &str,
    ) -> Result<Vec<Label>, diesel::result::Error> {
        use crate::schema::labels::dsl::*;
        labels
            .filter(lower(name).eq(label_name.to_lowercase()))
            .load::<Label>(conn)
    }

    pub fn list_all(conn: &mut PgConnection) -> Result<Vec<Label>, diesel::result::Error> {
        use crate::schema::labels::dsl::*;
        labels.order(created_at.asc()).load::<Label>(conn)
    }

    pub fn find_by_ids(
        conn: &mut PgConnection,
        label_ids: &[uuid::Uuid],
    ) -> Result<Vec<Label>, diesel::result::Error> {
        use crate::schema::labels::dsl::*;
        labels.filter(id.eq_any(label_ids)).load::<Label>(conn)
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_label: &NewLabel,
    ) -> Result<Label, diesel::result::Error> {
        diesel::insert_into(crate::schema::labels::table)
            .values(new_label)
            .get_result(conn)
    }

    pub fn update_fields(
        conn: &mut PgConnection,
        label_id: uuid::Uuid,
        changes: &LabelChanges,
    ) -> Result<Label, diesel::result::Error> {
        use crate::schema::labels::dsl::*;
        diesel::update(labels.filter(id.eq(label_id)))
            .set(changes)
            .get_result(conn)
    }

    pub fn delete_by_id(
        conn: &mut PgConnection,
        label_id: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::labels::dsl::*;
        diesel::delete(labels.filter(id.eq(label_id))).execute(conn)
    }
}
