use shared_types::BlogId;
use time::OffsetDateTime;
use time::macros::datetime;

use crate::model::blog::Blog;

pub fn get_dummy_date() -> OffsetDateTime {
    datetime!(2005-04-02 21:37 +1)
}

pub fn dummy_blog(title: &str) -> Blog {
    Blog {
        id: BlogId::new_v4(),
        title: title.to_owned(),
        content: "Test content".to_owned(),
        created_at: get_dummy_date(),
        updated_at: get_dummy_date(),
    }
}
