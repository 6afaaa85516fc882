use async_graphql::{ID, Value};
use blog_core::service::blog::dto::{
    BlogNotFoundErrorDTO, BlogResponseDTO, CreateBlogRequestDTO, UpdateBlogRequestDTO,
};

use super::dto::{BlogResponseGraphQLDTO, CreateBlogInputGraphQLDTO, UpdateBlogInputGraphQLDTO};
use super::export_schema_sdl;
use super::mapper::list_query_from_args;

fn error_code(error: &async_graphql::Error) -> Option<&Value> {
    error.extensions.as_ref().and_then(|values| values.get("code"))
}

#[test]
fn test_schema_sdl_exposes_operations() {
    let sdl = export_schema_sdl();

    for expected in [
        "union BlogResponse",
        "type BlogNotFoundError",
        "type BlogTitleExistsError",
        "input CreateBlogInput",
        "input UpdateBlogInput",
        "createdAt",
        "blogs(",
        "createBlog(",
        "updateBlog(",
        "deleteBlog(",
        "blogAdded",
    ] {
        assert!(sdl.contains(expected), "`{expected}` missing in:\n{sdl}");
    }
}

#[test]
fn test_create_input_length_limits() {
    let too_short = CreateBlogInputGraphQLDTO {
        title: "ab".to_owned(),
        content: "content".to_owned(),
    };
    let error = CreateBlogRequestDTO::try_from(too_short).unwrap_err();
    assert_eq!(error_code(&error), Some(&Value::from("BR_0006")));

    let empty_content = CreateBlogInputGraphQLDTO {
        title: "Hello".to_owned(),
        content: String::new(),
    };
    assert!(CreateBlogRequestDTO::try_from(empty_content).is_err());

    let too_long = CreateBlogInputGraphQLDTO {
        title: "x".repeat(101),
        content: "content".to_owned(),
    };
    assert!(CreateBlogRequestDTO::try_from(too_long).is_err());

    let valid = CreateBlogInputGraphQLDTO {
        title: "x".repeat(100),
        content: "y".repeat(5000),
    };
    assert!(CreateBlogRequestDTO::try_from(valid).is_ok());
}

#[test]
fn test_update_input_requires_uuid() {
    let input = UpdateBlogInputGraphQLDTO {
        id: ID::from("42"),
        title: None,
        content: Some("new content".to_owned()),
    };

    let error = UpdateBlogRequestDTO::try_from(input).unwrap_err();
    assert_eq!(error_code(&error), Some(&Value::from("BR_0006")));
}

#[test]
fn test_update_input_validates_present_fields_only() {
    let id = "c5d3b1a4-6a8f-4a3e-9c41-2f1c7b0d9e11";
    let input = UpdateBlogInputGraphQLDTO {
        id: ID::from(id),
        title: None,
        content: None,
    };

    let request = UpdateBlogRequestDTO::try_from(input).unwrap();
    assert_eq!(request.id.to_string(), id);
    assert!(request.title.is_none());

    let invalid_title = UpdateBlogInputGraphQLDTO {
        id: ID::from(id),
        title: Some("ab".to_owned()),
        content: None,
    };
    assert!(UpdateBlogRequestDTO::try_from(invalid_title).is_err());
}

#[test]
fn test_negative_pagination_is_rejected() {
    assert!(list_query_from_args(-1, 10).is_err());
    assert!(list_query_from_args(0, -5).is_err());

    let query = list_query_from_args(2, 3).unwrap();
    assert_eq!((query.skip, query.take), (2, 3));
}

#[test]
fn test_not_found_maps_to_union_member() {
    let response: BlogResponseGraphQLDTO = BlogResponseDTO::NotFound(BlogNotFoundErrorDTO {
        id: "missing".to_owned(),
    })
    .into();

    let BlogResponseGraphQLDTO::BlogNotFoundError(error) = response else {
        panic!("expected not found member");
    };
    assert_eq!(error.id, ID::from("missing"));
    assert_eq!(error.code, "BLOG_NOT_FOUND");
    assert_eq!(error.message, "Blog with ID missing not found");
}
