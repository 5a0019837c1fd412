//! Comment operations.

use crate::core::error::ApiResult;
use crate::core::http::Transport;
use crate::core::ledger::ResourceKey;
use crate::core::runner::{OpSpec, Services, SuccessToast, run, validate};
use crate::core::store::StoreAction;
use crate::core::validation::{CONTENT, ContentForm};
use crate::features::comment::state::CommentOp;
use vidtube_api_models::{Comment, DeletedComment, Envelope, Page, PageQuery};

/// Fetch one page of a video's comments and append it.
///
/// # Errors
/// Transport and server failures.
pub async fn fetch_comments<T: Transport>(
    services: &Services<T>,
    video_id: &str,
    query: PageQuery,
) -> ApiResult<Envelope<Page<Comment>>> {
    let path = format!("/comment/{video_id}");
    let pairs = query.to_pairs();
    run(
        services,
        OpSpec::fetch("fetch_comments", ResourceKey::new(&path, &pairs)),
        |phase| StoreAction::Comment(CommentOp::FetchComments(phase)),
        services.client.get(&path, &pairs),
    )
    .await
}

/// Post a comment on a video.
///
/// # Errors
/// Validation, transport, and server failures.
pub async fn create_comment<T: Transport>(
    services: &Services<T>,
    video_id: &str,
    form: &ContentForm,
) -> ApiResult<Envelope<Comment>> {
    validate(services, &CONTENT, form)?;
    let path = format!("/comment/{video_id}");
    run(
        services,
        OpSpec::mutation("create_comment", SuccessToast::Silent),
        |phase| StoreAction::Comment(CommentOp::Create(phase)),
        services.client.post_json(&path, &form.to_request()),
    )
    .await
}

/// Replace a comment's text.
///
/// # Errors
/// Validation, transport, and server failures.
pub async fn edit_comment<T: Transport>(
    services: &Services<T>,
    comment_id: &str,
    form: &ContentForm,
) -> ApiResult<Envelope<Comment>> {
    validate(services, &CONTENT, form)?;
    let path = format!("/comment/c/{comment_id}");
    run(
        services,
        OpSpec::mutation("edit_comment", SuccessToast::ServerMessage),
        |phase| {
            StoreAction::Comment(CommentOp::Edit {
                id: comment_id.to_string(),
                phase,
            })
        },
        services.client.patch_json(&path, &form.to_request()),
    )
    .await
}

/// Delete a comment.
///
/// # Errors
/// Transport and server failures.
pub async fn delete_comment<T: Transport>(
    services: &Services<T>,
    comment_id: &str,
) -> ApiResult<Envelope<DeletedComment>> {
    let path = format!("/comment/c/{comment_id}");
    run(
        services,
        OpSpec::mutation("delete_comment", SuccessToast::ServerMessage),
        |phase| StoreAction::Comment(CommentOp::Delete(phase)),
        services.client.delete(&path),
    )
    .await
}

/// Drop loaded comments.
pub fn clean_up_comments<T>(services: &Services<T>) {
    services.apply(StoreAction::Comment(CommentOp::CleanUp));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::http::{HttpMethod, RequestBody};
    use crate::core::runner::test_support::{stub_services, toast_texts};
    use serde_json::json;

    #[tokio::test]
    async fn fetch_sends_page_and_limit() -> ApiResult<()> {
        let (services, stub) = stub_services(None);
        stub.push_json(
            200,
            &json!({"data": {"docs": [{"_id": "c1", "content": "hi"}], "totalDocs": 3, "hasNextPage": true}, "success": true}),
        );
        fetch_comments(
            &services,
            "v1",
            PageQuery {
                page: Some(2),
                limit: Some(10),
            },
        )
        .await?;

        assert!(stub.requests()[0].url.ends_with("/comment/v1?page=2&limit=10"));
        let state = services.state();
        assert_eq!(state.comment.comments.len(), 1);
        assert_eq!(state.comment.total_comments, 3);
        assert!(state.comment.has_next_page);
        Ok(())
    }

    #[tokio::test]
    async fn create_posts_trimmed_content_and_prepends() -> ApiResult<()> {
        let (services, stub) = stub_services(Some("tok"));
        stub.push_json(200, &json!({"data": {"docs": [{"_id": "c1", "content": "old"}], "totalDocs": 1}, "success": true}));
        stub.push_json(200, &json!({"data": {"_id": "c2", "content": "new"}, "message": "Comment added", "success": true}));

        fetch_comments(&services, "v1", PageQuery::default()).await?;
        create_comment(&services, "v1", &ContentForm::new("  new  ")).await?;

        let request = stub.last_request().expect("request");
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body, RequestBody::Json(r#"{"content":"new"}"#.into()));
        let state = services.state();
        let ids: Vec<&str> = state.comment.comments.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c2", "c1"]);
        assert_eq!(state.comment.total_comments, 2);
        assert!(toast_texts(&services).is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn blank_comment_is_rejected_locally() {
        let (services, stub) = stub_services(Some("tok"));
        let result = create_comment(&services, "v1", &ContentForm::new("   ")).await;
        assert!(result.is_err());
        assert!(stub.requests().is_empty());
        assert_eq!(toast_texts(&services), vec!["Content is required".to_string()]);
    }

    #[tokio::test]
    async fn edit_and_delete_target_comment_routes() -> ApiResult<()> {
        let (services, stub) = stub_services(Some("tok"));
        stub.push_json(200, &json!({"data": {"docs": [{"_id": "c1", "content": "a"}, {"_id": "c2", "content": "b"}], "totalDocs": 2}, "success": true}));
        stub.push_json(200, &json!({"data": {"_id": "c1", "content": "edited"}, "success": true}));
        stub.push_json(200, &json!({"data": {"commentId": "c2"}, "success": true}));

        fetch_comments(&services, "v1", PageQuery::default()).await?;
        edit_comment(&services, "c1", &ContentForm::new("edited")).await?;
        delete_comment(&services, "c2").await?;

        let requests = stub.requests();
        assert_eq!(requests[1].method, HttpMethod::Patch);
        assert!(requests[1].url.ends_with("/comment/c/c1"));
        assert_eq!(requests[2].method, HttpMethod::Delete);
        assert!(requests[2].url.ends_with("/comment/c/c2"));

        let state = services.state();
        assert_eq!(state.comment.comments.len(), 1);
        assert_eq!(state.comment.comments[0].content, "edited");
        assert_eq!(state.comment.total_comments, 1);

        clean_up_comments(&services);
        assert!(services.state().comment.comments.is_empty());
        Ok(())
    }
}
