/**
 * Post Routes
 *
 * ## Posts
 * - `GET  /api/v1/post/`           - Public listing (`search`, `page`, `limit`)
 * - `POST /api/v1/post/`           - Create a post (requires session)
 * - `GET  /api/v1/post/user/posts` - The caller's posts (requires session)
 * - `GET  /api/v1/post/{postId}`   - Post with author and comments
 * - `PUT  /api/v1/post/{postId}`   - Update (author only)
 * - `DELETE /api/v1/post/{postId}` - Delete (author only)
 *
 * ## Comments
 * - `POST   /api/v1/post/comment`             - Add a comment (requires session)
 * - `DELETE /api/v1/post/comment/{commentId}` - Delete (comment writer only)
 *
 * The static segments `user/posts` and `comment` take precedence over
 * `{postId}`.
 */

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::backend::comments::{create_comment, delete_comment};
use crate::backend::posts::{create_post, delete_post, get_post, list_my_posts, list_posts, update_post};
use crate::backend::server::state::AppState;

pub const POST_PREFIX: &str = "/api/v1/post";

/// Add the post and comment routes to `router`
pub fn configure_post_routes(router: Router<AppState>) -> Router<AppState> {
    let collection = get(list_posts).post(create_post);

    router
        .route(POST_PREFIX, collection.clone())
        .route(&format!("{POST_PREFIX}/"), collection)
        .route(&format!("{POST_PREFIX}/user/posts"), get(list_my_posts))
        .route(&format!("{POST_PREFIX}/comment"), post(create_comment))
        .route(&format!("{POST_PREFIX}/comment/{{comment_id}}"), delete(delete_comment))
        .route(
            &format!("{POST_PREFIX}/{{post_id}}"),
            get(get_post).put(update_post).delete(delete_post),
        )
}
