//! Post CRUD, paginated listings and lookups by category.
//!
//! Every post must reference an existing category: both create and update
//! resolve `category_id` before anything is written.

use std::sync::Arc;

use chrono::Utc;
use quill_core::error::CoreError;
use quill_core::pagination::{Page, PageRequest, SortDirection};
use quill_core::types::DbId;
use quill_db::models::category::Category;
use quill_db::models::post::{NewPost, Post, PostDto, PostInput, PostSortField};
use quill_db::{CategoryStore, PostStore};

use crate::ServiceResult;

#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostStore>,
    categories: Arc<dyn CategoryStore>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostStore>, categories: Arc<dyn CategoryStore>) -> Self {
        Self { posts, categories }
    }

    /// Create a post under an existing category, stamped with the current time.
    pub async fn create_post(&self, input: &PostInput) -> ServiceResult<PostDto> {
        let category = self.load_category(input.category_id).await?;
        let post = self
            .posts
            .insert(NewPost {
                title: input.title.clone(),
                description: input.description.clone(),
                content: input.content.clone(),
                created_at: Utc::now(),
                category_id: category.id,
            })
            .await?;
        tracing::info!(post_id = post.id, category_id = category.id, "Post created");
        Ok(post.into())
    }

    /// One zero-based page of posts ordered by `sort_by`.
    ///
    /// `sort_dir` selects descending order only when it equals `"desc"`
    /// ignoring case. A page past the end comes back empty with the real
    /// totals.
    pub async fn get_all_posts(
        &self,
        page_no: i64,
        page_size: i64,
        sort_by: &str,
        sort_dir: &str,
    ) -> ServiceResult<Page<PostDto>> {
        let field = PostSortField::parse(sort_by)?;
        let request = PageRequest::new(page_no, page_size, field, SortDirection::parse(sort_dir))?;

        let (posts, total) = self.posts.find_page(&request).await?;
        tracing::debug!(
            page_no,
            page_size,
            sort_by,
            returned = posts.len(),
            total,
            "Listed posts"
        );
        Ok(Page::new(posts, &request, total).map(PostDto::from))
    }

    pub async fn get_post_by_id(&self, id: DbId) -> ServiceResult<PostDto> {
        Ok(self.load_post(id).await?.into())
    }

    /// Replace the text fields and category of a post. The creation
    /// timestamp is kept.
    pub async fn update_post(&self, input: &PostInput, id: DbId) -> ServiceResult<PostDto> {
        let existing = self.load_post(id).await?;
        let category = self.load_category(input.category_id).await?;
        let updated = self
            .posts
            .update(&apply_update(existing, input, &category))
            .await?;
        tracing::info!(post_id = id, category_id = category.id, "Post updated");
        Ok(updated.into())
    }

    pub async fn delete_post_by_id(&self, id: DbId) -> ServiceResult<()> {
        let existing = self.load_post(id).await?;
        self.posts.delete(&existing).await?;
        tracing::info!(post_id = id, "Post deleted");
        Ok(())
    }

    /// All posts in a category, in store order.
    pub async fn get_posts_by_category(&self, category_id: DbId) -> ServiceResult<Vec<PostDto>> {
        let category = self.load_category(category_id).await?;
        let posts = self.posts.find_by_category_id(category.id).await?;
        tracing::debug!(category_id, count = posts.len(), "Listed posts by category");
        Ok(posts.into_iter().map(PostDto::from).collect())
    }

    async fn load_post(&self, id: DbId) -> ServiceResult<Post> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found("Post", id))?;
        Ok(post)
    }

    async fn load_category(&self, id: DbId) -> ServiceResult<Category> {
        let category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found("Category", id))?;
        Ok(category)
    }
}

/// Overwrite a stored post with new input and its resolved category.
fn apply_update(existing: Post, input: &PostInput, category: &Category) -> Post {
    Post {
        title: input.title.clone(),
        description: input.description.clone(),
        content: input.content.clone(),
        category_id: category.id,
        ..existing
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use quill_db::models::category::NewCategory;
    use quill_db::repositories::{MemoryCategoryStore, MemoryPostStore};

    use super::*;
    use crate::ServiceError;

    struct Fixture {
        svc: PostService,
        categories: Arc<MemoryCategoryStore>,
        posts: Arc<MemoryPostStore>,
    }

    fn fixture() -> Fixture {
        let categories = Arc::new(MemoryCategoryStore::new());
        let posts = Arc::new(MemoryPostStore::new());
        let svc = PostService::new(posts.clone(), categories.clone());
        Fixture {
            svc,
            categories,
            posts,
        }
    }

    async fn category(f: &Fixture, name: &str) -> DbId {
        f.categories
            .insert(NewCategory {
                name: name.to_string(),
                description: String::new(),
            })
            .await
            .unwrap()
            .id
    }

    fn input(title: &str, category_id: DbId) -> PostInput {
        PostInput {
            title: title.to_string(),
            description: format!("{title} description"),
            content: format!("{title} content"),
            category_id,
        }
    }

    // -- create --------------------------------------------------------------

    #[tokio::test]
    async fn create_attaches_category_and_timestamp() {
        let f = fixture();
        let cat = category(&f, "News").await;
        let before = Utc::now();

        let post = f.svc.create_post(&input("Hello", cat)).await.unwrap();

        assert_eq!(post.title, "Hello");
        assert_eq!(post.description, "Hello description");
        assert_eq!(post.content, "Hello content");
        assert_eq!(post.category_id, cat);
        assert!(post.created_at >= before);
    }

    #[tokio::test]
    async fn create_with_unknown_category_persists_nothing() {
        let f = fixture();
        let err = f.svc.create_post(&input("Lost", 404)).await.unwrap_err();

        assert_matches!(
            err,
            ServiceError::Core(CoreError::NotFound {
                entity: "Category",
                value: 404,
                ..
            })
        );
        assert_eq!(f.posts.calls(), 0);
    }

    // -- get -----------------------------------------------------------------

    #[tokio::test]
    async fn get_missing_post_is_not_found() {
        let f = fixture();
        let err = f.svc.get_post_by_id(1).await.unwrap_err();
        assert_matches!(
            err,
            ServiceError::Core(CoreError::NotFound { entity: "Post", .. })
        );
    }

    // -- pagination ----------------------------------------------------------

    #[tokio::test]
    async fn two_posts_fit_on_a_single_last_page() {
        let f = fixture();
        let cat = category(&f, "News").await;
        f.svc.create_post(&input("one", cat)).await.unwrap();
        f.svc.create_post(&input("two", cat)).await.unwrap();

        let page = f.svc.get_all_posts(0, 10, "id", "asc").await.unwrap();

        assert_eq!(page.content.len(), 2);
        assert_eq!(page.page_no, 0);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.total_elements, 2);
        assert_eq!(page.total_pages, 1);
        assert!(page.last);
    }

    #[tokio::test]
    async fn desc_in_any_case_sorts_descending() {
        let f = fixture();
        let cat = category(&f, "News").await;
        for title in ["b", "c", "a"] {
            f.svc.create_post(&input(title, cat)).await.unwrap();
        }

        let page = f.svc.get_all_posts(0, 10, "title", "DeSc").await.unwrap();
        let titles: Vec<_> = page.content.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn unknown_direction_sorts_ascending() {
        let f = fixture();
        let cat = category(&f, "News").await;
        for title in ["b", "c", "a"] {
            f.svc.create_post(&input(title, cat)).await.unwrap();
        }

        let page = f.svc.get_all_posts(0, 10, "title", "sideways").await.unwrap();
        let titles: Vec<_> = page.content.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn middle_page_is_not_last() {
        let f = fixture();
        let cat = category(&f, "News").await;
        for i in 0..5 {
            f.svc
                .create_post(&input(&format!("post {i}"), cat))
                .await
                .unwrap();
        }

        let page = f.svc.get_all_posts(1, 2, "id", "asc").await.unwrap();
        let ids: Vec<_> = page.content.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4]);
        assert_eq!(page.total_pages, 3);
        assert!(!page.last);

        let last = f.svc.get_all_posts(2, 2, "id", "asc").await.unwrap();
        assert!(last.last);
        assert_eq!(last.content.len(), 1);
    }

    #[tokio::test]
    async fn page_beyond_range_is_empty_with_totals() {
        let f = fixture();
        let cat = category(&f, "News").await;
        f.svc.create_post(&input("only", cat)).await.unwrap();

        let page = f.svc.get_all_posts(9, 10, "id", "asc").await.unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn invalid_page_parameters_are_rejected() {
        let f = fixture();
        let err = f.svc.get_all_posts(0, 0, "id", "asc").await.unwrap_err();
        assert_matches!(err, ServiceError::Core(CoreError::Validation(_)));

        let err = f.svc.get_all_posts(-1, 10, "id", "asc").await.unwrap_err();
        assert_matches!(err, ServiceError::Core(CoreError::Validation(_)));

        let err = f.svc.get_all_posts(0, 10, "rating", "asc").await.unwrap_err();
        assert_matches!(err, ServiceError::Core(CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn maximal_page_size_returns_everything_on_one_page() {
        let f = fixture();
        let cat = category(&f, "News").await;
        f.svc.create_post(&input("one", cat)).await.unwrap();
        f.svc.create_post(&input("two", cat)).await.unwrap();

        let page = f
            .svc
            .get_all_posts(0, i64::MAX, "id", "asc")
            .await
            .unwrap();
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.total_elements, 2);
        assert_eq!(page.total_pages, 1);
        assert!(page.last);

        let beyond = f
            .svc
            .get_all_posts(1, i64::MAX, "id", "asc")
            .await
            .unwrap();
        assert!(beyond.content.is_empty());
        assert!(beyond.last);
    }

    // -- update --------------------------------------------------------------

    #[tokio::test]
    async fn update_moves_category_and_keeps_timestamp() {
        let f = fixture();
        let first = category(&f, "First").await;
        let second = category(&f, "Second").await;
        let created = f.svc.create_post(&input("draft", first)).await.unwrap();

        let updated = f
            .svc
            .update_post(&input("final", second), created.id)
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "final");
        assert_eq!(updated.category_id, second);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_missing_post_is_reported_before_category() {
        let f = fixture();
        let err = f.svc.update_post(&input("x", 77), 1).await.unwrap_err();
        assert_matches!(
            err,
            ServiceError::Core(CoreError::NotFound { entity: "Post", .. })
        );
    }

    #[tokio::test]
    async fn update_to_unknown_category_is_not_found() {
        let f = fixture();
        let cat = category(&f, "News").await;
        let created = f.svc.create_post(&input("p", cat)).await.unwrap();

        let err = f
            .svc
            .update_post(&input("p", 404), created.id)
            .await
            .unwrap_err();
        assert_matches!(
            err,
            ServiceError::Core(CoreError::NotFound {
                entity: "Category",
                ..
            })
        );
        let unchanged = f.svc.get_post_by_id(created.id).await.unwrap();
        assert_eq!(unchanged.category_id, cat);
    }

    // -- delete --------------------------------------------------------------

    #[tokio::test]
    async fn deleted_post_is_gone() {
        let f = fixture();
        let cat = category(&f, "News").await;
        let created = f.svc.create_post(&input("bye", cat)).await.unwrap();

        f.svc.delete_post_by_id(created.id).await.unwrap();

        let err = f.svc.get_post_by_id(created.id).await.unwrap_err();
        assert_matches!(err, ServiceError::Core(CoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_missing_post_is_not_found() {
        let f = fixture();
        let err = f.svc.delete_post_by_id(3).await.unwrap_err();
        assert_matches!(err, ServiceError::Core(CoreError::NotFound { .. }));
    }

    // -- by category ---------------------------------------------------------

    #[tokio::test]
    async fn by_category_is_the_order_preserving_subset() {
        let f = fixture();
        let news = category(&f, "News").await;
        let tech = category(&f, "Tech").await;
        for (title, cat) in [("n1", news), ("t1", tech), ("n2", news), ("t2", tech)] {
            f.svc.create_post(&input(title, cat)).await.unwrap();
        }

        let all = f.posts.find_all().await.unwrap();
        let expected: Vec<_> = all
            .into_iter()
            .filter(|p| p.category_id == news)
            .map(PostDto::from)
            .collect();

        let found = f.svc.get_posts_by_category(news).await.unwrap();
        assert_eq!(found, expected);
        let titles: Vec<_> = found.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["n1", "n2"]);
    }

    #[tokio::test]
    async fn by_unknown_category_is_not_found() {
        let f = fixture();
        let err = f.svc.get_posts_by_category(8).await.unwrap_err();
        assert_matches!(
            err,
            ServiceError::Core(CoreError::NotFound {
                entity: "Category",
                ..
            })
        );
    }

    #[tokio::test]
    async fn empty_category_lists_nothing() {
        let f = fixture();
        let cat = category(&f, "Quiet").await;
        assert!(f.svc.get_posts_by_category(cat).await.unwrap().is_empty());
    }
}
