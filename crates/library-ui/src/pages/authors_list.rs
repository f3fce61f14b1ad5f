//! Authors page: a table of every author.

use library_client::{ClientResult, LibraryApi};
use library_core::Author;

use super::{LoaderView, Page, PageContext, PageError};

/// View surface of the authors list page.
pub trait AuthorsListView: LoaderView {
    /// Replace the table body with one row per author.
    fn render_authors(&mut self, authors: &[Author]);
}

/// Controller for `/authors`.
pub struct AuthorsListPage<A, V> {
    ctx: PageContext<A>,
    view: V,
}

impl<A: LibraryApi, V: AuthorsListView> AuthorsListPage<A, V> {
    pub fn new(ctx: PageContext<A>, view: V) -> Self {
        Self { ctx, view }
    }
}

impl<A: LibraryApi, V: AuthorsListView> Page for AuthorsListPage<A, V> {
    type Data = Vec<Author>;
    const NAME: &'static str = "authors-list";

    async fn fetch(&self) -> ClientResult<Self::Data> {
        self.ctx.api.fetch_authors().await
    }

    fn render(&mut self, authors: Self::Data) -> Result<(), PageError> {
        self.view.render_authors(&authors);
        Ok(())
    }

    fn loader(&mut self) -> &mut dyn LoaderView {
        &mut self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::*;

    struct View(RecordingLoader);

    impl LoaderView for View {
        fn set_progress(&mut self, percent: u8) {
            self.0.set_progress(percent);
        }
        fn hide_loader(&mut self) {
            self.0.hide_loader();
        }
        fn reveal_content(&mut self) {
            self.0.reveal_content();
        }
    }

    impl AuthorsListView for View {
        fn render_authors(&mut self, authors: &[Author]) {
            for author in authors {
                self.0.journal.push(format!("row {} {}", author.id, author.full_name));
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_renders_authors_in_order() {
        let (ctx, api) = context(FakeApi::catalog());
        let journal = Journal::default();
        let mut page = AuthorsListPage::new(ctx.clone(), View(RecordingLoader::new(journal.clone())));

        let load = loader_for(&ctx).run(&mut page).await;

        assert!(load.is_ok());
        assert_eq!(journal.renders(), ["row 1 Frank Herbert", "row 2 Stanislaw Lem"]);
        assert_eq!(api.calls(), ["fetch_authors"]);
    }
}
