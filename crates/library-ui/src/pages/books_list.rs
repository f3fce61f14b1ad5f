//! Catalog page: every book with its author and genres.

use library_client::{ClientResult, LibraryApi};
use library_core::Book;

use super::{LoaderView, Page, PageContext, PageError};

/// View surface of the books list page.
pub trait BooksListView: LoaderView {
    /// Replace the table body with one row per book.
    fn render_books(&mut self, books: &[Book]);
}

/// Controller for `/` and `/books`.
pub struct BooksListPage<A, V> {
    ctx: PageContext<A>,
    view: V,
}

impl<A: LibraryApi, V: BooksListView> BooksListPage<A, V> {
    pub fn new(ctx: PageContext<A>, view: V) -> Self {
        Self { ctx, view }
    }
}

impl<A: LibraryApi, V: BooksListView> Page for BooksListPage<A, V> {
    type Data = Vec<Book>;
    const NAME: &'static str = "books-list";

    async fn fetch(&self) -> ClientResult<Self::Data> {
        self.ctx.api.fetch_books().await
    }

    fn render(&mut self, books: Self::Data) -> Result<(), PageError> {
        self.view.render_books(&books);
        Ok(())
    }

    fn loader(&mut self) -> &mut dyn LoaderView {
        &mut self.view
    }
}
