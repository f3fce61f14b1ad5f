//! Genres page: a table of every genre.

use library_client::{ClientResult, LibraryApi};
use library_core::Genre;

use super::{LoaderView, Page, PageContext, PageError};

/// View surface of the genres list page.
pub trait GenresListView: LoaderView {
    /// Replace the table body with one row per genre.
    fn render_genres(&mut self, genres: &[Genre]);
}

/// Controller for `/genres`.
pub struct GenresListPage<A, V> {
    ctx: PageContext<A>,
    view: V,
}

impl<A: LibraryApi, V: GenresListView> GenresListPage<A, V> {
    pub fn new(ctx: PageContext<A>, view: V) -> Self {
        Self { ctx, view }
    }
}

impl<A: LibraryApi, V: GenresListView> Page for GenresListPage<A, V> {
    type Data = Vec<Genre>;
    const NAME: &'static str = "genres-list";

    async fn fetch(&self) -> ClientResult<Self::Data> {
        self.ctx.api.fetch_genres().await
    }

    fn render(&mut self, genres: Self::Data) -> Result<(), PageError> {
        self.view.render_genres(&genres);
        Ok(())
    }

    fn loader(&mut self) -> &mut dyn LoaderView {
        &mut self.view
    }
}
