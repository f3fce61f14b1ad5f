//! OPEN command - Load and render a page.

use anyhow::{Result, bail};
use clap::Args;
use library_ui::Route;
use library_ui::pages::{
    AuthorsListPage, BookEditPage, BookViewPage, BooksListPage, GenresListPage,
};

use super::Session;
use crate::terminal::{BookScreen, EditScreen, ListScreen};

/// Arguments for the open command.
#[derive(Args)]
pub struct OpenArgs {
    /// Page path, e.g. `/`, `/books/5`, `/books/5/edit`, `/authors`
    #[arg(default_value = "/")]
    pub path: String,
}

/// Execute the open command.
pub async fn execute(session: &Session, args: OpenArgs) -> Result<()> {
    let route = Route::parse(&args.path);
    tracing::debug!(path = %args.path, ?route, "opening page");

    let ctx = session.ctx.clone();
    match route {
        Route::BooksList => {
            let mut page = BooksListPage::new(ctx, ListScreen::default());
            session.load(&mut page).await
        }
        Route::AuthorsList => {
            let mut page = AuthorsListPage::new(ctx, ListScreen::default());
            session.load(&mut page).await
        }
        Route::GenresList => {
            let mut page = GenresListPage::new(ctx, ListScreen::default());
            session.load(&mut page).await
        }
        Route::BookView(id) => {
            let mut page = BookViewPage::new(ctx, BookScreen::default(), Some(id));
            session.load(&mut page).await
        }
        Route::BookCreate | Route::BookEdit(_) => {
            let view = EditScreen::new(false);
            let mut page = BookEditPage::new(ctx, view, route.book_id());
            session.load(&mut page).await
        }
        Route::NotFound => bail!("no page at {}", args.path),
    }
}
