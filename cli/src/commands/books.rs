//! ADD-BOOK, SAVE-BOOK and DELETE-BOOK commands.
//!
//! Each one opens the book edit page the way a user would, fills the form,
//! and triggers the page's handler.

use anyhow::Result;
use clap::Args;
use library_core::{AuthorId, BookId, GenreId};
use library_ui::pages::BookEditPage;

use super::{Session, finish};
use crate::terminal::EditScreen;

/// Arguments for the add-book command.
#[derive(Args)]
pub struct AddBookArgs {
    /// Book title
    #[arg(long, short = 't')]
    pub title: String,

    /// Author ID
    #[arg(long, short = 'a')]
    pub author: AuthorId,

    /// Genre ID (repeat for several genres)
    #[arg(long = "genre", short = 'g')]
    pub genres: Vec<GenreId>,
}

/// Arguments for the save-book command.
#[derive(Args)]
pub struct SaveBookArgs {
    /// Book ID to update
    pub book_id: BookId,

    /// New title
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// New author ID
    #[arg(long, short = 'a')]
    pub author: Option<AuthorId>,

    /// Replacement genre IDs (repeat for several genres)
    #[arg(long = "genre", short = 'g')]
    pub genres: Vec<GenreId>,
}

/// Arguments for the delete-book command.
#[derive(Args)]
pub struct DeleteBookArgs {
    /// Book ID to delete
    pub book_id: BookId,

    /// Skip confirmation prompt (for non-interactive use)
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Execute the add-book command.
pub async fn add(session: &Session, args: AddBookArgs) -> Result<()> {
    let mut page = BookEditPage::new(session.ctx.clone(), EditScreen::new(false).quiet(), None);
    session.load(&mut page).await?;

    let form = &mut page.view_mut().form;
    form.title = args.title;
    form.author_id = Some(args.author);
    form.genre_ids = args.genres;

    finish("add book", page.submit().await)
}

/// Execute the save-book command. Fields not given keep their current value.
pub async fn save(session: &Session, args: SaveBookArgs) -> Result<()> {
    let mut page = BookEditPage::new(
        session.ctx.clone(),
        EditScreen::new(false).quiet(),
        Some(args.book_id),
    );
    session.load(&mut page).await?;

    let form = &mut page.view_mut().form;
    if let Some(title) = args.title {
        form.title = title;
    }
    if let Some(author) = args.author {
        form.author_id = Some(author);
    }
    if !args.genres.is_empty() {
        form.genre_ids = args.genres;
    }

    finish("save book", page.submit().await)
}

/// Execute the delete-book command.
pub async fn delete(session: &Session, args: DeleteBookArgs) -> Result<()> {
    let mut page = BookEditPage::new(
        session.ctx.clone(),
        EditScreen::new(args.yes).quiet(),
        Some(args.book_id),
    );
    session.load(&mut page).await?;

    finish("delete book", page.delete_book().await)
}
