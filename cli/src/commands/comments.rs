//! ADD-COMMENT and DELETE-COMMENT commands.

use anyhow::Result;
use clap::Args;
use library_core::{BookId, CommentId};
use library_ui::pages::{BookEditPage, BookViewPage};

use super::{Session, finish};
use crate::terminal::{BookScreen, EditScreen};

/// Arguments for the add-comment command.
#[derive(Args)]
pub struct AddCommentArgs {
    /// Book to comment on
    pub book_id: BookId,

    /// Comment text
    pub text: String,
}

/// Arguments for the delete-comment command.
#[derive(Args)]
pub struct DeleteCommentArgs {
    /// Book the comment belongs to
    pub book_id: BookId,

    /// Comment ID to delete
    pub comment_id: CommentId,

    /// Skip confirmation prompt (for non-interactive use)
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Execute the add-comment command.
pub async fn add(session: &Session, args: AddCommentArgs) -> Result<()> {
    let mut page = BookViewPage::new(
        session.ctx.clone(),
        BookScreen::default().quiet(),
        Some(args.book_id),
    );
    session.load(&mut page).await?;

    page.view_mut().form.text = args.text;
    finish("add comment", page.add_comment().await)
}

/// Execute the delete-comment command.
pub async fn delete(session: &Session, args: DeleteCommentArgs) -> Result<()> {
    let mut page = BookEditPage::new(
        session.ctx.clone(),
        EditScreen::new(args.yes).quiet(),
        Some(args.book_id),
    );
    session.load(&mut page).await?;

    finish("delete comment", page.delete_comment(args.comment_id).await)
}
