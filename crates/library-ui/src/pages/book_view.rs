//! Book page: details, comments, and the add-comment form.

use library_client::{ClientResult, LibraryApi};
use library_core::{Book, BookId, Comment, FieldError, NewComment};

use super::{ActionOutcome, Handler, LoaderView, Page, PageContext, PageError};
use crate::forms::CommentForm;
use crate::i18n::MessageKey;

/// View surface of the book page.
pub trait BookViewView: LoaderView {
    /// Title, author, genre badges and the edit link.
    fn render_book(&mut self, book: &Book);

    /// Replace the comment list.
    fn render_comments(&mut self, comments: &[Comment]);

    /// Show or hide the "no comments" marker.
    fn set_comments_empty(&mut self, empty: bool, label: &str);

    /// Append one comment element to the list.
    fn append_comment(&mut self, comment: &Comment);

    /// Attach a handler to its control.
    fn wire(&mut self, handler: Handler);

    /// Current contents of the comment form.
    fn comment_form(&self) -> CommentForm;

    /// Show constraint failures next to their inputs.
    fn report_validity(&mut self, violations: &[FieldError]);

    /// Clear the comment form.
    fn reset_comment_form(&mut self);
}

/// Controller for `/books/{id}`.
pub struct BookViewPage<A, V> {
    ctx: PageContext<A>,
    view: V,
    book_id: Option<BookId>,
    wired: Vec<Handler>,
}

impl<A: LibraryApi, V: BookViewView> BookViewPage<A, V> {
    pub fn new(ctx: PageContext<A>, view: V, book_id: Option<BookId>) -> Self {
        Self {
            ctx,
            view,
            book_id,
            wired: Vec::new(),
        }
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Submit the comment form.
    pub async fn add_comment(&mut self) -> ActionOutcome {
        if !self.wired.contains(&Handler::AddComment) {
            return ActionOutcome::Unavailable;
        }
        let Some(book_id) = self.book_id else {
            return ActionOutcome::Unavailable;
        };

        let form = self.view.comment_form();
        if let Err(violations) = form.check_validity(&self.ctx.messages) {
            self.view.report_validity(&violations);
            return ActionOutcome::Invalid;
        }

        let request = NewComment {
            book_id,
            text: form.text.trim().to_string(),
        };
        match self.ctx.api.add_comment(&request).await {
            Ok(response) => {
                let fallback = response
                    .data
                    .as_ref()
                    .map(|c| {
                        self.ctx
                            .messages
                            .format(MessageKey::ApiResponseOkSaveComment, &[&c.id])
                    })
                    .unwrap_or_default();
                self.ctx.notifier.success(response.message_or(fallback));

                if let Some(comment) = &response.data {
                    self.view.append_comment(comment);
                    self.view
                        .set_comments_empty(false, &self.ctx.messages.get(MessageKey::CommentsEmpty));
                }
                self.view.reset_comment_form();
                ActionOutcome::Completed
            }
            Err(e) => {
                self.ctx.report_failure("add comment", &e);
                ActionOutcome::Failed
            }
        }
    }
}

impl<A: LibraryApi, V: BookViewView> Page for BookViewPage<A, V> {
    type Data = (Option<Book>, Vec<Comment>);
    const NAME: &'static str = "book-view";

    async fn fetch(&self) -> ClientResult<Self::Data> {
        let api = &*self.ctx.api;
        tokio::try_join!(api.fetch_book(self.book_id), api.fetch_comments(self.book_id))
    }

    fn render(&mut self, (book, comments): Self::Data) -> Result<(), PageError> {
        let book =
            book.ok_or_else(|| PageError::Render(self.ctx.messages.get(MessageKey::BookNotFound)))?;

        self.view.render_book(&book);
        self.view.set_progress(70);

        self.view.render_comments(&comments);
        self.view
            .set_comments_empty(comments.is_empty(), &self.ctx.messages.get(MessageKey::CommentsEmpty));
        self.view.set_progress(80);

        self.view.wire(Handler::AddComment);
        self.wired.push(Handler::AddComment);
        Ok(())
    }

    fn loader(&mut self) -> &mut dyn LoaderView {
        &mut self.view
    }
}
