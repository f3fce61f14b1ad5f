//! Book edit page, in create mode (`/books/new`) or edit mode
//! (`/books/{id}/edit`).
//!
//! Whether a book ID is present is the only branching state: it decides
//! the titles, which handlers get wired, and whether save creates or
//! updates.

use library_client::{ClientResult, LibraryApi};
use library_core::{Author, Book, BookId, Comment, CommentId, FieldError, Genre};

use super::{ActionOutcome, Handler, LoaderView, Page, PageContext, PageError};
use crate::forms::BookForm;
use crate::i18n::MessageKey;

/// Which form the page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookEditMode {
    Create,
    Edit(BookId),
}

impl BookEditMode {
    pub fn from_book_id(book_id: Option<BookId>) -> Self {
        match book_id {
            Some(id) => Self::Edit(id),
            None => Self::Create,
        }
    }

    pub fn book_id(self) -> Option<BookId> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(id),
        }
    }
}

/// View surface of the book edit page.
pub trait BookEditView: LoaderView {
    /// Fill the author selector; `placeholder` is the first, unselectable option.
    fn render_authors(&mut self, authors: &[Author], placeholder: &str);

    /// Fill the multi-select genre list.
    fn render_genres(&mut self, genres: &[Genre]);

    /// Page title, breadcrumb, and save button label.
    fn render_header(&mut self, title: &str, breadcrumb: &str, save_label: &str);

    /// Load an existing book into the form and select its author and genres.
    fn fill_form(&mut self, book: &Book);

    /// Show the controls that only make sense for the given mode.
    fn set_mode(&mut self, mode: BookEditMode);

    /// Replace the comment list.
    fn render_comments(&mut self, comments: &[Comment]);

    /// Hide the whole comments section.
    fn hide_comments(&mut self);

    /// Drop one comment element.
    fn remove_comment(&mut self, comment_id: CommentId);

    /// Attach a handler to its control.
    fn wire(&mut self, handler: Handler);

    /// Current contents of the book form.
    fn book_form(&self) -> BookForm;

    /// Show constraint failures next to their inputs.
    fn report_validity(&mut self, violations: &[FieldError]);

    /// Blocking yes/no prompt.
    fn confirm(&mut self, question: &str) -> bool;

    /// Leave the page for `path`.
    fn navigate(&mut self, path: &str);
}

/// Controller for the book edit page.
pub struct BookEditPage<A, V> {
    ctx: PageContext<A>,
    view: V,
    mode: BookEditMode,
    wired: Vec<Handler>,
}

impl<A: LibraryApi, V: BookEditView> BookEditPage<A, V> {
    pub fn new(ctx: PageContext<A>, view: V, book_id: Option<BookId>) -> Self {
        Self {
            ctx,
            view,
            mode: BookEditMode::from_book_id(book_id),
            wired: Vec::new(),
        }
    }

    pub fn mode(&self) -> BookEditMode {
        self.mode
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    fn is_wired(&self, handler: Handler) -> bool {
        self.wired.contains(&handler)
    }

    /// Click on the save button: creates or updates depending on the mode.
    pub async fn submit(&mut self) -> ActionOutcome {
        match self.mode {
            BookEditMode::Create => self.add_book().await,
            BookEditMode::Edit(_) => self.save_book().await,
        }
    }

    fn validated_form(&mut self) -> Option<BookForm> {
        let form = self.view.book_form();
        match form.check_validity(&self.ctx.messages) {
            Ok(()) => Some(form),
            Err(violations) => {
                self.view.report_validity(&violations);
                None
            }
        }
    }

    async fn add_book(&mut self) -> ActionOutcome {
        if !self.is_wired(Handler::AddBook) {
            return ActionOutcome::Unavailable;
        }
        let Some(request) = self.validated_form().and_then(|f| f.to_create()) else {
            return ActionOutcome::Invalid;
        };

        match self.ctx.api.add_book(&request).await {
            Ok(response) => {
                let Some(book) = response.data else {
                    // Created, but the response does not say as what.
                    self.ctx.notifier.success(
                        response.message_or(self.ctx.messages.get(MessageKey::ApiResponseOkAddBook)),
                    );
                    self.view.navigate("/");
                    return ActionOutcome::Completed;
                };
                self.ctx.notifier.success(
                    self.ctx
                        .messages
                        .format(MessageKey::ApiResponseOkSaveBook, &[&book.id]),
                );
                self.view.navigate(&format!("/books/{}", book.id));
                ActionOutcome::Completed
            }
            Err(e) => {
                self.ctx.report_failure("add book", &e);
                ActionOutcome::Failed
            }
        }
    }

    async fn save_book(&mut self) -> ActionOutcome {
        if !self.is_wired(Handler::SaveBook) {
            return ActionOutcome::Unavailable;
        }
        let Some(mut form) = self.validated_form() else {
            return ActionOutcome::Invalid;
        };
        // The hidden ID input always carries the page's book.
        form.id = self.mode.book_id();
        let Some(request) = form.to_update() else {
            return ActionOutcome::Invalid;
        };

        match self.ctx.api.save_book(&request).await {
            Ok(response) => {
                let id = response.data.as_ref().map_or(request.id, |b| b.id);
                self.ctx.notifier.success(
                    self.ctx
                        .messages
                        .format(MessageKey::ApiResponseOkSaveBook, &[&id]),
                );
                ActionOutcome::Completed
            }
            Err(e) => {
                self.ctx.report_failure("save book", &e);
                ActionOutcome::Failed
            }
        }
    }

    /// Click on the delete button, after confirmation.
    pub async fn delete_book(&mut self) -> ActionOutcome {
        if !self.is_wired(Handler::DeleteBook) {
            return ActionOutcome::Unavailable;
        }
        let book_id = self.mode.book_id();
        if !self
            .view
            .confirm(&self.ctx.messages.get(MessageKey::ConfirmDelete))
        {
            return ActionOutcome::Declined;
        }

        match self.ctx.api.delete_book(book_id).await {
            Ok(_) => {
                let id = book_id.map(|id| id.to_string()).unwrap_or_default();
                self.ctx.notifier.success(
                    self.ctx
                        .messages
                        .format(MessageKey::ApiResponseOkDeleteBook, &[&id]),
                );
                self.view.navigate("/");
                ActionOutcome::Completed
            }
            Err(e) => {
                self.ctx.report_failure("delete book", &e);
                ActionOutcome::Failed
            }
        }
    }

    /// Click on a comment's delete button, after confirmation.
    pub async fn delete_comment(&mut self, comment_id: CommentId) -> ActionOutcome {
        if !self.is_wired(Handler::DeleteComment) {
            return ActionOutcome::Unavailable;
        }
        let BookEditMode::Edit(book_id) = self.mode else {
            return ActionOutcome::Unavailable;
        };
        if !self
            .view
            .confirm(&self.ctx.messages.get(MessageKey::ConfirmDeleteComment))
        {
            return ActionOutcome::Declined;
        }

        match self.ctx.api.delete_comment(book_id, comment_id).await {
            Ok(_) => {
                self.view.remove_comment(comment_id);
                self.ctx.notifier.success(
                    self.ctx
                        .messages
                        .format(MessageKey::ApiResponseOkDeleteComment, &[&comment_id]),
                );
                ActionOutcome::Completed
            }
            Err(e) => {
                self.ctx.report_failure("delete comment", &e);
                ActionOutcome::Failed
            }
        }
    }

    fn render_book(&mut self, book: Option<&Book>) {
        let messages = self.ctx.messages;
        match book {
            Some(book) => {
                let title = format!("{} | {}", book.title, messages.get(MessageKey::PageTitleEdit));
                self.view.render_header(
                    &title,
                    &messages.get(MessageKey::BreadcrumbEdit),
                    &messages.get(MessageKey::ButtonSave),
                );
                self.view.fill_form(book);
            }
            None => {
                self.view.render_header(
                    &messages.get(MessageKey::PageTitleNewBook),
                    &messages.get(MessageKey::BreadcrumbNew),
                    &messages.get(MessageKey::ButtonAdd),
                );
            }
        }
        self.view.set_mode(self.mode);
    }

    fn wire_handlers(&mut self) {
        let handlers: &[Handler] = match self.mode {
            BookEditMode::Create => &[Handler::AddBook],
            BookEditMode::Edit(_) => &[
                Handler::SaveBook,
                Handler::DeleteBook,
                Handler::DeleteComment,
            ],
        };
        for &handler in handlers {
            self.view.wire(handler);
            self.wired.push(handler);
        }
    }
}

/// Data joined before the edit page renders.
#[derive(Debug)]
pub struct BookEditData {
    pub book: Option<Book>,
    pub comments: Vec<Comment>,
    pub authors: Vec<Author>,
    pub genres: Vec<Genre>,
}

impl<A: LibraryApi, V: BookEditView> Page for BookEditPage<A, V> {
    type Data = BookEditData;
    const NAME: &'static str = "book-edit";

    async fn fetch(&self) -> ClientResult<Self::Data> {
        let api = &*self.ctx.api;
        let book_id = self.mode.book_id();
        let (book, comments, authors, genres) = tokio::try_join!(
            api.fetch_book(book_id),
            api.fetch_comments(book_id),
            api.fetch_authors(),
            api.fetch_genres(),
        )?;
        Ok(BookEditData {
            book,
            comments,
            authors,
            genres,
        })
    }

    fn render(&mut self, data: Self::Data) -> Result<(), PageError> {
        if matches!(self.mode, BookEditMode::Edit(_)) && data.book.is_none() {
            return Err(PageError::Render(
                self.ctx.messages.get(MessageKey::BookNotFound),
            ));
        }

        self.view.render_authors(
            &data.authors,
            &self.ctx.messages.get(MessageKey::AuthorPlaceholder),
        );
        self.view.set_progress(70);

        self.view.render_genres(&data.genres);
        self.view.set_progress(80);

        self.render_book(data.book.as_ref());
        self.view.set_progress(90);

        if data.comments.is_empty() {
            self.view.hide_comments();
        } else {
            self.view.render_comments(&data.comments);
        }

        self.wire_handlers();
        Ok(())
    }

    fn loader(&mut self) -> &mut dyn LoaderView {
        &mut self.view
    }
}
