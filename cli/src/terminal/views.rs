//! Terminal implementations of the page view traits.

use colored::Colorize;
use library_core::{Author, Book, Comment, CommentId, FieldError, Genre};
use library_ui::pages::{
    AuthorsListView, BookEditMode, BookEditView, BookViewView, BooksListView, GenresListView,
    Handler, LoaderView,
};
use library_ui::{BookForm, CommentForm, Route};

use super::{Screen, confirm};

macro_rules! screen_loader {
    ($($view:ty),+ $(,)?) => {$(
        impl LoaderView for $view {
            fn set_progress(&mut self, percent: u8) {
                self.screen.set_progress(percent);
            }

            fn hide_loader(&mut self) {
                self.screen.hide_loader();
            }

            fn reveal_content(&mut self) {
                self.screen.reveal_content();
            }
        }
    )+};
}

screen_loader!(ListScreen, BookScreen, EditScreen);

fn genre_names(genres: &[Genre]) -> String {
    genres
        .iter()
        .map(|g| g.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn report_violations(violations: &[FieldError]) {
    for violation in violations {
        eprintln!("{} {}", "invalid:".red().bold(), violation);
    }
}

fn comment_line(comment: &Comment) -> String {
    format!("  {} {}", format!("#{}", comment.id).cyan(), comment.text)
}

// ============================================================================
// List pages
// ============================================================================

/// Table output for the books, authors and genres pages.
#[derive(Debug, Default)]
pub struct ListScreen {
    screen: Screen,
}

impl BooksListView for ListScreen {
    fn render_books(&mut self, books: &[Book]) {
        self.screen.line(
            format!("{:>5}  {:<40} {:<28} {}", "ID", "Title", "Author", "Genres")
                .bold()
                .to_string(),
        );
        for book in books {
            self.screen.line(format!(
                "{:>5}  {:<40} {:<28} {}",
                book.id.get(),
                book.title,
                book.author_name().unwrap_or("—"),
                genre_names(&book.genres).dimmed()
            ));
        }
    }
}

impl AuthorsListView for ListScreen {
    fn render_authors(&mut self, authors: &[Author]) {
        self.screen
            .line(format!("{:>5}  {}", "ID", "Full name").bold().to_string());
        for author in authors {
            self.screen
                .line(format!("{:>5}  {}", author.id.get(), author.full_name));
        }
    }
}

impl GenresListView for ListScreen {
    fn render_genres(&mut self, genres: &[Genre]) {
        self.screen
            .line(format!("{:>5}  {}", "ID", "Name").bold().to_string());
        for genre in genres {
            self.screen.line(format!("{:>5}  {}", genre.id.get(), genre.name));
        }
    }
}

// ============================================================================
// Book page
// ============================================================================

/// Book details with its comments.
#[derive(Debug, Default)]
pub struct BookScreen {
    screen: Screen,
    pub form: CommentForm,
}

impl BookScreen {
    pub fn quiet(mut self) -> Self {
        self.screen = self.screen.quiet();
        self
    }
}

impl BookViewView for BookScreen {
    fn render_book(&mut self, book: &Book) {
        self.screen.line(book.title.bold().to_string());
        if let Some(author) = book.author_name() {
            self.screen.line(format!("  {}", author.italic()));
        }
        if !book.genres.is_empty() {
            let badges: Vec<String> = book.genres.iter().map(|g| format!("[{}]", g.name)).collect();
            self.screen.line(format!("  {}", badges.join(" ").cyan()));
        }
        self.screen
            .line(format!("  {}", Route::BookEdit(book.id).to_string().dimmed()));
        self.screen.line("");
    }

    fn render_comments(&mut self, comments: &[Comment]) {
        for comment in comments {
            self.screen.line(comment_line(comment));
        }
    }

    fn set_comments_empty(&mut self, empty: bool, label: &str) {
        if empty {
            self.screen.line(format!("  {}", label.dimmed()));
        }
    }

    fn append_comment(&mut self, comment: &Comment) {
        self.screen.line(comment_line(comment));
    }

    fn wire(&mut self, handler: Handler) {
        tracing::trace!(?handler, "handler wired");
    }

    fn comment_form(&self) -> CommentForm {
        self.form.clone()
    }

    fn report_validity(&mut self, violations: &[FieldError]) {
        report_violations(violations);
    }

    fn reset_comment_form(&mut self) {
        self.form = CommentForm::default();
    }
}

// ============================================================================
// Book edit page
// ============================================================================

/// Book form with its author and genre choices.
#[derive(Debug, Default)]
pub struct EditScreen {
    screen: Screen,
    assume_yes: bool,
    pub form: BookForm,
}

impl EditScreen {
    /// `assume_yes` answers every confirmation prompt without asking.
    pub fn new(assume_yes: bool) -> Self {
        Self {
            assume_yes,
            ..Self::default()
        }
    }

    pub fn quiet(mut self) -> Self {
        self.screen = self.screen.quiet();
        self
    }
}

impl BookEditView for EditScreen {
    fn render_authors(&mut self, authors: &[Author], placeholder: &str) {
        self.screen.line("Authors".bold().to_string());
        self.screen.line(format!("{:>5}  {}", "-", placeholder.dimmed()));
        for author in authors {
            self.screen
                .line(format!("{:>5}  {}", author.id.get(), author.full_name));
        }
    }

    fn render_genres(&mut self, genres: &[Genre]) {
        self.screen.line("Genres".bold().to_string());
        for genre in genres {
            self.screen.line(format!("{:>5}  {}", genre.id.get(), genre.name));
        }
    }

    fn render_header(&mut self, title: &str, breadcrumb: &str, save_label: &str) {
        self.screen.line("");
        self.screen.line(title.bold().to_string());
        self.screen
            .line(format!("{} / {}  [{}]", "Books".dimmed(), breadcrumb, save_label));
    }

    fn fill_form(&mut self, book: &Book) {
        self.form = BookForm::from_book(book);
        self.screen.line(format!("  title:   {}", book.title));
        self.screen.line(format!(
            "  author:  {}",
            book.author_name().unwrap_or("—")
        ));
        self.screen
            .line(format!("  genres:  {}", genre_names(&book.genres)));
    }

    fn set_mode(&mut self, mode: BookEditMode) {
        if let BookEditMode::Edit(id) = mode {
            self.screen
                .line(format!("  {}", Route::BookView(id).to_string().dimmed()));
        }
    }

    fn render_comments(&mut self, comments: &[Comment]) {
        self.screen.line("");
        for comment in comments {
            self.screen.line(comment_line(comment));
        }
    }

    fn hide_comments(&mut self) {}

    fn remove_comment(&mut self, comment_id: CommentId) {
        tracing::debug!(%comment_id, "comment removed from view");
    }

    fn wire(&mut self, handler: Handler) {
        tracing::trace!(?handler, "handler wired");
    }

    fn book_form(&self) -> BookForm {
        self.form.clone()
    }

    fn report_validity(&mut self, violations: &[FieldError]) {
        report_violations(violations);
    }

    fn confirm(&mut self, question: &str) -> bool {
        self.assume_yes || confirm(question)
    }

    fn navigate(&mut self, path: &str) {
        eprintln!("{} {}", "→".cyan(), path);
    }
}
