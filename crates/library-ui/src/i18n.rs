//! Localized UI strings.
//!
//! Templates use `{0}`, `{1}`, ... positional placeholders, the same
//! convention the backend's message bundles use.

use std::fmt;
use std::str::FromStr;

/// Supported UI languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    /// The locale tag (`en`, `ru`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            "ru" | "ru-ru" => Ok(Self::Ru),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

/// A locale tag with no bundled translations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: {0}")]
pub struct UnknownLocale(pub String);

/// Keys of every localized string the pages display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    LoadData,
    PageTitleNewBook,
    PageTitleEdit,
    BreadcrumbNew,
    BreadcrumbEdit,
    ButtonSave,
    ButtonAdd,
    ConfirmDelete,
    ConfirmDeleteComment,
    ApiResponseOkAddBook,
    ApiResponseOkSaveBook,
    ApiResponseOkDeleteBook,
    ApiResponseOkSaveComment,
    ApiResponseOkDeleteComment,
    AuthorPlaceholder,
    CommentHeader,
    CommentsEmpty,
    BookNotFound,
    ValidationTitleRequired,
    ValidationTitleSize,
    ValidationAuthorRequired,
    ValidationGenresRequired,
    ValidationCommentRequired,
    ValidationCommentSize,
}

fn english(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        LoadData => "Failed to load page data. Please try again later.",
        PageTitleNewBook => "New book",
        PageTitleEdit => "Edit",
        BreadcrumbNew => "New",
        BreadcrumbEdit => "Edit",
        ButtonSave => "Save",
        ButtonAdd => "Add",
        ConfirmDelete => "Delete this book?",
        ConfirmDeleteComment => "Delete this comment?",
        ApiResponseOkAddBook => "Book added",
        ApiResponseOkSaveBook => "Book {0} saved",
        ApiResponseOkDeleteBook => "Book {0} deleted",
        ApiResponseOkSaveComment => "Comment {0} added",
        ApiResponseOkDeleteComment => "Comment {0} deleted",
        AuthorPlaceholder => "Select an author",
        CommentHeader => "Comment #{0}",
        CommentsEmpty => "No comments yet",
        BookNotFound => "Book not found",
        ValidationTitleRequired => "Title must not be blank",
        ValidationTitleSize => "Title must be at most {0} characters",
        ValidationAuthorRequired => "Select an author",
        ValidationGenresRequired => "Select at least one genre",
        ValidationCommentRequired => "Comment must not be blank",
        ValidationCommentSize => "Comment must be at most {0} characters",
    }
}

fn russian(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        LoadData => "Не удалось загрузить данные страницы. Попробуйте позже.",
        PageTitleNewBook => "Новая книга",
        PageTitleEdit => "Редактирование",
        BreadcrumbNew => "Новая",
        BreadcrumbEdit => "Редактирование",
        ButtonSave => "Сохранить",
        ButtonAdd => "Добавить",
        ConfirmDelete => "Удалить книгу?",
        ConfirmDeleteComment => "Удалить комментарий?",
        ApiResponseOkAddBook => "Книга добавлена",
        ApiResponseOkSaveBook => "Книга {0} сохранена",
        ApiResponseOkDeleteBook => "Книга {0} удалена",
        ApiResponseOkSaveComment => "Комментарий {0} добавлен",
        ApiResponseOkDeleteComment => "Комментарий {0} удалён",
        AuthorPlaceholder => "Выберите автора",
        CommentHeader => "Комментарий #{0}",
        CommentsEmpty => "Комментариев пока нет",
        BookNotFound => "Книга не найдена",
        ValidationTitleRequired => "Название не может быть пустым",
        ValidationTitleSize => "Название не длиннее {0} символов",
        ValidationAuthorRequired => "Выберите автора",
        ValidationGenresRequired => "Выберите хотя бы один жанр",
        ValidationCommentRequired => "Комментарий не может быть пустым",
        ValidationCommentSize => "Комментарий не длиннее {0} символов",
    }
}

/// Key to string lookup for one locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// The raw template for `key`.
    pub fn template(&self, key: MessageKey) -> &'static str {
        match self.locale {
            Locale::En => english(key),
            Locale::Ru => russian(key),
        }
    }

    /// The message for `key` with no arguments substituted.
    pub fn get(&self, key: MessageKey) -> String {
        self.template(key).to_string()
    }

    /// The message for `key` with `{n}` replaced by `args[n]`.
    pub fn format(&self, key: MessageKey, args: &[&dyn fmt::Display]) -> String {
        args.iter()
            .enumerate()
            .fold(self.get(key), |text, (i, arg)| {
                text.replace(&format!("{{{}}}", i), &arg.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("ru-RU".parse::<Locale>().unwrap(), Locale::Ru);
        assert_eq!(
            "de".parse::<Locale>().unwrap_err(),
            UnknownLocale("de".to_string())
        );
    }

    #[test]
    fn test_format_placeholders() {
        let en = Messages::new(Locale::En);
        assert_eq!(en.format(MessageKey::ApiResponseOkSaveBook, &[&11]), "Book 11 saved");
        assert_eq!(
            en.format(MessageKey::ValidationCommentSize, &[&500]),
            "Comment must be at most 500 characters"
        );
    }

    #[test]
    fn test_russian_bundle() {
        let ru = Messages::new(Locale::Ru);
        assert_eq!(ru.format(MessageKey::CommentHeader, &[&9]), "Комментарий #9");
    }

    #[test]
    fn test_missing_args_leave_placeholder() {
        let en = Messages::new(Locale::En);
        assert_eq!(en.get(MessageKey::ApiResponseOkDeleteBook), "Book {0} deleted");
    }
}
