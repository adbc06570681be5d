//! # cloudui - Terminal Output for cloudctl
//!
//! Every byte cloudctl shows a user goes through a [`Ui`]. Commands never call
//! `println!` themselves; they hand templates, warnings and tables to the `Ui`,
//! which decides where they go and how they look.
//!
//! ## Streams
//!
//! A `Ui` owns two writers:
//! - **out**: regular output (flavor text, tables, identifiers, `OK`, `FAILED`)
//! - **err**: diagnostics (advisory warnings, error messages)
//!
//! Production code uses stdout/stderr. Tests build a `Ui` over two [`Buffer`]s
//! with [`Ui::new_test`] and assert on what was written to each.
//!
//! ## Templates
//!
//! User-facing strings are templates with named parameters, rendered with
//! [minijinja](https://docs.rs/minijinja):
//!
//! ```rust
//! use cloudui::{Theme, Ui};
//! use minijinja::context;
//!
//! let (mut ui, out, _err) = Ui::new_test(Theme::new());
//! ui.display_text("{{ count }}M memory limit", context! { count => 512 });
//! assert_eq!(out.contents(), "512M memory limit\n");
//! ```
//!
//! Parameters are substituted as values, never re-parsed as template source,
//! so user data containing `{{` is printed verbatim.
//!
//! ## Styles
//!
//! Styles are named `console::Style`s grouped in a [`Theme`]. The `Ui` looks
//! them up by the semantic names in [`names`]. Colour is detected from the
//! terminal via `console`; when it is off, styles are skipped but missing style
//! names are still flagged with [`DEFAULT_MISSING_STYLE_INDICATOR`] so typos
//! show up in plain-text test output too.

use console::{Style, Term};
use minijinja::{Environment, Value};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};
use unicode_width::UnicodeWidthStr;

/// Default prefix shown when a style name is not found.
pub const DEFAULT_MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Semantic style names used by [`Ui`].
pub mod names {
    pub const WARNING: &str = "warning";
    pub const OK: &str = "ok";
    pub const FAILED: &str = "failed";
    pub const FLAVOR: &str = "flavor";
    pub const KEY: &str = "key";
    pub const ERROR: &str = "error";
}

/// The theme cloudctl ships with.
pub static STANDARD_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::WARNING, Style::new().magenta().bold())
        .add(names::OK, Style::new().green().bold())
        .add(names::FAILED, Style::new().red().bold())
        .add(names::FLAVOR, Style::new().cyan().bold())
        .add(names::KEY, Style::new().bold())
        .add(names::ERROR, Style::new().red())
});

/// A collection of named styles.
///
/// When a style name is not found, a configurable indicator is prepended to the
/// text (defaults to `(!?)`).
///
/// ```rust
/// use cloudui::Styles;
/// use console::Style;
///
/// let styles = Styles::new().add("warning", Style::new().yellow());
/// let unknown = styles.apply("typo", "Hello");
/// assert!(unknown.starts_with("(!?)"));
/// ```
#[derive(Clone)]
pub struct Styles {
    styles: HashMap<String, Style>,
    missing_indicator: String,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            styles: HashMap::new(),
            missing_indicator: DEFAULT_MISSING_STYLE_INDICATOR.to_string(),
        }
    }
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indicator prepended when a style name is not found.
    /// An empty indicator disables the check.
    pub fn missing_indicator(mut self, indicator: &str) -> Self {
        self.missing_indicator = indicator.to_string();
        self
    }

    /// Adds a named style, replacing any existing style with the same name.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Applies a named style to text, with ANSI codes.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).to_string(),
            None => self.flag_missing(text),
        }
    }

    /// Checks the style name but returns the text without ANSI codes.
    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.styles.contains_key(name) {
            text.to_string()
        } else {
            self.flag_missing(text)
        }
    }

    fn flag_missing(&self, text: &str) -> String {
        if self.missing_indicator.is_empty() {
            text.to_string()
        } else {
            format!("{} {}", self.missing_indicator, text)
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// A named collection of styles used by a [`Ui`].
#[derive(Clone, Default)]
pub struct Theme {
    styles: Styles,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, returning the updated theme for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles = self.styles.add(name, style);
        self
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }
}

/// A cloneable in-memory writer. All clones share the same bytes.
#[derive(Clone, Default)]
pub struct Buffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Buffer").field(&self.contents()).finish()
    }
}

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Write-only user interface over an output and a diagnostic stream.
///
/// Write failures on either stream are ignored: there is nowhere left to
/// report them.
pub struct Ui {
    out: Box<dyn Write>,
    err: Box<dyn Write>,
    styles: Styles,
    use_color: bool,
    env: Environment<'static>,
}

impl Ui {
    /// A `Ui` over stdout/stderr with automatic colour detection.
    pub fn new(theme: Theme) -> Self {
        let use_color = Term::stdout().features().colors_supported();
        Self::with_writers(
            Box::new(io::stdout()),
            Box::new(io::stderr()),
            theme,
            use_color,
        )
    }

    /// A `Ui` over arbitrary writers with explicit colour control.
    pub fn with_writers(
        out: Box<dyn Write>,
        err: Box<dyn Write>,
        theme: Theme,
        use_color: bool,
    ) -> Self {
        Self {
            out,
            err,
            styles: theme.styles,
            use_color,
            env: Environment::new(),
        }
    }

    /// A colourless `Ui` writing into two buffers, returned alongside it as
    /// `(ui, out, err)`.
    pub fn new_test(theme: Theme) -> (Self, Buffer, Buffer) {
        let out = Buffer::new();
        let err = Buffer::new();
        let ui = Self::with_writers(Box::new(out.clone()), Box::new(err.clone()), theme, false);
        (ui, out, err)
    }

    /// Substitutes `ctx` into `template`.
    ///
    /// A template that fails to render is returned untranslated.
    pub fn translate_text<S: Serialize>(&self, template: &str, ctx: S) -> String {
        self.env
            .render_str(template, ctx)
            .unwrap_or_else(|_| template.to_string())
    }

    pub fn display_text<S: Serialize>(&mut self, template: &str, ctx: S) {
        let text = self.translate_text(template, ctx);
        write_line(&mut self.out, &text);
    }

    /// Like [`Ui::display_text`], but every substituted value is styled as
    /// flavor.
    pub fn display_text_with_flavor<S: Serialize>(&mut self, template: &str, ctx: S) {
        let values = Value::from_serialize(&ctx);
        let mut flavored = BTreeMap::new();
        if let Ok(keys) = values.try_iter() {
            for key in keys {
                if let Ok(value) = values.get_item(&key) {
                    flavored.insert(key.to_string(), self.style(names::FLAVOR, &value.to_string()));
                }
            }
        }
        let text = self.translate_text(template, &flavored);
        write_line(&mut self.out, &text);
    }

    pub fn display_newline(&mut self) {
        write_line(&mut self.out, "");
    }

    /// Writes each warning on its own line to the diagnostic stream.
    pub fn display_warnings<W: AsRef<str>>(&mut self, warnings: &[W]) {
        for warning in warnings {
            let text = self.style(names::WARNING, warning.as_ref());
            write_line(&mut self.err, &text);
        }
    }

    /// Writes rows as aligned columns separated by at least `padding` spaces.
    ///
    /// The first column is styled as a key; the last column is never padded.
    pub fn display_table<R: AsRef<[String]>>(&mut self, prefix: &str, rows: &[R], padding: usize) {
        let mut widths: Vec<usize> = Vec::new();
        for row in rows {
            for (i, cell) in row.as_ref().iter().enumerate() {
                let width = cell.width();
                match widths.get_mut(i) {
                    Some(current) => *current = (*current).max(width),
                    None => widths.push(width),
                }
            }
        }

        for row in rows {
            let cells = row.as_ref();
            let mut line = String::from(prefix);
            for (i, cell) in cells.iter().enumerate() {
                let styled = if i == 0 {
                    self.style(names::KEY, cell)
                } else {
                    cell.clone()
                };
                line.push_str(&styled);
                if i + 1 < cells.len() {
                    let fill = widths[i].saturating_sub(cell.width()) + padding;
                    line.push_str(&" ".repeat(fill));
                }
            }
            write_line(&mut self.out, line.trim_end());
        }
    }

    /// The success marker.
    pub fn display_ok(&mut self) {
        let text = self.style(names::OK, "OK");
        write_line(&mut self.out, &text);
    }

    /// The error message goes to the diagnostic stream, the `FAILED` marker to
    /// the output stream.
    pub fn display_error(&mut self, error: &dyn std::error::Error) {
        let message = self.style(names::ERROR, &error.to_string());
        write_line(&mut self.err, &message);
        let marker = self.style(names::FAILED, "FAILED");
        write_line(&mut self.out, &marker);
    }

    fn style(&self, name: &str, text: &str) -> String {
        if self.use_color {
            self.styles.apply(name, text)
        } else {
            self.styles.apply_plain(name, text)
        }
    }
}

fn write_line(stream: &mut Box<dyn Write>, text: &str) {
    let _ = writeln!(stream, "{}", text);
    let _ = stream.flush();
}
